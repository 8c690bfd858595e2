// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    /// Loads every bundle and picks the active locale.
    ///
    /// `.ftl` files in `i18n_dir` replace the embedded file of the same locale.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<PathBuf>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, String> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.insert(
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                );
            }
        }

        if let Some(dir) = i18n_dir.as_deref() {
            sources.extend(read_dir_sources(dir));
        }

        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            if let Some(bundle) = build_bundle(&locale, source) {
                bundles.insert(locale, bundle);
            }
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, filling `{ $name }` placeholders from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        let bundle = self
            .bundles
            .get(&self.current_locale)
            .or_else(|| self.bundles.get(&DEFAULT_LOCALE));
        if let Some(bundle) = bundle {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
                tracing::debug!(key, ?errors, "translation formatting failed");
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn read_dir_sources(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "cannot read translations directory");
            return Vec::new();
        }
    };

    entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name();
            let locale = locale_from_filename(name.to_str()?)?;
            let source = fs::read_to_string(entry.path()).ok()?;
            Some((locale, source))
        })
        .collect()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, ?errors, "skipping invalid translation file");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Plain text output; bidi isolation marks would show up in widgets.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "duplicate messages in translation file");
    }
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |lang: &str| {
        lang.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().as_deref().and_then(supported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn unsupported_cli_language_falls_through_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn embedded_bundles_are_available() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&langid!("en-US")));
        assert!(i18n.available_locales.contains(&langid!("fr")));
    }

    #[test]
    fn translates_in_selected_locale() {
        let i18n = I18n::new(Some("fr".into()), None, &Config::default());
        assert_eq!(i18n.current_locale(), &langid!("fr"));
        assert_eq!(i18n.tr("nav-portfolio"), "Portfolio");
        assert_eq!(i18n.tr("hero-cta-stories"), "Lire les récits");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn args_are_substituted() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(
            i18n.tr_with_args("carousel-go-to-slide", &[("number", "3")]),
            "Go to slide 3"
        );
    }

    #[test]
    fn directory_files_override_embedded_ones() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("en-US.ftl"), "nav-home = Start\n").expect("write ftl");

        let i18n = I18n::new(
            Some("en-US".into()),
            Some(dir.path().to_path_buf()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("nav-home"), "Start");
    }
}
