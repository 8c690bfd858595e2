// SPDX-License-Identifier: MPL-2.0
use adventures::config::{self, Config, GeneralConfig};
use adventures::error::ContentError;
use adventures::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("hero-cta-portfolio"), "View Portfolio");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

/// Every `{ $name }` placeholder used anywhere in `source`.
fn placeholder_names(source: &str) -> Vec<&str> {
    let mut names: Vec<&str> = source
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_once(' ').map(|(name, _)| name))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

fn message_ids(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with(' '))
        .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.trim()))
        .collect()
}

#[test]
fn test_every_english_key_has_a_french_translation() {
    let en = I18n::new(Some("en-US".to_string()), None, &Config::default());
    let fr = I18n::new(Some("fr".to_string()), None, &Config::default());
    assert_eq!(fr.current_locale().to_string(), "fr");

    let source = include_str!("../assets/i18n/en-US.ftl");
    let args: Vec<(&str, &str)> = placeholder_names(source)
        .into_iter()
        .map(|name| (name, "1"))
        .collect();
    assert!(args.iter().any(|(name, _)| *name == "number"));

    let keys = message_ids(source);
    assert!(keys.contains(&"carousel-go-to-slide"));
    assert!(keys.contains(&"content-error-decode"));

    for key in keys {
        assert!(
            !en.tr_with_args(key, &args).starts_with("MISSING"),
            "en-US lacks {key}"
        );
        assert!(
            !fr.tr_with_args(key, &args).starts_with("MISSING"),
            "fr lacks {key}"
        );
    }
}

#[test]
fn test_content_error_keys_are_translated() {
    let errors = [
        ContentError::NotConfigured,
        ContentError::Http("connection reset".into()),
        ContentError::Status(503),
        ContentError::Decode("expected value".into()),
    ];
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), None, &Config::default());
        for err in &errors {
            let text = i18n.tr(err.i18n_key());
            assert!(!text.starts_with("MISSING"), "{lang} lacks {}", err.i18n_key());
        }
    }
}
