// SPDX-License-Identifier: MPL-2.0
use adventures::app::{self, paths, Flags, Screen};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
Adventures - photography and adventure blog

USAGE:
    adventures [OPTIONS]

OPTIONS:
    --lang <LOCALE>        Interface language (e.g. en-US, fr)
    --i18n-dir <DIR>       Directory with .ftl files overriding the built-in ones
    --config-dir <DIR>     Directory holding settings.toml
    --asset-dir <DIR>      Directory that /images/... references resolve against
    --screen <NAME>        Startup screen: home, portfolio or about
    --telemetry            Log carousel and image view events
    -h, --help             Print this help

ENVIRONMENT:
    ADVENTURES_CONFIG_DIR  Same as --config-dir
    ADVENTURES_ASSET_DIR   Same as --asset-dir
    RUST_LOG               Log filter (default: info)
";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_flags() -> Result<Option<(Flags, Option<String>)>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let asset_dir: Option<String> = args.opt_value_from_str("--asset-dir")?;
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        screen: args.opt_value_from_str::<_, Screen>("--screen")?,
        telemetry: args.contains("--telemetry"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some((flags, asset_dir)))
}

fn main() -> iced::Result {
    init_logging();

    let (flags, asset_dir) = match parse_flags() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(asset_dir, flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Adventures");

    app::run(flags)
}
