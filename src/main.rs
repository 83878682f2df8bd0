// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Compare two images with a draggable before/after split

USAGE:
  iced_compare [OPTIONS] [BEFORE] [AFTER]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml

ENVIRONMENT:
  ICED_COMPARE_CONFIG_DIR Same as --config-dir
  RUST_LOG                Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Returns `None` when help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let mut positional = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok());
    let before = positional.next();
    let after = positional.next();

    if let Some(extra) = positional.next() {
        tracing::warn!(argument = %extra, "ignoring extra positional argument");
    }

    Ok(Some(Flags {
        lang,
        config_dir,
        before,
        after,
    }))
}
