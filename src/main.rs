// SPDX-License-Identifier: MPL-2.0
use farda_console::app::{self, paths, Flags};
use farda_console::config;
use farda_console::i18n::I18n;
use farda_console::routing::Locale;
use std::process::ExitCode;

const HELP: &str = "\
farda_console

USAGE:
  farda_console [OPTIONS]

OPTIONS:
  --lang <CODE>        Interface language (fa, en)
  --path <ROUTE>       Route to open, e.g. /en/users
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory holding state.cbor
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let (lang, path, config_dir, data_dir) = match parse_args(&mut args) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(data_dir, config_dir);

    let (config, config_warning) = config::load();
    init_tracing(config.log_filter());
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "using default configuration");
    }

    if let Err(err) = check_catalogs() {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }

    let flags = Flags { lang, path, config };
    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}

type CliArgs = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Reads `--lang`, `--path`, `--config-dir` and `--data-dir`.
fn parse_args(args: &mut pico_args::Arguments) -> Result<CliArgs, pico_args::Error> {
    let parsed = (
        args.opt_value_from_str("--lang")?,
        args.opt_value_from_str("--path")?,
        args.opt_value_from_str("--config-dir")?,
        args.opt_value_from_str("--data-dir")?,
    );

    let unused = args.clone().finish();
    if !unused.is_empty() {
        eprintln!("warning: ignoring unknown arguments: {unused:?}");
    }

    Ok(parsed)
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Debug builds refuse to start with incomplete catalogs; release builds
/// log each missing key and continue.
fn check_catalogs() -> farda_console::error::Result<()> {
    let report = I18n::new(Locale::Fa)?.validate();
    if report.is_complete() {
        return Ok(());
    }

    if cfg!(debug_assertions) {
        report.into_result()
    } else {
        for key in &report.missing {
            tracing::warn!(%key, "missing translation");
        }
        Ok(())
    }
}
