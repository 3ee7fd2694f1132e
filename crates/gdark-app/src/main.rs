mod cli;
mod run;

use std::process::ExitCode;

use gdark_common::{DarkError, Report};
use gdark_platform::HttpSource;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn init_logging(args: &cli::Args) {
    let directive: Directive = args
        .log_directive()
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(args: &cli::Args) -> Result<Report, DarkError> {
    let config = gdark_config::load_config(args.config.as_deref())?;
    if let Some(path) = &args.config {
        tracing::debug!("using settings from {}", path.display());
    }

    let options = run::Options {
        install_path: args.install_path.clone(),
        user: args.user.clone(),
        remove: args.remove,
    };
    let source = HttpSource::new()?;
    run::run(&options, &config, &source)
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(&args);

    tracing::debug!("ghidra-dark v{}", env!("CARGO_PKG_VERSION"));

    let result = execute(&args);
    match &result {
        Ok(report) => {
            run::log_report(report);
            tracing::info!(
                "dark theme {}",
                if args.remove { "removed" } else { "installed" }
            );
        }
        Err(DarkError::GhidraRunning) => {}
        Err(e) => tracing::error!("{e}"),
    }
    ExitCode::from(run::exit_code(&result))
}
