use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use usgc_drv::{Cli, Config, Session};

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn try_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    let warnings_as_errors = config.warnings_as_errors;
    let output = config.output.clone();

    let outcome = Session::new(config).run()?;

    for diagnostic in &outcome.diagnostics {
        eprintln!("{}", diagnostic.format_line());
    }

    match &output {
        Some(path) => std::fs::write(path, &outcome.rendered)
            .map_err(|source| usgc_drv::DriverError::WriteOutput { path: path.clone(), source })?,
        None => {
            print!("{}", outcome.rendered);
            std::io::stdout().flush().ok();
        }
    }

    if warnings_as_errors && !outcome.diagnostics.is_empty() {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
