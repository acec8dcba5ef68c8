//! Driver for the `usgc` binary: CLI argument handling, config loading, and
//! the lex → parse → check → print pipeline itself.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use usgc_chk::Checker;
use usgc_par::ParseSession;
use usgc_util::diagnostic::{Diagnostic, Handler};

/// Command-line interface for `usgc`.
#[derive(Parser, Debug)]
#[command(name = "usgc", about = "Parse docopt-style help text into a syntax tree")]
pub struct Cli {
    /// Help-text file to parse.
    pub input: PathBuf,

    /// Where to write the rendered tree (defaults to stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a debug form of the syntax tree instead of the pretty-printed text.
    #[arg(long)]
    pub emit_tree: bool,

    /// Raise log verbosity.
    #[arg(short, long)]
    pub verbose: bool,

    /// Treat any diagnostic (not only an unparseable input) as a failure.
    #[arg(long)]
    pub warnings_as_errors: bool,

    /// Optional TOML config file; CLI flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolved configuration for one run of the pipeline. CLI flags populate
/// this directly; an optional `--config` file is merged underneath, so a
/// flag given on the command line always wins.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub emit_tree: bool,
    pub warnings_as_errors: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::new(),
            output: None,
            emit_tree: false,
            warnings_as_errors: false,
            verbose: false,
        }
    }
}

/// The subset of [`Config`] a TOML file can set — every field optional, so
/// an absent key simply leaves the default (or the CLI's value) in place.
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    output: Option<PathBuf>,
    emit_tree: Option<bool>,
    warnings_as_errors: Option<bool>,
    verbose: Option<bool>,
}

impl Config {
    /// Build a [`Config`] from parsed CLI arguments, merging `cli.config`'s
    /// file underneath if one was given.
    pub fn load(cli: &Cli) -> Result<Config, ConfigError> {
        let mut config = Config { input: cli.input.clone(), ..Config::default() };

        if let Some(path) = &cli.config {
            let text = std::fs::read_to_string(path)
                .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
            let partial: PartialConfig = toml::from_str(&text)
                .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
            if let Some(v) = partial.output {
                config.output = Some(v);
            }
            if let Some(v) = partial.emit_tree {
                config.emit_tree = v;
            }
            if let Some(v) = partial.warnings_as_errors {
                config.warnings_as_errors = v;
            }
            if let Some(v) = partial.verbose {
                config.verbose = v;
            }
        }

        if cli.output.is_some() {
            config.output = cli.output.clone();
        }
        config.emit_tree |= cli.emit_tree;
        config.warnings_as_errors |= cli.warnings_as_errors;
        config.verbose |= cli.verbose;

        Ok(config)
    }
}

/// Failure loading `--config`'s TOML file. Distinct from [`DriverError`]
/// since it happens before there is any input text to attach a source
/// range to.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, #[source] source: toml::de::Error },
}

/// Failure reading the input file or writing the rendered output.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read input file {path}: {source}")]
    ReadInput { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to write output file {path}: {source}")]
    WriteOutput { path: PathBuf, #[source] source: std::io::Error },
}

/// What one pipeline run produced: the diagnostics in emission order, and
/// the rendered text (pretty-printed tree, or its debug form under
/// `--emit-tree`).
pub struct RunOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub rendered: String,
}

/// One invocation's worth of state: just the resolved config, since the
/// arena and diagnostic sink are scoped to a single [`Session::run`] call.
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session { config }
    }

    /// Read the input file and run it through lex → parse → check → print.
    pub fn run(&self) -> Result<RunOutcome, DriverError> {
        tracing::info!(input = %self.config.input.display(), "reading input file");
        let text = std::fs::read_to_string(&self.config.input)
            .map_err(|source| DriverError::ReadInput { path: self.config.input.clone(), source })?;

        let session = ParseSession::new();
        let handler = Handler::new();
        let file_name: Arc<str> = Arc::from(self.config.input.to_string_lossy().as_ref());

        let root = {
            let _span = tracing::debug_span!("parse").entered();
            tracing::info!("parsing");
            usgc_par::parse(&session, &text, file_name, &handler)
        };

        {
            let _span = tracing::debug_span!("check").entered();
            tracing::info!("checking");
            Checker::new(&handler).check(root);
        }

        let rendered = {
            let _span = tracing::debug_span!("print").entered();
            tracing::info!("printing");
            if self.config.emit_tree { format!("{root:#?}") } else { usgc_par::print_root(root) }
        };

        let diagnostics = handler.diagnostics();
        for diagnostic in &diagnostics {
            tracing::warn!("{}", diagnostic.format_line());
        }

        Ok(RunOutcome { diagnostics, rendered })
    }
}
