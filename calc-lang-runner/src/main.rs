mod repl;
mod runner;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use calc_lang_interpreter::environment::Environment;
use tracing::level_filters::LevelFilter;

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Source file to evaluate. Starts the REPL when neither this nor --eval is given
    path: Option<PathBuf>,
    /// Evaluate SOURCE, print the result and exit
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "path")]
    eval: Option<String>,
    /// Do not bind `true`, `false` and `null` before evaluating
    #[arg(long)]
    no_prelude: bool,
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let environment = if cli.no_prelude {
        Environment::new()
    } else {
        match Environment::with_prelude() {
            Ok(environment) => environment,
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    };

    let result = match (cli.path, cli.eval) {
        (Some(path), _) => runner::execute_file(&path, environment),
        (None, Some(source)) => runner::execute(&source, environment),
        (None, None) => repl::start(environment).map_err(runner::RunnerError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
