use std::path::{Path, PathBuf};

use calc_lang_interpreter::environment::Environment;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Interpreter(#[from] calc_lang_interpreter::Error),
    #[error("Readline failure: {0}")]
    Readline(#[from] ReadlineError),
}

pub fn execute(source: &str, mut environment: Environment) -> Result<(), RunnerError> {
    let evaluated = calc_lang_interpreter::run(source, &mut environment)?;
    println!("{}", evaluated);
    Ok(())
}

pub fn execute_file(path: &Path, environment: Environment) -> Result<(), RunnerError> {
    tracing::info!(path = %path.display(), "evaluating file");
    let source = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.to_owned(),
        source,
    })?;
    execute(&source, environment)
}
