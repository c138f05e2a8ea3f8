pub mod environment;
pub mod evaluator;
pub mod value;

use calc_lang_core::{lexer, parser};

use crate::environment::{Environment, EnvironmentError};
use crate::evaluator::EvaluationError;
use crate::value::RuntimeValue;

/// Tokenizes, parses and evaluates one piece of source against `environment`.
pub fn run(source: &str, environment: &mut Environment) -> Result<RuntimeValue, Error> {
    let program = calc_lang_core::produce_ast(source)?;
    Ok(evaluator::eval_program(&program, environment)?)
}

/// Every way a [`run`] can fail, one variant per stage.
#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("Lexer error: {0}")]
    Lex(#[from] lexer::LexError),
    #[error("Parser error: {0}")]
    Parse(#[from] parser::ParseError),
    #[error("Evaluation error: {0}")]
    Evaluation(EvaluationError),
    #[error("Environment error: {0}")]
    Environment(#[from] EnvironmentError),
}

impl From<calc_lang_core::Error> for Error {
    fn from(value: calc_lang_core::Error) -> Self {
        match value {
            calc_lang_core::Error::Lex(error) => Error::Lex(error),
            calc_lang_core::Error::Parse(error) => Error::Parse(error),
        }
    }
}

impl From<EvaluationError> for Error {
    fn from(value: EvaluationError) -> Self {
        match value {
            EvaluationError::Environment(error) => Error::Environment(error),
            error => Error::Evaluation(error),
        }
    }
}
