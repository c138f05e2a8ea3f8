pub mod ast;
pub mod lexer;
pub mod parser;

pub use parser::produce_ast;

/// Failure of the front end: either the source could not be tokenized or the
/// tokens did not form a program.
#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("Lexer error: {0}")]
    Lex(#[from] lexer::LexError),
    #[error("Parser error: {0}")]
    Parse(#[from] parser::ParseError),
}
