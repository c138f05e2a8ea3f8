pub mod error;
pub mod expressions;
pub mod statements;

use crate::ast::{BinaryOperator, Program};
use crate::lexer::{self, Token, TokenKind};
pub use error::ParseError;
use statements::parse_statement;

/// Cursor over a token sequence produced by [`lexer::tokenize`].
pub struct Parser {
    pub iter: std::iter::Peekable<std::vec::IntoIter<Token>>,
    /// Currently open parenthesised groups.
    nesting: usize,
}

/// Bound on both the height of a parsed tree and the number of open groups.
/// Evaluating, printing and dropping a tree all recurse over its height.
pub const MAX_DEPTH: usize = 256;

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let iter = tokens.into_iter().peekable();
        Self { iter, nesting: 0 }
    }

    pub(crate) fn enter_group(&mut self) -> Result<(), ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { max: MAX_DEPTH });
        }
        self.nesting += 1;
        Ok(())
    }

    pub(crate) fn leave_group(&mut self) {
        self.nesting -= 1;
    }

    /// Returns the current token without consuming it.
    pub(crate) fn at(&mut self) -> Option<&Token> {
        self.iter.peek()
    }

    /// Consumes and returns the current token.
    pub(crate) fn eat(&mut self) -> Result<Token, ParseError> {
        self.iter
            .next()
            .ok_or_else(ParseError::premature_end_expected_expression)
    }

    pub(crate) fn expect_token(&mut self, token_kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.iter.next();
        match token {
            Some(token) if token.kind == token_kind => Ok(token),
            _ => Err(ParseError::unexpected_token(token_kind, token)),
        }
    }

    /// The binary operator at the cursor, if it is one of `operators`.
    pub(crate) fn peek_operator(&mut self, operators: &[BinaryOperator]) -> Option<BinaryOperator> {
        self.at()
            .filter(|token| token.kind == TokenKind::BinaryOperator)
            .and_then(|token| BinaryOperator::from_symbol(&token.value))
            .filter(|operator| operators.contains(operator))
    }

    fn not_eof(&mut self) -> Result<bool, ParseError> {
        match self.at() {
            Some(token) => Ok(token.kind != TokenKind::EndOfFile),
            None => Err(ParseError::unexpected_token(TokenKind::EndOfFile, None)),
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while self.not_eof()? {
            body.push(parse_statement(self)?);
        }
        self.expect_token(TokenKind::EndOfFile)?;

        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Program { body })
    }
}

/// Tokenizes and parses `source` into a [`Program`].
pub fn produce_ast(source: &str) -> Result<Program, crate::Error> {
    let tokens = lexer::tokenize(source)?;
    let program = Parser::new(tokens).parse_program()?;
    Ok(program)
}
