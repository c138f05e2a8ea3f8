use crate::ast::Statement;
use crate::parser::expressions::parse_expression;
use crate::parser::{ParseError, Parser};

pub fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    Ok(Statement::Expression(parse_expression(parser)?))
}
