use super::error::ParseError;
use crate::ast::{BinaryOperator, Expression, Identifier};
use crate::lexer::TokenKind;
use crate::parser::{Parser, MAX_DEPTH};

const ADDITIVE: &[BinaryOperator] = &[BinaryOperator::Add, BinaryOperator::Subtract];
const MULTIPLICATIVE: &[BinaryOperator] = &[
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::Modulo,
];

pub fn parse_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parse_additive_expression(parser)
}

fn parse_additive_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parse_left_associative(parser, ADDITIVE, parse_multiplicative_expression)
}

fn parse_multiplicative_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parse_left_associative(parser, MULTIPLICATIVE, parse_primary_expression)
}

/// Parses `operand (operator operand)*`, folding the accumulated tree into the
/// left side of each new node so `a - b - c` becomes `(a - b) - c`.
fn parse_left_associative(
    parser: &mut Parser,
    operators: &[BinaryOperator],
    parse_operand: fn(&mut Parser) -> Result<Expression, ParseError>,
) -> Result<Expression, ParseError> {
    let mut left = parse_operand(parser)?;
    let mut depth = left.depth();

    while let Some(operator) = parser.peek_operator(operators) {
        parser.eat()?;
        let right = parse_operand(parser)?;
        depth = 1 + depth.max(right.depth());
        if depth > MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { max: MAX_DEPTH });
        }
        left = Expression::binary(operator, left, right);
    }

    Ok(left)
}

fn parse_primary_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.eat()?;

    match token.kind {
        TokenKind::Identifier => Ok(Expression::Identifier(Identifier {
            symbol: token.value,
        })),
        TokenKind::Number => match token.value.parse::<f64>() {
            Ok(value) => Ok(Expression::NumericLiteral(value)),
            Err(_) => Err(ParseError::UnexpectedPrimary(token)),
        },
        TokenKind::OpenParen => parse_grouped_expression(parser),
        _ => Err(ParseError::UnexpectedPrimary(token)),
    }
}

fn parse_grouped_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.enter_group()?;
    let expression = parse_additive_expression(parser)?;
    parser.expect_token(TokenKind::CloseParen)?;
    parser.leave_group();

    Ok(expression)
}
