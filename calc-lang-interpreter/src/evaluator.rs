use thiserror::Error;

use calc_lang_core::ast;
use calc_lang_core::ast::{BinaryOperator, Expression};
use crate::environment::{Environment, EnvironmentError};
use crate::value::RuntimeValue;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error("This AST node has not yet been setup for interpretation: {0}")]
    UnsupportedNode(Expression),
    #[error("Math Error: Division by zero ({lhs} / {rhs})")]
    DivisionByZero { lhs: f64, rhs: f64 },
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

/// Evaluates every statement in order; the program's value is the value of
/// the last one, or null for an empty program.
pub fn eval_program(
    program: &ast::Program,
    environment: &mut Environment,
) -> Result<RuntimeValue, EvaluationError> {
    let mut output = RuntimeValue::null();
    for statement in &program.body {
        output = eval_statement(statement, environment)?;
    }
    tracing::debug!(result = %output, "evaluated program");
    Ok(output)
}

fn eval_statement(
    statement: &ast::Statement,
    environment: &mut Environment,
) -> Result<RuntimeValue, EvaluationError> {
    match statement {
        ast::Statement::Expression(expression) => eval_expression(expression, environment),
    }
}

pub fn eval_expression(
    expression: &Expression,
    environment: &mut Environment,
) -> Result<RuntimeValue, EvaluationError> {
    match expression {
        Expression::NumericLiteral(value) => Ok(RuntimeValue::number(*value)),
        Expression::NullLiteral => Ok(RuntimeValue::null()),
        Expression::Identifier(identifier) => Ok(environment.lookup_var(&identifier.symbol)?),
        Expression::BinaryExpr {
            operator,
            left,
            right,
        } => {
            let left = eval_expression(left, environment)?;
            let right = eval_expression(right, environment)?;
            eval_binary_expression(*operator, left, right)
        }
        Expression::UnaryExpr { .. } => Err(EvaluationError::UnsupportedNode(expression.clone())),
    }
}

fn eval_binary_expression(
    operator: BinaryOperator,
    left: RuntimeValue,
    right: RuntimeValue,
) -> Result<RuntimeValue, EvaluationError> {
    match (left, right) {
        (RuntimeValue::Number(lhs), RuntimeValue::Number(rhs)) => {
            eval_numeric_binary_expression(operator, lhs, rhs).map(RuntimeValue::number)
        }
        _ => {
            tracing::trace!(
                operator = operator.to_str(),
                left = left.type_name(),
                right = right.type_name(),
                "non-numeric operand, yielding null"
            );
            Ok(RuntimeValue::null())
        }
    }
}

fn eval_numeric_binary_expression(
    operator: BinaryOperator,
    lhs: f64,
    rhs: f64,
) -> Result<f64, EvaluationError> {
    match operator {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Subtract => Ok(lhs - rhs),
        BinaryOperator::Multiply => Ok(lhs * rhs),
        BinaryOperator::Divide if rhs == 0.0 => Err(EvaluationError::DivisionByZero { lhs, rhs }),
        BinaryOperator::Divide => Ok(lhs / rhs),
        BinaryOperator::Modulo => Ok(lhs % rhs),
    }
}
