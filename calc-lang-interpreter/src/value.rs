use std::fmt::Display;

/// Result of evaluating an expression. Values have no identity and are copied
/// freely.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum RuntimeValue {
    #[default]
    Null,
    Number(f64),
    Boolean(bool),
}

impl RuntimeValue {
    pub fn null() -> RuntimeValue {
        RuntimeValue::Null
    }
    pub fn number(value: f64) -> RuntimeValue {
        RuntimeValue::Number(value)
    }
    pub fn boolean(value: bool) -> RuntimeValue {
        RuntimeValue::Boolean(value)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            RuntimeValue::Null => "null",
            RuntimeValue::Number(_) => "number",
            RuntimeValue::Boolean(_) => "boolean",
        }
    }
}

impl Display for RuntimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeValue::Null => write!(f, "null"),
            RuntimeValue::Number(value) => write!(f, "{}", value),
            RuntimeValue::Boolean(value) => write!(f, "{}", value),
        }
    }
}
