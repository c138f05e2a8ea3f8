use calc_lang_core::ast::Program;
use calc_lang_interpreter::environment::Environment;
use calc_lang_interpreter::evaluator;
use calc_lang_interpreter::value::RuntimeValue;
use calc_lang_interpreter::Error;

/// Evaluates each line against one environment that lives for the whole
/// session.
pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn evaluate(&mut self, program: Program) -> Result<RuntimeValue, Error> {
        Ok(evaluator::eval_program(&program, &mut self.environment)?)
    }
}
