use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::value::RuntimeValue;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum EnvironmentError {
    #[error("Cannot declare variable {0}: it is already defined in this scope")]
    Redeclaration(Rc<str>),
    #[error("Cannot resolve variable {0}: it does not exist")]
    UndefinedVariable(Rc<str>),
}

#[derive(Debug)]
pub struct EnvironmentCore {
    store: HashMap<Rc<str>, RuntimeValue>,
    parent: Option<Environment>,
}

/// Handle to one scope frame. Cloning the handle shares the frame.
///
/// A child frame keeps its parent alive but only ever reads through it;
/// declarations always land in the frame the handle points at.
#[derive(Debug, Clone)]
pub struct Environment {
    environment: Rc<RefCell<EnvironmentCore>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            environment: Rc::new(RefCell::new(EnvironmentCore {
                store: HashMap::new(),
                parent: None,
            })),
        }
    }

    pub fn new_enclosed(parent: &Environment) -> Environment {
        Environment {
            environment: Rc::new(RefCell::new(EnvironmentCore {
                store: HashMap::new(),
                parent: Some(parent.clone()),
            })),
        }
    }

    /// Root frame with the `true`, `false` and `null` constants declared.
    pub fn with_prelude() -> Result<Self, EnvironmentError> {
        let mut env = Environment::new();
        env.declare_var("true", RuntimeValue::boolean(true))?;
        env.declare_var("false", RuntimeValue::boolean(false))?;
        env.declare_var("null", RuntimeValue::null())?;
        Ok(env)
    }

    pub fn declare_var(
        &mut self,
        name: impl Into<Rc<str>>,
        value: RuntimeValue,
    ) -> Result<RuntimeValue, EnvironmentError> {
        let name = name.into();
        let mut env = self.environment.borrow_mut();
        if env.store.contains_key(&name) {
            return Err(EnvironmentError::Redeclaration(name));
        }
        tracing::trace!(name = %name, %value, "declared variable");
        env.store.insert(name, value);
        Ok(value)
    }

    pub fn lookup_var(&self, name: &str) -> Result<RuntimeValue, EnvironmentError> {
        let env = self.resolve(name)?;
        let value = env.environment.borrow().store.get(name).copied();
        value.ok_or_else(|| EnvironmentError::UndefinedVariable(name.into()))
    }

    /// Finds the frame, starting at this one and walking outward, that binds
    /// `name`.
    pub fn resolve(&self, name: &str) -> Result<Environment, EnvironmentError> {
        let env = self.environment.borrow();
        if env.store.contains_key(name) {
            return Ok(self.clone());
        }
        match &env.parent {
            Some(parent) => parent.resolve(name),
            None => Err(EnvironmentError::UndefinedVariable(name.into())),
        }
    }

    #[cfg(test)]
    pub(crate) fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.environment, &other.environment)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut env = Environment::new();

        assert_eq!(
            env.declare_var("x", RuntimeValue::number(100.0)),
            Ok(RuntimeValue::number(100.0))
        );
        assert_eq!(env.lookup_var("x"), Ok(RuntimeValue::number(100.0)));
    }

    #[test]
    fn test_redeclaration_in_same_frame() {
        let mut env = Environment::new();
        env.declare_var("x", RuntimeValue::number(1.0)).unwrap();

        assert_eq!(
            env.declare_var("x", RuntimeValue::number(2.0)),
            Err(EnvironmentError::Redeclaration("x".into()))
        );
        assert_eq!(env.lookup_var("x"), Ok(RuntimeValue::number(1.0)));
    }

    #[test]
    fn test_undefined_variable() {
        let env = Environment::new();

        assert_eq!(
            env.lookup_var("missing"),
            Err(EnvironmentError::UndefinedVariable("missing".into()))
        );
        assert!(env.resolve("missing").is_err());
    }

    #[test]
    fn test_parent_is_visible_from_child() {
        let mut parent = Environment::new();
        parent
            .declare_var("outer", RuntimeValue::number(1.0))
            .unwrap();
        let mut child = Environment::new_enclosed(&parent);
        child
            .declare_var("inner", RuntimeValue::boolean(true))
            .unwrap();

        assert_eq!(child.lookup_var("outer"), Ok(RuntimeValue::number(1.0)));
        assert_eq!(child.lookup_var("inner"), Ok(RuntimeValue::boolean(true)));
        assert_eq!(
            parent.lookup_var("inner"),
            Err(EnvironmentError::UndefinedVariable("inner".into()))
        );
    }

    #[test]
    fn test_shadowing_in_child_frame() {
        let mut parent = Environment::new();
        parent.declare_var("x", RuntimeValue::number(1.0)).unwrap();
        let mut child = Environment::new_enclosed(&parent);

        assert!(child.declare_var("x", RuntimeValue::number(2.0)).is_ok());
        assert_eq!(child.lookup_var("x"), Ok(RuntimeValue::number(2.0)));
        assert_eq!(parent.lookup_var("x"), Ok(RuntimeValue::number(1.0)));
    }

    #[test]
    fn test_resolve_returns_owning_frame() {
        let mut root = Environment::new();
        root.declare_var("a", RuntimeValue::null()).unwrap();
        let mut middle = Environment::new_enclosed(&root);
        middle.declare_var("b", RuntimeValue::null()).unwrap();
        let leaf = Environment::new_enclosed(&middle);

        assert!(leaf.resolve("a").unwrap().ptr_eq(&root));
        assert!(leaf.resolve("b").unwrap().ptr_eq(&middle));
        assert!(!leaf.resolve("b").unwrap().ptr_eq(&root));
    }

    #[test]
    fn test_child_outlives_parent_handle() {
        let child = {
            let mut parent = Environment::new();
            parent.declare_var("kept", RuntimeValue::number(7.0)).unwrap();
            Environment::new_enclosed(&parent)
        };

        assert_eq!(child.lookup_var("kept"), Ok(RuntimeValue::number(7.0)));
    }

    #[test]
    fn test_prelude() {
        let mut env = Environment::with_prelude().unwrap();

        assert_eq!(env.lookup_var("true"), Ok(RuntimeValue::boolean(true)));
        assert_eq!(env.lookup_var("false"), Ok(RuntimeValue::boolean(false)));
        assert_eq!(env.lookup_var("null"), Ok(RuntimeValue::null()));
        assert!(env.declare_var("null", RuntimeValue::null()).is_err());
    }
}
