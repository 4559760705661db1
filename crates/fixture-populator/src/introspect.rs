//! Property-descriptor provider.
//!
//! Rust has no runtime reflection, so a bean describes itself: its
//! no-argument constructor and a table of its public methods. The
//! [`bean!`](crate::bean) macro writes that table for plain `Default`
//! structs; anything else can implement [`Bean`] by hand.

use std::any::{type_name, Any};
use std::fmt;

use crate::error::{BoxError, InvocationError};
use crate::types::{SuppliedValue, TypeTag};

/// Invocable handle for one method on `B`.
pub type Invoker<B> = Box<dyn Fn(&mut B, Vec<SuppliedValue>) -> Result<(), InvocationError>>;

// ── Method descriptor ───────────────────────────────────────────────────

/// One public method exposed by a bean: name, parameter types and a handle.
pub struct MethodDescriptor<B> {
    name: String,
    parameters: Vec<TypeTag>,
    invoker: Invoker<B>,
}

impl<B: 'static> MethodDescriptor<B> {
    /// Describe an arbitrary method.
    ///
    /// `invoke` is only ever called with exactly `parameters.len()` values.
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<TypeTag>,
        invoke: impl Fn(&mut B, Vec<SuppliedValue>) -> Result<(), InvocationError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            invoker: Box::new(invoke),
        }
    }

    /// Describe an infallible one-argument mutator.
    pub fn setter<T: Any>(name: impl Into<String>, set: impl Fn(&mut B, T) + 'static) -> Self {
        Self::try_setter(name, move |bean: &mut B, value: T| {
            set(bean, value);
            Ok::<(), BoxError>(())
        })
    }

    /// Describe a one-argument mutator that may reject its value.
    pub fn try_setter<T, E>(
        name: impl Into<String>,
        set: impl Fn(&mut B, T) -> Result<(), E> + 'static,
    ) -> Self
    where
        T: Any,
        E: Into<BoxError>,
    {
        Self::new(name, vec![TypeTag::of::<T>()], move |bean, mut args| {
            let value = args.pop().ok_or(InvocationError::ArityMismatch {
                expected: 1,
                found: 0,
            })?;
            let value = value
                .downcast::<T>()
                .map_err(|value| InvocationError::TypeMismatch {
                    expected: type_name::<T>(),
                    found: value.type_tag().name(),
                })?;
            set(bean, value).map_err(|e| InvocationError::MutatorFailed(e.into()))
        })
    }

    /// Describe a zero-argument method, typically a getter.
    ///
    /// Invoking it leaves the bean untouched.
    pub fn accessor(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new(), |_, _| Ok(()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[TypeTag] {
        &self.parameters
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Invoke the method on `bean`.
    pub fn invoke(&self, bean: &mut B, args: Vec<SuppliedValue>) -> Result<(), InvocationError> {
        if args.len() != self.arity() {
            return Err(InvocationError::ArityMismatch {
                expected: self.arity(),
                found: args.len(),
            });
        }
        (self.invoker)(bean, args)
    }
}

impl<B> fmt::Debug for MethodDescriptor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

// ── Bean ────────────────────────────────────────────────────────────────

/// A type that can be constructed without arguments and that reports its
/// public methods.
///
/// Only the type's own methods are listed; there is no notion of inherited
/// members. `methods` is called once per build, so the table is never
/// cached between builds.
pub trait Bean: Sized + 'static {
    /// No-argument constructor.
    fn construct() -> Result<Self, BoxError>;

    /// Every public method of the type.
    fn methods() -> Vec<MethodDescriptor<Self>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        value: i32,
        label: Option<String>,
    }

    #[test]
    fn setter_applies_matching_value() {
        let method = MethodDescriptor::setter("set_value", |c: &mut Counter, v: i32| c.value = v);
        assert_eq!(method.name(), "set_value");
        assert_eq!(method.arity(), 1);
        assert!(method.parameters()[0].is::<i32>());

        let mut counter = Counter::default();
        method
            .invoke(&mut counter, vec![SuppliedValue::new(7_i32)])
            .unwrap();
        assert_eq!(counter.value, 7);
    }

    #[test]
    fn setter_rejects_wrong_type() {
        let method = MethodDescriptor::setter("set_label", |c: &mut Counter, v: String| {
            c.label = Some(v)
        });
        let mut counter = Counter::default();
        let err = method
            .invoke(&mut counter, vec![SuppliedValue::new(3_u8)])
            .unwrap_err();
        match err {
            InvocationError::TypeMismatch { expected, found } => {
                assert!(expected.contains("String"));
                assert_eq!(found, "u8");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(counter.label.is_none());
    }

    #[test]
    fn try_setter_surfaces_mutator_failure() {
        let method = MethodDescriptor::try_setter("set_value", |c: &mut Counter, v: i32| {
            if v < 0 {
                return Err("negative values are rejected");
            }
            c.value = v;
            Ok(())
        });
        let mut counter = Counter::default();
        let err = method
            .invoke(&mut counter, vec![SuppliedValue::new(-1_i32)])
            .unwrap_err();
        assert!(matches!(err, InvocationError::MutatorFailed(_)));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn invoke_checks_arity() {
        let method = MethodDescriptor::setter("set_value", |c: &mut Counter, v: i32| c.value = v);
        let mut counter = Counter::default();
        let err = method.invoke(&mut counter, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            InvocationError::ArityMismatch {
                expected: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn accessor_has_no_parameters() {
        let method = MethodDescriptor::<Counter>::accessor("value");
        assert_eq!(method.arity(), 0);
        let mut counter = Counter::default();
        method.invoke(&mut counter, Vec::new()).unwrap();
        assert_eq!(counter.value, 0);
    }
}
