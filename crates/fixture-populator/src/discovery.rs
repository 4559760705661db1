//! Mutator discovery.
//!
//! Filters a bean's method table down to the value mutators under the
//! active naming policy: the method name starts with the setter prefix and
//! the method takes exactly one argument.

use serde::Serialize;
use tracing::trace;

use crate::error::InvocationError;
use crate::introspect::MethodDescriptor;
use crate::types::{SuppliedValue, TypeTag};

/// One settable property of a bean.
pub struct Mutator<B> {
    method: MethodDescriptor<B>,
    property: String,
    parameter: TypeTag,
}

impl<B: 'static> Mutator<B> {
    /// Name of the underlying method.
    pub fn method_name(&self) -> &str {
        self.method.name()
    }

    /// Property name derived from the method name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Declared parameter type.
    pub fn parameter_type(&self) -> TypeTag {
        self.parameter
    }

    /// Feed `value` through the mutator.
    pub fn apply(&self, bean: &mut B, value: SuppliedValue) -> Result<(), InvocationError> {
        self.method.invoke(bean, vec![value])
    }

    pub fn info(&self) -> MutatorInfo {
        MutatorInfo {
            method: self.method.name().to_string(),
            property: self.property.clone(),
            parameter_type: self.parameter.name(),
        }
    }
}

/// Plain description of a discovered mutator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MutatorInfo {
    pub method: String,
    pub property: String,
    pub parameter_type: &'static str,
}

/// Whether `method` qualifies as a mutator under `prefix`.
///
/// An empty prefix matches every name, leaving arity as the only filter.
pub fn is_mutator<B: 'static>(method: &MethodDescriptor<B>, prefix: &str) -> bool {
    method.arity() == 1 && method.name().starts_with(prefix)
}

/// Derive a property name from a mutator's method name.
///
/// The prefix is stripped, then a single `_` separator directly after a
/// non-empty prefix, then the new leading character is mapped to its first
/// lower-case character, so the name never grows:
/// `setFirstName` and `set_first_name` give `firstName` and `first_name`.
pub fn property_name(method_name: &str, prefix: &str) -> String {
    let rest = method_name.strip_prefix(prefix).unwrap_or(method_name);
    let rest = if prefix.is_empty() {
        rest
    } else {
        rest.strip_prefix('_').unwrap_or(rest)
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => {
            let lower = first.to_lowercase().next().unwrap_or(first);
            std::iter::once(lower).chain(chars).collect()
        }
        None => String::new(),
    }
}

/// Discover the mutators among `methods`.
pub fn discover<B: 'static>(methods: Vec<MethodDescriptor<B>>, prefix: &str) -> Vec<Mutator<B>> {
    methods
        .into_iter()
        .filter(|method| is_mutator(method, prefix))
        .map(|method| {
            let property = property_name(method.name(), prefix);
            let parameter = method.parameters()[0];
            trace!(
                method = method.name(),
                property = %property,
                parameter = parameter.name(),
                "discovered mutator"
            );
            Mutator {
                method,
                property,
                parameter,
            }
        })
        .collect()
}
