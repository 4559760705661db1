//! Caller-registered value overrides.
//!
//! An override pairs a producer with either a type or a property name,
//! never both. Registering the same key again replaces the earlier producer.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::error::{BoxError, PopulateError, PopulateResult};
use crate::types::{SuppliedValue, TypeTag};

/// Zero-argument value producer.
pub type Producer = Box<dyn Fn() -> Result<SuppliedValue, BoxError>>;

/// Replacement key of an override.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverrideKey {
    /// Applies to every mutator whose parameter type is exactly this type.
    Type(TypeTag),
    /// Applies to the mutator with this property name, whatever its type.
    Property(String),
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideKey::Type(tag) => write!(f, "type {}", tag),
            OverrideKey::Property(name) => write!(f, "property {}", name),
        }
    }
}

fn boxed_producer<T, E>(producer: impl Fn() -> Result<T, E> + 'static) -> Producer
where
    T: Any,
    E: Into<BoxError>,
{
    Box::new(move || producer().map(SuppliedValue::new).map_err(Into::into))
}

/// The override set of one populator.
#[derive(Default)]
pub struct OverrideSet {
    producers: HashMap<OverrideKey, Producer>,
}

impl OverrideSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type-scoped producer for `T`.
    ///
    /// Returns `true` if an earlier producer for `T` was replaced.
    pub fn insert_type<T, E>(&mut self, producer: impl Fn() -> Result<T, E> + 'static) -> bool
    where
        T: Any,
        E: Into<BoxError>,
    {
        self.producers
            .insert(OverrideKey::Type(TypeTag::of::<T>()), boxed_producer(producer))
            .is_some()
    }

    /// Register a name-scoped producer.
    ///
    /// The name is validated here, before any build: an empty name is
    /// rejected. Returns `true` if an earlier producer for the name was
    /// replaced.
    pub fn insert_property<T, E>(
        &mut self,
        name: impl Into<String>,
        producer: impl Fn() -> Result<T, E> + 'static,
    ) -> PopulateResult<bool>
    where
        T: Any,
        E: Into<BoxError>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(PopulateError::EmptyPropertyName);
        }
        Ok(self
            .producers
            .insert(OverrideKey::Property(name), boxed_producer(producer))
            .is_some())
    }

    /// Name-scoped producer for `property`, if any.
    pub fn by_property(&self, property: &str) -> Option<&Producer> {
        if property.is_empty() {
            return None;
        }
        self.producers
            .get(&OverrideKey::Property(property.to_string()))
    }

    /// Type-scoped producer for exactly `tag`, if any.
    pub fn by_type(&self, tag: TypeTag) -> Option<&Producer> {
        self.producers.get(&OverrideKey::Type(tag))
    }

    pub fn contains(&self, key: &OverrideKey) -> bool {
        self.producers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }
}

impl fmt::Debug for OverrideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.producers.keys()).finish()
    }
}
