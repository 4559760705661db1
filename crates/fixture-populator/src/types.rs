//! Type tags and type-erased values.
//!
//! A [`TypeTag`] stands in for a declared parameter type; a [`SuppliedValue`]
//! carries a producer's output to a mutator without the engine knowing its
//! concrete type.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Semantic type tag for a mutator parameter or an override.
///
/// Two tags are equal exactly when their `TypeId`s are equal; the name is
/// kept for diagnostics only.
#[derive(Clone, Copy, Debug)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Fully qualified type name, as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this tag denotes `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A produced value on its way into a mutator.
pub struct SuppliedValue {
    value: Box<dyn Any>,
    type_tag: TypeTag,
}

impl SuppliedValue {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_tag: TypeTag::of::<T>(),
        }
    }

    /// Tag of the concrete type held.
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// Take the value out as `T`, handing `self` back on a type mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_tag = self.type_tag;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, type_tag }),
        }
    }
}

impl fmt::Debug for SuppliedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuppliedValue")
            .field("type", &self.type_tag.name)
            .finish_non_exhaustive()
    }
}
