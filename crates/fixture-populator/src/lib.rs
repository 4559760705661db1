//! # fixture-populator
//!
//! Fully populated test fixtures without hand-written builders.
//!
//! A bean-style type (no-argument constructor plus one-argument mutators)
//! is constructed and every mutator is fed a value from, in order of
//! precedence:
//!
//! 1. a **name-scoped override** registered for the property
//! 2. a **type-scoped override** registered for the parameter type
//! 3. a **built-in default** for `i32`, `i64`, `f64`, `f32`, `bool`,
//!    `String`, `NaiveDate` and `NaiveDateTime` (fixed or randomized)
//!
//! Properties matched by none of these keep their constructed value.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐  methods()   ┌──────────────┐
//!   │  Bean        │─────────────▶│  Discovery   │  prefix + arity filter
//!   │  (provider)  │              └──────┬───────┘
//!   └──────┬───────┘                     │ Vec<Mutator>
//!          │ construct()                 ▼
//!          │                      ┌──────────────┐
//!          └─────────────────────▶│  Resolution  │◀── OverrideSet
//!                                 │  Engine      │◀── DefaultSuppliers
//!                                 └──────┬───────┘
//!                                        ▼
//!                                   populated B
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fixture_populator::{bean, populate, Populator, DEFAULT_STRING};
//!
//! #[derive(Debug, Default)]
//! struct Customer {
//!     firstname: Option<String>,
//!     lastname: Option<String>,
//!     id: Option<i32>,
//! }
//!
//! impl Customer {
//!     fn set_firstname(&mut self, v: String) { self.firstname = Some(v); }
//!     fn set_lastname(&mut self, v: String) { self.lastname = Some(v); }
//!     fn set_id(&mut self, v: i32) { self.id = Some(v); }
//! }
//!
//! bean! {
//!     Customer {
//!         fn set_firstname(String);
//!         fn set_lastname(String);
//!         fn set_id(i32);
//!     }
//! }
//!
//! let customer = Populator::<Customer>::new()
//!     .with_property_value("firstname", || "firstname1".to_string())?
//!     .make()?;
//! assert_eq!(customer.firstname.as_deref(), Some("firstname1"));
//! assert_eq!(customer.lastname.as_deref(), Some(DEFAULT_STRING));
//!
//! let defaults: Customer = populate()?;
//! assert_eq!(defaults.id, Some(1));
//! # Ok::<(), fixture_populator::PopulateError>(())
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod defaults;
pub mod discovery;
pub mod error;
pub mod introspect;
mod macros;
pub mod overrides;
pub mod populator;
pub mod resolution;
pub mod types;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use config::{PopulatorConfig, DEFAULT_SETTER_PREFIX};
pub use defaults::{
    built_in_types, default_date, default_date_time, random_date_upper_bound,
    DefaultSuppliers, DefaultValues, DEFAULT_NUMBER, DEFAULT_STRING,
};
pub use discovery::{discover, is_mutator, property_name, Mutator, MutatorInfo};
pub use error::{BoxError, InvocationError, PopulateError, PopulateResult};
pub use introspect::{Bean, Invoker, MethodDescriptor};
pub use overrides::{OverrideKey, OverrideSet, Producer};
pub use populator::{PlannedProperty, Populator};
pub use resolution::{ResolutionEngine, ResolvedSource};
pub use types::{SuppliedValue, TypeTag};

/// Build a `B` with the conventional policy and no overrides.
pub fn populate<B: Bean>() -> PopulateResult<B> {
    Populator::<B>::new().make()
}

/// Configure a populator in `configure`, then build a `B` with it.
///
/// ```rust,ignore
/// let employee: Employee = populate_with(|p| {
///     p.with_property_value("firstname", || "firstname1".to_string())
/// })?;
/// ```
pub fn populate_with<B: Bean>(
    configure: impl FnOnce(Populator<B>) -> PopulateResult<Populator<B>>,
) -> PopulateResult<B> {
    configure(Populator::new())?.make()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Ticket {
        title: Option<String>,
        priority: Option<i32>,
    }

    impl Ticket {
        fn set_title(&mut self, title: String) {
            self.title = Some(title);
        }

        fn set_priority(&mut self, priority: i32) {
            self.priority = Some(priority);
        }
    }

    crate::bean! {
        Ticket {
            fn set_title(String);
            fn set_priority(i32);
        }
    }

    #[test]
    fn populate_uses_fixed_defaults() {
        let ticket: Ticket = populate().unwrap();
        assert_eq!(ticket.title.as_deref(), Some(DEFAULT_STRING));
        assert_eq!(ticket.priority, Some(DEFAULT_NUMBER));
    }

    #[test]
    fn populate_with_applies_configuration() {
        let ticket: Ticket = populate_with(|p| {
            p.with_property_value("title", || "urgent".to_string())
                .map(Populator::using_no_default_suppliers)
        })
        .unwrap();
        assert_eq!(ticket.title.as_deref(), Some("urgent"));
        assert!(ticket.priority.is_none());
    }

    #[test]
    fn populate_with_propagates_registration_errors() {
        let err = populate_with::<Ticket>(|p| p.with_property_value("", || 0_i32)).unwrap_err();
        assert!(matches!(err, PopulateError::EmptyPropertyName));
    }

    #[test]
    fn all_public_types_accessible() {
        let _config = PopulatorConfig::default();
        let _family = DefaultValues::Random;
        let _defaults = DefaultSuppliers::fixed();
        let _overrides = OverrideSet::new();
        let _key = OverrideKey::Property("title".into());
        let _tag = TypeTag::of::<String>();
        let _value = SuppliedValue::new(1_i32);
        let _source = ResolvedSource::Unresolved;
        let _populator = Populator::<Ticket>::default();
        let _method = MethodDescriptor::<Ticket>::accessor("title");
        assert_eq!(DEFAULT_SETTER_PREFIX, "set");
        assert_eq!(built_in_types().len(), 8);
    }
}
