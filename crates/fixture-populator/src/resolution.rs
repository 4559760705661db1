//! Property resolution engine.
//!
//! For each mutator, picks at most one producer. First match wins:
//! 1. name-scoped override for the mutator's property name
//! 2. type-scoped override for exactly the mutator's parameter type
//! 3. the built-in default for that type, if defaults are installed
//! 4. nothing: the mutator is not invoked

use serde::Serialize;
use tracing::{debug, trace};

use crate::defaults::DefaultSuppliers;
use crate::discovery::Mutator;
use crate::error::{InvocationError, PopulateError, PopulateResult};
use crate::overrides::OverrideSet;
use crate::types::{SuppliedValue, TypeTag};

/// Where a property's value comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedSource {
    PropertyOverride,
    TypeOverride,
    BuiltInDefault,
    Unresolved,
}

impl ResolvedSource {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ResolvedSource::Unresolved)
    }
}

/// Resolves and applies producers for one build.
///
/// Built-in defaults are a fallback lookup behind the override set; they
/// are never written into it.
pub struct ResolutionEngine<'a> {
    overrides: &'a OverrideSet,
    defaults: Option<DefaultSuppliers>,
}

impl<'a> ResolutionEngine<'a> {
    /// `defaults` is `None` when built-in defaults are switched off.
    pub fn new(overrides: &'a OverrideSet, defaults: Option<DefaultSuppliers>) -> Self {
        Self {
            overrides,
            defaults,
        }
    }

    /// Decide where the value for `property` of type `parameter` comes from.
    pub fn resolve(&self, property: &str, parameter: TypeTag) -> ResolvedSource {
        if self.overrides.by_property(property).is_some() {
            ResolvedSource::PropertyOverride
        } else if self.overrides.by_type(parameter).is_some() {
            ResolvedSource::TypeOverride
        } else if self.defaults.is_some() && DefaultSuppliers::supports(parameter) {
            ResolvedSource::BuiltInDefault
        } else {
            ResolvedSource::Unresolved
        }
    }

    /// Run the producer selected by `source`.
    ///
    /// Returns `Ok(None)` for an unresolved property.
    pub fn supply(
        &mut self,
        source: ResolvedSource,
        property: &str,
        parameter: TypeTag,
    ) -> Result<Option<SuppliedValue>, InvocationError> {
        let producer = match source {
            ResolvedSource::PropertyOverride => self.overrides.by_property(property),
            ResolvedSource::TypeOverride => self.overrides.by_type(parameter),
            ResolvedSource::BuiltInDefault => {
                return Ok(self
                    .defaults
                    .as_mut()
                    .and_then(|defaults| defaults.supply(parameter)));
            }
            ResolvedSource::Unresolved => None,
        };
        match producer {
            Some(producer) => producer().map(Some).map_err(InvocationError::ProducerFailed),
            None => Ok(None),
        }
    }

    /// Resolve every mutator and feed the produced values into `bean`.
    ///
    /// Stops at the first failure; the caller discards the bean. Returns
    /// how many mutators were invoked.
    pub fn populate<B: 'static>(
        &mut self,
        bean: &mut B,
        mutators: &[Mutator<B>],
    ) -> PopulateResult<usize> {
        let bean_name = std::any::type_name::<B>();
        let mut applied = 0;

        for mutator in mutators {
            let property = mutator.property();
            let parameter = mutator.parameter_type();
            let source = self.resolve(property, parameter);
            trace!(
                bean = bean_name,
                property,
                parameter = parameter.name(),
                source = ?source,
                "resolved property"
            );

            let invocation_error = |source: InvocationError| PopulateError::Invocation {
                bean: bean_name,
                method: mutator.method_name().to_string(),
                property: property.to_string(),
                source,
            };

            let Some(value) = self
                .supply(source, property, parameter)
                .map_err(invocation_error)?
            else {
                debug!(bean = bean_name, property, "property left unset");
                continue;
            };
            mutator.apply(bean, value).map_err(invocation_error)?;
            applied += 1;
        }

        Ok(applied)
    }
}
