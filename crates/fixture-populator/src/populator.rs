//! The fluent populator: configure overrides and policy, then build.

use std::any::{type_name, Any};
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::debug;

use crate::config::PopulatorConfig;
use crate::defaults::{DefaultSuppliers, DefaultValues};
use crate::discovery::{discover, Mutator, MutatorInfo};
use crate::error::{BoxError, PopulateError, PopulateResult};
use crate::introspect::Bean;
use crate::overrides::{OverrideKey, OverrideSet};
use crate::resolution::{ResolutionEngine, ResolvedSource};
use crate::types::TypeTag;

/// One entry of a resolution plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlannedProperty {
    pub mutator: MutatorInfo,
    pub source: ResolvedSource,
}

/// Builds populated instances of `B`.
///
/// Configuration methods take and return the populator so calls chain.
/// Name-scoped registration validates the name immediately and so returns
/// a `PopulateResult`:
///
/// ```rust,ignore
/// let employee = Populator::<Employee>::new()
///     .with_property_value("firstname", || "firstname1".to_string())?
///     .with_type_default(|| 42_i32)
///     .make()?;
/// ```
pub struct Populator<B> {
    config: PopulatorConfig,
    overrides: OverrideSet,
    _bean: PhantomData<fn() -> B>,
}

impl<B: Bean> Populator<B> {
    /// Populator with the conventional policy: `set` prefix, fixed defaults.
    pub fn new() -> Self {
        Self::with_config(PopulatorConfig::default())
    }

    pub fn with_config(config: PopulatorConfig) -> Self {
        Self {
            config,
            overrides: OverrideSet::new(),
            _bean: PhantomData,
        }
    }

    pub fn config(&self) -> &PopulatorConfig {
        &self.config
    }

    pub fn overrides(&self) -> &OverrideSet {
        &self.overrides
    }

    // ── Overrides ───────────────────────────────────────────────────────

    /// Populate every property of type `T` from `producer`, unless a
    /// name-scoped override claims the property.
    pub fn with_type_default<T: Any>(self, producer: impl Fn() -> T + 'static) -> Self {
        self.try_with_type_default(move || Ok::<T, Infallible>(producer()))
    }

    /// Fallible variant of [`with_type_default`](Self::with_type_default).
    /// A producer error fails the build.
    pub fn try_with_type_default<T, E>(
        mut self,
        producer: impl Fn() -> Result<T, E> + 'static,
    ) -> Self
    where
        T: Any,
        E: Into<BoxError>,
    {
        if self.overrides.insert_type(producer) {
            debug!(key = %OverrideKey::Type(TypeTag::of::<T>()), "replaced override");
        }
        self
    }

    /// Populate the property named `property` from `producer`.
    ///
    /// Takes precedence over type-scoped overrides and defaults. The
    /// produced type is checked only when the mutator is invoked.
    pub fn with_property_value<T: Any>(
        self,
        property: impl Into<String>,
        producer: impl Fn() -> T + 'static,
    ) -> PopulateResult<Self> {
        self.try_with_property_value(property, move || Ok::<T, Infallible>(producer()))
    }

    /// Fallible variant of [`with_property_value`](Self::with_property_value).
    pub fn try_with_property_value<T, E>(
        mut self,
        property: impl Into<String>,
        producer: impl Fn() -> Result<T, E> + 'static,
    ) -> PopulateResult<Self>
    where
        T: Any,
        E: Into<BoxError>,
    {
        let property = property.into();
        if self.overrides.insert_property(property.clone(), producer)? {
            debug!(key = %OverrideKey::Property(property), "replaced override");
        }
        Ok(self)
    }

    // ── Policy ──────────────────────────────────────────────────────────

    /// Fill unmatched properties from the built-in defaults (the default).
    pub fn using_default_suppliers(mut self) -> Self {
        self.config.use_default_suppliers = true;
        self
    }

    /// Leave unmatched properties unset.
    pub fn using_no_default_suppliers(mut self) -> Self {
        self.config.use_default_suppliers = false;
        self
    }

    /// Draw built-in defaults at random instead of using fixed constants.
    pub fn using_random_default_values(mut self) -> Self {
        self.config.default_values = DefaultValues::Random;
        self
    }

    pub fn using_fixed_default_values(mut self) -> Self {
        self.config.default_values = DefaultValues::Fixed;
        self
    }

    pub fn using_setter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.setter_prefix = prefix.into();
        self
    }

    /// Treat every one-argument method as a mutator.
    pub fn using_no_setter_prefix(mut self) -> Self {
        self.config.setter_prefix.clear();
        self
    }

    /// Seed random defaults so builds are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    // ── Inspection ──────────────────────────────────────────────────────

    /// Mutators discovered under the current prefix.
    pub fn mutators(&self) -> Vec<MutatorInfo> {
        self.discover_mutators().iter().map(Mutator::info).collect()
    }

    /// Where each discovered property would get its value from, without
    /// constructing a bean or running any producer.
    pub fn plan(&self) -> Vec<PlannedProperty> {
        let engine = ResolutionEngine::new(&self.overrides, self.defaults(Some(0)));
        self.discover_mutators()
            .iter()
            .map(|mutator| PlannedProperty {
                mutator: mutator.info(),
                source: engine.resolve(mutator.property(), mutator.parameter_type()),
            })
            .collect()
    }

    // ── Build ───────────────────────────────────────────────────────────

    /// Construct a `B` and populate every resolvable property.
    ///
    /// Fails as a whole if construction or any invocation fails.
    pub fn make(&self) -> PopulateResult<B> {
        self.build(self.config.seed)
    }

    /// Build `count` independent instances.
    ///
    /// With a seed, instance `i` uses `seed + i`, so seeded batches are
    /// reproducible without every instance being identical.
    pub fn make_many(&self, count: usize) -> PopulateResult<Vec<B>> {
        (0..count)
            .map(|index| {
                let seed = self.config.seed.map(|seed| seed.wrapping_add(index as u64));
                self.build(seed)
            })
            .collect()
    }

    fn build(&self, seed: Option<u64>) -> PopulateResult<B> {
        let bean_name = type_name::<B>();
        let mut bean = B::construct().map_err(|source| PopulateError::Construction {
            bean: bean_name,
            source,
        })?;

        let mutators = self.discover_mutators();
        let defaults = self.defaults(seed);
        let family = defaults.as_ref().map(DefaultSuppliers::family);
        let mut engine = ResolutionEngine::new(&self.overrides, defaults);
        let applied = engine.populate(&mut bean, &mutators)?;

        debug!(
            bean = bean_name,
            mutators = mutators.len(),
            applied,
            defaults = ?family,
            "populated bean"
        );
        Ok(bean)
    }

    fn discover_mutators(&self) -> Vec<Mutator<B>> {
        discover(B::methods(), &self.config.setter_prefix)
    }

    fn defaults(&self, seed: Option<u64>) -> Option<DefaultSuppliers> {
        self.config
            .use_default_suppliers
            .then(|| DefaultSuppliers::new(self.config.default_values, seed))
    }
}

impl<B: Bean> Default for Populator<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for Populator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Populator")
            .field("bean", &type_name::<B>())
            .field("config", &self.config)
            .field("overrides", &self.overrides)
            .finish()
    }
}
