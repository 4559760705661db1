//! Built-in default suppliers.
//!
//! Type-scoped fallbacks for the common scalar and date types. Two
//! families exist and one of them is chosen for a whole build:
//! - **Fixed**: stable constants, safe to assert on
//! - **Random**: uniformly drawn values for fuzz-style fixtures

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::types::{SuppliedValue, TypeTag};

/// Fixed default for `String` properties, in both families.
pub const DEFAULT_STRING: &str = "string";

/// Fixed default for every numeric property, read in the property's type.
pub const DEFAULT_NUMBER: i32 = 1;

/// Fixed default for date properties: 1970-01-01.
pub fn default_date() -> NaiveDate {
    NaiveDate::default()
}

/// Fixed default for date-time properties: 1970-01-01T00:00:00.
pub fn default_date_time() -> NaiveDateTime {
    default_date().and_time(NaiveTime::default())
}

/// Exclusive upper bound of randomized dates: 2022-01-01.
pub fn random_date_upper_bound() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default()
}

/// Types with a built-in default.
pub fn built_in_types() -> [TypeTag; 8] {
    BuiltIn::ALL.map(BuiltIn::tag)
}

// ── Built-in table ──────────────────────────────────────────────────────

/// The types with a built-in default. Both families match on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BuiltIn {
    I32,
    I64,
    F64,
    F32,
    Bool,
    Text,
    Date,
    DateTime,
}

impl BuiltIn {
    const ALL: [BuiltIn; 8] = [
        BuiltIn::I32,
        BuiltIn::I64,
        BuiltIn::F64,
        BuiltIn::F32,
        BuiltIn::Bool,
        BuiltIn::Text,
        BuiltIn::Date,
        BuiltIn::DateTime,
    ];

    fn tag(self) -> TypeTag {
        match self {
            BuiltIn::I32 => TypeTag::of::<i32>(),
            BuiltIn::I64 => TypeTag::of::<i64>(),
            BuiltIn::F64 => TypeTag::of::<f64>(),
            BuiltIn::F32 => TypeTag::of::<f32>(),
            BuiltIn::Bool => TypeTag::of::<bool>(),
            BuiltIn::Text => TypeTag::of::<String>(),
            BuiltIn::Date => TypeTag::of::<NaiveDate>(),
            BuiltIn::DateTime => TypeTag::of::<NaiveDateTime>(),
        }
    }

    fn of(tag: TypeTag) -> Option<Self> {
        Self::ALL.into_iter().find(|built_in| built_in.tag() == tag)
    }

    fn fixed(self) -> SuppliedValue {
        match self {
            BuiltIn::I32 => SuppliedValue::new(DEFAULT_NUMBER),
            BuiltIn::I64 => SuppliedValue::new(i64::from(DEFAULT_NUMBER)),
            BuiltIn::F64 => SuppliedValue::new(f64::from(DEFAULT_NUMBER)),
            BuiltIn::F32 => SuppliedValue::new(DEFAULT_NUMBER as f32),
            BuiltIn::Bool => SuppliedValue::new(false),
            BuiltIn::Text => SuppliedValue::new(DEFAULT_STRING.to_string()),
            BuiltIn::Date => SuppliedValue::new(default_date()),
            BuiltIn::DateTime => SuppliedValue::new(default_date_time()),
        }
    }

    fn random(self, rng: &mut StdRng) -> SuppliedValue {
        match self {
            BuiltIn::I32 => SuppliedValue::new(rng.gen::<i32>()),
            BuiltIn::I64 => SuppliedValue::new(rng.gen::<i64>()),
            // Halved bounds keep the sampled span finite.
            BuiltIn::F64 => {
                SuppliedValue::new(rng.gen_range(f64::MIN / 2.0..f64::MAX / 2.0) * 2.0)
            }
            BuiltIn::F32 => {
                SuppliedValue::new(rng.gen_range(f32::MIN / 2.0..f32::MAX / 2.0) * 2.0)
            }
            BuiltIn::Bool => SuppliedValue::new(rng.gen::<bool>()),
            BuiltIn::Text => SuppliedValue::new(DEFAULT_STRING.to_string()),
            BuiltIn::Date => SuppliedValue::new(random_date(rng)),
            BuiltIn::DateTime => SuppliedValue::new(random_date_time(rng)),
        }
    }
}

// ── Suppliers ───────────────────────────────────────────────────────────

/// Which default family a build uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValues {
    #[default]
    Fixed,
    Random,
}

/// The built-in default family installed for one build.
///
/// Only the random family owns a generator.
#[derive(Debug)]
pub struct DefaultSuppliers {
    rng: Option<StdRng>,
}

impl DefaultSuppliers {
    /// Install `family`. A seed makes the random family reproducible;
    /// without one the generator is seeded from OS entropy. The fixed
    /// family ignores the seed.
    pub fn new(family: DefaultValues, seed: Option<u64>) -> Self {
        let rng = match family {
            DefaultValues::Fixed => None,
            DefaultValues::Random => Some(match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            }),
        };
        Self { rng }
    }

    /// The fixed family.
    pub fn fixed() -> Self {
        Self::new(DefaultValues::Fixed, None)
    }

    pub fn family(&self) -> DefaultValues {
        if self.rng.is_some() {
            DefaultValues::Random
        } else {
            DefaultValues::Fixed
        }
    }

    /// Whether `tag` has a built-in default.
    pub fn supports(tag: TypeTag) -> bool {
        BuiltIn::of(tag).is_some()
    }

    /// Produce the default for `tag`, or `None` if the type has no default.
    pub fn supply(&mut self, tag: TypeTag) -> Option<SuppliedValue> {
        let built_in = BuiltIn::of(tag)?;
        Some(match self.rng.as_mut() {
            Some(rng) => built_in.random(rng),
            None => built_in.fixed(),
        })
    }
}

fn random_date(rng: &mut StdRng) -> NaiveDate {
    let lower = default_date();
    let days = (random_date_upper_bound() - lower).num_days();
    if days <= 0 {
        return lower;
    }
    lower + Duration::days(rng.gen_range(0..days))
}

fn random_date_time(rng: &mut StdRng) -> NaiveDateTime {
    let lower = default_date_time();
    let upper = random_date_upper_bound().and_time(NaiveTime::default());
    let seconds = (upper - lower).num_seconds();
    if seconds <= 0 {
        return lower;
    }
    lower + Duration::seconds(rng.gen_range(0..seconds))
}
