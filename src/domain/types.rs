//! Animal records and derived values.
//!
//! A record either carries a full set of cow vitals or none at all (a goat).
//! Encoding the vitals as one `Option` keeps "age and teats are absent
//! together" true by construction instead of by convention.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Number of teats a healthy cow has; yield is scaled relative to this.
pub const FULL_TEATS: u8 = 4;

/// Teat count at which a cow cannot be milked.
pub const UNMILKABLE_TEATS: u8 = 3;

/// Age and udder state of a cow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CowVitals {
    pub age_years: u32,
    /// `0..=11` for any record held by a `Registry`.
    pub age_months: u8,
    pub teat_count: u8,
}

/// One animal in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRecord {
    id: String,
    vitals: Option<CowVitals>,
}

impl AnimalRecord {
    /// Build a cow record. Ranges are not checked here;
    /// `Registry::from_records` rejects out-of-range months.
    pub fn cow(id: impl Into<String>, age_years: u32, age_months: u8, teat_count: u8) -> Self {
        Self {
            id: id.into(),
            vitals: Some(CowVitals {
                age_years,
                age_months,
                teat_count,
            }),
        }
    }

    pub fn goat(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vitals: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vitals(&self) -> Option<&CowVitals> {
        self.vitals.as_ref()
    }

    pub fn is_goat(&self) -> bool {
        self.vitals.is_none()
    }

    pub fn age_years(&self) -> Option<u32> {
        self.vitals.map(|v| v.age_years)
    }

    pub fn age_months(&self) -> Option<u8> {
        self.vitals.map(|v| v.age_months)
    }

    pub fn teat_count(&self) -> Option<u8> {
        self.vitals.map(|v| v.teat_count)
    }

    /// Overwrite the teat count. Goats have no teat state, so this is a no-op
    /// for them.
    pub(crate) fn set_teat_count(&mut self, teat_count: u8) {
        if let Some(vitals) = self.vitals.as_mut() {
            vitals.teat_count = teat_count;
        }
    }
}

/// Goats serialize with explicit `null` age and teat fields.
impl Serialize for AnimalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnimalRecord", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("age_years", &self.age_years())?;
        state.serialize_field("age_months", &self.age_months())?;
        state.serialize_field("teat_count", &self.teat_count())?;
        state.end()
    }
}

/// Result of a milk-yield computation.
///
/// Both non-numeric cases mean "no yield", but the reason is kept so the
/// front-end can tell a goat from a cow that cannot be milked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YieldOutcome {
    /// Liters of milk.
    Value(f64),
    NotApplicableGoat,
    NotMilkable,
}

impl YieldOutcome {
    pub fn liters(self) -> Option<f64> {
        match self {
            YieldOutcome::Value(v) => Some(v),
            YieldOutcome::NotApplicableGoat | YieldOutcome::NotMilkable => None,
        }
    }
}
