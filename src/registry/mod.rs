//! The animal registry.
//!
//! A short, fixed list of records searched linearly. Nothing is added or
//! removed after construction; the only mutation is a cow's teat count.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::AnimalRecord;
use crate::rules::is_valid_id;

mod seed;

/// Why a record list was refused by [`Registry::from_records`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("malformed animal id '{0}'")]
    InvalidId(String),
    #[error("duplicate animal id '{0}'")]
    DuplicateId(String),
    #[error("animal '{id}' has age_months {months}, expected 0..=11")]
    MonthsOutOfRange { id: String, months: u8 },
}

#[derive(Debug, Clone)]
pub struct Registry {
    records: Vec<AnimalRecord>,
}

impl Registry {
    /// Registry holding the reference herd (15 cows, 2 goats).
    pub fn seeded() -> Self {
        Self {
            records: seed::reference_herd(),
        }
    }

    /// Build a registry from an explicit record list.
    ///
    /// Ids must be well-formed and unique, and cow ages must have months in
    /// `0..=11`. Teat counts are not checked.
    pub fn from_records(records: Vec<AnimalRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let id = record.id();
            if !is_valid_id(id) {
                return Err(RegistryError::InvalidId(id.to_string()));
            }
            if !seen.insert(id) {
                return Err(RegistryError::DuplicateId(id.to_string()));
            }
            if let Some(months) = record.age_months().filter(|m| *m > 11) {
                return Err(RegistryError::MonthsOutOfRange {
                    id: id.to_string(),
                    months,
                });
            }
        }
        Ok(Self { records })
    }

    /// Exact-match lookup. `None` is an ordinary outcome, not an error.
    pub fn find_by_id(&self, id: &str) -> Option<&AnimalRecord> {
        let found = self.records.iter().find(|r| r.id() == id);
        debug!(id, found = found.is_some(), "registry lookup");
        found
    }

    /// Set the teat count of the record with `id`.
    ///
    /// Unknown ids and goats are ignored. The value is not validated.
    pub fn set_teat_count(&mut self, id: &str, teat_count: u8) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            record.set_teat_count(teat_count);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::seeded()
    }
}
