//! Domain types shared by the registry, the rule engine and the front-ends.
//!
//! This module defines:
//!
//! - animal records (`AnimalRecord`, `CowVitals`)
//! - the tagged yield result (`YieldOutcome`)

pub mod types;

pub use types::*;
