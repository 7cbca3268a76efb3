//! Rule engine: id validation, milk yield and random teat transitions.
//!
//! Everything here is a free function. Transitions draw from a caller-supplied
//! [`RandomSource`] and write back through [`Registry::set_teat_count`], so the
//! registry stays the only owner of animal state.
//!
//! Per-cow state machine (goats have none):
//!
//! - `4 teats -> 3 teats` while yielding milk, probability [`LOSS_PROBABILITY`]
//! - `3 teats -> 4 teats` while being inspected, probability [`REGROWTH_PROBABILITY`]

use tracing::{debug, info};

use crate::domain::{AnimalRecord, FULL_TEATS, UNMILKABLE_TEATS, YieldOutcome};
use crate::registry::Registry;

pub mod random;

pub use random::{RandomSource, RngSource};

/// Length of a well-formed animal id.
pub const ID_LEN: usize = 8;

pub const REGROWTH_PROBABILITY: f64 = 0.20;
pub const LOSS_PROBABILITY: f64 = 0.05;

/// `true` iff `raw` is exactly eight ASCII digits not starting with `0`.
pub fn is_valid_id(raw: &str) -> bool {
    raw.len() == ID_LEN && raw.bytes().all(|b| b.is_ascii_digit()) && !raw.starts_with('0')
}

/// Milk yield in liters: `(years + months / 12) * (teats / 4)`.
pub fn compute_yield(record: &AnimalRecord) -> YieldOutcome {
    let Some(vitals) = record.vitals() else {
        return YieldOutcome::NotApplicableGoat;
    };
    if vitals.teat_count == UNMILKABLE_TEATS {
        return YieldOutcome::NotMilkable;
    }

    let base = f64::from(vitals.age_years) + f64::from(vitals.age_months) / 12.0;
    let teat_factor = f64::from(vitals.teat_count) / f64::from(FULL_TEATS);
    YieldOutcome::Value(base * teat_factor)
}

/// Roll for a 3-teat cow regrowing its fourth teat.
///
/// Draws exactly one sample when the cow has 3 teats and none otherwise.
/// Returns `true` if the teat grew back.
pub fn maybe_regrow_teat(registry: &mut Registry, id: &str, rng: &mut dyn RandomSource) -> bool {
    transition(registry, id, rng, UNMILKABLE_TEATS, FULL_TEATS, REGROWTH_PROBABILITY)
}

/// Roll for a 4-teat cow losing a teat while being milked.
///
/// Draws exactly one sample when the cow has 4 teats and none otherwise.
/// Returns `true` if a teat was lost.
pub fn maybe_lose_teat(registry: &mut Registry, id: &str, rng: &mut dyn RandomSource) -> bool {
    transition(registry, id, rng, FULL_TEATS, UNMILKABLE_TEATS, LOSS_PROBABILITY)
}

fn transition(
    registry: &mut Registry,
    id: &str,
    rng: &mut dyn RandomSource,
    from: u8,
    to: u8,
    probability: f64,
) -> bool {
    let current = registry.find_by_id(id).and_then(AnimalRecord::teat_count);
    if current != Some(from) {
        return false;
    }

    let sample = rng.next_unit();
    debug!(id, sample, probability, "teat transition draw");
    if sample >= probability {
        return false;
    }

    registry.set_teat_count(id, to);
    info!(id, from, to, "teat count changed");
    true
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::random::ScriptedSource;
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn valid_ids() {
        for id in ["12345678", "99999999", "10000000", "87654321"] {
            assert!(is_valid_id(id), "{id}");
        }
    }

    #[test]
    fn invalid_ids() {
        for id in [
            "",
            "1234567",
            "123456789",
            "01234567",
            "00000000",
            "1234567a",
            "1234 678",
            " 12345678",
            "12345678\n",
            "１２３４５６７８",
            "-1234567",
        ] {
            assert!(!is_valid_id(id), "{id:?}");
        }
    }

    #[test]
    fn yield_for_full_cow_is_age_in_years() {
        let cow = AnimalRecord::cow("12345678", 5, 2, 4);
        let YieldOutcome::Value(v) = compute_yield(&cow) else {
            panic!("expected a value");
        };
        assert!(approx(v, 5.0 + 2.0 / 12.0));
        assert_eq!(format!("{v:.2}"), "5.17");
    }

    #[test]
    fn yield_for_newborn_is_zero_not_missing() {
        let calf = AnimalRecord::cow("11111111", 0, 0, 4);
        assert_eq!(compute_yield(&calf), YieldOutcome::Value(0.0));
    }

    #[test]
    fn yield_tags_for_goats_and_three_teats() {
        let registry = Registry::seeded();
        for record in registry.iter() {
            let outcome = compute_yield(record);
            match record.teat_count() {
                None => assert_eq!(outcome, YieldOutcome::NotApplicableGoat),
                Some(3) => assert_eq!(outcome, YieldOutcome::NotMilkable),
                Some(_) => assert!(outcome.liters().is_some()),
            }
        }
    }

    #[test]
    fn regrow_fires_below_threshold() {
        let mut registry = Registry::seeded();
        let mut rng = ScriptedSource::new([0.19]);
        assert!(maybe_regrow_teat(&mut registry, "34567890", &mut rng));
        assert_eq!(registry.find_by_id("34567890").unwrap().teat_count(), Some(4));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn regrow_holds_at_threshold() {
        let mut registry = Registry::seeded();
        let mut rng = ScriptedSource::new([REGROWTH_PROBABILITY]);
        assert!(!maybe_regrow_teat(&mut registry, "34567890", &mut rng));
        assert_eq!(registry.find_by_id("34567890").unwrap().teat_count(), Some(3));
    }

    #[test]
    fn regrow_never_touches_non_three_teat_animals() {
        let mut registry = Registry::seeded();
        let mut rng = ScriptedSource::default();
        assert!(!maybe_regrow_teat(&mut registry, "12345678", &mut rng));
        assert!(!maybe_regrow_teat(&mut registry, "87654321", &mut rng));
        assert!(!maybe_regrow_teat(&mut registry, "11111111", &mut rng));
        assert_eq!(registry.find_by_id("12345678").unwrap().teat_count(), Some(4));
    }

    #[test]
    fn lose_fires_below_threshold() {
        let mut registry = Registry::seeded();
        let mut rng = ScriptedSource::new([0.01]);
        assert!(maybe_lose_teat(&mut registry, "12345678", &mut rng));
        let cow = registry.find_by_id("12345678").unwrap();
        assert_eq!(cow.teat_count(), Some(3));
        assert_eq!(compute_yield(cow), YieldOutcome::NotMilkable);
    }

    #[test]
    fn lose_holds_at_threshold() {
        let mut registry = Registry::seeded();
        let mut rng = ScriptedSource::new([LOSS_PROBABILITY, 0.99]);
        assert!(!maybe_lose_teat(&mut registry, "12345678", &mut rng));
        assert!(!maybe_lose_teat(&mut registry, "12345678", &mut rng));
        assert_eq!(registry.find_by_id("12345678").unwrap().teat_count(), Some(4));
    }

    #[test]
    fn lose_never_touches_non_four_teat_animals() {
        let mut registry = Registry::seeded();
        let mut rng = ScriptedSource::default();
        assert!(!maybe_lose_teat(&mut registry, "34567890", &mut rng));
        assert!(!maybe_lose_teat(&mut registry, "98765432", &mut rng));
        assert_eq!(registry.find_by_id("34567890").unwrap().teat_count(), Some(3));
    }

    proptest! {
        #[test]
        fn eight_digits_without_leading_zero_are_valid(id in "[1-9][0-9]{7}") {
            prop_assert!(is_valid_id(&id));
        }

        #[test]
        fn wrong_shape_digit_strings_are_invalid(
            id in prop_oneof!["[0-9]{0,7}", "[0-9]{9,12}", "0[0-9]{7}"]
        ) {
            prop_assert!(!is_valid_id(&id));
        }

        #[test]
        fn strings_with_a_non_digit_are_invalid(
            head in "[1-9][0-9]{0,6}",
            bad in "[^0-9]",
            tail in "[0-9]{0,6}",
        ) {
            let id = format!("{head}{bad}{tail}");
            prop_assert!(!is_valid_id(&id));
        }

        #[test]
        fn arbitrary_text_is_valid_only_as_eight_digits(raw in "\\PC{0,12}") {
            let expected = raw.len() == 8
                && raw.chars().all(|c| c.is_ascii_digit())
                && !raw.starts_with('0');
            prop_assert_eq!(is_valid_id(&raw), expected);
        }

        #[test]
        fn yield_of_full_cow_is_fractional_age(years in 0u32..30, months in 0u8..12) {
            let cow = AnimalRecord::cow("12345678", years, months, FULL_TEATS);
            let expected = f64::from(years) + f64::from(months) / 12.0;
            prop_assert_eq!(compute_yield(&cow), YieldOutcome::Value(expected));
        }
    }
}
