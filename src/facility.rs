//! Storage facilities and best-fit storage allocation.
//!
//! Allocation is a pure decision: [`allocate`] ranks facilities without touching their
//! capacities. Committing the decision is a separate step ([`StorageFacility::reserve`]) owned by
//! the caller, so allocation decisions stay auditable and reversible independent of state
//! commits.
use crate::id::{define_id_getter, define_id_type};
use crate::location::LocationID;
use crate::units::{Celsius, Tonnes, TonnesPerCelsius};
use anyhow::{Result, ensure};
use indexmap::IndexMap;
use serde::Deserialize;

define_id_type! {FacilityID}

/// A map of [`StorageFacility`]s, keyed by facility ID
pub type FacilityMap = IndexMap<FacilityID, StorageFacility>;

/// A storage facility with finite capacity and an ambient temperature.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageFacility {
    /// A unique identifier for the facility (e.g. "lahore_cold")
    pub id: FacilityID,
    /// A text description of the facility (e.g. "Lahore Cold Storage")
    pub description: String,
    /// The location of the facility
    pub location: LocationID,
    /// The total capacity of the facility
    pub total_capacity: Tonnes,
    /// The capacity currently free for new stock
    pub available_capacity: Tonnes,
    /// The ambient temperature inside the facility
    pub temperature: Celsius,
}
define_id_getter! {StorageFacility, FacilityID}

impl StorageFacility {
    /// Commit a previously decided allocation, reducing the available capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not positive or exceeds the available capacity.
    pub fn reserve(&mut self, quantity: Tonnes) -> Result<()> {
        ensure!(
            quantity > Tonnes(0.0),
            "Cannot reserve a non-positive quantity in facility {}",
            self.id
        );
        ensure!(
            quantity <= self.available_capacity,
            "Facility {} has only {} t available, cannot reserve {} t",
            self.id,
            self.available_capacity.value(),
            quantity.value()
        );
        self.available_capacity = self.available_capacity - quantity;

        Ok(())
    }

    /// Return previously reserved capacity to the facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not positive or would raise the available capacity
    /// above the facility total.
    pub fn release(&mut self, quantity: Tonnes) -> Result<()> {
        ensure!(
            quantity > Tonnes(0.0),
            "Cannot release a non-positive quantity from facility {}",
            self.id
        );
        ensure!(
            self.available_capacity + quantity <= self.total_capacity,
            "Releasing {} t would exceed the total capacity of facility {}",
            quantity.value(),
            self.id
        );
        self.available_capacity = self.available_capacity + quantity;

        Ok(())
    }
}

/// Parameters controlling how candidate facilities are scored.
///
/// The ideal temperature and penalty rate are domain conventions, not derived invariants, so
/// they are configurable model parameters rather than constants baked into the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AllocationPolicy {
    /// The storage temperature most crops keep best at
    pub ideal_temperature: Celsius,
    /// How much free capacity a degree of temperature deviation is worth
    pub temperature_penalty: TonnesPerCelsius,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            ideal_temperature: Celsius(4.0),
            temperature_penalty: TonnesPerCelsius(10.0),
        }
    }
}

impl AllocationPolicy {
    /// The best-fit score for a facility: free capacity minus the temperature deviation penalty
    pub fn score(&self, facility: &StorageFacility) -> Tonnes {
        let deviation = (facility.temperature - self.ideal_temperature).abs();
        facility.available_capacity - self.temperature_penalty * deviation
    }
}

/// The outcome of a storage allocation decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// The chosen facility
    pub facility_id: FacilityID,
    /// The best-fit score of the chosen facility
    pub score: Tonnes,
}

/// Choose the best-fit facility for storing the requested quantity.
///
/// Facilities without enough free capacity are skipped; the remaining candidates are ranked by
/// [`AllocationPolicy::score`] and the maximum wins. On equal scores the facility with the
/// lexicographically smallest ID is chosen, so the decision is deterministic regardless of input
/// order.
///
/// The chosen facility's capacity is not modified; callers commit the decision separately with
/// [`StorageFacility::reserve`].
///
/// # Returns
///
/// The winning facility and its score, or `None` if no facility can hold the quantity.
pub fn allocate<'a, I>(facilities: I, quantity: Tonnes, policy: &AllocationPolicy) -> Option<Allocation>
where
    I: IntoIterator<Item = &'a StorageFacility>,
{
    let mut best: Option<Allocation> = None;
    for facility in facilities {
        if facility.available_capacity < quantity {
            continue;
        }

        let score = policy.score(facility);
        let better = match &best {
            None => true,
            Some(incumbent) => {
                score > incumbent.score
                    || (score == incumbent.score && facility.id < incumbent.facility_id)
            }
        };
        if better {
            best = Some(Allocation {
                facility_id: facility.id.clone(),
                score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, facilities};
    use rstest::rstest;

    fn facility(id: &str, available: f64, temperature: f64) -> StorageFacility {
        StorageFacility {
            id: id.into(),
            description: id.to_string(),
            location: "Lahore".into(),
            total_capacity: Tonnes(available),
            available_capacity: Tonnes(available),
            temperature: Celsius(temperature),
        }
    }

    #[test]
    fn test_allocate_prefers_capacity_over_temperature() {
        // Scores with default policy: 100 - 0 = 100 vs 150 - 60 = 90
        let candidates = [facility("f1", 100.0, 4.0), facility("f2", 150.0, 10.0)];
        let allocation =
            allocate(&candidates, Tonnes(50.0), &AllocationPolicy::default()).unwrap();
        assert_eq!(allocation.facility_id, "f1".into());
        assert_eq!(allocation.score, Tonnes(100.0));
    }

    #[test]
    fn test_allocate_skips_insufficient_capacity() {
        // f2 scores lower but f1 cannot hold the quantity
        let candidates = [facility("f1", 100.0, 4.0), facility("f2", 150.0, 10.0)];
        let allocation =
            allocate(&candidates, Tonnes(120.0), &AllocationPolicy::default()).unwrap();
        assert_eq!(allocation.facility_id, "f2".into());
        assert_eq!(allocation.score, Tonnes(90.0));
    }

    #[test]
    fn test_allocate_no_fitting_facility() {
        let candidates = [facility("f1", 100.0, 4.0), facility("f2", 150.0, 10.0)];
        assert!(allocate(&candidates, Tonnes(500.0), &AllocationPolicy::default()).is_none());
        assert!(
            allocate(
                std::iter::empty::<&StorageFacility>(),
                Tonnes(1.0),
                &AllocationPolicy::default()
            )
            .is_none()
        );
    }

    #[test]
    fn test_allocate_tie_break_by_id() {
        // Identical scores in both orders; the lexicographically smaller ID must win
        let a = facility("alpha", 100.0, 4.0);
        let b = facility("beta", 100.0, 4.0);
        for candidates in [vec![a.clone(), b.clone()], vec![b.clone(), a.clone()]] {
            let allocation =
                allocate(&candidates, Tonnes(50.0), &AllocationPolicy::default()).unwrap();
            assert_eq!(allocation.facility_id, "alpha".into());
        }
    }

    #[test]
    fn test_allocate_does_not_mutate_facilities() {
        let candidates = [facility("f1", 100.0, 4.0)];
        let before = candidates.clone();
        allocate(&candidates, Tonnes(50.0), &AllocationPolicy::default()).unwrap();
        assert_eq!(candidates, before);
    }

    #[rstest]
    fn test_allocate_pure(facilities: FacilityMap) {
        let first = allocate(facilities.values(), Tonnes(50.0), &AllocationPolicy::default());
        let second = allocate(facilities.values(), Tonnes(50.0), &AllocationPolicy::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_reserve_and_release() {
        let mut facility = facility("f1", 100.0, 4.0);
        facility.reserve(Tonnes(30.0)).unwrap();
        assert_eq!(facility.available_capacity, Tonnes(70.0));
        facility.release(Tonnes(30.0)).unwrap();
        assert_eq!(facility.available_capacity, Tonnes(100.0));
    }

    #[test]
    fn test_reserve_insufficient_capacity() {
        let mut facility = facility("f1", 100.0, 4.0);
        let result = facility.reserve(Tonnes(150.0));
        assert_error!(
            result,
            "Facility f1 has only 100 t available, cannot reserve 150 t"
        );
    }

    #[test]
    fn test_reserve_non_positive() {
        let mut facility = facility("f1", 100.0, 4.0);
        assert!(facility.reserve(Tonnes(0.0)).is_err());
        assert!(facility.reserve(Tonnes(-5.0)).is_err());
    }

    #[test]
    fn test_release_above_total() {
        let mut facility = facility("f1", 100.0, 4.0);
        facility.total_capacity = Tonnes(120.0);
        let result = facility.release(Tonnes(30.0));
        assert_error!(
            result,
            "Releasing 30 t would exceed the total capacity of facility f1"
        );
    }
}
