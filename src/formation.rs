//! Defense formations: static, ordered placement batches.
//!
//! A formation is a list of batches, each placing one unit kind on a fixed
//! list of cells. A batch may carry a `ResourceGate` that is re-checked every
//! turn against the current balance, so expensive layers switch on once the
//! budget allows and never block earlier layers.

use crate::constants::*;
use crate::location::*;
use crate::platform::GamePlatform;
use crate::units::*;

/// Enables a batch only while a balance is strictly above a threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResourceGate {
    pub resource: ResourceKind,
    pub threshold: f64,
}

impl ResourceGate {
    pub const fn matter_above(threshold: f64) -> Self {
        ResourceGate {
            resource: ResourceKind::Matter,
            threshold,
        }
    }

    pub fn is_open(&self, balance: f64) -> bool {
        balance > self.threshold
    }
}

/// One placement call: a unit kind and the cells to place it on.
#[derive(Clone, Debug)]
pub struct PlacementBatch {
    pub name: &'static str,
    pub kind: UnitKind,
    pub cells: &'static [(u8, u8)],
    pub gate: Option<ResourceGate>,
}

impl PlacementBatch {
    pub const fn new(name: &'static str, kind: UnitKind, cells: &'static [(u8, u8)]) -> Self {
        PlacementBatch {
            name,
            kind,
            cells,
            gate: None,
        }
    }

    pub const fn gated(mut self, gate: ResourceGate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn locations(&self) -> Vec<Location> {
        self.cells.iter().copied().map(Location::from).collect()
    }

    /// Whether the batch should run given our current balances.
    pub fn is_enabled<P: GamePlatform + ?Sized>(&self, platform: &P) -> bool {
        match self.gate {
            Some(gate) => gate.is_open(platform.resource(gate.resource, OWN_PLAYER)),
            None => true,
        }
    }
}

/// Ordered batches making up one wall design. Constant for a match.
#[derive(Clone, Debug)]
pub struct DefenseFormation {
    pub name: &'static str,
    pub batches: Vec<PlacementBatch>,
}

impl DefenseFormation {
    pub fn new(name: &'static str, batches: Vec<PlacementBatch>) -> Self {
        DefenseFormation { name, batches }
    }

    /// Every cell the formation may ever place on, in batch order.
    pub fn all_locations(&self) -> Vec<Location> {
        self.batches.iter().flat_map(|b| b.locations()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formations::*;
    use fnv::FnvHashSet;

    #[test]
    fn gate_is_strict() {
        let gate = ResourceGate::matter_above(6.0);
        assert!(!gate.is_open(6.0));
        assert!(gate.is_open(7.0));
    }

    #[test]
    fn formations_stay_on_home_half() {
        for formation in [layered_wall(), classic_wall()] {
            for loc in formation.all_locations() {
                assert!(loc.in_arena_bounds(), "{} {}", formation.name, loc);
                assert!(loc.is_home_half(), "{} {}", formation.name, loc);
            }
        }
    }

    #[test]
    fn batches_only_place_stationary_units() {
        for formation in [layered_wall(), classic_wall()] {
            assert!(formation.batches.iter().all(|b| b.kind.is_stationary()));
        }
    }

    #[test]
    fn classic_wall_has_no_duplicate_cells() {
        let cells = classic_wall().all_locations();
        let unique: FnvHashSet<Location> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len());
    }
}
