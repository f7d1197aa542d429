//! Applies a `DefenseFormation` to the live board.
//!
//! Each batch is one placement call covering all of its cells. The planner
//! never checks occupancy; the platform skips cells that are taken or
//! unaffordable. Gates are evaluated immediately before their batch, so
//! spending by earlier batches is reflected.

use crate::formation::*;
use crate::platform::GamePlatform;
use log::*;

/// What one application of a formation did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutOutcome {
    /// Names of batches that were attempted, in order.
    pub attempted: Vec<&'static str>,
    /// Names of batches held back by their resource gate.
    pub gated: Vec<&'static str>,
    /// Units the platform accepted across all batches.
    pub placed: u32,
}

pub struct DefenseLayoutPlanner<'a> {
    formation: &'a DefenseFormation,
}

impl<'a> DefenseLayoutPlanner<'a> {
    pub fn new(formation: &'a DefenseFormation) -> Self {
        DefenseLayoutPlanner { formation }
    }

    pub fn apply<P: GamePlatform + ?Sized>(&self, platform: &mut P) -> LayoutOutcome {
        let mut outcome = LayoutOutcome::default();

        for batch in &self.formation.batches {
            if !batch.is_enabled(&*platform) {
                outcome.gated.push(batch.name);
                continue;
            }

            let placed = platform.attempt_spawn(batch.kind, &batch.locations(), 1);
            outcome.attempted.push(batch.name);
            outcome.placed += placed;
        }

        debug!(
            "Formation '{}': placed={}, gated={:?}",
            self.formation.name, outcome.placed, outcome.gated
        );

        outcome
    }
}
