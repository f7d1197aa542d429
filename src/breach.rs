//! Breach memory: where the opponent has scored on us this match.
//!
//! The action-frame feed reports every breach, ours and theirs, possibly
//! many times per turn. Only breaches by the opponent's units are kept.
//! Memory lives for the whole match and is handed to the turn policy by
//! reference once per turn.

use crate::location::*;
use fnv::FnvHashSet;
use itertools::Itertools;
use log::*;

/// One breach reported by the platform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BreachEvent {
    pub location: Location,
    pub turn: u32,
    /// True when the unit that got through was one of ours.
    pub breaching_player_is_self: bool,
}

impl BreachEvent {
    pub fn new(location: Location, turn: u32, breaching_player_is_self: bool) -> Self {
        BreachEvent {
            location,
            turn,
            breaching_player_is_self,
        }
    }

    /// Whether the opponent scored on us.
    pub fn is_scored_on(&self) -> bool {
        !self.breaching_player_is_self
    }
}

/// Storage for breach locations across turns.
pub trait BreachMemory {
    /// Remember the event if it was the opponent breaching.
    fn record(&mut self, event: &BreachEvent);

    /// Remembered locations in the order they should be answered.
    fn locations(&self) -> Vec<Location>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Set-backed memory: each breached cell is remembered once.
#[derive(Clone, Debug, Default)]
pub struct BreachTracker {
    breaches: FnvHashSet<Location>,
}

impl BreachTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_breach(&mut self, location: Location, turn: u32, was_own_unit: bool) {
        self.record(&BreachEvent::new(location, turn, was_own_unit));
    }

    /// Copy of the remembered set.
    pub fn current_breaches(&self) -> FnvHashSet<Location> {
        self.breaches.clone()
    }

    pub fn contains(&self, location: Location) -> bool {
        self.breaches.contains(&location)
    }
}

impl BreachMemory for BreachTracker {
    fn record(&mut self, event: &BreachEvent) {
        if !event.is_scored_on() {
            return;
        }

        if self.breaches.insert(event.location) {
            debug!("Scored on at {} (turn {})", event.location, event.turn);
        }
    }

    /// Sorted row-major so responses are deterministic.
    fn locations(&self) -> Vec<Location> {
        self.breaches.iter().copied().sorted().collect()
    }

    fn len(&self) -> usize {
        self.breaches.len()
    }
}

/// List-backed memory: every breach event is kept, duplicates included, in
/// arrival order. Repeat breaches on the same cell get answered repeatedly.
#[derive(Clone, Debug, Default)]
pub struct BreachHistory {
    breaches: Vec<Location>,
}

impl BreachHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BreachMemory for BreachHistory {
    fn record(&mut self, event: &BreachEvent) {
        if event.is_scored_on() {
            debug!("Scored on at {} (turn {})", event.location, event.turn);
            self.breaches.push(event.location);
        }
    }

    fn locations(&self) -> Vec<Location> {
        self.breaches.clone()
    }

    fn len(&self) -> usize {
        self.breaches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(x: u8, y: u8) -> Location {
        Location::from_coords(x, y)
    }

    #[test]
    fn repeat_breach_is_idempotent() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(loc(0, 13), 3, false);
        tracker.record_breach(loc(0, 13), 3, false);
        assert_eq!(tracker.current_breaches().len(), 1);

        tracker.record_breach(loc(0, 13), 9, false);
        assert_eq!(tracker.current_breaches().len(), 1);
    }

    #[test]
    fn own_breaches_are_ignored() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(loc(13, 27), 4, true);
        assert!(tracker.is_empty());
        tracker.record_breach(loc(27, 13), 4, false);
        assert!(tracker.contains(loc(27, 13)));
        assert!(!tracker.contains(loc(13, 27)));
    }

    #[test]
    fn memory_persists_across_turns() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(loc(27, 13), 1, false);
        tracker.record_breach(loc(1, 12), 2, false);
        tracker.record_breach(loc(20, 6), 5, false);
        assert_eq!(
            tracker.locations(),
            vec![loc(20, 6), loc(1, 12), loc(27, 13)]
        );
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(loc(1, 12), 2, false);
        let snapshot = tracker.current_breaches();
        tracker.record_breach(loc(2, 11), 2, false);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn history_keeps_duplicates_in_order() {
        let mut history = BreachHistory::new();
        history.record(&BreachEvent::new(loc(27, 13), 1, false));
        history.record(&BreachEvent::new(loc(0, 13), 1, false));
        history.record(&BreachEvent::new(loc(27, 13), 2, false));
        history.record(&BreachEvent::new(loc(5, 8), 2, true));
        assert_eq!(history.locations(), vec![loc(27, 13), loc(0, 13), loc(27, 13)]);
    }
}
