use crate::location::*;
use crate::units::*;

/// The query and command surface the match engine exposes for one turn.
///
/// Implementations exist for the live game (provided by the host) and for
/// offline testing (`OfflineArena`). Every call is synchronous; the decision
/// logic never checks placement rules itself and relies on `attempt_spawn`
/// to skip whatever the platform refuses.
pub trait GamePlatform {
    fn turn_number(&self) -> u32;

    /// Current balance of `kind` for `player` (0 = us, 1 = opponent).
    fn resource(&self, kind: ResourceKind, player: usize) -> f64;

    /// Route a mobile unit spawned at `start` would walk, or `None` when the
    /// platform cannot find one.
    fn find_path_to_edge(&self, start: Location) -> Option<Vec<Location>>;

    /// Number of stationary units able to attack a unit of `player` standing
    /// at `location`.
    fn attackers_that_can_reach(&self, location: Location, player: usize) -> usize;

    fn contains_stationary_unit(&self, location: Location) -> bool;

    /// Try to place `quantity` units of `kind` at each of `locations`.
    /// Returns how many were actually placed; 0 means the request was refused.
    fn attempt_spawn(&mut self, kind: UnitKind, locations: &[Location], quantity: u32) -> u32;

    /// Hand the accumulated commands for this turn to the engine.
    fn submit_turn(&mut self);
}

/// One accepted spawn, as recorded by platforms that keep a command log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnRequest {
    pub kind: UnitKind,
    pub location: Location,
    pub quantity: u32,
}

impl SpawnRequest {
    pub fn new(kind: UnitKind, location: Location, quantity: u32) -> Self {
        SpawnRequest {
            kind,
            location,
            quantity,
        }
    }
}
