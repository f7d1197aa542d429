//! OfflineArena: an in-memory `GamePlatform` for native testing.
//!
//! Models just enough of the match engine to drive the decision logic:
//! the diamond arena, four edges, stationary occupancy, resource payment
//! and a breadth-first route to the opposite edge. Combat and resource
//! income are not simulated; tests set balances directly.

use crate::config::GameConfig;
use crate::constants::*;
use crate::location::*;
use crate::platform::*;
use crate::units::*;
use fnv::FnvHashMap;
use log::*;
use pathfinding::prelude::bfs;

const NEIGHBORS_4: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The four edges of the diamond. Player 0 deploys from the bottom pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Edge {
    pub fn contains(self, loc: Location) -> bool {
        let (x, y) = (loc.x() as i16, loc.y() as i16);
        let half = HALF_ARENA as i16;

        match self {
            Edge::BottomLeft => y < half && x + y == half - 1,
            Edge::BottomRight => y < half && x - y == half,
            Edge::TopLeft => y >= half && y - x == half,
            Edge::TopRight => y >= half && x + y == 3 * half - 1,
        }
    }

    pub fn opposite(self) -> Edge {
        match self {
            Edge::BottomLeft => Edge::TopRight,
            Edge::TopRight => Edge::BottomLeft,
            Edge::BottomRight => Edge::TopLeft,
            Edge::TopLeft => Edge::BottomRight,
        }
    }

    pub fn of(loc: Location) -> Option<Edge> {
        [
            Edge::BottomLeft,
            Edge::BottomRight,
            Edge::TopLeft,
            Edge::TopRight,
        ]
        .into_iter()
        .find(|edge| edge.contains(loc))
    }

    /// Edge a unit starting at `loc` heads for.
    pub fn target_for(loc: Location) -> Edge {
        if let Some(edge) = Edge::of(loc) {
            return edge.opposite();
        }

        let left = loc.x() < HALF_ARENA;
        match (loc.is_home_half(), left) {
            (true, true) => Edge::TopRight,
            (true, false) => Edge::TopLeft,
            (false, true) => Edge::BottomRight,
            (false, false) => Edge::BottomLeft,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacedUnit {
    pub kind: UnitKind,
    pub owner: usize,
}

/// In-memory match state acting as player 0's platform.
pub struct OfflineArena {
    config: GameConfig,
    turn: u32,
    resources: [[f64; 2]; 2],
    stationary: FnvHashMap<Location, PlacedUnit>,
    pending: Vec<SpawnRequest>,
    submitted: Vec<Vec<SpawnRequest>>,
}

impl OfflineArena {
    pub fn new(config: GameConfig) -> Self {
        OfflineArena {
            config,
            turn: 0,
            resources: [[0.0; 2]; 2],
            stationary: FnvHashMap::default(),
            pending: Vec::new(),
            submitted: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    pub fn set_resource(&mut self, kind: ResourceKind, player: usize, amount: f64) {
        self.resources[player][kind.index()] = amount;
    }

    /// Put a stationary unit on the board for free, ignoring half ownership.
    /// Used to stage opponent defenses and blockers.
    pub fn place_stationary(&mut self, kind: UnitKind, location: Location, owner: usize) -> bool {
        if !kind.is_stationary()
            || !location.in_arena_bounds()
            || self.stationary.contains_key(&location)
        {
            return false;
        }

        self.stationary.insert(location, PlacedUnit { kind, owner });
        true
    }

    pub fn remove_stationary(&mut self, location: Location) -> Option<PlacedUnit> {
        self.stationary.remove(&location)
    }

    pub fn stationary_at(&self, location: Location) -> Option<PlacedUnit> {
        self.stationary.get(&location).copied()
    }

    pub fn stationary_count(&self, owner: usize) -> usize {
        self.stationary.values().filter(|u| u.owner == owner).count()
    }

    /// Spawns accepted since the last `submit_turn`.
    pub fn pending_spawns(&self) -> &[SpawnRequest] {
        &self.pending
    }

    /// Spawn logs of every submitted turn, oldest first.
    pub fn submitted_turns(&self) -> &[Vec<SpawnRequest>] {
        &self.submitted
    }

    /// Units of `kind` accepted since the last `submit_turn`.
    pub fn pending_count(&self, kind: UnitKind) -> u32 {
        self.pending
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.quantity)
            .sum()
    }

    fn is_passable(&self, location: Location) -> bool {
        location.in_arena_bounds() && !self.stationary.contains_key(&location)
    }

    fn can_spawn_at(&self, kind: UnitKind, location: Location) -> bool {
        if !self.is_passable(location) || !location.is_home_half() {
            return false;
        }

        if kind.is_mobile() {
            Edge::BottomLeft.contains(location) || Edge::BottomRight.contains(location)
        } else {
            true
        }
    }

    fn balance_mut(&mut self, kind: ResourceKind) -> &mut f64 {
        &mut self.resources[OWN_PLAYER][kind.index()]
    }
}

impl GamePlatform for OfflineArena {
    fn turn_number(&self) -> u32 {
        self.turn
    }

    fn resource(&self, kind: ResourceKind, player: usize) -> f64 {
        self.resources
            .get(player)
            .map(|r| r[kind.index()])
            .unwrap_or(0.0)
    }

    fn find_path_to_edge(&self, start: Location) -> Option<Vec<Location>> {
        if !self.is_passable(start) {
            return None;
        }

        let target = Edge::target_for(start);

        bfs(
            &start,
            |loc| {
                let loc = *loc;
                NEIGHBORS_4
                    .iter()
                    .filter_map(move |&(dx, dy)| loc.offset(dx, dy))
                    .filter(|next| self.is_passable(*next))
                    .collect::<Vec<_>>()
            },
            |loc| target.contains(*loc),
        )
    }

    fn attackers_that_can_reach(&self, location: Location, player: usize) -> usize {
        self.stationary
            .iter()
            .filter(|(_, unit)| unit.owner != player)
            .filter(|(_, unit)| unit.kind.traits().contains(UnitTraits::ATTACKER))
            .filter(|(pos, unit)| {
                let range = self.config.stats(unit.kind).range;
                (pos.distance_squared_to(location) as f64) <= range * range
            })
            .count()
    }

    fn contains_stationary_unit(&self, location: Location) -> bool {
        self.stationary.contains_key(&location)
    }

    fn attempt_spawn(&mut self, kind: UnitKind, locations: &[Location], quantity: u32) -> u32 {
        let cost = self.config.cost(kind);
        let resource = kind.paid_with();
        let wanted = if kind.is_stationary() { 1 } else { quantity };

        let mut placed = 0;

        for &location in locations {
            if !self.can_spawn_at(kind, location) {
                trace!("Arena refused {:?} at {}", kind, location);
                continue;
            }

            let mut count = 0;
            while count < wanted && *self.balance_mut(resource) >= cost {
                *self.balance_mut(resource) -= cost;
                count += 1;
            }

            if count == 0 {
                trace!("Arena cannot afford {:?} at {}", kind, location);
                break;
            }

            if kind.is_stationary() {
                self.stationary.insert(
                    location,
                    PlacedUnit {
                        kind,
                        owner: OWN_PLAYER,
                    },
                );
            }

            self.pending.push(SpawnRequest::new(kind, location, count));
            placed += count;
        }

        placed
    }

    fn submit_turn(&mut self) {
        let spawns = std::mem::take(&mut self.pending);
        debug!("Arena turn {} submitted with {} spawn records", self.turn, spawns.len());
        self.submitted.push(spawns);
        self.turn += 1;
    }
}
