//! Turn policies.
//!
//! A policy runs once per turn: it applies its defense formation, reads the
//! balances, picks a `TurnState` and acts on it. The state is recomputed
//! from scratch every turn; the only memory carried between turns is the
//! breach memory the caller passes in.
//!
//! Two policies share the same components:
//! - `LayeredWallPolicy`: gated seven-layer wall, risk-scored offense that
//!   alternates scouts and demolishers, saturation fallback, and
//!   energy-scaled interceptor stalls.
//! - `ClassicWallPolicy`: ungated six-layer wall, scout-only offense from a
//!   single lane, and an unconditional in-place interceptor stall.

use crate::breach::BreachMemory;
use crate::config::GameConfig;
use crate::constants::*;
use crate::defense::ReactiveDefenseScheduler;
use crate::error::StrategyError;
use crate::formation::DefenseFormation;
use crate::formations::*;
use crate::location::*;
use crate::planner::*;
use crate::platform::GamePlatform;
use crate::scoring::least_damage_spawn_location;
use crate::units::*;
use log::*;

/// Diagonal approach cells along both home edges, left flank first, in
/// tie-break priority order.
const LAYERED_OFFENSE_CANDIDATES: &[(u8, u8)] = &[
    (2, 11), (3, 10), (4, 9), (5, 8), (6, 7), (7, 6), (8, 5), (9, 4), (10, 3), (11, 2),
    (25, 11), (24, 10), (23, 9), (22, 8), (21, 7), (20, 6), (19, 5), (18, 4), (17, 3), (16, 2), (15, 1),
];

const CLASSIC_OFFENSE_CANDIDATES: &[(u8, u8)] = &[(11, 2)];

/// Saturation lanes used while the central lane is open.
const FLANK_LANES: ((u8, u8), (u8, u8)) = ((5, 8), (22, 8));

/// Saturation lanes used once the central lane is walled off.
const CENTRAL_LANES: ((u8, u8), (u8, u8)) = ((13, 0), (14, 0));

/// Cell whose occupancy switches saturation to the central lanes.
const CONTESTED_CELL: (u8, u8) = (15, 1);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Only the defense formation is applied.
    BuildOnly,
    OffenseScout,
    OffenseDemolisher,
    /// Interceptors are sent to remembered breaches.
    DefensiveStall,
}

impl TurnState {
    pub fn is_offense(self) -> bool {
        self.offense_kind().is_some()
    }

    pub fn offense_kind(self) -> Option<UnitKind> {
        match self {
            TurnState::OffenseScout => Some(UnitKind::Scout),
            TurnState::OffenseDemolisher => Some(UnitKind::Demolisher),
            TurnState::BuildOnly | TurnState::DefensiveStall => None,
        }
    }
}

/// The inputs a policy's state choice depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TurnFacts {
    pub turn: u32,
    pub own_energy: f64,
    pub enemy_energy: f64,
}

impl TurnFacts {
    pub fn new(turn: u32, own_energy: f64, enemy_energy: f64) -> Self {
        TurnFacts {
            turn,
            own_energy,
            enemy_energy,
        }
    }

    pub fn read<P: GamePlatform + ?Sized>(platform: &P) -> Self {
        TurnFacts {
            turn: platform.turn_number(),
            own_energy: platform.resource(ResourceKind::Energy, OWN_PLAYER),
            enemy_energy: platform.resource(ResourceKind::Energy, OPPONENT_PLAYER),
        }
    }
}

/// What a policy did on one turn.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub turn: u32,
    pub state: TurnState,
    pub layout: LayoutOutcome,
    /// Cell the risk scorer chose for the bulk spawn, on offense turns.
    pub offense_location: Option<Location>,
    /// Units placed by the bulk spawn.
    pub offense_spawned: u32,
    /// Units placed by the saturation fallback.
    pub saturation_spawned: u32,
    pub interceptors_spawned: u32,
}

impl TurnReport {
    fn new(facts: &TurnFacts, state: TurnState, layout: LayoutOutcome) -> Self {
        TurnReport {
            turn: facts.turn,
            state,
            layout,
            offense_location: None,
            offense_spawned: 0,
            saturation_spawned: 0,
            interceptors_spawned: 0,
        }
    }
}

pub trait TurnPolicy {
    fn name(&self) -> &str;

    fn formation(&self) -> &DefenseFormation;

    fn choose_state(&self, facts: &TurnFacts) -> TurnState;

    /// Spend Energy on an attack with `kind`.
    fn attack(
        &self,
        platform: &mut dyn GamePlatform,
        config: &GameConfig,
        kind: UnitKind,
        report: &mut TurnReport,
    ) -> Result<(), StrategyError>;

    /// Spend Energy holding off the opponent.
    fn stall(
        &self,
        platform: &mut dyn GamePlatform,
        facts: &TurnFacts,
        breaches: &dyn BreachMemory,
        report: &mut TurnReport,
    );

    /// Build, decide, act. Does not submit the turn.
    fn take_turn(
        &self,
        platform: &mut dyn GamePlatform,
        config: &GameConfig,
        breaches: &dyn BreachMemory,
    ) -> Result<TurnReport, StrategyError> {
        let layout = DefenseLayoutPlanner::new(self.formation()).apply(platform);

        let facts = TurnFacts::read(&*platform);
        let state = self.choose_state(&facts);
        debug!(
            "Policy '{}' turn {}: {:?} (energy {} vs {})",
            self.name(),
            facts.turn,
            state,
            facts.own_energy,
            facts.enemy_energy
        );

        let mut report = TurnReport::new(&facts, state, layout);

        match state.offense_kind() {
            Some(kind) => self.attack(platform, config, kind, &mut report)?,
            None if state == TurnState::DefensiveStall => {
                self.stall(platform, &facts, breaches, &mut report)
            }
            None => {}
        }

        Ok(report)
    }
}

fn locations(cells: &[(u8, u8)]) -> Vec<Location> {
    cells.iter().copied().map(Location::from).collect()
}

/// Alternate single spawns between two lanes until one is refused.
/// Returns the number placed.
pub fn saturate(platform: &mut dyn GamePlatform, kind: UnitKind, lanes: (Location, Location)) -> u32 {
    let mut placed = 0;

    for attempt in 0..SATURATION_LIMIT {
        let lane = if attempt % 2 == 0 { lanes.0 } else { lanes.1 };
        let spawned = platform.attempt_spawn(kind, &[lane], 1);
        if spawned == 0 {
            break;
        }
        placed += spawned;
    }

    placed
}

pub struct LayeredWallPolicy {
    formation: DefenseFormation,
    candidates: Vec<Location>,
    scheduler: ReactiveDefenseScheduler,
}

impl Default for LayeredWallPolicy {
    fn default() -> Self {
        LayeredWallPolicy {
            formation: layered_wall(),
            candidates: locations(LAYERED_OFFENSE_CANDIDATES),
            scheduler: ReactiveDefenseScheduler::default(),
        }
    }
}

impl LayeredWallPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[Location] {
        &self.candidates
    }

    /// Lanes for the saturation fallback given the current board.
    pub fn saturation_lanes(&self, platform: &dyn GamePlatform) -> (Location, Location) {
        let (left, right) = if platform.contains_stationary_unit(CONTESTED_CELL.into()) {
            CENTRAL_LANES
        } else {
            FLANK_LANES
        };

        (left.into(), right.into())
    }
}

impl TurnPolicy for LayeredWallPolicy {
    fn name(&self) -> &str {
        "layered"
    }

    fn formation(&self) -> &DefenseFormation {
        &self.formation
    }

    fn choose_state(&self, facts: &TurnFacts) -> TurnState {
        if facts.own_energy > LAYERED_OFFENSE_ENERGY {
            if facts.turn % 2 == 0 {
                TurnState::OffenseScout
            } else {
                TurnState::OffenseDemolisher
            }
        } else if facts.enemy_energy >= STALL_ENEMY_ENERGY {
            TurnState::DefensiveStall
        } else {
            TurnState::BuildOnly
        }
    }

    fn attack(
        &self,
        platform: &mut dyn GamePlatform,
        config: &GameConfig,
        kind: UnitKind,
        report: &mut TurnReport,
    ) -> Result<(), StrategyError> {
        let best = least_damage_spawn_location(&*platform, config, &self.candidates)?;
        report.offense_location = Some(best);
        report.offense_spawned = platform.attempt_spawn(kind, &[best], BULK_SPAWN_QUANTITY);

        if report.offense_spawned == 0 {
            let lanes = self.saturation_lanes(&*platform);
            debug!("Bulk {:?} spawn at {} refused, saturating {} / {}", kind, best, lanes.0, lanes.1);
            report.saturation_spawned = saturate(platform, kind, lanes);
        }

        Ok(())
    }

    fn stall(
        &self,
        platform: &mut dyn GamePlatform,
        facts: &TurnFacts,
        breaches: &dyn BreachMemory,
        report: &mut TurnReport,
    ) {
        report.interceptors_spawned =
            self.scheduler
                .respond(platform, &breaches.locations(), facts.enemy_energy);
    }
}

pub struct ClassicWallPolicy {
    formation: DefenseFormation,
    candidates: Vec<Location>,
    scheduler: ReactiveDefenseScheduler,
}

impl Default for ClassicWallPolicy {
    fn default() -> Self {
        ClassicWallPolicy {
            formation: classic_wall(),
            candidates: locations(CLASSIC_OFFENSE_CANDIDATES),
            scheduler: ReactiveDefenseScheduler::default(),
        }
    }
}

impl ClassicWallPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TurnPolicy for ClassicWallPolicy {
    fn name(&self) -> &str {
        "classic"
    }

    fn formation(&self) -> &DefenseFormation {
        &self.formation
    }

    fn choose_state(&self, facts: &TurnFacts) -> TurnState {
        if facts.own_energy > CLASSIC_OFFENSE_ENERGY {
            TurnState::OffenseScout
        } else {
            TurnState::DefensiveStall
        }
    }

    fn attack(
        &self,
        platform: &mut dyn GamePlatform,
        config: &GameConfig,
        kind: UnitKind,
        report: &mut TurnReport,
    ) -> Result<(), StrategyError> {
        let best = least_damage_spawn_location(&*platform, config, &self.candidates)?;
        report.offense_location = Some(best);
        report.offense_spawned = platform.attempt_spawn(kind, &[best], BULK_SPAWN_QUANTITY);
        Ok(())
    }

    fn stall(
        &self,
        platform: &mut dyn GamePlatform,
        _facts: &TurnFacts,
        breaches: &dyn BreachMemory,
        report: &mut TurnReport,
    ) {
        report.interceptors_spawned = self.scheduler.respond_in_place(platform, &breaches.locations());
    }
}
