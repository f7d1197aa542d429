//! Spawn risk scoring.
//!
//! Estimates how much turret fire a mobile unit would soak walking from a
//! spawn cell to the far edge, and picks the cheapest of a set of candidate
//! cells. The estimate is deliberately coarse: each path cell contributes
//! (number of opposing attackers covering it) × (turret damage).

use crate::config::GameConfig;
use crate::constants::*;
use crate::error::StrategyError;
use crate::location::*;
use crate::platform::GamePlatform;
use log::*;

/// Damage estimate for one candidate spawn cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnRisk {
    pub location: Location,
    pub damage: f64,
    /// False when the platform found no path. Such candidates score 0.
    pub has_path: bool,
}

/// Sum of estimated turret damage along `path`.
pub fn path_damage<P: GamePlatform + ?Sized>(
    platform: &P,
    config: &GameConfig,
    path: &[Location],
) -> f64 {
    let turret_damage = config.turret_damage();

    path.iter()
        .map(|&cell| platform.attackers_that_can_reach(cell, OWN_PLAYER) as f64 * turret_damage)
        .sum()
}

/// Score a single candidate.
///
/// A candidate without a path is scored as zero damage rather than dropped.
pub fn spawn_risk<P: GamePlatform + ?Sized>(
    platform: &P,
    config: &GameConfig,
    location: Location,
) -> SpawnRisk {
    match platform.find_path_to_edge(location) {
        Some(path) => SpawnRisk {
            location,
            damage: path_damage(platform, config, &path),
            has_path: true,
        },
        None => SpawnRisk {
            location,
            damage: 0.0,
            has_path: false,
        },
    }
}

/// Score every candidate, preserving input order.
pub fn spawn_risks<P: GamePlatform + ?Sized>(
    platform: &P,
    config: &GameConfig,
    candidates: &[Location],
) -> Vec<SpawnRisk> {
    candidates
        .iter()
        .map(|&location| spawn_risk(platform, config, location))
        .collect()
}

/// Candidate with the lowest estimated damage. Ties go to the earliest
/// candidate, so callers list cells in priority order.
pub fn least_damage_spawn_location<P: GamePlatform + ?Sized>(
    platform: &P,
    config: &GameConfig,
    candidates: &[Location],
) -> Result<Location, StrategyError> {
    let mut best: Option<SpawnRisk> = None;

    for risk in spawn_risks(platform, config, candidates) {
        debug!(
            "Spawn risk at {}: damage={} path={}",
            risk.location, risk.damage, risk.has_path
        );

        let better = match best {
            Some(current) => risk.damage < current.damage,
            None => true,
        };

        if better {
            best = Some(risk);
        }
    }

    best.map(|risk| risk.location)
        .ok_or(StrategyError::EmptyCandidateSet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use fnv::FnvHashMap;

    /// Platform with canned paths and a per-cell attacker count.
    #[derive(Default)]
    struct ScriptedPlatform {
        paths: FnvHashMap<Location, Vec<Location>>,
        attackers: FnvHashMap<Location, usize>,
    }

    impl ScriptedPlatform {
        fn with_path(mut self, start: (u8, u8), cells: &[((u8, u8), usize)]) -> Self {
            let path = cells.iter().map(|&(c, _)| Location::from(c)).collect();
            for &(cell, count) in cells {
                self.attackers.insert(Location::from(cell), count);
            }
            self.paths.insert(Location::from(start), path);
            self
        }
    }

    impl GamePlatform for ScriptedPlatform {
        fn turn_number(&self) -> u32 {
            0
        }

        fn resource(&self, _kind: ResourceKind, _player: usize) -> f64 {
            0.0
        }

        fn find_path_to_edge(&self, start: Location) -> Option<Vec<Location>> {
            self.paths.get(&start).cloned()
        }

        fn attackers_that_can_reach(&self, location: Location, player: usize) -> usize {
            assert_eq!(player, OWN_PLAYER);
            self.attackers.get(&location).copied().unwrap_or(0)
        }

        fn contains_stationary_unit(&self, _location: Location) -> bool {
            false
        }

        fn attempt_spawn(&mut self, _kind: UnitKind, _locations: &[Location], _quantity: u32) -> u32 {
            0
        }

        fn submit_turn(&mut self) {}
    }

    fn loc(x: u8, y: u8) -> Location {
        Location::from_coords(x, y)
    }

    #[test]
    fn damage_is_attackers_times_turret_damage() {
        let config = GameConfig::default();
        let platform = ScriptedPlatform::default().with_path((11, 2), &[((11, 2), 0), ((11, 3), 2), ((12, 3), 1)]);
        let risk = spawn_risk(&platform, &config, loc(11, 2));
        assert!(risk.has_path);
        assert_eq!(risk.damage, 3.0 * config.turret_damage());
    }

    #[test]
    fn strict_minimum_wins() {
        let config = GameConfig::default();
        let platform = ScriptedPlatform::default()
            .with_path((2, 11), &[((2, 11), 3)])
            .with_path((11, 2), &[((11, 2), 1)])
            .with_path((25, 11), &[((25, 11), 2)]);
        let best = least_damage_spawn_location(
            &platform,
            &config,
            &[loc(2, 11), loc(11, 2), loc(25, 11)],
        )
        .unwrap();
        assert_eq!(best, loc(11, 2));
    }

    #[test]
    fn ties_resolve_to_first_candidate() {
        let config = GameConfig::default();
        let platform = ScriptedPlatform::default()
            .with_path((2, 11), &[((2, 11), 4)])
            .with_path((11, 2), &[((11, 2), 1)])
            .with_path((16, 2), &[((16, 2), 1)]);
        let candidates = [loc(2, 11), loc(16, 2), loc(11, 2)];
        assert_eq!(
            least_damage_spawn_location(&platform, &config, &candidates).unwrap(),
            loc(16, 2)
        );
    }

    #[test]
    fn missing_path_scores_zero() {
        let config = GameConfig::default();
        let platform = ScriptedPlatform::default().with_path((2, 11), &[((2, 11), 1)]);
        let risk = spawn_risk(&platform, &config, loc(11, 2));
        assert!(!risk.has_path);
        assert_eq!(risk.damage, 0.0);

        // The pathless candidate beats any candidate that takes damage.
        let best = least_damage_spawn_location(&platform, &config, &[loc(2, 11), loc(11, 2)]).unwrap();
        assert_eq!(best, loc(11, 2));
    }

    #[test]
    fn empty_candidates_are_rejected() {
        let config = GameConfig::default();
        let platform = ScriptedPlatform::default();
        assert!(matches!(
            least_damage_spawn_location(&platform, &config, &[]),
            Err(StrategyError::EmptyCandidateSet)
        ));
    }
}
