//! Reactive defense: answer remembered breaches with interceptors.
//!
//! The number sent per breach scales with the opponent's Energy. A breach
//! cell deep in the field is walked diagonally back toward the home edge
//! before spawning.

use crate::constants::*;
use crate::location::*;
use crate::platform::GamePlatform;
use crate::units::UnitKind;
use log::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReactiveDefenseScheduler {
    pub max_per_breach: u32,
    pub energy_per_unit: f64,
    pub front_row_limit: u8,
}

impl Default for ReactiveDefenseScheduler {
    fn default() -> Self {
        ReactiveDefenseScheduler {
            max_per_breach: MAX_INTERCEPTORS_PER_BREACH,
            energy_per_unit: ENERGY_PER_INTERCEPTOR,
            front_row_limit: FRONT_ROW_LIMIT,
        }
    }
}

impl ReactiveDefenseScheduler {
    /// Interceptors to send per breach: `min(max, floor(energy / step) + 1)`.
    pub fn interceptor_count(&self, enemy_energy: f64) -> u32 {
        let steps = (enemy_energy.max(0.0) / self.energy_per_unit).floor() as u32;
        steps.saturating_add(1).min(self.max_per_breach)
    }

    /// Step `location` diagonally toward the centre line until it sits below
    /// the front row limit. On the diagonal itself only the row moves.
    pub fn pull_toward_home_edge(&self, location: Location) -> Location {
        let (mut x, mut y) = (location.x(), location.y());

        while y >= self.front_row_limit {
            if x > y {
                x -= 1;
                y -= 1;
            } else if y > x {
                x += 1;
                y -= 1;
            } else {
                y -= 1;
            }
        }

        Location::from_coords(x, y)
    }

    /// Spawn interceptors for every breach. Returns the number placed.
    pub fn respond<P: GamePlatform + ?Sized>(
        &self,
        platform: &mut P,
        breaches: &[Location],
        enemy_energy: f64,
    ) -> u32 {
        let count = self.interceptor_count(enemy_energy);
        let mut placed = 0;

        for &breach in breaches {
            let target = self.pull_toward_home_edge(breach);
            debug!("Answering breach at {} with {} interceptors at {}", breach, count, target);

            for _ in 0..count {
                placed += platform.attempt_spawn(UnitKind::Interceptor, &[target], 1);
            }
        }

        placed
    }

    /// Spawn one interceptor directly on each breach cell, no repositioning.
    pub fn respond_in_place<P: GamePlatform + ?Sized>(&self, platform: &mut P, breaches: &[Location]) -> u32 {
        breaches
            .iter()
            .map(|&breach| platform.attempt_spawn(UnitKind::Interceptor, &[breach], 1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    #[derive(Default)]
    struct SpawnLog {
        spawns: Vec<(UnitKind, Location, u32)>,
    }

    impl GamePlatform for SpawnLog {
        fn turn_number(&self) -> u32 {
            0
        }

        fn resource(&self, _kind: ResourceKind, _player: usize) -> f64 {
            0.0
        }

        fn find_path_to_edge(&self, _start: Location) -> Option<Vec<Location>> {
            None
        }

        fn attackers_that_can_reach(&self, _location: Location, _player: usize) -> usize {
            0
        }

        fn contains_stationary_unit(&self, _location: Location) -> bool {
            false
        }

        fn attempt_spawn(&mut self, kind: UnitKind, locations: &[Location], quantity: u32) -> u32 {
            for &loc in locations {
                self.spawns.push((kind, loc, quantity));
            }
            quantity * locations.len() as u32
        }

        fn submit_turn(&mut self) {}
    }

    fn loc(x: u8, y: u8) -> Location {
        Location::from_coords(x, y)
    }

    #[test]
    fn count_scales_with_enemy_energy() {
        let scheduler = ReactiveDefenseScheduler::default();
        assert_eq!(scheduler.interceptor_count(0.0), 1);
        assert_eq!(scheduler.interceptor_count(3.9), 1);
        assert_eq!(scheduler.interceptor_count(4.0), 2);
        assert_eq!(scheduler.interceptor_count(7.0), 2);
        assert_eq!(scheduler.interceptor_count(11.0), 3);
        assert_eq!(scheduler.interceptor_count(40.0), 3);
    }

    #[test]
    fn count_matches_formula_for_integer_energy() {
        let scheduler = ReactiveDefenseScheduler::default();
        for r in 0u32..=200 {
            assert_eq!(scheduler.interceptor_count(r as f64), (r / 4 + 1).min(3), "r={}", r);
        }
    }

    #[test]
    fn count_is_capped_for_huge_energy() {
        let scheduler = ReactiveDefenseScheduler::default();
        assert_eq!(scheduler.interceptor_count(4.0 * u32::MAX as f64 + 4.0), 3);
        assert_eq!(scheduler.interceptor_count(f64::MAX), 3);
        assert_eq!(scheduler.interceptor_count(f64::INFINITY), 3);
    }

    #[test]
    fn pull_moves_each_side_toward_centre() {
        let scheduler = ReactiveDefenseScheduler::default();
        assert_eq!(scheduler.pull_toward_home_edge(loc(27, 13)), loc(24, 10));
        assert_eq!(scheduler.pull_toward_home_edge(loc(0, 13)), loc(3, 10));
        assert_eq!(scheduler.pull_toward_home_edge(loc(13, 13)), loc(11, 10));
        assert_eq!(scheduler.pull_toward_home_edge(loc(11, 11)), loc(11, 10));
        assert_eq!(scheduler.pull_toward_home_edge(loc(5, 8)), loc(5, 8));
    }

    #[test]
    fn pull_always_lands_below_front_row() {
        let scheduler = ReactiveDefenseScheduler::default();
        for y in FRONT_ROW_LIMIT..ARENA_SIZE {
            for x in 0..ARENA_SIZE {
                let adjusted = scheduler.pull_toward_home_edge(loc(x, y));
                assert!(adjusted.y() < FRONT_ROW_LIMIT, "start=({}, {})", x, y);
            }
        }
    }

    #[test]
    fn pull_keeps_home_edge_breaches_on_the_edge() {
        let scheduler = ReactiveDefenseScheduler::default();
        for y in FRONT_ROW_LIMIT..HALF_ARENA {
            let left = scheduler.pull_toward_home_edge(loc(HALF_ARENA - 1 - y, y));
            assert_eq!(left.x() + left.y(), HALF_ARENA - 1);
            let right = scheduler.pull_toward_home_edge(loc(HALF_ARENA + y, y));
            assert_eq!(right.x() - right.y(), HALF_ARENA);
        }
    }

    #[test]
    fn respond_sends_scaled_single_spawns() {
        let scheduler = ReactiveDefenseScheduler::default();
        let mut platform = SpawnLog::default();
        let placed = scheduler.respond(&mut platform, &[loc(27, 13), loc(0, 13)], 7.0);
        assert_eq!(placed, 4);
        assert_eq!(
            platform.spawns,
            vec![
                (UnitKind::Interceptor, loc(24, 10), 1),
                (UnitKind::Interceptor, loc(24, 10), 1),
                (UnitKind::Interceptor, loc(3, 10), 1),
                (UnitKind::Interceptor, loc(3, 10), 1),
            ]
        );
    }

    #[test]
    fn respond_in_place_uses_raw_cells() {
        let scheduler = ReactiveDefenseScheduler::default();
        let mut platform = SpawnLog::default();
        let placed = scheduler.respond_in_place(&mut platform, &[loc(27, 13), loc(27, 13)]);
        assert_eq!(placed, 2);
        assert!(platform.spawns.iter().all(|s| s.1 == loc(27, 13)));
    }
}
