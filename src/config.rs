//! Match-start configuration.
//!
//! The platform hands over its rules as JSON once per match. Only the unit
//! table matters here: costs decide what the arena lets us buy and the turret
//! damage value drives spawn risk scoring. The parsed `GameConfig` is
//! immutable and passed by reference to whatever needs it.

use crate::error::StrategyError;
use crate::units::*;
use serde::Deserialize;

/// Per-kind numbers read from the platform's unit table.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitStats {
    pub shorthand: String,
    pub cost: f64,
    pub damage: f64,
    pub range: f64,
}

impl UnitStats {
    pub fn new(shorthand: &str, cost: f64, damage: f64, range: f64) -> Self {
        UnitStats {
            shorthand: shorthand.to_string(),
            cost,
            damage,
            range,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    unit_information: Vec<RawUnitInformation>,
}

#[derive(Deserialize)]
struct RawUnitInformation {
    #[serde(default)]
    shorthand: String,
    #[serde(default, alias = "cost1")]
    cost: f64,
    #[serde(default)]
    cost2: Option<f64>,
    #[serde(default, alias = "attackDamage", alias = "attackDamageWalker")]
    damage: f64,
    #[serde(default, rename = "attackRange", alias = "range")]
    range: f64,
}

/// Immutable rules for one match.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    units: Vec<UnitStats>,
}

impl GameConfig {
    /// Build from explicit stats, listed in `UnitKind::ALL` order.
    pub fn from_stats(units: Vec<UnitStats>) -> Result<Self, StrategyError> {
        if units.len() < UnitKind::ALL.len() {
            return Err(StrategyError::MissingUnitInformation {
                expected: UnitKind::ALL.len(),
                found: units.len(),
            });
        }

        Ok(GameConfig { units })
    }

    /// Parse the platform's match-start JSON.
    pub fn from_json(json: &str) -> Result<Self, StrategyError> {
        let raw: RawConfig = serde_json::from_str(json).map_err(StrategyError::Config)?;

        let units = raw
            .unit_information
            .into_iter()
            .zip(UnitKind::ALL.iter())
            .map(|(info, kind)| {
                // Newer rule sets split the price into a Matter and an Energy column.
                let cost = match info.cost2 {
                    Some(energy) if kind.is_mobile() && energy > 0.0 => energy,
                    _ => info.cost,
                };
                UnitStats {
                    shorthand: info.shorthand,
                    cost,
                    damage: info.damage,
                    range: info.range,
                }
            })
            .collect();

        GameConfig::from_stats(units)
    }

    pub fn stats(&self, kind: UnitKind) -> &UnitStats {
        &self.units[kind.index()]
    }

    pub fn cost(&self, kind: UnitKind) -> f64 {
        self.stats(kind).cost
    }

    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.stats(kind).shorthand
    }

    /// Damage of the primary defensive turret, the unit of spawn risk.
    pub fn turret_damage(&self) -> f64 {
        self.stats(UnitKind::Turret).damage
    }
}

impl Default for GameConfig {
    /// The reference game's rule numbers, for offline use.
    fn default() -> Self {
        GameConfig {
            units: vec![
                UnitStats::new("FF", 1.0, 0.0, 0.0),
                UnitStats::new("EF", 4.0, 0.0, 3.0),
                UnitStats::new("DF", 3.0, 4.0, 3.0),
                UnitStats::new("PI", 1.0, 1.0, 3.0),
                UnitStats::new("EI", 3.0, 3.0, 4.5),
                UnitStats::new("SI", 1.0, 5.0, 4.5),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "unitInformation": [
            {"shorthand": "FF", "cost": 1.0, "startHealth": 60},
            {"shorthand": "EF", "cost": 4.0, "attackRange": 3.0},
            {"shorthand": "DF", "cost": 3.0, "damage": 4.0, "attackRange": 3.5},
            {"shorthand": "PI", "cost": 1.0, "damage": 2.0},
            {"shorthand": "EI", "cost": 3.0, "damage": 3.0},
            {"shorthand": "SI", "cost": 1.0, "damage": 20.0}
        ],
        "resources": {"turnIntervalForBitSchedule": 10}
    }"#;

    #[test]
    fn parses_unit_table() {
        let config = GameConfig::from_json(CONFIG).unwrap();
        assert_eq!(config.shorthand(UnitKind::Turret), "DF");
        assert_eq!(config.turret_damage(), 4.0);
        assert_eq!(config.stats(UnitKind::Turret).range, 3.5);
        assert_eq!(config.cost(UnitKind::Demolisher), 3.0);
        assert_eq!(config.stats(UnitKind::Wall).damage, 0.0);
    }

    #[test]
    fn split_cost_columns() {
        let json = r#"{"unitInformation": [
            {"shorthand": "FF", "cost1": 1.0, "cost2": 0.0},
            {"shorthand": "EF", "cost1": 4.0, "cost2": 0.0},
            {"shorthand": "DF", "cost1": 2.0, "cost2": 0.0, "attackDamageWalker": 5.0},
            {"shorthand": "PI", "cost1": 0.0, "cost2": 1.0},
            {"shorthand": "EI", "cost1": 0.0, "cost2": 3.0},
            {"shorthand": "SI", "cost1": 0.0, "cost2": 1.0}
        ]}"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.cost(UnitKind::Turret), 2.0);
        assert_eq!(config.cost(UnitKind::Demolisher), 3.0);
        assert_eq!(config.turret_damage(), 5.0);
    }

    #[test]
    fn short_unit_table_is_rejected() {
        let json = r#"{"unitInformation": [{"shorthand": "FF"}]}"#;
        match GameConfig::from_json(json) {
            Err(StrategyError::MissingUnitInformation { expected, found }) => {
                assert_eq!(expected, 6);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            GameConfig::from_json("{"),
            Err(StrategyError::Config(_))
        ));
    }
}
