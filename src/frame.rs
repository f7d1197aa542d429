//! Action-frame parsing.
//!
//! The platform streams one JSON frame per simulation step. Only the breach
//! list is read here; each entry is
//! `[[x, y], damage, unitType, unitId, playerNumber]` where playerNumber 1
//! is us and 2 is the opponent.

use crate::breach::BreachEvent;
use crate::error::StrategyError;
use crate::location::Location;
use serde::Deserialize;

const SELF_PLAYER_NUMBER: i64 = 1;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFrame {
    #[serde(default)]
    turn_info: Vec<i64>,
    #[serde(default)]
    events: RawEvents,
}

#[derive(Deserialize, Default)]
struct RawEvents {
    #[serde(default)]
    breach: Vec<RawBreach>,
}

#[derive(Deserialize)]
struct RawBreach(
    Location,
    serde_json::Value,
    serde_json::Value,
    serde_json::Value,
    i64,
);

/// Breach events in the order the frame lists them.
pub fn parse_breach_events(frame: &str) -> Result<Vec<BreachEvent>, StrategyError> {
    let raw: RawFrame = serde_json::from_str(frame).map_err(StrategyError::Frame)?;

    let turn = raw
        .turn_info
        .get(1)
        .copied()
        .map(|t| t.max(0) as u32)
        .unwrap_or(0);

    Ok(raw
        .events
        .breach
        .into_iter()
        .map(|RawBreach(location, _, _, _, player)| {
            BreachEvent::new(location, turn, player == SELF_PLAYER_NUMBER)
        })
        .collect())
}
