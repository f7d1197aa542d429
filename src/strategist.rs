//! Match-lifetime driver for the three platform callbacks.
//!
//! `Strategist` owns the parsed configuration, a turn policy and the breach
//! memory for one match. The host calls `on_turn` once per turn and
//! `on_action_frame` for every simulation frame in between.

use crate::breach::*;
use crate::config::GameConfig;
use crate::error::StrategyError;
use crate::frame::parse_breach_events;
use crate::platform::GamePlatform;
use crate::policy::*;
use log::*;

pub struct Strategist<P: TurnPolicy, B: BreachMemory> {
    config: GameConfig,
    policy: P,
    breaches: B,
}

impl Strategist<LayeredWallPolicy, BreachTracker> {
    /// Layered wall policy with set-backed breach memory.
    pub fn layered(config: GameConfig) -> Self {
        Strategist::new(config, LayeredWallPolicy::new(), BreachTracker::new())
    }
}

impl Strategist<ClassicWallPolicy, BreachHistory> {
    /// Classic wall policy with list-backed breach memory.
    pub fn classic(config: GameConfig) -> Self {
        Strategist::new(config, ClassicWallPolicy::new(), BreachHistory::new())
    }
}

impl<P: TurnPolicy, B: BreachMemory> Strategist<P, B> {
    pub fn new(config: GameConfig, policy: P, breaches: B) -> Self {
        Strategist {
            config,
            policy,
            breaches,
        }
    }

    /// Parse the match-start configuration and set up fresh breach memory.
    pub fn on_game_start(config_json: &str, policy: P, breaches: B) -> Result<Self, StrategyError> {
        let config = GameConfig::from_json(config_json)?;
        info!("Configured '{}' policy", policy.name());
        Ok(Strategist::new(config, policy, breaches))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn breaches(&self) -> &B {
        &self.breaches
    }

    /// Run the policy for this turn and submit. The turn is submitted even
    /// if the policy fails; the error is logged and `None` returned.
    pub fn on_turn<G: GamePlatform>(&mut self, platform: &mut G) -> Option<TurnReport> {
        info!(
            "Performing turn {} of the '{}' policy",
            platform.turn_number(),
            self.policy.name()
        );

        let result = self.policy.take_turn(platform, &self.config, &self.breaches);

        platform.submit_turn();

        match result {
            Ok(report) => {
                debug!("Turn report: {:?}", report);
                Some(report)
            }
            Err(err) => {
                warn!("Turn policy failed, submitting turn anyway: {}", err);
                None
            }
        }
    }

    /// Feed one action frame. Returns the number of breach events it held.
    pub fn on_action_frame(&mut self, frame_json: &str) -> Result<usize, StrategyError> {
        let events = parse_breach_events(frame_json)?;

        for event in &events {
            self.breaches.record(event);
        }

        Ok(events.len())
    }

    /// Record a single breach reported outside the frame feed.
    pub fn record_breach(&mut self, event: &BreachEvent) {
        self.breaches.record(event);
    }
}
