pub mod breach;
pub mod config;
pub mod constants;
pub mod defense;
pub mod error;
pub mod formation;
pub mod formations;
pub mod frame;
pub mod location;
pub mod planner;
pub mod platform;
pub mod policy;
pub mod scoring;
pub mod strategist;
pub mod units;

#[cfg(feature = "arena")]
pub mod arena;

pub use breach::*;
pub use config::*;
pub use error::*;
pub use location::*;
pub use platform::*;
pub use policy::*;
pub use strategist::*;
pub use units::*;
