mod classic;
mod layered;

pub use classic::classic_wall;
pub use layered::layered_wall;
