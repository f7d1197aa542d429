pub const ARENA_SIZE: u8 = 28;
pub const HALF_ARENA: u8 = ARENA_SIZE / 2;

/// Player indices as the platform's query surface numbers them.
pub const OWN_PLAYER: usize = 0;
pub const OPPONENT_PLAYER: usize = 1;

/// Quantity requested for a bulk mobile spawn. The platform caps the actual
/// count to what the Energy balance can pay for.
pub const BULK_SPAWN_QUANTITY: u32 = 1000;

/// Upper bound on single-unit attempts in one saturation loop.
pub const SATURATION_LIMIT: u32 = 1000;

/// Own Energy must exceed this for the layered policy to attack.
pub const LAYERED_OFFENSE_ENERGY: f64 = 14.0;

/// Own Energy must exceed this for the classic policy to attack.
pub const CLASSIC_OFFENSE_ENERGY: f64 = 15.0;

/// Opponent Energy at or above which the layered policy stalls with interceptors.
pub const STALL_ENEMY_ENERGY: f64 = 10.0;

/// Interceptors spawned per breach are capped at this count.
pub const MAX_INTERCEPTORS_PER_BREACH: u32 = 3;

/// One extra interceptor per this much opponent Energy.
pub const ENERGY_PER_INTERCEPTOR: f64 = 4.0;

/// Breach coordinates at or beyond this row are pulled toward the home edge
/// before an interceptor is spawned there.
pub const FRONT_ROW_LIMIT: u8 = 11;
