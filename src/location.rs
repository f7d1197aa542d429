use crate::constants::*;
use serde::{Deserialize, Deserializer};

/// A cell on the arena grid. Equality, ordering and hashing are by value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u16,
}

impl Location {
    pub const fn from_coords(x: u8, y: u8) -> Self {
        Location {
            packed: ((y as u16) << 8) | x as u16,
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    #[inline]
    pub fn y(self) -> u8 {
        ((self.packed >> 8) & 0xFF) as u8
    }

    /// Signed offset, returning `None` when the result leaves the grid square.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x() as i16 + dx as i16;
        let y = self.y() as i16 + dy as i16;
        let size = ARENA_SIZE as i16;

        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Location::from_coords(x as u8, y as u8))
        } else {
            None
        }
    }

    pub fn distance_squared_to(self, other: Self) -> u32 {
        let dx = self.x() as i32 - other.x() as i32;
        let dy = self.y() as i32 - other.y() as i32;

        (dx * dx + dy * dy) as u32
    }

    /// Whether the cell lies inside the diamond-shaped playable arena.
    pub fn in_arena_bounds(self) -> bool {
        let (x, y) = (self.x() as i16, self.y() as i16);
        let half = HALF_ARENA as i16;

        if y < half {
            x >= half - 1 - y && x <= half + y
        } else if y < ARENA_SIZE as i16 {
            x >= y - half && x <= (3 * half - 1) - y
        } else {
            false
        }
    }

    /// Whether the cell is on the bottom half, which player 0 builds on.
    pub fn is_home_half(self) -> bool {
        self.y() < HALF_ARENA
    }
}

impl From<(u8, u8)> for Location {
    fn from((x, y): (u8, u8)) -> Self {
        Location::from_coords(x, y)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x(), self.y())
    }
}

/// Read from the `[x, y]` pair used on the wire.
impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <[u8; 2]>::deserialize(deserializer).map(|[x, y]| Location::from_coords(x, y))
    }
}
