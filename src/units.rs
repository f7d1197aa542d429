use bitflags::*;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UnitTraits: u8 {
        const NONE = 0;
        /// Placed once, stays until destroyed. Paid for in Matter.
        const STATIONARY = 1;
        /// Walks toward an edge after spawning. Paid for in Energy.
        const MOBILE = 2;
        /// Deals damage to units in range.
        const ATTACKER = 4;
    }
}

/// The six unit kinds of the game, in the order the platform's
/// `unitInformation` table lists them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Ord, PartialOrd)]
pub enum UnitKind {
    Wall,
    Support,
    Turret,
    Scout,
    Demolisher,
    Interceptor,
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Wall,
        UnitKind::Support,
        UnitKind::Turret,
        UnitKind::Scout,
        UnitKind::Demolisher,
        UnitKind::Interceptor,
    ];

    /// Position in the platform's unit table.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn traits(self) -> UnitTraits {
        match self {
            UnitKind::Wall | UnitKind::Support => UnitTraits::STATIONARY,
            UnitKind::Turret => UnitTraits::STATIONARY | UnitTraits::ATTACKER,
            UnitKind::Scout | UnitKind::Demolisher | UnitKind::Interceptor => {
                UnitTraits::MOBILE | UnitTraits::ATTACKER
            }
        }
    }

    pub fn is_stationary(self) -> bool {
        self.traits().contains(UnitTraits::STATIONARY)
    }

    pub fn is_mobile(self) -> bool {
        self.traits().contains(UnitTraits::MOBILE)
    }

    /// Resource that pays for this kind.
    pub fn paid_with(self) -> ResourceKind {
        if self.is_stationary() {
            ResourceKind::Matter
        } else {
            ResourceKind::Energy
        }
    }
}

/// The two independent budgets every player holds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ResourceKind {
    /// Spent on mobile units.
    Energy,
    /// Spent on stationary units.
    Matter,
}

impl ResourceKind {
    pub fn index(self) -> usize {
        match self {
            ResourceKind::Energy => 0,
            ResourceKind::Matter => 1,
        }
    }
}
