//! Seven-layer wall. Layers 1-5 form a staggered turret/wall line across
//! the front; layers 6 and 7 build a support cluster around the central
//! deployment lane once Matter allows.

use crate::formation::*;
use crate::units::UnitKind;

const LAYER_1_WALLS: &[(u8, u8)] = &[(3, 13), (24, 13), (6, 12), (21, 12), (9, 11), (18, 11), (12, 10), (15, 10)];
const LAYER_1_TURRETS: &[(u8, u8)] = &[(3, 12), (24, 12), (6, 11), (21, 11), (9, 10), (18, 10), (12, 9), (15, 9)];

const LAYER_2_WALLS: &[(u8, u8)] = &[(0, 13), (1, 13), (26, 13), (27, 13)];
const LAYER_2_TURRETS: &[(u8, u8)] = &[(1, 12), (2, 12), (25, 12), (26, 12), (7, 11), (20, 11), (10, 10), (17, 10)];

const LAYER_3_WALLS: &[(u8, u8)] = &[(2, 13), (4, 13), (23, 13), (25, 13), (7, 12), (20, 12)];
const LAYER_3_TURRETS: &[(u8, u8)] = &[(4, 12), (23, 12), (8, 11), (19, 11), (13, 9), (14, 9)];

const LAYER_4_WALLS: &[(u8, u8)] = &[(8, 12), (19, 12), (10, 11), (17, 11), (13, 10), (14, 10)];
const LAYER_4_TURRETS: &[(u8, u8)] = &[
    (2, 11), (3, 11), (24, 11), (25, 11), (6, 10), (7, 10), (8, 10),
    (19, 10), (20, 10), (21, 10), (10, 9), (17, 9), (12, 8), (15, 8),
];

const LAYER_5_TURRETS: &[(u8, u8)] = &[
    (4, 11), (23, 11), (4, 10), (23, 10), (6, 9), (9, 9),
    (18, 9), (21, 9), (10, 8), (13, 8), (14, 8), (17, 8),
];

const LAYER_6_SUPPORTS: &[(u8, u8)] = &[
    (13, 0), (15, 1), (13, 1), (15, 2), (14, 3), (13, 3), (12, 3), (10, 3),
    (10, 4), (11, 5), (12, 5), (13, 5), (14, 5), (15, 5), (16, 5), (18, 5),
];

const LAYER_7_SUPPORTS: &[(u8, u8)] = &[(18, 4), (17, 3), (10, 5), (12, 1), (16, 3), (15, 3)];

/// Matter needed before the first support layer is attempted.
const LAYER_6_MATTER: f64 = 6.0;
/// Matter needed before the second support layer is attempted.
const LAYER_7_MATTER: f64 = 10.0;

pub fn layered_wall() -> DefenseFormation {
    DefenseFormation::new(
        "layered",
        vec![
            PlacementBatch::new("layer1_walls", UnitKind::Wall, LAYER_1_WALLS),
            PlacementBatch::new("layer1_turrets", UnitKind::Turret, LAYER_1_TURRETS),
            PlacementBatch::new("layer2_walls", UnitKind::Wall, LAYER_2_WALLS),
            PlacementBatch::new("layer2_turrets", UnitKind::Turret, LAYER_2_TURRETS),
            PlacementBatch::new("layer3_walls", UnitKind::Wall, LAYER_3_WALLS),
            PlacementBatch::new("layer3_turrets", UnitKind::Turret, LAYER_3_TURRETS),
            PlacementBatch::new("layer4_walls", UnitKind::Wall, LAYER_4_WALLS),
            PlacementBatch::new("layer4_turrets", UnitKind::Turret, LAYER_4_TURRETS),
            PlacementBatch::new("layer5_turrets", UnitKind::Turret, LAYER_5_TURRETS),
            PlacementBatch::new("layer6_supports", UnitKind::Support, LAYER_6_SUPPORTS)
                .gated(ResourceGate::matter_above(LAYER_6_MATTER)),
            PlacementBatch::new("layer7_supports", UnitKind::Support, LAYER_7_SUPPORTS)
                .gated(ResourceGate::matter_above(LAYER_7_MATTER)),
        ],
    )
}
