//! Six-layer wall used by the classic policy. No gates: every layer is
//! attempted every turn and the platform drops what cannot be paid for.

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

const LAYER_5_SUPPORTS: &[(u8, u8)] = &[
    (6, 9), (7, 9), (20, 9), (21, 9), (7, 8), (10, 8), (17, 8), (20, 8), (8, 7),
    (10, 7), (12, 7), (15, 7), (17, 7), (19, 7), (10, 6), (12, 6), (15, 6), (17, 6),
];

const LAYER_6_TURRETS: &[(u8, u8)] = &[
    (4, 11), (23, 11), (3, 10), (4, 10), (23, 10), (24, 10), (4, 9), (8, 9), (9, 9), (18, 9), (19, 9),
    (23, 9), (8, 8), (9, 8), (13, 8), (14, 8), (18, 8), (19, 8), (9, 7), (18, 7), (9, 6), (18, 6),
];

pub fn classic_wall() -> DefenseFormation {
    DefenseFormation::new(
        "classic",
        vec![
            PlacementBatch::new("layer1_walls", UnitKind::Wall, LAYER_1_WALLS),
            PlacementBatch::new("layer1_turrets", UnitKind::Turret, LAYER_1_TURRETS),
            PlacementBatch::new("layer2_walls", UnitKind::Wall, LAYER_2_WALLS),
            PlacementBatch::new("layer2_turrets", UnitKind::Turret, LAYER_2_TURRETS),
            PlacementBatch::new("layer3_walls", UnitKind::Wall, LAYER_3_WALLS),
            PlacementBatch::new("layer3_turrets", UnitKind::Turret, LAYER_3_TURRETS),
            PlacementBatch::new("layer4_walls", UnitKind::Wall, LAYER_4_WALLS),
            PlacementBatch::new("layer4_turrets", UnitKind::Turret, LAYER_4_TURRETS),
            PlacementBatch::new("layer5_supports", UnitKind::Support, LAYER_5_SUPPORTS),
            PlacementBatch::new("layer6_turrets", UnitKind::Turret, LAYER_6_TURRETS),
        ],
    )
}
