//! Constant orbit data for the 256 occlusion patterns.
//!
//! The four transform tables and the class table were enumerated
//! offline over the 48-element cube symmetry group; the kernel only
//! relies on their mutual consistency, which `tests/orbit_tables.rs`
//! checks exhaustively. Permutation and reflection ids decode through
//! [`AxisPerm::from_table_id`] and [`AxisReflect::from_table_id`].

use crate::symmetry::{AxisPerm, AxisReflect};

/// Number of equivalence classes the 256 patterns collapse into.
pub const CLASS_COUNT: usize = 22;

/// Equivalence class id for every occlusion pattern.
pub const PATTERN_CLASS: [u8; 256] = [
    0, 1, 1, 2, 1, 2, 3, 4, 1, 3, 2, 4, 2, 4, 4, 5,
    1, 2, 3, 4, 3, 4, 6, 7, 8, 9, 9, 10, 9, 10, 11, 12,
    1, 3, 2, 4, 8, 9, 9, 10, 3, 6, 4, 7, 9, 11, 10, 12,
    2, 4, 4, 5, 9, 10, 11, 12, 9, 11, 10, 12, 13, 14, 14, 15,
    1, 3, 8, 9, 2, 4, 9, 10, 3, 6, 9, 11, 4, 7, 10, 12,
    2, 4, 9, 10, 4, 5, 11, 12, 9, 11, 13, 14, 10, 12, 14, 15,
    3, 6, 9, 11, 9, 11, 13, 14, 6, 16, 11, 17, 11, 17, 14, 18,
    4, 7, 10, 12, 10, 12, 14, 15, 11, 17, 14, 18, 14, 18, 19, 20,
    1, 8, 3, 9, 3, 9, 6, 11, 2, 9, 4, 10, 4, 10, 7, 12,
    3, 9, 6, 11, 6, 11, 16, 17, 9, 13, 11, 14, 11, 14, 17, 18,
    2, 9, 4, 10, 9, 13, 11, 14, 4, 11, 5, 12, 10, 14, 12, 15,
    4, 10, 7, 12, 11, 14, 17, 18, 10, 14, 12, 15, 14, 19, 18, 20,
    2, 9, 9, 13, 4, 10, 11, 14, 4, 11, 10, 14, 5, 12, 12, 15,
    4, 10, 11, 14, 7, 12, 17, 18, 10, 14, 14, 19, 12, 15, 18, 20,
    4, 11, 10, 14, 10, 14, 14, 19, 7, 17, 12, 18, 12, 18, 15, 20,
    5, 12, 12, 15, 12, 15, 18, 20, 12, 18, 15, 20, 15, 20, 20, 21,
];

/// Axis permutation canonicalizing the sample array, per pattern.
pub const SAMPLE_PERM_ID: [u8; 256] = [
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 3, 2, 2, 4, 4, 0, 0, 0, 0, 2, 0, 4, 1, 0, 0,
    0, 2, 3, 2, 0, 2, 0, 0, 4, 0, 4, 0, 4, 0, 1, 0,
    0, 2, 2, 2, 4, 3, 2, 2, 4, 2, 3, 2, 0, 0, 0, 0,
    0, 4, 0, 4, 3, 4, 0, 1, 2, 0, 2, 0, 2, 0, 0, 0,
    1, 4, 2, 3, 4, 4, 4, 4, 2, 4, 1, 1, 3, 4, 1, 1,
    0, 0, 0, 2, 0, 4, 3, 3, 0, 0, 4, 0, 2, 0, 3, 0,
    0, 0, 0, 2, 1, 4, 3, 3, 0, 0, 1, 2, 0, 4, 0, 0,
    0, 0, 4, 4, 2, 2, 0, 0, 3, 0, 4, 1, 2, 0, 0, 0,
    0, 0, 0, 2, 0, 4, 0, 0, 0, 3, 4, 3, 2, 3, 0, 0,
    1, 2, 4, 3, 2, 1, 4, 1, 4, 4, 4, 4, 3, 1, 4, 1,
    0, 0, 0, 2, 0, 1, 0, 2, 1, 3, 4, 3, 0, 0, 4, 0,
    0, 4, 4, 0, 2, 3, 2, 0, 2, 2, 3, 0, 2, 2, 2, 0,
    0, 1, 0, 0, 0, 4, 0, 4, 0, 3, 1, 0, 2, 3, 2, 0,
    0, 0, 1, 0, 0, 1, 3, 0, 0, 0, 4, 4, 2, 2, 3, 0,
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
];

/// Axis reflection canonicalizing the sample array, per pattern.
pub const SAMPLE_REFLECT_ID: [u8; 256] = [
    0, 0, 4, 0, 2, 0, 0, 0, 6, 2, 2, 4, 2, 2, 6, 0,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 4, 0, 0, 0,
    5, 2, 2, 4, 3, 0, 4, 4, 1, 4, 1, 4, 5, 4, 2, 4,
    1, 2, 6, 0, 2, 0, 0, 0, 3, 4, 2, 4, 0, 0, 4, 0,
    3, 2, 2, 0, 1, 4, 2, 4, 1, 2, 5, 2, 1, 2, 2, 2,
    1, 2, 2, 4, 6, 0, 0, 0, 3, 4, 0, 0, 5, 4, 4, 0,
    1, 1, 5, 2, 3, 2, 0, 0, 7, 0, 7, 0, 7, 6, 3, 0,
    1, 1, 5, 2, 5, 2, 4, 0, 7, 5, 3, 0, 3, 0, 0, 0,
    7, 1, 3, 1, 3, 1, 6, 6, 3, 6, 5, 6, 5, 6, 6, 6,
    3, 1, 5, 6, 3, 6, 1, 4, 7, 1, 3, 2, 3, 1, 2, 2,
    3, 6, 3, 6, 7, 1, 5, 2, 7, 1, 1, 1, 7, 6, 5, 2,
    5, 1, 5, 6, 3, 1, 1, 2, 7, 6, 3, 2, 7, 3, 1, 4,
    3, 6, 7, 1, 3, 1, 5, 2, 7, 1, 3, 6, 1, 1, 5, 2,
    3, 1, 5, 1, 3, 6, 7, 2, 7, 5, 7, 2, 3, 1, 1, 2,
    7, 1, 3, 5, 3, 5, 7, 1, 7, 3, 7, 3, 7, 3, 3, 6,
    1, 1, 5, 1, 3, 1, 1, 1, 7, 3, 3, 5, 3, 3, 7, 0,
];

/// Axis permutation restoring the output mask, per pattern.
pub const MASK_PERM_ID: [u8; 256] = [
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 4, 2, 2, 3, 3, 0, 0, 0, 0, 2, 0, 3, 1, 0, 0,
    0, 2, 4, 2, 0, 2, 0, 0, 3, 0, 3, 0, 3, 0, 1, 0,
    0, 2, 2, 2, 3, 4, 2, 2, 3, 2, 4, 2, 0, 0, 0, 0,
    0, 3, 0, 3, 4, 3, 0, 1, 2, 0, 2, 0, 2, 0, 0, 0,
    1, 3, 2, 4, 3, 3, 3, 3, 2, 3, 1, 1, 4, 3, 1, 1,
    0, 0, 0, 2, 0, 3, 4, 4, 0, 0, 3, 0, 2, 0, 4, 0,
    0, 0, 0, 2, 1, 3, 4, 4, 0, 0, 1, 2, 0, 3, 0, 0,
    0, 0, 3, 3, 2, 2, 0, 0, 4, 0, 3, 1, 2, 0, 0, 0,
    0, 0, 0, 2, 0, 3, 0, 0, 0, 4, 3, 4, 2, 4, 0, 0,
    1, 2, 3, 4, 2, 1, 3, 1, 3, 3, 3, 3, 4, 1, 3, 1,
    0, 0, 0, 2, 0, 1, 0, 2, 1, 4, 3, 4, 0, 0, 3, 0,
    0, 3, 3, 0, 2, 4, 2, 0, 2, 2, 4, 0, 2, 2, 2, 0,
    0, 1, 0, 0, 0, 3, 0, 3, 0, 4, 1, 0, 2, 4, 2, 0,
    0, 0, 1, 0, 0, 1, 4, 0, 0, 0, 3, 3, 2, 2, 4, 0,
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
];

/// Axis reflection restoring the output mask, per pattern.
pub const MASK_REFLECT_ID: [u8; 256] = [
    0, 0, 4, 0, 2, 0, 0, 0, 6, 2, 4, 4, 2, 2, 6, 0,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 2, 0, 0, 0,
    5, 1, 4, 4, 3, 0, 4, 4, 4, 4, 4, 4, 6, 4, 4, 4,
    1, 1, 5, 0, 1, 0, 0, 0, 5, 4, 4, 4, 0, 0, 4, 0,
    3, 1, 2, 0, 2, 2, 2, 2, 2, 2, 6, 2, 2, 2, 2, 2,
    1, 1, 1, 1, 3, 0, 0, 0, 3, 2, 0, 0, 3, 2, 2, 0,
    1, 1, 5, 1, 3, 1, 0, 0, 7, 0, 7, 0, 7, 6, 6, 0,
    1, 1, 5, 1, 3, 1, 1, 0, 7, 5, 5, 0, 3, 0, 0, 0,
    7, 1, 5, 4, 3, 2, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    3, 1, 5, 5, 3, 3, 1, 4, 7, 2, 5, 4, 3, 2, 2, 2,
    5, 5, 5, 5, 7, 1, 6, 4, 7, 4, 4, 4, 7, 6, 6, 4,
    5, 1, 5, 5, 3, 1, 1, 1, 7, 5, 5, 4, 7, 3, 4, 4,
    3, 3, 7, 1, 3, 2, 6, 2, 7, 2, 6, 6, 2, 2, 6, 2,
    3, 1, 5, 1, 3, 3, 7, 1, 7, 3, 7, 2, 3, 2, 2, 2,
    7, 1, 5, 5, 3, 3, 7, 1, 7, 3, 7, 5, 7, 3, 6, 6,
    1, 1, 5, 1, 3, 1, 1, 1, 7, 3, 5, 5, 3, 3, 7, 0,
];

/// Canonical representative pattern for each class.
pub const CLASS_PATTERNS: [u8; CLASS_COUNT] = [
    0x00, 0x01, 0x03, 0x06, 0x07, 0x0F, 0x16, 0x17, 0x18, 0x19, 0x1B, 0x1E, 0x1F, 0x3C, 0x3D, 0x3F, 0x69, 0x6B, 0x6F, 0x7E, 0x7F, 0xFF,
];

/// One component of a class rule: the listed samples are summed,
/// divided by 8 (always 8, regardless of how many samples contribute;
/// occluded contributions darken rather than renormalize), quantized,
/// and written to the listed corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleComponent {
    /// Corner-index bitmask receiving the value.
    pub corners: u8,
    /// Sample-index bitmask summed for the value.
    pub samples: u8,
}

const fn comp(corners: u8, samples: u8) -> RuleComponent {
    RuleComponent { corners, samples }
}

/// The canonical lighting rule for each equivalence class. Corners not
/// named by any component keep the mask default. Class 0 (nothing
/// visible) writes no corners; class 21 (everything visible) feeds all
/// eight samples to all eight corners.
pub const CLASS_RULES: [&[RuleComponent]; CLASS_COUNT] = [
    &[],
    &[comp(0x80, 0x80)],
    &[comp(0xC0, 0xC0)],
    &[comp(0x20, 0x20), comp(0x40, 0x40)],
    &[comp(0xE0, 0xE0)],
    &[comp(0xF0, 0xF0)],
    &[comp(0x08, 0x08), comp(0x20, 0x20), comp(0x40, 0x40)],
    &[comp(0xE8, 0xE8)],
    &[comp(0x08, 0x08), comp(0x10, 0x10)],
    &[comp(0x88, 0x88), comp(0x10, 0x10)],
    &[comp(0xD8, 0xD8)],
    &[comp(0x08, 0x08), comp(0x70, 0x70)],
    &[comp(0xF8, 0xF8)],
    &[comp(0x0C, 0x0C), comp(0x30, 0x30)],
    &[comp(0xBC, 0xBC)],
    &[comp(0xFC, 0xFC)],
    &[comp(0x02, 0x02), comp(0x04, 0x04), comp(0x10, 0x10), comp(0x80, 0x80)],
    &[comp(0x02, 0x02), comp(0xD4, 0xD4)],
    &[comp(0xF6, 0xF6)],
    &[comp(0x7E, 0x7E)],
    &[comp(0xFE, 0xFE)],
    &[comp(0xFF, 0xFF)],
];

/// Class id for a pattern.
#[inline]
pub fn pattern_class(pattern: u8) -> usize {
    PATTERN_CLASS[pattern as usize] as usize
}

/// Symmetry element that canonicalizes the sample array for a pattern.
#[inline]
pub fn sample_transform(pattern: u8) -> (AxisPerm, AxisReflect) {
    (
        AxisPerm::from_table_id(SAMPLE_PERM_ID[pattern as usize]),
        AxisReflect::from_table_id(SAMPLE_REFLECT_ID[pattern as usize]),
    )
}

/// Symmetry element that restores a canonical mask to the pattern's
/// original orientation.
#[inline]
pub fn mask_transform(pattern: u8) -> (AxisPerm, AxisReflect) {
    (
        AxisPerm::from_table_id(MASK_PERM_ID[pattern as usize]),
        AxisReflect::from_table_id(MASK_REFLECT_ID[pattern as usize]),
    )
}
