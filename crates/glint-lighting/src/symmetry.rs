//! Cube symmetry operations on octant-indexed data.
//!
//! Samples, occlusion-pattern bits, and corner values all live on the
//! same 8-octant grid: index bits (b0, b1, b2) = (x, y, z). Every
//! element of the 48-element symmetry group factors into an axis
//! permutation followed by an axis reflection, so one index-mapping
//! operation serves all three domains.

use crate::{Corner, LightMask};
use glint_geom::Vec3;

/// One of the six reorderings of the three axis bits of an octant
/// index. The variant name reads as the source axis feeding each of
/// (x, y, z) in the output: `Yzx` builds the output x bit from the
/// input y bit, y from z, and z from x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPerm {
    Xyz,
    Yxz,
    Xzy,
    Yzx,
    Zxy,
    Zyx,
}

impl AxisPerm {
    pub const ALL: [AxisPerm; 6] = [
        AxisPerm::Xyz,
        AxisPerm::Yxz,
        AxisPerm::Xzy,
        AxisPerm::Yzx,
        AxisPerm::Zxy,
        AxisPerm::Zyx,
    ];

    /// Decode a permutation id from the orbit tables. Ids outside
    /// [0, 5] can only come from corrupted constant data; that is a
    /// fatal invariant violation, not a recoverable error.
    #[inline]
    pub fn from_table_id(id: u8) -> AxisPerm {
        match id {
            0 => AxisPerm::Xyz,
            1 => AxisPerm::Yxz,
            2 => AxisPerm::Xzy,
            3 => AxisPerm::Yzx,
            4 => AxisPerm::Zxy,
            5 => AxisPerm::Zyx,
            _ => unreachable!("invalid axis permutation id {id}"),
        }
    }

    /// For each output index bit (x, y, z), the input bit it is read
    /// from.
    #[inline]
    const fn bit_sources(self) -> [u32; 3] {
        match self {
            AxisPerm::Xyz => [0, 1, 2],
            AxisPerm::Yxz => [1, 0, 2],
            AxisPerm::Xzy => [0, 2, 1],
            AxisPerm::Yzx => [1, 2, 0],
            AxisPerm::Zxy => [2, 0, 1],
            AxisPerm::Zyx => [2, 1, 0],
        }
    }
}

/// A per-axis mirror, stored as an XOR mask over octant index bits
/// (b0 = x, b1 = y, b2 = z). Applying the same reflection twice is the
/// identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisReflect(u8);

impl AxisReflect {
    pub const IDENTITY: AxisReflect = AxisReflect(0);

    /// All eight reflections, indexed by XOR mask.
    pub const ALL: [AxisReflect; 8] = [
        AxisReflect(0),
        AxisReflect(1),
        AxisReflect(2),
        AxisReflect(3),
        AxisReflect(4),
        AxisReflect(5),
        AxisReflect(6),
        AxisReflect(7),
    ];

    #[inline]
    pub const fn new(flip_x: bool, flip_y: bool, flip_z: bool) -> AxisReflect {
        AxisReflect((flip_x as u8) | ((flip_y as u8) << 1) | ((flip_z as u8) << 2))
    }

    /// Decode a reflection id from the orbit tables. Table ids carry
    /// the x flip in the high bit and the z flip in the low bit, so
    /// the three bits are reversed into index-bit order here.
    #[inline]
    pub fn from_table_id(id: u8) -> AxisReflect {
        match id {
            0..=7 => AxisReflect(((id & 1) << 2) | (id & 2) | ((id >> 2) & 1)),
            _ => unreachable!("invalid axis reflection id {id}"),
        }
    }

    #[inline]
    pub const fn xor_mask(self) -> u8 {
        self.0
    }
}

/// Index of the input octant that lands at output index `i` after
/// permuting then reflecting. This is the single primitive behind the
/// sample, pattern, and corner-mask transforms.
#[inline]
pub fn octant_source(perm: AxisPerm, refl: AxisReflect, i: usize) -> usize {
    let j = i ^ refl.xor_mask() as usize;
    let s = perm.bit_sources();
    ((j >> s[0]) & 1) | (((j >> s[1]) & 1) << 1) | (((j >> s[2]) & 1) << 2)
}

/// Reorder an 8-sample array under a symmetry element.
#[inline]
pub fn transform_samples(samples: &[Vec3; 8], perm: AxisPerm, refl: AxisReflect) -> [Vec3; 8] {
    core::array::from_fn(|i| samples[octant_source(perm, refl, i)])
}

/// Apply a symmetry element to the bits of an occlusion pattern.
#[inline]
pub fn transform_pattern(pattern: u8, perm: AxisPerm, refl: AxisReflect) -> u8 {
    let mut out = 0u8;
    for i in 0..8 {
        if pattern & (1 << octant_source(perm, refl, i)) != 0 {
            out |= 1 << i;
        }
    }
    out
}

/// Reorder the corners of a light mask under a symmetry element.
pub fn transform_mask<M: LightMask>(mask: &M, perm: AxisPerm, refl: AxisReflect) -> M {
    let mut out = M::default();
    for i in 0..8 {
        let src = Corner::from_index(octant_source(perm, refl, i));
        out.set(Corner::from_index(i), mask.get(src));
    }
    out
}
