//! Occlusion-aware per-corner vertex lighting for voxel meshing.
//!
//! Given eight directional light samples around a voxel cell and an
//! 8-bit occlusion pattern saying which neighboring octants still
//! contribute light to which corners, [`compute_with_occlusion`]
//! produces a quantized light value for each of the cell's eight
//! corner vertices. Occluded contributions are dropped without
//! renormalizing, so heavily occluded corners come out darker. This is
//! the ambient-occlusion effect the mesher feeds into vertex colors.
//!
//! Rather than encoding a rule for all 256 patterns, patterns are
//! reduced to 22 canonical classes under the cube's 48 rotation and
//! reflection symmetries ([`orbit_tables`]), one rule is applied per
//! class, and the result is rotated back ([`symmetry`]). Everything is
//! pure, allocation-free, and safe to call from any number of meshing
//! threads at once.
#![forbid(unsafe_code)]

use glint_geom::Vec3;

pub mod orbit_tables;
pub mod symmetry;


use orbit_tables::{CLASS_RULES, mask_transform, pattern_class, sample_transform};
use symmetry::{octant_source, transform_samples};

/// A corner of the voxel cell, addressed by offset bits
/// (dx, dy, dz) ∈ {0, 1}.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Corner {
    pub dx: u8,
    pub dy: u8,
    pub dz: u8,
}

impl Corner {
    #[inline]
    pub const fn new(dx: u8, dy: u8, dz: u8) -> Corner {
        Corner { dx, dy, dz }
    }

    /// Linear octant index: dx | dy << 1 | dz << 2. Shares the bit
    /// layout of sample indices, so symmetry ops apply to both.
    #[inline]
    pub const fn index(self) -> usize {
        (self.dx | (self.dy << 1) | (self.dz << 2)) as usize
    }

    #[inline]
    pub const fn from_index(i: usize) -> Corner {
        Corner {
            dx: (i & 1) as u8,
            dy: ((i >> 1) & 1) as u8,
            dz: ((i >> 2) & 1) as u8,
        }
    }

    /// All eight corners in index order.
    #[inline]
    pub fn all() -> impl Iterator<Item = Corner> {
        (0..8).map(Corner::from_index)
    }
}

/// Per-corner output container the kernel writes into. Implementors
/// must start with every corner at a zero/default value; the kernel
/// only sets corners the class rule names.
pub trait LightMask: Default {
    fn get(&self, corner: Corner) -> [u8; 3];
    fn set(&mut self, corner: Corner, value: [u8; 3]);
}

/// Plain stack-resident light mask: one quantized RGB triple per
/// corner, zero-initialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CornerLight {
    values: [[u8; 3]; 8],
}

impl LightMask for CornerLight {
    #[inline]
    fn get(&self, corner: Corner) -> [u8; 3] {
        self.values[corner.index()]
    }

    #[inline]
    fn set(&mut self, corner: Corner, value: [u8; 3]) {
        self.values[corner.index()] = value;
    }
}

/// Quantize a light value to 4 bits per channel:
/// `round(15 * clamp(v, 0, 1))`.
#[inline]
pub fn quantize_light(value: Vec3) -> [u8; 3] {
    let s = value.clamp(0.0, 1.0) * 15.0;
    [s.x.round() as u8, s.y.round() as u8, s.z.round() as u8]
}

/// Per-corner light for one voxel cell under the given occlusion
/// pattern. Canonicalizes the samples into the pattern's class
/// orientation, applies the class rule, and restores the result.
pub fn compute_with_occlusion<M: LightMask>(pattern: u8, samples: &[Vec3; 8]) -> M {
    let (sample_perm, sample_refl) = sample_transform(pattern);
    let canonical = transform_samples(samples, sample_perm, sample_refl);

    // Evaluate the class rule in canonical orientation.
    let mut values = [[0u8; 3]; 8];
    let mut written = 0u8;
    for component in CLASS_RULES[pattern_class(pattern)] {
        let mut sum = Vec3::ZERO;
        for (i, sample) in canonical.iter().enumerate() {
            if component.samples & (1 << i) != 0 {
                sum += *sample;
            }
        }
        // Divide by 8 even when fewer samples contribute; the missing
        // contributions are exactly the occlusion darkening.
        let value = quantize_light(sum / 8.0);
        for c in 0..8 {
            if component.corners & (1 << c) != 0 {
                values[c] = value;
            }
        }
        written |= component.corners;
    }

    // Rotate the canonical mask back to the pattern's orientation,
    // touching only corners the rule actually wrote.
    let (mask_perm, mask_refl) = mask_transform(pattern);
    let mut out = M::default();
    for corner in Corner::all() {
        let src = octant_source(mask_perm, mask_refl, corner.index());
        if written & (1 << src) != 0 {
            out.set(corner, values[src]);
        }
    }
    out
}

/// Fast path for a fully unoccluded cell: every corner receives the
/// average of all eight samples. Equivalent to
/// `compute_with_occlusion(0xFF, samples)` without the table walk.
pub fn compute_unoccluded<M: LightMask>(samples: &[Vec3; 8]) -> M {
    let mut sum = Vec3::ZERO;
    for sample in samples {
        sum += *sample;
    }
    let value = quantize_light(sum / 8.0);
    let mut out = M::default();
    for corner in Corner::all() {
        out.set(corner, value);
    }
    out
}
