//! Exhaustive checks that the constant orbit tables form a consistent
//! canonicalization scheme over all 256 occlusion patterns.

use glint_geom::Vec3;
use glint_lighting::orbit_tables::{
    CLASS_COUNT, CLASS_PATTERNS, CLASS_RULES, MASK_PERM_ID, MASK_REFLECT_ID, PATTERN_CLASS,
    SAMPLE_PERM_ID, SAMPLE_REFLECT_ID, mask_transform, pattern_class, sample_transform,
};
use glint_lighting::symmetry::{AxisPerm, AxisReflect, transform_mask, transform_pattern,
    transform_samples};
use glint_lighting::{Corner, CornerLight, LightMask, compute_with_occlusion};

#[test]
fn table_ids_are_in_range() {
    for m in 0..=255u8 {
        let i = m as usize;
        assert!((PATTERN_CLASS[i] as usize) < CLASS_COUNT);
        assert!(SAMPLE_PERM_ID[i] < 6);
        assert!(MASK_PERM_ID[i] < 6);
        assert!(SAMPLE_REFLECT_ID[i] < 8);
        assert!(MASK_REFLECT_ID[i] < 8);
    }
}

#[test]
fn orbits_partition_all_patterns() {
    let mut population = [0usize; CLASS_COUNT];
    for m in 0..=255u8 {
        population[pattern_class(m)] += 1;
    }
    assert!(population.iter().all(|&n| n > 0), "empty class");
    assert_eq!(population.iter().sum::<usize>(), 256);
}

#[test]
fn canonicalization_reaches_class_representative() {
    for m in 0..=255u8 {
        let (perm, refl) = sample_transform(m);
        let canonical = transform_pattern(m, perm, refl);
        assert_eq!(
            canonical,
            CLASS_PATTERNS[pattern_class(m)],
            "pattern {m:#04x} canonicalized to {canonical:#04x}"
        );
    }
}

#[test]
fn representatives_are_fixed_points() {
    for (class, &rep) in CLASS_PATTERNS.iter().enumerate() {
        assert_eq!(pattern_class(rep), class);
        assert_eq!(sample_transform(rep), (AxisPerm::Xyz, AxisReflect::IDENTITY));
        assert_eq!(mask_transform(rep), (AxisPerm::Xyz, AxisReflect::IDENTITY));
    }
}

#[test]
fn rule_components_are_disjoint_and_nonempty() {
    for (class, components) in CLASS_RULES.iter().enumerate() {
        let mut corners_seen = 0u8;
        let mut samples_seen = 0u8;
        for component in *components {
            assert_ne!(component.corners, 0, "class {class}");
            assert_ne!(component.samples, 0, "class {class}");
            assert_eq!(corners_seen & component.corners, 0, "class {class}");
            assert_eq!(samples_seen & component.samples, 0, "class {class}");
            corners_seen |= component.corners;
            samples_seen |= component.samples;
        }
    }
    // The two symmetric extremes.
    assert!(CLASS_RULES[0].is_empty());
    assert_eq!(CLASS_RULES[CLASS_COUNT - 1].len(), 1);
    assert_eq!(CLASS_RULES[CLASS_COUNT - 1][0].samples, 0xFF);
    assert_eq!(CLASS_RULES[CLASS_COUNT - 1][0].corners, 0xFF);
}

// The fundamental property of the whole scheme: transforming pattern
// and samples by any group element, then running the kernel, matches
// running the kernel first and transforming the output mask. Checked
// for every pattern and all 48 group elements. Sample channels are
// dyadic (k/256) so sums are exact regardless of summation order.
#[test]
fn kernel_is_equivariant_for_all_patterns_and_elements() {
    let samples: [Vec3; 8] = core::array::from_fn(|i| {
        Vec3::new(
            (i as f32 * 7.0 + 3.0) / 256.0,
            (i as f32 * 13.0 + 40.0) / 256.0,
            (255.0 - i as f32 * 11.0) / 256.0,
        )
    });
    for m in 0..=255u8 {
        let base: CornerLight = compute_with_occlusion(m, &samples);
        for perm in AxisPerm::ALL {
            for refl in AxisReflect::ALL {
                let m2 = transform_pattern(m, perm, refl);
                let s2 = transform_samples(&samples, perm, refl);
                let direct: CornerLight = compute_with_occlusion(m2, &s2);
                let transformed = transform_mask(&base, perm, refl);
                for corner in Corner::all() {
                    assert_eq!(
                        direct.get(corner),
                        transformed.get(corner),
                        "pattern {m:#04x}, {perm:?}, {refl:?}, corner {corner:?}"
                    );
                }
            }
        }
    }
}
