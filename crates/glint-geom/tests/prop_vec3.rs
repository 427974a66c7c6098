use glint_geom::Vec3;
use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn vapprox_abs_rel(a: Vec3, b: Vec3, atol: f32, rtol: f32) -> bool {
    approx_abs_rel(a.x, b.x, atol, rtol)
        && approx_abs_rel(a.y, b.y, atol, rtol)
        && approx_abs_rel(a.z, b.z, atol, rtol)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn bounded_nonzero_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded_nonzero", |v| {
        v.is_finite() && {
            let a = v.abs();
            a >= 1e-6 && a <= 1e6
        }
    })
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // Addition commutativity: a + b == b + a (element-wise)
    #[test]
    fn vec3_add_commutative(
        a in arb_vec3(),
        b in arb_vec3(),
    ) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // AddAssign agrees with Add
    #[test]
    fn vec3_add_assign_matches_add(
        a in arb_vec3(),
        b in arb_vec3(),
    ) {
        let mut acc = a;
        acc += b;
        prop_assert!(vapprox(acc, a + b, 1e-6));
    }

    // Scalar roundtrip: (a * k) / k == a for k != 0
    #[test]
    fn vec3_scalar_roundtrip(
        a in arb_vec3(),
        k in bounded_nonzero_f32(),
    ) {
        prop_assume!(k != 0.0);
        let r = (a * k) / k;
        prop_assert!(vapprox_abs_rel(r, a, 1e-6, 1e-5));
    }

    // Scalar distributivity: k*(a + b) = k*a + k*b
    #[test]
    fn vec3_scalar_distributivity(
        a in arb_vec3(),
        b in arb_vec3(),
        k in bounded_f32(),
    ) {
        let left = (a + b) * k;
        let right = (a * k) + (b * k);
        prop_assert!(vapprox_abs_rel(left, right, 1e-6, 1e-5));
    }

    // Clamp bounds every channel into [min, max]
    #[test]
    fn vec3_clamp_in_bounds(
        a in arb_vec3(),
    ) {
        let c = a.clamp(0.0, 1.0);
        for v in [c.x, c.y, c.z] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    // Clamp is idempotent
    #[test]
    fn vec3_clamp_idempotent(
        a in arb_vec3(),
    ) {
        let once = a.clamp(0.0, 1.0);
        let twice = once.clamp(0.0, 1.0);
        prop_assert!(vapprox(once, twice, 0.0));
    }

    // Clamp is the identity on values already in range
    #[test]
    fn vec3_clamp_identity_in_range(
        x in 0.0f32..=1.0,
        y in 0.0f32..=1.0,
        z in 0.0f32..=1.0,
    ) {
        let a = Vec3::new(x, y, z);
        prop_assert!(vapprox(a.clamp(0.0, 1.0), a, 0.0));
    }

    // Subtraction inverts addition: (a + b) - b == a, with tolerance
    // scaled to b since the intermediate sum rounds at b's magnitude.
    #[test]
    fn vec3_sub_inverts_add(
        a in arb_vec3(),
        b in arb_vec3(),
    ) {
        let r = (a + b) - b;
        for (got, want, scale) in [
            (r.x, a.x, b.x),
            (r.y, a.y, b.y),
            (r.z, a.z, b.z),
        ] {
            prop_assert!((got - want).abs() <= 1e-6 + 1e-5 * (want.abs() + scale.abs()));
        }
    }
}
