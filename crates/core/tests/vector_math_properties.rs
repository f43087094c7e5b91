//! Algebraic properties of the vector helpers over seeded random inputs.
use approx::assert_abs_diff_eq;
use arcade_math_core::core_types::as_flat;
use arcade_math_core::vector_math::{
    cross3, cross3_in_place, cross3_to, cross_2d, dot, dot3_at, len_sq3, normalize3_in_place,
};
use arcade_math_core::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;

fn random_vec3(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
    )
}

#[test]
fn test_dot_is_commutative() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_eq!(dot(&a, &b), dot(&b, &a));
    }
}

#[test]
fn test_cross_2d_is_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_eq!(cross_2d(&a, &b), -cross_2d(&b, &a));
    }
}

#[test]
fn test_cross3_is_orthogonal_to_inputs() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut out = Vec3::zeros();
    for _ in 0..SAMPLES {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        cross3_to(&mut out, &a, &b);

        // Products reach ~1e3, so scale the tolerance with the magnitudes
        let tol = 1e-4 * (1.0 + a.norm() * b.norm() * a.norm().max(b.norm()));
        assert_abs_diff_eq!(dot(&out, &a), 0.0, epsilon = tol);
        assert_abs_diff_eq!(dot(&out, &b), 0.0, epsilon = tol);
    }
}

#[test]
fn test_cross3_in_place_agrees_with_out_parameter() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        let mut aliased = a;
        cross3_in_place(&mut aliased, &b);
        assert_abs_diff_eq!(aliased, cross3(&a, &b), epsilon = 1e-4);
    }
}

#[test]
fn test_normalize_yields_unit_length() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let mut v = random_vec3(&mut rng);
        if len_sq3(&v) < 1e-6 {
            continue;
        }
        normalize3_in_place(&mut v);
        assert_abs_diff_eq!(len_sq3(&v), 1.0, epsilon = 1e-5);
    }

    let mut zero = Vec3::zeros();
    normalize3_in_place(&mut zero);
    assert_eq!(zero, Vec3::zeros());
}

#[test]
fn test_dot3_at_over_packed_vectors_matches_dot() {
    let mut rng = StdRng::seed_from_u64(6);
    let a: Vec<Vec3> = (0..32).map(|_| random_vec3(&mut rng)).collect();
    let b: Vec<Vec3> = (0..32).map(|_| random_vec3(&mut rng)).collect();
    let (flat_a, flat_b) = (as_flat(&a), as_flat(&b));

    for i in 0..a.len() {
        let j = a.len() - 1 - i;
        let packed = dot3_at(flat_a, i * 3, flat_b, j * 3).unwrap();
        assert_abs_diff_eq!(packed, dot(&a[i], &b[j]), epsilon = 1e-4);
    }
    assert_eq!(dot3_at(flat_a, a.len() * 3 - 2, flat_b, 0), None);
}

#[test]
fn test_axis_examples() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(dot(&x, &y), 0.0);

    let mut out = Vec3::zeros();
    cross3_to(&mut out, &x, &y);
    assert_abs_diff_eq!(out, Vec3::new(0.0, 0.0, 1.0));
}
