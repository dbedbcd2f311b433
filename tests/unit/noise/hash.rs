use super::*;

#[test]
fn hash12_is_deterministic_and_in_unit_range() {
    for y in 0..32 {
        for x in 0..32 {
            let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let h = hash12(p);
            assert!((0.0..1.0).contains(&h), "hash12({p:?}) = {h}");
            assert_eq!(h, hash12(p));
        }
    }
}

#[test]
fn hash12_varies_between_neighbors() {
    let a = hash12(Point::new(10.5, 10.5));
    let b = hash12(Point::new(11.5, 10.5));
    let c = hash12(Point::new(10.5, 11.5));
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn gradient_noise_vanishes_on_lattice_points() {
    for (x, y) in [(0.0, 0.0), (3.0, -7.0), (120.0, 45.0)] {
        assert!(gradient_noise(Point::new(x, y)).abs() < 1e-12);
    }
}

#[test]
fn gradient_noise_stays_bounded() {
    for y in 0..40 {
        for x in 0..40 {
            let p = Point::new(f64::from(x) * 0.37 + 0.5, f64::from(y) * 0.53 + 0.5);
            let n = gradient_noise(p);
            assert!(n.abs() <= 1.0, "noise({p:?}) = {n}");
        }
    }
}

#[test]
fn value_noise_is_affine_in_gradient_noise() {
    let p = Point::new(17.5, 3.5);
    let expected = (gradient_noise(p) * 2.0 - 1.0) * 10.0;
    assert_eq!(value_noise(p), expected);
}

#[test]
fn value_noise_range_is_skewed_negative() {
    let mut sum = 0.0;
    let mut count = 0.0;
    for y in 0..40 {
        for x in 0..40 {
            let p = Point::new(f64::from(x) * 0.37 + 0.5, f64::from(y) * 0.53 + 0.5);
            let v = value_noise(p);
            assert!((-30.0..=10.0).contains(&v), "value_noise({p:?}) = {v}");
            sum += v;
            count += 1.0;
        }
    }
    let mean = sum / count;
    assert!((-13.0..=-7.0).contains(&mean), "mean = {mean}");
}

#[test]
fn lattice_hash_depends_on_seed_and_coordinates() {
    assert_eq!(lattice_hash(1, 2, 3), lattice_hash(1, 2, 3));
    assert_ne!(lattice_hash(1, 2, 3), lattice_hash(2, 2, 3));
    assert_ne!(lattice_hash(1, 2, 3), lattice_hash(1, 3, 2));
}

#[test]
fn fbm_is_normalized() {
    for i in 0..64 {
        let p = Point::new(f64::from(i) * 0.731, f64::from(i) * 0.197);
        let v = fbm(42, p, 4);
        assert!((0.0..=1.0).contains(&v), "fbm = {v}");
    }
}
