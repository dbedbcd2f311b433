use super::*;

#[test]
fn fnv1a64_changes_with_input_and_is_deterministic() {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    a.write_u64(7);
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u64(7);
    let mut c = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    c.write_u64(8);
    assert_eq!(a.finish(), b.finish());
    assert_ne!(a.finish(), c.finish());
}

#[test]
fn glsl_mod_wraps_negative_values_into_range() {
    assert!((glsl_mod(-1.0, 6.0) - 5.0).abs() < 1e-12);
    assert!((glsl_mod(13.0, 6.0) - 1.0).abs() < 1e-12);
    assert_eq!(glsl_mod(3.0, 6.0), 3.0);
}

#[test]
fn fract_is_in_unit_interval() {
    for x in [-2.75, -0.1, 0.0, 0.5, 3.999] {
        let f = fract(x);
        assert!((0.0..1.0).contains(&f), "fract({x}) = {f}");
    }
}

#[test]
fn step_is_inclusive_at_edge() {
    assert_eq!(step(0.5, 0.5), 1.0);
    assert_eq!(step(0.5, 0.4999), 0.0);
}

#[test]
fn luma_weights_sum_to_one_for_gray() {
    let gray = [0.4, 0.4, 0.4, 1.0];
    assert!((luma601(gray) - 0.4).abs() < 1e-6);
    assert!((luma709(gray) - 0.4).abs() < 1e-6);
}

#[test]
fn mix_endpoints_are_exact() {
    let a = [0.1, 0.2, 0.3, 1.0];
    let b = [0.9, 0.8, 0.7, 0.5];
    assert_eq!(mix_rgba(a, b, 0.0), a);
    assert_eq!(mix_rgba(a, a, 0.37), a);
}
