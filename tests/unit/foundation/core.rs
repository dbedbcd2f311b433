use super::*;

#[test]
fn resolution_rejects_empty_dimensions() {
    assert!(Resolution::new(0, 4).is_err());
    assert!(Resolution::new(4, 0).is_err());
    assert_eq!(Resolution::new(3, 2).unwrap().pixel_count(), 6);
}

#[test]
fn uv_addresses_pixel_centers() {
    let res = Resolution::new(4, 2).unwrap();
    let uv = res.uv(0, 0);
    assert!((uv.x - 0.125).abs() < 1e-12);
    assert!((uv.y - 0.25).abs() < 1e-12);

    let uv = res.uv(3, 1);
    assert!((uv.x - 0.875).abs() < 1e-12);
    assert!((uv.y - 0.75).abs() < 1e-12);
}

#[test]
fn texel_is_reciprocal_of_resolution() {
    let res = Resolution::new(8, 16).unwrap();
    let t = res.texel();
    assert_eq!(t, Vec2::new(0.125, 0.0625));
}

#[test]
fn deserialization_goes_through_validation() {
    let res: Resolution = serde_json::from_str(r#"{ "width": 5, "height": 3 }"#).unwrap();
    assert_eq!((res.width(), res.height()), (5, 3));

    let err = serde_json::from_str::<Resolution>(r#"{ "width": 0, "height": 3 }"#).unwrap_err();
    assert!(err.to_string().contains("non-empty"), "{err}");
}

#[test]
fn serialized_resolution_parses_back() {
    let res = Resolution::new(7, 2).unwrap();
    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(serde_json::from_str::<Resolution>(&json).unwrap(), res);
}
