use super::*;

fn res(w: u32, h: u32) -> Resolution {
    Resolution::new(w, h).unwrap()
}

#[test]
fn starts_white_and_writes_a_first() {
    let acc = WatercolorAccumulator::new(res(3, 2)).unwrap();
    assert_eq!(acc.current_write(), TrailSlot::A);
    assert_eq!(acc.frames(), 0);
    assert!(acc.trail().as_slice().iter().all(|px| *px == WHITE));
}

#[test]
fn write_slot_alternates_with_frame_parity() {
    let r = res(4, 4);
    let mut acc = WatercolorAccumulator::new(r).unwrap();
    let brush = Plane::filled(r, [0.0; 4]);
    for n in 1..=5u64 {
        acc.advance(&brush, 1.0 / 60.0, &Dissipation::default())
            .unwrap();
        assert_eq!(acc.frames(), n);
        let expected = if n % 2 == 0 { TrailSlot::A } else { TrailSlot::B };
        assert_eq!(acc.current_write(), expected);
    }
}

#[test]
fn rejects_mismatched_brush_without_flipping() {
    let mut acc = WatercolorAccumulator::new(res(4, 4)).unwrap();
    let brush = Plane::filled(res(5, 4), [1.0; 4]);
    let err = acc
        .advance(&brush, 0.1, &Dissipation::default())
        .unwrap_err();
    assert!(err.to_string().contains("brush"));
    assert_eq!(acc.current_write(), TrailSlot::A);
    assert_eq!(acc.frames(), 0);
    assert_eq!(acc.elapsed(), 0.0);
    assert!(acc.trail().as_slice().iter().all(|px| *px == WHITE));
}

#[test]
fn rejects_negative_delta() {
    let r = res(2, 2);
    let mut acc = WatercolorAccumulator::new(r).unwrap();
    let brush = Plane::filled(r, [0.0; 4]);
    assert!(acc.advance(&brush, -1.0, &Dissipation::default()).is_err());
    assert!(acc.advance(&brush, f32::NAN, &Dissipation::default()).is_err());
    assert_eq!(acc.frames(), 0);
}

#[test]
fn pigment_persists_after_the_brush_lifts() {
    let r = res(4, 4);
    let mut acc = WatercolorAccumulator::new(r).unwrap();
    let blend = Dissipation::default();
    let stroke = Plane::from_fn(r, |x, y| {
        if (x, y) == (1, 1) {
            [1.0, 1.0, 1.0, 1.0]
        } else {
            [0.0; 4]
        }
    });
    let idle = Plane::filled(r, [0.0; 4]);

    acc.advance(&stroke, 0.1, &blend).unwrap();
    assert_eq!(acc.trail().texel(1, 1)[0], 0.0);
    assert_eq!(acc.trail().texel(2, 2), WHITE);

    acc.advance(&idle, 0.1, &blend).unwrap();
    let after = acc.trail().texel(1, 1)[0];
    assert!(after > 0.0 && after < 0.1, "got {after}");

    acc.advance(&idle, 0.1, &blend).unwrap();
    assert!(acc.trail().texel(1, 1)[0] > after);
}

#[test]
fn custom_blend_sees_accumulated_time() {
    let r = res(2, 3);
    let mut acc = WatercolorAccumulator::new(r).unwrap();
    let brush = Plane::filled(r, [0.0; 4]);
    let clock = |_prev: Rgba, _brush: Rgba, t: f32| [t, 0.0, 0.0, 1.0];
    acc.advance(&brush, 0.5, &clock).unwrap();
    acc.advance(&brush, 0.25, &clock).unwrap();
    assert_eq!(acc.elapsed(), 0.75);
    assert!(acc.trail().as_slice().iter().all(|px| px[0] == 0.75));
}
