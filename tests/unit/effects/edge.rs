use super::*;

fn res(w: u32, h: u32) -> Resolution {
    Resolution::new(w, h).unwrap()
}

fn still() -> Jitter {
    Jitter {
        frequency: 0.0,
        amplitude: 0.0,
    }
}

#[test]
fn flat_buffers_have_no_edges() {
    let depth = Plane::filled(res(7, 5), 0.42f32);
    let normal = Plane::filled(res(7, 5), [0.5, 0.5, 1.0, 1.0]);
    let jitter = Jitter {
        frequency: 0.05,
        amplitude: 2.0,
    };
    for (x, y) in [(0, 0), (3, 2), (6, 4)] {
        assert_eq!(edge_signal(&depth, &normal, x, y, 0.5, jitter), 0.0);
        assert_eq!(edge_signal(&depth, &normal, x, y, 3.0, still()), 0.0);
    }
}

#[test]
fn depth_step_is_weighted_heavily() {
    let r = res(8, 8);
    let depth = Plane::from_fn(r, |x, _| if x < 4 { 0.0 } else { 1.0 });
    let normal = Plane::filled(r, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(edge_signal(&depth, &normal, 3, 4, 1.0, still()), 100.0);
    assert_eq!(edge_signal(&depth, &normal, 0, 4, 1.0, still()), 0.0);
}

#[test]
fn normal_creases_contribute_unweighted() {
    let r = res(8, 8);
    let depth = Plane::filled(r, 0.5f32);
    let normal = Plane::from_fn(r, |_, y| {
        if y < 4 {
            [0.0, 0.0, 0.0, 1.0]
        } else {
            [1.0, 1.0, 1.0, 1.0]
        }
    });
    let s = edge_signal(&depth, &normal, 2, 3, 1.0, still());
    assert!((s - 4.0).abs() < 1e-5, "got {s}");
}

#[test]
fn displacement_is_stable_and_bounded() {
    let r = res(64, 32);
    let jitter = Jitter {
        frequency: 0.3,
        amplitude: 2.0,
    };
    for (x, y) in [(0, 0), (10, 20), (63, 31)] {
        let frag = Resolution::frag_coord(x, y);
        let d = displacement(frag, r, jitter);
        assert_eq!(d, displacement(frag, r, jitter));
        assert!(d.x.abs() <= 2.0 / 64.0);
        assert!(d.y.abs() <= 2.0 / 32.0);
    }
    assert_eq!(
        displacement(Resolution::frag_coord(5, 5), r, still()),
        Vec2::ZERO
    );
}
