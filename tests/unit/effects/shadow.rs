use super::*;

fn res(w: u32, h: u32) -> Resolution {
    Resolution::new(w, h).unwrap()
}

fn quantizer(mode: ShadowMode) -> ShadowQuantizer {
    ShadowQuantizer {
        mode,
        hatch_width: 1.0,
        hatch_color: [0.32, 0.12, 0.2, 1.0],
    }
}

fn site(r: Resolution, x: u32, y: u32) -> ShadeSite {
    ShadeSite {
        uv: r.uv(x, y),
        resolution: r,
        displacement: Vec2::ZERO,
    }
}

fn gray(v: f32) -> Rgba {
    [v, v, v, 1.0]
}

fn assert_close(a: Rgba, b: Rgba) {
    for i in 0..4 {
        assert!((a[i] - b[i]).abs() < 1e-5, "{a:?} != {b:?}");
    }
}

#[test]
fn background_is_never_shaded() {
    let r = res(8, 8);
    for mode in [
        ShadowMode::Tonal,
        ShadowMode::Raster,
        ShadowMode::Crosshatch,
    ] {
        let out = quantizer(mode).shade(gray(0.05), 1.0, site(r, 0, 0));
        assert_eq!(out, gray(0.05));
    }
}

#[test]
fn none_passes_through() {
    let r = res(8, 8);
    let c = [0.1, 0.2, 0.3, 0.4];
    assert_eq!(quantizer(ShadowMode::None).shade(c, 0.2, site(r, 1, 1)), c);
}

#[test]
fn tonal_bands_compound() {
    let r = res(4, 4);
    let q = quantizer(ShadowMode::Tonal);
    let s = site(r, 0, 0);
    assert_close(q.shade(gray(0.3), 0.5, s), [0.0, 0.0, 0.0, 1.0]);
    assert_close(q.shade(gray(0.4), 0.5, s), gray(0.4 * 0.25 * 0.5 * 0.7));
    assert_close(q.shade(gray(0.5), 0.5, s), gray(0.5 * 0.5 * 0.7));
    assert_close(q.shade(gray(0.7), 0.5, s), gray(0.7 * 0.7));
    assert_eq!(q.shade(gray(0.8), 0.5, s), gray(0.8));
}

#[test]
fn raster_spares_cell_centers() {
    let r = res(8, 8);
    let q = quantizer(ShadowMode::Raster);
    let center = ShadeSite {
        uv: Point::new(3.0 / 8.0, 3.0 / 8.0),
        resolution: r,
        displacement: Vec2::ZERO,
    };
    assert_eq!(q.shade(gray(0.1), 0.5, center), gray(0.1));

    let corner = ShadeSite {
        uv: Point::ZERO,
        ..center
    };
    assert_eq!(q.shade(gray(0.5), 0.5, corner), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(q.shade(gray(0.95), 0.5, corner), gray(0.95));
}

#[test]
fn crosshatch_bands_follow_luma() {
    let r = res(22, 22);
    let q = quantizer(ShadowMode::Crosshatch);
    let ink = q.hatch_color;

    assert_eq!(q.shade(gray(0.3), 0.5, site(r, 5, 7)), gray(0.3));
    assert_eq!(q.shade(gray(0.3), 0.5, site(r, 5, 0)), ink);
    assert_eq!(q.shade(gray(0.3), 0.5, site(r, 0, 7)), ink);

    // The darkest band no longer applies at this luma.
    assert_eq!(q.shade(gray(0.5), 0.5, site(r, 5, 0)), gray(0.5));
    assert_eq!(q.shade(gray(0.5), 0.5, site(r, 0, 7)), ink);
    assert_eq!(q.shade(gray(0.9), 0.5, site(r, 0, 7)), gray(0.9));
}
