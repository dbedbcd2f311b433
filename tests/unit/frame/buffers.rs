use super::*;

#[test]
fn frame_buffers_reject_mismatched_planes() {
    let r4 = Resolution::new(4, 4).unwrap();
    let r2 = Resolution::new(2, 4).unwrap();
    let err = FrameBuffers::new(
        Plane::filled(r4, [0.5; 4]),
        Plane::filled(r2, 0.5),
        Plane::filled(r4, [0.5; 4]),
    )
    .unwrap_err();
    assert!(err.to_string().contains("resolution"));

    let ok = FrameBuffers::new(
        Plane::filled(r4, [0.5; 4]),
        Plane::filled(r4, 0.5),
        Plane::filled(r4, [0.5; 4]),
    )
    .unwrap();
    assert_eq!(ok.resolution(), r4);
}

#[test]
fn to_rgba8_clamps_and_rounds() {
    let frame = OutputFrame {
        width: 2,
        height: 1,
        data: vec![[0.5, 1.5, -0.2, 1.0], [0.0, 0.25, 1.0, 0.0]],
    };
    assert_eq!(frame.to_rgba8(), vec![128, 255, 0, 255, 0, 64, 255, 0]);
    assert_eq!(frame.pixel(1, 0), [0.0, 0.25, 1.0, 0.0]);
}
