use super::*;

#[test]
fn frames_are_placed_with_gutter() {
    let left = FrameRGBA::new(10, 30, Rgba8::BLACK);
    let right = FrameRGBA::new(15, 20, Rgba8::MID_GRAY);
    let out = compose_side_by_side(&left, &right, None).unwrap();
    assert_eq!((out.width, out.height), (10 + COMPARE_GUTTER + 15, 30));
    assert_eq!(out.pixel(0, 0), Some(Rgba8::BLACK));
    assert_eq!(out.pixel(30, 5), Some(Rgba8::MID_GRAY));
    assert_eq!(out.pixel(30, 25), Some(Rgba8::WHITE));
    assert_eq!(out.pixel(20, 5), Some(Rgba8::LIGHT_GRAY));
    assert_eq!(out.pixel(15, 5), Some(Rgba8::WHITE));
}

#[test]
fn captions_add_a_strip() {
    let left = FrameRGBA::new(60, 10, Rgba8::WHITE);
    let right = FrameRGBA::new(60, 10, Rgba8::WHITE);
    let out = compose_side_by_side(&left, &right, Some(("v1", "v2"))).unwrap();
    assert_eq!(out.height, 34);
    assert!(out.data.chunks_exact(4).any(|px| px == [0, 0, 0, 255]));
}
