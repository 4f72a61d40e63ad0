use super::*;

fn inked(frame: &FrameRGBA) -> usize {
    frame
        .data
        .chunks_exact(4)
        .filter(|px| px[0] == 0)
        .count()
}

#[test]
fn space_draws_nothing_and_letters_draw_inside_cell() {
    let mut f = FrameRGBA::new(40, 20, Rgba8::WHITE);
    draw_text(&mut f, 0, 14, " ", Rgba8::BLACK, 1);
    assert_eq!(inked(&f), 0);

    draw_text(&mut f, 0, 14, "I", Rgba8::BLACK, 1);
    assert!(inked(&f) > 0);
    for y in 0..20u32 {
        for x in 0..40u32 {
            if f.pixel(x, y) == Some(Rgba8::BLACK) {
                assert!(x < ADVANCE as u32);
                assert!((7..14).contains(&y), "y={y}");
            }
        }
    }
}

#[test]
fn scale_multiplies_ink() {
    let mut a = FrameRGBA::new(80, 40, Rgba8::WHITE);
    let mut b = FrameRGBA::new(80, 40, Rgba8::WHITE);
    draw_text(&mut a, 0, 14, "Hi", Rgba8::BLACK, 1);
    draw_text(&mut b, 0, 28, "Hi", Rgba8::BLACK, 2);
    assert_eq!(inked(&b), 4 * inked(&a));
    assert_eq!(text_width("Hi", 2), 28);
}

#[test]
fn non_ascii_falls_back_to_question_mark() {
    let mut a = FrameRGBA::new(20, 20, Rgba8::WHITE);
    let mut b = FrameRGBA::new(20, 20, Rgba8::WHITE);
    draw_text(&mut a, 0, 14, "é", Rgba8::BLACK, 1);
    draw_text(&mut b, 0, 14, "?", Rgba8::BLACK, 1);
    assert_eq!(a, b);
}
