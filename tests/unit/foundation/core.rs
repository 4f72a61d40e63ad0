use super::*;

#[test]
fn rect_clamps_negative_sizes() {
    let r = RectPx::new(3, 4, -5, 10);
    assert_eq!(r.w, 0);
    assert_eq!(r.h, 10);
    assert_eq!(r.right(), 3);
    assert_eq!(r.bottom(), 14);
}

#[test]
fn rect_scaling_is_linear() {
    let r = RectPx::new(1, 2, 30, 40);
    assert_eq!(r.scaled(3), RectPx::new(3, 6, 90, 120));
    assert_eq!(r.scaled(1), r);
}

#[test]
fn viewport_widths_differ_for_desktop_only() {
    assert_eq!(Viewport::Mobile.render_width(), 375);
    assert_eq!(Viewport::Tablet.breakpoint_width(), 768);
    assert_eq!(Viewport::Desktop.render_width(), 1200);
    assert_eq!(Viewport::Desktop.breakpoint_width(), 1440);
    assert_eq!(Viewport::parse(" Tablet ").unwrap(), Viewport::Tablet);
    assert!(Viewport::parse("watch").is_err());
}

#[test]
fn scale_is_bounded() {
    assert!(Scale::new(0).is_err());
    assert!(Scale::new(4).is_err());
    assert_eq!(Scale::new(2).unwrap().get(), 2);
    assert_eq!(Scale::default(), Scale::ONE);
}
