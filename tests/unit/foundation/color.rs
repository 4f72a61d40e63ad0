use super::*;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#ff0000").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::from_hex("E5E5E5").unwrap(), Rgba8::LIGHT_GRAY);
    let c = Rgba8::from_hex("#0000ff80").unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
}

#[test]
fn fallback_applies_to_empty_and_invalid() {
    assert_eq!(Rgba8::from_hex_or("", Rgba8::BLACK), Rgba8::BLACK);
    assert_eq!(Rgba8::from_hex_or("nope", Rgba8::WHITE), Rgba8::WHITE);
    assert_eq!(Rgba8::from_hex_or("#525252", Rgba8::WHITE).to_hex(), "#525252");
}

#[test]
fn luminance_is_bounded() {
    for hex in ["#000000", "#FFFFFF", "#E5E5E5", "#737373", "#525252", "#FF0000", "#00FF00"] {
        let l = Rgba8::from_hex(hex).unwrap().relative_luminance();
        assert!((0.0..=1.0).contains(&l), "{hex} -> {l}");
    }
}

#[test]
fn black_on_white_is_twenty_one() {
    let ratio = contrast_ratio(Rgba8::BLACK, Rgba8::WHITE);
    assert!((ratio - 21.0).abs() < 0.1, "{ratio}");
    assert_eq!(ratio, contrast_ratio(Rgba8::WHITE, Rgba8::BLACK));
}

#[test]
fn mid_grays_straddle_aa() {
    let white = Rgba8::WHITE;
    let r777 = contrast_ratio(Rgba8::rgb(0x77, 0x77, 0x77), white);
    assert!(r777 < 4.5 && r777 > 4.4, "{r777}");
    let r767 = contrast_ratio(Rgba8::rgb(0x76, 0x76, 0x76), white);
    assert!(r767 >= 4.5, "{r767}");
}

#[test]
fn suggestion_darkens_on_light_background() {
    let fg = Rgba8::rgb(0x99, 0x99, 0x99);
    let (c, ratio) = suggest_accessible_foreground(fg, Rgba8::WHITE, 4.5).unwrap();
    assert!(ratio >= 4.5);
    assert!(c.r < fg.r);
}

#[test]
fn suggestion_lightens_on_dark_background() {
    let fg = Rgba8::rgb(0x52, 0x52, 0x52);
    let (c, ratio) = suggest_accessible_foreground(fg, Rgba8::BLACK, 4.5).unwrap();
    assert!(ratio >= 4.5);
    assert!(c.r > fg.r);
}

#[test]
fn border_strings_yield_embedded_color() {
    assert_eq!(find_hex_token("1px solid #000000"), Some(Rgba8::BLACK));
    assert_eq!(find_hex_token("1px solid"), None);
}
