use super::*;
use crate::rules::types::Severity;

fn text(color: &str, size: &str, weight: &str) -> Component {
    Component {
        id: "t".to_owned(),
        kind: ComponentKind::Text,
        content: "hi".to_owned(),
        color: color.to_owned(),
        size: size.to_owned(),
        weight: weight.to_owned(),
        ..Component::default()
    }
}

fn wrapped(background: &str, child: Component) -> Structure {
    let mut b = Component {
        id: "wrap".to_owned(),
        kind: ComponentKind::Box,
        children: vec![child],
        ..Component::default()
    };
    b.layout.background = background.to_owned();
    Structure {
        components: vec![b],
        ..Structure::default()
    }
}

#[test]
fn gray_below_aa_is_error_with_suggestion() {
    let d = wrapped("#FFFFFF", text("#777777", "base", "normal"));
    let r = evaluate(&d, &ContrastConfig::default());
    assert!(!r.passed);
    assert_eq!(r.issues.len(), 2);
    assert_eq!(r.issues[0].severity, Severity::Error);
    assert_eq!(r.issues[0].component, "t");
    assert!(r.issues[0].message.contains("4.48:1"));
    assert_eq!(r.issues[1].severity, Severity::Info);
    assert!(r.issues[1].message.starts_with("use #"));
}

#[test]
fn large_text_uses_lower_threshold() {
    let cfg = ContrastConfig::default();
    assert!(evaluate(&wrapped("#FFFFFF", text("#777777", "xl", "")), &cfg).passed);
    assert!(evaluate(&wrapped("#FFFFFF", text("#777777", "lg", "bold")), &cfg).passed);
    assert!(!evaluate(&wrapped("#FFFFFF", text("#777777", "lg", "normal")), &cfg).passed);
}

#[test]
fn background_is_inherited() {
    let d = wrapped("#000000", text("#525252", "base", ""));
    let r = evaluate(&d, &ContrastConfig::default());
    assert!(!r.passed);
    assert!(r.issues[0].message.contains("on #000000"));
}

#[test]
fn texts_without_color_are_skipped() {
    let d = wrapped("#000000", text("", "base", ""));
    assert!(evaluate(&d, &ContrastConfig::default()).issues.is_empty());
}

#[test]
fn buttons_default_to_white_on_black() {
    let mut b = Component {
        id: "b".to_owned(),
        kind: ComponentKind::Button,
        ..Component::default()
    };
    let d = Structure {
        components: vec![b.clone()],
        ..Structure::default()
    };
    assert!(evaluate(&d, &ContrastConfig::default()).issues.is_empty());

    b.layout.background = "#E5E5E5".to_owned();
    let d = Structure {
        components: vec![b],
        ..Structure::default()
    };
    let r = evaluate(&d, &ContrastConfig::default());
    assert!(!r.passed);
    assert_eq!(r.issues[0].component, "b");
}
