use super::*;
use crate::scene::model::{Component, ComponentKind};

fn comp(id: &str, kind: ComponentKind) -> Component {
    Component {
        id: id.to_owned(),
        kind,
        ..Component::default()
    }
}

#[test]
fn wide_layout_warns_per_breakpoint() {
    let mut d = Structure {
        components: vec![comp("x", ComponentKind::Box)],
        ..Structure::default()
    };
    d.layout.max_width = 1200;
    let r = evaluate(&d, &ResponsiveConfig::default());
    assert!(r.passed);
    let vps: Vec<&str> = r
        .issues
        .iter()
        .filter_map(|i| i.viewport.as_deref())
        .collect();
    assert_eq!(vps, vec!["mobile", "tablet"]);
    assert!(r.issues.iter().all(|i| i.component == "layout"));
}

#[test]
fn component_widths_are_checked() {
    let mut hero = comp("hero", ComponentKind::Image);
    hero.layout.width = 800;
    let d = Structure {
        components: vec![hero],
        ..Structure::default()
    };
    let r = evaluate(&d, &ResponsiveConfig::default());
    assert_eq!(r.issues.len(), 2);
    assert_eq!(r.issues[0].viewport.as_deref(), Some("mobile"));
    assert_eq!(r.issues[1].viewport.as_deref(), Some("tablet"));
    assert!(r.issues[1].message.starts_with("width 800px"));
}

#[test]
fn small_targets_warn_on_mobile_only() {
    let mut b = comp("icon", ComponentKind::Button);
    b.layout.width = 32;
    b.layout.height = 32;
    let d = Structure {
        components: vec![b],
        ..Structure::default()
    };
    let r = evaluate(&d, &ResponsiveConfig::default());
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].viewport.as_deref(), Some("mobile"));
    assert!(r.issues[0].message.contains("32x32px"));
}
