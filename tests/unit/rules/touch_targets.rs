use super::*;
use crate::rules::types::Severity;
use crate::scene::model::ComponentKind;

fn button(id: &str) -> Component {
    Component {
        id: id.to_owned(),
        kind: ComponentKind::Button,
        ..Component::default()
    }
}

fn row(gap: u32, children: Vec<Component>) -> Structure {
    let mut r = Component {
        id: "row".to_owned(),
        kind: ComponentKind::Box,
        children,
        ..Component::default()
    };
    r.layout.display = "flex".to_owned();
    r.layout.direction = "horizontal".to_owned();
    r.layout.gap = gap;
    Structure {
        components: vec![r],
        ..Structure::default()
    }
}

#[test]
fn small_target_is_error() {
    let mut b = button("tiny");
    b.layout.width = 40;
    let r = evaluate(&row(16, vec![b]), &TouchTargetConfig::default());
    assert!(!r.passed);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].component, "tiny");
    assert!(r.issues[0].message.contains("40x44px"));
}

#[test]
fn tight_spacing_is_warning() {
    let r = evaluate(
        &row(4, vec![button("a"), button("b")]),
        &TouchTargetConfig::default(),
    );
    assert!(r.passed);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].severity, Severity::Warning);
    assert_eq!(r.issues[0].component, "b");
}

#[test]
fn dangerous_actions_need_more_room() {
    let r = evaluate(
        &row(12, vec![button("save"), button("delete")]),
        &TouchTargetConfig::default(),
    );
    assert!(!r.passed);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].component, "delete");
    assert!(r.issues[0].message.contains("'save'"));

    let r = evaluate(
        &row(16, vec![button("save"), button("delete")]),
        &TouchTargetConfig::default(),
    );
    assert!(r.issues.is_empty());
}

#[test]
fn stacked_targets_measure_vertically() {
    let d = Structure {
        components: vec![button("a"), button("b")],
        ..Structure::default()
    };
    let r = evaluate(&d, &TouchTargetConfig::default());
    assert_eq!(r.issues.len(), 1);
    assert!(r.issues[0].message.contains("only 0px"));
}
