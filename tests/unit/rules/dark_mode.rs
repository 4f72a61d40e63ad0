use super::*;
use crate::rules::types::Severity;
use crate::scene::model::{Component, ComponentKind};

#[test]
fn absolute_colors_get_hints() {
    let mut a = Component {
        id: "a".to_owned(),
        kind: ComponentKind::Text,
        color: "#ffffff".to_owned(),
        ..Component::default()
    };
    a.layout.background = "#000000".to_owned();
    let b = Component {
        id: "b".to_owned(),
        kind: ComponentKind::Text,
        color: "#737373".to_owned(),
        ..Component::default()
    };
    let d = Structure {
        components: vec![a, b],
        ..Structure::default()
    };
    let r = evaluate(&d);
    assert!(r.passed);
    assert_eq!(r.issues.len(), 2);
    assert_eq!(r.issues[0].component, "document");
    assert_eq!(r.issues[1].component, "a");
    assert!(r.issues.iter().all(|i| i.severity == Severity::Info));
}
