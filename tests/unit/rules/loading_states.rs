use super::*;
use crate::rules::types::Severity;
use crate::scene::model::{ComponentKind, Skeleton, SkeletonElement};

fn boxed(id: &str, state: &str) -> Component {
    Component {
        id: id.to_owned(),
        kind: ComponentKind::Box,
        state: state.to_owned(),
        ..Component::default()
    }
}

fn element(kind: &str, width: u32, size: u32) -> SkeletonElement {
    SkeletonElement {
        kind: kind.to_owned(),
        width,
        size,
        ..SkeletonElement::default()
    }
}

fn run(components: Vec<Component>) -> RuleResult {
    evaluate(&Structure {
        components,
        ..Structure::default()
    })
}

#[test]
fn unknown_state_is_error() {
    let r = run(vec![boxed("a", "busy"), boxed("b", "default"), boxed("c", "")]);
    assert!(!r.passed);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].component, "a");
}

#[test]
fn loading_without_skeleton_is_info() {
    let r = run(vec![boxed("list", "loading")]);
    assert!(r.passed);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].severity, Severity::Info);
}

#[test]
fn skeleton_elements_are_checked() {
    let mut c = boxed("list", "loading");
    c.skeleton = Some(Skeleton {
        elements: vec![
            element("circle", 0, 40),
            element("circle", 0, 0),
            element("text", 0, 0),
            element("rect", 200, 0),
            element("blob", 10, 10),
        ],
        animation: "pulse".to_owned(),
    });
    let r = run(vec![c]);
    assert!(!r.passed);
    let sev: Vec<Severity> = r.issues.iter().map(|i| i.severity).collect();
    assert_eq!(
        sev,
        vec![Severity::Warning, Severity::Warning, Severity::Error]
    );
    assert!(r.issues[0].message.contains("element 1 (circle)"));
    assert!(r.issues[1].message.contains("element 2 (text)"));
    assert!(r.issues[2].message.contains("'blob'"));
}

#[test]
fn empty_state_needs_something_to_show() {
    let mut with_msg = boxed("b", "empty");
    with_msg.content = "Nothing here yet".to_owned();
    let r = run(vec![boxed("a", "error"), with_msg]);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].component, "a");
    assert_eq!(r.issues[0].severity, Severity::Info);
}
