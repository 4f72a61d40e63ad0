use super::*;
use crate::rules::types::Severity;
use crate::scene::model::{Component, ComponentKind};

fn comp(id: &str, kind: ComponentKind, children: Vec<Component>) -> Component {
    Component {
        id: id.to_owned(),
        kind,
        children,
        ..Component::default()
    }
}

fn doc(components: Vec<Component>) -> Structure {
    Structure {
        components,
        ..Structure::default()
    }
}

#[test]
fn one_reminder_per_interactive_element_in_order() {
    let d = doc(vec![
        comp("title", ComponentKind::Text, vec![]),
        comp(
            "form",
            ComponentKind::Box,
            vec![
                comp("email-input", ComponentKind::Input, vec![]),
                comp("hint", ComponentKind::Text, vec![]),
                comp("submit", ComponentKind::Button, vec![]),
            ],
        ),
        comp("cancel", ComponentKind::Button, vec![]),
    ]);
    let r = evaluate(&d, &FocusConfig::default());
    assert!(r.passed);
    assert!(r.issues.iter().all(|i| i.severity == Severity::Info));
    let ids: Vec<&str> = r.issues.iter().map(|i| i.component.as_str()).collect();
    assert_eq!(ids, vec!["email-input", "submit", "cancel"]);
}

#[test]
fn static_document_has_no_reminders() {
    let d = doc(vec![comp(
        "hero",
        ComponentKind::Box,
        vec![
            comp("h1-title", ComponentKind::Text, vec![]),
            comp("banner", ComponentKind::Image, vec![]),
        ],
    )]);
    let r = FocusConfig::default().evaluate(&d);
    assert!(r.passed);
    assert!(r.issues.is_empty());
}

#[test]
fn message_quotes_configured_thresholds() {
    let d = doc(vec![comp("go", ComponentKind::Button, vec![])]);
    let cfg = FocusConfig {
        min_outline_width: 3,
        min_contrast: 4.5,
    };
    let r = evaluate(&d, &cfg);
    assert_eq!(r.issues.len(), 1);
    assert!(r.issues[0].message.contains("3px"), "{}", r.issues[0].message);
    assert!(r.issues[0].message.contains("4.5:1"), "{}", r.issues[0].message);

    let r = evaluate(&d, &FocusConfig::default());
    assert!(r.issues[0].message.contains("2px"));
    assert!(r.issues[0].message.contains("3:1"));
}
