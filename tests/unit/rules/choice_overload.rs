use super::*;
use crate::rules::types::Severity;
use crate::scene::model::Component;

fn comp(id: &str, kind: ComponentKind) -> Component {
    Component {
        id: id.to_owned(),
        kind,
        ..Component::default()
    }
}

fn container(id: &str, role: &str, children: Vec<Component>) -> Structure {
    let mut c = comp(id, ComponentKind::Box);
    c.role = role.to_owned();
    c.children = children;
    Structure {
        components: vec![c],
        ..Structure::default()
    }
}

fn many(prefix: &str, kind: ComponentKind, n: usize) -> Vec<Component> {
    (0..n)
        .map(|i| comp(&format!("{prefix}-{i}"), kind.clone()))
        .collect()
}

#[test]
fn eight_nav_buttons_is_one_navigation_warning() {
    let d = container("top", "navigation", many("item", ComponentKind::Button, 8));
    let r = evaluate(&d, &ChoiceOverloadConfig::default());
    assert!(r.passed);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].severity, Severity::Warning);
    assert_eq!(r.issues[0].component, "top");
    assert_eq!(r.issues[0].category.as_deref(), Some("navigation_overload"));
}

#[test]
fn seven_nav_items_pass() {
    let d = container("top", "navigation", many("item", ComponentKind::Button, 7));
    assert!(evaluate(&d, &ChoiceOverloadConfig::default()).issues.is_empty());
}

#[test]
fn form_counts_nested_inputs() {
    let mut group = comp("group", ComponentKind::Box);
    group.children = many("f", ComponentKind::Input, 4);
    let mut children = many("g", ComponentKind::Input, 4);
    children.push(group);
    let d = container("signup-form", "", children);
    let r = evaluate(&d, &ChoiceOverloadConfig::default());
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].category.as_deref(), Some("form_overload"));
    assert!(r.issues[0].message.starts_with("8 form fields"));
}

#[test]
fn button_groups_and_card_grids() {
    let d = container("actions", "", many("b", ComponentKind::Button, 4));
    let r = evaluate(&d, &ChoiceOverloadConfig::default());
    assert_eq!(r.issues[0].category.as_deref(), Some("button_group_overload"));

    let mut d = container("card-grid", "", many("card", ComponentKind::Box, 13));
    d.components[0].layout.display = "grid".to_owned();
    let r = evaluate(&d, &ChoiceOverloadConfig::default());
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].category.as_deref(), Some("card_grid_overload"));
}
