use super::*;
use crate::report::aggregate::run_audit;
use crate::rules::registry::RuleSet;
use crate::scene::model::Structure;
use crate::suggest::engine::{Category, SuggestionKind};

fn audited() -> AuditReport {
    let mut doc = Structure::default();
    doc.version = "v1".to_owned();
    doc.phase = "structure".to_owned();
    doc.layout.spacing = 20;
    run_audit(&doc, &RuleSet::standard())
}

#[test]
fn single_rule_shape() {
    let r = RuleResult::from_issues(vec![Issue::error("t", "low contrast")]);
    let v: serde_json::Value = serde_json::from_str(&rule_json(&r).unwrap()).unwrap();
    assert_eq!(v["status"], "failed");
    assert_eq!(v["issues"][0]["severity"], "error");
    assert_eq!(v["issues"][0]["component"], "t");
}

#[test]
fn audit_json_keeps_rule_order() {
    let s = audit_json(&audited()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["status"], "passed");
    assert_eq!(v["version"], "v1");
    assert_eq!(v["phase"], "structure");
    assert_eq!(v["components"], 0);
    assert_eq!(v["summary"]["total"], 13);
    assert_eq!(v["audits"]["spacing"]["issues"][1]["severity"], "info");

    let mut last = 0;
    for name in crate::rules::registry::RULE_NAMES {
        let at = s.find(&format!("\"{name}\": {{")).unwrap();
        assert!(at > last, "{name} out of order");
        last = at;
    }
}

#[test]
fn text_report_lists_issues_under_rules() {
    let t = audit_text(&audited());
    assert!(t.contains("✓ spacing\n    [warning] layout: spacing 20px is not on 8pt grid\n"));
    assert!(t.contains("    [info] layout: use 16px instead of 20px\n"));
    assert!(t.ends_with("passed: 13/13 rules passed, 0 failed, 0 errors, 1 warnings\n"));

    let r = RuleResult::from_issues(vec![
        Issue::warning("nav", "too many")
            .with_category("navigation_overload")
            .with_viewport("mobile"),
    ]);
    assert_eq!(
        rule_text("choice_overload", &r),
        "✓ choice_overload\n    [warning] nav: too many (navigation_overload) @mobile\n"
    );
}

#[test]
fn suggestions_render_grouped() {
    let s = vec![
        Suggestion::new(Category::Forms, SuggestionKind::Good, "f", "ok"),
        Suggestion::new(Category::Forms, SuggestionKind::Consider, "f", "hm"),
        Suggestion::new(Category::Modals, SuggestionKind::Suggestion, "m", "close"),
    ];
    assert_eq!(
        suggestions_text(&s),
        "forms\n    [good] f: ok\n    [consider] f: hm\nmodals\n    [suggestion] m: close\n"
    );
    assert_eq!(suggestions_text(&[]), "no suggestions\n");
    let v: serde_json::Value = serde_json::from_str(&suggestions_json(&s).unwrap()).unwrap();
    assert_eq!(v[2]["category"], "modals");
    assert_eq!(v[2]["kind"], "suggestion");
}
