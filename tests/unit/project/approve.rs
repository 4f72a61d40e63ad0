use super::*;
use chrono::TimeZone;

#[test]
fn approve_copies_latest_locked() {
    let tmp = tempfile::tempdir().unwrap();
    let p = Project::open(tmp.path());
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    p.onboard("Sign up", now).unwrap();
    let mut v2 = Structure::from_path(p.version_path(1)).unwrap();
    v2.version = "v2".to_owned();
    std::fs::write(p.version_path(2), v2.to_json_pretty().unwrap()).unwrap();

    let out = p.approve("sam", now).unwrap();
    assert_eq!(out, p.approved_path());
    let approved = Structure::from_path(&out).unwrap();
    assert_eq!(approved.version, "v2");
    assert!(approved.locked);
    assert_eq!(approved.locked_at.as_deref(), Some("2026-03-01T12:00:00Z"));
    assert_eq!(approved.approved_by.as_deref(), Some("sam"));
    assert_eq!(approved.components, v2.components);
}

#[test]
fn approve_rejects_invalid_latest() {
    let tmp = tempfile::tempdir().unwrap();
    let p = Project::open(tmp.path());
    std::fs::create_dir_all(p.structure_dir()).unwrap();
    std::fs::write(p.version_path(1), r#"{"phase": "design"}"#).unwrap();
    let err = p.approve("sam", Utc::now()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
    assert!(!p.has_approved());
}
