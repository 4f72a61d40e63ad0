use super::*;
use crate::scene::walk::walk;
use serde_json::json;

fn doc(components: serde_json::Value) -> Structure {
    serde_json::from_value(json!({
        "version": "t",
        "phase": "structure",
        "intent": {"purpose": "t"},
        "layout": {"type": "stack", "spacing": 16},
        "components": components
    }))
    .unwrap()
}

#[test]
fn empty_flex_box_fills_viewport() {
    let d = doc(json!([{"id": "x", "type": "box", "layout": {"display": "flex"}}]));
    let map = compute_layout(&d, 1200);
    assert_eq!(map.get("x"), Some(RectPx::new(0, 0, 1200, 100)));
}

#[test]
fn root_components_stack_with_spacing() {
    let d = doc(json!([
        {"id": "a", "type": "text", "content": "hello"},
        {"id": "b", "type": "button", "content": "Go"},
        {"id": "c", "type": "input"},
        {"id": "d", "type": "image"}
    ]));
    let map = compute_layout(&d, 800);
    assert_eq!(map.get("a"), Some(RectPx::new(0, 0, 800, 38)));
    assert_eq!(map.get("b"), Some(RectPx::new(0, 54, 120, 44)));
    assert_eq!(map.get("c"), Some(RectPx::new(0, 114, 800, 40)));
    assert_eq!(map.get("d"), Some(RectPx::new(0, 170, 800, 150)));
}

#[test]
fn grid_three_columns_wraps_fourth_child() {
    let d = doc(json!([{
        "id": "g", "type": "box",
        "layout": {"display": "grid", "grid_template_columns": "repeat(3,1fr)", "gap": 16},
        "children": [
            {"id": "c0", "type": "box"},
            {"id": "c1", "type": "box"},
            {"id": "c2", "type": "box"},
            {"id": "c3", "type": "box"}
        ]
    }]));
    let map = compute_layout(&d, 1200);
    assert_eq!(map.get("c0"), Some(RectPx::new(0, 0, 389, 100)));
    assert_eq!(map.get("c1").unwrap().x, 405);
    assert_eq!(map.get("c2").unwrap().x, 810);
    let c3 = map.get("c3").unwrap();
    assert_eq!((c3.x, c3.y), (0, 116));
    assert_eq!(map.get("g").unwrap().h, 216);
}

#[test]
fn horizontal_flex_distributes_grow_factors() {
    let d = doc(json!([{
        "id": "row", "type": "box",
        "layout": {"display": "flex", "direction": "horizontal", "gap": 20, "padding": 10},
        "children": [
            {"id": "side", "type": "box", "layout": {"width": 200}},
            {"id": "main", "type": "box", "layout": {"flex": 2}},
            {"id": "aside", "type": "box", "layout": {"flex": 1}}
        ]
    }]));
    let map = compute_layout(&d, 1000);
    // content 980, fixed 200, gaps 40 -> 740 for flex
    assert_eq!(map.get("side"), Some(RectPx::new(10, 10, 200, 100)));
    assert_eq!(map.get("main"), Some(RectPx::new(230, 10, 493, 100)));
    assert_eq!(map.get("aside"), Some(RectPx::new(743, 10, 246, 100)));
    assert_eq!(map.get("row").unwrap().h, 120);
}

#[test]
fn space_between_pushes_children_apart() {
    let d = doc(json!([{
        "id": "bar", "type": "box",
        "layout": {"display": "flex", "direction": "horizontal", "justify_content": "space-between"},
        "children": [
            {"id": "logo", "type": "text", "content": "Brand", "size": "lg"},
            {"id": "cta", "type": "button", "content": "Sign up"}
        ]
    }]));
    let map = compute_layout(&d, 600);
    let logo = map.get("logo").unwrap();
    let cta = map.get("cta").unwrap();
    assert_eq!((logo.x, logo.w), (0, 45));
    assert_eq!((cta.x, cta.w), (480, 120));
    assert_eq!(cta.right(), 600);
}

#[test]
fn vertical_stack_injects_default_gap_and_padding() {
    let d = doc(json!([{
        "id": "col", "type": "box",
        "layout": {"display": "flex", "direction": "vertical", "padding": 24},
        "children": [
            {"id": "t1", "type": "text", "content": "a"},
            {"id": "t2", "type": "text", "content": "b"}
        ]
    }]));
    let map = compute_layout(&d, 400);
    assert_eq!(map.get("t1"), Some(RectPx::new(24, 24, 352, 38)));
    assert_eq!(map.get("t2"), Some(RectPx::new(24, 70, 352, 38)));
    assert_eq!(map.get("col").unwrap().h, 38 + 8 + 38 + 48);
}

#[test]
fn explicit_sizes_override_and_min_height_applies() {
    let d = doc(json!([
        {"id": "a", "type": "box", "layout": {"width": 300, "height": 20}},
        {"id": "b", "type": "text", "content": "x", "layout": {"min_height": 80}},
        {"id": "c", "type": "image", "layout": {"max_width": 500}}
    ]));
    let map = compute_layout(&d, 1200);
    assert_eq!(map.get("a"), Some(RectPx::new(0, 0, 300, 20)));
    assert_eq!(map.get("b").unwrap().h, 80);
    assert_eq!(map.get("c").unwrap().w, 500);
}

#[test]
fn every_component_gets_one_nonnegative_box() {
    let d = doc(json!([
        {"id": "shell", "type": "box", "layout": {"display": "flex", "direction": "horizontal", "padding": 400},
         "children": [
            {"id": "nav", "type": "box", "layout": {"display": "grid", "grid_template_columns": "500px 1fr", "gap": 64},
             "children": [{"id": "n1", "type": "button"}, {"id": "n2", "type": "button"}, {"id": "n3", "type": "text"}]},
            {"id": "body", "type": "box", "layout": {"flex": 1}, "children": [{"id": "p", "type": "text", "content": "a\nb"}]}
         ]}
    ]));
    for viewport in [0, 375, 768, 1200] {
        let map = compute_layout(&d, viewport);
        let visits = walk(&d);
        assert_eq!(map.len(), visits.len());
        for v in visits {
            let r = map.get(&v.component.id).unwrap();
            assert!(r.w >= 0 && r.h >= 0, "{} {r:?}", v.component.id);
        }
    }
}

#[test]
fn flex_row_conserves_width() {
    for gap in [0u32, 8, 16, 24] {
        for n in 1..6usize {
            let children: Vec<_> = (0..n)
                .map(|i| json!({"id": format!("c{i}"), "type": "box", "layout": {"flex": i + 1}}))
                .collect();
            let d = doc(json!([{
                "id": "row", "type": "box",
                "layout": {"display": "flex", "direction": "horizontal", "gap": gap},
                "children": children
            }]));
            let map = compute_layout(&d, 997);
            let sum: i32 = (0..n).map(|i| map.get(&format!("c{i}")).unwrap().w).sum();
            assert!(sum + (n as i32 - 1) * gap as i32 <= 997 + 1);
        }
    }
}

#[test]
fn missing_box_is_a_layout_error() {
    let map = LayoutMap::default();
    let err = map.box_for("ghost").unwrap_err();
    assert!(err.to_string().contains("no layout box for ghost"));
}

#[test]
fn scaling_multiplies_every_box() {
    let d = doc(json!([{"id": "x", "type": "text", "content": "hi"}]));
    let map = compute_layout(&d, 300);
    let scaled = map.scaled(2);
    assert_eq!(scaled.get("x"), Some(RectPx::new(0, 0, 600, 76)));
    assert_eq!(scaled.content_bottom(), 2 * map.content_bottom());
}

#[test]
fn layout_is_deterministic() {
    let d = doc(json!([{"id": "g", "type": "box", "layout": {"display": "grid", "grid_template_columns": "1fr 2fr", "gap": 12},
        "children": [{"id": "a", "type": "text"}, {"id": "b", "type": "input"}, {"id": "c", "type": "image"}]}]));
    assert_eq!(compute_layout(&d, 1024), compute_layout(&d, 1024));
}

#[test]
fn huge_pixel_values_saturate_instead_of_overflowing() {
    let d = doc(json!([
        {"id": "pad", "type": "box", "layout": {"padding": 1500000000}, "children": [
            {"id": "inner", "type": "text", "content": "hi"}
        ]},
        {"id": "wide", "type": "text", "content": "hi", "layout": {"width": 3000000000u64}},
        {"id": "tall", "type": "box", "layout": {"height": 4000000000u64, "min_height": 4000000000u64}},
        {"id": "after", "type": "text", "content": "hi"}
    ]));
    d.validate().unwrap();
    let map = compute_layout(&d, 1200);
    assert_eq!(map.len(), 5);

    let inner = map.get("inner").unwrap();
    assert_eq!((inner.x, inner.y, inner.w), (1500000000, 1500000000, 0));
    assert_eq!(map.get("pad").unwrap().h, i32::MAX);

    assert_eq!(map.get("wide").unwrap().w, i32::MAX);
    assert_eq!(map.get("tall").unwrap().h, i32::MAX);
    assert_eq!(map.get("after").unwrap().y, i32::MAX);
    assert_eq!(map.content_bottom(), i32::MAX);
}

#[test]
fn huge_grid_repeat_lays_out() {
    let d = doc(json!([{
        "id": "grid", "type": "box",
        "layout": {"display": "grid", "grid_template_columns": "repeat(4000000000, 1fr)"},
        "children": [{"id": "a", "type": "box"}, {"id": "b", "type": "box"}]
    }]));
    let map = compute_layout(&d, 1200);
    assert_eq!(map.get("a").unwrap().y, map.get("b").unwrap().y);
}
