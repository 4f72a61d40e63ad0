use super::*;
use serde_json::json;

fn doc(components: serde_json::Value) -> Structure {
    serde_json::from_value(json!({
        "version": "t",
        "phase": "structure",
        "intent": {"purpose": "t"},
        "layout": {"type": "stack"},
        "components": components
    }))
    .unwrap()
}

fn all_white(frame: &FrameRGBA) -> bool {
    frame.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255])
}

#[test]
fn minimum_document_renders_blank_min_height_canvas() {
    let d = doc(json!([{"id": "x", "type": "box", "layout": {"display": "flex"}}]));
    let frame = render_document(&d, &RenderOpts::default()).unwrap();
    assert_eq!((frame.width, frame.height), (1200, 400));
    assert!(all_white(&frame));
}

#[test]
fn scale_multiplies_dimensions_exactly() {
    let d = doc(json!([
        {"id": "t", "type": "text", "content": "Hello\nWorld"},
        {"id": "b", "type": "button", "content": "Go"},
        {"id": "i", "type": "image", "layout": {"height": 600}}
    ]));
    let base = render_document(&d, &RenderOpts::for_viewport(Viewport::Mobile)).unwrap();
    for k in [2, 3] {
        let opts = RenderOpts::for_viewport(Viewport::Mobile).with_scale(Scale::new(k).unwrap());
        let scaled = render_document(&d, &opts).unwrap();
        assert_eq!(scaled.width, base.width * k);
        assert_eq!(scaled.height, base.height * k);
    }
}

#[test]
fn explicit_height_is_respected() {
    let d = doc(json!([{"id": "x", "type": "box"}]));
    let opts = RenderOpts {
        height: 120,
        ..RenderOpts::for_viewport(Viewport::Tablet)
    };
    let frame = render_document(&d, &opts).unwrap();
    assert_eq!((frame.width, frame.height), (768, 120));
}

#[test]
fn buttons_inputs_and_images_paint_their_chrome() {
    let d = doc(json!([
        {"id": "b", "type": "button"},
        {"id": "i", "type": "input", "content": "Email"},
        {"id": "img", "type": "image"}
    ]));
    let layout = compute_layout(&d, 400);
    let frame = render_structure(&d, &layout, &RenderOpts::for_viewport(Viewport::Mobile)).unwrap();

    let b = layout.get("b").unwrap();
    assert_eq!(frame.pixel(b.x as u32 + 2, b.y as u32 + 2), Some(Rgba8::BLACK));

    let i = layout.get("i").unwrap();
    assert_eq!(frame.pixel(i.x as u32, i.y as u32 + 5), Some(Rgba8::LIGHT_GRAY));
    assert_eq!(frame.pixel(i.x as u32 + 200, i.y as u32 + 35), Some(Rgba8::WHITE));

    let img = layout.get("img").unwrap();
    assert_eq!(frame.pixel(img.x as u32 + 3, img.y as u32 + 3), Some(Rgba8::LIGHT_GRAY));
}

#[test]
fn box_background_and_single_side_borders() {
    let d = doc(json!([{
        "id": "hdr", "type": "box",
        "layout": {"background": "#E5E5E5", "border_bottom": "1px solid #000000", "height": 60}
    }]));
    let layout = compute_layout(&d, 200);
    let frame = render_structure(&d, &layout, &RenderOpts { width: 200, ..RenderOpts::default() }).unwrap();
    assert_eq!(frame.pixel(10, 10), Some(Rgba8::LIGHT_GRAY));
    assert_eq!(frame.pixel(10, 59), Some(Rgba8::BLACK));
    assert_eq!(frame.pixel(10, 60), Some(Rgba8::WHITE));
}

#[test]
fn text_is_drawn_in_its_color() {
    let d = doc(json!([{"id": "t", "type": "text", "content": "Hi", "color": "#525252"}]));
    let frame = render_document(&d, &RenderOpts::for_viewport(Viewport::Mobile)).unwrap();
    let ink = Rgba8::from_hex("#525252").unwrap().to_array();
    assert!(frame.data.chunks_exact(4).any(|px| px == ink));
}

#[test]
fn missing_box_and_unknown_type_fail() {
    let d = doc(json!([{"id": "x", "type": "box"}]));
    let err = render_structure(&d, &LayoutMap::default(), &RenderOpts::default()).unwrap_err();
    assert!(err.to_string().contains("no layout box for x"));

    let d = doc(json!([{"id": "v", "type": "video"}]));
    let err = render_document(&d, &RenderOpts::default()).unwrap_err();
    assert!(err.to_string().contains("unknown component type"));
}

#[test]
fn grid_overlay_and_annotations_add_ink() {
    let d = doc(json!([{"id": "x", "type": "box"}]));
    let opts = RenderOpts {
        grid_overlay: true,
        ..RenderOpts::for_viewport(Viewport::Mobile)
    };
    let frame = render_document(&d, &opts).unwrap();
    assert_eq!(frame.pixel(0, 203), Some(Rgba8::MID_GRAY));
    assert_eq!(frame.pixel(8, 203), Some(Rgba8::LIGHT_GRAY));

    let opts = RenderOpts {
        annotate: true,
        ..RenderOpts::for_viewport(Viewport::Mobile)
    };
    let frame = render_document(&d, &opts).unwrap();
    assert!(!all_white(&frame));
}

#[test]
fn rendering_is_deterministic() {
    let d = doc(json!([{"id": "g", "type": "box", "layout": {"display": "grid", "grid_template_columns": "repeat(2, 1fr)", "gap": 16},
        "children": [{"id": "a", "type": "button", "content": "A"}, {"id": "b", "type": "input", "content": "b"}]}]));
    let opts = RenderOpts::default();
    assert_eq!(render_document(&d, &opts).unwrap(), render_document(&d, &opts).unwrap());
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let d = doc(json!([{"id": "tall", "type": "box", "layout": {"height": 4000000000u64}}]));
    let err = render_document(&d, &RenderOpts::default()).unwrap_err();
    assert!(err.to_string().starts_with("render error: canvas"), "{err}");

    let opts = RenderOpts {
        height: u32::MAX,
        ..RenderOpts::default()
    };
    let small = doc(json!([{"id": "x", "type": "box"}]));
    assert!(render_document(&small, &opts).is_err());
}

#[test]
fn components_pushed_past_the_edge_are_clipped() {
    let d = doc(json!([{
        "id": "row", "type": "box",
        "layout": {"display": "flex", "direction": "horizontal"},
        "children": [
            {"id": "wide", "type": "text", "content": "x", "layout": {"width": 3000000000u64}},
            {"id": "go", "type": "button", "content": "Go"},
            {"id": "field", "type": "input", "content": "email"}
        ]
    }]));
    let opts = RenderOpts {
        annotate: true,
        ..RenderOpts::default()
    };
    let frame = render_document(&d, &opts).unwrap();
    assert_eq!((frame.width, frame.height), (1200, 400));
}
