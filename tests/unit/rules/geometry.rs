use super::*;

fn doc(components: Vec<Component>) -> Structure {
    Structure {
        components,
        ..Structure::default()
    }
}

fn comp(id: &str, kind: ComponentKind) -> Component {
    Component {
        id: id.to_owned(),
        kind,
        ..Component::default()
    }
}

#[test]
fn defaults_per_kind() {
    let mut t = comp("t", ComponentKind::Text);
    t.content = "a\nb".to_owned();
    let d = doc(vec![
        comp("b", ComponentKind::Button),
        comp("i", ComponentKind::Input),
        t,
        comp("img", ComponentKind::Image),
    ]);
    let g = Geometry::estimate(&d, 1200.0);
    assert_eq!(g.rect("b").unwrap(), Rect::new(0.0, 0.0, 120.0, 44.0));
    assert_eq!(g.rect("i").unwrap(), Rect::new(0.0, 44.0, 300.0, 88.0));
    assert_eq!(g.rect("t").unwrap().height(), 48.0);
    assert_eq!(g.rect("img").unwrap().height(), 150.0);
    assert_eq!(g.rect("img").unwrap().width(), 1200.0);
}

#[test]
fn explicit_sizes_win_and_inputs_shrink_to_fit() {
    let mut b = comp("b", ComponentKind::Button);
    b.layout.width = 30;
    b.layout.height = 30;
    let d = doc(vec![b, comp("i", ComponentKind::Input)]);
    let g = Geometry::estimate(&d, 200.0);
    assert_eq!(g.rect("b").unwrap(), Rect::new(0.0, 0.0, 30.0, 30.0));
    assert_eq!(g.rect("i").unwrap().width(), 200.0);
}

#[test]
fn horizontal_rows_use_declared_gap() {
    let mut row = comp("row", ComponentKind::Box);
    row.layout.display = "flex".to_owned();
    row.layout.direction = "horizontal".to_owned();
    row.layout.gap = 4;
    row.layout.padding = 8;
    row.children = vec![
        comp("ok", ComponentKind::Button),
        comp("cancel", ComponentKind::Button),
    ];
    let g = Geometry::estimate(&doc(vec![row]), 1200.0);
    let ok = g.rect("ok").unwrap();
    let cancel = g.rect("cancel").unwrap();
    assert_eq!(ok.x0, 8.0);
    assert_eq!(cancel.x0, 132.0);
    assert_eq!(axis_gap(ok, cancel), Some(4.0));
    assert_eq!(g.rect("row").unwrap().height(), 60.0);
}

#[test]
fn axis_gap_cases() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(axis_gap(a, Rect::new(0.0, 18.0, 10.0, 28.0)), Some(8.0));
    assert_eq!(axis_gap(Rect::new(0.0, 18.0, 10.0, 28.0), a), Some(8.0));
    assert_eq!(axis_gap(a, Rect::new(12.0, 2.0, 20.0, 8.0)), Some(2.0));
    assert_eq!(axis_gap(a, Rect::new(5.0, 5.0, 20.0, 20.0)), None);
    assert_eq!(axis_gap(a, Rect::new(20.0, 20.0, 30.0, 30.0)), None);
    assert_eq!(axis_gap(a, Rect::new(10.0, 0.0, 20.0, 10.0)), Some(0.0));
}
