//! Pattern checks, one function per category. Each is a single pass over the tree.

use crate::rules::accessibility::label_id_for;
use crate::rules::classify::{is_form, is_navigation, is_primary_button};
use crate::scene::model::{Component, ComponentKind, Structure};
use crate::scene::walk::{descendants, walk};
use crate::suggest::engine::{Category, Suggestion, SuggestionKind};

const MAX_UNGROUPED_FIELDS: usize = 5;
const MAX_HORIZONTAL_NAV: usize = 5;
const MAX_READABLE_WIDTH: u32 = 1440;
const MAX_TABLE_ROWS: usize = 10;

fn components(doc: &Structure) -> impl Iterator<Item = &Component> {
    walk(doc).into_iter().map(|v| v.component)
}

pub(crate) fn forms(doc: &Structure, out: &mut Vec<Suggestion>) {
    let mut saw_form = false;
    for c in components(doc).filter(|c| !c.children.is_empty() && is_form(c)) {
        saw_form = true;
        let inputs: Vec<&Component> = descendants(c)
            .filter(|d| d.kind == ComponentKind::Input)
            .collect();
        if inputs.len() > MAX_UNGROUPED_FIELDS {
            out.push(Suggestion::new(
                Category::Forms,
                SuggestionKind::Suggestion,
                &c.id,
                format!(
                    "{} fields in one form, group them into sections or steps",
                    inputs.len()
                ),
            ));
        }
        let texts: Vec<&str> = descendants(c)
            .filter(|d| d.kind == ComponentKind::Text)
            .map(|d| d.id.as_str())
            .collect();
        let unlabelled = inputs
            .iter()
            .filter(|i| !texts.contains(&label_id_for(&i.id).as_str()))
            .count();
        if unlabelled > 0 {
            out.push(Suggestion::new(
                Category::Forms,
                SuggestionKind::Consider,
                &c.id,
                format!("{unlabelled} fields have no visible label above them"),
            ));
        }
        if descendants(c).any(|d| d.kind == ComponentKind::Button) {
            out.push(Suggestion::new(
                Category::Forms,
                SuggestionKind::Good,
                &c.id,
                "form has a submit action",
            ));
        } else {
            out.push(Suggestion::new(
                Category::Forms,
                SuggestionKind::Suggestion,
                &c.id,
                "add a submit button to the form",
            ));
        }
    }
    let loose = components(doc)
        .filter(|c| c.kind == ComponentKind::Input)
        .count();
    if !saw_form && loose >= 2 {
        out.push(Suggestion::new(
            Category::Forms,
            SuggestionKind::Consider,
            "document",
            format!("{loose} inputs outside a form container, wrap them in a form"),
        ));
    }
}

pub(crate) fn navigation(doc: &Structure, out: &mut Vec<Suggestion>) {
    for c in components(doc).filter(|c| !c.children.is_empty() && is_navigation(c)) {
        let items = descendants(c).filter(|d| d.is_interactive()).count();
        if (1..=7).contains(&items) {
            out.push(Suggestion::new(
                Category::Navigation,
                SuggestionKind::Good,
                &c.id,
                format!("navigation keeps to {items} items"),
            ));
        }
        if c.layout.is_horizontal() && items > MAX_HORIZONTAL_NAV {
            out.push(Suggestion::new(
                Category::Navigation,
                SuggestionKind::Consider,
                &c.id,
                "collapse the horizontal navigation into a menu on mobile",
            ));
        }
        let role = c.role_lower();
        if role != "navigation" && role != "menu" {
            out.push(Suggestion::new(
                Category::Navigation,
                SuggestionKind::Suggestion,
                &c.id,
                "set role \"navigation\" so assistive technology announces it",
            ));
        }
    }
}

pub(crate) fn layouts(doc: &Structure, out: &mut Vec<Suggestion>) {
    let mw = doc.layout.max_width;
    if mw > MAX_READABLE_WIDTH {
        out.push(Suggestion::new(
            Category::Layouts,
            SuggestionKind::Suggestion,
            "layout",
            format!("max_width {mw}px is very wide, constrain content to 1200-1440px"),
        ));
    } else if mw == 0 {
        out.push(Suggestion::new(
            Category::Layouts,
            SuggestionKind::Consider,
            "layout",
            "set a max_width to keep line lengths readable on wide screens",
        ));
    } else {
        out.push(Suggestion::new(
            Category::Layouts,
            SuggestionKind::Good,
            "layout",
            format!("content constrained to {mw}px"),
        ));
    }
    if doc.layout.kind == "sidebar" && doc.responsive.mobile.changes.is_empty() {
        out.push(Suggestion::new(
            Category::Layouts,
            SuggestionKind::Consider,
            "layout",
            "describe how the sidebar collapses on mobile in responsive.mobile.changes",
        ));
    }
    for c in components(doc).filter(|c| c.layout.is_grid() && c.layout.gap == 0) {
        out.push(Suggestion::new(
            Category::Layouts,
            SuggestionKind::Suggestion,
            &c.id,
            "grid has no gap, add spacing between cells",
        ));
    }
}

pub(crate) fn buttons(doc: &Structure, out: &mut Vec<Suggestion>) {
    let buttons: Vec<&Component> = components(doc)
        .filter(|c| c.kind == ComponentKind::Button)
        .collect();
    if buttons.is_empty() {
        return;
    }
    let primaries: Vec<&&Component> = buttons
        .iter()
        .filter(|b| is_primary_button(b, doc))
        .collect();
    match primaries.len() {
        0 => out.push(Suggestion::new(
            Category::Buttons,
            SuggestionKind::Consider,
            "document",
            "no primary action, set intent.primary_action to the main button",
        )),
        1 => out.push(Suggestion::new(
            Category::Buttons,
            SuggestionKind::Good,
            &primaries[0].id,
            "single clear primary action",
        )),
        n => out.push(Suggestion::new(
            Category::Buttons,
            SuggestionKind::Suggestion,
            &primaries[0].id,
            format!("{n} primary buttons compete, keep one and demote the rest"),
        )),
    }
    for b in buttons.iter().filter(|b| b.content.trim().is_empty()) {
        out.push(Suggestion::new(
            Category::Buttons,
            SuggestionKind::Suggestion,
            &b.id,
            "button has no label, use a short verb",
        ));
    }
}

fn is_card(c: &Component) -> bool {
    c.kind == ComponentKind::Box && (c.role_lower() == "card" || c.id_lower().contains("card"))
}

pub(crate) fn cards(doc: &Structure, out: &mut Vec<Suggestion>) {
    for parent in components(doc) {
        let cards: Vec<&Component> = parent.children.iter().filter(|c| is_card(c)).collect();
        if cards.len() < 2 {
            continue;
        }
        if parent.layout.is_grid() {
            out.push(Suggestion::new(
                Category::Cards,
                SuggestionKind::Good,
                &parent.id,
                format!("{} cards laid out on a grid", cards.len()),
            ));
        } else {
            out.push(Suggestion::new(
                Category::Cards,
                SuggestionKind::Consider,
                &parent.id,
                "arrange repeated cards on a grid",
            ));
        }
        let first = cards[0].layout.padding;
        if cards.iter().any(|c| c.layout.padding != first) {
            out.push(Suggestion::new(
                Category::Cards,
                SuggestionKind::Suggestion,
                &parent.id,
                "cards use different paddings, keep them identical",
            ));
        }
    }
    for c in components(doc).filter(|c| is_card(c) && !c.children.is_empty()) {
        if !c.children.iter().any(|ch| ch.kind == ComponentKind::Text) {
            out.push(Suggestion::new(
                Category::Cards,
                SuggestionKind::Consider,
                &c.id,
                "card has no text, add a title",
            ));
        }
    }
}

pub(crate) fn tables(doc: &Structure, out: &mut Vec<Suggestion>) {
    let is_table = |c: &Component| c.role_lower() == "table" || c.id_lower().contains("table");
    for c in components(doc).filter(|c| is_table(*c) && !c.children.is_empty()) {
        let has_header = c.children.iter().any(|ch| {
            let id = ch.id_lower();
            id.contains("header") || id.contains("head") || ch.role_lower() == "header"
        });
        if has_header {
            out.push(Suggestion::new(
                Category::Tables,
                SuggestionKind::Good,
                &c.id,
                "table has a header row",
            ));
        } else {
            out.push(Suggestion::new(
                Category::Tables,
                SuggestionKind::Suggestion,
                &c.id,
                "add a header row naming each column",
            ));
        }
        let rows = c.children.len() - usize::from(has_header);
        if rows > MAX_TABLE_ROWS {
            out.push(Suggestion::new(
                Category::Tables,
                SuggestionKind::Consider,
                &c.id,
                format!("{rows} rows, paginate or virtualize the table"),
            ));
        }
    }
}

pub(crate) fn modals(doc: &Structure, out: &mut Vec<Suggestion>) {
    let is_modal =
        |c: &Component| c.kind == ComponentKind::Box && c.mentions_any(&["modal", "dialog"]);
    let has_overlay = components(doc).any(|c| c.mentions_any(&["overlay", "backdrop"]));
    for v in walk(doc) {
        let c = v.component;
        if !is_modal(c) || v.parent.is_some_and(|p| is_modal(p)) {
            continue;
        }
        let closable = descendants(c).any(|d| d.mentions_any(&["close", "dismiss", "cancel"]));
        if !closable {
            out.push(Suggestion::new(
                Category::Modals,
                SuggestionKind::Suggestion,
                &c.id,
                "add a close button to the modal",
            ));
        }
        if !has_overlay {
            out.push(Suggestion::new(
                Category::Modals,
                SuggestionKind::Suggestion,
                &c.id,
                "add an overlay behind the modal",
            ));
        }
        if closable && has_overlay {
            out.push(Suggestion::new(
                Category::Modals,
                SuggestionKind::Good,
                &c.id,
                "modal has a close action and an overlay",
            ));
        }
    }
}
