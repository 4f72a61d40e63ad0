use serde::{Deserialize, Serialize};

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::scene::model::Structure;
use crate::suggest::catalog;

/// Pattern category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Form containers and fields.
    Forms,
    /// Navigation bars and menus.
    Navigation,
    /// Page-level layout.
    Layouts,
    /// Buttons and calls to action.
    Buttons,
    /// Cards and card collections.
    Cards,
    /// Tables and row lists.
    Tables,
    /// Modals and dialogs.
    Modals,
}

impl Category {
    /// All categories, in output order.
    pub const ALL: [Category; 7] = [
        Category::Forms,
        Category::Navigation,
        Category::Layouts,
        Category::Buttons,
        Category::Cards,
        Category::Tables,
        Category::Modals,
    ];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Forms => "forms",
            Category::Navigation => "navigation",
            Category::Layouts => "layouts",
            Category::Buttons => "buttons",
            Category::Cards => "cards",
            Category::Tables => "tables",
            Category::Modals => "modals",
        }
    }

    /// Parse a category name.
    pub fn parse(s: &str) -> WirecheckResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                WirecheckError::validation(format!(
                    "unknown suggestion category '{s}', expected one of: forms, navigation, layouts, buttons, cards, tables, modals"
                ))
            })
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a suggestion should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// The pattern is already applied well.
    Good,
    /// Worth thinking about, depends on context.
    Consider,
    /// A concrete improvement.
    Suggestion,
}

impl SuggestionKind {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Good => "good",
            SuggestionKind::Consider => "consider",
            SuggestionKind::Suggestion => "suggestion",
        }
    }
}

/// One pattern suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Category that produced it.
    pub category: Category,
    /// How to read it.
    pub kind: SuggestionKind,
    /// Component it refers to, or `"document"`.
    pub component: String,
    /// Human-readable text.
    pub message: String,
}

impl Suggestion {
    pub(crate) fn new(
        category: Category,
        kind: SuggestionKind,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            kind,
            component: component.into(),
            message: message.into(),
        }
    }
}

/// Run the selected categories (all when `categories` is empty) in [`Category::ALL`] order.
#[tracing::instrument(skip_all, fields(components = doc.component_count()))]
pub fn suggest(doc: &Structure, categories: &[Category]) -> Vec<Suggestion> {
    let mut out = Vec::new();
    for cat in Category::ALL {
        if !categories.is_empty() && !categories.contains(&cat) {
            continue;
        }
        let before = out.len();
        match cat {
            Category::Forms => catalog::forms(doc, &mut out),
            Category::Navigation => catalog::navigation(doc, &mut out),
            Category::Layouts => catalog::layouts(doc, &mut out),
            Category::Buttons => catalog::buttons(doc, &mut out),
            Category::Cards => catalog::cards(doc, &mut out),
            Category::Tables => catalog::tables(doc, &mut out),
            Category::Modals => catalog::modals(doc, &mut out),
        }
        tracing::debug!(category = cat.as_str(), count = out.len() - before, "category done");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/suggest/engine.rs"]
mod tests;
