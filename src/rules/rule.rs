use crate::rules::types::RuleResult;
use crate::scene::model::Structure;

/// A single analyzer over a structure document.
///
/// Implementations are pure: they borrow the document read-only, never fail, and return
/// their findings in deterministic traversal order.
pub trait Rule {
    /// Stable rule name used in reports and on the command line.
    fn name(&self) -> &'static str;

    /// Evaluate the document.
    fn evaluate(&self, doc: &Structure) -> RuleResult;
}
