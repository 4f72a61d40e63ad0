/// Convenience result type used across wirecheck.
pub type WirecheckResult<T> = Result<T, WirecheckError>;

/// Top-level error taxonomy used by library APIs.
///
/// Analytical findings produced by the rule evaluators are never errors; they travel as
/// [`crate::Issue`] values. This type covers documents that cannot be processed at all and
/// internal failures of the layout/render pipeline.
#[derive(thiserror::Error, Debug)]
pub enum WirecheckError {
    /// The document violates Phase 1 schema constraints.
    #[error("validation error: {0}")]
    Validation(String),

    /// The layout map is inconsistent with the document being rendered.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while rasterizing a document.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing documents and configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while discovering or writing project files.
    #[error("project error: {0}")]
    Project(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WirecheckError {
    /// Build a [`WirecheckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WirecheckError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`WirecheckError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WirecheckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`WirecheckError::Project`] value.
    pub fn project(msg: impl Into<String>) -> Self {
        Self::Project(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
