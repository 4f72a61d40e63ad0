pub(crate) mod document;
pub(crate) mod model;
pub(crate) mod px;
pub(crate) mod tokens;
pub(crate) mod walk;
