pub(crate) mod approve;
pub(crate) mod discover;
pub(crate) mod scaffold;
