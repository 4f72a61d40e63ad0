pub(crate) mod solver;
pub(crate) mod text;
pub(crate) mod tracks;
