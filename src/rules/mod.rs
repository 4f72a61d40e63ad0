pub(crate) mod accessibility;
pub(crate) mod choice_overload;
pub(crate) mod classify;
pub(crate) mod config;
pub(crate) mod contrast;
pub(crate) mod dark_mode;
pub(crate) mod elevation;
pub(crate) mod focus;
pub(crate) mod geometry;
pub(crate) mod gestalt;
pub(crate) mod hierarchy;
pub(crate) mod loading_states;
pub(crate) mod registry;
pub(crate) mod responsive;
pub(crate) mod rule;
pub(crate) mod spacing;
pub(crate) mod touch_targets;
pub(crate) mod types;
pub(crate) mod typography;
