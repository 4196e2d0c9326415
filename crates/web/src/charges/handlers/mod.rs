//! Charge Handlers

pub(crate) mod add;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod save;
pub(crate) mod search;
