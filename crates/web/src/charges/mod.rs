//! Charge administration feature: form binding, views and handlers.

pub(crate) mod errors;
pub(crate) mod form;
pub(crate) mod handlers;
pub(crate) mod views;
