//! Charge Administration Domain Concerns

pub mod charges;
