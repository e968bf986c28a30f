//! Simulation core: balance formulas, economy, offline rewards, and the
//! session root that ties the pieces together.

pub mod constants;
pub mod economy;
pub mod offline;
pub mod session;
pub mod stat_model;
