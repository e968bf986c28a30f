//! Combat: combatants, the round scheduler, wave lifecycle, floating
//! combat text, and skill effect resolution.

pub mod combatant;
pub mod effects;
pub mod engine;
pub mod skills;
pub mod waves;
