//! Horde — deterministic combat/progression core for an idle RPG.
//!
//! A single hero automatically fights an endlessly respawning horde,
//! accumulates gold passively and through stage clears, and persists to a
//! versioned JSON snapshot including offline catch-up rewards. Rendering
//! and input are external collaborators: they drive
//! [`GameSession::update`] once per frame and read the public state.

pub mod combat;
pub mod core;
pub mod save_manager;

pub use crate::combat::combatant::{Enemy, EnemyKind, Hero};
pub use crate::combat::effects::{EffectEntry, EffectFeed};
pub use crate::combat::engine::{CombatEngine, CombatEvent};
pub use crate::combat::skills::{apply_effect, EffectOutcome, SkillEffectKind};
pub use crate::combat::waves::{BattlePhase, WaveController};
pub use crate::core::economy::EconomyLedger;
pub use crate::core::offline::{
    calculate_offline_reward, process_offline, OfflineReport, OfflineReward,
};
pub use crate::core::session::GameSession;
pub use crate::save_manager::{SaveManager, SaveSnapshot};
