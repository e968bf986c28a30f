//! Pure stat and reward formulas shared by the game and its tests.
//!
//! Everything in this module is a deterministic input/output function with
//! no side effects, so the balance curves can be verified in isolation.

use super::constants::*;
use crate::combat::combatant::EnemyKind;

/// Hero max health at a given level.
pub fn effective_max_health(base_health: u32, level: u32) -> u32 {
    scale_hero_stat(base_health, level, HERO_HEALTH_GROWTH_PER_LEVEL)
}

/// Hero attack power at a given level.
pub fn effective_attack(base_attack: u32, level: u32) -> u32 {
    scale_hero_stat(base_attack, level, HERO_ATTACK_GROWTH_PER_LEVEL)
}

/// Hero defense at a given level.
pub fn effective_defense(base_defense: u32, level: u32) -> u32 {
    scale_hero_stat(base_defense, level, HERO_DEFENSE_GROWTH_PER_LEVEL)
}

/// Linear per-level growth with floor truncation at the read point.
fn scale_hero_stat(base: u32, level: u32, growth: f64) -> u32 {
    let level_bonus = (level.saturating_sub(1)) as f64 * growth;
    (base as f64 * (1.0 + level_bonus)).floor() as u32
}

/// Gold cost to upgrade a hero from `level` to `level + 1`.
pub fn upgrade_cost(level: u32) -> u64 {
    (UPGRADE_COST_BASE * (level as f64).powf(UPGRADE_COST_EXPONENT)).floor() as u64
}

/// Enemy max health for a stage.
pub fn enemy_health_for_stage(stage: u32) -> u32 {
    scale_enemy_stat(ENEMY_BASE_HEALTH, ENEMY_HEALTH_GROWTH_PER_STAGE, stage)
}

/// Enemy attack power for a stage.
pub fn enemy_attack_for_stage(stage: u32) -> u32 {
    scale_enemy_stat(ENEMY_BASE_ATTACK, ENEMY_ATTACK_GROWTH_PER_STAGE, stage)
}

/// Enemy defense for a stage.
pub fn enemy_defense_for_stage(stage: u32) -> u32 {
    scale_enemy_stat(ENEMY_BASE_DEFENSE, ENEMY_DEFENSE_GROWTH_PER_STAGE, stage)
}

fn scale_enemy_stat(base: f64, growth: f64, stage: u32) -> u32 {
    let exponent = stage.saturating_sub(1) as i32;
    (base * growth.powi(exponent)).floor() as u32
}

/// Enemy type for a stage. The bands are contiguous and non-overlapping;
/// the exact boundaries drive the visible difficulty spikes.
pub fn enemy_kind_for_stage(stage: u32) -> EnemyKind {
    match stage {
        0..=2 => EnemyKind::Goblin,
        3..=5 => EnemyKind::Orc,
        6..=8 => EnemyKind::Skeleton,
        9..=12 => EnemyKind::Demon,
        _ => EnemyKind::Dragon,
    }
}

/// Gold reward for clearing stage `stage`.
pub fn stage_clear_gold(stage: u32) -> u64 {
    let growth = STAGE_CLEAR_GOLD_GROWTH.powi(stage as i32);
    (STAGE_CLEAR_GOLD_BASE * stage as f64 * growth).floor() as u64
}

/// Live idle accrual rate in gold per second.
pub fn passive_gold_rate(stage: u32) -> f64 {
    stage as f64 * PASSIVE_GOLD_PER_STAGE
}

/// Offline accrual rate in gold per second. Steeper than the live rate;
/// [`MAX_OFFLINE_MS`] bounds the total payout.
pub fn offline_gold_rate(stage: u32) -> f64 {
    stage as f64 * OFFLINE_GOLD_PER_STAGE
}
