//! Hero and enemy combatants.
//!
//! Both sides share the same damage semantics: incoming damage is reduced
//! by half the defender's defense, floor-truncated, and never drops below
//! 1 so a fight can never stall at zero damage.

use crate::core::constants::*;
use crate::core::stat_model;

/// Closed set of enemy types, assigned by stage band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Skeleton,
    Demon,
    Dragon,
}

impl EnemyKind {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Orc => "Orc",
            EnemyKind::Skeleton => "Skeleton",
            EnemyKind::Demon => "Demon",
            EnemyKind::Dragon => "Dragon",
        }
    }
}

/// Applies the shared mitigation formula to a raw hit and returns the
/// amount actually dealt: `max(1, floor(raw - defense * 0.5))`.
fn mitigate(raw_amount: u32, defense: u32) -> u32 {
    let reduction = defense as f64 * DEFENSE_MITIGATION_FACTOR;
    let actual = (raw_amount as f64 - reduction).floor();
    (actual.max(MIN_DAMAGE as f64)) as u32
}

/// The single player-controlled combatant.
///
/// `base_*` stats are immutable; effective stats are recomputed from them
/// on every upgrade. `x`/`y` are renderer pass-through only — simulation
/// logic never reads them except as the spawn origin for floating text.
#[derive(Debug, Clone)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub level: u32,
    pub base_health: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub max_health: u32,
    pub health: u32,
    pub attack_power: u32,
    pub defense_value: u32,
    pub unlocked_skills: Vec<String>,
    pub x: f64,
    pub y: f64,
}

impl Hero {
    /// Fresh level-1 hero with the starting stat block.
    pub fn new(name: String) -> Self {
        Self::with_stats(
            name,
            DEFAULT_HERO_ROLE.to_string(),
            1,
            HERO_BASE_HEALTH,
            HERO_BASE_ATTACK,
            HERO_BASE_DEFENSE,
        )
    }

    /// Hero reconstructed from persisted identity + base stats. Effective
    /// stats derive from base stats and level; health starts full.
    pub fn with_stats(
        name: String,
        role: String,
        level: u32,
        base_health: u32,
        base_attack: u32,
        base_defense: u32,
    ) -> Self {
        let level = level.max(1);
        let max_health = stat_model::effective_max_health(base_health, level);
        Self {
            id: 0,
            name,
            role,
            level,
            base_health,
            base_attack,
            base_defense,
            max_health,
            health: max_health,
            attack_power: stat_model::effective_attack(base_attack, level),
            defense_value: stat_model::effective_defense(base_defense, level),
            unlocked_skills: vec![DEFAULT_SKILL_ID.to_string()],
            x: 0.0,
            y: 0.0,
        }
    }

    /// Applies a raw hit and returns the post-mitigation amount dealt.
    pub fn take_damage(&mut self, raw_amount: u32) -> u32 {
        let actual = mitigate(raw_amount, self.defense_value);
        self.health = self.health.saturating_sub(actual);
        actual
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Full restore, used on battle start and respawn.
    pub fn heal(&mut self) {
        self.health = self.max_health;
    }

    pub fn health_percent(&self) -> f64 {
        self.health as f64 / self.max_health as f64
    }

    /// Increments level and recomputes effective stats. Current health
    /// rises by exactly the max-health delta, so an upgrade mid-fight
    /// never worsens the health ratio.
    pub fn upgrade(&mut self) {
        self.level += 1;
        let new_max = stat_model::effective_max_health(self.base_health, self.level);
        let gained = new_max - self.max_health;
        self.max_health = new_max;
        self.health += gained;
        self.attack_power = stat_model::effective_attack(self.base_attack, self.level);
        self.defense_value = stat_model::effective_defense(self.base_defense, self.level);
    }
}

/// One member of the horde. Ids are positional at insertion time and may
/// be reused after removal; nothing references an enemy by id across ticks.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: usize,
    pub kind: EnemyKind,
    pub max_health: u32,
    pub health: u32,
    pub attack_power: u32,
    pub defense_value: u32,
    pub x: f64,
    pub y: f64,
}

impl Enemy {
    /// Constructs a full-health enemy scaled for the given stage.
    pub fn for_stage(id: usize, stage: u32) -> Self {
        let max_health = stat_model::enemy_health_for_stage(stage);
        Self {
            id,
            kind: stat_model::enemy_kind_for_stage(stage),
            max_health,
            health: max_health,
            attack_power: stat_model::enemy_attack_for_stage(stage),
            defense_value: stat_model::enemy_defense_for_stage(stage),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Applies a raw hit and returns the post-mitigation amount dealt.
    pub fn take_damage(&mut self, raw_amount: u32) -> u32 {
        let actual = mitigate(raw_amount, self.defense_value);
        self.health = self.health.saturating_sub(actual);
        actual
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn heal(&mut self) {
        self.health = self.max_health;
    }

    pub fn health_percent(&self) -> f64 {
        self.health as f64 / self.max_health as f64
    }
}
