//! Skill effects as tagged variants.
//!
//! Skills are stored in saves as string ids (`unlocked_skills`) and
//! resolved here through a closed enum and a pure dispatch function, so
//! outcomes are testable without embedding behavior in data. The battle
//! loop itself stays auto-attack only; skills are resolved on demand by
//! the driving collaborator.

use crate::combat::combatant::Enemy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillEffectKind {
    /// Heavy single-target hit.
    Fireball,
    /// Reduced hit against every living target.
    Cleave,
    /// Self-heal scaled from attack power.
    Heal,
}

impl SkillEffectKind {
    /// Persisted string id, round-tripping with `unlocked_skills`.
    pub fn id(&self) -> &'static str {
        match self {
            SkillEffectKind::Fireball => "fireball",
            SkillEffectKind::Cleave => "cleave",
            SkillEffectKind::Heal => "heal",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "fireball" => Some(SkillEffectKind::Fireball),
            "cleave" => Some(SkillEffectKind::Cleave),
            "heal" => Some(SkillEffectKind::Heal),
            _ => None,
        }
    }
}

/// Outcome of resolving a skill, before mitigation is applied per target.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectOutcome {
    /// Raw damage aligned index-for-index with the `targets` slice; dead
    /// targets get 0.
    Damage { amounts: Vec<u32> },
    /// Raw healing applied to the caster.
    Heal { amount: u32 },
}

const FIREBALL_ATTACK_MULTIPLIER: f64 = 2.0;
const CLEAVE_ATTACK_MULTIPLIER: f64 = 0.75;
const HEAL_ATTACK_MULTIPLIER: f64 = 1.5;

/// Resolves a skill into raw amounts. Pure: no state is mutated, the
/// caller applies the outcome through the normal damage/heal paths.
pub fn apply_effect(kind: SkillEffectKind, caster_attack: u32, targets: &[Enemy]) -> EffectOutcome {
    match kind {
        SkillEffectKind::Fireball => {
            let hit = (caster_attack as f64 * FIREBALL_ATTACK_MULTIPLIER).floor() as u32;
            let mut amounts = vec![0; targets.len()];
            // First living target takes the full hit
            if let Some(index) = targets.iter().position(|t| t.is_alive()) {
                amounts[index] = hit;
            }
            EffectOutcome::Damage { amounts }
        }
        SkillEffectKind::Cleave => {
            let hit = (caster_attack as f64 * CLEAVE_ATTACK_MULTIPLIER).floor() as u32;
            let amounts = targets
                .iter()
                .map(|t| if t.is_alive() { hit } else { 0 })
                .collect();
            EffectOutcome::Damage { amounts }
        }
        SkillEffectKind::Heal => EffectOutcome::Heal {
            amount: (caster_attack as f64 * HEAL_ATTACK_MULTIPLIER).floor() as u32,
        },
    }
}
