//! Fixed-interval combat round scheduler.
//!
//! The engine accumulates elapsed time and fires at most one round per
//! `update` call when the effective attack interval has elapsed, resetting
//! the accumulator to zero on fire (reset-on-fire, not a fixed-step
//! catch-up loop). Within a round the hero always acts first, then every
//! living enemy strikes back.
//!
//! All randomness — target selection and damage variance — flows through
//! the injected `Rng`, so a seeded generator replays a battle exactly.

use crate::combat::combatant::Hero;
use crate::combat::effects::EffectFeed;
use crate::combat::waves::{BattlePhase, WaveController};
use crate::core::constants::*;
use rand::Rng;

/// A single event produced by a combat tick.
///
/// The presentation layer maps these to log lines and animations; the
/// `message` strings are ready-made narration so the core needs no logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// Hero struck an enemy (post-mitigation damage).
    PlayerAttack {
        target: String,
        damage: u32,
        message: String,
    },

    /// An enemy struck the hero (post-mitigation damage).
    EnemyAttack {
        enemy: String,
        damage: u32,
        message: String,
    },

    /// An enemy was removed from the roster during the respawn sweep.
    EnemyDefeated { enemy: String, message: String },

    /// The live count dropped below capacity and a fresh wave filled in.
    WaveStarted { wave: u32, message: String },

    /// Hero fell and instantly respawned at full health. Endless-horde
    /// design: death costs nothing beyond this log entry.
    HeroDefeated { message: String },
}

/// The attack scheduler. Owns the hero, the wave roster, and the floating
/// text feed; an external driver calls [`CombatEngine::update`] once per
/// frame with the elapsed milliseconds.
#[derive(Debug)]
pub struct CombatEngine {
    hero: Hero,
    waves: WaveController,
    effects: EffectFeed,
    attack_timer_ms: f64,
    /// Cadence divisor owned by the driving collaborator (1, 2, or 4).
    /// Read every update, never persisted.
    speed_multiplier: u32,
    paused: bool,
}

impl CombatEngine {
    pub fn new(hero: Hero) -> Self {
        Self {
            hero,
            waves: WaveController::new(),
            effects: EffectFeed::new(),
            attack_timer_ms: 0.0,
            speed_multiplier: 1,
            paused: false,
        }
    }

    /// Fully heals the hero, clears stale floating text, resets the attack
    /// timer, and spawns the initial wave for `stage`.
    pub fn start_battle(&mut self, stage: u32) {
        self.hero.heal();
        self.effects.clear();
        self.attack_timer_ms = 0.0;
        self.waves.start_battle(stage);
    }

    pub fn stop_battle(&mut self) {
        self.waves.stop_battle();
    }

    /// Advances the simulation by `delta_ms`. Order within a tick is fixed
    /// because later phases depend on state left by earlier ones:
    /// attack cadence (at most one round), effect aging, respawn
    /// reconciliation, hero death resolution.
    pub fn update(&mut self, delta_ms: f64, rng: &mut impl Rng) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.paused {
            return events;
        }

        // --- Phase 1: attack cadence ---
        if self.waves.phase() == BattlePhase::Active {
            self.attack_timer_ms += delta_ms;
            if self.attack_timer_ms >= self.effective_interval_ms() {
                // Reset to zero, not the remainder: several intervals
                // elapsing in one call still fire a single round.
                self.attack_timer_ms = 0.0;
                self.execute_round(&mut events, rng);
            }
        }

        // --- Phase 2: age and expire floating text ---
        self.effects.update(delta_ms);

        if self.waves.phase() == BattlePhase::Active {
            // --- Phase 3: sweep defeats, refill the wave ---
            let outcome = self.waves.check_enemy_respawn();
            for kind in &outcome.defeated {
                events.push(CombatEvent::EnemyDefeated {
                    enemy: kind.name().to_string(),
                    message: format!("{} is defeated!", kind.name()),
                });
            }
            if outcome.wave_advanced {
                events.push(CombatEvent::WaveStarted {
                    wave: self.waves.current_wave(),
                    message: format!("Wave {} approaches!", self.waves.current_wave()),
                });
            }

            // --- Phase 4: hero death (instant respawn) ---
            if !self.hero.is_alive() {
                let restored = self.hero.max_health;
                self.hero.heal();
                self.effects.spawn(self.hero.x, self.hero.y, restored, true);
                events.push(CombatEvent::HeroDefeated {
                    message: format!("{} falls... and rises again at full strength!", self.hero.name),
                });
            }
        }

        events
    }

    /// One full round: hero first, then every living enemy in roster order.
    fn execute_round(&mut self, events: &mut Vec<CombatEvent>, rng: &mut impl Rng) {
        if self.hero.is_alive() {
            self.hero_attack(events, rng);
        }

        for index in 0..self.waves.enemies().len() {
            // Enemies whose turn comes up after the hero fell skip their
            // attack; no wasted effect entries.
            if !self.hero.is_alive() {
                break;
            }
            let (alive, attack_power, name) = {
                let enemy = &self.waves.enemies()[index];
                (enemy.is_alive(), enemy.attack_power, enemy.kind.name())
            };
            if !alive {
                continue;
            }

            let raw = roll_damage(attack_power, rng);
            let actual = self.hero.take_damage(raw);
            self.effects.spawn(self.hero.x, self.hero.y, actual, false);
            events.push(CombatEvent::EnemyAttack {
                enemy: name.to_string(),
                damage: actual,
                message: format!("{} hits {} for {}", name, self.hero.name, actual),
            });
        }
    }

    /// Hero strikes one uniformly-chosen living enemy. No-op if the roster
    /// has no living targets.
    fn hero_attack(&mut self, events: &mut Vec<CombatEvent>, rng: &mut impl Rng) {
        let living: Vec<usize> = self
            .waves
            .enemies()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect();
        if living.is_empty() {
            return;
        }

        let target = living[rng.gen_range(0..living.len())];
        let raw = roll_damage(self.hero.attack_power, rng);

        let enemy = &mut self.waves.enemies_mut()[target];
        let actual = enemy.take_damage(raw);
        let (x, y, name) = (enemy.x, enemy.y, enemy.kind.name());

        self.effects.spawn(x, y, actual, false);
        events.push(CombatEvent::PlayerAttack {
            target: name.to_string(),
            damage: actual,
            message: format!("{} hits {} for {}", self.hero.name, name, actual),
        });
    }

    fn effective_interval_ms(&self) -> f64 {
        ATTACK_INTERVAL_MS / self.speed_multiplier.max(1) as f64
    }

    pub fn set_speed_multiplier(&mut self, multiplier: u32) {
        self.speed_multiplier = multiplier.max(1);
    }

    pub fn speed_multiplier(&self) -> u32 {
        self.speed_multiplier
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn attack_timer_ms(&self) -> f64 {
        self.attack_timer_ms
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.hero
    }

    pub fn waves(&self) -> &WaveController {
        &self.waves
    }

    pub fn effects(&self) -> &EffectFeed {
        &self.effects
    }
}

/// Raw (pre-mitigation) damage: attack scaled by uniform variance in
/// [0.9, 1.1), floor-truncated.
fn roll_damage(attack_power: u32, rng: &mut impl Rng) -> u32 {
    let variance = rng.gen_range(DAMAGE_VARIANCE_MIN..DAMAGE_VARIANCE_MAX);
    (attack_power as f64 * variance).floor() as u32
}
