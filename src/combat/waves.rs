//! Wave controller: owns the enemy roster for the active stage.
//!
//! Horde mode is endless — there is no terminal state. The controller sits
//! in `Idle` until a battle starts, then loops in `Active` forever,
//! sweeping defeated enemies and refilling the roster to capacity.

use crate::combat::combatant::{Enemy, EnemyKind};
use crate::core::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    Idle,
    Active,
}

/// What a respawn sweep found and did.
#[derive(Debug, Default)]
pub struct RespawnOutcome {
    /// Kinds of the enemies removed this sweep, in roster order.
    pub defeated: Vec<EnemyKind>,
    /// The live count dropped below capacity, so the wave counter advanced
    /// (exactly once per sweep) and the roster was refilled.
    pub wave_advanced: bool,
}

#[derive(Debug)]
pub struct WaveController {
    phase: BattlePhase,
    current_stage: u32,
    current_wave: u32,
    max_concurrent: usize,
    enemies: Vec<Enemy>,
    enemies_defeated: u64,
}

impl Default for WaveController {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveController {
    pub fn new() -> Self {
        Self {
            phase: BattlePhase::Idle,
            current_stage: 1,
            current_wave: 1,
            max_concurrent: BASE_CONCURRENT_ENEMIES,
            enemies: Vec::new(),
            enemies_defeated: 0,
        }
    }

    /// Roster capacity for a stage: one extra slot per five stages, capped.
    pub fn max_concurrent_for_stage(stage: u32) -> usize {
        let extra = (stage / STAGES_PER_ENEMY_SLOT) as usize;
        (BASE_CONCURRENT_ENEMIES + extra).min(MAX_CONCURRENT_ENEMIES)
    }

    /// Resets the wave counter, spawns the initial wave for `stage`, and
    /// transitions to `Active`.
    pub fn start_battle(&mut self, stage: u32) {
        self.current_stage = stage.max(1);
        self.current_wave = 1;
        self.max_concurrent = Self::max_concurrent_for_stage(self.current_stage);
        self.enemies.clear();
        self.spawn_wave();
        self.phase = BattlePhase::Active;
    }

    /// The only exit from `Active`.
    pub fn stop_battle(&mut self) {
        self.phase = BattlePhase::Idle;
        self.enemies.clear();
    }

    /// Fills the roster up to capacity. Ids are the list length at insert
    /// time — reused after removals, never referenced across ticks.
    fn spawn_wave(&mut self) {
        while self.enemies.len() < self.max_concurrent {
            let id = self.enemies.len();
            self.enemies.push(Enemy::for_stage(id, self.current_stage));
        }
    }

    /// Per-tick reconciliation: removes dead enemies (counting defeats),
    /// then refills once if the live count dropped below capacity. The wave
    /// counter advances at most once per call no matter how many enemies
    /// fell this tick.
    pub fn check_enemy_respawn(&mut self) -> RespawnOutcome {
        let mut outcome = RespawnOutcome::default();
        if self.phase != BattlePhase::Active {
            return outcome;
        }

        self.enemies.retain(|enemy| {
            if enemy.is_alive() {
                true
            } else {
                outcome.defeated.push(enemy.kind);
                false
            }
        });
        self.enemies_defeated += outcome.defeated.len() as u64;

        if self.enemies.len() < self.max_concurrent {
            self.current_wave += 1;
            self.spawn_wave();
            outcome.wave_advanced = true;
        }

        outcome
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    pub fn current_wave(&self) -> u32 {
        self.current_wave
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn enemies_defeated(&self) -> u64 {
        self.enemies_defeated
    }

    pub fn living_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }
}
