//! Session root: explicit dependency injection instead of a global.
//!
//! `GameSession` owns the combat engine and the economy ledger and is the
//! single mutable entry point for the driving collaborator: one `update`
//! per frame, plus the UI-triggered operations (start battle, pause,
//! upgrade, stage advance). Anything that needs the session gets it passed
//! in; nothing reads ambient global state.

use crate::combat::combatant::Hero;
use crate::combat::engine::{CombatEngine, CombatEvent};
use crate::core::constants::*;
use crate::core::economy::EconomyLedger;
use crate::core::stat_model::{stage_clear_gold, upgrade_cost};
use crate::save_manager::{HeroSnapshot, ResourcesSnapshot, SaveSnapshot};
use chrono::Utc;
use rand::Rng;

#[derive(Debug)]
pub struct GameSession {
    engine: CombatEngine,
    ledger: EconomyLedger,
    current_stage: u32,
    last_save_time: i64,
}

impl GameSession {
    /// Fresh game: level-1 hero, starting gold, stage 1, battle not yet
    /// started (the driver calls [`GameSession::start_battle`]).
    pub fn new_game() -> Self {
        Self {
            engine: CombatEngine::new(Hero::new(DEFAULT_HERO_NAME.to_string())),
            ledger: EconomyLedger::new(STARTING_GOLD, 1),
            current_stage: 1,
            last_save_time: Utc::now().timestamp_millis(),
        }
    }

    /// Rebuilds a session from a decoded snapshot. Only `heroes[0]` is
    /// read; a snapshot without heroes falls back to a fresh hero. The
    /// idle rate is always rederived from the stage, never trusted from
    /// the stored `goldPerSecond`.
    pub fn from_snapshot(snapshot: &SaveSnapshot) -> Self {
        let stage = snapshot.current_stage.max(1);

        let hero = match snapshot.heroes.first() {
            Some(hs) => {
                let mut hero = Hero::with_stats(
                    hs.name.clone(),
                    hs.role.clone(),
                    hs.level,
                    hs.base_health,
                    hs.base_attack,
                    hs.base_defense,
                );
                hero.id = hs.id;
                hero.unlocked_skills = hs.unlocked_skills.clone();
                hero
            }
            None => Hero::new(DEFAULT_HERO_NAME.to_string()),
        };

        Self {
            engine: CombatEngine::new(hero),
            ledger: EconomyLedger::new(snapshot.resources.gold, stage),
            current_stage: stage,
            last_save_time: snapshot.last_save_time,
        }
    }

    /// Single consistent read of hero + economy + stage. Called on
    /// autosave ticks and on explicit triggers (upgrade, stage advance) so
    /// a save can never capture a torn state between them.
    pub fn snapshot(&self) -> SaveSnapshot {
        let now_ms = Utc::now().timestamp_millis();
        let hero = self.engine.hero();
        SaveSnapshot {
            version: SAVE_VERSION.to_string(),
            last_save_time: now_ms,
            current_stage: self.current_stage,
            heroes: vec![HeroSnapshot {
                id: hero.id,
                name: hero.name.clone(),
                role: hero.role.clone(),
                level: hero.level,
                base_health: hero.base_health,
                base_attack: hero.base_attack,
                base_defense: hero.base_defense,
                unlocked_skills: hero.unlocked_skills.clone(),
            }],
            resources: ResourcesSnapshot {
                gold: self.ledger.gold_balance(),
                gold_per_second: self.ledger.gold_per_second(),
                last_save_time: now_ms,
            },
        }
    }

    /// Starts (or restarts) the battle at the current stage.
    pub fn start_battle(&mut self) {
        self.engine.start_battle(self.current_stage);
    }

    pub fn stop_battle(&mut self) {
        self.engine.stop_battle();
    }

    /// One frame of simulation: combat first, then passive gold accrual.
    pub fn update(&mut self, delta_ms: f64, rng: &mut impl Rng) -> Vec<CombatEvent> {
        let events = self.engine.update(delta_ms, rng);
        self.ledger.update(delta_ms);
        events
    }

    /// Buys one hero level if the gold covers the upgrade cost. Returns
    /// false with nothing mutated otherwise.
    pub fn upgrade_hero(&mut self) -> bool {
        let cost = upgrade_cost(self.engine.hero().level);
        if !self.ledger.debit(cost) {
            return false;
        }
        self.engine.hero_mut().upgrade();
        true
    }

    /// Clears the current stage: credits the clear reward, bumps the
    /// stage, rederives the idle rate, and restarts the battle against the
    /// next tier. Returns the gold credited.
    pub fn advance_stage(&mut self) -> u64 {
        let reward = stage_clear_gold(self.current_stage);
        self.ledger.credit(reward);
        self.current_stage += 1;
        self.ledger.update_idle_rate(self.current_stage);
        self.engine.start_battle(self.current_stage);
        reward
    }

    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
    }

    pub fn set_speed_multiplier(&mut self, multiplier: u32) {
        self.engine.set_speed_multiplier(multiplier);
    }

    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    pub fn last_save_time(&self) -> i64 {
        self.last_save_time
    }

    pub fn set_last_save_time(&mut self, epoch_ms: i64) {
        self.last_save_time = epoch_ms;
    }

    pub fn engine(&self) -> &CombatEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CombatEngine {
        &mut self.engine
    }

    pub fn hero(&self) -> &Hero {
        self.engine.hero()
    }

    pub fn ledger(&self) -> &EconomyLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut EconomyLedger {
        &mut self.ledger
    }
}
