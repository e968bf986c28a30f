//! Gold ledger with passive accrual.
//!
//! Gold is kept as a float accumulator so fractional per-tick accrual at
//! low stages is never lost; the balance is floor-truncated only at read
//! points (display and spend checks), never in storage.

use super::stat_model::passive_gold_rate;

#[derive(Debug, Clone)]
pub struct EconomyLedger {
    gold_balance: f64,
    gold_per_second: f64,
}

impl EconomyLedger {
    pub fn new(starting_gold: f64, stage: u32) -> Self {
        Self {
            gold_balance: starting_gold.max(0.0),
            gold_per_second: passive_gold_rate(stage),
        }
    }

    /// Recomputes the idle rate for a stage. Called on stage change only,
    /// never implicitly per tick — the rate is always derived from stage.
    pub fn update_idle_rate(&mut self, stage: u32) {
        self.gold_per_second = passive_gold_rate(stage);
    }

    /// Passive accrual for one tick.
    pub fn update(&mut self, delta_ms: f64) {
        self.gold_balance += self.gold_per_second * delta_ms / 1000.0;
    }

    pub fn credit(&mut self, amount: u64) {
        self.gold_balance += amount as f64;
    }

    /// Spends `amount` if the floored balance covers it. Returns false
    /// with the balance untouched otherwise — no exception, no mutation.
    pub fn debit(&mut self, amount: u64) -> bool {
        if amount > self.gold() {
            return false;
        }
        self.gold_balance -= amount as f64;
        true
    }

    /// Display/spend view of the balance.
    pub fn gold(&self) -> u64 {
        self.gold_balance.floor() as u64
    }

    /// Raw accumulator, for persistence.
    pub fn gold_balance(&self) -> f64 {
        self.gold_balance
    }

    pub fn gold_per_second(&self) -> f64 {
        self.gold_per_second
    }
}
