//! Floating combat text feed.
//!
//! Every damage or heal event spawns a transient entry that drifts upward
//! and fades out over one second. The feed is pure data — the renderer
//! reads position, amount and opacity; the simulation only ages entries.

use crate::core::constants::*;

/// One floating number. `amount` is always the post-mitigation value and
/// always non-negative; heals are flagged, not signed.
#[derive(Debug, Clone)]
pub struct EffectEntry {
    pub x: f64,
    pub y: f64,
    pub amount: u32,
    pub is_heal: bool,
    pub age_ms: f64,
    pub ttl_ms: f64,
    pub opacity: f64,
}

/// Transient list of floating combat-text effects.
#[derive(Debug, Default)]
pub struct EffectFeed {
    entries: Vec<EffectEntry>,
}

impl EffectFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an entry slightly above the origin point.
    pub fn spawn(&mut self, x: f64, y: f64, amount: u32, is_heal: bool) {
        self.entries.push(EffectEntry {
            x,
            y: y - EFFECT_SPAWN_RAISE,
            amount,
            is_heal,
            age_ms: 0.0,
            ttl_ms: EFFECT_TTL_MS,
            opacity: 1.0,
        });
    }

    /// Ages every entry, applies upward drift and fade, and drops entries
    /// past their lifetime. Robust to a single oversized delta step: an
    /// entry older than its TTL is gone after one call, regardless of step
    /// size.
    pub fn update(&mut self, delta_ms: f64) {
        for entry in &mut self.entries {
            entry.age_ms += delta_ms;
            entry.y -= EFFECT_DRIFT_PER_SECOND * delta_ms / 1000.0;
            entry.opacity = 1.0 - entry.age_ms / entry.ttl_ms;
        }
        self.entries.retain(|e| e.age_ms < e.ttl_ms);
    }

    pub fn entries(&self) -> &[EffectEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
