// Tick and timing
pub const ATTACK_INTERVAL_MS: f64 = 1000.0;

// Damage resolution
pub const DAMAGE_VARIANCE_MIN: f64 = 0.9;
pub const DAMAGE_VARIANCE_MAX: f64 = 1.1;
pub const DEFENSE_MITIGATION_FACTOR: f64 = 0.5;
pub const MIN_DAMAGE: u32 = 1;

// Hero starting stats and per-level growth
pub const HERO_BASE_HEALTH: u32 = 500;
pub const HERO_BASE_ATTACK: u32 = 30;
pub const HERO_BASE_DEFENSE: u32 = 25;
pub const HERO_HEALTH_GROWTH_PER_LEVEL: f64 = 0.15;
pub const HERO_ATTACK_GROWTH_PER_LEVEL: f64 = 0.10;
pub const HERO_DEFENSE_GROWTH_PER_LEVEL: f64 = 0.08;

// Upgrade cost curve: UPGRADE_COST_BASE * level^UPGRADE_COST_EXPONENT
pub const UPGRADE_COST_BASE: f64 = 100.0;
pub const UPGRADE_COST_EXPONENT: f64 = 1.5;

// Enemy scaling per stage (multiplicative, stages are 1-indexed)
pub const ENEMY_BASE_HEALTH: f64 = 200.0;
pub const ENEMY_HEALTH_GROWTH_PER_STAGE: f64 = 1.20;
pub const ENEMY_BASE_ATTACK: f64 = 25.0;
pub const ENEMY_ATTACK_GROWTH_PER_STAGE: f64 = 1.15;
pub const ENEMY_BASE_DEFENSE: f64 = 10.0;
pub const ENEMY_DEFENSE_GROWTH_PER_STAGE: f64 = 1.10;

// Wave capacity: BASE + stage/STAGES_PER_SLOT extra slots, capped at MAX
pub const BASE_CONCURRENT_ENEMIES: usize = 3;
pub const MAX_CONCURRENT_ENEMIES: usize = 5;
pub const STAGES_PER_ENEMY_SLOT: u32 = 5;

// Floating combat text
pub const EFFECT_TTL_MS: f64 = 1000.0;
pub const EFFECT_DRIFT_PER_SECOND: f64 = 30.0;
pub const EFFECT_SPAWN_RAISE: f64 = 20.0;

// Economy
pub const STARTING_GOLD: f64 = 1000.0;
pub const PASSIVE_GOLD_PER_STAGE: f64 = 0.5;
pub const STAGE_CLEAR_GOLD_BASE: f64 = 50.0;
pub const STAGE_CLEAR_GOLD_GROWTH: f64 = 1.1;

// Offline rewards. The offline rate is steeper than the live idle rate on
// purpose; the 2-hour cap bounds the payout for a returning player.
pub const OFFLINE_GOLD_PER_STAGE: f64 = 10.0;
pub const MAX_OFFLINE_MS: i64 = 2 * 60 * 60 * 1000;

// Persistence
pub const SAVE_VERSION: &str = "1.0";
pub const DEFAULT_SKILL_ID: &str = "fireball";
pub const DEFAULT_HERO_NAME: &str = "Hero";
pub const DEFAULT_HERO_ROLE: &str = "warrior";
