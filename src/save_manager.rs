//! Versioned JSON save snapshots and their on-disk storage.
//!
//! The snapshot shape is an external contract (camelCase JSON, `heroes`
//! kept as an array for compatibility even though only index 0 is read).
//! Every field defaults on decode so a truncated or older save degrades to
//! sensible values instead of aborting; a payload that fails to parse at
//! all is treated as "no prior save" and the caller starts fresh.

use crate::core::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSnapshot {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub last_save_time: i64,
    #[serde(default = "default_stage")]
    pub current_stage: u32,
    #[serde(default)]
    pub heroes: Vec<HeroSnapshot>,
    #[serde(default)]
    pub resources: ResourcesSnapshot,
}

impl Default for SaveSnapshot {
    fn default() -> Self {
        Self {
            version: default_version(),
            last_save_time: 0,
            current_stage: default_stage(),
            heroes: Vec::new(),
            resources: ResourcesSnapshot::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSnapshot {
    #[serde(default)]
    pub id: u32,
    #[serde(default = "default_hero_name")]
    pub name: String,
    #[serde(default = "default_hero_role")]
    pub role: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_base_health")]
    pub base_health: u32,
    #[serde(default = "default_base_attack")]
    pub base_attack: u32,
    #[serde(default = "default_base_defense")]
    pub base_defense: u32,
    #[serde(default = "default_skills")]
    pub unlocked_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesSnapshot {
    #[serde(default = "default_gold")]
    pub gold: f64,
    #[serde(default)]
    pub gold_per_second: f64,
    #[serde(default)]
    pub last_save_time: i64,
}

impl Default for ResourcesSnapshot {
    fn default() -> Self {
        Self {
            gold: default_gold(),
            gold_per_second: 0.0,
            last_save_time: 0,
        }
    }
}

fn default_version() -> String {
    SAVE_VERSION.to_string()
}

fn default_stage() -> u32 {
    1
}

fn default_hero_name() -> String {
    DEFAULT_HERO_NAME.to_string()
}

fn default_hero_role() -> String {
    DEFAULT_HERO_ROLE.to_string()
}

fn default_level() -> u32 {
    1
}

fn default_base_health() -> u32 {
    HERO_BASE_HEALTH
}

fn default_base_attack() -> u32 {
    HERO_BASE_ATTACK
}

fn default_base_defense() -> u32 {
    HERO_BASE_DEFENSE
}

fn default_skills() -> Vec<String> {
    vec![DEFAULT_SKILL_ID.to_string()]
}

fn default_gold() -> f64 {
    STARTING_GOLD
}

impl SaveSnapshot {
    /// Serializes to the JSON wire shape.
    pub fn encode(&self) -> String {
        // Serialization of these plain structs cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Decodes a JSON payload. `None` means "no usable prior save" — the
    /// caller initializes a fresh game. Field-level gaps inside a parsable
    /// payload fall back to the documented defaults instead.
    pub fn decode(payload: &str) -> Option<Self> {
        serde_json::from_str(payload).ok()
    }
}

/// Stores the snapshot as a JSON file in the platform config directory.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "horde").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.json"),
        })
    }

    /// Manager rooted at an explicit path (used by tests).
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save(&self, snapshot: &SaveSnapshot) -> io::Result<()> {
        fs::write(&self.save_path, snapshot.encode())
    }

    /// `None` for a missing or unreadable file as well as a corrupt
    /// payload; load failures never propagate into the core.
    pub fn load(&self) -> Option<SaveSnapshot> {
        let payload = fs::read_to_string(&self.save_path).ok()?;
        SaveSnapshot::decode(&payload)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn save_path(&self) -> &PathBuf {
        &self.save_path
    }
}
