use serde::Deserialize;
use waystones_core::error::{Result, WaystonesError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaystonesConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub common: CommonSection,
}

impl WaystonesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WaystonesError::UnsupportedVersion);
        }

        self.server.validate()?;

        Ok(())
    }
}

impl Default for WaystonesConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            common: CommonSection::default(),
        }
    }
}

/// Server-authoritative rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Only creative/elevated actors may place, break, or edit waystones.
    #[serde(default)]
    pub creative_mode_only: bool,

    /// Non-elevated actors may break and edit global waystones.
    #[serde(default)]
    pub allow_everyone_global: bool,

    #[serde(default)]
    pub restrict_rename_to_owner: bool,

    #[serde(default = "default_true")]
    pub global_waystones_cost_xp: bool,

    /// Zero or negative disables distance cost entirely.
    #[serde(default = "default_blocks_per_xp_level")]
    pub blocks_per_xp_level: i32,

    #[serde(default = "default_maximum_xp_cost")]
    pub maximum_xp_cost: i32,

    #[serde(default = "default_cooldown_secs")]
    pub teleport_button_cooldown_secs: u64,

    #[serde(default = "default_cooldown_secs")]
    pub warp_stone_cooldown_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            creative_mode_only: false,
            allow_everyone_global: false,
            restrict_rename_to_owner: false,
            global_waystones_cost_xp: default_true(),
            blocks_per_xp_level: default_blocks_per_xp_level(),
            maximum_xp_cost: default_maximum_xp_cost(),
            teleport_button_cooldown_secs: default_cooldown_secs(),
            warp_stone_cooldown_secs: default_cooldown_secs(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.maximum_xp_cost < 0 {
            return Err(WaystonesError::BadConfig(
                "server.maximum_xp_cost must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Rules shared by both sides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommonSection {
    /// Waystones placed by world generation cannot be broken by non-elevated actors.
    #[serde(default)]
    pub disallow_breaking_generated: bool,

    /// Teleporting to a global waystone does not stamp cooldowns.
    #[serde(default)]
    pub global_no_cooldown: bool,
}

fn default_true() -> bool {
    true
}
fn default_blocks_per_xp_level() -> i32 {
    500
}
fn default_maximum_xp_cost() -> i32 {
    3
}
fn default_cooldown_secs() -> u64 {
    300
}
