use crate::config::WaystonesConfig;

/// Config compiled into the values the engine reads on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFlags {
    pub creative_mode_only: bool,
    pub disallow_breaking_generated: bool,
    pub allow_everyone_global: bool,
    pub restrict_rename_to_owner: bool,
    pub global_waystones_cost_xp: bool,
    pub global_no_cooldown: bool,
    pub blocks_per_xp_level: i32,
    pub maximum_xp_cost: i32,
    pub teleport_button_cooldown_millis: i64,
    pub warp_stone_cooldown_millis: i64,
}

impl PolicyFlags {
    pub fn from_config(cfg: &WaystonesConfig) -> Self {
        Self {
            creative_mode_only: cfg.server.creative_mode_only,
            disallow_breaking_generated: cfg.common.disallow_breaking_generated,
            allow_everyone_global: cfg.server.allow_everyone_global,
            restrict_rename_to_owner: cfg.server.restrict_rename_to_owner,
            global_waystones_cost_xp: cfg.server.global_waystones_cost_xp,
            global_no_cooldown: cfg.common.global_no_cooldown,
            blocks_per_xp_level: cfg.server.blocks_per_xp_level,
            maximum_xp_cost: cfg.server.maximum_xp_cost,
            teleport_button_cooldown_millis: secs_to_millis(cfg.server.teleport_button_cooldown_secs),
            warp_stone_cooldown_millis: secs_to_millis(cfg.server.warp_stone_cooldown_secs),
        }
    }
}

impl Default for PolicyFlags {
    fn default() -> Self {
        Self::from_config(&WaystonesConfig::default())
    }
}

fn secs_to_millis(secs: u64) -> i64 {
    i64::try_from(secs.saturating_mul(1000)).unwrap_or(i64::MAX)
}
