//! waystones-check
//!
//! Loads a waystones config (default `waystones.yaml`, or the first argument),
//! validates it strictly, and logs the compiled policy flags.
//! Exit code 1 on any config error.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use waystones_engine::config;
use waystones_engine::world::{InMemoryDirectory, NoopEvents};
use waystones_engine::WaystonesRuntime;

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "waystones.yaml".to_string());

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), "config rejected: {e}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match WaystonesRuntime::new(
        cfg,
        Arc::new(InMemoryDirectory::new()),
        Arc::new(NoopEvents),
    ) {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), "runtime build failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let f = runtime.flags();
    tracing::info!(
        %path,
        creative_mode_only = f.creative_mode_only,
        allow_everyone_global = f.allow_everyone_global,
        restrict_rename_to_owner = f.restrict_rename_to_owner,
        disallow_breaking_generated = f.disallow_breaking_generated,
        global_waystones_cost_xp = f.global_waystones_cost_xp,
        global_no_cooldown = f.global_no_cooldown,
        blocks_per_xp_level = f.blocks_per_xp_level,
        maximum_xp_cost = f.maximum_xp_cost,
        teleport_button_cooldown_ms = f.teleport_button_cooldown_millis,
        warp_stone_cooldown_ms = f.warp_stone_cooldown_millis,
        "config ok"
    );
    ExitCode::SUCCESS
}
