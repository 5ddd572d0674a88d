//! waystones core: domain primitives shared by the policy engine and its callers.
//!
//! This crate defines waystone records, positions, warp modes and their rule
//! table, per-player state, and the error surface. It intentionally carries no
//! runtime dependencies so game-side adapters can depend on it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Contract violations surface as `WaystonesError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod permission;
pub mod state;
pub mod warp_mode;
pub mod waystone;

/// Shared result type.
pub use error::{Result, WaystonesError};
pub use permission::WaystoneEditPermission;
pub use state::PlayerWaystoneState;
pub use warp_mode::{CooldownKind, Hand, WarpItem, WarpMode, WarpModeRules};
pub use waystone::{BlockPos, PlayerId, Vec3, Waystone, WaystoneId};
