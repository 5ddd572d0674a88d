//! Policy layer (place/break/edit rules, costs, cooldowns, teleports).
//!
//! Compiles configuration into an immutable flag set and evaluates every
//! waystone decision against it plus the actor's per-player state.

pub mod edit_rules;
pub mod engine;
pub mod flags;
pub mod outcome;

pub use engine::{PolicyServices, TeleportPolicy};
pub use flags::PolicyFlags;
pub use outcome::{TeleportDenial, TeleportOutcome};
