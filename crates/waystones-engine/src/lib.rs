//! waystones engine library entry.
//!
//! This crate wires configuration, player stores, collaborator seams, and the
//! teleport policy engine into one runtime. It is consumed by game-side
//! adapters, by the `waystones-check` binary, and by integration tests.

pub mod config;
pub mod context;
pub mod obs;
pub mod policy;
pub mod runtime;
pub mod store;
pub mod world;

pub use context::{ExecutionContext, Side};
pub use policy::{TeleportDenial, TeleportOutcome, TeleportPolicy};
pub use runtime::WaystonesRuntime;
