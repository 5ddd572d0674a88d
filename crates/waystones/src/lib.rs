//! Top-level facade crate for waystones.
//!
//! Re-exports core types and the policy engine so users can depend on a single crate.

pub mod core {
    pub use waystones_core::*;
}

pub mod engine {
    pub use waystones_engine::*;
}
