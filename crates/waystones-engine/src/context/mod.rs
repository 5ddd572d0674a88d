//! Execution context shared across layers.
//!
//! The context says which logical side a call runs on. Store selection and
//! side-effect gating read it; nothing inspects caller identity for this.

pub mod side;

pub use side::{ExecutionContext, Side};
