//! Lightweight in-process metrics.
//!
//! Counters are stored as atomics keyed by label sets and rendered in
//! Prometheus text format by whoever hosts the engine.

pub mod metrics;

pub use metrics::{CounterVec, WaystoneMetrics};
