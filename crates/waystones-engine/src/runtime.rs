//! Shared runtime for the waystones policy engine.
//!
//! Owns the compiled flags and both player stores, and hands out side-bound
//! `TeleportPolicy` instances. This is the only wiring point; there is no
//! global state.

use std::sync::Arc;

use waystones_core::error::Result;

use crate::config::WaystonesConfig;
use crate::context::{ExecutionContext, Side};
use crate::obs::WaystoneMetrics;
use crate::policy::engine::PolicyServices;
use crate::policy::{PolicyFlags, TeleportPolicy};
use crate::store::{DurableWaystoneStore, WaystoneStores};
use crate::world::{Clock, EventSink, SystemClock, WaystoneDirectory};

#[derive(Clone)]
pub struct WaystonesRuntime {
    inner: Arc<RuntimeInner>,
}

struct RuntimeInner {
    flags: Arc<PolicyFlags>,
    services: PolicyServices,
}

impl WaystonesRuntime {
    /// Build the runtime with the wall clock.
    /// Returns Result so callers can surface bad config instead of panicking.
    pub fn new(
        cfg: WaystonesConfig,
        directory: Arc<dyn WaystoneDirectory>,
        events: Arc<dyn EventSink>,
    ) -> Result<Self> {
        Self::with_clock(cfg, directory, events, Arc::new(SystemClock))
    }

    pub fn with_clock(
        cfg: WaystonesConfig,
        directory: Arc<dyn WaystoneDirectory>,
        events: Arc<dyn EventSink>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        cfg.validate()?;
        if cfg.server.blocks_per_xp_level <= 0 {
            tracing::warn!(
                blocks_per_xp_level = cfg.server.blocks_per_xp_level,
                "server.blocks_per_xp_level is not positive; teleports will cost no levels"
            );
        }
        let flags = Arc::new(PolicyFlags::from_config(&cfg));

        tracing::debug!(?flags, "waystones policy compiled");

        let services = PolicyServices {
            directory,
            stores: WaystoneStores::default(),
            events,
            clock,
            metrics: Arc::new(WaystoneMetrics::default()),
        };

        Ok(Self {
            inner: Arc::new(RuntimeInner { flags, services }),
        })
    }

    pub fn flags(&self) -> &PolicyFlags {
        &self.inner.flags
    }

    /// Engine for `side`; its store is picked from the side alone.
    pub fn policy(&self, side: Side) -> TeleportPolicy {
        TeleportPolicy::new(
            ExecutionContext { side },
            Arc::clone(&self.inner.flags),
            &self.inner.services,
        )
    }

    /// Authoritative store, for loading and saving player state.
    pub fn durable_store(&self) -> Arc<DurableWaystoneStore> {
        Arc::clone(self.inner.services.stores.durable())
    }

    pub fn metrics(&self) -> Arc<WaystoneMetrics> {
        Arc::clone(&self.inner.services.metrics)
    }

    /// Drop all speculative state (local session disconnected).
    pub fn end_local_session(&self) {
        self.inner.services.stores.transient().reset();
        tracing::debug!("speculative waystone state discarded");
    }
}
