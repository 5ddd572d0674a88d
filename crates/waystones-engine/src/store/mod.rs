//! Per-player waystone stores.
//!
//! Two backends share one capability set (`PlayerWaystoneStore`):
//! - `DurableWaystoneStore`: authoritative, per-player locking, snapshot/restore
//!   hooks for the external persister.
//! - `TransientWaystoneStore`: speculative, in-memory, dropped on disconnect.
//!
//! `WaystoneStores::for_side` is the only place a backend is chosen.

pub mod durable;
pub mod transient;

use std::sync::Arc;

use waystones_core::{CooldownKind, PlayerId, PlayerWaystoneState, WaystoneId};

use crate::context::Side;

pub use durable::DurableWaystoneStore;
pub use transient::TransientWaystoneStore;

/// Capability set every backend implements with identical semantics.
///
/// State is created lazily: querying an unknown player yields the empty state.
pub trait PlayerWaystoneStore: Send + Sync {
    /// Copy of the player's current state.
    fn state(&self, player: &PlayerId) -> PlayerWaystoneState;

    /// Returns true if `waystone` was newly added.
    fn activate(&self, player: &PlayerId, waystone: WaystoneId) -> bool;

    /// Returns true if `waystone` was present.
    fn deactivate(&self, player: &PlayerId, waystone: WaystoneId) -> bool;

    fn is_activated(&self, player: &PlayerId, waystone: WaystoneId) -> bool;

    /// Discovered ids in activation order.
    fn waystones(&self, player: &PlayerId) -> Vec<WaystoneId> {
        self.state(player).discovered
    }

    fn last_warp(&self, player: &PlayerId, kind: CooldownKind) -> i64;

    fn set_last_warp(&self, player: &PlayerId, kind: CooldownKind, millis: i64);

    /// Check and stamp one cooldown as a single step for `player`.
    ///
    /// Stamps `now` if more than `window` ms passed since the last stamp and
    /// returns the previous stamp; `None` if the cooldown is still active.
    fn try_claim_cooldown(
        &self,
        player: &PlayerId,
        kind: CooldownKind,
        now: i64,
        window: i64,
    ) -> Option<i64>;

    /// Restore `previous` if the stamp is still the one claimed at `claimed_at`.
    fn release_cooldown(&self, player: &PlayerId, kind: CooldownKind, claimed_at: i64, previous: i64);
}

/// Both backends, shared by every engine built from one runtime.
#[derive(Clone, Default)]
pub struct WaystoneStores {
    durable: Arc<DurableWaystoneStore>,
    transient: Arc<TransientWaystoneStore>,
}

impl WaystoneStores {
    pub fn for_side(&self, side: Side) -> Arc<dyn PlayerWaystoneStore> {
        match side {
            Side::Authoritative => Arc::clone(&self.durable) as Arc<dyn PlayerWaystoneStore>,
            Side::Speculative => Arc::clone(&self.transient) as Arc<dyn PlayerWaystoneStore>,
        }
    }

    pub fn durable(&self) -> &Arc<DurableWaystoneStore> {
        &self.durable
    }

    pub fn transient(&self) -> &Arc<TransientWaystoneStore> {
        &self.transient
    }
}
