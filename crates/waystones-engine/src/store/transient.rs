use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use waystones_core::{CooldownKind, PlayerId, PlayerWaystoneState, WaystoneId};

use super::PlayerWaystoneStore;

/// Speculative store for the local session.
///
/// Mirrors what the local player has seen so UI can render without a round
/// trip. Nothing here is durable and nothing here is authoritative. One map
/// lock is enough: only the local session touches it.
#[derive(Default)]
pub struct TransientWaystoneStore {
    players: Mutex<HashMap<PlayerId, PlayerWaystoneState>>,
}

impl TransientWaystoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> MutexGuard<'_, HashMap<PlayerId, PlayerWaystoneState>> {
        self.players.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Discard everything (local session ended).
    pub fn reset(&self) {
        self.map().clear();
    }
}

impl PlayerWaystoneStore for TransientWaystoneStore {
    fn state(&self, player: &PlayerId) -> PlayerWaystoneState {
        self.map().get(player).cloned().unwrap_or_default()
    }

    fn activate(&self, player: &PlayerId, waystone: WaystoneId) -> bool {
        self.map().entry(player.clone()).or_default().activate(waystone)
    }

    fn deactivate(&self, player: &PlayerId, waystone: WaystoneId) -> bool {
        self.map()
            .get_mut(player)
            .map(|s| s.deactivate(waystone))
            .unwrap_or(false)
    }

    fn is_activated(&self, player: &PlayerId, waystone: WaystoneId) -> bool {
        self.map()
            .get(player)
            .map(|s| s.is_activated(waystone))
            .unwrap_or(false)
    }

    fn last_warp(&self, player: &PlayerId, kind: CooldownKind) -> i64 {
        self.map().get(player).map(|s| s.last_warp(kind)).unwrap_or(0)
    }

    fn set_last_warp(&self, player: &PlayerId, kind: CooldownKind, millis: i64) {
        self.map()
            .entry(player.clone())
            .or_default()
            .set_last_warp(kind, millis);
    }

    fn try_claim_cooldown(
        &self,
        player: &PlayerId,
        kind: CooldownKind,
        now: i64,
        window: i64,
    ) -> Option<i64> {
        self.map()
            .entry(player.clone())
            .or_default()
            .try_claim_cooldown(kind, now, window)
    }

    fn release_cooldown(&self, player: &PlayerId, kind: CooldownKind, claimed_at: i64, previous: i64) {
        if let Some(s) = self.map().get_mut(player) {
            s.release_cooldown(kind, claimed_at, previous);
        }
    }
}
