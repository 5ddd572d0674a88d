use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;

use waystones_core::{CooldownKind, PlayerId, PlayerWaystoneState, WaystoneId};

use super::PlayerWaystoneStore;

/// Authoritative store: `player -> Mutex<state>`.
///
/// The map is only touched to find or create a player's slot; every
/// read-modify-write then happens under that player's own mutex, so two
/// players never wait on each other's state.
#[derive(Default)]
pub struct DurableWaystoneStore {
    players: DashMap<PlayerId, Arc<Mutex<PlayerWaystoneState>>>,
}

impl DurableWaystoneStore {
    pub fn new() -> Self {
        Self {
            players: DashMap::new(),
        }
    }

    fn slot(&self, player: &PlayerId) -> Arc<Mutex<PlayerWaystoneState>> {
        if let Some(slot) = self.players.get(player) {
            return Arc::clone(slot.value());
        }
        Arc::clone(
            self.players
                .entry(player.clone())
                .or_insert_with(|| Arc::new(Mutex::new(PlayerWaystoneState::default())))
                .value(),
        )
    }

    /// Run `f` with exclusive access to one player's state.
    fn with_state<R>(&self, player: &PlayerId, f: impl FnOnce(&mut PlayerWaystoneState) -> R) -> R {
        let slot = self.slot(player);
        let mut guard = lock(&slot);
        f(&mut guard)
    }

    /// Copy of the player's state for the external persister.
    pub fn snapshot(&self, player: &PlayerId) -> PlayerWaystoneState {
        self.state(player)
    }

    /// Replace the player's state with one loaded by the external persister.
    pub fn restore(&self, player: &PlayerId, mut state: PlayerWaystoneState) {
        let mut seen = Vec::with_capacity(state.discovered.len());
        state.discovered.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
        self.with_state(player, |s| *s = state);
    }

    /// Players with a resident state slot.
    pub fn players(&self) -> Vec<PlayerId> {
        self.players.iter().map(|e| e.key().clone()).collect()
    }
}

// State is plain data; a panic mid-update cannot leave it structurally broken.
fn lock(slot: &Mutex<PlayerWaystoneState>) -> MutexGuard<'_, PlayerWaystoneState> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PlayerWaystoneStore for DurableWaystoneStore {
    fn state(&self, player: &PlayerId) -> PlayerWaystoneState {
        self.with_state(player, |s| s.clone())
    }

    fn activate(&self, player: &PlayerId, waystone: WaystoneId) -> bool {
        self.with_state(player, |s| s.activate(waystone))
    }

    fn deactivate(&self, player: &PlayerId, waystone: WaystoneId) -> bool {
        self.with_state(player, |s| s.deactivate(waystone))
    }

    fn is_activated(&self, player: &PlayerId, waystone: WaystoneId) -> bool {
        self.with_state(player, |s| s.is_activated(waystone))
    }

    fn last_warp(&self, player: &PlayerId, kind: CooldownKind) -> i64 {
        self.with_state(player, |s| s.last_warp(kind))
    }

    fn set_last_warp(&self, player: &PlayerId, kind: CooldownKind, millis: i64) {
        self.with_state(player, |s| s.set_last_warp(kind, millis))
    }

    fn try_claim_cooldown(
        &self,
        player: &PlayerId,
        kind: CooldownKind,
        now: i64,
        window: i64,
    ) -> Option<i64> {
        self.with_state(player, |s| s.try_claim_cooldown(kind, now, window))
    }

    fn release_cooldown(&self, player: &PlayerId, kind: CooldownKind, claimed_at: i64, previous: i64) {
        self.with_state(player, |s| s.release_cooldown(kind, claimed_at, previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_drops_duplicate_ids() {
        let store = DurableWaystoneStore::new();
        let p = PlayerId::new("p");
        store.restore(
            &p,
            PlayerWaystoneState {
                discovered: vec![WaystoneId(1), WaystoneId(2), WaystoneId(1)],
                ..Default::default()
            },
        );
        assert_eq!(store.waystones(&p), vec![WaystoneId(1), WaystoneId(2)]);
    }
}
