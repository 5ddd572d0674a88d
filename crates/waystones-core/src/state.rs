//! Per-player waystone state owned by the player stores.

use serde::{Deserialize, Serialize};

use crate::warp_mode::CooldownKind;
use crate::waystone::WaystoneId;

/// Discovered waystones and cooldown stamps for one player.
///
/// Timestamps are milliseconds since the Unix epoch; `0` means never used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerWaystoneState {
    /// Activation order is kept; duplicates are never stored.
    #[serde(default)]
    pub discovered: Vec<WaystoneId>,
    #[serde(default)]
    pub last_inventory_warp: i64,
    #[serde(default)]
    pub last_warp_stone_warp: i64,
}

impl PlayerWaystoneState {
    /// Add `id` unless already present. Returns true if it was newly added.
    pub fn activate(&mut self, id: WaystoneId) -> bool {
        if self.discovered.contains(&id) {
            return false;
        }
        self.discovered.push(id);
        true
    }

    /// Remove `id`. Returns true if it was present.
    pub fn deactivate(&mut self, id: WaystoneId) -> bool {
        let before = self.discovered.len();
        self.discovered.retain(|d| *d != id);
        self.discovered.len() != before
    }

    pub fn is_activated(&self, id: WaystoneId) -> bool {
        self.discovered.contains(&id)
    }

    pub fn last_warp(&self, kind: CooldownKind) -> i64 {
        match kind {
            CooldownKind::InventoryButton => self.last_inventory_warp,
            CooldownKind::WarpStone => self.last_warp_stone_warp,
        }
    }

    pub fn set_last_warp(&mut self, kind: CooldownKind, millis: i64) {
        match kind {
            CooldownKind::InventoryButton => self.last_inventory_warp = millis,
            CooldownKind::WarpStone => self.last_warp_stone_warp = millis,
        }
    }

    /// Stamp `now` if more than `window` ms passed since the last stamp.
    /// Returns the previous stamp when claimed.
    pub fn try_claim_cooldown(&mut self, kind: CooldownKind, now: i64, window: i64) -> Option<i64> {
        let previous = self.last_warp(kind);
        if now.saturating_sub(previous) > window {
            self.set_last_warp(kind, now);
            Some(previous)
        } else {
            None
        }
    }

    /// Undo a claim made at `claimed_at`, unless the stamp moved on since.
    pub fn release_cooldown(&mut self, kind: CooldownKind, claimed_at: i64, previous: i64) {
        if self.last_warp(kind) == claimed_at {
            self.set_last_warp(kind, previous);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn activate_is_idempotent_and_ordered() {
        let mut s = PlayerWaystoneState::default();
        assert!(s.activate(WaystoneId(3)));
        assert!(s.activate(WaystoneId(1)));
        assert!(!s.activate(WaystoneId(3)));
        assert_eq!(s.discovered, vec![WaystoneId(3), WaystoneId(1)]);
    }

    #[test]
    fn deactivate_missing_is_noop() {
        let mut s = PlayerWaystoneState::default();
        assert!(!s.deactivate(WaystoneId(9)));
        assert!(s.discovered.is_empty());
    }

    #[test]
    fn cooldown_fields_are_independent() {
        let mut s = PlayerWaystoneState::default();
        s.set_last_warp(CooldownKind::WarpStone, 42);
        assert_eq!(s.last_warp(CooldownKind::WarpStone), 42);
        assert_eq!(s.last_warp(CooldownKind::InventoryButton), 0);
    }

    #[test]
    fn claim_is_exclusive_within_window() {
        let mut s = PlayerWaystoneState::default();
        assert_eq!(s.try_claim_cooldown(CooldownKind::InventoryButton, 1_000, 500), Some(0));
        assert_eq!(s.try_claim_cooldown(CooldownKind::InventoryButton, 1_200, 500), None);
        assert_eq!(s.last_warp(CooldownKind::InventoryButton), 1_000);
    }

    #[test]
    fn release_only_undoes_own_claim() {
        let mut s = PlayerWaystoneState::default();
        s.try_claim_cooldown(CooldownKind::WarpStone, 1_000, 500);
        s.release_cooldown(CooldownKind::WarpStone, 1_000, 0);
        assert_eq!(s.last_warp(CooldownKind::WarpStone), 0);

        s.set_last_warp(CooldownKind::WarpStone, 2_000);
        s.release_cooldown(CooldownKind::WarpStone, 1_000, 0);
        assert_eq!(s.last_warp(CooldownKind::WarpStone), 2_000);
    }
}
