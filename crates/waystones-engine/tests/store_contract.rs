//! One behavioral suite, run unmodified against both store backends.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use waystones_core::{CooldownKind, PlayerId, PlayerWaystoneState, WaystoneId};
use waystones_engine::store::{DurableWaystoneStore, PlayerWaystoneStore, TransientWaystoneStore};

fn backends() -> Vec<(&'static str, Arc<dyn PlayerWaystoneStore>)> {
    vec![
        ("durable", Arc::new(DurableWaystoneStore::new()) as Arc<dyn PlayerWaystoneStore>),
        ("transient", Arc::new(TransientWaystoneStore::new()) as Arc<dyn PlayerWaystoneStore>),
    ]
}

#[test]
fn unknown_player_has_empty_state() {
    for (name, store) in backends() {
        let p = PlayerId::new("nobody");
        assert_eq!(store.state(&p), PlayerWaystoneState::default(), "{name}");
        assert!(store.waystones(&p).is_empty(), "{name}");
        assert_eq!(store.last_warp(&p, CooldownKind::InventoryButton), 0, "{name}");
        assert_eq!(store.last_warp(&p, CooldownKind::WarpStone), 0, "{name}");
    }
}

#[test]
fn activate_is_idempotent() {
    for (name, store) in backends() {
        let p = PlayerId::new("alice");
        assert!(store.activate(&p, WaystoneId(7)), "{name}");
        assert!(!store.activate(&p, WaystoneId(7)), "{name}");
        assert!(store.is_activated(&p, WaystoneId(7)), "{name}");
        assert_eq!(store.waystones(&p), vec![WaystoneId(7)], "{name}");
    }
}

#[test]
fn deactivate_restores_and_missing_is_noop() {
    for (name, store) in backends() {
        let p = PlayerId::new("alice");
        assert!(!store.deactivate(&p, WaystoneId(1)), "{name}");
        store.activate(&p, WaystoneId(1));
        assert!(store.deactivate(&p, WaystoneId(1)), "{name}");
        assert!(!store.is_activated(&p, WaystoneId(1)), "{name}");
        assert!(!store.deactivate(&p, WaystoneId(1)), "{name}");
    }
}

#[test]
fn order_is_activation_order() {
    for (name, store) in backends() {
        let p = PlayerId::new("alice");
        for id in [5, 2, 9] {
            store.activate(&p, WaystoneId(id));
        }
        store.deactivate(&p, WaystoneId(2));
        assert_eq!(store.waystones(&p), vec![WaystoneId(5), WaystoneId(9)], "{name}");
    }
}

#[test]
fn players_are_isolated() {
    for (name, store) in backends() {
        let a = PlayerId::new("a");
        let b = PlayerId::new("b");
        store.activate(&a, WaystoneId(1));
        store.set_last_warp(&a, CooldownKind::WarpStone, 99);
        assert!(!store.is_activated(&b, WaystoneId(1)), "{name}");
        assert_eq!(store.last_warp(&b, CooldownKind::WarpStone), 0, "{name}");
    }
}

#[test]
fn cooldown_stamps_are_per_kind() {
    for (name, store) in backends() {
        let p = PlayerId::new("alice");
        store.set_last_warp(&p, CooldownKind::InventoryButton, 1_000);
        store.set_last_warp(&p, CooldownKind::WarpStone, 2_000);
        assert_eq!(store.last_warp(&p, CooldownKind::InventoryButton), 1_000, "{name}");
        assert_eq!(store.last_warp(&p, CooldownKind::WarpStone), 2_000, "{name}");
        let s = store.state(&p);
        assert_eq!((s.last_inventory_warp, s.last_warp_stone_warp), (1_000, 2_000), "{name}");
    }
}

#[test]
fn cooldown_claim_and_release() {
    for (name, store) in backends() {
        let p = PlayerId::new("alice");
        let kind = CooldownKind::InventoryButton;
        assert_eq!(store.try_claim_cooldown(&p, kind, 10_000, 5_000), Some(0), "{name}");
        assert_eq!(store.try_claim_cooldown(&p, kind, 12_000, 5_000), None, "{name}");
        assert_eq!(store.last_warp(&p, kind), 10_000, "{name}");

        store.release_cooldown(&p, kind, 10_000, 0);
        assert_eq!(store.last_warp(&p, kind), 0, "{name}");
        assert_eq!(store.try_claim_cooldown(&p, kind, 12_000, 5_000), Some(0), "{name}");
        assert_eq!(store.last_warp(&p, CooldownKind::WarpStone), 0, "{name}");
    }
}

#[test]
fn durable_snapshot_restore() {
    let store = DurableWaystoneStore::new();
    let p = PlayerId::new("alice");
    let persisted: PlayerWaystoneState =
        serde_json::from_str(r#"{ "discovered": [3, 1], "last_warp_stone_warp": 500 }"#).unwrap();

    store.restore(&p, persisted.clone());
    assert_eq!(store.snapshot(&p), persisted);
    assert!(store.is_activated(&p, WaystoneId(3)));
    assert_eq!(store.players(), vec![p]);
}

#[test]
fn transient_reset_forgets_everything() {
    let store = TransientWaystoneStore::new();
    let p = PlayerId::new("alice");
    store.activate(&p, WaystoneId(1));
    store.reset();
    assert!(!store.is_activated(&p, WaystoneId(1)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn durable_concurrent_activation_same_player() {
    let store = Arc::new(DurableWaystoneStore::new());
    let p = PlayerId::new("busy");

    let mut tasks = tokio::task::JoinSet::new();
    for worker in 0..8u64 {
        let store = Arc::clone(&store);
        let p = p.clone();
        tasks.spawn_blocking(move || {
            for id in 0..50u64 {
                store.activate(&p, WaystoneId(id));
                store.set_last_warp(&p, CooldownKind::InventoryButton, (worker * 1000 + id) as i64);
            }
        });
    }
    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }

    let ids = store.waystones(&p);
    assert_eq!(ids.len(), 50);
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn durable_concurrent_claims_admit_one() {
    let store = Arc::new(DurableWaystoneStore::new());
    let p = PlayerId::new("busy");

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let store = Arc::clone(&store);
        let p = p.clone();
        tasks.spawn_blocking(move || {
            store
                .try_claim_cooldown(&p, CooldownKind::WarpStone, 100_000, 30_000)
                .is_some()
        });
    }
    let mut admitted = 0;
    while let Some(res) = tasks.join_next().await {
        if res.unwrap() {
            admitted += 1;
        }
    }

    assert_eq!(admitted, 1);
    assert_eq!(store.last_warp(&p, CooldownKind::WarpStone), 100_000);
}
