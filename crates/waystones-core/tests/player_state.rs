//! Persisted player state shape.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use waystones_core::{PlayerWaystoneState, WaystoneId};

#[test]
fn parses_persisted_state() {
    let s = r#"{ "discovered": [4, 2], "last_inventory_warp": 1700000000000 }"#;
    let state: PlayerWaystoneState = serde_json::from_str(s).unwrap();
    assert_eq!(state.discovered, vec![WaystoneId(4), WaystoneId(2)]);
    assert_eq!(state.last_inventory_warp, 1_700_000_000_000);
    assert_eq!(state.last_warp_stone_warp, 0);
}

#[test]
fn rejects_unknown_fields() {
    let s = r#"{ "discoverd": [1] }"#;
    assert!(serde_json::from_str::<PlayerWaystoneState>(s).is_err());
}
