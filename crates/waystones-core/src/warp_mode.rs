//! Warp modes and the rule table that drives every per-mode decision.
//!
//! Each mode maps to one `WarpModeRules` row: whether it costs levels, which
//! held item authorizes it, whether that item is consumed, which cooldown it
//! stamps, and whether it needs an origin waystone. Engine steps read the row
//! instead of matching on the mode again.

use std::fmt;
use std::str::FromStr;

use crate::error::WaystonesError;

/// Method used to start a teleport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarpMode {
    InventoryButton,
    WarpScroll,
    WarpStone,
    ReturnScroll,
    BoundScroll,
    WaystoneToWaystone,
}

/// Consumable or reusable item that authorizes a warp mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarpItem {
    WarpScroll,
    WarpStone,
    ReturnScroll,
    BoundScroll,
}

/// Hand slot; `Hand::SEARCH_ORDER` is the order items are looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Main,
    Off,
}

impl Hand {
    pub const SEARCH_ORDER: [Hand; 2] = [Hand::Main, Hand::Off];
}

/// Tracked per-player cooldown timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownKind {
    InventoryButton,
    WarpStone,
}

impl CooldownKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CooldownKind::InventoryButton => "inventory_button",
            CooldownKind::WarpStone => "warp_stone",
        }
    }
}

/// Fixed per-mode properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarpModeRules {
    pub has_xp_cost: bool,
    pub item: Option<WarpItem>,
    /// One unit of `item` is consumed on a successful teleport.
    pub consumes_item: bool,
    /// Cooldown checked before and stamped after a successful teleport.
    pub cooldown: Option<CooldownKind>,
    /// Needs a still-valid origin waystone.
    pub requires_origin: bool,
}

const fn scroll(item: WarpItem) -> WarpModeRules {
    WarpModeRules {
        has_xp_cost: false,
        item: Some(item),
        consumes_item: true,
        cooldown: None,
        requires_origin: false,
    }
}

impl WarpMode {
    pub const ALL: [WarpMode; 6] = [
        WarpMode::InventoryButton,
        WarpMode::WarpScroll,
        WarpMode::WarpStone,
        WarpMode::ReturnScroll,
        WarpMode::BoundScroll,
        WarpMode::WaystoneToWaystone,
    ];

    pub const fn rules(self) -> WarpModeRules {
        match self {
            WarpMode::InventoryButton => WarpModeRules {
                has_xp_cost: true,
                item: None,
                consumes_item: false,
                cooldown: Some(CooldownKind::InventoryButton),
                requires_origin: false,
            },
            WarpMode::WarpScroll => scroll(WarpItem::WarpScroll),
            WarpMode::ReturnScroll => scroll(WarpItem::ReturnScroll),
            WarpMode::BoundScroll => scroll(WarpItem::BoundScroll),
            WarpMode::WarpStone => WarpModeRules {
                has_xp_cost: true,
                item: Some(WarpItem::WarpStone),
                consumes_item: false,
                cooldown: Some(CooldownKind::WarpStone),
                requires_origin: false,
            },
            WarpMode::WaystoneToWaystone => WarpModeRules {
                has_xp_cost: true,
                item: None,
                consumes_item: false,
                cooldown: None,
                requires_origin: true,
            },
        }
    }

    pub fn has_xp_cost(self) -> bool {
        self.rules().has_xp_cost
    }

    pub fn required_item(self) -> Option<WarpItem> {
        self.rules().item
    }

    pub fn cooldown(self) -> Option<CooldownKind> {
        self.rules().cooldown
    }

    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            WarpMode::InventoryButton => "inventory_button",
            WarpMode::WarpScroll => "warp_scroll",
            WarpMode::WarpStone => "warp_stone",
            WarpMode::ReturnScroll => "return_scroll",
            WarpMode::BoundScroll => "bound_scroll",
            WarpMode::WaystoneToWaystone => "waystone_to_waystone",
        }
    }
}

impl fmt::Display for WarpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarpMode {
    type Err = WaystonesError;

    /// Accepts the lowercase labels as well as the SCREAMING_CASE names used by game-side packets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        WarpMode::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| WaystonesError::Parse(format!("unknown warp mode: {s}")))
    }
}
