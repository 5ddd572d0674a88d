//! Waystone records, identities, and positions.
//!
//! A `Waystone` is owned by the directory and shared read-only as
//! `Arc<Waystone>`. The only mutable bit is its validity flag, which the
//! directory clears on removal so that handles obtained earlier observe it.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

/// Stable waystone identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaystoneId(pub u64);

impl fmt::Display for WaystoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player identity (profile id as issued by the game).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Block corner as a continuous position.
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Centre of the block; where teleports land.
    pub fn center(self) -> Vec3 {
        Vec3::new(
            f64::from(self.x) + 0.5,
            f64::from(self.y) + 0.5,
            f64::from(self.z) + 0.5,
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Continuous world position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_sq(self, other: Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    pub fn distance(self, other: Vec3) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

/// A fast-travel destination as published by the directory.
#[derive(Debug)]
pub struct Waystone {
    id: WaystoneId,
    name: String,
    pos: BlockPos,
    owner: Option<PlayerId>,
    global: bool,
    generated: bool,
    valid: AtomicBool,
}

impl Waystone {
    /// New player-placed, unowned, non-global waystone.
    pub fn new(id: WaystoneId, name: impl Into<String>, pos: BlockPos) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            owner: None,
            global: false,
            generated: false,
            valid: AtomicBool::new(true),
        }
    }

    pub fn owned_by(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    pub fn with_generated(mut self, generated: bool) -> Self {
        self.generated = generated;
        self
    }

    pub fn id(&self) -> WaystoneId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn pos(&self) -> BlockPos {
        self.pos
    }
    pub fn owner(&self) -> Option<&PlayerId> {
        self.owner.as_ref()
    }
    pub fn is_global(&self) -> bool {
        self.global
    }
    pub fn was_generated(&self) -> bool {
        self.generated
    }

    /// True when `player` is the recorded owner. Unowned waystones have no owner.
    pub fn is_owner(&self, player: &PlayerId) -> bool {
        self.owner.as_ref() == Some(player)
    }

    /// Re-read on every use: the waystone may have been removed since lookup.
    pub fn is_valid(&self) -> bool {
        self.valid.load(Ordering::Acquire)
    }

    /// Mark removed. Called by the directory; irreversible.
    pub fn invalidate(&self) {
        self.valid.store(false, Ordering::Release);
    }
}
