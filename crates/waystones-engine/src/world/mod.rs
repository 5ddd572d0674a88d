//! Collaborator seams: the directory, the acting player, event delivery, and time.
//!
//! The engine only talks to the game through these traits. In-memory
//! implementations live alongside for tools and tests.

pub mod clock;
pub mod directory;
pub mod events;

use std::sync::Arc;

use waystones_core::{BlockPos, Hand, PlayerId, Vec3, WarpItem, Waystone, WaystoneId};

pub use clock::{Clock, ManualClock, SystemClock};
pub use directory::InMemoryDirectory;
pub use events::{EventSink, NoopEvents, Notice, WaystoneActivatedEvent};

/// Read-only lookup of waystone records.
pub trait WaystoneDirectory: Send + Sync {
    fn resolve(&self, id: WaystoneId) -> Option<Arc<Waystone>>;
    fn waystone_at(&self, pos: BlockPos) -> Option<Arc<Waystone>>;
}

/// The player a policy call is evaluated for.
pub trait Actor {
    fn id(&self) -> &PlayerId;

    /// Creative mode or an equivalent administrative override.
    fn has_elevated_privilege(&self) -> bool;

    fn position(&self) -> Vec3;

    fn experience_level(&self) -> i32;

    /// Negative `delta` removes levels.
    fn add_experience_levels(&mut self, delta: i32);

    /// Warp item in `hand`, if the held stack is one.
    fn held_item(&self, hand: Hand) -> Option<WarpItem>;

    /// Shrink the stack in `hand` by one.
    fn consume_one(&mut self, hand: Hand);

    fn set_position(&mut self, pos: Vec3);
}
