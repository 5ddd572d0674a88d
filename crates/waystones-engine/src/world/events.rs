use std::fmt;
use std::sync::Arc;

use waystones_core::{BlockPos, PlayerId, Waystone};

/// User-facing message sent to one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    WaystoneActivated { name: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::WaystoneActivated { name } => write!(f, "Waystone activated: {name}"),
        }
    }
}

/// Raised on the authoritative side when a player discovers a waystone.
#[derive(Debug, Clone)]
pub struct WaystoneActivatedEvent {
    pub player: PlayerId,
    pub waystone: Arc<Waystone>,
}

/// Outbound notifications. Implementations must not block.
pub trait EventSink: Send + Sync {
    fn notify(&self, player: &PlayerId, notice: Notice);

    fn publish(&self, event: WaystoneActivatedEvent);

    /// Play the teleport effect for observers tracking `pos`.
    fn trigger_visual_effect(&self, pos: BlockPos);
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEvents;

impl EventSink for NoopEvents {
    fn notify(&self, _player: &PlayerId, _notice: Notice) {}
    fn publish(&self, _event: WaystoneActivatedEvent) {}
    fn trigger_visual_effect(&self, _pos: BlockPos) {}
}
