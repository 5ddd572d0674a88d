use thiserror::Error;

use waystones_core::CooldownKind;

/// Why a teleport attempt was refused. A normal policy result, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TeleportDenial {
    #[error("teleports are not decided on the speculative side")]
    SpeculativeSide,
    #[error("target waystone no longer exists")]
    InvalidTarget,
    #[error("required warp item is not held")]
    MissingItem,
    #[error("{} cooldown still active", .kind.as_str())]
    CooldownActive { kind: CooldownKind },
    #[error("origin waystone missing or removed")]
    InvalidOrigin,
    #[error("needs {required} levels, has {available}")]
    InsufficientLevels { required: i32, available: i32 },
}

impl TeleportDenial {
    /// Metric/log label.
    pub fn as_str(self) -> &'static str {
        match self {
            TeleportDenial::SpeculativeSide => "speculative_side",
            TeleportDenial::InvalidTarget => "invalid_target",
            TeleportDenial::MissingItem => "missing_item",
            TeleportDenial::CooldownActive { .. } => "cooldown_active",
            TeleportDenial::InvalidOrigin => "invalid_origin",
            TeleportDenial::InsufficientLevels { .. } => "insufficient_levels",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeleportOutcome {
    /// Position changed; `cost` levels were deducted.
    Teleported { cost: i32 },
    Denied(TeleportDenial),
}

impl TeleportOutcome {
    pub fn is_teleported(self) -> bool {
        matches!(self, TeleportOutcome::Teleported { .. })
    }

    pub fn label(self) -> &'static str {
        match self {
            TeleportOutcome::Teleported { .. } => "ok",
            TeleportOutcome::Denied(d) => d.as_str(),
        }
    }
}
