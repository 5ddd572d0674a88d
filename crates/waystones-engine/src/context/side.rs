/// Logical side a policy call runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Server: owns durable state and originates notifications and events.
    Authoritative,
    /// Local predictive view: transient state for UI only, never authoritative.
    Speculative,
}

impl Side {
    pub fn is_speculative(self) -> bool {
        self == Side::Speculative
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Authoritative => "authoritative",
            Side::Speculative => "speculative",
        }
    }
}

/// Immutable per-engine execution metadata.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext {
    pub side: Side,
}

impl ExecutionContext {
    pub fn side(&self) -> Side {
        self.side
    }
}
