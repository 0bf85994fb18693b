//! Search configuration.

/// Ply budget used when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 3;

/// Deepest search the host will accept.
pub const MAX_DEPTH: u8 = 8;

/// Knobs for a single search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fixed horizon in plies.
    pub max_depth: u8,
    /// Seed for the move-order shuffle. `None` draws from OS entropy, so
    /// equally scored root moves may differ between runs.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Same configuration with a different depth.
    pub fn with_depth(self, max_depth: u8) -> Self {
        Self { max_depth, ..self }
    }

    /// Same configuration with a fixed shuffle seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}
