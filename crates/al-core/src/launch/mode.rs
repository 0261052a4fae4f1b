use serde::{Deserialize, Serialize};

/// Which application surface is active.
///
/// Persisted as a single boolean where `true` means [`LaunchMode::Air`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaunchMode {
    /// Legacy surface.
    #[default]
    Classic,
    /// Unified surface activated by the launcher.
    Air,
}

impl LaunchMode {
    pub fn from_flag(should_start_on_air: bool) -> Self {
        if should_start_on_air {
            LaunchMode::Air
        } else {
            LaunchMode::Classic
        }
    }

    pub fn as_flag(self) -> bool {
        matches!(self, LaunchMode::Air)
    }

    pub fn is_air(self) -> bool {
        self.as_flag()
    }
}
