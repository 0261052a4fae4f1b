use serde::Serialize;

/// Storage readiness.
///
/// Starts at `NotReady` and moves to `Ready` exactly once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ReadinessState {
    #[default]
    NotReady,
    Ready,
}

impl ReadinessState {
    pub fn is_ready(self) -> bool {
        matches!(self, ReadinessState::Ready)
    }
}
