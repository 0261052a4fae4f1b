use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw launch payload handed over by the host when an entry point starts.
///
/// Mirrors what a host launch request carries: an optional action, an
/// optional data URI and a bag of string extras.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchIntent {
    pub action: Option<String>,
    pub data: Option<String>,
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
}

impl LaunchIntent {
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }
}
