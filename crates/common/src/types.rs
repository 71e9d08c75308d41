//! Common data types for Parley components.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a call peer.
///
/// Components store and return peer identifiers without interpreting them;
/// resolving one back to a live call peer is the owning call layer's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallPeerId(pub Uuid);

impl CallPeerId {
    /// Create a new random call peer ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for CallPeerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CallPeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
