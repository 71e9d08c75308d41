//! Change events emitted by the conference-member model.
//!
//! Every applied mutation produces exactly one [`MemberChange`] carrying the
//! property identifier together with the old and new values. Unchanged sets
//! produce nothing.

use crate::state::MemberState;
use std::fmt;

/// Identifier of an observable member property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberProperty {
    /// The member's display name within the conference.
    DisplayName,
    /// The member's session/device state.
    State,
}

impl MemberProperty {
    /// Stable string identifier of the property.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MemberProperty::DisplayName => "display-name",
            MemberProperty::State => "state",
        }
    }
}

impl fmt::Display for MemberProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change applied to an observable member property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberChange {
    /// The display name changed.
    DisplayName {
        /// Value before the change (`None` while the name was absent).
        old: Option<String>,
        /// Value after the change.
        new: Option<String>,
    },
    /// The session/device state changed.
    State {
        /// State before the change.
        old: MemberState,
        /// State after the change.
        new: MemberState,
    },
}

impl MemberChange {
    /// The property this change applies to.
    #[must_use]
    pub fn property(&self) -> MemberProperty {
        match self {
            MemberChange::DisplayName { .. } => MemberProperty::DisplayName,
            MemberChange::State { .. } => MemberProperty::State,
        }
    }
}
