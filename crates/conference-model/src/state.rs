//! Session/device state of a conference member.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State of the device and signaling session of a member within a
/// conference.
///
/// The value set mirrors the RFC 4575 endpoint-status element. Members enter
/// the model as [`MemberState::Unknown`]; the owning call layer applies
/// whatever state the conference focus reports, and no transition is
/// validated here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberState {
    /// No state information has been received for the member.
    #[default]
    Unknown,
    /// The member is expected to join, but no dialog exists yet.
    Pending,
    /// The focus is dialing out to the member.
    DialingOut,
    /// The member is dialing in to the focus.
    DialingIn,
    /// The member's endpoint is being alerted.
    Alerting,
    /// The member is on hold.
    OnHold,
    /// The member is connected to the conference.
    Connected,
    /// The member is connected but muted by the focus.
    MutedViaFocus,
    /// The member is in the process of disconnecting.
    Disconnecting,
    /// The member has disconnected from the conference.
    Disconnected,
}

impl MemberState {
    /// Canonical string form of the state, as carried by conference-info
    /// notifications.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MemberState::Unknown => "unknown",
            MemberState::Pending => "pending",
            MemberState::DialingOut => "dialing-out",
            MemberState::DialingIn => "dialing-in",
            MemberState::Alerting => "alerting",
            MemberState::OnHold => "on-hold",
            MemberState::Connected => "connected",
            MemberState::MutedViaFocus => "muted-via-focus",
            MemberState::Disconnecting => "disconnecting",
            MemberState::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for MemberState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberState {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(MemberState::Unknown),
            "pending" => Ok(MemberState::Pending),
            "dialing-out" => Ok(MemberState::DialingOut),
            "dialing-in" => Ok(MemberState::DialingIn),
            "alerting" => Ok(MemberState::Alerting),
            "on-hold" => Ok(MemberState::OnHold),
            "connected" => Ok(MemberState::Connected),
            "muted-via-focus" => Ok(MemberState::MutedViaFocus),
            "disconnecting" => Ok(MemberState::Disconnecting),
            "disconnected" => Ok(MemberState::Disconnected),
            other => Err(ModelError::UnknownState(other.to_string())),
        }
    }
}
