//! `ConferenceMember` - observable view-state of one conference participant.
//!
//! A member anchors to the call peer acting as conference focus at
//! construction and never re-anchors. Its two mutable properties, display
//! name and session state, notify registered listeners when (and only when)
//! a set actually changes the stored value.
//!
//! The member holds no lock of its own; mutation goes through `&mut self`,
//! so concurrent access must be serialized by the owner.

use crate::events::MemberChange;
use crate::state::MemberState;
use common::notify::{EventListener, ListenerRegistry};
use common::types::CallPeerId;
use std::sync::Arc;
use tracing::debug;

/// Capability set of an observable conference member.
///
/// The conference layer works against this trait; [`ConferenceMember`] is
/// the canonical implementation.
pub trait ObservableMember {
    /// The peer acting as conference focus for this member.
    ///
    /// Fixed at construction; the same identifier is returned for the
    /// member's entire lifetime.
    fn focus_peer(&self) -> CallPeerId;

    /// Current display name, if one has been reported.
    fn display_name(&self) -> Option<&str>;

    /// Current session/device state. Never absent.
    fn state(&self) -> MemberState;

    /// Replace the display name.
    ///
    /// A no-op when `display_name` equals the stored value. Otherwise the
    /// new value is stored and listeners receive a
    /// [`MemberChange::DisplayName`] with the old and new values.
    fn set_display_name(&mut self, display_name: Option<String>);

    /// Replace the session/device state, under the same
    /// compare-replace-notify contract as `set_display_name`.
    fn set_state(&mut self, state: MemberState);

    /// Register a change listener under `name`, appended to the delivery
    /// order.
    fn add_change_listener(&mut self, name: &str, listener: Arc<dyn EventListener<MemberChange>>);

    /// Remove the change listener registered under `name`.
    ///
    /// Returns `true` if a registration was found and removed.
    fn remove_change_listener(&mut self, name: &str) -> bool;
}

/// One remote participant in a multi-party call.
#[derive(Debug)]
pub struct ConferenceMember {
    /// Peer acting as conference focus. Never reassigned.
    focus_peer: CallPeerId,
    /// Display name within the conference.
    display_name: Option<String>,
    /// Session/device state.
    state: MemberState,
    /// Registered change listeners.
    change_listeners: ListenerRegistry<MemberChange>,
}

impl ConferenceMember {
    /// Create a member anchored to `focus_peer`.
    ///
    /// The state starts as [`MemberState::Unknown`] and the display name
    /// starts absent.
    #[must_use]
    pub fn new(focus_peer: CallPeerId) -> Self {
        Self {
            focus_peer,
            display_name: None,
            state: MemberState::default(),
            change_listeners: ListenerRegistry::new(),
        }
    }
}

impl ObservableMember for ConferenceMember {
    fn focus_peer(&self) -> CallPeerId {
        self.focus_peer
    }

    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    fn state(&self) -> MemberState {
        self.state
    }

    fn set_display_name(&mut self, display_name: Option<String>) {
        if self.display_name == display_name {
            return;
        }

        let old = self.display_name.take();
        self.display_name = display_name;

        debug!(
            target: "model.member",
            focus_peer = %self.focus_peer,
            old = ?old,
            new = ?self.display_name,
            "Display name changed"
        );

        self.change_listeners.notify(&MemberChange::DisplayName {
            old,
            new: self.display_name.clone(),
        });
    }

    fn set_state(&mut self, state: MemberState) {
        if self.state == state {
            return;
        }

        let old = self.state;
        self.state = state;

        debug!(
            target: "model.member",
            focus_peer = %self.focus_peer,
            old = %old,
            new = %self.state,
            "Member state changed"
        );

        self.change_listeners.notify(&MemberChange::State {
            old,
            new: self.state,
        });
    }

    fn add_change_listener(&mut self, name: &str, listener: Arc<dyn EventListener<MemberChange>>) {
        self.change_listeners.add_listener(name, listener);
    }

    fn remove_change_listener(&mut self, name: &str) -> bool {
        self.change_listeners.remove_listener(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_defaults() {
        let peer = CallPeerId::new();
        let member = ConferenceMember::new(peer);

        assert_eq!(member.focus_peer(), peer);
        assert_eq!(member.state(), MemberState::Unknown);
        assert_eq!(member.display_name(), None);
    }

    #[test]
    fn test_setters_store_values() {
        let mut member = ConferenceMember::new(CallPeerId::new());

        member.set_display_name(Some("Alice".to_string()));
        assert_eq!(member.display_name(), Some("Alice"));

        member.set_state(MemberState::Connected);
        assert_eq!(member.state(), MemberState::Connected);
    }

    #[test]
    fn test_focus_peer_survives_mutation() {
        let peer = CallPeerId::new();
        let mut member = ConferenceMember::new(peer);

        member.set_display_name(Some("Alice".to_string()));
        member.set_state(MemberState::OnHold);
        member.set_display_name(None);

        assert_eq!(member.focus_peer(), peer);
    }

    #[test]
    fn test_usable_through_trait_object() {
        let mut member = ConferenceMember::new(CallPeerId::new());
        let observable: &mut dyn ObservableMember = &mut member;

        observable.set_state(MemberState::Alerting);
        assert_eq!(observable.state(), MemberState::Alerting);
    }
}
