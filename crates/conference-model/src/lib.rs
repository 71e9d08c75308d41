//! Observable conference-member model for the Parley client core.
//!
//! Models one remote participant of a multi-party call: an immutable anchor
//! to the call peer acting as conference focus, an optional display name, a
//! session/device state, and synchronous change notification toward
//! registered listeners.
//!
//! The member is a passive holder. Which state transitions are legal, and
//! which signaling events drive them, is the owning call layer's concern.

#![warn(clippy::pedantic)]

/// Module for model error types
pub mod error;

/// Module for change events and property identifiers
pub mod events;

/// Module for the observable conference member
pub mod member;

/// Module for the member session/device state
pub mod state;
