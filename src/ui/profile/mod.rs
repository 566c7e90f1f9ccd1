// SPDX-License-Identifier: MPL-2.0
//! Profile screen component: identity header, editable contact fields, and
//! the service summary sidebar.
//!
//! The component follows the crate's panel convention: a `State` holding
//! local view state, a `Message` enum for UI interactions, and an `Event`
//! enum propagated to the application root. The subscriber record itself is
//! owned by the root; this screen only reads it and, on save, asks for a
//! whole-record replacement via [`Event::ProfileSubmitted`].

pub mod state;
pub mod view;

pub use state::{ContactDraft, Mode, State};
pub use view::{view, ViewContext};

use crate::account::UserAccount;

/// Messages emitted by the profile screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle between viewing and editing ("Manage Account" / "Cancel").
    ToggleEditMode,
    /// The name input changed.
    NameChanged(String),
    /// The email input changed.
    EmailChanged(String),
    /// Commit the draft into the subscriber record.
    SaveProfile,
    /// The renewal button in the service sidebar.
    RenewRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// No action needed.
    None,
    /// The user saved their contact details; the payload is the full merged
    /// record, never a diff.
    ProfileSubmitted(UserAccount),
}
