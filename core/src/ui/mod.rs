//! Form and page models.
//!
//! Each model is the state machine behind one piece of the admin UI:
//! it owns the field values, the in-flight flags, and the success/error
//! message slots, and talks to the resource services when the user acts.
//! Nothing here renders; a frontend reads the accessors and feeds user
//! input back in.

pub mod contact_card;
pub mod create_contact;
pub mod create_person;
pub mod page;
pub mod person_card;

use crate::error::ApiError;

/// Whether a card shows the entity read-only or as an editable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Viewing,
    Editing,
}

/// What a card is currently waiting on. While not `Idle`, the triggering
/// control is disabled and further submits/deletes are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Submitting,
    Deleting,
}

/// Required-field check: an empty value yields the field's error message.
pub(crate) fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.is_empty() {
        Some(message)
    } else {
        None
    }
}

/// User-facing text for a failed operation: the server-supplied body when
/// there is one, otherwise the operation's own fallback wording.
pub(crate) fn failure_message(err: &ApiError, fallback: &str) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
