// SPDX-License-Identifier: MPL-2.0
//! State management for the profile screen.

use super::{Event, Message};
use crate::account::UserAccount;
use rand::Rng;

/// Bounds of the cosmetic network-ID suffix shown in the header.
pub const NETWORK_SUFFIX_MIN: u32 = 10_000;
pub const NETWORK_SUFFIX_MAX: u32 = 99_999;

/// The two mutually exclusive display modes of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing,
}

/// Uncommitted copies of the editable contact fields.
///
/// Lives for one edit session: seeded from the record when edit mode is
/// entered, dropped on cancel, committed as a whole on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
}

impl ContactDraft {
    fn seeded_from(account: &UserAccount) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
        }
    }
}

/// Local state of the profile screen.
#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    draft: ContactDraft,
    /// Cosmetic suffix, drawn once per screen so it stays stable across
    /// renders. Not an identifier with any integrity guarantee.
    network_suffix: u32,
}

impl State {
    pub fn new(account: &UserAccount) -> Self {
        Self {
            mode: Mode::Viewing,
            draft: ContactDraft::seeded_from(account),
            network_suffix: rand::rng().random_range(NETWORK_SUFFIX_MIN..=NETWORK_SUFFIX_MAX),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn network_suffix(&self) -> u32 {
        self.network_suffix
    }

    /// Processes a screen message against the externally owned record.
    ///
    /// Everything except a save resolves locally; a save emits the merged
    /// record and never mutates `account` in place.
    pub fn update(&mut self, message: Message, account: &UserAccount) -> Event {
        match message {
            Message::ToggleEditMode => {
                // Entering edit seeds the draft from the current record;
                // leaving it discards whatever was typed.
                self.draft = ContactDraft::seeded_from(account);
                self.mode = match self.mode {
                    Mode::Viewing => Mode::Editing,
                    Mode::Editing => Mode::Viewing,
                };
                Event::None
            }
            Message::NameChanged(value) => {
                if self.mode == Mode::Editing {
                    self.draft.name = value;
                }
                Event::None
            }
            Message::EmailChanged(value) => {
                if self.mode == Mode::Editing {
                    self.draft.email = value;
                }
                Event::None
            }
            Message::SaveProfile => {
                if self.mode != Mode::Editing {
                    return Event::None;
                }
                self.mode = Mode::Viewing;
                // Both contact fields commit in one replacement record.
                Event::ProfileSubmitted(account.with_contact(&self.draft.name, &self.draft.email))
            }
            Message::RenewRequested => Event::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> UserAccount {
        UserAccount {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            active_package: "Basic".to_string(),
            expiry_date: "2025-01-01".to_string(),
        }
    }

    #[test]
    fn starts_in_viewing_mode_with_seeded_draft() {
        let account = sample_account();
        let state = State::new(&account);

        assert_eq!(state.mode(), Mode::Viewing);
        assert_eq!(state.draft().name, "A");
        assert_eq!(state.draft().email, "a@x.com");
    }

    #[test]
    fn toggle_enters_edit_mode_with_current_values() {
        let account = sample_account();
        let mut state = State::new(&account);

        let event = state.update(Message::ToggleEditMode, &account);

        assert!(matches!(event, Event::None));
        assert_eq!(state.mode(), Mode::Editing);
        assert_eq!(state.draft().name, "A");
        assert_eq!(state.draft().email, "a@x.com");
    }

    #[test]
    fn cancel_discards_draft_without_event() {
        let account = sample_account();
        let mut state = State::new(&account);

        let _ = state.update(Message::ToggleEditMode, &account);
        let _ = state.update(Message::NameChanged("B".to_string()), &account);
        let _ = state.update(Message::EmailChanged("b@x.com".to_string()), &account);
        let event = state.update(Message::ToggleEditMode, &account);

        assert!(matches!(event, Event::None));
        assert_eq!(state.mode(), Mode::Viewing);
        // The discarded draft reverts to the record's current values.
        assert_eq!(state.draft().name, "A");
        assert_eq!(state.draft().email, "a@x.com");
    }

    #[test]
    fn reentering_edit_after_cancel_shows_record_values() {
        let account = sample_account();
        let mut state = State::new(&account);

        let _ = state.update(Message::ToggleEditMode, &account);
        let _ = state.update(Message::NameChanged("scratch".to_string()), &account);
        let _ = state.update(Message::ToggleEditMode, &account);
        let _ = state.update(Message::ToggleEditMode, &account);

        assert_eq!(state.mode(), Mode::Editing);
        assert_eq!(state.draft().name, "A");
    }

    #[test]
    fn two_toggles_return_to_original_mode() {
        let account = sample_account();
        let mut state = State::new(&account);

        let _ = state.update(Message::ToggleEditMode, &account);
        let _ = state.update(Message::ToggleEditMode, &account);

        assert_eq!(state.mode(), Mode::Viewing);
    }

    #[test]
    fn save_merges_both_fields_atomically() {
        let account = sample_account();
        let mut state = State::new(&account);

        let _ = state.update(Message::ToggleEditMode, &account);
        let _ = state.update(Message::NameChanged("B".to_string()), &account);
        let _ = state.update(Message::EmailChanged("b@x.com".to_string()), &account);
        let event = state.update(Message::SaveProfile, &account);

        assert_eq!(state.mode(), Mode::Viewing);
        match event {
            Event::ProfileSubmitted(merged) => {
                assert_eq!(merged.name, "B");
                assert_eq!(merged.email, "b@x.com");
                assert_eq!(merged.phone, "555");
                assert_eq!(merged.active_package, "Basic");
                assert_eq!(merged.expiry_date, "2025-01-01");
            }
            Event::None => panic!("expected ProfileSubmitted"),
        }
    }

    #[test]
    fn save_accepts_empty_name_and_malformed_email_verbatim() {
        let account = sample_account();
        let mut state = State::new(&account);

        let _ = state.update(Message::ToggleEditMode, &account);
        let _ = state.update(Message::NameChanged(String::new()), &account);
        let _ = state.update(Message::EmailChanged("definitely not an email".to_string()), &account);
        let event = state.update(Message::SaveProfile, &account);

        match event {
            Event::ProfileSubmitted(merged) => {
                assert_eq!(merged.name, "");
                assert_eq!(merged.email, "definitely not an email");
            }
            Event::None => panic!("expected ProfileSubmitted"),
        }
    }

    #[test]
    fn keystrokes_outside_edit_mode_are_ignored() {
        let account = sample_account();
        let mut state = State::new(&account);

        let _ = state.update(Message::NameChanged("B".to_string()), &account);
        let _ = state.update(Message::EmailChanged("b@x.com".to_string()), &account);

        assert_eq!(state.draft().name, "A");
        assert_eq!(state.draft().email, "a@x.com");
    }

    #[test]
    fn save_outside_edit_mode_emits_nothing() {
        let account = sample_account();
        let mut state = State::new(&account);

        let event = state.update(Message::SaveProfile, &account);
        assert!(matches!(event, Event::None));
        assert_eq!(state.mode(), Mode::Viewing);
    }

    #[test]
    fn renew_request_has_no_effect() {
        let account = sample_account();
        let mut state = State::new(&account);
        let before = state.clone();

        let event = state.update(Message::RenewRequested, &account);

        assert!(matches!(event, Event::None));
        assert_eq!(state.mode(), before.mode());
        assert_eq!(state.draft(), before.draft());
        assert_eq!(state.network_suffix(), before.network_suffix());
    }

    #[test]
    fn network_suffix_is_five_digits() {
        let account = sample_account();
        for _ in 0..32 {
            let state = State::new(&account);
            let suffix = state.network_suffix();
            assert!((NETWORK_SUFFIX_MIN..=NETWORK_SUFFIX_MAX).contains(&suffix));
        }
    }

    #[test]
    fn network_suffix_is_stable_across_interactions() {
        let account = sample_account();
        let mut state = State::new(&account);
        let suffix = state.network_suffix();

        let _ = state.update(Message::ToggleEditMode, &account);
        let _ = state.update(Message::NameChanged("B".to_string()), &account);
        let _ = state.update(Message::ToggleEditMode, &account);

        assert_eq!(state.network_suffix(), suffix);
    }
}
