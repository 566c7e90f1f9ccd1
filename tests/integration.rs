// SPDX-License-Identifier: MPL-2.0
use goti_desk::account::{self, UserAccount};
use goti_desk::config::{self, Config};
use goti_desk::i18n::fluent::I18n;
use goti_desk::ui::profile::{Event, Message, Mode, State};
use goti_desk::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to bn
    let bengali_config = Config {
        language: Some("bn".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&bengali_config, &temp_config_file_path)
        .expect("Failed to write bengali config file");

    let loaded_bengali_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load bengali config from path");
    let i18n_bn = I18n::new(None, &loaded_bengali_config);
    assert_eq!(i18n_bn.current_locale().to_string(), "bn");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_account_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("account.toml");

    let account = UserAccount {
        name: "B".to_string(),
        email: "b@x.com".to_string(),
        phone: "555".to_string(),
        active_package: "Basic".to_string(),
        expiry_date: "2025-01-01".to_string(),
    };

    account::save_to_path(&account, &path).expect("Failed to save account");
    let loaded = account::load_from_path(&path).expect("Failed to load account");

    assert_eq!(loaded, account);
}

/// The full edit flow as a subscriber would drive it: mount, inspect the
/// read-only values, enter edit mode, change both fields, save, and check
/// the committed record.
#[test]
fn test_profile_edit_scenario() {
    let account = UserAccount {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        phone: "555".to_string(),
        active_package: "Basic".to_string(),
        expiry_date: "2025-01-01".to_string(),
    };

    // Mount: viewing mode, record values displayed as-is.
    let mut state = State::new(&account);
    assert_eq!(state.mode(), Mode::Viewing);
    assert_eq!(account.email, "a@x.com");
    assert_eq!(account.phone, "555");

    // Enter edit mode: inputs pre-filled from the record.
    let event = state.update(Message::ToggleEditMode, &account);
    assert!(matches!(event, Event::None));
    assert_eq!(state.mode(), Mode::Editing);
    assert_eq!(state.draft().name, "A");
    assert_eq!(state.draft().email, "a@x.com");

    // Type into both inputs.
    let _ = state.update(Message::NameChanged("B".to_string()), &account);
    let _ = state.update(Message::EmailChanged("b@x.com".to_string()), &account);

    // Save: exactly one submission carrying the merged record.
    let event = state.update(Message::SaveProfile, &account);
    assert_eq!(state.mode(), Mode::Viewing);
    let merged = match event {
        Event::ProfileSubmitted(merged) => merged,
        Event::None => panic!("expected a submission"),
    };
    assert_eq!(
        merged,
        UserAccount {
            name: "B".to_string(),
            email: "b@x.com".to_string(),
            phone: "555".to_string(),
            active_package: "Basic".to_string(),
            expiry_date: "2025-01-01".to_string(),
        }
    );

    // The read-only fields never change through any interaction.
    assert_eq!(merged.phone, account.phone);
    assert_eq!(merged.active_package, account.active_package);
    assert_eq!(merged.expiry_date, account.expiry_date);
}

#[test]
fn test_cancel_then_save_commits_current_record_values() {
    let account = UserAccount {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        phone: "555".to_string(),
        active_package: "Basic".to_string(),
        expiry_date: "2025-01-01".to_string(),
    };
    let mut state = State::new(&account);

    // Edit, type, cancel: nothing committed.
    let _ = state.update(Message::ToggleEditMode, &account);
    let _ = state.update(Message::NameChanged("scrapped".to_string()), &account);
    let event = state.update(Message::ToggleEditMode, &account);
    assert!(matches!(event, Event::None));

    // Re-enter and save untouched: the submission equals the record.
    let _ = state.update(Message::ToggleEditMode, &account);
    let event = state.update(Message::SaveProfile, &account);
    match event {
        Event::ProfileSubmitted(merged) => assert_eq!(merged, account),
        Event::None => panic!("expected a submission"),
    }
}
