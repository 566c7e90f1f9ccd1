// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the profile screen.
//!
//! The `App` struct plays the account-system collaborator for the profile
//! view: it owns the `UserAccount` record, hands it to the screen on every
//! render, and applies whole-record replacement when the screen submits an
//! edit. Localization and theme preferences are resolved here so the screen
//! itself stays presentational.

use crate::account::{self, UserAccount};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::profile::{self, Event as ProfileEvent, State as ProfileState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the profile screen, localization,
/// and the persisted subscriber record.
pub struct App {
    pub i18n: I18n,
    account: UserAccount,
    profile: ProfileState,
    theme_mode: ThemeMode,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.profile.mode())
            .field("locale", &self.i18n.current_locale().to_string())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Profile(profile::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `bn`, `en-US`).
    pub lang: Option<String>,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot_state = std::cell::RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        let account = UserAccount::default();
        let profile = ProfileState::new(&account);
        Self {
            i18n: I18n::default(),
            account,
            profile,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from the config file, the CLI locale
    /// override, and the stored subscriber record.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let account = account::load().unwrap_or_default();
        let profile = ProfileState::new(&account);

        (
            App {
                i18n,
                account,
                profile,
                theme_mode: config.theme_mode,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Profile(profile_message) => {
                match self.profile.update(profile_message, &self.account) {
                    ProfileEvent::None => {}
                    ProfileEvent::ProfileSubmitted(next) => {
                        self.account = next;
                        self.persist_account();
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        profile::view(
            &self.profile,
            profile::ViewContext {
                i18n: &self.i18n,
                account: &self.account,
            },
        )
        .map(Message::Profile)
    }

    /// Persists the current subscriber record to disk.
    ///
    /// Guarded during tests to keep isolation: unit tests exercise the logic
    /// by inspecting the in-memory record instead.
    fn persist_account(&self) {
        if cfg!(test) {
            return;
        }

        if let Err(error) = account::save(&self.account) {
            eprintln!("Failed to save account: {:?}", error);
        }
    }

    #[cfg(test)]
    fn account(&self) -> &UserAccount {
        &self.account
    }

    #[cfg(test)]
    fn profile_state(&self) -> &ProfileState {
        &self.profile
    }
}
