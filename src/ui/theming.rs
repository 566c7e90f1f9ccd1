// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection with OS dark-mode detection.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// User-selectable theme mode, persisted in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode to a concrete Iced theme, consulting the OS
    /// preference for `System`.
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => {
                if matches!(dark_light::detect(), Ok(dark_light::Mode::Light)) {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        }
    }
}
