// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Rounded card surface used for the header and contact sections.
///
/// Colors derive from the active Iced `Theme` so cards stay readable in
/// both light and dark modes without hard-coding surfaces.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: extended.background.weak.color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        ..Default::default()
    }
}

/// Inset tile inside a card (one contact entry).
pub fn tile(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The service sidebar panel. Deliberately dark in both themes, like the
/// portal's subscription card.
pub fn service_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        ..Default::default()
    }
}

/// Pill badge for the service status.
pub fn status_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.15,
            ..palette::SUCCESS_500
        })),
        text_color: Some(palette::SUCCESS_500),
        border: Border {
            color: Color {
                a: 0.3,
                ..palette::SUCCESS_500
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Tinted square behind the subscriber initial in the header.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.08,
            ..palette::PRIMARY_600
        })),
        text_color: Some(palette::PRIMARY_600),
        border: Border {
            color: Color {
                a: 0.15,
                ..palette::PRIMARY_600
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
