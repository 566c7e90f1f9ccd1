// SPDX-License-Identifier: MPL-2.0
//! View rendering for the profile screen.

use super::{Message, State};
use crate::account::UserAccount;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::styles::container as container_styles;
use fluent_bundle::FluentArgs;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{Family, Weight};
use iced::widget::{button, container, rule, scrollable, text, text_input, Column, Row, Space};
use iced::{Element, Font, Length};
use unic_langid::LanguageIdentifier;

/// Masked rendering of the security PIN; the real value never reaches
/// this screen.
const PIN_MASK: &str = "****";

const HEADING_LATIN: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

const HEADING_BENGALI: Font = Font {
    family: Family::Name("Noto Sans Bengali"),
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Contextual data needed to render the profile screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub account: &'a UserAccount,
}

/// Render the profile screen.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = header_card(state, &ctx);

    let sidebar = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(5))
        .push(service_card(&ctx))
        .push(pin_card(&ctx));

    let grid = Row::new()
        .spacing(spacing::MD)
        .push(container(connectivity_card(state, &ctx)).width(Length::FillPortion(7)))
        .push(sidebar);

    let page = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(grid);

    let sheet = container(page)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(spacing::LG);

    let centered = container(sheet)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    scrollable(centered).into()
}

/// Identity header: avatar, verified badge, name heading, network-ID line,
/// and the manage/cancel toggle.
fn header_card<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let account = ctx.account;
    let locale = ctx.i18n.current_locale();

    let initial = account.name.chars().next().unwrap_or('•');
    let avatar = container(text(initial.to_string()).size(typography::TITLE_LG))
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(container_styles::avatar);

    let badge = text(ctx.i18n.tr("profile-verified-badge"))
        .size(typography::CAPTION)
        .color(palette::PRIMARY_600);

    let heading = text(heading_label(&account.name, locale))
        .size(typography::TITLE_LG)
        .font(heading_font(locale));

    let mut args = FluentArgs::new();
    args.set("suffix", format!("{:05}", state.network_suffix()));
    let network_line = text(ctx.i18n.tr_args("profile-network-id", &args))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let toggle_key = if state.is_editing() {
        "profile-cancel"
    } else {
        "profile-manage-account"
    };
    let toggle = button(text(ctx.i18n.tr(toggle_key)).size(typography::BODY))
        .on_press(Message::ToggleEditMode)
        .style(button_styles::secondary)
        .padding([spacing::SM, spacing::LG]);

    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(badge)
        .push(heading)
        .push(network_line);

    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(avatar)
        .push(identity)
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    container(row)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(container_styles::card)
        .into()
}

/// The contact section: read-only tiles, or the edit form while editing.
fn connectivity_card<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("profile-connectivity-title"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let body: Element<'a, Message> = if state.is_editing() {
        edit_form(state)
    } else {
        contact_tiles(ctx)
    };

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(container_styles::card)
    .into()
}

fn contact_tiles<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(contact_tile(
            ctx.i18n.tr("profile-primary-email"),
            ctx.account.email.as_str(),
        ))
        .push(contact_tile(
            ctx.i18n.tr("profile-mobile-network"),
            ctx.account.phone.as_str(),
        ))
        .into()
}

fn contact_tile<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::CAPTION).color(palette::GRAY_400))
        .push(text(value).size(typography::BODY));

    container(inner)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(container_styles::tile)
        .into()
}

/// Edit form with the two contact inputs and the save button.
///
/// The form copy is English-only while the rest of the screen is
/// translated.
// TODO: route these labels through Fluent once translations exist.
fn edit_form<'a>(state: &'a State) -> Element<'a, Message> {
    let save = button(text("Save Profile Changes").size(typography::BODY))
        .on_press(Message::SaveProfile)
        .style(button_styles::primary)
        .width(Length::Fill)
        .padding(spacing::SM);

    Column::new()
        .spacing(spacing::MD)
        .push(edit_field(
            "Display Name",
            &state.draft().name,
            Message::NameChanged,
        ))
        .push(edit_field(
            "Email Endpoint",
            &state.draft().email,
            Message::EmailChanged,
        ))
        .push(save)
        .into()
}

fn edit_field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let input = text_input("", value)
        .on_input(on_input)
        .padding(spacing::SM)
        .size(typography::BODY);

    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::CAPTION).color(palette::GRAY_400))
        .push(input)
        .into()
}

/// Service sidebar: active package, renewal date, renew button.
fn service_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let badge = container(text(ctx.i18n.tr("profile-active-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(container_styles::status_badge);

    let badge_row = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(badge);

    let service = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(ctx.i18n.tr("profile-current-service"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(
            text(ctx.account.active_package.as_str())
                .size(typography::TITLE_MD)
                .font(HEADING_LATIN),
        );

    let renewal = Row::new()
        .align_y(Vertical::Center)
        .push(
            text(ctx.i18n.tr("profile-renewal-date"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(Space::new().width(Length::Fill))
        .push(text(ctx.account.expiry_date.as_str()).size(typography::BODY));

    let renew = button(text(ctx.i18n.tr("profile-renew-button")).size(typography::BODY))
        .on_press(Message::RenewRequested)
        .style(button_styles::primary)
        .width(Length::Fill)
        .padding(spacing::SM);

    let inner = Column::new()
        .spacing(spacing::MD)
        .push(badge_row)
        .push(service)
        .push(rule::horizontal(1))
        .push(renewal)
        .push(renew);

    container(inner)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(container_styles::service_panel)
        .into()
}

/// Masked security PIN row.
fn pin_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .align_y(Vertical::Center)
        .push(text(ctx.i18n.tr("profile-security-pin")).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(text(PIN_MASK).size(typography::BODY).font(HEADING_LATIN));

    container(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(container_styles::card)
        .into()
}

/// The name heading follows the display language: Bengali keeps the name
/// as written in its own script, Latin locales render it uppercased.
fn heading_label(name: &str, locale: &LanguageIdentifier) -> String {
    if is_bengali(locale) {
        name.to_string()
    } else {
        name.to_uppercase()
    }
}

fn heading_font(locale: &LanguageIdentifier) -> Font {
    if is_bengali(locale) {
        HEADING_BENGALI
    } else {
        HEADING_LATIN
    }
}

fn is_bengali(locale: &LanguageIdentifier) -> bool {
    locale.language.as_str() == "bn"
}
