// SPDX-License-Identifier: MPL-2.0
//! `goti_desk` is a subscriber self-care portal for the GOTI fiber network,
//! built with the Iced GUI framework.
//!
//! It renders a single profile screen (identity header, editable contact
//! fields, service summary) and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

pub mod account;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
