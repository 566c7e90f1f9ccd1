// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, shared styles, theming, and the profile screen.

pub mod design_tokens;
pub mod profile;
pub mod styles;
pub mod theming;
