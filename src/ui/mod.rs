// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Follows the Elm-style "state down, messages up" pattern: the carousel
//! component owns its state and reports focus changes as effects.
//!
//! - [`carousel`] - Carousel component, view and timers
//! - [`styles`] - Centralized styling (navigation buttons, item frames)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod styles;
pub mod theming;
