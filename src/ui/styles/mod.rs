// SPDX-License-Identifier: MPL-2.0
//! Centralized styles of the carousel widgets.

pub mod button;
pub mod container;

pub use button::navigation as button_navigation;
