// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a radial rotating carousel built with the Iced GUI
//! framework.
//!
//! Items sit evenly on a ring around a central focus slot. Rotating the ring
//! moves focus to the neighbouring item while every item stays upright. The
//! [`carousel`] module holds the toolkit-independent core (layout, focus
//! reducer, timers, border decoration); [`ui`] binds it to Iced and [`app`]
//! is a small demo viewer.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod icon;
pub mod ui;
