// SPDX-License-Identifier: MPL-2.0
//! Iced binding of the radial carousel.

pub mod component;
pub mod view;

pub use component::{Effect, Message, State};
pub use view::view;
