// SPDX-License-Identifier: MPL-2.0
//! Radial carousel core.
//!
//! Everything here is independent of the rendering toolkit apart from a few
//! `From` conversions into Iced value types:
//!
//! - [`layout`] places `N` items evenly on a ring.
//! - [`state`] is the focus/rotation reducer.
//! - [`auto_rotate`] schedules periodic `RotateRight` events.
//! - [`observer`] delivers focus changes to subscribers.
//! - [`presentation`] and [`border`] map state and options to visuals.
//!
//! # Example
//!
//! ```
//! use iced_carousel::carousel::{CarouselItem, CarouselOptions, CarouselState, RotationEvent};
//!
//! let items = vec![
//!     CarouselItem::content("Mercury", "First planet"),
//!     CarouselItem::content("Venus", "Second planet"),
//!     CarouselItem::content("Earth", "Third planet"),
//! ];
//! let config = CarouselOptions::default().build(items)?;
//!
//! let state = CarouselState::default().apply(RotationEvent::RotateLeft, config.item_count());
//! assert_eq!(state.focus_index().get(), 2);
//! # Ok::<(), iced_carousel::error::ConfigurationError>(())
//! ```

pub mod animation;
pub mod auto_rotate;
pub mod border;
pub mod color;
pub mod item;
pub mod layout;
pub mod observer;
pub mod options;
pub mod presentation;
pub mod state;

pub use animation::RingAnimation;
pub use auto_rotate::{AutoRotateSchedule, AutoRotator};
pub use border::{border_data_uri, border_svg, BorderDecoration};
pub use color::HexColor;
pub use item::CarouselItem;
pub use layout::{compute_positions, ItemCount, RingGeometry, RingLayout, RingPoint};
pub use observer::{FocusObserver, FocusObservers, SubscriptionId};
pub use options::{
    BorderStyle, CarouselConfiguration, CarouselOptions, NavigationStyle, ShadowStyle,
};
pub use presentation::{CentralContent, CentralSlot, ItemVisual, NavigationLayout};
pub use state::{CarouselState, FocusIndex, RotationEvent};
