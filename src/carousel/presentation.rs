// SPDX-License-Identifier: MPL-2.0
//! State + configuration → visual attributes.
//!
//! Deterministic mapping with no invariants beyond "matches the current
//! state". Renderers (the Iced view, or any other host) consume these values
//! instead of re-deriving sizes and offsets themselves.

use super::item::CarouselItem;
use super::layout::RingPoint;
use super::options::CarouselConfiguration;
use super::state::{CarouselState, FocusIndex};
use crate::config::defaults::{
    CENTRAL_SLOT_INSET, FOCUSED_ITEM_SCALE, NAVIGATION_MARGIN_FACTOR, UNFOCUSED_ITEM_SCALE,
};

/// Visual attributes of one orbiting item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    pub index: usize,
    /// Bottom-left corner of the item box inside the ring box, before the
    /// ring rotation is applied.
    pub position: RingPoint,
    /// Side of the unscaled item box (`2r`).
    pub size: f32,
    /// `1.0` for the focused item, `0.7` otherwise.
    pub scale: f32,
    /// Rotation applied to the item content so it stays upright, in degrees.
    pub counter_rotation: f32,
    pub focused: bool,
}

impl ItemVisual {
    /// Side of the item box after scaling.
    #[must_use]
    pub fn scaled_size(&self) -> f32 {
        self.size * self.scale
    }

    /// Net orientation of the content on screen: ring plus counter rotation.
    #[must_use]
    pub fn net_orientation(&self, ring_rotation: f32) -> f32 {
        ring_rotation + self.counter_rotation
    }
}

/// What the central slot displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralContent<'a> {
    Image(&'a std::path::Path),
    Caption {
        title: &'a str,
        description: &'a str,
    },
}

/// The central focus slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralSlot<'a> {
    /// Bottom-left corner inside the ring box.
    pub origin: RingPoint,
    /// Side of the slot box (`2r_c`).
    pub size: f32,
    pub content: CentralContent<'a>,
}

/// Placement of the navigation row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLayout {
    pub visible: bool,
    /// Horizontal gap between the two buttons (ring diameter).
    pub gap: f32,
    /// Leftward shift of the row.
    pub margin_left: f32,
    pub button_size: f32,
    pub text_size: f32,
}

/// Scale of the item at `index` under `focus`.
#[must_use]
pub fn item_scale(index: usize, focus: FocusIndex) -> f32 {
    if index == focus.get() {
        FOCUSED_ITEM_SCALE
    } else {
        UNFOCUSED_ITEM_SCALE
    }
}

/// Visuals of every orbiting item, in item order.
pub fn item_visuals<'a>(
    config: &'a CarouselConfiguration,
    state: &'a CarouselState,
) -> impl Iterator<Item = ItemVisual> + 'a {
    let size = config.peripheral_item_radius() * 2.0;
    let focus = state.focus_index();

    config
        .layout()
        .positions()
        .iter()
        .enumerate()
        .map(move |(index, position)| ItemVisual {
            index,
            position: *position,
            size,
            scale: item_scale(index, focus),
            counter_rotation: state.item_counter_rotation(),
            focused: index == focus.get(),
        })
}

/// Bottom-left corner of the central slot: `R − r_c − inset` on both axes.
#[must_use]
pub fn central_slot_origin(ring_radius: f32, central_item_radius: f32) -> RingPoint {
    let offset = ring_radius - central_item_radius - CENTRAL_SLOT_INSET;
    RingPoint::new(offset, offset)
}

/// The central slot for the focused item.
#[must_use]
pub fn central_slot<'a>(
    config: &'a CarouselConfiguration,
    state: &CarouselState,
) -> CentralSlot<'a> {
    // FocusIndex is kept in range by the reducer, the fallback only guards
    // against a state paired with a different configuration.
    let items = config.items();
    let item = items
        .get(state.focus_index().get())
        .unwrap_or(&items[0]);

    let content = match item {
        CarouselItem::Image(path) => CentralContent::Image(path),
        CarouselItem::Content { title, description } => CentralContent::Caption {
            title,
            description,
        },
    };

    CentralSlot {
        origin: central_slot_origin(config.ring_radius(), config.central_item_radius()),
        size: config.central_item_radius() * 2.0,
        content,
    }
}

/// Navigation row placement. Hidden while auto-rotation drives the carousel.
#[must_use]
pub fn navigation_layout(config: &CarouselConfiguration) -> NavigationLayout {
    let navigation = config.navigation();
    NavigationLayout {
        visible: config.auto_rotate_interval().is_none(),
        gap: config.ring_radius() * 2.0,
        margin_left: navigation.button_radius * NAVIGATION_MARGIN_FACTOR,
        button_size: navigation.button_diameter(),
        text_size: navigation.text_size_px(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselOptions, ItemCount, RotationEvent};
    use std::path::Path;

    fn config(items: Vec<CarouselItem>) -> CarouselConfiguration {
        CarouselOptions::default().build(items).unwrap()
    }

    fn images(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::image(format!("img{i}.png")))
            .collect()
    }

    #[test]
    fn only_focused_item_is_full_scale() {
        let config = config(images(4));
        let count = ItemCount::new(4).unwrap();
        let state = CarouselState::default().apply(RotationEvent::RotateRight, count);

        let visuals: Vec<ItemVisual> = item_visuals(&config, &state).collect();
        assert_eq!(visuals.len(), 4);
        for visual in &visuals {
            if visual.index == 1 {
                assert!(visual.focused);
                assert_eq!(visual.scale, 1.0);
                assert_eq!(visual.scaled_size(), 150.0);
            } else {
                assert!(!visual.focused);
                assert_eq!(visual.scale, 0.7);
            }
        }
    }

    #[test]
    fn items_stay_upright() {
        let config = config(images(5));
        let count = ItemCount::new(5).unwrap();
        let state = CarouselState::default()
            .apply(RotationEvent::RotateRight, count)
            .apply(RotationEvent::RotateRight, count);

        for visual in item_visuals(&config, &state) {
            assert_eq!(visual.net_orientation(state.ring_rotation()), 0.0);
        }
    }

    #[test]
    fn central_slot_shows_focused_image() {
        let config = config(images(3));
        let count = ItemCount::new(3).unwrap();
        let state = CarouselState::default().apply(RotationEvent::RotateLeft, count);

        let slot = central_slot(&config, &state);
        assert_eq!(slot.content, CentralContent::Image(Path::new("img2.png")));
        assert_eq!(slot.size, 250.0);
        assert_eq!(slot.origin, RingPoint::new(265.0, 265.0));
    }

    #[test]
    fn central_slot_shows_caption_for_content() {
        let config = config(vec![
            CarouselItem::content("Alpha", "First"),
            CarouselItem::content("Beta", "Second"),
        ]);
        let slot = central_slot(&config, &CarouselState::default());
        assert_eq!(
            slot.content,
            CentralContent::Caption {
                title: "Alpha",
                description: "First"
            }
        );
    }

    #[test]
    fn navigation_is_hidden_during_auto_rotation() {
        let manual = config(images(2));
        let layout = navigation_layout(&manual);
        assert!(layout.visible);
        assert_eq!(layout.gap, 800.0);
        assert_eq!(layout.margin_left, 32.5 * 1.8);
        assert_eq!(layout.button_size, 65.0);
        assert_eq!(layout.text_size, 32.0);

        let auto = CarouselOptions {
            auto_rotate_interval_secs: 3.0,
            ..CarouselOptions::default()
        }
        .build(images(2))
        .unwrap();
        assert!(!navigation_layout(&auto).visible);
    }
}
