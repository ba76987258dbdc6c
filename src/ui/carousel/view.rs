// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering.
//!
//! The widget is a square canvas of side `2R + 2r`: the ring box of the
//! layout engine inset by the peripheral item radius, so items sitting on
//! the ring edge are never clipped. Every layer is a full-canvas container
//! whose padding places its content.

use super::component::{Message, State};
use crate::carousel::presentation::{self, CentralContent, ItemVisual};
use crate::carousel::{CarouselItem, RingPoint};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, svg, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding, Point,
};
use std::time::Instant;

/// Canvas-space geometry derived from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMetrics {
    /// Side of the ring box (`2R`).
    pub ring_diameter: f32,
    /// Inset of the ring box inside the canvas (`r`).
    pub inset: f32,
    /// Width reserved on each side for a navigation button.
    pub gutter: f32,
}

impl CanvasMetrics {
    #[must_use]
    pub fn new(state: &State) -> Self {
        let config = state.config();
        let navigation = presentation::navigation_layout(config);
        Self {
            ring_diameter: config.ring_radius() * 2.0,
            inset: config.peripheral_item_radius(),
            gutter: navigation.button_size + navigation.margin_left,
        }
    }

    /// Side of the square canvas holding the ring.
    #[must_use]
    pub fn canvas_size(&self) -> f32 {
        self.ring_diameter + self.inset * 2.0
    }

    /// Full widget width, navigation gutters included.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.canvas_size() + self.gutter * 2.0
    }

    /// Horizontal offset of the ring box from the widget's left edge.
    #[must_use]
    pub fn ring_left(&self) -> f32 {
        self.gutter + self.inset
    }

    /// Top-left canvas point of a box of `size` whose bottom-left corner is
    /// `point` in ring coordinates.
    #[must_use]
    pub fn place(&self, point: RingPoint, size: f32) -> Point {
        let top_left = point.to_top_left(self.ring_diameter, size);
        Point::new(top_left.x + self.inset, top_left.y + self.inset)
    }
}

/// Top-left canvas point of a scaled item, kept centered on its slot.
#[must_use]
pub fn item_origin(metrics: &CanvasMetrics, position: RingPoint, visual: &ItemVisual) -> Point {
    let slot = metrics.place(position, visual.size);
    let shrink = (visual.size - visual.scaled_size()) / 2.0;
    Point::new(slot.x + shrink, slot.y + shrink)
}

fn positioned<'a>(
    content: impl Into<Element<'a, Message>>,
    origin: Point,
    canvas: f32,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fixed(canvas))
        .height(Length::Fixed(canvas))
        .padding(Padding {
            top: origin.y.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: origin.x.max(0.0),
        })
        .into()
}

fn ring_item_content<'a>(item: &'a CarouselItem, size: f32) -> Element<'a, Message> {
    match item {
        CarouselItem::Image(path) => image::Image::new(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        CarouselItem::Content { title, .. } => Container::new(
            Text::new(title.as_str()).size(typography::RING_LABEL),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .padding(spacing::XXS)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    }
}

fn central_content<'a>(content: CentralContent<'a>, size: f32) -> Element<'a, Message> {
    match content {
        CentralContent::Image(path) => image::Image::new(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        CentralContent::Caption { title, description } => {
            let caption = Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(Text::new(title).size(typography::CAPTION_TITLE))
                .push(Text::new(description).size(typography::CAPTION_BODY));

            Container::new(caption)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .padding(spacing::LG)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
        }
    }
}

fn navigation_row<'a>(state: &'a State, metrics: &CanvasMetrics) -> Element<'a, Message> {
    let config = state.config();
    let layout = presentation::navigation_layout(config);
    let style = *config.navigation();

    let nav_button = |glyph: &'static str, message: Message| -> Element<'a, Message> {
        button(
            Container::new(Text::new(glyph).size(layout.text_size))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(layout.button_size))
        .height(Length::Fixed(layout.button_size))
        .padding(0)
        .style(styles::button_navigation(style))
        .on_press(message)
        .into()
    };

    // The row starts `margin_left` before the ring box and keeps its size
    // when hidden.
    let row: Element<'a, Message> = if layout.visible {
        Row::new()
            .align_y(Vertical::Center)
            .push(nav_button("‹", Message::RotateLeft))
            .push(Space::new().width(Length::Fixed(layout.gap)))
            .push(nav_button("›", Message::RotateRight))
            .into()
    } else {
        Space::new()
            .width(Length::Fixed(layout.gap + layout.button_size * 2.0))
            .height(Length::Fixed(layout.button_size))
            .into()
    };

    Container::new(row)
        .width(Length::Fixed(metrics.width()))
        .height(Length::Fixed(metrics.canvas_size()))
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: metrics.ring_left() - layout.margin_left,
        })
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .into()
}

/// Renders the carousel as drawn at `now`.
pub fn view(state: &State, now: Instant) -> Element<'_, Message> {
    let config = state.config();
    let metrics = CanvasMetrics::new(state);
    let canvas = metrics.canvas_size();

    let mut ring = Stack::new()
        .width(Length::Fixed(canvas))
        .height(Length::Fixed(canvas));

    if let Some(handle) = state.border_handle() {
        let border = svg::Svg::new(handle.clone())
            .width(Length::Fixed(metrics.ring_diameter))
            .height(Length::Fixed(metrics.ring_diameter));
        ring = ring.push(positioned(
            border,
            Point::new(metrics.inset, metrics.inset),
            canvas,
        ));
    }

    let shadow = config.peripheral_shadow();
    let highlight = config.focus_highlight().map(iced::Color::from);
    let rotated = config.layout().rotated(state.displayed_rotation(now));

    for (visual, position) in presentation::item_visuals(config, state.carousel()).zip(rotated) {
        let size = visual.scaled_size();
        let item = &config.items()[visual.index];

        let framed = Container::new(ring_item_content(item, size))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .clip(true)
            .style(styles::container::ring_item(shadow, highlight, visual.focused));

        let clickable = button(framed)
            .padding(0)
            .style(styles::button::ring_item)
            .on_press(Message::FocusItem(visual.index));

        ring = ring.push(positioned(
            clickable,
            item_origin(&metrics, position, &visual),
            canvas,
        ));
    }

    let slot = presentation::central_slot(config, state.carousel());
    let central = Container::new(central_content(slot.content, slot.size))
        .width(Length::Fixed(slot.size))
        .height(Length::Fixed(slot.size))
        .clip(true)
        .style(styles::container::central_slot(config.central_shadow()));
    ring = ring.push(positioned(
        central,
        metrics.place(slot.origin, slot.size),
        canvas,
    ));

    let centered_ring = Container::new(ring)
        .width(Length::Fixed(metrics.width()))
        .height(Length::Fixed(canvas))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .push(centered_ring)
        .push(navigation_row(state, &metrics))
        .into()
}
