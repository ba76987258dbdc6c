// SPDX-License-Identifier: MPL-2.0
//! Ring layout engine.
//!
//! Places N items evenly on a circle and rigidly rotates the whole ring by
//! the configured offset plus a quarter turn, so item 0 starts at the top of
//! the ring.
//!
//! Coordinates are offsets inside the `2R × 2R` ring box: `x` grows from the
//! left edge and `y` grows from the **bottom** edge. Renderers with a top-left
//! origin convert with [`RingPoint::to_top_left`].

use crate::error::ConfigurationError;
use std::f32::consts::TAU;
use std::num::NonZeroUsize;

/// Number of items in a carousel, guaranteed to be at least one.
///
/// Holding an `ItemCount` proves the angular step `360 / N` is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemCount(NonZeroUsize);

impl ItemCount {
    /// Returns `None` for zero items.
    #[must_use]
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    /// Returns the count.
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Angular distance between neighbouring items, in degrees.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step_degrees(self) -> f32 {
        360.0 / self.get() as f32
    }
}

impl TryFrom<usize> for ItemCount {
    type Error = ConfigurationError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::new(count).ok_or(ConfigurationError::NoItems)
    }
}

/// A position inside the ring box (bottom-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingPoint {
    pub x: f32,
    pub y: f32,
}

impl RingPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts a bottom-left anchored box of `box_size` to a top-left origin.
    #[must_use]
    pub fn to_top_left(self, ring_diameter: f32, box_size: f32) -> iced::Point {
        iced::Point::new(self.x, ring_diameter - self.y - box_size)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: RingPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Ring geometry shared by the layout and the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Radius of the circle the item anchors lie on.
    pub ring_radius: f32,
    /// Radius of each peripheral item.
    pub item_radius: f32,
    /// Extra rotation of the initial layout, in degrees.
    pub offset_angle: f32,
}

impl RingGeometry {
    /// Center of the local frame: `(R − r, R − r)`.
    #[must_use]
    pub fn center(&self) -> RingPoint {
        let c = self.ring_radius - self.item_radius;
        RingPoint::new(c, c)
    }

    /// Side of the square ring box.
    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.ring_radius * 2.0
    }

    /// Total rigid rotation applied to the base layout, in degrees.
    #[must_use]
    pub fn total_deviation_degrees(&self) -> f32 {
        self.offset_angle + 90.0
    }
}

/// Cached item positions for one configuration.
///
/// Positions are computed once; navigation only rotates the ring as a whole,
/// see [`RingLayout::rotated`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    geometry: RingGeometry,
    positions: Vec<RingPoint>,
}

impl RingLayout {
    /// Lays out `count` items on the ring.
    #[must_use]
    pub fn new(geometry: RingGeometry, count: ItemCount) -> Self {
        let center = geometry.center();
        let deviation = geometry.total_deviation_degrees();

        let positions = base_angles(count)
            .map(|angle| {
                let anchor = RingPoint::new(
                    center.x + geometry.ring_radius * angle.cos(),
                    center.y + geometry.ring_radius * angle.sin(),
                );
                rotate_about(anchor, center, deviation)
            })
            .collect();

        Self {
            geometry,
            positions,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn positions(&self) -> &[RingPoint] {
        &self.positions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions after the whole ring turned by `ring_rotation` degrees.
    ///
    /// Positive angles turn clockwise on screen, matching a CSS `rotate()`
    /// on the ring container. In the bottom-left frame of [`RingPoint`] that
    /// is a negative mathematical rotation about the layout center.
    pub fn rotated(&self, ring_rotation: f32) -> impl Iterator<Item = RingPoint> + '_ {
        let pivot = self.geometry.center();
        self.positions
            .iter()
            .map(move |point| rotate_about(*point, pivot, -ring_rotation))
    }
}

/// Base angles `2π·i/N` in radians, for `i in 0..N`.
#[allow(clippy::cast_precision_loss)]
pub fn base_angles(count: ItemCount) -> impl Iterator<Item = f32> {
    let n = count.get();
    (0..n).map(move |i| TAU * i as f32 / n as f32)
}

/// Rotates `point` about `center` by `degrees` (counter-clockwise in a
/// y-up frame), using the standard 2D rotation matrix.
#[must_use]
pub fn rotate_about(point: RingPoint, center: RingPoint, degrees: f32) -> RingPoint {
    let theta = degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;

    RingPoint::new(
        center.x + dx * cos - dy * sin,
        center.y + dx * sin + dy * cos,
    )
}

/// Computes item positions for a raw item count.
///
/// Returns [`ConfigurationError::NoItems`] instead of NaN coordinates when
/// `count` is zero.
pub fn compute_positions(
    count: usize,
    ring_radius: f32,
    item_radius: f32,
    offset_angle: f32,
) -> Result<Vec<RingPoint>, ConfigurationError> {
    let count = ItemCount::try_from(count)?;
    let geometry = RingGeometry {
        ring_radius,
        item_radius,
        offset_angle,
    };
    Ok(RingLayout::new(geometry, count).positions)
}
