// SPDX-License-Identifier: MPL-2.0
//! Decorative dashed ring.
//!
//! The ring is an SVG rounded rectangle whose corner radius exceeds half its
//! size, which renders as a circle. Everything here is a pure function of
//! `(ring_radius, width, color)`.

use super::color::HexColor;
use super::options::{BorderStyle, CarouselConfiguration};
use crate::config::defaults::BORDER_DASH_PATTERN;
use crate::error::{Error, Result};
use resvg::usvg;

/// Parameters of the dashed ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderDecoration {
    pub ring_radius: f32,
    pub width: f32,
    pub color: HexColor,
}

impl BorderDecoration {
    #[must_use]
    pub fn new(ring_radius: f32, style: &BorderStyle) -> Self {
        Self {
            ring_radius,
            width: style.width,
            color: style.color,
        }
    }

    /// Returns `None` when the border is disabled.
    #[must_use]
    pub fn for_configuration(config: &CarouselConfiguration) -> Option<Self> {
        config
            .border()
            .enabled
            .then(|| Self::new(config.ring_radius(), config.border()))
    }

    /// Side of the square the ring is drawn in.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.ring_radius * 2.0
    }

    /// Standalone SVG document of the ring.
    #[must_use]
    pub fn svg(&self) -> String {
        let size = self.size();
        let corner = self.ring_radius * 2.0;
        let (dash, gap) = BORDER_DASH_PATTERN;
        format!(
            "<svg width='{size}' height='{size}' xmlns='http://www.w3.org/2000/svg'>\
             <rect width='{size}' height='{size}' fill='none' rx='{corner}' ry='{corner}' \
             stroke='#{color}' stroke-opacity='{opacity}' stroke-width='{width}' \
             stroke-dasharray='{dash}, {gap}' stroke-dashoffset='0' stroke-linecap='square'/></svg>",
            color = self.color.to_hex(),
            opacity = f32::from(self.color.alpha()) / 255.0,
            width = self.width,
        )
    }

    /// The SVG as a `data:image/svg+xml` URI, for hosts that take CSS-like
    /// background images.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml,{}", percent_encode(&self.svg()))
    }

    /// `url("…")` wrapper of [`Self::data_uri`].
    #[must_use]
    pub fn css_background(&self) -> String {
        format!("url(\"{}\")", self.data_uri())
    }

    /// Rasterizes the ring into a `target × target` RGBA buffer.
    pub fn rasterize(&self, target: u32) -> Result<Vec<u8>> {
        let tree = usvg::Tree::from_str(&self.svg(), &usvg::Options::default())?;

        let orig_size = tree.size();
        #[allow(clippy::cast_precision_loss)]
        let transform = tiny_skia::Transform::from_scale(
            target as f32 / orig_size.width(),
            target as f32 / orig_size.height(),
        );

        let mut pixmap = tiny_skia::Pixmap::new(target, target)
            .ok_or_else(|| Error::Svg(format!("cannot allocate {target}x{target} pixmap")))?;
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap.data().to_vec())
    }
}

/// SVG document of a dashed ring of `ring_radius` drawn with `width` and `color`.
#[must_use]
pub fn border_svg(ring_radius: f32, width: f32, color: HexColor) -> String {
    BorderDecoration {
        ring_radius,
        width,
        color,
    }
    .svg()
}

/// Percent-encoded data URI form of [`border_svg`].
#[must_use]
pub fn border_data_uri(ring_radius: f32, width: f32, color: HexColor) -> String {
    BorderDecoration {
        ring_radius,
        width,
        color,
    }
    .data_uri()
}

/// Escapes the characters that break an unquoted SVG data URI.
fn percent_encode(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len() + svg.len() / 4);
    for ch in svg.chars() {
        match ch {
            '%' => encoded.push_str("%25"),
            '<' => encoded.push_str("%3c"),
            '>' => encoded.push_str("%3e"),
            '#' => encoded.push_str("%23"),
            ',' => encoded.push_str("%2c"),
            '"' => encoded.push_str("%22"),
            _ => encoded.push(ch),
        }
    }
    encoded
}
