// SPDX-License-Identifier: MPL-2.0
//! Hex color domain type for carousel styling options.
//!
//! Colors are configured the way designers write them (`"CB786C"`,
//! `"#CB786CFF"`) and validated once, so styling code never has to deal
//! with malformed strings.

use crate::error::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// An sRGB color parsed from 6 (`RRGGBB`) or 8 (`RRGGBBAA`) hex digits.
///
/// # Example
///
/// ```
/// use iced_carousel::carousel::HexColor;
///
/// let color: HexColor = "#CB786C".parse().unwrap();
/// assert_eq!(color.to_hex(), "CB786C");
/// assert_eq!(color.alpha(), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl HexColor {
    /// Creates an opaque color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a hex string, accepting an optional leading `#`.
    ///
    /// Errors name the generic `color` field; use [`HexColor::parse_field`]
    /// to report the option the value came from.
    pub fn parse(value: &str) -> Result<Self, ConfigurationError> {
        Self::parse_field("color", value)
    }

    /// Like [`HexColor::parse`], reporting failures against `field`.
    pub fn parse_field(field: &'static str, value: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidColor {
            field,
            value: value.to_string(),
        };
        let digits = value.trim().trim_start_matches('#');

        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 255 },
        })
    }

    /// Returns the `RRGGBB` form, uppercase, without `#`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the `RRGGBBAA` form, uppercase, without `#`.
    #[must_use]
    pub fn to_hex_with_alpha(self) -> String {
        format!("{}{:02X}", self.to_hex(), self.a)
    }

    /// Returns the alpha channel (255 when parsed from 6 digits).
    #[must_use]
    pub fn alpha(self) -> u8 {
        self.a
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[must_use]
    pub fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for HexColor {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<HexColor> for iced::Color {
    fn from(color: HexColor) -> Self {
        iced::Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
    }
}
