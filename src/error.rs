// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    InvalidConfiguration(ConfigurationError),
}

/// Reasons a carousel configuration is rejected at construction.
///
/// Every variant is a precondition violation: the carousel refuses to build
/// rather than letting undefined geometry (NaN positions, zero-item angular
/// steps) reach the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The item list is empty, so the angular step `360 / N` is undefined.
    NoItems,

    /// A radius is not a finite, strictly positive number, or is too large
    /// for the widget to be laid out.
    InvalidRadius { field: &'static str, value: f32 },

    /// The offset angle is not finite.
    InvalidAngle(f32),

    /// A duration is negative, not finite, or too long for a timer.
    InvalidDuration { field: &'static str, value: f32 },

    /// The border stroke width is negative or not finite.
    InvalidBorderWidth(f32),

    /// A color string is not 6 or 8 hexadecimal digits.
    InvalidColor { field: &'static str, value: String },

    /// A shadow is not of the form `<x>px <y>px <blur>px #RRGGBB`.
    InvalidShadow { field: &'static str, value: String },
}

impl ConfigurationError {
    /// Returns the name of the offending option, as used in `settings.toml`.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigurationError::NoItems => "items",
            ConfigurationError::InvalidRadius { field, .. } => *field,
            ConfigurationError::InvalidAngle(_) => "offset_angle",
            ConfigurationError::InvalidDuration { field, .. } => *field,
            ConfigurationError::InvalidBorderWidth(_) => "border_width",
            ConfigurationError::InvalidColor { field, .. } => *field,
            ConfigurationError::InvalidShadow { field, .. } => *field,
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::NoItems => write!(f, "carousel needs at least one item"),
            ConfigurationError::InvalidRadius { field, value } => {
                write!(
                    f,
                    "{} must be a positive number the layout can hold, got {}",
                    field, value
                )
            }
            ConfigurationError::InvalidAngle(value) => {
                write!(f, "offset_angle must be finite, got {}", value)
            }
            ConfigurationError::InvalidDuration { field, value } => {
                write!(f, "{} must be a zero or positive number of seconds, got {}", field, value)
            }
            ConfigurationError::InvalidBorderWidth(value) => {
                write!(f, "border_width must be zero or positive, got {}", value)
            }
            ConfigurationError::InvalidColor { field, value } => {
                write!(f, "{} is not a hex color: {:?}", field, value)
            }
            ConfigurationError::InvalidShadow { field, value } => {
                write!(f, "{} is not a shadow: {:?}", field, value)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidConfiguration(e) => write!(f, "Invalid Carousel Configuration: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidConfiguration(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Error::InvalidConfiguration(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<resvg::usvg::Error> for Error {
    fn from(err: resvg::usvg::Error) -> Self {
        Error::Svg(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
