// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Geometry**: Ring and item radii, offset angle
//! - **Timing**: Auto-rotation interval and transition duration
//! - **Border**: Decorative dashed ring
//! - **Navigation**: Retreat/advance button styling
//! - **Presentation**: Focus scaling and item shadows

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Default angular offset applied to the initial layout (in degrees).
pub const DEFAULT_OFFSET_ANGLE_DEG: f32 = 0.0;

/// Default radius of the ring the peripheral items orbit on (in pixels).
pub const DEFAULT_RING_RADIUS: f32 = 400.0;

/// Default radius of the central focus slot (in pixels).
pub const DEFAULT_CENTRAL_ITEM_RADIUS: f32 = 125.0;

/// Default radius of each peripheral item (in pixels).
pub const DEFAULT_PERIPHERAL_ITEM_RADIUS: f32 = 75.0;

/// Inset of the central slot from the ring center (in pixels).
pub const CENTRAL_SLOT_INSET: f32 = 10.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-rotation interval in seconds (0 disables auto-rotation).
pub const DEFAULT_AUTO_ROTATE_INTERVAL_SECS: f32 = 0.0;

/// Default duration of the rotation animation in seconds.
pub const DEFAULT_TRANSITION_DURATION_SECS: f32 = 1.5;

/// Frame interval used while a rotation animation is running (~60 FPS).
pub const ANIMATION_FRAME_MILLIS: u64 = 16;

/// Polling interval of the auto-rotation tick while idle.
pub const AUTO_ROTATE_POLL_MILLIS: u64 = 100;

// ==========================================================================
// Border Defaults
// ==========================================================================

/// Whether the decorative dashed ring is drawn by default.
pub const DEFAULT_BORDER_ENABLED: bool = true;

/// Default stroke width of the decorative ring (in pixels).
pub const DEFAULT_BORDER_WIDTH: f32 = 5.0;

/// Default stroke color of the decorative ring (RGB hex, no `#`).
pub const DEFAULT_BORDER_COLOR: &str = "CB786C";

/// Dash pattern of the decorative ring: dash length, gap length.
pub const BORDER_DASH_PATTERN: (f32, f32) = (6.0, 24.0);

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Default radius of the navigation buttons (in pixels).
pub const DEFAULT_NAVIGATION_BUTTON_RADIUS: f32 = 32.5;

/// Default glyph color of the navigation buttons.
pub const DEFAULT_NAVIGATION_BUTTON_COLOR: &str = "FFFFFF";

/// Default background color of the navigation buttons.
pub const DEFAULT_NAVIGATION_BUTTON_BG_COLOR: &str = "CB786C";

/// Default glyph size of the navigation buttons (in rem).
pub const DEFAULT_NAVIGATION_TEXT_SIZE_REM: f32 = 2.0;

/// Pixels per rem when converting navigation text sizes.
pub const PIXELS_PER_REM: f32 = 16.0;

/// Horizontal shift of the navigation row, as a multiple of the button radius.
pub const NAVIGATION_MARGIN_FACTOR: f32 = 1.8;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Scale of the focused peripheral item.
pub const FOCUSED_ITEM_SCALE: f32 = 1.0;

/// Scale of every non-focused peripheral item.
pub const UNFOCUSED_ITEM_SCALE: f32 = 0.7;

/// Default item shadow: horizontal offset (in pixels).
pub const DEFAULT_SHADOW_OFFSET_X: f32 = 5.0;

/// Default item shadow: vertical offset (in pixels).
pub const DEFAULT_SHADOW_OFFSET_Y: f32 = 10.0;

/// Default item shadow: blur radius (in pixels).
pub const DEFAULT_SHADOW_BLUR: f32 = 18.0;

/// Default item shadow color.
pub const DEFAULT_SHADOW_COLOR: &str = "888888";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Geometry validation
    assert!(DEFAULT_RING_RADIUS > 0.0);
    assert!(DEFAULT_CENTRAL_ITEM_RADIUS > 0.0);
    assert!(DEFAULT_PERIPHERAL_ITEM_RADIUS > 0.0);
    assert!(DEFAULT_PERIPHERAL_ITEM_RADIUS < DEFAULT_RING_RADIUS);
    assert!(DEFAULT_CENTRAL_ITEM_RADIUS + CENTRAL_SLOT_INSET < DEFAULT_RING_RADIUS);

    // Timing validation
    assert!(DEFAULT_AUTO_ROTATE_INTERVAL_SECS >= 0.0);
    assert!(DEFAULT_TRANSITION_DURATION_SECS >= 0.0);
    assert!(ANIMATION_FRAME_MILLIS > 0);
    assert!(AUTO_ROTATE_POLL_MILLIS >= ANIMATION_FRAME_MILLIS);

    // Border validation
    assert!(DEFAULT_BORDER_WIDTH >= 0.0);
    assert!(BORDER_DASH_PATTERN.0 > 0.0);
    assert!(BORDER_DASH_PATTERN.1 > 0.0);

    // Navigation validation
    assert!(DEFAULT_NAVIGATION_BUTTON_RADIUS > 0.0);
    assert!(DEFAULT_NAVIGATION_TEXT_SIZE_REM > 0.0);
    assert!(PIXELS_PER_REM > 0.0);

    // Presentation validation
    assert!(UNFOCUSED_ITEM_SCALE > 0.0);
    assert!(UNFOCUSED_ITEM_SCALE < FOCUSED_ITEM_SCALE);
    assert!(DEFAULT_SHADOW_BLUR >= 0.0);
};
