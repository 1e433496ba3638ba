// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! Default values used by the Beacon widgets in their paint methods.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use vello::peniko::Color;

use crate::palette;

/// Minimum on-screen footprint of the LED indicator, in layout units.
pub const LED_MIN_SIZE: f64 = 24.0;

/// Side length of the logical coordinate space the LED is drawn in.
///
/// The paint transform maps this space onto the widget's actual footprint,
/// so the indicator scales uniformly with its size.
pub const LED_SCALED_SIZE: f64 = 1000.0;

// Gradient stops shared by the external and internal bevel borders.
pub const LED_BORDER_LIGHT: Color = Color::from_rgb8(224, 224, 224);
pub const LED_BORDER_DARK: Color = Color::from_rgb8(28, 28, 28);

/// Width of the outline pen around every LED fill, in logical units.
pub const LED_OUTLINE_WIDTH: f64 = 1.0;

pub const DEFAULT_SPINNER_COLOR: Color = palette::css::BLACK;
