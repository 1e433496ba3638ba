// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! Miscellaneous utility functions.

use vello::Scene;
use vello::kurbo::{Affine, Join, Shape, Stroke};
use vello::peniko::{BrushRef, Color, Fill};

/// Panic in debug and `tracing::error` in release mode.
///
/// This macro is in some way a combination of `panic` and `debug_assert`,
/// but it will log the provided message instead of ignoring it in release builds.
///
/// It's useful when a backtrace would aid debugging but a crash can be avoided in release.
#[macro_export]
macro_rules! debug_panic {
    ($msg:expr$(,)?) => {
        if cfg!(debug_assertions) {
            panic!($msg);
        } else {
            tracing::error!($msg);
        }
    };
    ($fmt:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            tracing::error!($fmt, $($arg)*);
        }
    };
}

pub use crate::debug_panic;

// --- MARK: PAINT HELPERS

/// Helper function for [`Scene::stroke`].
///
/// The transform is passed explicitly so widgets can draw in a logical
/// coordinate space without relying on hidden painter state.
pub fn stroke<'b>(
    scene: &mut Scene,
    path: &impl Shape,
    transform: Affine,
    brush: impl Into<BrushRef<'b>>,
    stroke_width: f64,
) {
    // Using Join::Miter avoids rounding corners when a shape has a wide border.
    let style = Stroke {
        width: stroke_width,
        join: Join::Miter,
        ..Default::default()
    };
    scene.stroke(&style, transform, brush, None, path);
}

/// Helper function for [`Scene::fill`].
pub fn fill<'b>(
    scene: &mut Scene,
    path: &impl Shape,
    transform: Affine,
    brush: impl Into<BrushRef<'b>>,
) {
    scene.fill(Fill::NonZero, transform, brush, None, path);
}

/// Helper function for [`Scene::fill`] with a uniform color as the brush.
pub fn fill_color(scene: &mut Scene, path: &impl Shape, transform: Affine, color: Color) {
    scene.fill(Fill::NonZero, transform, color, None, path);
}

// ---

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};
