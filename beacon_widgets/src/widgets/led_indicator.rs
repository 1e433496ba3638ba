// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use tracing::{Span, trace, trace_span};
use vello::Scene;
use vello::kurbo::{Affine, Circle, Point, Size};
use vello::peniko::{Color, Gradient};

use crate::core::{PaintCtx, UpdateCtx, Widget, WidgetId, WidgetMut};
use crate::palette;
use crate::theme;
use crate::util::{fill, stroke};

/// The four gradient stops an LED palette provides.
#[derive(Clone, Copy, PartialEq)]
pub struct LedColors {
    /// Inner stop of the lit face.
    pub on_1: Color,
    /// Outer stop of the lit face.
    pub on_2: Color,
    /// Inner stop of the unlit face.
    pub off_1: Color,
    /// Outer stop of the unlit face.
    pub off_2: Color,
}

/// The built-in LED color palettes.
///
/// Each palette pairs a bright two-tone gradient for the lit state with a
/// dark rendition of the same hue for the unlit state, so an off LED still
/// reads as the indicator it is.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[allow(missing_docs, reason = "Variant names are self-explanatory.")]
pub enum LedPalette {
    #[default]
    Green,
    Red,
    Blue,
    /// Cyan-toned, kept under this name for continuity with existing hosts.
    Yellow,
}

impl LedPalette {
    /// The gradient stops of this palette.
    pub const fn colors(self) -> LedColors {
        match self {
            Self::Green => LedColors {
                on_1: Color::from_rgb8(0, 255, 0),
                on_2: Color::from_rgb8(0, 192, 0),
                off_1: Color::from_rgb8(0, 28, 0),
                off_2: Color::from_rgb8(0, 128, 0),
            },
            Self::Red => LedColors {
                on_1: Color::from_rgb8(255, 0, 0),
                on_2: Color::from_rgb8(192, 0, 0),
                off_1: Color::from_rgb8(28, 0, 0),
                off_2: Color::from_rgb8(128, 0, 0),
            },
            Self::Blue => LedColors {
                on_1: Color::from_rgb8(0, 0, 255),
                on_2: Color::from_rgb8(0, 0, 192),
                off_1: Color::from_rgb8(0, 0, 28),
                off_2: Color::from_rgb8(0, 0, 128),
            },
            Self::Yellow => LedColors {
                on_1: Color::from_rgb8(0, 255, 255),
                on_2: Color::from_rgb8(0, 192, 192),
                off_1: Color::from_rgb8(0, 28, 28),
                off_2: Color::from_rgb8(0, 128, 128),
            },
        }
    }
}

/// A circular on/off status light.
///
/// The indicator is painted as a beveled disk whose face shows one of two
/// radial gradients depending on the checked state. Toggle activations from
/// the host flip the state; hosts that want a read-only light can disable
/// the widget, which leaves the painted state untouched.
pub struct LedIndicator {
    checked: bool,
    colors: LedColors,
}

// --- MARK: BUILDERS
impl LedIndicator {
    /// Create a new unlit `LedIndicator` with the default green palette.
    pub fn new() -> Self {
        Self::with_palette(LedPalette::default())
    }

    /// Create a new unlit `LedIndicator` with the given palette.
    pub fn with_palette(palette: LedPalette) -> Self {
        Self {
            checked: false,
            colors: palette.colors(),
        }
    }

    /// Builder-style method to set the initial checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Whether the LED is lit.
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Default for LedIndicator {
    fn default() -> Self {
        Self::new()
    }
}

// --- MARK: WIDGETMUT
impl LedIndicator {
    /// Set the checked state programmatically.
    pub fn set_checked(this: &mut WidgetMut<'_, Self>, checked: bool) {
        if this.widget.checked == checked {
            return;
        }
        this.widget.checked = checked;
        this.ctx.request_paint();
    }
}

// --- MARK: PAINT
impl LedIndicator {
    /// A radial gradient between two stops, as used for every part of the
    /// LED. The focal point coincides with the center.
    fn gradient(center: Point, c_1: Color, c_2: Color) -> Gradient {
        Gradient::new_radial(center, 1500.0).with_stops([c_1, c_2])
    }

    fn draw_disk(scene: &mut Scene, transform: Affine, radius: f64, gradient: &Gradient) {
        let disk = Circle::new(Point::ZERO, radius);
        fill(scene, &disk, transform, gradient);
        stroke(
            scene,
            &disk,
            transform,
            palette::css::BLACK,
            theme::LED_OUTLINE_WIDTH,
        );
    }
}

// --- MARK: IMPL WIDGET
impl Widget for LedIndicator {
    fn on_added(&mut self, ctx: &mut UpdateCtx<'_>) {
        ctx.set_min_size(Size::new(theme::LED_MIN_SIZE, theme::LED_MIN_SIZE));
    }

    fn on_resize(&mut self, ctx: &mut UpdateCtx<'_>, _new_size: Size) {
        ctx.request_paint();
    }

    fn on_toggle(&mut self, ctx: &mut UpdateCtx<'_>) {
        self.checked = !self.checked;
        trace!("LedIndicator toggled to {}", self.checked);
        ctx.request_paint();
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, scene: &mut Scene) {
        let size = ctx.size();

        // Draw in a fixed logical space and scale it onto the widget, so
        // the bevel proportions hold at every footprint.
        let scale = size.width.min(size.height) / theme::LED_SCALED_SIZE;
        let transform =
            Affine::translate((size.width / 2.0, size.height / 2.0)) * Affine::scale(scale);

        // External bevel, lit from the top-left.
        let border = Self::gradient(
            Point::new(-500.0, -500.0),
            theme::LED_BORDER_LIGHT,
            theme::LED_BORDER_DARK,
        );
        Self::draw_disk(scene, transform, 500.0, &border);

        // Internal bevel, lit from the bottom-right.
        let border = Self::gradient(
            Point::new(500.0, 500.0),
            theme::LED_BORDER_LIGHT,
            theme::LED_BORDER_DARK,
        );
        Self::draw_disk(scene, transform, 450.0, &border);

        // The LED face. The gradient focus moves with the state, which
        // reads as the light source switching on.
        let face = if self.checked {
            Self::gradient(
                Point::new(-500.0, -500.0),
                self.colors.on_1,
                self.colors.on_2,
            )
        } else {
            Self::gradient(
                Point::new(500.0, 500.0),
                self.colors.off_1,
                self.colors.off_2,
            )
        };
        Self::draw_disk(scene, transform, 400.0, &face);
    }

    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("LedIndicator", id = id.trace())
    }

    fn get_debug_text(&self) -> Option<String> {
        if self.checked {
            Some("[on]".to_string())
        } else {
            Some("[off]".to_string())
        }
    }
}
