// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::{Point, Size};

use crate::core::WidgetId;

/// Per-widget bookkeeping owned by a [`WidgetPod`](crate::core::WidgetPod).
///
/// Widgets never hold this state themselves; they read and mutate it
/// through the contexts handed to their callbacks.
pub struct WidgetState {
    pub(crate) id: WidgetId,
    /// Position of the widget's top-left corner inside the host.
    pub(crate) origin: Point,
    pub(crate) size: Size,
    pub(crate) min_size: Size,
    /// When set, the host must not resize the widget; resize requests
    /// against a fixed-size widget are ignored.
    pub(crate) fixed_size: Option<Size>,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) needs_paint: bool,
}

impl WidgetState {
    pub(crate) fn new() -> Self {
        Self {
            id: WidgetId::next(),
            origin: Point::ZERO,
            size: Size::ZERO,
            min_size: Size::ZERO,
            fixed_size: None,
            visible: true,
            enabled: true,
            needs_paint: true,
        }
    }

    /// The widget's id.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Position of the widget's top-left corner inside the host.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The widget's current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The widget's minimum size.
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// The widget's fixed footprint, if it has one.
    pub fn fixed_size(&self) -> Option<Size> {
        self.fixed_size
    }

    /// Whether the widget is painted at all.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the widget reacts to toggle activation.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a repaint has been requested since the last paint.
    pub fn needs_paint(&self) -> bool {
        self.needs_paint
    }
}
