// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::{Point, Size};

use crate::core::{Host, WidgetId, WidgetState, WindowModality};
use crate::timers::{Timer, TimerId, TimerQueue};
use crate::util::{Duration, Instant};

/// Context handed to widget lifecycle callbacks and [`WidgetMut`] setters.
///
/// Requests made through this context (repaints, timers, geometry and
/// visibility changes, host enablement) are applied synchronously to the
/// widget's [`WidgetState`] and forwarded to the host where one is attached.
///
/// [`WidgetMut`]: crate::core::WidgetMut
pub struct UpdateCtx<'a> {
    pub(crate) widget_state: &'a mut WidgetState,
    pub(crate) timers: &'a mut TimerQueue,
    pub(crate) host: Option<&'a mut dyn Host>,
    /// The current time, as the dispatching event loop sees it.
    pub(crate) now: Instant,
}

impl UpdateCtx<'_> {
    /// The id of the widget this context belongs to.
    pub fn widget_id(&self) -> WidgetId {
        self.widget_state.id
    }

    /// The widget's current size.
    pub fn size(&self) -> Size {
        self.widget_state.size
    }

    /// Set the widget's minimum size, growing the current size to match
    /// where needed.
    pub fn set_min_size(&mut self, size: Size) {
        self.widget_state.min_size = size;
        let current = self.widget_state.size;
        self.widget_state.size = Size::new(
            current.width.max(size.width),
            current.height.max(size.height),
        );
    }

    /// Give the widget a fixed footprint.
    ///
    /// The host must not resize a fixed-size widget; resize requests are
    /// ignored once this is set.
    pub fn set_fixed_size(&mut self, size: Size) {
        self.widget_state.fixed_size = Some(size);
        self.widget_state.min_size = size;
        self.widget_state.size = size;
        self.request_paint();
    }

    /// Move the widget's top-left corner inside the host.
    pub fn set_origin(&mut self, origin: Point) {
        self.widget_state.origin = origin;
    }

    /// Show or hide the widget. Hidden widgets are not painted.
    pub fn set_visible(&mut self, visible: bool) {
        if self.widget_state.visible != visible {
            self.widget_state.visible = visible;
            self.request_paint();
        }
    }

    /// The current size of the host's content area, if a host is attached.
    pub fn host_size(&self) -> Option<Size> {
        self.host.as_deref().map(Host::size)
    }

    /// Enable or disable input on the host window.
    pub fn set_host_enabled(&mut self, enabled: bool) {
        if let Some(host) = self.host.as_deref_mut() {
            host.set_enabled(enabled);
        }
    }

    /// Forward a window modality hint to the host, unmodified.
    pub fn set_host_modality(&mut self, modality: WindowModality) {
        if let Some(host) = self.host.as_deref_mut() {
            host.set_modality(modality);
        }
    }

    /// Request a repaint of the widget.
    pub fn request_paint(&mut self) {
        self.widget_state.needs_paint = true;
        if let Some(host) = self.host.as_deref_mut() {
            host.request_paint();
        }
    }

    /// Arm a repeating timer, first due one `period` from now.
    ///
    /// The returned token is passed back in [`Widget::on_timer`] and can be
    /// handed to [`cancel_timer`](Self::cancel_timer).
    ///
    /// [`Widget::on_timer`]: crate::core::Widget::on_timer
    pub fn request_timer(&mut self, period: Duration) -> TimerId {
        let timer = Timer::new(self.widget_state.id, self.now, period);
        let token = timer.id;
        self.timers.push(timer);
        token
    }

    /// Cancel a timer. Synchronous and safe to call multiple times.
    pub fn cancel_timer(&mut self, token: TimerId) {
        self.timers.cancel(token);
    }
}

/// Context handed to [`Widget::paint`](crate::core::Widget::paint).
pub struct PaintCtx<'a> {
    pub(crate) widget_state: &'a WidgetState,
}

impl PaintCtx<'_> {
    /// The id of the widget this context belongs to.
    pub fn widget_id(&self) -> WidgetId {
        self.widget_state.id
    }

    /// The widget's current size.
    pub fn size(&self) -> Size {
        self.widget_state.size
    }
}
