// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use vello::Scene;
use vello::kurbo::Size;

use crate::core::{Host, PaintCtx, UpdateCtx, Widget, WidgetId, WidgetMut, WidgetState};
use crate::timers::{TimerId, TimerQueue};
use crate::util::Instant;

/// A widget plus its bookkeeping, as owned by a host adapter.
///
/// The pod is the dispatch point between the host framework and the widget:
/// the adapter (or the test harness) calls the `on_*` methods from its UI
/// thread, and the pod builds the contexts, enters the widget's trace span
/// and applies the gating rules — hidden widgets are not painted, disabled
/// widgets ignore toggles, fixed-size widgets ignore resizes.
pub struct WidgetPod<W: Widget> {
    widget: W,
    state: WidgetState,
}

impl<W: Widget> WidgetPod<W> {
    /// Wrap a widget. [`on_added`](Self::on_added) must be called before
    /// any other dispatch.
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            state: WidgetState::new(),
        }
    }

    /// The widget's id.
    pub fn id(&self) -> WidgetId {
        self.state.id
    }

    /// The widget itself.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// The widget's bookkeeping.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Enable or disable the widget. A disabled widget ignores toggles.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
    }

    /// Dispatch the one-time initialization callback.
    pub fn on_added<'a>(
        &'a mut self,
        host: Option<&'a mut (dyn Host + 'a)>,
        timers: &'a mut TimerQueue,
        now: Instant,
    ) {
        let _span = self.widget.make_trace_span(self.state.id).entered();
        let mut ctx = UpdateCtx {
            widget_state: &mut self.state,
            timers,
            host,
            now,
        };
        self.widget.on_added(&mut ctx);
    }

    /// Dispatch a host resize.
    ///
    /// The new size is clamped to the widget's minimum size. Resize
    /// requests against a fixed-size widget are ignored.
    pub fn on_resize<'a>(
        &'a mut self,
        host: Option<&'a mut (dyn Host + 'a)>,
        timers: &'a mut TimerQueue,
        now: Instant,
        new_size: Size,
    ) {
        if self.state.fixed_size.is_some() {
            return;
        }
        let min = self.state.min_size;
        let clamped = Size::new(new_size.width.max(min.width), new_size.height.max(min.height));
        self.state.size = clamped;
        let _span = self.widget.make_trace_span(self.state.id).entered();
        let mut ctx = UpdateCtx {
            widget_state: &mut self.state,
            timers,
            host,
            now,
        };
        self.widget.on_resize(&mut ctx, clamped);
    }

    /// Dispatch a toggle activation. Ignored while the widget is disabled.
    pub fn on_toggle<'a>(
        &'a mut self,
        host: Option<&'a mut (dyn Host + 'a)>,
        timers: &'a mut TimerQueue,
        now: Instant,
    ) {
        if !self.state.enabled {
            return;
        }
        let _span = self.widget.make_trace_span(self.state.id).entered();
        let mut ctx = UpdateCtx {
            widget_state: &mut self.state,
            timers,
            host,
            now,
        };
        self.widget.on_toggle(&mut ctx);
    }

    /// Dispatch a timer firing.
    pub fn on_timer<'a>(
        &'a mut self,
        host: Option<&'a mut (dyn Host + 'a)>,
        timers: &'a mut TimerQueue,
        now: Instant,
        token: TimerId,
    ) {
        let _span = self.widget.make_trace_span(self.state.id).entered();
        let mut ctx = UpdateCtx {
            widget_state: &mut self.state,
            timers,
            host,
            now,
        };
        self.widget.on_timer(&mut ctx, token);
    }

    /// Run a closure with mutable access to the widget.
    pub fn edit<'a, R>(
        &'a mut self,
        host: Option<&'a mut (dyn Host + 'a)>,
        timers: &'a mut TimerQueue,
        now: Instant,
        f: impl FnOnce(&mut WidgetMut<'_, W>) -> R,
    ) -> R {
        let _span = self.widget.make_trace_span(self.state.id).entered();
        let mut this = WidgetMut {
            widget: &mut self.widget,
            ctx: UpdateCtx {
                widget_state: &mut self.state,
                timers,
                host,
                now,
            },
        };
        f(&mut this)
    }

    /// Paint the widget into `scene`.
    ///
    /// The scene fragment is reset first, so a hidden widget leaves it
    /// fully transparent.
    pub fn paint(&mut self, scene: &mut Scene) {
        scene.reset();
        self.state.needs_paint = false;
        if !self.state.visible {
            return;
        }
        let _span = self.widget.make_trace_span(self.state.id).entered();
        let mut ctx = PaintCtx {
            widget_state: &self.state,
        };
        self.widget.paint(&mut ctx, scene);
    }
}
