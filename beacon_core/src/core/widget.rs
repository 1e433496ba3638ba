// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{Span, trace_span};
use vello::Scene;
use vello::kurbo::Size;

use crate::core::{PaintCtx, UpdateCtx};
use crate::timers::TimerId;

/// Unique identifier of a widget instance.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct WidgetId(NonZeroU64);

impl WidgetId {
    /// Allocate a fresh widget id.
    pub fn next() -> Self {
        static WIDGET_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
        let id = WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(id.try_into().unwrap())
    }

    /// The numeric value of the id, for use in trace spans.
    pub fn trace(self) -> u64 {
        self.0.get()
    }
}

/// The capability interface implemented by Beacon widgets.
///
/// A widget does not own a window. A host framework adapter (or the test
/// harness) owns a [`WidgetPod`](crate::core::WidgetPod) and forwards
/// callbacks into this trait; the widget responds by mutating its own state
/// and issuing requests through the [`UpdateCtx`].
///
/// All callbacks run on the host's single UI thread. In particular, a timer
/// tick never runs concurrently with a paint or with a setter on the same
/// widget.
pub trait Widget: 'static {
    /// Called once, right after the host has taken ownership of the widget.
    ///
    /// This is where a widget establishes its initial footprint and
    /// visibility.
    fn on_added(&mut self, ctx: &mut UpdateCtx<'_>) {
        let _ = ctx;
    }

    /// Called after the host has resized the widget to `new_size`.
    ///
    /// Not called for widgets with a fixed footprint.
    fn on_resize(&mut self, ctx: &mut UpdateCtx<'_>, new_size: Size) {
        let _ = (ctx, new_size);
    }

    /// Called when the host activates a binary toggle control.
    ///
    /// Not dispatched while the widget is disabled.
    fn on_toggle(&mut self, ctx: &mut UpdateCtx<'_>) {
        let _ = ctx;
    }

    /// Called when a repeating timer requested by this widget fires.
    ///
    /// `token` is the id returned by
    /// [`request_timer`](UpdateCtx::request_timer); a widget holding several
    /// timers can tell them apart with it.
    fn on_timer(&mut self, ctx: &mut UpdateCtx<'_>, token: TimerId) {
        let _ = (ctx, token);
    }

    /// Paint the widget into the given scene fragment.
    ///
    /// The fragment has been cleared to fully transparent beforehand.
    /// Transforms are explicit values passed with each drawing call; there
    /// is no ambient "current transform" to save and restore.
    fn paint(&mut self, ctx: &mut PaintCtx<'_>, scene: &mut Scene);

    /// Return a span for tracing dispatch into this widget.
    fn make_trace_span(&self, id: WidgetId) -> Span {
        trace_span!("Widget", id = id.trace())
    }

    /// Return a short string summarizing the widget state in debug logs.
    fn get_debug_text(&self) -> Option<String> {
        None
    }
}
