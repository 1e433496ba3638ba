// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use beacon_core::core::{Widget, WidgetMut, WidgetPod, WidgetState};
use beacon_core::timers::TimerQueue;
use beacon_core::util::{Duration, Instant};
use vello::Scene;
use vello::kurbo::Size;

use crate::MockHost;

/// A harness for hosting a single widget in tests.
///
/// The harness plays the role the host framework adapter plays in a real
/// application: it owns the widget's pod, a [`MockHost`] and the timer
/// queue, and it dispatches callbacks synchronously. Time is virtual and
/// only advances through [`animate_ms`](Self::animate_ms), which makes
/// timer-driven animations fully deterministic.
///
/// Rendering produces a [`Scene`]; the harness never touches a GPU.
///
pub struct TestHarness<W: Widget> {
    pod: WidgetPod<W>,
    host: MockHost,
    timers: TimerQueue,
    now: Instant,
}

/// The size of the simulated host content area, unless a test says
/// otherwise.
pub const DEFAULT_HOST_SIZE: Size = Size::new(400.0, 400.0);

impl<W: Widget> TestHarness<W> {
    /// Host the given widget in a [`DEFAULT_HOST_SIZE`] content area.
    pub fn create(widget: W) -> Self {
        Self::create_with_host_size(widget, DEFAULT_HOST_SIZE)
    }

    /// Host the given widget in a content area of the given size.
    ///
    /// Dispatches `on_added` before returning.
    pub fn create_with_host_size(widget: W, host_size: Size) -> Self {
        let mut harness = Self {
            pod: WidgetPod::new(widget),
            host: MockHost::new(host_size),
            timers: TimerQueue::new(),
            now: Instant::now(),
        };
        harness
            .pod
            .on_added(Some(&mut harness.host), &mut harness.timers, harness.now);
        harness
    }

    /// The hosted widget.
    pub fn widget(&self) -> &W {
        self.pod.widget()
    }

    /// The hosted widget's bookkeeping state.
    pub fn state(&self) -> &WidgetState {
        self.pod.state()
    }

    /// The simulated host.
    pub fn host(&self) -> &MockHost {
        &self.host
    }

    /// Mutable access to the simulated host.
    pub fn host_mut(&mut self) -> &mut MockHost {
        &mut self.host
    }

    /// Enable or disable the widget.
    pub fn set_widget_enabled(&mut self, enabled: bool) {
        self.pod.set_enabled(enabled);
    }

    /// Deliver a resize callback, as the host would after a layout change.
    pub fn resize_widget(&mut self, new_size: Size) {
        self.pod
            .on_resize(Some(&mut self.host), &mut self.timers, self.now, new_size);
    }

    /// Deliver a toggle activation, as the host would on a click.
    pub fn toggle(&mut self) {
        self.pod
            .on_toggle(Some(&mut self.host), &mut self.timers, self.now);
    }

    /// Run a closure with mutable access to the widget.
    ///
    /// This is how tests call the widget's `WidgetMut` setters.
    pub fn edit_widget<R>(&mut self, f: impl FnOnce(&mut WidgetMut<'_, W>) -> R) -> R {
        self.pod
            .edit(Some(&mut self.host), &mut self.timers, self.now, f)
    }

    /// Advance the virtual clock by `ms` milliseconds, dispatching every
    /// timer that comes due along the way.
    ///
    /// A repeating timer whose period fits several times into the window
    /// fires once per elapsed period, just as it would under a real event
    /// loop that fell behind.
    pub fn animate_ms(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        while let Some(timer) = self.timers.pop_due(self.now) {
            self.pod.on_timer(
                Some(&mut self.host),
                &mut self.timers,
                self.now,
                timer.id,
            );
        }
    }

    /// Paint the widget and return the resulting scene.
    pub fn render(&mut self) -> Scene {
        let mut scene = Scene::new();
        self.pod.paint(&mut scene);
        scene
    }
}
