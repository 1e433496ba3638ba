// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use beacon_core::core::{Host, WindowModality};
use vello::kurbo::Size;

/// An in-memory [`Host`] recording what a widget asked of it.
pub struct MockHost {
    size: Size,
    enabled: bool,
    modality: WindowModality,
    paint_requests: u64,
}

impl MockHost {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            enabled: true,
            modality: WindowModality::default(),
            paint_requests: 0,
        }
    }

    /// Whether the host currently accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The last modality hint the widget forwarded.
    pub fn modality(&self) -> WindowModality {
        self.modality
    }

    /// How many repaints the widget has requested so far.
    pub fn paint_requests(&self) -> u64 {
        self.paint_requests
    }

    /// Change the size of the simulated content area.
    ///
    /// This only moves the value the widget will observe; use
    /// [`TestHarness::resize_widget`](crate::TestHarness::resize_widget) to
    /// deliver a resize callback.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl Host for MockHost {
    fn size(&self) -> Size {
        self.size
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_modality(&mut self, modality: WindowModality) {
        self.modality = modality;
    }

    fn request_paint(&mut self) {
        self.paint_requests += 1;
    }
}
