// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use vello::kurbo::Size;

/// A window modality hint, forwarded to the host unmodified.
///
/// Beacon itself attaches no semantics to the hint; what (if anything) it
/// does is up to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowModality {
    /// The window does not block input to other windows.
    #[default]
    NonModal,
    /// The window blocks input to its parent window.
    WindowModal,
    /// The window blocks input to the whole application.
    ApplicationModal,
}

/// The host window owning a widget.
///
/// This is the widget's view of its surrounding framework: the adapter
/// wrapping a [`WidgetPod`](crate::core::WidgetPod) implements this trait
/// and forwards the calls to the real windowing toolkit. The host is only
/// ever touched from the UI thread.
pub trait Host {
    /// The current size of the host's content area.
    fn size(&self) -> Size;

    /// Enable or disable input on the host window.
    fn set_enabled(&mut self, enabled: bool);

    /// Apply a window modality hint.
    fn set_modality(&mut self, modality: WindowModality);

    /// Schedule a repaint of the hosted widget.
    fn request_paint(&mut self);
}
