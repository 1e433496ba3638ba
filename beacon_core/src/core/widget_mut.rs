// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

use crate::core::{UpdateCtx, Widget};

/// A mutable reference to a widget, plus the context needed to apply
/// changes.
///
/// Widget setters are associated functions taking a `WidgetMut`, e.g.
/// `LedIndicator::set_checked(&mut this, true)`, so that every mutation can
/// request repaints or re-derive timers through [`UpdateCtx`].
pub struct WidgetMut<'a, W: Widget> {
    /// The widget.
    pub widget: &'a mut W,
    /// The context applying the widget's requests.
    pub ctx: UpdateCtx<'a>,
}
