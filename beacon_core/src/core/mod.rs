// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! The widget capability interface and the types that connect it to a host.

mod contexts;
mod host;
mod widget;
mod widget_mut;
mod widget_pod;
mod widget_state;

pub use contexts::{PaintCtx, UpdateCtx};
pub use host::{Host, WindowModality};
pub use widget::{Widget, WidgetId};
pub use widget_mut::WidgetMut;
pub use widget_pod::WidgetPod;
pub use widget_state::WidgetState;
