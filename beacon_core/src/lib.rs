// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! The toolkit-independent core of the Beacon widget set.
//!
//! Beacon widgets do not inherit from a GUI framework's widget base class.
//! Instead, each widget implements the [`Widget`](core::Widget) capability
//! trait, and a host framework adapter owns a [`WidgetPod`](core::WidgetPod)
//! and forwards resize, toggle, timer and paint callbacks into it. This crate
//! provides that trait, the per-widget bookkeeping, the deadline-based timer
//! queue driving animations, and a handful of paint helpers on top of
//! [Vello](vello).
//!
//! Everything here is single-threaded and event-driven: all widget state
//! mutation and all painting happen on the host's UI thread, and a timer
//! tick never overlaps a paint or a setter.

#![expect(missing_debug_implementations, reason = "Deferred: Noisy")]
#![cfg_attr(test, expect(clippy::missing_assert_message, reason = "Deferred: Noisy"))]

pub use vello::kurbo;
pub use vello::peniko;
pub use vello::peniko::color::palette;

pub mod core;
pub mod timers;
pub mod util;
