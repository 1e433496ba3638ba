// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! Status indicator widgets painted with [Vello](vello).
//!
//! This crate provides two leaf widgets on top of the [`beacon_core`]
//! capability interface:
//!
//! - [`LedIndicator`](widgets::LedIndicator), a toggleable circular status
//!   light with two-tone gradient rendering for its lit and unlit states.
//! - [`WaitingSpinner`](widgets::WaitingSpinner), an animated ring of fading
//!   line segments driven by a repeating timer.
//!
//! Neither widget depends on the other; both only need a host that forwards
//! the [`beacon_core::core::Widget`] callbacks and drains the timer queue.

#![expect(missing_debug_implementations, reason = "Deferred: Noisy")]
#![expect(clippy::cast_possible_truncation, reason = "Deferred: Noisy")]
#![cfg_attr(test, expect(clippy::missing_assert_message, reason = "Deferred: Noisy"))]

pub use vello::peniko::color::palette;

pub mod theme;
pub mod widgets;

pub(crate) use beacon_core::core;
pub(crate) use beacon_core::util;
