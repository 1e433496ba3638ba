// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! Tools and infrastructure for testing Beacon widgets.
//!
//! The [`TestHarness`] owns a single widget, a [`MockHost`] standing in for
//! the embedding window and a virtual clock, so tests can drive lifecycle
//! callbacks and timer-based animations deterministically without a real
//! event loop or GPU.

#![expect(missing_debug_implementations, reason = "Deferred: Noisy")]

mod harness;
mod mock_host;

pub use harness::TestHarness;
pub use mock_host::MockHost;
