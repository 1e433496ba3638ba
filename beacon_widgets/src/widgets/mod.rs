// Copyright 2026 the Beacon Authors
// SPDX-License-Identifier: Apache-2.0

//! The Beacon widgets.

mod led_indicator;
mod waiting_spinner;

pub use self::led_indicator::*;
pub use self::waiting_spinner::*;
