// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout module: image scaling/centring and text measurement.

pub mod fit;
pub mod text;

pub use fit::{LayoutEngine, fit};
pub use text::{centered_x, text_width};
