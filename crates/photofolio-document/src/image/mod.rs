// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module: decoding, RGB normalisation, and border compositing.

pub mod border;

pub use border::{BorderCompositor, BorderedImage, add_border};
