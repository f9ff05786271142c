// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MockID — CODE128 linear barcode encoding.

mod code128;

pub use code128::{BarcodeBar, BarcodeSymbol, encode};
