// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Application settings for the preview/export pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scale factor applied when rasterizing for export (logical card size
    /// times this factor).
    pub export_scale: f32,
    /// Barcode module width in logical units.
    pub barcode_module_width: f32,
    /// Barcode bar height in logical units.
    pub barcode_height: f32,
    /// Directory exported images are written to.
    pub output_dir: std::path::PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_scale: 3.0,
            barcode_module_width: 1.5,
            barcode_height: 40.0,
            output_dir: std::path::PathBuf::from("."),
        }
    }
}
