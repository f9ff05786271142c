// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Exporter — rasterizes a composed scene and serializes it as a named PNG
// artifact.

use std::path::{Path, PathBuf};

use mockid_core::error::Result;
use tracing::info;

use crate::raster::{rasterize, to_png_bytes};
use crate::scene::RenderedScene;

/// A serialized export: the download filename and the PNG bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// `<jurisdiction code>-id.png`.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Rasterize the scene at the given scale and serialize it as PNG.
///
/// Idempotent for an unchanged scene: the same scene and scale always
/// produce identical bytes.
pub fn export_png(scene: &RenderedScene, scale: f32) -> Result<ExportArtifact> {
    let image = rasterize(scene, scale)?;
    let bytes = to_png_bytes(&image)?;
    let filename = format!("{}-id.png", scene.code.as_str());
    info!(filename, size = bytes.len(), scale, "document exported");
    Ok(ExportArtifact { filename, bytes })
}

impl ExportArtifact {
    /// Write the artifact into `dir` under its own filename.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}
