// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MockID — card templates, scene composition, and rasterization/export.

pub mod compose;
pub mod export;
pub mod raster;
pub mod registry;
pub mod scene;
pub mod template;

pub use compose::compose;
pub use export::{ExportArtifact, export_png};
pub use raster::{rasterize, to_png_bytes};
pub use registry::TemplateRegistry;
pub use scene::{RenderedScene, SceneNode};
pub use template::{Color, FieldBinding, FieldPlacement, JurisdictionTemplate};
