// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for MockID.

use thiserror::Error;

/// Top-level error type for all MockID operations.
///
/// No variant here is fatal to the process: every failure is scoped to the
/// current generate or export action.
#[derive(Debug, Error)]
pub enum MockidError {
    // -- Input errors --
    #[error("required field is missing or empty: {0}")]
    MissingField(String),

    // -- Barcode errors --
    #[error("character not encodable in CODE128: {0:?}")]
    Unencodable(char),

    // -- Render / export errors --
    #[error("photo decoding failed: {0}")]
    PhotoDecode(String),

    #[error("rasterization failed: {0}")]
    Raster(String),

    #[error("image encoding failed: {0}")]
    ImageEncode(String),

    // -- Lifecycle errors --
    #[error("operation not valid in state {state}: {action}")]
    InvalidState { state: String, action: String },

    #[error("export task failed: {0}")]
    ExportTask(String),

    // -- Storage / serialization --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MockidError>;
