// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the MockID document pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Physical card width (ID-1 format).
pub const CARD_WIDTH_MM: f32 = 85.6;
/// Physical card height (ID-1 format).
pub const CARD_HEIGHT_MM: f32 = 54.0;

/// Logical render units per millimetre. The scene is composed in logical
/// units; the exporter multiplies by the requested scale factor.
pub const UNITS_PER_MM: f32 = 4.0;

/// Card width in logical units.
pub const CARD_WIDTH: f32 = CARD_WIDTH_MM * UNITS_PER_MM;
/// Card height in logical units.
pub const CARD_HEIGHT: f32 = CARD_HEIGHT_MM * UNITS_PER_MM;

/// Jurisdiction selecting a document template and number-format rule.
///
/// A closed variant set rather than a raw string key; codes outside the
/// known set are carried verbatim in `Other` and resolve to the fallback
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JurisdictionCode {
    /// Slovenia (`SI`).
    Si,
    /// New York, USA (`US-NY`). Has a number rule but no card layout.
    UsNy,
    /// Pennsylvania, USA (`US-PA`).
    UsPa,
    /// Any other code, carried verbatim.
    Other(String),
}

impl JurisdictionCode {
    /// Parse the wire form used by the input layer (`SI`, `US-NY`, ...).
    pub fn parse(code: &str) -> Self {
        match code {
            "SI" => Self::Si,
            "US-NY" => Self::UsNy,
            "US-PA" => Self::UsPa,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire form of this code (round-trips through `parse`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Si => "SI",
            Self::UsNy => "US-NY",
            Self::UsPa => "US-PA",
            Self::Other(code) => code,
        }
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of document being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    DriversLicense,
    NationalId,
}

/// An already-decoded photo bitmap (RGBA8, row-major).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, RGBA.
    pub pixels: Vec<u8>,
}

/// Validated personal data for one render cycle.
///
/// Immutable once accepted; a new render cycle replaces the record wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    /// ISO `YYYY-MM-DD` as delivered by the input layer. Formatted leniently
    /// at composition; a malformed value renders as `N/A`.
    pub date_of_birth: String,
    pub gender: String,
    pub height: String,
    pub eye_color: String,
    pub photo: Option<Photo>,
}

/// One command of a signature path, in signature-viewbox coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
    /// Quadratic with the control point reflected from the previous segment
    /// (SVG `T`).
    SmoothQuadTo { x: f32, y: f32 },
}

/// Width of the signature viewbox in path coordinates.
pub const SIGNATURE_VIEW_WIDTH: f32 = 150.0;
/// Height of the signature viewbox in path coordinates.
pub const SIGNATURE_VIEW_HEIGHT: f32 = 50.0;

/// A parametric signature curve. Always a vector descriptor, never a raster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignaturePath {
    pub commands: Vec<PathCommand>,
    /// Stroke width in path units, drawn from [1.0, 1.5).
    pub stroke_width: f32,
    /// Stroke opacity, drawn from [0.8, 1.0).
    pub opacity: f32,
}

/// A synthetic credential attached to a preview document.
///
/// Regenerated in full on every synthesis call; never partially updated and
/// never persisted beyond the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticCredential {
    /// Document number, formatted per the jurisdiction's rule.
    pub number: String,
    /// Calendar date of synthesis.
    pub issue_date: NaiveDate,
    /// `issue_date` advanced by exactly 8 calendar years.
    pub expiry_date: NaiveDate,
    pub signature: SignaturePath,
}
