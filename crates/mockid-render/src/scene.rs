// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The renderer's intermediate representation: a flat, ordered list of
// positioned primitives anchored to the fixed card geometry.

use mockid_barcode::BarcodeSymbol;
use mockid_core::types::{JurisdictionCode, Photo, SignaturePath};
use serde::{Deserialize, Serialize};

use crate::template::{Color, TextStyle};

/// One positioned primitive. Coordinates are logical card units; paint order
/// is the node order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        style: TextStyle,
        content: String,
    },
    Photo {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        photo: Photo,
    },
    /// Stand-in drawn when no photo is present. Always emitted for a photo
    /// region, never omitted.
    Placeholder {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: String,
    },
    Signature {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        path: SignaturePath,
    },
    Barcode {
        x: f32,
        y: f32,
        module_width: f32,
        height: f32,
        symbol: BarcodeSymbol,
    },
}

/// A composed document scene: a pure function of template, record,
/// credential, barcode, and optional photo. Never mutated after
/// composition; a new generate cycle replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedScene {
    pub code: JurisdictionCode,
    pub background: Color,
    pub nodes: Vec<SceneNode>,
}

impl RenderedScene {
    /// First node matching the predicate, for tests and inspection.
    pub fn find(&self, pred: impl Fn(&SceneNode) -> bool) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| pred(n))
    }

    /// Whether any text node contains the given substring.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.nodes.iter().any(|n| match n {
            SceneNode::Text { content, .. } => content.contains(needle),
            _ => false,
        })
    }
}
