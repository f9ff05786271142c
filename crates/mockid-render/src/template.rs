// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Declarative card layout definitions. A template binds card positions to
// record/credential fields; composition (compose.rs) interprets it. All
// coordinates are logical card units (4 units per millimetre).

use mockid_core::types::{CARD_HEIGHT, CARD_WIDTH, JurisdictionCode};
use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const WHITE: Color = Color::new(255, 255, 255);
pub const INK: Color = Color::new(17, 24, 39);
pub const LABEL_GRAY: Color = Color::new(107, 114, 128);
pub const PLACEHOLDER_GRAY: Color = Color::new(229, 231, 235);
pub const SI_BLUE: Color = Color::new(30, 64, 175);
pub const PA_YELLOW: Color = Color::new(250, 204, 21);
pub const PA_BLUE: Color = Color::new(30, 58, 138);

/// Horizontal alignment of a text run relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    Center,
}

/// Size, color, and alignment of a text run. `size` is the glyph height in
/// logical units; the glyph advance equals the size (square bitmap font).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: Align,
}

impl TextStyle {
    pub const fn left(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            align: Align::Left,
        }
    }

    pub const fn centered(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            align: Align::Center,
        }
    }
}

/// Static card decoration, independent of record and credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decor {
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
}

/// A small caption attached to a field placement, drawn at an offset from
/// the value's anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub dx: f32,
    pub dy: f32,
    pub size: f32,
}

/// Which record/credential attribute a placement displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldBinding {
    FirstName,
    LastName,
    /// `LAST, FIRST` in uppercase.
    NameReversed,
    Address,
    City,
    DateOfBirth,
    Gender,
    Height,
    EyeColor,
    DocumentNumber,
    IssueDate,
    ExpiryDate,
    Signature,
    Photo,
    Barcode,
}

/// One positioned field on the card.
///
/// `width`/`height` bound region fields (photo, signature, barcode); text
/// fields use `style.size` and overflow freely (fixed geometry, no wrapping
/// or truncation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPlacement {
    pub binding: FieldBinding,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub style: TextStyle,
    /// Static text prepended to the resolved value (e.g. `DL-`).
    pub prefix: Option<String>,
    pub label: Option<Label>,
}

impl FieldPlacement {
    fn text(binding: FieldBinding, x: f32, y: f32, style: TextStyle) -> Self {
        Self {
            binding,
            x,
            y,
            width: 0.0,
            height: 0.0,
            style,
            prefix: None,
            label: None,
        }
    }

    fn region(binding: FieldBinding, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            binding,
            x,
            y,
            width,
            height,
            style: TextStyle::left(8.0, INK),
            prefix: None,
            label: None,
        }
    }

    fn with_label(mut self, text: &str, dx: f32, dy: f32, size: f32) -> Self {
        self.label = Some(Label {
            text: text.to_string(),
            dx,
            dy,
            size,
        });
        self
    }

    fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }
}

/// A complete declarative card layout for one jurisdiction, plus the
/// fallback variant for unsupported codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionTemplate {
    pub code: JurisdictionCode,
    pub background: Color,
    pub decor: Vec<Decor>,
    pub placements: Vec<FieldPlacement>,
}

/// Slovenian identity card layout.
pub fn slovenia() -> JurisdictionTemplate {
    JurisdictionTemplate {
        code: JurisdictionCode::Si,
        background: WHITE,
        decor: vec![
            Decor::Rect {
                x: 12.0,
                y: 12.0,
                width: 26.0,
                height: 16.0,
                color: SI_BLUE,
            },
            Decor::Text {
                x: 17.0,
                y: 16.0,
                style: TextStyle::left(8.0, WHITE),
                content: "SI".into(),
            },
            Decor::Text {
                x: 46.0,
                y: 12.0,
                style: TextStyle::left(10.0, INK),
                content: "REPUBLIKA SLOVENIJA".into(),
            },
            Decor::Text {
                x: 46.0,
                y: 25.0,
                style: TextStyle::left(6.0, LABEL_GRAY),
                content: "Identity Card".into(),
            },
            Decor::Text {
                x: 232.0,
                y: 12.0,
                style: TextStyle::left(6.0, LABEL_GRAY),
                content: "Document No:".into(),
            },
            Decor::Text {
                x: 12.0,
                y: 144.0,
                style: TextStyle::left(6.0, LABEL_GRAY),
                content: "Signature/Podpis".into(),
            },
        ],
        placements: vec![
            FieldPlacement::text(
                FieldBinding::DocumentNumber,
                232.0,
                21.0,
                TextStyle::left(8.0, INK),
            ),
            FieldPlacement::region(FieldBinding::Photo, 12.0, 40.0, 96.0, 96.0),
            FieldPlacement::text(
                FieldBinding::DateOfBirth,
                24.0,
                139.0,
                TextStyle::left(6.0, INK),
            ),
            FieldPlacement::text(
                FieldBinding::LastName,
                120.0,
                49.0,
                TextStyle::left(10.0, INK),
            )
            .with_label("Surname/Priimek", 0.0, -9.0, 6.0),
            FieldPlacement::text(
                FieldBinding::FirstName,
                120.0,
                73.0,
                TextStyle::left(10.0, INK),
            )
            .with_label("Given name(s)/Ime", 0.0, -9.0, 6.0),
            FieldPlacement::text(
                FieldBinding::DateOfBirth,
                120.0,
                98.0,
                TextStyle::left(7.0, INK),
            )
            .with_label("Date of birth", 0.0, -8.0, 6.0),
            FieldPlacement::text(
                FieldBinding::Gender,
                232.0,
                98.0,
                TextStyle::left(7.0, INK),
            )
            .with_label("Sex", 0.0, -8.0, 6.0),
            FieldPlacement::text(
                FieldBinding::IssueDate,
                120.0,
                120.0,
                TextStyle::left(7.0, INK),
            )
            .with_label("Issue date", 0.0, -8.0, 6.0),
            FieldPlacement::text(
                FieldBinding::ExpiryDate,
                232.0,
                120.0,
                TextStyle::left(7.0, INK),
            )
            .with_label("Expiry date", 0.0, -8.0, 6.0),
            FieldPlacement::region(FieldBinding::Signature, 12.0, 150.0, 150.0, 22.0),
            FieldPlacement::region(
                FieldBinding::Barcode,
                0.0,
                174.0,
                CARD_WIDTH,
                40.0,
            ),
        ],
    }
}

/// Pennsylvania driver's license layout.
pub fn pennsylvania() -> JurisdictionTemplate {
    let row = |binding, y: f32, label: &str| {
        FieldPlacement::text(binding, 160.0, y, TextStyle::left(7.0, INK))
            .with_label(label, -36.0, 0.0, 7.0)
    };

    JurisdictionTemplate {
        code: JurisdictionCode::UsPa,
        background: WHITE,
        decor: vec![
            Decor::Rect {
                x: 0.0,
                y: 0.0,
                width: CARD_WIDTH,
                height: 44.0,
                color: PA_YELLOW,
            },
            Decor::Text {
                x: 12.0,
                y: 8.0,
                style: TextStyle::left(15.0, INK),
                content: "PENNSYLVANIA".into(),
            },
            Decor::Text {
                x: 12.0,
                y: 28.0,
                style: TextStyle::left(7.0, INK),
                content: "Driver's License".into(),
            },
            Decor::Rect {
                x: 0.0,
                y: 44.0,
                width: CARD_WIDTH,
                height: 4.0,
                color: PA_BLUE,
            },
            Decor::Rect {
                x: 0.0,
                y: 190.0,
                width: CARD_WIDTH,
                height: 26.0,
                color: PA_BLUE,
            },
        ],
        placements: vec![
            FieldPlacement::region(FieldBinding::Photo, 12.0, 56.0, 100.0, 100.0),
            FieldPlacement::region(FieldBinding::Signature, 12.0, 160.0, 100.0, 24.0),
            row(FieldBinding::DocumentNumber, 56.0, "ID:"),
            row(FieldBinding::DateOfBirth, 70.0, "DOB:"),
            row(FieldBinding::NameReversed, 84.0, "NAME:"),
            row(FieldBinding::Address, 98.0, "ADDR:"),
            row(FieldBinding::City, 112.0, "CITY:"),
            FieldPlacement::text(FieldBinding::IssueDate, 160.0, 130.0, TextStyle::left(7.0, INK))
                .with_label("ISS:", -36.0, 0.0, 6.0),
            FieldPlacement::text(FieldBinding::ExpiryDate, 264.0, 130.0, TextStyle::left(7.0, INK))
                .with_label("EXP:", -36.0, 0.0, 6.0),
            FieldPlacement::text(FieldBinding::Gender, 160.0, 144.0, TextStyle::left(7.0, INK))
                .with_label("SEX:", -36.0, 0.0, 6.0),
            FieldPlacement::text(FieldBinding::Height, 264.0, 144.0, TextStyle::left(7.0, INK))
                .with_label("HT:", -36.0, 0.0, 6.0),
            FieldPlacement::text(
                FieldBinding::DocumentNumber,
                CARD_WIDTH / 2.0,
                198.0,
                TextStyle::centered(8.0, WHITE),
            )
            .with_prefix("DL-"),
        ],
    }
}

/// Neutral fallback card for any code without a layout of its own.
pub fn unsupported(code: &JurisdictionCode) -> JurisdictionTemplate {
    JurisdictionTemplate {
        code: code.clone(),
        background: WHITE,
        decor: vec![Decor::Text {
            x: CARD_WIDTH / 2.0,
            y: CARD_HEIGHT / 2.0 - 4.0,
            style: TextStyle::centered(8.0, LABEL_GRAY),
            content: "SELECT A JURISDICTION TO PREVIEW".into(),
        }],
        placements: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slovenia_places_photo_signature_and_barcode() {
        let t = slovenia();
        for binding in [
            FieldBinding::Photo,
            FieldBinding::Signature,
            FieldBinding::Barcode,
        ] {
            assert!(
                t.placements.iter().any(|p| p.binding == binding),
                "missing {binding:?}"
            );
        }
    }

    #[test]
    fn pennsylvania_has_no_barcode_region() {
        let t = pennsylvania();
        assert!(
            !t.placements
                .iter()
                .any(|p| p.binding == FieldBinding::Barcode)
        );
    }

    #[test]
    fn all_placements_sit_inside_the_card() {
        for t in [slovenia(), pennsylvania()] {
            for p in &t.placements {
                assert!(p.x >= 0.0 && p.x <= CARD_WIDTH, "{:?}", p.binding);
                assert!(p.y >= 0.0 && p.y <= CARD_HEIGHT, "{:?}", p.binding);
                assert!(p.x + p.width <= CARD_WIDTH + 0.1, "{:?}", p.binding);
                assert!(p.y + p.height <= CARD_HEIGHT + 0.1, "{:?}", p.binding);
            }
        }
    }

    #[test]
    fn unsupported_template_is_placeholder_only() {
        let t = unsupported(&JurisdictionCode::Other("XX".into()));
        assert!(t.placements.is_empty());
        assert_eq!(t.decor.len(), 1);
    }
}
