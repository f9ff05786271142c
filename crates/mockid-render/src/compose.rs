// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scene composition — maps a template's field placements onto the person
// record and synthesized credential. Pure: reads its inputs, mutates
// nothing, and returns a fresh scene each call.

use mockid_barcode::BarcodeSymbol;
use mockid_core::AppConfig;
use mockid_core::types::{PersonRecord, Photo, SyntheticCredential};
use mockid_synth::dates;
use tracing::debug;

use crate::scene::{RenderedScene, SceneNode};
use crate::template::{
    Align, Decor, FieldBinding, FieldPlacement, JurisdictionTemplate, LABEL_GRAY, TextStyle,
};

/// Quiet zone on each side of the barcode, in modules.
const QUIET_ZONE_MODULES: f32 = 10.0;

/// Compose a card scene from the template, record, credential, barcode, and
/// optional photo.
///
/// The card geometry is fixed: long values overflow their placements rather
/// than wrapping or truncating. A missing photo yields a placeholder
/// primitive; an empty barcode symbol omits the barcode region.
pub fn compose(
    template: &JurisdictionTemplate,
    record: &PersonRecord,
    credential: &SyntheticCredential,
    barcode: &BarcodeSymbol,
    photo: Option<&Photo>,
    config: &AppConfig,
) -> RenderedScene {
    let mut nodes = Vec::new();

    for decor in &template.decor {
        nodes.push(match decor {
            Decor::Rect {
                x,
                y,
                width,
                height,
                color,
            } => SceneNode::Rect {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
                color: *color,
            },
            Decor::Text { x, y, style, content } => SceneNode::Text {
                x: *x,
                y: *y,
                style: *style,
                content: content.clone(),
            },
        });
    }

    for placement in &template.placements {
        place_field(&mut nodes, placement, template, record, credential, barcode, photo, config);
    }

    debug!(
        code = %template.code,
        nodes = nodes.len(),
        has_photo = photo.is_some(),
        "scene composed"
    );

    RenderedScene {
        code: template.code.clone(),
        background: template.background,
        nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn place_field(
    nodes: &mut Vec<SceneNode>,
    placement: &FieldPlacement,
    template: &JurisdictionTemplate,
    record: &PersonRecord,
    credential: &SyntheticCredential,
    barcode: &BarcodeSymbol,
    photo: Option<&Photo>,
    config: &AppConfig,
) {
    match placement.binding {
        FieldBinding::Photo => {
            nodes.push(match photo {
                Some(p) => SceneNode::Photo {
                    x: placement.x,
                    y: placement.y,
                    width: placement.width,
                    height: placement.height,
                    photo: p.clone(),
                },
                None => SceneNode::Placeholder {
                    x: placement.x,
                    y: placement.y,
                    width: placement.width,
                    height: placement.height,
                    label: "PHOTO".to_string(),
                },
            });
        }
        FieldBinding::Signature => {
            nodes.push(SceneNode::Signature {
                x: placement.x,
                y: placement.y,
                width: placement.width,
                height: placement.height,
                path: credential.signature.clone(),
            });
        }
        FieldBinding::Barcode => {
            if barcode.is_empty() {
                return;
            }
            let natural_width = (barcode.total_modules() as f32
                + 2.0 * QUIET_ZONE_MODULES)
                * config.barcode_module_width;
            let x = placement.x + (placement.width - natural_width) / 2.0;
            nodes.push(SceneNode::Barcode {
                x: x + QUIET_ZONE_MODULES * config.barcode_module_width,
                y: placement.y,
                module_width: config.barcode_module_width,
                height: config.barcode_height.min(placement.height),
                symbol: barcode.clone(),
            });
        }
        _ => {
            let value = resolve_text(placement.binding, template, record, credential);
            let content = match &placement.prefix {
                Some(prefix) => format!("{prefix}{value}"),
                None => value,
            };
            if let Some(label) = &placement.label {
                nodes.push(SceneNode::Text {
                    x: placement.x + label.dx,
                    y: placement.y + label.dy,
                    style: TextStyle {
                        size: label.size,
                        color: LABEL_GRAY,
                        align: Align::Left,
                    },
                    content: label.text.clone(),
                });
            }
            nodes.push(SceneNode::Text {
                x: placement.x,
                y: placement.y,
                style: placement.style,
                content,
            });
        }
    }
}

/// Resolve a text binding against the record and credential.
fn resolve_text(
    binding: FieldBinding,
    template: &JurisdictionTemplate,
    record: &PersonRecord,
    credential: &SyntheticCredential,
) -> String {
    let code = &template.code;
    match binding {
        FieldBinding::FirstName => record.first_name.to_uppercase(),
        FieldBinding::LastName => record.last_name.to_uppercase(),
        FieldBinding::NameReversed => format!(
            "{}, {}",
            record.last_name.to_uppercase(),
            record.first_name.to_uppercase()
        ),
        FieldBinding::Address => record.address.clone(),
        FieldBinding::City => record.city.clone(),
        FieldBinding::DateOfBirth => dates::format_date_str(&record.date_of_birth, code),
        FieldBinding::Gender => record.gender.clone(),
        FieldBinding::Height => record.height.clone(),
        FieldBinding::EyeColor => record.eye_color.clone(),
        FieldBinding::DocumentNumber => credential.number.clone(),
        FieldBinding::IssueDate => dates::format_date(credential.issue_date, code),
        FieldBinding::ExpiryDate => dates::format_date(credential.expiry_date, code),
        // Region bindings are handled in place_field.
        FieldBinding::Photo | FieldBinding::Signature | FieldBinding::Barcode => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{self, INK};
    use chrono::NaiveDate;
    use mockid_core::types::JurisdictionCode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record() -> PersonRecord {
        PersonRecord {
            first_name: "Ana".into(),
            last_name: "Novak".into(),
            address: "Trubarjeva 1".into(),
            city: "Ljubljana".into(),
            date_of_birth: "1990-05-15".into(),
            gender: "F".into(),
            height: "5-6".into(),
            eye_color: "GRN".into(),
            photo: None,
        }
    }

    fn credential(code: &JurisdictionCode) -> SyntheticCredential {
        mockid_synth::synthesize_at(
            code,
            &mut StdRng::seed_from_u64(5),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        )
    }

    fn photo() -> Photo {
        Photo {
            width: 2,
            height: 2,
            pixels: vec![128; 16],
        }
    }

    #[test]
    fn missing_photo_yields_placeholder_node() {
        let template = template::slovenia();
        let cred = credential(&JurisdictionCode::Si);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let scene = compose(&template, &record(), &cred, &barcode, None, &AppConfig::default());
        assert!(
            scene
                .find(|n| matches!(n, SceneNode::Placeholder { .. }))
                .is_some()
        );
        assert!(scene.find(|n| matches!(n, SceneNode::Photo { .. })).is_none());
    }

    #[test]
    fn present_photo_replaces_the_placeholder() {
        let template = template::slovenia();
        let cred = credential(&JurisdictionCode::Si);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let p = photo();
        let scene = compose(
            &template,
            &record(),
            &cred,
            &barcode,
            Some(&p),
            &AppConfig::default(),
        );
        assert!(scene.find(|n| matches!(n, SceneNode::Photo { .. })).is_some());
        assert!(
            scene
                .find(|n| matches!(n, SceneNode::Placeholder { .. }))
                .is_none()
        );
    }

    #[test]
    fn names_render_uppercase_with_slovenian_dates() {
        let template = template::slovenia();
        let cred = credential(&JurisdictionCode::Si);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let scene = compose(&template, &record(), &cred, &barcode, None, &AppConfig::default());
        assert!(scene.contains_text("NOVAK"));
        assert!(scene.contains_text("ANA"));
        assert!(scene.contains_text("15. 05. 1990"));
        assert!(scene.contains_text(&cred.number));
    }

    #[test]
    fn pennsylvania_footer_carries_dl_prefix() {
        let template = template::pennsylvania();
        let cred = credential(&JurisdictionCode::UsPa);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let scene = compose(&template, &record(), &cred, &barcode, None, &AppConfig::default());
        assert!(scene.contains_text(&format!("DL-{}", cred.number)));
        assert!(scene.contains_text("NOVAK, ANA"));
        assert!(scene.contains_text("05/15/1990"));
    }

    #[test]
    fn malformed_date_of_birth_renders_as_na() {
        let template = template::slovenia();
        let cred = credential(&JurisdictionCode::Si);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let mut r = record();
        r.date_of_birth = "fifteenth of May".into();
        let scene = compose(&template, &r, &cred, &barcode, None, &AppConfig::default());
        assert!(scene.contains_text("N/A"));
    }

    #[test]
    fn empty_barcode_symbol_omits_the_region() {
        let template = template::slovenia();
        let cred = credential(&JurisdictionCode::Si);
        let empty = mockid_barcode::encode("").unwrap();
        let scene = compose(&template, &record(), &cred, &empty, None, &AppConfig::default());
        assert!(scene.find(|n| matches!(n, SceneNode::Barcode { .. })).is_none());
    }

    #[test]
    fn barcode_is_centered_within_its_region() {
        let template = template::slovenia();
        let cred = credential(&JurisdictionCode::Si);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let scene = compose(&template, &record(), &cred, &barcode, None, &AppConfig::default());
        let Some(SceneNode::Barcode { x, module_width, symbol, .. }) =
            scene.find(|n| matches!(n, SceneNode::Barcode { .. }))
        else {
            panic!("no barcode node");
        };
        let width = symbol.total_modules() as f32 * module_width;
        let left = x;
        let right = mockid_core::types::CARD_WIDTH - (left + width);
        assert!((left - right).abs() < 0.5, "left {left} right {right}");
    }

    #[test]
    fn unsupported_template_composes_a_placeholder_card() {
        let code = JurisdictionCode::Other("XX".into());
        let template = template::unsupported(&code);
        let cred = credential(&code);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let scene = compose(&template, &record(), &cred, &barcode, None, &AppConfig::default());
        assert!(scene.contains_text("SELECT A JURISDICTION"));
        assert!(!scene.contains_text(&cred.number));
    }

    #[test]
    fn eye_color_binding_resolves_for_custom_layouts() {
        let mut template = template::slovenia();
        template.placements.push(FieldPlacement {
            binding: FieldBinding::EyeColor,
            x: 232.0,
            y: 139.0,
            width: 0.0,
            height: 0.0,
            style: TextStyle::left(6.0, INK),
            prefix: None,
            label: None,
        });
        let cred = credential(&JurisdictionCode::Si);
        let barcode = mockid_barcode::encode(&cred.number).unwrap();
        let scene = compose(&template, &record(), &cred, &barcode, None, &AppConfig::default());
        assert!(scene.contains_text("GRN"));
    }
}
