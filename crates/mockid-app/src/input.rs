// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Input record construction. The heavy validation framework is an external
// collaborator; this is only the thin step from the delivered form values to
// a typed `PersonRecord`, applying documented defaults.

use mockid_core::error::{MockidError, Result};
use mockid_core::types::{DocumentKind, JurisdictionCode, PersonRecord, Photo};
use serde::{Deserialize, Serialize};

const DEFAULT_GENDER: &str = "M";
const DEFAULT_HEIGHT: &str = "5-10";
const DEFAULT_EYE_COLOR: &str = "BRO";

/// The input contract delivered by the form layer. Field names follow the
/// original wire form (camelCase JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    pub country: String,
    pub document_type: DocumentKind,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
}

impl CardInput {
    /// The jurisdiction this input targets. An empty country is the one
    /// field-level failure the jurisdiction lookup can produce.
    pub fn jurisdiction(&self) -> Result<JurisdictionCode> {
        if self.country.trim().is_empty() {
            return Err(MockidError::MissingField("country".into()));
        }
        Ok(JurisdictionCode::parse(self.country.trim()))
    }

    /// Build the validated person record, attaching an already-decoded photo
    /// if one is available. Empty required fields are recoverable
    /// `MissingField` errors and never reach the synthesis core.
    pub fn into_record(&self, photo: Option<Photo>) -> Result<PersonRecord> {
        let first_name = required(&self.first_name, "firstName")?;
        let last_name = required(&self.last_name, "lastName")?;
        let address = required(&self.address, "address")?;
        let city = required(&self.city, "city")?;
        // The date of birth stays a string: a malformed value renders as
        // "N/A" rather than failing validation.
        let date_of_birth = required(&self.date_of_birth, "dateOfBirth")?;

        Ok(PersonRecord {
            first_name,
            last_name,
            address,
            city,
            date_of_birth,
            gender: defaulted(&self.gender, DEFAULT_GENDER),
            height: defaulted(&self.height, DEFAULT_HEIGHT),
            eye_color: defaulted(&self.eye_color, DEFAULT_EYE_COLOR),
            photo,
        })
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MockidError::MissingField(field.to_string()));
    }
    Ok(trimmed.to_string())
}

fn defaulted(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CardInput {
        CardInput {
            country: "SI".into(),
            document_type: DocumentKind::NationalId,
            first_name: "Ana".into(),
            last_name: "Novak".into(),
            address: "Trubarjeva 1".into(),
            city: "Ljubljana".into(),
            date_of_birth: "1990-05-15".into(),
            gender: None,
            height: None,
            eye_color: None,
        }
    }

    #[test]
    fn optional_fields_get_documented_defaults() {
        let record = input().into_record(None).unwrap();
        assert_eq!(record.gender, "M");
        assert_eq!(record.height, "5-10");
        assert_eq!(record.eye_color, "BRO");
    }

    #[test]
    fn provided_optional_fields_are_kept() {
        let mut i = input();
        i.gender = Some("F".into());
        i.eye_color = Some("BLU".into());
        let record = i.into_record(None).unwrap();
        assert_eq!(record.gender, "F");
        assert_eq!(record.eye_color, "BLU");
    }

    #[test]
    fn empty_required_field_is_a_missing_field_error() {
        let mut i = input();
        i.first_name = "  ".into();
        assert!(matches!(
            i.into_record(None),
            Err(MockidError::MissingField(f)) if f == "firstName"
        ));
    }

    #[test]
    fn malformed_date_of_birth_passes_through_for_lenient_rendering() {
        let mut i = input();
        i.date_of_birth = "15/05/1990".into();
        let record = i.into_record(None).unwrap();
        assert_eq!(record.date_of_birth, "15/05/1990");
    }

    #[test]
    fn empty_country_is_missing_but_unknown_country_is_not() {
        let mut i = input();
        i.country = "".into();
        assert!(matches!(
            i.jurisdiction(),
            Err(MockidError::MissingField(_))
        ));
        i.country = "XX".into();
        assert_eq!(
            i.jurisdiction().unwrap(),
            JurisdictionCode::Other("XX".into())
        );
    }

    #[test]
    fn wire_form_deserializes_from_camel_case_json() {
        let json = r#"{
            "country": "US-PA",
            "documentType": "DRIVERS_LICENSE",
            "firstName": "Sam",
            "lastName": "Miller",
            "address": "1 Main St",
            "city": "Pittsburgh",
            "dateOfBirth": "1985-02-20",
            "eyeColor": "GRN"
        }"#;
        let parsed: CardInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.document_type, DocumentKind::DriversLicense);
        assert_eq!(parsed.eye_color.as_deref(), Some("GRN"));
        assert!(parsed.gender.is_none());
    }
}
