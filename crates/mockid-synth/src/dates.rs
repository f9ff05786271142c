// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Issue/expiry date arithmetic and per-jurisdiction display formatting.

use chrono::{Months, NaiveDate};
use mockid_core::types::JurisdictionCode;

/// Validity period of a synthesized credential, in calendar years.
const VALIDITY_YEARS: u32 = 8;

/// Issue date (the synthesis date) and expiry date (issue + 8 calendar
/// years). A Feb 29 issue date whose target year is not a leap year clamps
/// to Feb 28.
pub fn issue_and_expiry(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let expiry = today
        .checked_add_months(Months::new(VALIDITY_YEARS * 12))
        .unwrap_or(today);
    (today, expiry)
}

/// Format a date for display using the jurisdiction's convention: Slovenian
/// `DD. MM. YYYY` for `SI`, generic `MM/DD/YYYY` otherwise.
pub fn format_date(date: NaiveDate, code: &JurisdictionCode) -> String {
    match code {
        JurisdictionCode::Si => date.format("%d. %m. %Y").to_string(),
        _ => date.format("%m/%d/%Y").to_string(),
    }
}

/// Format a date arriving as an ISO `YYYY-MM-DD` string. Malformed input
/// degrades to a literal `"N/A"` instead of aborting the render.
pub fn format_date_str(raw: &str, code: &JurisdictionCode) -> String {
    match raw.parse::<NaiveDate>() {
        Ok(date) => format_date(date, code),
        Err(_) => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expiry_is_exactly_eight_years_out() {
        let (issue, expiry) = issue_and_expiry(day(2026, 8, 30));
        assert_eq!(issue, day(2026, 8, 30));
        assert_eq!(expiry, day(2034, 8, 30));
    }

    #[test]
    fn leap_day_to_leap_year_stays_on_feb_29() {
        let (_, expiry) = issue_and_expiry(day(2024, 2, 29));
        assert_eq!(expiry, day(2032, 2, 29));
    }

    #[test]
    fn leap_day_to_century_year_clamps_to_feb_28() {
        // 2100 is not a leap year.
        let (_, expiry) = issue_and_expiry(day(2092, 2, 29));
        assert_eq!(expiry, day(2100, 2, 28));
    }

    #[test]
    fn slovenian_format_uses_dotted_day_first() {
        assert_eq!(
            format_date(day(1990, 5, 15), &JurisdictionCode::Si),
            "15. 05. 1990"
        );
    }

    #[test]
    fn other_jurisdictions_use_generic_format() {
        assert_eq!(
            format_date(day(1990, 5, 15), &JurisdictionCode::UsPa),
            "05/15/1990"
        );
        assert_eq!(
            format_date(day(1990, 5, 15), &JurisdictionCode::Other("DE".into())),
            "05/15/1990"
        );
    }

    #[test]
    fn malformed_date_string_degrades_to_na() {
        assert_eq!(format_date_str("not-a-date", &JurisdictionCode::Si), "N/A");
        assert_eq!(format_date_str("", &JurisdictionCode::UsPa), "N/A");
        assert_eq!(
            format_date_str("1990-05-15", &JurisdictionCode::Si),
            "15. 05. 1990"
        );
    }
}
