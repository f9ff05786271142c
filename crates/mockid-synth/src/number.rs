// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document-number synthesis. The format is a pure function of the
// jurisdiction code; the trailing check digit is drawn uniformly at random
// rather than computed from the preceding digits.

use chrono::{Datelike, NaiveDate};
use mockid_core::types::JurisdictionCode;
use rand::Rng;

/// Generate a document number in the jurisdiction's format, as of `today`.
///
/// | Code    | Pattern                                              |
/// |---------|------------------------------------------------------|
/// | `US-NY` | `NY` + year (2 digits) + 6 digits + check digit      |
/// | `US-PA` | `PA` + 8 digits + check digit                        |
/// | `SI`    | `SI` + date as `YYMMDD` + 4 digits + check digit     |
/// | other   | the code itself + 9 digits                           |
pub fn document_number<R: Rng + ?Sized>(
    code: &JurisdictionCode,
    rng: &mut R,
    today: NaiveDate,
) -> String {
    match code {
        JurisdictionCode::UsNy => format!(
            "NY{:02}{}{}",
            today.year() % 100,
            rng.gen_range(100_000..1_000_000u32),
            check_digit(rng),
        ),
        JurisdictionCode::UsPa => format!(
            "PA{}{}",
            rng.gen_range(10_000_000..100_000_000u32),
            check_digit(rng),
        ),
        JurisdictionCode::Si => format!(
            "SI{}{}{}",
            today.format("%y%m%d"),
            rng.gen_range(1_000..10_000u32),
            check_digit(rng),
        ),
        JurisdictionCode::Other(raw) => format!(
            "{raw}{}",
            rng.gen_range(100_000_000..1_000_000_000u32),
        ),
    }
}

/// A single uniformly random digit. Not a checksum.
fn check_digit<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..10)
}
