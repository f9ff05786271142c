// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CODE128 encoder — character-set selection, start/stop patterns, and the
// mod-103 checksum symbol. Output is the ordered bar/space module-width
// sequence; rendering (module width, bar height, quiet zones) is the
// renderer's concern.

use mockid_core::error::{MockidError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Module-width patterns for symbol values 0..=105, 3 bars and 3 spaces each
/// (11 modules total). Indexed by symbol value.
const PATTERNS: [&str; 106] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", //
    "132212", "221213", "221312", "231212", "112232", "122132", "122231", "113222", //
    "123122", "123221", "223211", "221132", "221231", "213212", "223112", "312131", //
    "311222", "321122", "321221", "312212", "322112", "322211", "212123", "212321", //
    "232121", "111323", "131123", "131321", "112313", "132113", "132311", "211313", //
    "231113", "231311", "112133", "112331", "132131", "113123", "113321", "133121", //
    "313121", "211331", "231131", "213113", "213311", "213131", "311123", "311321", //
    "331121", "312113", "312311", "332111", "314111", "221411", "431111", "111224", //
    "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114", //
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", //
    "111242", "121142", "121241", "114212", "124112", "124211", "411212", "421112", //
    "421211", "212141", "214121", "412121", "111143", "111341", "131141", "114113", //
    "114311", "411113", "411311", "113141", "114131", "311141", "411131", "211412", //
    "211214", "211232",
];

/// Stop pattern: 4 bars and 3 spaces, 13 modules.
const STOP_PATTERN: &str = "2331112";

/// Switch-to-Code-C symbol value (from Code B).
const CODE_C: u8 = 99;
/// Start symbol values.
const START_B: u8 = 104;
const START_C: u8 = 105;

/// One bar or space in a barcode, measured in modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeBar {
    /// Width in modules (1..=4).
    pub modules: u8,
    /// True for ink, false for space.
    pub ink: bool,
}

/// An encoded CODE128 symbol: the source string and its bar/space sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeSymbol {
    /// The string this symbol encodes.
    pub data: String,
    /// Alternating bar/space widths, starting and ending with ink. Empty for
    /// empty input.
    pub bars: Vec<BarcodeBar>,
}

impl BarcodeSymbol {
    /// Whether there is anything to render.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Total symbol width in modules (excluding quiet zones).
    pub fn total_modules(&self) -> u32 {
        self.bars.iter().map(|b| b.modules as u32).sum()
    }
}

/// Encode a string as a CODE128 symbol.
///
/// Fully numeric even-length input encodes in Code C; otherwise Code B is
/// used, switching to Code C for an all-digit tail of even length >= 4. The
/// empty string yields an empty symbol (the caller skips rendering it).
/// Characters outside the Code B range (ASCII 32..=126) are rejected.
pub fn encode(data: &str) -> Result<BarcodeSymbol> {
    if data.is_empty() {
        return Ok(BarcodeSymbol {
            data: String::new(),
            bars: Vec::new(),
        });
    }

    let values = select_symbols(data)?;
    let checksum = checksum(&values);

    let mut bars = Vec::with_capacity((values.len() + 1) * 6 + 7);
    for value in values.iter().chain(std::iter::once(&checksum)) {
        push_pattern(&mut bars, PATTERNS[*value as usize]);
    }
    push_pattern(&mut bars, STOP_PATTERN);

    debug!(
        data_len = data.len(),
        symbols = values.len() + 2,
        checksum,
        "CODE128 symbol encoded"
    );

    Ok(BarcodeSymbol {
        data: data.to_string(),
        bars,
    })
}

/// Select the symbol value sequence (start symbol + data symbols, without
/// checksum and stop).
fn select_symbols(data: &str) -> Result<Vec<u8>> {
    let bytes = data.as_bytes();

    // Pure digit payload of even length: Code C throughout.
    if bytes.len() >= 2 && bytes.len() % 2 == 0 && bytes.iter().all(u8::is_ascii_digit) {
        let mut values = vec![START_C];
        for pair in bytes.chunks_exact(2) {
            values.push((pair[0] - b'0') * 10 + (pair[1] - b'0'));
        }
        return Ok(values);
    }

    let mut values = vec![START_B];
    let mut i = 0;
    while i < bytes.len() {
        let tail = &bytes[i..];
        // An all-digit tail of even length compacts as Code C pairs.
        if tail.len() >= 4 && tail.len() % 2 == 0 && tail.iter().all(u8::is_ascii_digit) {
            values.push(CODE_C);
            for pair in tail.chunks_exact(2) {
                values.push((pair[0] - b'0') * 10 + (pair[1] - b'0'));
            }
            break;
        }
        let byte = bytes[i];
        if !(32..=126).contains(&byte) {
            return Err(MockidError::Unencodable(data[i..].chars().next().unwrap_or('?')));
        }
        values.push(byte - 32);
        i += 1;
    }
    Ok(values)
}

/// Mod-103 checksum: start value plus position-weighted data values.
fn checksum(values: &[u8]) -> u8 {
    let sum: u64 = values
        .iter()
        .enumerate()
        .map(|(i, v)| (i.max(1) as u64) * (*v as u64))
        .sum();
    (sum % 103) as u8
}

/// Append a width pattern as alternating bar/space entries, starting with ink.
fn push_pattern(bars: &mut Vec<BarcodeBar>, pattern: &str) {
    for (i, ch) in pattern.bytes().enumerate() {
        bars.push(BarcodeBar {
            modules: ch - b'0',
            ink: i % 2 == 0,
        });
    }
}
