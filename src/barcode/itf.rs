//! Interleaved 2 of 5 (ITF) encoding.

use crate::core::{AfipError, BarcodePayload};

/// Narrow/wide pattern for each digit; `true` is wide.
const DIGIT_PATTERNS: [[bool; 5]; 10] = [
    [false, false, true, true, false], // 0 NNWWN
    [true, false, false, false, true], // 1 WNNNW
    [false, true, false, false, true], // 2 NWNNW
    [true, true, false, false, false], // 3 WWNNN
    [false, false, true, false, true], // 4 NNWNW
    [true, false, true, false, false], // 5 WNWNN
    [false, true, true, false, false], // 6 NWWNN
    [false, false, false, true, true], // 7 NNNWW
    [true, false, false, true, false], // 8 WNNWN
    [false, true, false, true, false], // 9 NWNWN
];

/// Default wide-to-narrow element ratio.
pub const DEFAULT_WIDE_RATIO: usize = 3;

/// An encoded Interleaved 2 of 5 barcode.
///
/// Stored as a flat module sequence where `true` is a bar and `false` a
/// space, each module one narrow unit wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interleaved2of5 {
    data: String,
    modules: Vec<bool>,
}

impl Interleaved2of5 {
    /// Encode a barcode payload with the default wide ratio.
    pub fn encode(payload: &BarcodePayload) -> Self {
        // BarcodePayload is always even-length digits.
        Self::build(payload.as_str(), DEFAULT_WIDE_RATIO)
    }

    /// Encode an arbitrary digit string.
    ///
    /// Fails if `data` is empty, has odd length, or contains non-digits, or
    /// if `wide_ratio` is not greater than one.
    pub fn from_digits(data: &str, wide_ratio: usize) -> Result<Self, AfipError> {
        if data.is_empty() || data.len() % 2 != 0 {
            return Err(AfipError::InvalidBarcodeData(format!(
                "'{data}' must have a non-zero even number of digits"
            )));
        }
        if !data.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AfipError::InvalidBarcodeData(format!(
                "'{data}' must contain only digits"
            )));
        }
        if wide_ratio < 2 {
            return Err(AfipError::InvalidBarcodeData(format!(
                "wide ratio {wide_ratio} must be at least 2"
            )));
        }
        Ok(Self::build(data, wide_ratio))
    }

    fn build(data: &str, wide_ratio: usize) -> Self {
        let digits = data.as_bytes();
        let mut modules = Vec::with_capacity(9 + digits.len() * (2 * wide_ratio + 3));

        // start: narrow bar, narrow space, narrow bar, narrow space
        modules.extend([true, false, true, false]);

        for pair in digits.chunks_exact(2) {
            let bars = DIGIT_PATTERNS[usize::from(pair[0] - b'0')];
            let spaces = DIGIT_PATTERNS[usize::from(pair[1] - b'0')];
            for (bar_wide, space_wide) in bars.into_iter().zip(spaces) {
                push_element(&mut modules, true, bar_wide, wide_ratio);
                push_element(&mut modules, false, space_wide, wide_ratio);
            }
        }

        // stop: wide bar, narrow space, narrow bar
        push_element(&mut modules, true, true, wide_ratio);
        modules.extend([false, true]);

        Self {
            data: data.to_string(),
            modules,
        }
    }

    /// The encoded digits.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Total width in narrow units.
    pub fn width(&self) -> usize {
        self.modules.len()
    }

    /// Modules as `1` (bar) and `0` (space).
    pub fn to_module_string(&self) -> String {
        self.modules.iter().map(|&m| if m { '1' } else { '0' }).collect()
    }

    /// Single-row HTML table with one cell per module.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.modules.len() * 32 + 96);
        html.push_str("<table class=\"barcode\"><tbody><tr class=\"barcode-row\">");
        for &m in &self.modules {
            html.push_str(if m {
                "<td class=\"barcode-cell on\"></td>"
            } else {
                "<td class=\"barcode-cell off\"></td>"
            });
        }
        html.push_str("</tr></tbody></table>");
        html
    }
}

fn push_element(modules: &mut Vec<bool>, bar: bool, wide: bool, wide_ratio: usize) {
    let width = if wide { wide_ratio } else { 1 };
    modules.extend(std::iter::repeat_n(bar, width));
}
