//! Modulo-10 check digit used in the AFIP barcode.
//!
//! Weights alternate 3, 1, 3, 1, ... starting from the rightmost digit
//! (the same scheme as EAN/GTIN). The check digit brings the weighted sum
//! to a multiple of ten.

use super::error::AfipError;

/// Compute the check digit for a string of decimal digits.
///
/// An empty string has check digit 0.
pub fn check_digit(digits: &str) -> Result<u8, AfipError> {
    let sum = weighted_sum(digits, 3)?;
    let remainder = sum % 10;
    Ok(if remainder == 0 { 0 } else { (10 - remainder) as u8 })
}

/// Verify a digit string whose last digit is a check digit.
///
/// With the check digit in the unit position taking weight 1, the remaining
/// digits keep their 3, 1, ... weights and the total must be a multiple of ten.
pub fn verify_check_digit(digits: &str) -> bool {
    !digits.is_empty() && matches!(weighted_sum(digits, 1), Ok(sum) if sum % 10 == 0)
}

/// Append the check digit to `digits`.
pub fn append_check_digit(digits: &str) -> Result<String, AfipError> {
    let digit = check_digit(digits)?;
    let mut out = String::with_capacity(digits.len() + 1);
    out.push_str(digits);
    out.push(char::from(b'0' + digit));
    Ok(out)
}

fn weighted_sum(digits: &str, unit_weight: u64) -> Result<u64, AfipError> {
    let other_weight = if unit_weight == 3 { 1 } else { 3 };
    digits
        .bytes()
        .rev()
        .enumerate()
        .try_fold(0u64, |sum, (i, b)| {
            if !b.is_ascii_digit() {
                return Err(AfipError::InvalidBarcodeData(format!(
                    "non-digit '{}' in '{digits}'",
                    char::from(b)
                )));
            }
            let weight = if i % 2 == 0 { unit_weight } else { other_weight };
            Ok(sum + u64::from(b - b'0') * weight)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ean13() {
        // 4006381333931 is a valid EAN-13.
        assert_eq!(check_digit("400638133393").unwrap(), 1);
        assert!(verify_check_digit("4006381333931"));
        assert!(!verify_check_digit("4006381333932"));
    }

    #[test]
    fn afip_code() {
        assert_eq!(
            check_digit("2012345678901000016112345678901220240115").unwrap(),
            3
        );
    }

    #[test]
    fn small_inputs() {
        assert_eq!(check_digit("").unwrap(), 0);
        assert_eq!(check_digit("0").unwrap(), 0);
        assert_eq!(check_digit("5").unwrap(), 5);
        assert_eq!(check_digit("12").unwrap(), 3);
        assert_eq!(check_digit("123").unwrap(), 6);
        assert_eq!(check_digit("1234").unwrap(), 8);
    }

    #[test]
    fn append() {
        assert_eq!(append_check_digit("1234").unwrap(), "12348");
        assert_eq!(append_check_digit("30714588734").unwrap(), "307145887344");
    }

    #[test]
    fn rejects_non_digits() {
        assert!(check_digit("12a4").is_err());
        assert!(check_digit("12-4").is_err());
        assert!(!verify_check_digit("12a4"));
        assert!(!verify_check_digit(""));
    }
}
