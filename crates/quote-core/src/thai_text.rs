//! # Thai Numeral Text
//!
//! Reads a monetary amount out in Thai, the way it is written in the footer
//! of a quotation or on a cheque.
//!
//! ## Shape of the Output
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount        text                                                     │
//! │  ──────        ────                                                     │
//! │  0.00          ศูนย์บาทถ้วน                                              │
//! │  21.00         ยี่สิบเอ็ด + บาท + ถ้วน                                    │
//! │  100.50        หนึ่งร้อย + บาท + ห้าสิบ + สตางค์                            │
//! │  0.05          ศูนย์ + บาท + ห้า + สตางค์                                   │
//! │                                                                         │
//! │  numeral(baht) บาท ( numeral(satang) สตางค์ | ถ้วน )                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numerals
//! Each non-zero digit emits a digit word and the suffix of its place.
//! Three digit/place pairs are irregular and live in [`IRREGULAR_DIGITS`]:
//!
//! | place | digit | word   | note                                  |
//! |-------|-------|--------|---------------------------------------|
//! | 1     | 1     | (none) | สิบ, never หนึ่งสิบ                    |
//! | 1     | 2     | ยี่     | ยี่สิบ, never สองสิบ                    |
//! | 0     | 1     | เอ็ด    | only inside a numeral longer than one |
//!
//! Place values stop at แสน. Larger numbers are cut into groups of six
//! digits: the part above a million is read recursively and followed by
//! ล้าน, so `21,000,001` reads ยี่สิบเอ็ดล้านเอ็ด.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Ordinary digit words, indexed by digit.
const DIGIT_WORDS: [&str; 10] = [
    "ศูนย์", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];

/// Place suffixes within a six-digit group, indexed by place value.
const PLACE_SUFFIXES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

const MILLION: &str = "ล้าน";
const GROUP_SCALE: u64 = 1_000_000;

const BAHT: &str = "บาท";
const SATANG: &str = "สตางค์";
const EXACTLY: &str = "ถ้วน";

/// Text for an amount of exactly zero.
pub const ZERO_BAHT_TEXT: &str = "ศูนย์บาทถ้วน";

/// A digit whose word changes at a particular place.
#[derive(Debug, Clone, Copy)]
struct IrregularDigit {
    place: usize,
    digit: u8,
    word: &'static str,
    /// Applies only when the digit is part of a numeral with more than one
    /// digit (a lone 1 stays หนึ่ง).
    multi_digit_only: bool,
}

const IRREGULAR_DIGITS: [IrregularDigit; 3] = [
    IrregularDigit {
        place: 0,
        digit: 1,
        word: "เอ็ด",
        multi_digit_only: true,
    },
    IrregularDigit {
        place: 1,
        digit: 1,
        word: "",
        multi_digit_only: false,
    },
    IrregularDigit {
        place: 1,
        digit: 2,
        word: "ยี่",
        multi_digit_only: false,
    },
];

// =============================================================================
// Public API
// =============================================================================

/// Reads a non-negative amount out as Thai baht text.
///
/// The amount is fixed to two decimals first (see
/// [`Money::try_from_amount`]), so the text always matches the printed
/// figure. Pass the unrounded grand total straight from the totals engine.
///
/// ## Errors
/// [`CoreError::InvalidAmount`] for negative, NaN, infinite or oversized
/// amounts. Nothing partial is ever returned.
///
/// ## Example
/// ```rust
/// use quote_core::thai_text::amount_to_thai_text;
///
/// assert_eq!(amount_to_thai_text(0.0).unwrap(), "ศูนย์บาทถ้วน");
/// assert_eq!(amount_to_thai_text(21.0).unwrap(), "ยี่สิบเอ็ดบาทถ้วน");
/// assert_eq!(amount_to_thai_text(100.5).unwrap(), "หนึ่งร้อยบาทห้าสิบสตางค์");
/// assert!(amount_to_thai_text(-3.0).is_err());
/// ```
pub fn amount_to_thai_text(amount: f64) -> CoreResult<String> {
    money_to_thai_text(Money::try_from_amount(amount)?)
}

/// Reads an already fixed amount out as Thai baht text.
///
/// ## Errors
/// [`CoreError::InvalidAmount`] if the value is negative.
pub fn money_to_thai_text(money: Money) -> CoreResult<String> {
    if money.satang() < 0 {
        return Err(CoreError::InvalidAmount {
            amount: money.satang() as f64 / 100.0,
            reason: "amount must not be negative".to_string(),
        });
    }

    if money.is_zero() {
        return Ok(ZERO_BAHT_TEXT.to_string());
    }

    let mut text = numeral_text(money.baht() as u64);
    text.push_str(BAHT);

    let satang = money.satang_part() as u64;
    if satang > 0 {
        // 1-9 satang are read as a lone digit: 0.01 is หนึ่ง, not เอ็ด
        push_numeral(satang, false, &mut text);
        text.push_str(SATANG);
    } else {
        text.push_str(EXACTLY);
    }

    Ok(text)
}

/// Spoken Thai numeral for a whole number, e.g. `111` → หนึ่งร้อยสิบเอ็ด.
///
/// Zero reads ศูนย์.
pub fn numeral_text(value: u64) -> String {
    if value == 0 {
        return DIGIT_WORDS[0].to_string();
    }

    let mut text = String::new();
    push_numeral(value, false, &mut text);
    text
}

// =============================================================================
// Digit Group Rendering
// =============================================================================

/// Appends the numeral for `value`.
///
/// `continues` is true when the value is the tail of a longer numeral
/// (the group after ล้าน), which makes a trailing 1 read เอ็ด.
fn push_numeral(value: u64, continues: bool, out: &mut String) {
    if value >= GROUP_SCALE {
        push_numeral(value / GROUP_SCALE, continues, out);
        out.push_str(MILLION);
        push_group(value % GROUP_SCALE, true, out);
    } else {
        push_group(value, continues, out);
    }
}

/// Appends one group of at most six digits. Zero digits emit nothing.
fn push_group(value: u64, continues: bool, out: &mut String) {
    let digits = value.to_string();
    let len = digits.len();
    let multi_digit = continues || len > 1;

    for (i, byte) in digits.bytes().enumerate() {
        let digit = byte - b'0';
        if digit == 0 {
            continue;
        }

        let place = len - i - 1;
        out.push_str(digit_word(place, digit, multi_digit));
        out.push_str(PLACE_SUFFIXES[place]);
    }
}

/// Word for `digit` at `place`, applying the irregular table first.
fn digit_word(place: usize, digit: u8, multi_digit: bool) -> &'static str {
    IRREGULAR_DIGITS
        .iter()
        .find(|rule| {
            rule.place == place
                && rule.digit == digit
                && (multi_digit || !rule.multi_digit_only)
        })
        .map(|rule| rule.word)
        .unwrap_or(DIGIT_WORDS[digit as usize])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(amount: f64) -> String {
        amount_to_thai_text(amount).unwrap()
    }

    #[test]
    fn test_units_place_rules() {
        assert_eq!(digit_word(0, 1, false), "หนึ่ง");
        assert_eq!(digit_word(0, 1, true), "เอ็ด");
        assert_eq!(digit_word(0, 2, true), "สอง");
        assert_eq!(digit_word(0, 9, false), "เก้า");
    }

    #[test]
    fn test_tens_place_rules() {
        assert_eq!(digit_word(1, 1, true), "");
        assert_eq!(digit_word(1, 2, true), "ยี่");
        assert_eq!(digit_word(1, 3, true), "สาม");
    }

    #[test]
    fn test_higher_places_are_regular() {
        for place in 2..PLACE_SUFFIXES.len() {
            assert_eq!(digit_word(place, 1, true), "หนึ่ง");
            assert_eq!(digit_word(place, 2, true), "สอง");
        }
    }

    #[test]
    fn test_zero() {
        assert_eq!(text(0.0), "ศูนย์บาทถ้วน");
        assert_eq!(text(0.001), "ศูนย์บาทถ้วน");
    }

    #[test]
    fn test_single_one_uses_ordinary_word() {
        assert_eq!(text(1.0), "หนึ่งบาทถ้วน");
    }

    #[test]
    fn test_eleven_and_twenty_one() {
        assert_eq!(text(11.0), "สิบเอ็ดบาทถ้วน");
        assert_eq!(text(21.0), "ยี่สิบเอ็ดบาทถ้วน");
        assert_eq!(text(20.0), "ยี่สิบบาทถ้วน");
        assert_eq!(text(10.0), "สิบบาทถ้วน");
    }

    #[test]
    fn test_hundred_with_satang() {
        assert_eq!(text(100.50), "หนึ่งร้อยบาทห้าสิบสตางค์");
    }

    #[test]
    fn test_single_digit_satang() {
        assert_eq!(text(0.05), "ศูนย์บาทห้าสตางค์");
        assert_eq!(text(0.01), "ศูนย์บาทหนึ่งสตางค์");
        assert_eq!(text(3.01), "สามบาทหนึ่งสตางค์");
    }

    #[test]
    fn test_two_digit_satang_exceptions() {
        assert_eq!(text(0.11), "ศูนย์บาทสิบเอ็ดสตางค์");
        assert_eq!(text(5.21), "ห้าบาทยี่สิบเอ็ดสตางค์");
        assert_eq!(text(5.10), "ห้าบาทสิบสตางค์");
    }

    #[test]
    fn test_whole_amount_ends_with_exactly() {
        for amount in [1.0, 7.0, 90.0, 101.0, 2996.0, 1_000_000.0] {
            let t = text(amount);
            assert!(t.ends_with("บาทถ้วน"), "{amount}: {t}");
            assert!(!t.contains(SATANG));
        }
    }

    #[test]
    fn test_quotation_total() {
        // 1 × 2,800.00 plus 7% VAT
        assert_eq!(text(2800.0 * 1.07), "สองพันเก้าร้อยเก้าสิบหกบาทถ้วน");
        assert_eq!(text(35.6631), "สามสิบห้าบาทหกสิบหกสตางค์");
    }

    #[test]
    fn test_text_follows_stored_value_rounding() {
        assert_eq!(text(1.115), "หนึ่งบาทสิบเอ็ดสตางค์");
        assert_eq!(text(2.675), "สองบาทหกสิบเจ็ดสตางค์");
    }

    #[test]
    fn test_place_values_up_to_hundred_thousand() {
        assert_eq!(text(101.0), "หนึ่งร้อยเอ็ดบาทถ้วน");
        assert_eq!(text(1_234.0), "หนึ่งพันสองร้อยสามสิบสี่บาทถ้วน");
        assert_eq!(text(50_000.0), "ห้าหมื่นบาทถ้วน");
        assert_eq!(
            text(999_999.0),
            "เก้าแสนเก้าหมื่นเก้าพันเก้าร้อยเก้าสิบเก้าบาทถ้วน"
        );
    }

    #[test]
    fn test_million_groups() {
        assert_eq!(text(1_000_000.0), "หนึ่งล้านบาทถ้วน");
        assert_eq!(text(1_000_001.0), "หนึ่งล้านเอ็ดบาทถ้วน");
        assert_eq!(text(10_000_000.0), "สิบล้านบาทถ้วน");
        assert_eq!(text(21_000_021.0), "ยี่สิบเอ็ดล้านยี่สิบเอ็ดบาทถ้วน");
        assert_eq!(text(1_500_000.25), "หนึ่งล้านห้าแสนบาทยี่สิบห้าสตางค์");
        assert_eq!(numeral_text(1_000_000_000_000), "หนึ่งล้านล้าน");
    }

    #[test]
    fn test_invalid_amounts() {
        assert!(matches!(
            amount_to_thai_text(-1.0),
            Err(CoreError::InvalidAmount { .. })
        ));
        assert!(amount_to_thai_text(f64::NAN).is_err());
        assert!(amount_to_thai_text(f64::NEG_INFINITY).is_err());
        assert!(money_to_thai_text(Money::from_satang(-100)).is_err());
    }

    #[test]
    fn test_idempotent() {
        let first = text(123_456.78);
        let second = text(123_456.78);
        assert_eq!(first, second);
        assert_eq!(first, "หนึ่งแสนสองหมื่นสามพันสี่ร้อยห้าสิบหกบาทเจ็ดสิบแปดสตางค์");
    }
}
