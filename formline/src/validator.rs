//! Single-field validators.

use crate::value::Value;

/// A rule over one field's value alone.
///
/// Validators are stateless beyond their construction parameters and carry a
/// short human message for the field's error marker.
pub trait Validator {
    fn validate(&self, value: &Value) -> bool;
    fn message(&self) -> &str;
}

/// Inclusive `[low, high]` check over a value's integer interpretation.
///
/// Accepts `Int` values and enumeration codes alike, so the same validator
/// rejects an out-of-range year and an out-of-table destination code.
/// `Text` and `Empty` values always fail.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    low: i64,
    high: i64,
    message: String,
}

impl RangeValidator {
    pub fn new(low: i64, high: i64) -> Self {
        Self {
            low,
            high,
            message: format!("value must be between {low} and {high}"),
        }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &Value) -> bool {
        match value.as_int() {
            Some(n) => self.low <= n && n <= self.high,
            None => false,
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Rejects text containing any ASCII digit. Non-text values fail.
#[derive(Debug, Clone, Default)]
pub struct NoDigitValidator;

impl NoDigitValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for NoDigitValidator {
    fn validate(&self, value: &Value) -> bool {
        match value.as_text() {
            Some(s) => !s.chars().any(|c| c.is_ascii_digit()),
            None => false,
        }
    }

    fn message(&self) -> &str {
        "must not contain digits"
    }
}

/// Control-digit checksum over a nine-digit ID.
///
/// The decimal digits (left-padded to nine) are weighted alternately
/// 1, 2, 1, 2, ... from the left; a product above 9 has 9 subtracted. The
/// check digit is `(10 - sum % 10) % 10` over the first eight weighted
/// digits and must equal the ninth digit. Weights and modulus are fixed.
#[derive(Debug, Clone, Default)]
pub struct IdValidator;

const ID_DIGITS: usize = 9;

impl IdValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for IdValidator {
    fn validate(&self, value: &Value) -> bool {
        let Some(n) = value.as_int() else {
            return false;
        };
        if n < 0 || n >= 10i64.pow(ID_DIGITS as u32) {
            return false;
        }

        let mut digits = [0u32; ID_DIGITS];
        let mut rest = n as u64;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u32;
            rest /= 10;
        }

        let sum: u32 = digits[..ID_DIGITS - 1]
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                let product = d * if i % 2 == 0 { 1 } else { 2 };
                if product > 9 { product - 9 } else { product }
            })
            .sum();

        (10 - sum % 10) % 10 == digits[ID_DIGITS - 1]
    }

    fn message(&self) -> &str {
        "control digit does not match"
    }
}
