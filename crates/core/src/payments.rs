//! Membership fee (payment status) rules.

use rust_decimal::Decimal;

/// `NUMERIC(10,2)` allows at most eight digits before the decimal point.
const MAX_INTEGER_DIGITS: u32 = 8;

/// Amounts must be non-negative, have at most two decimal places, and fit
/// into `NUMERIC(10,2)`.
pub fn validate_amount(amount: Decimal) -> Result<(), String> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err("Amount cannot be negative".to_string());
    }
    if amount.normalize().scale() > 2 {
        return Err("Amount can have at most two decimal places".to_string());
    }
    if amount.trunc() >= Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS)) {
        return Err("Amount is too large".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn accepts_typical_fee() {
        assert!(validate_amount(dec("3500.00")).is_ok());
        assert!(validate_amount(dec("0")).is_ok());
        assert!(validate_amount(dec("12.50")).is_ok());
    }

    #[test]
    fn rejects_negative() {
        assert!(validate_amount(dec("-1")).is_err());
    }

    #[test]
    fn rejects_sub_cent_precision() {
        assert!(validate_amount(dec("1.005")).is_err());
        // Trailing zeros do not count as precision.
        assert!(validate_amount(dec("1.5000")).is_ok());
    }

    #[test]
    fn rejects_overflowing_amount() {
        assert!(validate_amount(dec("99999999.99")).is_ok());
        assert!(validate_amount(dec("100000000")).is_err());
    }
}
