//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Maximum allowed tax rate, in percent.
const MAX_TAX_RATE: i64 = 100;

lazy_static! {
    /// SKU format: alphanumeric start, then alphanumerics, dots, dashes or
    /// underscores, at most 64 characters in total.
    static ref SKU_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,63}$").expect("invalid SKU regex");
}

/// Validates that a monetary amount is strictly positive.
pub fn validate_positive_amount(value: Decimal) -> Result<(), ValidationError> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_positive");
        err.message = Some("Amount must be greater than zero".into());
        Err(err)
    }
}

/// Validates that a monetary amount is non-negative.
pub fn validate_non_negative_amount(value: Decimal) -> Result<(), ValidationError> {
    if value >= Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_negative");
        err.message = Some("Amount must be non-negative".into());
        Err(err)
    }
}

/// Validates that a tax rate is within valid range (0 to 100 percent).
pub fn validate_tax_rate(value: Decimal) -> Result<(), ValidationError> {
    if value >= Decimal::ZERO && value <= Decimal::from(MAX_TAX_RATE) {
        Ok(())
    } else {
        let mut err = ValidationError::new("tax_rate_range");
        err.message = Some("Tax rate must be between 0 and 100".into());
        Err(err)
    }
}

/// Validates that a product SKU matches the allowed format.
pub fn validate_sku(value: &str) -> Result<(), ValidationError> {
    if SKU_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("sku_format");
        err.message =
            Some("SKU must be alphanumeric with dots, dashes or underscores".into());
        Err(err)
    }
}
