//! Rendering of amounts and balances in messages
//!
//! Values are shown with trailing zeros stripped but always with at least one
//! fractional digit, so `20` is shown as `20.0` and `80.50` as `80.5`.
//! An absent amount is shown as `null`.
//!
//! Values are always written in plain positional notation. Very small and
//! very large values therefore read `-0.0001` and `-10000000.0`, not the
//! `-1.0E-4` and `-1.0E7` scientific forms a floating-point rendering gives.

use rust_decimal::Decimal;

/// Render a decimal value for an error message
pub fn display_decimal(value: &Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

/// Render an optional amount for an error message, `null` when absent
pub fn display_amount(amount: &Option<Decimal>) -> String {
    amount
        .as_ref()
        .map_or_else(|| "null".to_string(), display_decimal)
}
