//! Fixed-point scaling and guarded division

use crate::{MathError, Result};
use num_traits::ToPrimitive;

/// Convert a fixed-point integer into a float by dividing by `10^decimals`.
///
/// Ordinary floating-point rounding applies. Amounts that do not fit an `f64`
/// become `NaN`; use [`scale_by_decimals_checked`] to reject them instead.
///
/// ```
/// use vault_math::scale_by_decimals;
///
/// assert_eq!(scale_by_decimals(1_500_000u64, 6), 1.5);
/// assert_eq!(scale_by_decimals(42u128, 0), 42.0);
/// ```
pub fn scale_by_decimals<T: ToPrimitive>(raw: T, decimals: u32) -> f64 {
    let value = raw.to_f64().unwrap_or(f64::NAN);
    value / pow10(decimals)
}

/// Checked variant of [`scale_by_decimals`] for values coming off the wire.
pub fn scale_by_decimals_checked<T: ToPrimitive>(raw: T, decimals: u32) -> Result<f64> {
    let factor = decimal_factor(decimals)?;
    let value = raw.to_f64().filter(|v| v.is_finite()).ok_or_else(|| {
        MathError::InvalidInput("Raw amount is not representable as f64".to_string())
    })?;

    Ok(value / factor)
}

/// `10^decimals`, or an error when the power overflows to infinity.
pub fn decimal_factor(decimals: u32) -> Result<f64> {
    let factor = pow10(decimals);
    if !factor.is_finite() {
        return Err(MathError::DecimalsOutOfRange(decimals));
    }

    Ok(factor)
}

#[inline]
fn pow10(decimals: u32) -> f64 {
    10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX))
}

/// `a / b`, or `0.0` when `b` is zero.
#[inline]
pub fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}
