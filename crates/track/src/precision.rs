//! Fixed decimal rounding shared by every resolved value.

/// Decimal places kept by [`round`].
pub const PRECISION: u32 = 4;

/// Largest difference two resolved values may show and still be considered equal.
pub const TOLERANCE: f64 = 5e-4;

/// Round `value` to [`PRECISION`] decimal places.
pub fn round(value: f64) -> f64 {
    round_to(value, PRECISION)
}

/// Round `value` to `precision` decimal places. Non-finite values pass through.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(precision as i32);
    // Adding positive zero turns -0.0 into 0.0.
    (value * factor).round() / factor + 0.0
}

/// Compare two resolved values within [`TOLERANCE`].
pub fn approx_eq(lhs: f64, rhs: f64) -> bool {
    if lhs.is_infinite() || rhs.is_infinite() {
        return lhs.is_infinite()
            && rhs.is_infinite()
            && lhs.is_sign_positive() == rhs.is_sign_positive();
    }
    (lhs - rhs).abs() <= TOLERANCE
}
