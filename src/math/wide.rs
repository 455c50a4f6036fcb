//! Widened multiply-then-divide.

use crate::error::{PoolError, Result};

/// Computes `floor(product(numerators) / product(denominators))` with
/// `u128` intermediates.
///
/// Operands are promoted to `u128` before multiplying so that the common
/// two-term products (`reserve * scale`, `amount * factor`) cannot wrap.
/// Longer chains are folded with checked multiplication; an intermediate
/// that exceeds 128 bits, or a final quotient that does not fit back into
/// `u64`, is reported as [`PoolError::ArithmeticOverflow`] rather than
/// silently wrapping. Neither can occur for inputs bounded by realistic
/// reserve sizes.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if the denominator product is zero.
/// - [`PoolError::ArithmeticOverflow`] on intermediate or final overflow.
///
/// # Examples
///
/// ```
/// use pond_amm::math::scaled_ratio;
///
/// // 3000 * 1000 / 1_000_000 = 3
/// assert_eq!(scaled_ratio(&[3000, 1000], &[1_000_000]), Ok(3));
/// ```
pub fn scaled_ratio(numerators: &[u64], denominators: &[u64]) -> Result<u64> {
    let num = checked_product(numerators)?;
    let den = checked_product(denominators)?;
    if den == 0 {
        return Err(PoolError::DivisionByZero);
    }
    u64::try_from(num / den).map_err(|_| PoolError::ArithmeticOverflow)
}

fn checked_product(terms: &[u64]) -> Result<u128> {
    terms.iter().try_fold(1u128, |acc, &t| {
        acc.checked_mul(u128::from(t))
            .ok_or(PoolError::ArithmeticOverflow)
    })
}
