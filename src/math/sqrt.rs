//! Integer square root.

/// Floor of the square root of `x`, via Newton's method.
///
/// Exact for perfect squares and monotonic over all of `u128`. The root
/// of a `u128` always fits in a `u64`, so the result narrows losslessly.
///
/// # Examples
///
/// ```
/// use pond_amm::math::integer_sqrt;
///
/// assert_eq!(integer_sqrt(9_000_000), 3000);
/// assert_eq!(integer_sqrt(10), 3);
/// ```
#[must_use]
pub fn integer_sqrt(x: u128) -> u64 {
    if x == 0 {
        return 0;
    }
    let mut a = x;
    let mut b = x.div_ceil(2);
    while b < a {
        a = b;
        b = (a + x / a) / 2;
    }
    // a <= sqrt(u128::MAX) < 2^64
    a as u64
}
