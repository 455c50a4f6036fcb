//! Raw asset amount with checked arithmetic.

use core::fmt;

/// A raw asset amount in the smallest indivisible unit.
///
/// `Amount` never interprets decimals — decimal placement belongs to the
/// asset's metadata ([`AssetParams`](super::AssetParams)). All `u64`
/// values are valid amounts; the wide-ratio primitives in
/// [`math`](crate::math) promote to `u128` before multiplying.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use pond_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Widening multiplication into `u128`. Cannot overflow.
    #[must_use]
    pub const fn widening_mul(&self, other: &Self) -> u128 {
        self.0 as u128 * other.0 as u128
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
