//! Pool parameter configuration.

use crate::domain::Amount;
use crate::error::{PoolError, Result};

/// Minimum bootstrap funding, in native token units.
///
/// The seed payment covers the pool's own operating reserve (asset
/// holdings and the share-token creation); anything below this cannot
/// sustain a live pool.
pub const MIN_FUNDING: Amount = Amount::new(300_000);

/// Immutable numeric parameters of a pool.
///
/// Fixed at creation and never change afterwards:
///
/// - `total_supply` — the share-token supply ceiling. Minting and
///   burning move shares between the pool's own custody and
///   circulation; no operation can create supply beyond this.
/// - `scale` — fixed-point denominator for all ratio math.
/// - `fee` — swap fee numerator relative to `scale` (5 of 1000 = 0.5%).
///
/// # Validation
///
/// - `total_supply` and `scale` must be positive.
/// - `fee` must be strictly less than `scale` (a 100% fee would zero
///   the effective input of every swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolParams {
    total_supply: Amount,
    scale: u64,
    fee: u64,
}

impl PoolParams {
    /// Creates a new `PoolParams`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidParams`] if any invariant fails.
    pub fn new(total_supply: Amount, scale: u64, fee: u64) -> Result<Self> {
        let params = Self {
            total_supply,
            scale,
            fee,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates all parameter invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidParams`] naming the violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.total_supply.is_zero() {
            return Err(PoolError::InvalidParams("total supply must be positive"));
        }
        if self.scale == 0 {
            return Err(PoolError::InvalidParams("scale must be positive"));
        }
        if self.fee >= self.scale {
            return Err(PoolError::InvalidParams("fee must be less than scale"));
        }
        Ok(())
    }

    /// Returns the share-token supply ceiling.
    #[must_use]
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Returns the fixed-point scale.
    #[must_use]
    pub const fn scale(&self) -> u64 {
        self.scale
    }

    /// Returns the swap fee numerator.
    #[must_use]
    pub const fn fee(&self) -> u64 {
        self.fee
    }
}

impl Default for PoolParams {
    /// Production constants: supply 10^10, scale 1000, fee 5 (0.5%).
    fn default() -> Self {
        Self {
            total_supply: Amount::new(10_000_000_000),
            scale: 1000,
            fee: 5,
        }
    }
}
