//! Pure invariant formulas for mint, burn, swap, and ratio.
//!
//! Every method on [`PoolMath`] is a deterministic function of the
//! integer balances and amounts it is handed; none of them touch custody
//! or identities. The state machine in [`pool`](crate::pool) fetches the
//! balances, calls in here, and moves value afterwards.
//!
//! # Rounding and zero results
//!
//! All divisions floor. A formula whose result floors to zero signals a
//! rejected operation ("amount too low"), never a no-op success: the
//! caller must fail the whole operation and move no value.

use crate::config::PoolParams;
use crate::domain::Amount;
use crate::error::{PoolError, Result};
use crate::math::{integer_sqrt, scaled_ratio};

/// The mint/burn/swap/ratio formula set for one pool's constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolMath {
    scale: u64,
    fee: u64,
}

impl PoolMath {
    /// Creates the formula set from validated pool parameters.
    pub const fn new(params: &PoolParams) -> Self {
        Self {
            scale: params.scale(),
            fee: params.fee(),
        }
    }

    /// Shares minted for the very first deposit into an empty pool:
    /// `sqrt(a_amount * b_amount) - scale`.
    ///
    /// The subtracted `scale` is a dust buffer withheld from the first
    /// minter; it stays unclaimable in the pool and blunts share-price
    /// manipulation on tiny initial deposits.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientResult`] if the root does not
    /// exceed `scale` (the deposit is too small to seed the pool).
    pub fn tokens_to_mint_initial(&self, a_amount: Amount, b_amount: Amount) -> Result<Amount> {
        let root = integer_sqrt(a_amount.widening_mul(&b_amount));
        if root <= self.scale {
            return Err(PoolError::InsufficientResult);
        }
        Ok(Amount::new(root - self.scale))
    }

    /// Shares minted for a deposit into a funded pool.
    ///
    /// Credits the depositor by the scarcer-relative contribution:
    ///
    /// ```text
    /// rat_a  = a_amount * scale / reserve_a
    /// rat_b  = b_amount * scale / reserve_b
    /// shares = min(rat_a, rat_b) * issued / scale
    /// ```
    ///
    /// An imbalanced pair is credited on the smaller ratio; the excess
    /// of the other asset is a donation to existing holders. There is no
    /// proportional refund.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolError::DivisionByZero`] /
    /// [`PoolError::ArithmeticOverflow`] from the wide-ratio primitive.
    pub fn tokens_to_mint(
        &self,
        issued: Amount,
        reserve_a: Amount,
        reserve_b: Amount,
        a_amount: Amount,
        b_amount: Amount,
    ) -> Result<Amount> {
        let rat_a = scaled_ratio(&[a_amount.get(), self.scale], &[reserve_a.get()])?;
        let rat_b = scaled_ratio(&[b_amount.get(), self.scale], &[reserve_b.get()])?;
        let shares = scaled_ratio(&[rat_a.min(rat_b), issued.get()], &[self.scale])?;
        Ok(Amount::new(shares))
    }

    /// Asset payout for burning `burn_amount` shares against one
    /// reserve: `reserve * burn_amount / issued`.
    ///
    /// Applied once per reserve asset with that asset's own balance and
    /// the same `issued` / `burn_amount`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the wide-ratio primitive.
    pub fn tokens_to_burn(
        &self,
        issued: Amount,
        reserve: Amount,
        burn_amount: Amount,
    ) -> Result<Amount> {
        let payout = scaled_ratio(&[reserve.get(), burn_amount.get()], &[issued.get()])?;
        Ok(Amount::new(payout))
    }

    /// Constant-product swap output with the fee folded into the input:
    ///
    /// ```text
    /// factor = scale - fee
    /// out    = in * factor * out_reserve
    ///          / (in_reserve * scale + in * factor)
    /// ```
    ///
    /// `in_reserve * scale` alone can exceed 64 bits for large reserves,
    /// so the denominator is assembled in the wide width.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ArithmeticOverflow`] if the wide denominator or
    ///   the narrowed result cannot be represented.
    /// - [`PoolError::DivisionByZero`] if both the input reserve and the
    ///   effective input are zero.
    pub fn tokens_to_swap(
        &self,
        in_amount: Amount,
        in_reserve: Amount,
        out_reserve: Amount,
    ) -> Result<Amount> {
        let factor = self.scale - self.fee;
        let denominator = u128::from(in_reserve.get())
            .checked_mul(u128::from(self.scale))
            .and_then(|v| v.checked_add(u128::from(in_amount.get()) * u128::from(factor)))
            .ok_or(PoolError::ArithmeticOverflow)?;
        if denominator == 0 {
            return Err(PoolError::DivisionByZero);
        }

        let numerator = u128::from(in_amount.get())
            .checked_mul(u128::from(factor))
            .and_then(|v| v.checked_mul(u128::from(out_reserve.get())))
            .ok_or(PoolError::ArithmeticOverflow)?;

        let out = u64::try_from(numerator / denominator).map_err(|_| PoolError::ArithmeticOverflow)?;
        Ok(Amount::new(out))
    }

    /// Observable reserve ratio: `reserve_a * scale / reserve_b`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroReserve`] if `reserve_b` is zero (the
    /// ratio is undefined).
    pub fn compute_ratio(&self, reserve_a: Amount, reserve_b: Amount) -> Result<u64> {
        if reserve_b.is_zero() {
            return Err(PoolError::ZeroReserve);
        }
        scaled_ratio(&[reserve_a.get(), self.scale], &[reserve_b.get()])
    }
}
