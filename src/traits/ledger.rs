//! Asset custody collaborator trait.
//!
//! The pool state machine owns no balances itself — all value lives at
//! accounts tracked by a [`Ledger`]. The pool consumes exactly three
//! capabilities: executing transfers, reading holdings, and one-time
//! asset issuance during bootstrap.
//!
//! # Atomicity Contract
//!
//! Each [`Ledger::transfer`] call is all-or-nothing: on error, no value
//! has moved. The pool does not assume anything about how atomicity
//! across several transfers is achieved; it validates and computes
//! before issuing any of them so that every rejection precedes the
//! first movement.
//!
//! # Holding vs. Zero
//!
//! [`Ledger::balance_of`] distinguishes "does not hold the asset at
//! all" (`None`) from "holds a zero balance" (`Some(ZERO)`). Pool
//! operations treat `None` as a fatal precondition failure
//! ([`MissingBalance`](crate::error::PoolError::MissingBalance)),
//! never as zero.
//!
//! # Opt-in Idiom
//!
//! A zero-amount transfer from an account to itself registers the
//! account as a holder of the asset. Pools use this during bootstrap to
//! start holding both reserve assets.

use crate::domain::{AccountId, Amount, AssetId, AssetParams};
use crate::error::Result;

/// Custody collaborator consumed by the pool state machine.
pub trait Ledger {
    /// Moves `amount` of `asset` from `from` to `to`, atomically.
    ///
    /// A zero-amount self-transfer (`from == to`) registers `to` as a
    /// holder of `asset` and moves nothing. A nonzero self-transfer is
    /// funds-checked but leaves the balance unchanged.
    ///
    /// # Errors
    ///
    /// - [`MissingBalance`](crate::error::PoolError::MissingBalance) if
    ///   either party does not hold the asset (except the opt-in case).
    /// - [`InsufficientFunds`](crate::error::PoolError::InsufficientFunds)
    ///   if the sender's balance is below `amount`.
    fn transfer(
        &mut self,
        asset: AssetId,
        amount: Amount,
        from: AccountId,
        to: AccountId,
    ) -> Result<()>;

    /// Reads `holder`'s balance of `asset`.
    ///
    /// Returns `None` if the account does not hold the asset at all;
    /// `Some(Amount::ZERO)` is a real, distinct answer.
    fn balance_of(&self, asset: AssetId, holder: AccountId) -> Option<Amount>;

    /// Creates a new fungible asset and credits the entire supply to
    /// `params.reserve`. Used once per pool, at bootstrap.
    ///
    /// # Errors
    ///
    /// Implementation-specific issuance failures.
    fn create_asset(&mut self, params: AssetParams) -> Result<AssetId>;
}
