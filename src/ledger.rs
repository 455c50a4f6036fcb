//! In-memory [`Ledger`] implementation.
//!
//! A single-threaded asset store used by the test suites and by library
//! consumers who want a pool without an external custody backend. It
//! keeps the full trait contract: holdings are explicit (an account that
//! never opted into an asset reads as `None`, not zero), transfers are
//! all-or-nothing, and the native token is held by every account.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, AssetId, AssetParams};
use crate::error::{PoolError, Result};
use crate::traits::Ledger;

/// Map-backed asset store.
///
/// Asset ids start at 1; id 0 is [`AssetId::NATIVE`], which exists
/// implicitly and is held by every account.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), u64>,
    assets: HashMap<AssetId, AssetParams>,
    next_asset_id: u64,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            assets: HashMap::new(),
            next_asset_id: 1,
        }
    }

    /// Credits `amount` of `asset` to `account` out of thin air,
    /// registering the holding if absent. Fixture seeding only; pool
    /// operations never mint balances this way.
    pub fn credit(&mut self, asset: AssetId, account: AccountId, amount: Amount) {
        let slot = self.balances.entry((asset, account)).or_insert(0);
        *slot = slot.saturating_add(amount.get());
    }

    /// Returns the issuance metadata of a created asset, if any.
    #[must_use]
    pub fn asset_params(&self, asset: AssetId) -> Option<&AssetParams> {
        self.assets.get(&asset)
    }

    fn holds(&self, asset: AssetId, account: AccountId) -> bool {
        asset == AssetId::NATIVE || self.balances.contains_key(&(asset, account))
    }
}

impl Ledger for InMemoryLedger {
    fn transfer(
        &mut self,
        asset: AssetId,
        amount: Amount,
        from: AccountId,
        to: AccountId,
    ) -> Result<()> {
        if from == to && amount.is_zero() {
            // Opt-in: register the holding, move nothing.
            self.balances.entry((asset, to)).or_insert(0);
            return Ok(());
        }
        if !self.holds(asset, from) || !self.holds(asset, to) {
            return Err(PoolError::MissingBalance);
        }

        let from_balance = self.balances.get(&(asset, from)).copied().unwrap_or(0);
        let remaining = from_balance
            .checked_sub(amount.get())
            .ok_or(PoolError::InsufficientFunds)?;
        if from == to {
            // Funds-checked but a net no-op; writing both legs from the
            // same starting balance would double the holding.
            return Ok(());
        }
        let to_balance = self.balances.get(&(asset, to)).copied().unwrap_or(0);
        let received = to_balance
            .checked_add(amount.get())
            .ok_or(PoolError::ArithmeticOverflow)?;

        self.balances.insert((asset, from), remaining);
        self.balances.insert((asset, to), received);
        Ok(())
    }

    fn balance_of(&self, asset: AssetId, holder: AccountId) -> Option<Amount> {
        if !self.holds(asset, holder) {
            return None;
        }
        let raw = self.balances.get(&(asset, holder)).copied().unwrap_or(0);
        Some(Amount::new(raw))
    }

    fn create_asset(&mut self, params: AssetParams) -> Result<AssetId> {
        let id = AssetId::new(self.next_asset_id);
        self.next_asset_id += 1;
        self.balances.insert((id, params.reserve), params.total.get());
        self.assets.insert(id, params);
        Ok(id)
    }
}
