//! Pool lifecycle state machine.
//!
//! A [`Pool`] orchestrates the pure formulas in [`engine`](crate::engine)
//! against a custody collaborator implementing [`Ledger`]: it validates
//! each submitted operation, reads the balances the formulas need, and
//! only after every check has passed issues the transfers. A rejected
//! operation therefore never moves value.
//!
//! # Lifecycle
//!
//! Created empty (`Uninitialized`, governor = creator), bootstrapped
//! exactly once (reserve assets fixed, share token issued to the pool's
//! own custody), then `Bootstrapped` forever: mint, burn, and swap are
//! repeatable indefinitely and there is no teardown.
//!
//! # Guard Order
//!
//! Every operation checks its guards in a fixed order — role and state,
//! then transfer structure, then asset identity, then balance
//! availability, then computed-amount positivity — so rejections are
//! deterministic.
//!
//! # Metapools
//!
//! A pool's share token is an ordinary [`AssetId`]: nothing in the
//! identity checks or the engine distinguishes it from any other
//! fungible asset. Bootstrapping a second pool with a first pool's
//! share token as one of its reserve assets therefore composes layered
//! liquidity with no special cases.
//!
//! # Concurrency
//!
//! Operations take `&mut self` and a `&mut` ledger, so the borrow
//! checker already serializes them per pool. Callers sharing a pool
//! across threads must wrap it in their own lock; there are no
//! suspension points mid-operation.

use tracing::debug;

use crate::config::{PoolParams, MIN_FUNDING};
use crate::domain::{AccountId, Amount, AssetId, AssetParams, Payment, Transfer};
use crate::engine::PoolMath;
use crate::error::{PoolError, Result};
use crate::traits::Ledger;

/// Lifecycle phase of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// Created; reserve assets not yet chosen.
    Uninitialized,
    /// Assets fixed and share token issued; operating.
    Bootstrapped,
}

/// Write-once asset bindings recorded at bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PoolAssets {
    asset_a: AssetId,
    asset_b: AssetId,
    pool_token: AssetId,
}

/// A constant-product liquidity pool over two fungible assets.
#[derive(Debug)]
pub struct Pool {
    address: AccountId,
    governor: AccountId,
    params: PoolParams,
    math: PoolMath,
    assets: Option<PoolAssets>,
    cached_ratio: Option<u64>,
}

impl Pool {
    /// Creates an empty pool. The creator becomes the governor.
    pub fn create(address: AccountId, governor: AccountId, params: PoolParams) -> Self {
        debug!(pool = %address, governor = %governor, "pool created");
        Self {
            address,
            governor,
            math: PoolMath::new(&params),
            params,
            assets: None,
            cached_ratio: None,
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// Current lifecycle phase.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        if self.assets.is_some() {
            PoolState::Bootstrapped
        } else {
            PoolState::Uninitialized
        }
    }

    /// The pool's own custody address.
    #[must_use]
    pub const fn address(&self) -> AccountId {
        self.address
    }

    /// Current governor.
    #[must_use]
    pub const fn governor(&self) -> AccountId {
        self.governor
    }

    /// Immutable numeric parameters.
    #[must_use]
    pub const fn params(&self) -> &PoolParams {
        &self.params
    }

    /// First reserve asset, once bootstrapped.
    #[must_use]
    pub fn asset_a(&self) -> Option<AssetId> {
        self.assets.map(|a| a.asset_a)
    }

    /// Second reserve asset, once bootstrapped.
    #[must_use]
    pub fn asset_b(&self) -> Option<AssetId> {
        self.assets.map(|a| a.asset_b)
    }

    /// Share token, once bootstrapped.
    #[must_use]
    pub fn pool_token(&self) -> Option<AssetId> {
        self.assets.map(|a| a.pool_token)
    }

    /// Last stored reserve ratio (`reserve_a * scale / reserve_b`),
    /// refreshed after every state-changing operation. `None` while a
    /// reserve is empty.
    #[must_use]
    pub const fn cached_ratio(&self) -> Option<u64> {
        self.cached_ratio
    }

    // -- Governance ---------------------------------------------------------

    /// Reassigns the governor role.
    ///
    /// # Errors
    ///
    /// [`PoolError::Unauthorized`] unless `caller` is the current
    /// governor.
    pub fn set_governor(&mut self, caller: AccountId, new_governor: AccountId) -> Result<()> {
        if caller != self.governor {
            return Err(PoolError::Unauthorized);
        }
        debug!(pool = %self.address, new_governor = %new_governor, "governor reassigned");
        self.governor = new_governor;
        Ok(())
    }

    // -- Bootstrap ----------------------------------------------------------

    /// Fixes the reserve assets, issues the share token, and funds the
    /// pool's operating reserve. Callable exactly once, by the governor.
    ///
    /// The share token is created with supply [`PoolParams::total_supply`],
    /// 3 decimals, name `POND-<a>-<b>`, unit `POND`, and the pool's own
    /// address as manager and reserve, so the entire supply starts in
    /// the pool's custody. The pool then opts into both reserve assets.
    ///
    /// Returns the new share-token id.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Unauthorized`] — caller is not the governor.
    /// - [`PoolError::AlreadyInitialized`] — assets are already fixed.
    /// - [`PoolError::MalformedTransfer`] — funding does not pay the
    ///   pool, does not come from the caller, or is below
    ///   [`MIN_FUNDING`].
    /// - [`PoolError::AssetMismatch`] — the two reserve assets are the
    ///   same.
    /// - [`PoolError::MissingBalance`] / [`PoolError::InsufficientFunds`]
    ///   — the funder cannot cover the payment.
    pub fn bootstrap<L: Ledger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        funding: Payment,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<AssetId> {
        if caller != self.governor {
            return Err(PoolError::Unauthorized);
        }
        if self.assets.is_some() {
            return Err(PoolError::AlreadyInitialized);
        }
        if funding.receiver != self.address {
            return Err(PoolError::MalformedTransfer("funding receiver is not the pool"));
        }
        if funding.sender != caller {
            return Err(PoolError::MalformedTransfer("funding sender is not the caller"));
        }
        if funding.amount < MIN_FUNDING {
            return Err(PoolError::MalformedTransfer("funding below minimum reserve"));
        }
        if asset_a == asset_b {
            return Err(PoolError::AssetMismatch("reserve assets must differ"));
        }
        self.require_funds(ledger, AssetId::NATIVE, funding.sender, funding.amount)?;

        ledger.transfer(AssetId::NATIVE, funding.amount, funding.sender, self.address)?;
        let pool_token = ledger.create_asset(AssetParams {
            total: self.params.total_supply(),
            decimals: 3,
            name: format!("POND-{asset_a}-{asset_b}"),
            unit_name: "POND".to_owned(),
            manager: self.address,
            reserve: self.address,
        })?;
        ledger.transfer(asset_a, Amount::ZERO, self.address, self.address)?;
        ledger.transfer(asset_b, Amount::ZERO, self.address, self.address)?;

        self.assets = Some(PoolAssets {
            asset_a,
            asset_b,
            pool_token,
        });
        debug!(
            pool = %self.address,
            %asset_a,
            %asset_b,
            %pool_token,
            "pool bootstrapped"
        );
        Ok(pool_token)
    }

    // -- Mint ---------------------------------------------------------------

    /// Deposits a pair of reserve amounts and delivers freshly issued
    /// shares to the depositor.
    ///
    /// The very first deposit (both reserves empty) is priced by the
    /// square-root formula; later deposits by the min-ratio formula
    /// against pre-deposit reserves. Returns the share amount delivered.
    ///
    /// # Errors
    ///
    /// - [`PoolError::NotBootstrapped`] — assets not yet fixed.
    /// - [`PoolError::MalformedTransfer`] — a deposit does not pay the
    ///   pool, is zero, or the two deposits disagree with `sender`.
    /// - [`PoolError::AssetMismatch`] — a deposit's asset is not the
    ///   matching reserve asset.
    /// - [`PoolError::MissingBalance`] / [`PoolError::InsufficientFunds`]
    ///   — a required holding is absent or too small.
    /// - [`PoolError::InsufficientResult`] — the computed share amount
    ///   is zero.
    pub fn mint<L: Ledger>(
        &mut self,
        ledger: &mut L,
        sender: AccountId,
        a_deposit: Transfer,
        b_deposit: Transfer,
    ) -> Result<Amount> {
        let assets = self.bootstrapped()?;
        self.check_incoming(&a_deposit, sender)?;
        self.check_incoming(&b_deposit, sender)?;
        if a_deposit.asset != assets.asset_a {
            return Err(PoolError::AssetMismatch("first deposit is not reserve asset A"));
        }
        if b_deposit.asset != assets.asset_b {
            return Err(PoolError::AssetMismatch("second deposit is not reserve asset B"));
        }

        let reserve_a = self.pool_holding(ledger, assets.asset_a)?;
        let reserve_b = self.pool_holding(ledger, assets.asset_b)?;
        let pool_shares = self.pool_holding(ledger, assets.pool_token)?;
        self.require_funds(ledger, assets.asset_a, sender, a_deposit.amount)?;
        self.require_funds(ledger, assets.asset_b, sender, b_deposit.amount)?;
        self.require_holder(ledger, assets.pool_token, sender)?;

        let shares = if reserve_a.is_zero() && reserve_b.is_zero() {
            self.math
                .tokens_to_mint_initial(a_deposit.amount, b_deposit.amount)?
        } else {
            let issued = self.issued(pool_shares)?;
            self.math.tokens_to_mint(
                issued,
                reserve_a,
                reserve_b,
                a_deposit.amount,
                b_deposit.amount,
            )?
        };
        if shares.is_zero() {
            return Err(PoolError::InsufficientResult);
        }
        if shares > pool_shares {
            return Err(PoolError::InsufficientFunds);
        }

        ledger.transfer(assets.asset_a, a_deposit.amount, sender, self.address)?;
        ledger.transfer(assets.asset_b, b_deposit.amount, sender, self.address)?;
        ledger.transfer(assets.pool_token, shares, self.address, sender)?;
        self.refresh_ratio(ledger)?;

        debug!(
            pool = %self.address,
            a = %a_deposit.amount,
            b = %b_deposit.amount,
            %shares,
            "mint"
        );
        Ok(shares)
    }

    // -- Burn ---------------------------------------------------------------

    /// Redeems shares for a proportional slice of both reserves.
    ///
    /// `issued` is the total supply minus the pool's own pre-redemption
    /// share holding; each payout is `reserve * burn / issued`, floored.
    /// Returns the `(asset_a, asset_b)` amounts delivered.
    ///
    /// # Errors
    ///
    /// - [`PoolError::NotBootstrapped`] — assets not yet fixed.
    /// - [`PoolError::MalformedTransfer`] — the redemption does not pay
    ///   the pool, is zero, or disagrees with `sender`.
    /// - [`PoolError::AssetMismatch`] — the redeemed asset is not the
    ///   share token.
    /// - [`PoolError::MissingBalance`] / [`PoolError::InsufficientFunds`]
    ///   — a required holding is absent or too small.
    /// - [`PoolError::InsufficientResult`] — either payout floors to
    ///   zero; the redemption is too small to honor.
    pub fn burn<L: Ledger>(
        &mut self,
        ledger: &mut L,
        sender: AccountId,
        redemption: Transfer,
    ) -> Result<(Amount, Amount)> {
        let assets = self.bootstrapped()?;
        self.check_incoming(&redemption, sender)?;
        if redemption.asset != assets.pool_token {
            return Err(PoolError::AssetMismatch("redeemed asset is not the share token"));
        }

        let reserve_a = self.pool_holding(ledger, assets.asset_a)?;
        let reserve_b = self.pool_holding(ledger, assets.asset_b)?;
        let pool_shares = self.pool_holding(ledger, assets.pool_token)?;
        self.require_funds(ledger, assets.pool_token, sender, redemption.amount)?;
        self.require_holder(ledger, assets.asset_a, sender)?;
        self.require_holder(ledger, assets.asset_b, sender)?;

        let issued = self.issued(pool_shares)?;
        let a_out = self
            .math
            .tokens_to_burn(issued, reserve_a, redemption.amount)?;
        let b_out = self
            .math
            .tokens_to_burn(issued, reserve_b, redemption.amount)?;
        if a_out.is_zero() || b_out.is_zero() {
            return Err(PoolError::InsufficientResult);
        }

        ledger.transfer(assets.pool_token, redemption.amount, sender, self.address)?;
        ledger.transfer(assets.asset_a, a_out, self.address, sender)?;
        ledger.transfer(assets.asset_b, b_out, self.address, sender)?;
        self.refresh_ratio(ledger)?;

        debug!(
            pool = %self.address,
            burned = %redemption.amount,
            %a_out,
            %b_out,
            "burn"
        );
        Ok((a_out, b_out))
    }

    // -- Swap ---------------------------------------------------------------

    /// Swaps an amount of one reserve asset for the other at the
    /// constant-product price, fee taken from the input side. Returns
    /// the output amount delivered.
    ///
    /// # Errors
    ///
    /// - [`PoolError::NotBootstrapped`] — assets not yet fixed.
    /// - [`PoolError::MalformedTransfer`] — the input does not pay the
    ///   pool, is zero, or disagrees with `sender`.
    /// - [`PoolError::AssetMismatch`] — the input asset is neither
    ///   reserve asset.
    /// - [`PoolError::MissingBalance`] / [`PoolError::InsufficientFunds`]
    ///   — a required holding is absent or too small.
    /// - [`PoolError::InsufficientResult`] — the output floors to zero.
    pub fn swap<L: Ledger>(
        &mut self,
        ledger: &mut L,
        sender: AccountId,
        input: Transfer,
    ) -> Result<Amount> {
        let assets = self.bootstrapped()?;
        self.check_incoming(&input, sender)?;
        let out_asset = if input.asset == assets.asset_a {
            assets.asset_b
        } else if input.asset == assets.asset_b {
            assets.asset_a
        } else {
            return Err(PoolError::AssetMismatch("swapped asset is not a reserve asset"));
        };

        let in_reserve = self.pool_holding(ledger, input.asset)?;
        let out_reserve = self.pool_holding(ledger, out_asset)?;
        self.require_funds(ledger, input.asset, sender, input.amount)?;
        self.require_holder(ledger, out_asset, sender)?;

        let out = self
            .math
            .tokens_to_swap(input.amount, in_reserve, out_reserve)?;
        if out.is_zero() {
            return Err(PoolError::InsufficientResult);
        }

        ledger.transfer(input.asset, input.amount, sender, self.address)?;
        ledger.transfer(out_asset, out, self.address, sender)?;
        self.refresh_ratio(ledger)?;

        debug!(
            pool = %self.address,
            in_asset = %input.asset,
            in_amount = %input.amount,
            %out,
            "swap"
        );
        Ok(out)
    }

    // -- Internals ----------------------------------------------------------

    fn bootstrapped(&self) -> Result<PoolAssets> {
        self.assets.ok_or(PoolError::NotBootstrapped)
    }

    /// Structural checks shared by every incoming transfer.
    fn check_incoming(&self, xfer: &Transfer, sender: AccountId) -> Result<()> {
        if xfer.receiver != self.address {
            return Err(PoolError::MalformedTransfer("receiver is not the pool"));
        }
        if xfer.sender != sender {
            return Err(PoolError::MalformedTransfer("sender mismatch"));
        }
        if xfer.amount.is_zero() {
            return Err(PoolError::MalformedTransfer("amount must be positive"));
        }
        Ok(())
    }

    fn pool_holding<L: Ledger>(&self, ledger: &L, asset: AssetId) -> Result<Amount> {
        ledger
            .balance_of(asset, self.address)
            .ok_or(PoolError::MissingBalance)
    }

    fn require_holder<L: Ledger>(
        &self,
        ledger: &L,
        asset: AssetId,
        account: AccountId,
    ) -> Result<()> {
        ledger
            .balance_of(asset, account)
            .map(|_| ())
            .ok_or(PoolError::MissingBalance)
    }

    fn require_funds<L: Ledger>(
        &self,
        ledger: &L,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let balance = ledger
            .balance_of(asset, account)
            .ok_or(PoolError::MissingBalance)?;
        if balance < amount {
            return Err(PoolError::InsufficientFunds);
        }
        Ok(())
    }

    /// Shares in circulation: total supply minus the pool's own holding.
    fn issued(&self, pool_shares: Amount) -> Result<Amount> {
        self.params
            .total_supply()
            .checked_sub(&pool_shares)
            .ok_or(PoolError::ArithmeticOverflow)
    }

    /// Recomputes the stored reserve ratio from live balances. A drained
    /// reserve leaves the ratio undefined rather than failing the
    /// operation that drained it.
    fn refresh_ratio<L: Ledger>(&mut self, ledger: &L) -> Result<()> {
        let assets = self.bootstrapped()?;
        let reserve_a = self.pool_holding(ledger, assets.asset_a)?;
        let reserve_b = self.pool_holding(ledger, assets.asset_b)?;
        self.cached_ratio = match self.math.compute_ratio(reserve_a, reserve_b) {
            Ok(ratio) => Some(ratio),
            Err(PoolError::ZeroReserve) => None,
            Err(other) => return Err(other),
        };
        Ok(())
    }
}
