//! # Pond AMM
//!
//! Constant-product liquidity pool engine: two-asset reserves, a derived
//! pool-share token, and mint / burn / swap operations governed by the
//! `x * y = k` invariant with a 0.5% input-side trading fee.
//!
//! All arithmetic is exact unsigned fixed-point: `u64` amounts, `u128`
//! intermediates, floor division that always favors the pool. There are
//! no fractional types and no floating point anywhere in the crate.
//!
//! Custody is a seam: the pool drives any [`Ledger`](traits::Ledger)
//! implementation, and the bundled [`InMemoryLedger`](ledger::InMemoryLedger)
//! makes the crate self-contained for tests and simulations.
//!
//! # Quick Start
//!
//! Bootstrap a pool, seed it with liquidity, and swap:
//!
//! ```rust
//! use pond_amm::prelude::*;
//!
//! let alice = AccountId::from_bytes([1u8; 32]);
//! let pool_addr = AccountId::from_bytes([9u8; 32]);
//!
//! // 1. A ledger with two fungible assets held by alice.
//! let mut ledger = InMemoryLedger::new();
//! let asset = |name: &str| AssetParams {
//!     total: Amount::new(1_000_000),
//!     decimals: 0,
//!     name: name.to_owned(),
//!     unit_name: name.to_owned(),
//!     manager: alice,
//!     reserve: alice,
//! };
//! let asset_a = ledger.create_asset(asset("AAA"))?;
//! let asset_b = ledger.create_asset(asset("BBB"))?;
//! ledger.credit(AssetId::NATIVE, alice, Amount::new(1_000_000));
//!
//! // 2. Create and bootstrap the pool.
//! let mut pool = Pool::create(pool_addr, alice, PoolParams::default());
//! let pool_token = pool.bootstrap(
//!     &mut ledger,
//!     alice,
//!     Payment::new(MIN_FUNDING, alice, pool_addr),
//!     asset_a,
//!     asset_b,
//! )?;
//! ledger.transfer(pool_token, Amount::ZERO, alice, alice)?; // opt in
//!
//! // 3. Seed liquidity: sqrt(3000 * 3000) - 1000 = 2000 shares.
//! let shares = pool.mint(
//!     &mut ledger,
//!     alice,
//!     Transfer::new(asset_a, Amount::new(3000), alice, pool_addr),
//!     Transfer::new(asset_b, Amount::new(3000), alice, pool_addr),
//! )?;
//! assert_eq!(shares, Amount::new(2000));
//!
//! // 4. Swap 1000 A for B at the constant-product price.
//! let out = pool.swap(
//!     &mut ledger,
//!     alice,
//!     Transfer::new(asset_a, Amount::new(1000), alice, pool_addr),
//! )?;
//! assert_eq!(out, Amount::new(747));
//! # Ok::<(), PoolError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  submits operations with declared transfers
//! └──────┬──────┘
//!        │ mint / burn / swap / bootstrap
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  guards, balance reads, transfer orchestration
//! └──────┬──────┘
//!        │ pure integer formulas          │ transfers + balance reads
//!        ▼                                ▼
//! ┌─────────────┐                  ┌─────────────┐
//! │  PoolMath    │                  │   Ledger     │  custody seam
//! └──────┬──────┘                  └─────────────┘
//!        │ wide-ratio, integer sqrt
//!        ▼
//! ┌─────────────┐
//! │    math      │  u128 intermediates, floor division
//! └─────────────┘
//! ```
//!
//! # Metapools
//!
//! A pool's share token is an ordinary asset id, so a second pool can be
//! bootstrapped with a first pool's share token as one of its reserves.
//! No dedicated type exists for this; see the composition notes in
//! [`pool`].
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`AccountId`](domain::AccountId), [`Transfer`](domain::Transfer) |
//! | [`math`]   | Wide-ratio and integer square-root primitives |
//! | [`engine`] | [`PoolMath`](engine::PoolMath): pure mint/burn/swap/ratio formulas |
//! | [`config`] | [`PoolParams`](config::PoolParams) and the minimum funding constant |
//! | [`traits`] | [`Ledger`](traits::Ledger) custody abstraction |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference custody |
//! | [`pool`]   | [`Pool`](pool::Pool) lifecycle state machine |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;

#[cfg(test)]
mod proptest_properties;
