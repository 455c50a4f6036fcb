//! Fundamental domain value types used throughout the pool library.
//!
//! This module contains the core value types that model the pool domain:
//! accounts, assets, amounts, and declared transfers. All types use
//! newtypes with validated constructors to enforce invariants.

mod account;
mod amount;
mod asset;
mod transfer;

pub use account::AccountId;
pub use amount::Amount;
pub use asset::{AssetId, AssetParams};
pub use transfer::{Payment, Transfer};
