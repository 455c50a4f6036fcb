//! Declared value movements submitted alongside pool operations.
//!
//! A [`Transfer`] describes an asset movement the caller has arranged as
//! part of an operation group; the pool validates it structurally (right
//! recipient, right asset, positive amount, matching sender) before any
//! engine computation runs, and only then asks the custody collaborator
//! to execute it.

use super::{AccountId, Amount, AssetId};

/// A declared movement of a fungible asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Transfer {
    /// Asset being moved.
    pub asset: AssetId,
    /// Amount moved; pool operations require it to be positive.
    pub amount: Amount,
    /// Account the value leaves.
    pub sender: AccountId,
    /// Account the value arrives at.
    pub receiver: AccountId,
}

impl Transfer {
    /// Creates a new transfer description.
    pub const fn new(
        asset: AssetId,
        amount: Amount,
        sender: AccountId,
        receiver: AccountId,
    ) -> Self {
        Self {
            asset,
            amount,
            sender,
            receiver,
        }
    }
}

/// A declared movement of the native token, used for bootstrap funding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Payment {
    /// Amount of native token moved.
    pub amount: Amount,
    /// Account the value leaves.
    pub sender: AccountId,
    /// Account the value arrives at.
    pub receiver: AccountId,
}

impl Payment {
    /// Creates a new payment description.
    pub const fn new(amount: Amount, sender: AccountId, receiver: AccountId) -> Self {
        Self {
            amount,
            sender,
            receiver,
        }
    }
}
