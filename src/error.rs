//! Unified error types for the pond-amm library.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! # Propagation Policy
//!
//! Every error is terminal for the operation that produced it: there are no
//! retries and no partial application. Pool operations check guards in a
//! fixed order (role/state guards, then transfer well-formedness, then asset
//! identity, then balance availability, then computed-amount positivity) so
//! error reporting is deterministic.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Unified error enum for all pool, engine, math, and ledger failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// The caller does not hold the role required for this action.
    #[error("caller is not authorized for this action")]
    Unauthorized,

    /// Attempt to bootstrap a pool whose assets are already fixed.
    /// Bootstrap fields are write-once.
    #[error("pool is already bootstrapped")]
    AlreadyInitialized,

    /// A mint/burn/swap was submitted before the pool was bootstrapped.
    #[error("pool is not bootstrapped")]
    NotBootstrapped,

    /// A declared transfer is structurally invalid: wrong recipient,
    /// non-positive amount, or sender mismatch across paired transfers.
    #[error("malformed transfer: {0}")]
    MalformedTransfer(&'static str),

    /// A declared asset id does not match the pool's recorded reserve or
    /// share asset.
    #[error("asset mismatch: {0}")]
    AssetMismatch(&'static str),

    /// A computed mint/burn/swap amount was zero. The whole operation is
    /// rejected; no value moves.
    #[error("computed amount too low")]
    InsufficientResult,

    /// A computation's result cannot be represented in the target width.
    /// Indicates corrupted or adversarial inputs, never silent wrapping.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    /// A ratio was requested with a zero denominator term.
    #[error("division by zero")]
    DivisionByZero,

    /// The pool's ratio is undefined because a reserve is empty.
    #[error("reserve is zero, ratio undefined")]
    ZeroReserve,

    /// A required balance read returned "absent": the account does not
    /// hold the asset at all. Distinct from a zero balance.
    #[error("required balance is absent")]
    MissingBalance,

    /// The ledger rejected a transfer because the sender's balance is
    /// lower than the requested amount.
    #[error("insufficient funds for transfer")]
    InsufficientFunds,

    /// Pool parameters failed validation.
    #[error("invalid pool parameters: {0}")]
    InvalidParams(&'static str),
}
