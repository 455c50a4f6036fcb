//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pond_amm::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the pool state machine, the
//! custody trait and its in-memory implementation, the configuration
//! types, and the error types so that consumers don't need to import
//! from individual submodules.

// Re-export domain types
pub use crate::domain::{AccountId, Amount, AssetId, AssetParams, Payment, Transfer};

// Re-export the custody seam
pub use crate::ledger::InMemoryLedger;
pub use crate::traits::Ledger;

// Re-export configuration
pub use crate::config::{PoolParams, MIN_FUNDING};

// Re-export the engine and state machine
pub use crate::engine::PoolMath;
pub use crate::pool::{Pool, PoolState};

// Re-export error types
pub use crate::error::{PoolError, Result};
