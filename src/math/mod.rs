//! Fixed-point arithmetic primitives for pool calculations.
//!
//! Two primitives carry all of the engine's precision requirements:
//!
//! - [`scaled_ratio`] — widened multiply-then-divide, the workhorse of
//!   every mint/burn/swap formula.
//! - [`integer_sqrt`] — floor square root, used only by the
//!   initial-mint formula.
//!
//! Division always truncates toward zero. This is intentional: rounding
//! favors the pool, never the caller.

mod sqrt;
mod wide;

pub use sqrt::integer_sqrt;
pub use wide::scaled_ratio;
