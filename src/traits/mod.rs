//! Core abstractions at the crate's collaborator seams.

mod ledger;

pub use ledger::Ledger;
