//! Opaque account identity.

use core::fmt;

/// Identity of an account that can hold assets and submit operations.
///
/// Pools themselves hold assets under their own `AccountId` (their
/// custody address), so a pool address and a user address are the same
/// kind of value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the identity.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountId {
    /// Shortened hex rendering: first four bytes, `aabbccdd…`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}
