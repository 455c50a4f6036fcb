//! Asset identifiers and issuance metadata.

use core::fmt;

use super::{AccountId, Amount};

/// Identifier of a fungible asset.
///
/// Asset ids are assigned by the custody collaborator when an asset is
/// created. A pool's share token is an `AssetId` like any other, which
/// is what makes metapool composition work without special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct AssetId(u64);

impl AssetId {
    /// The platform's native token, used only for bootstrap funding.
    pub const NATIVE: Self = Self(0);

    /// Creates an `AssetId` from a raw id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters for the one-time fungible asset issuance primitive.
///
/// The entire `total` supply is credited to `reserve` at creation; the
/// pool uses this to hold its full share-token supply in its own custody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetParams {
    /// Fixed total supply; never changes after creation.
    pub total: Amount,
    /// Decimal places for display purposes only.
    pub decimals: u32,
    /// Full asset name.
    pub name: String,
    /// Short unit name.
    pub unit_name: String,
    /// Account allowed to reconfigure the asset.
    pub manager: AccountId,
    /// Account credited with the entire supply.
    pub reserve: AccountId,
}
