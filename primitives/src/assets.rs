use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Fungible asset identifier as understood by the ledger (`pallet-assets` in the runtime).
pub type AssetId = u32;

/// The null asset. No ledger asset may be registered under this id, so a recurring buy
/// naming it on either side is rejected.
pub const NULL_ASSET: AssetId = 0;

/// Returns `true` when `asset` is the null identifier.
pub const fn is_null_asset(asset: AssetId) -> bool {
  asset == NULL_ASSET
}

/// What the swap provider should credit to the recipient once a swap settles.
///
/// - `Token(id)`: the output asset itself, held on the ledger.
/// - `Native`: the unwrapped native currency. Requested by the registry when the buy side
///   is the configured wrapped-native asset.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum Payout {
  /// Credit the output asset on the ledger
  Token(AssetId),
  /// Unwrap and credit native currency
  Native,
}

impl Payout {
  /// Resolve the payout for a buy of `token_to_buy`, unwrapping when it is `wrap_native`.
  pub fn for_purchase(token_to_buy: AssetId, wrap_native: AssetId) -> Self {
    if token_to_buy == wrap_native {
      Payout::Native
    } else {
      Payout::Token(token_to_buy)
    }
  }
}

/// Well-known asset ids used as genesis defaults and in tests
pub mod well_known {
  use super::AssetId;

  /// Wrapped native currency (the "WETH" of this chain)
  pub const WRAPPED_NATIVE: AssetId = 1;
  pub const USDC: AssetId = 2;
  pub const DOT: AssetId = 3;
  pub const ETH: AssetId = 4;
}
