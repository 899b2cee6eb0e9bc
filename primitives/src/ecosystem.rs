//! Ecosystem Constants for the Recurring Buy Scheduler
//!
//! This module centralizes system-level constants: pallet IDs used to derive pallet-owned
//! accounts and the fee parameters shared by the runtime configuration and tests.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Recurring buy identifier. Allocated sequentially from zero and never reused.
pub type RecurringBuyId = u64;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Recurring buy registry pallet ID (holds pulled funds and retained fee shares)
  pub const RECURRING_BUY_PALLET_ID: &[u8; 8] = b"py/rcbuy";
}

/// Economic parameters of the scheduler.
pub mod params {
  use super::Balance;
  use sp_arithmetic::Permill;

  /// Precision scalar for token amounts (10^12), i.e. one whole unit.
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Basis point denominator (100% = 10_000 bps).
  pub const BPS_DENOMINATOR: u32 = 10_000;

  /// Protocol fee charged on every executed recurring buy, in basis points (1%).
  pub const RECURRING_BUY_FEE_BPS: u32 = 100;

  /// Protocol fee as Permill (100 bps = 10_000 ppm).
  ///
  /// `mul_floor` on this value equals `floor(amount * 100 / 10_000)` without the
  /// intermediate overflow of the naive product.
  pub const RECURRING_BUY_FEE: Permill =
    Permill::from_parts(RECURRING_BUY_FEE_BPS * (1_000_000 / BPS_DENOMINATOR));
}
