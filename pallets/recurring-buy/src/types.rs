//! Recurring buy records and protocol configuration

use frame::prelude::*;
use polkadot_sdk::sp_runtime::Permill;
pub use primitives::{AccountNumber, AssetId, Balance, RecurringBuyId};

/// Lifecycle of a recurring buy. `Cancelled` is terminal.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  PartialEq,
  TypeInfo,
  MaxEncodedLen,
)]
pub enum RecurringBuyStatus {
  /// Active: awaiting execution or cancellation
  Set,
  /// Deactivated by its sender
  Cancelled,
}

/// A user's standing instruction to swap `amount_to_spend` of `token_to_spend` into
/// `token_to_buy` every `time_interval_in_seconds`.
#[derive(
  Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
)]
pub struct RecurringBuy<AccountId> {
  pub sender: AccountId,
  pub amount_to_spend: Balance,
  pub token_to_spend: AssetId,
  pub token_to_buy: AssetId,
  pub time_interval_in_seconds: u64,
  /// Front-end that earns half of the protocol fee
  pub payment_interface: Option<AccountId>,
  pub dex_router: AccountId,
  /// Unix seconds from which the next execution is allowed
  pub payment_due: u64,
  pub account_number: AccountNumber,
  pub status: RecurringBuyStatus,
}

impl<AccountId> RecurringBuy<AccountId> {
  /// Active and past its due time.
  pub fn is_due(&self, now: u64) -> bool {
    self.status == RecurringBuyStatus::Set && now >= self.payment_due
  }

  pub fn is_active(&self) -> bool {
    self.status == RecurringBuyStatus::Set
  }
}

pub type RecurringBuyOf<T> = RecurringBuy<<T as frame_system::Config>::AccountId>;

/// Process-wide registry settings, mutated only through admin calls.
#[derive(
  Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
)]
pub struct ProtocolConfig<AccountId> {
  /// Router recorded on buys created without an explicit one
  pub default_router: AccountId,
  /// Automation registry layer slots are minted under
  pub automation_layer: AccountId,
  /// Admission gate for new buys
  pub accepting_new_recurring_buys: bool,
  /// Wrapped native asset; buying it pays out unwrapped native currency
  pub wrap_native: AssetId,
  pub paused: bool,
}

pub type ProtocolConfigOf<T> = ProtocolConfig<<T as frame_system::Config>::AccountId>;

/// How one execution's spend amount is divided.
///
/// The swap always receives `net_amount`. With a payment interface it gets `fee / 2` and the
/// owner the remainder; without one the owner gets `fee / 2` and the remainder is retained in
/// the registry account. Shares a recipient cannot receive are retained as well.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeBreakdown {
  pub fee: Balance,
  pub net_amount: Balance,
  pub interface_share: Balance,
  pub owner_share: Balance,
  pub retained: Balance,
}

impl FeeBreakdown {
  pub fn new(amount: Balance, fee_rate: Permill, with_interface: bool) -> Self {
    let fee = fee_rate.mul_floor(amount);
    let half = fee / 2;
    let rest = fee.saturating_sub(half);
    let (interface_share, owner_share, retained) = if with_interface {
      (half, rest, 0)
    } else {
      (0, half, rest)
    };
    Self {
      fee,
      net_amount: amount.saturating_sub(fee),
      interface_share,
      owner_share,
      retained,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use primitives::params::{PRECISION, RECURRING_BUY_FEE};

  #[test]
  fn fee_breakdown_one_unit() {
    let breakdown = FeeBreakdown::new(PRECISION, RECURRING_BUY_FEE, true);
    assert_eq!(breakdown.fee, PRECISION / 100);
    assert_eq!(breakdown.net_amount, PRECISION - PRECISION / 100);
    assert_eq!(breakdown.interface_share, PRECISION / 200);
    assert_eq!(breakdown.owner_share, PRECISION / 200);
    assert_eq!(breakdown.retained, 0);
  }

  #[test]
  fn odd_fee_with_interface_favours_owner() {
    // floor(399 * 100 / 10_000) = 3
    let breakdown = FeeBreakdown::new(399, RECURRING_BUY_FEE, true);
    assert_eq!(breakdown.fee, 3);
    assert_eq!(breakdown.net_amount, 396);
    assert_eq!(breakdown.interface_share, 1);
    assert_eq!(breakdown.owner_share, 2);
    assert_eq!(breakdown.retained, 0);
  }

  #[test]
  fn odd_fee_without_interface_pays_owner_floor_half() {
    let breakdown = FeeBreakdown::new(399, RECURRING_BUY_FEE, false);
    assert_eq!(breakdown.interface_share, 0);
    assert_eq!(breakdown.owner_share, 1);
    assert_eq!(breakdown.retained, 2);
    assert_eq!(
      breakdown.net_amount + breakdown.owner_share + breakdown.retained,
      399
    );
  }

  #[test]
  fn dust_amounts_pay_no_fee() {
    let breakdown = FeeBreakdown::new(99, RECURRING_BUY_FEE, false);
    assert_eq!(breakdown.fee, 0);
    assert_eq!(breakdown.net_amount, 99);
  }

  #[test]
  fn due_requires_active_status() {
    let mut buy = RecurringBuy::<u64> {
      sender: 1,
      amount_to_spend: 10,
      token_to_spend: 2,
      token_to_buy: 3,
      time_interval_in_seconds: 60,
      payment_interface: None,
      dex_router: 9,
      payment_due: 100,
      account_number: 0,
      status: RecurringBuyStatus::Set,
    };
    assert!(!buy.is_due(99));
    assert!(buy.is_due(100));
    buy.status = RecurringBuyStatus::Cancelled;
    assert!(!buy.is_due(1_000));
    assert!(!buy.is_active());
  }
}
