//! Adapter traits for the recurring buy registry
//!
//! The registry never moves tokens or prices swaps itself. Two traits abstract the ledger
//! and the exchange so the pallet stays independent of the runtime's asset and DEX pallets.

use core::marker::PhantomData;
use frame::deps::frame_support::traits::{
  fungibles::{self, approvals},
  tokens::{Preservation, Provenance},
};
use frame::prelude::*;
use primitives::{AssetId, Balance, Payout};

/// Token balances with allowance semantics.
pub trait LedgerOps<AccountId> {
  /// Amount `delegate` may still pull from `owner`.
  fn allowance(asset: AssetId, owner: &AccountId, delegate: &AccountId) -> Balance;

  /// Pull `amount` from `owner` to `dest` using `delegate`'s approval.
  fn transfer_from(
    asset: AssetId,
    owner: &AccountId,
    delegate: &AccountId,
    dest: &AccountId,
    amount: Balance,
  ) -> DispatchResult;

  fn transfer(asset: AssetId, from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult;

  fn balance(asset: AssetId, who: &AccountId) -> Balance;

  /// Whether crediting `amount` of `asset` to `who` would succeed, e.g. the result stays at
  /// or above the asset's minimum balance.
  fn can_receive(asset: AssetId, who: &AccountId, amount: Balance) -> bool;
}

/// Exchange capability addressed by router.
pub trait SwapProvider<AccountId> {
  /// Swap exactly `amount_in` of `asset_in` held by `who` through `router`, crediting the
  /// output described by `payout` to `recipient`. Returns the amount credited.
  fn swap_exact_in(
    router: &AccountId,
    who: &AccountId,
    asset_in: AssetId,
    payout: Payout,
    amount_in: Balance,
    recipient: &AccountId,
  ) -> Result<Balance, DispatchError>;
}

/// `LedgerOps` over any `fungibles` implementation with approvals (e.g. `pallet-assets`).
pub struct FungiblesLedger<Assets>(PhantomData<Assets>);

impl<AccountId, Assets> LedgerOps<AccountId> for FungiblesLedger<Assets>
where
  Assets: fungibles::Inspect<AccountId, AssetId = AssetId, Balance = Balance>
    + fungibles::Mutate<AccountId>
    + approvals::Mutate<AccountId>,
  AccountId: Eq,
{
  fn allowance(asset: AssetId, owner: &AccountId, delegate: &AccountId) -> Balance {
    <Assets as approvals::Inspect<AccountId>>::allowance(asset, owner, delegate)
  }

  fn transfer_from(
    asset: AssetId,
    owner: &AccountId,
    delegate: &AccountId,
    dest: &AccountId,
    amount: Balance,
  ) -> DispatchResult {
    <Assets as approvals::Mutate<AccountId>>::transfer_from(asset, owner, delegate, dest, amount)
  }

  fn transfer(asset: AssetId, from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult {
    <Assets as fungibles::Mutate<AccountId>>::transfer(
      asset,
      from,
      to,
      amount,
      Preservation::Expendable,
    )
    .map(|_| ())
  }

  fn balance(asset: AssetId, who: &AccountId) -> Balance {
    <Assets as fungibles::Inspect<AccountId>>::balance(asset, who)
  }

  fn can_receive(asset: AssetId, who: &AccountId, amount: Balance) -> bool {
    <Assets as fungibles::Inspect<AccountId>>::can_deposit(asset, who, amount, Provenance::Extant)
      .into_result()
      .is_ok()
  }
}

/// No-op `LedgerOps`: nothing is ever approved.
impl<AccountId> LedgerOps<AccountId> for () {
  fn allowance(_: AssetId, _: &AccountId, _: &AccountId) -> Balance {
    0
  }

  fn transfer_from(
    _: AssetId,
    _: &AccountId,
    _: &AccountId,
    _: &AccountId,
    _: Balance,
  ) -> DispatchResult {
    Err(DispatchError::Other("LedgerOps not configured"))
  }

  fn transfer(_: AssetId, _: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
    Err(DispatchError::Other("LedgerOps not configured"))
  }

  fn balance(_: AssetId, _: &AccountId) -> Balance {
    0
  }

  fn can_receive(_: AssetId, _: &AccountId, _: Balance) -> bool {
    false
  }
}

/// No-op `SwapProvider` for configurations without an exchange.
impl<AccountId> SwapProvider<AccountId> for () {
  fn swap_exact_in(
    _: &AccountId,
    _: &AccountId,
    _: AssetId,
    _: Payout,
    _: Balance,
    _: &AccountId,
  ) -> Result<Balance, DispatchError> {
    Err(DispatchError::Other("SwapProvider not configured"))
  }
}
