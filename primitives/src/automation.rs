//! Automation registry interface
//!
//! The recurring buy registry asks an automation registry for an "account slot" per buy.
//! Third-party keepers are then authorized against that slot, so a keeper can only trigger
//! the buys whose owners granted it access.

use polkadot_sdk::sp_runtime::DispatchError;

/// Slot identifier minted by the automation registry
pub type AccountNumber = u64;

/// Interface the recurring buy registry consumes.
///
/// `layer` is the automation layer currently configured on the caller's side. Slots remember
/// the layer they were minted under and only answer authorization queries for that layer.
pub trait AutomationRegistry<AccountId> {
  /// The slot number the next `create_account` call will return.
  fn next_account_number() -> AccountNumber;

  /// Mint a new slot owned by `owner` under `layer`.
  fn create_account(layer: &AccountId, owner: &AccountId) -> Result<AccountNumber, DispatchError>;

  /// Whether `actor` may trigger work for `account_number` under `layer`.
  fn is_authorized(layer: &AccountId, account_number: AccountNumber, actor: &AccountId) -> bool;
}

/// Unconfigured registry: never mints slots, never authorizes.
impl<AccountId> AutomationRegistry<AccountId> for () {
  fn next_account_number() -> AccountNumber {
    0
  }

  fn create_account(_: &AccountId, _: &AccountId) -> Result<AccountNumber, DispatchError> {
    Err(DispatchError::Other("AutomationRegistry not configured"))
  }

  fn is_authorized(_: &AccountId, _: AccountNumber, _: &AccountId) -> bool {
    false
  }
}
