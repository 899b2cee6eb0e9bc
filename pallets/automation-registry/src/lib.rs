//! Automation Registry Pallet
//!
//! Mints automation "account slots" and records which keepers are allowed to act on each
//! slot. The recurring buy registry requests one slot per buy; the buy owner then grants
//! or revokes keepers on it.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::automation-registry";

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::prelude::*;
  use primitives::{AccountNumber, AutomationRegistry};

  /// Slot metadata: who owns it and which automation layer minted it
  #[derive(
    Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo, MaxEncodedLen,
  )]
  pub struct AutomationAccount<AccountId> {
    pub owner: AccountId,
    pub layer: AccountId,
  }

  pub type AutomationAccountOf<T> = AutomationAccount<<T as frame_system::Config>::AccountId>;

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Next slot number to mint
  #[pallet::storage]
  pub type NextAccountNumber<T> = StorageValue<_, AccountNumber, ValueQuery>;

  /// Minted slots
  #[pallet::storage]
  #[pallet::getter(fn automation_account)]
  pub type Accounts<T: Config> =
    StorageMap<_, Blake2_128Concat, AccountNumber, AutomationAccountOf<T>, OptionQuery>;

  /// Keepers granted access per slot
  #[pallet::storage]
  pub type AuthorizedActors<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    AccountNumber,
    Blake2_128Concat,
    T::AccountId,
    (),
    OptionQuery,
  >;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A new slot was minted
    AccountCreated {
      account_number: AccountNumber,
      owner: T::AccountId,
      layer: T::AccountId,
    },
    /// A keeper was granted access to a slot
    ActorAuthorized {
      account_number: AccountNumber,
      actor: T::AccountId,
    },
    /// A keeper lost access to a slot
    ActorRevoked {
      account_number: AccountNumber,
      actor: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// No slot with this number
    AccountNotFound,
    /// Only the slot owner may manage its keepers
    NotAccountOwner,
    /// Keeper already holds access to the slot
    AlreadyAuthorized,
    /// Keeper holds no access to the slot
    NotAuthorized,
    /// Slot counter exhausted
    AccountNumberOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Grant `actor` the right to trigger work for `account_number`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::authorize_actor())]
    pub fn authorize_actor(
      origin: OriginFor<T>,
      account_number: AccountNumber,
      actor: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_account_owner(account_number, &who)?;
      ensure!(
        !AuthorizedActors::<T>::contains_key(account_number, &actor),
        Error::<T>::AlreadyAuthorized
      );

      AuthorizedActors::<T>::insert(account_number, &actor, ());

      Self::deposit_event(Event::ActorAuthorized {
        account_number,
        actor,
      });
      Ok(())
    }

    /// Withdraw a previously granted right.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::revoke_actor())]
    pub fn revoke_actor(
      origin: OriginFor<T>,
      account_number: AccountNumber,
      actor: T::AccountId,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_account_owner(account_number, &who)?;
      ensure!(
        AuthorizedActors::<T>::contains_key(account_number, &actor),
        Error::<T>::NotAuthorized
      );

      AuthorizedActors::<T>::remove(account_number, &actor);

      Self::deposit_event(Event::ActorRevoked {
        account_number,
        actor,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    fn ensure_account_owner(account_number: AccountNumber, who: &T::AccountId) -> DispatchResult {
      let account = Accounts::<T>::get(account_number).ok_or(Error::<T>::AccountNotFound)?;
      ensure!(&account.owner == who, Error::<T>::NotAccountOwner);
      Ok(())
    }
  }

  impl<T: Config> AutomationRegistry<T::AccountId> for Pallet<T> {
    fn next_account_number() -> AccountNumber {
      NextAccountNumber::<T>::get()
    }

    fn create_account(
      layer: &T::AccountId,
      owner: &T::AccountId,
    ) -> Result<AccountNumber, DispatchError> {
      let account_number = NextAccountNumber::<T>::get();
      let next = account_number
        .checked_add(1)
        .ok_or(Error::<T>::AccountNumberOverflow)?;

      Accounts::<T>::insert(
        account_number,
        AutomationAccount {
          owner: owner.clone(),
          layer: layer.clone(),
        },
      );
      NextAccountNumber::<T>::put(next);

      log::debug!(
        target: LOG_TARGET,
        "minted automation slot {account_number} for {owner:?} under layer {layer:?}"
      );

      Self::deposit_event(Event::AccountCreated {
        account_number,
        owner: owner.clone(),
        layer: layer.clone(),
      });
      Ok(account_number)
    }

    fn is_authorized(
      layer: &T::AccountId,
      account_number: AccountNumber,
      actor: &T::AccountId,
    ) -> bool {
      // Grants die with a layer switch
      Accounts::<T>::get(account_number).is_some_and(|account| &account.layer == layer)
        && AuthorizedActors::<T>::contains_key(account_number, actor)
    }
  }
}
