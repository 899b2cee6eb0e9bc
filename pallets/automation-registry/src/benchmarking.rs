#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::AutomationRegistry;

#[benchmarks]
mod benches {
  use super::*;

  fn mint_slot<T: Config>(owner: &T::AccountId) -> primitives::AccountNumber {
    let layer: T::AccountId = account("layer", 0, 0);
    <Pallet<T> as AutomationRegistry<T::AccountId>>::create_account(&layer, owner)
      .unwrap_or_default()
  }

  #[benchmark]
  fn authorize_actor() {
    let owner: T::AccountId = account("owner", 0, 0);
    let actor: T::AccountId = account("keeper", 0, 0);
    let account_number = mint_slot::<T>(&owner);

    #[extrinsic_call]
    authorize_actor(RawOrigin::Signed(owner), account_number, actor.clone());

    assert!(AuthorizedActors::<T>::contains_key(account_number, &actor));
  }

  #[benchmark]
  fn revoke_actor() {
    let owner: T::AccountId = account("owner", 0, 0);
    let actor: T::AccountId = account("keeper", 0, 0);
    let account_number = mint_slot::<T>(&owner);
    AuthorizedActors::<T>::insert(account_number, &actor, ());

    #[extrinsic_call]
    revoke_actor(RawOrigin::Signed(owner), account_number, actor.clone());

    assert!(!AuthorizedActors::<T>::contains_key(account_number, &actor));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
