#![cfg(feature = "runtime-benchmarks")]

use crate::*;
use polkadot_sdk::frame_benchmarking::{account, v2::*};
use polkadot_sdk::frame_support::traits::EnsureOrigin;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{params::PRECISION, well_known};

const SPEND: AssetId = well_known::USDC;
const BUY: AssetId = well_known::DOT;

#[benchmarks]
mod benches {
  use super::*;

  fn setup_config<T: Config>() -> T::AccountId {
    let router: T::AccountId = account("router", 0, 0);
    Configuration::<T>::put(ProtocolConfig {
      default_router: router.clone(),
      automation_layer: account("layer", 0, 0),
      accepting_new_recurring_buys: true,
      wrap_native: primitives::NULL_ASSET,
      paused: false,
    });
    router
  }

  fn create_buy<T: Config>(sender: &T::AccountId) -> Result<RecurringBuyId, BenchmarkError> {
    let id = NextRecurringBuyId::<T>::get();
    Pallet::<T>::create_recurring_buy(
      RawOrigin::Signed(sender.clone()).into(),
      PRECISION,
      SPEND,
      BUY,
      60,
      Some(account("interface", 0, 0)),
      None,
    )
    .map_err(|_| BenchmarkError::Stop("recurring buy setup failed"))?;
    Ok(id)
  }

  fn admin<T: Config>() -> Result<T::RuntimeOrigin, BenchmarkError> {
    T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)
  }

  #[benchmark]
  fn create_recurring_buy() {
    setup_config::<T>();
    let sender: T::AccountId = account("sender", 0, 0);

    #[extrinsic_call]
    create_recurring_buy(
      RawOrigin::Signed(sender),
      PRECISION,
      SPEND,
      BUY,
      60,
      Some(account("interface", 0, 0)),
      None,
    );

    assert_eq!(NextRecurringBuyId::<T>::get(), 1);
  }

  #[benchmark]
  fn cancel_recurring_payment() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    let sender: T::AccountId = account("sender", 0, 0);
    let id = create_buy::<T>(&sender)?;

    #[extrinsic_call]
    cancel_recurring_payment(RawOrigin::Signed(sender), id);

    assert!(RecurringBuys::<T>::get(id).is_some_and(|buy| !buy.is_active()));
    Ok(())
  }

  #[benchmark]
  fn transfer_funds() -> Result<(), BenchmarkError> {
    let router = setup_config::<T>();
    let sender: T::AccountId = account("sender", 0, 0);
    let registry = Pallet::<T>::account_id();
    T::BenchmarkHelper::fund(&sender, SPEND, PRECISION.saturating_mul(10))?;
    T::BenchmarkHelper::approve(&sender, &registry, SPEND, PRECISION.saturating_mul(10))?;
    T::BenchmarkHelper::create_route(&router, SPEND, BUY)?;
    let id = create_buy::<T>(&sender)?;

    #[extrinsic_call]
    transfer_funds(RawOrigin::Signed(sender), id);

    assert!(!Pallet::<T>::check_simple_automation(id));
    Ok(())
  }

  #[benchmark]
  fn simple_automation() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    let sender: T::AccountId = account("sender", 0, 0);
    let id = create_buy::<T>(&sender)?;

    #[extrinsic_call]
    simple_automation(RawOrigin::Signed(sender), id);

    assert!(!Pallet::<T>::check_simple_automation(id));
    Ok(())
  }

  #[benchmark]
  fn set_automation_layer() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    let origin = admin::<T>()?;
    let layer: T::AccountId = account("layer", 1, 0);

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, layer.clone());

    assert_eq!(Pallet::<T>::automation_layer(), Some(layer));
    Ok(())
  }

  #[benchmark]
  fn set_default_router() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    let origin = admin::<T>()?;
    let router: T::AccountId = account("router", 1, 0);

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, router.clone());

    assert_eq!(Pallet::<T>::default_router(), Some(router));
    Ok(())
  }

  #[benchmark]
  fn set_accepting_new_recurring_buys() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    let origin = admin::<T>()?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, false);

    assert!(!Pallet::<T>::accepting_new_recurring_buys());
    Ok(())
  }

  #[benchmark]
  fn pause() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    let origin = admin::<T>()?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin);

    assert!(Pallet::<T>::is_paused());
    Ok(())
  }

  #[benchmark]
  fn unpause() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    Configuration::<T>::mutate(|config| {
      if let Some(config) = config {
        config.paused = true;
      }
    });
    let origin = admin::<T>()?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin);

    assert!(!Pallet::<T>::is_paused());
    Ok(())
  }

  #[benchmark]
  fn sweep_fees() -> Result<(), BenchmarkError> {
    setup_config::<T>();
    let origin = admin::<T>()?;
    let registry = Pallet::<T>::account_id();
    T::BenchmarkHelper::fund(&registry, SPEND, PRECISION)?;

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, SPEND);

    assert_eq!(T::Ledger::balance(SPEND, &registry), 0);
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
