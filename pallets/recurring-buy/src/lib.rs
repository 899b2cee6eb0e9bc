//! Recurring Buy Pallet
//!
//! Dollar-cost-average purchase scheduler. Users register a recurring swap (amount, spend and
//! buy token, interval, optional payment interface, router); keepers trigger due purchases;
//! the registry pulls the funds, takes the protocol fee, swaps the rest and reschedules.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod adapters;
pub use adapters::{FungiblesLedger, LedgerOps, SwapProvider};

pub mod types;
pub use types::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::recurring-buy";

/// Prepares ledger and router state the benchmarks depend on
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Ensure `asset` exists and credit `amount` of it to `who`
  fn fund(
    who: &AccountId,
    asset: primitives::AssetId,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  /// Approve `delegate` to pull `amount` of `asset` from `owner`
  fn approve(
    owner: &AccountId,
    delegate: &AccountId,
    asset: primitives::AssetId,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  /// Make `router` able to swap `asset_in` into `asset_out`
  fn create_route(
    router: &AccountId,
    asset_in: primitives::AssetId,
    asset_out: primitives::AssetId,
  ) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, LedgerOps, SwapProvider, WeightInfo};
  use crate::types::*;
  use alloc::{vec, vec::Vec};
  use frame::deps::frame_support::{
    PalletId,
    traits::{EnsureOrigin, UnixTime},
  };
  use frame::prelude::*;
  use polkadot_sdk::sp_runtime::{
    Permill,
    traits::{AccountIdConversion, TrailingZeroInput, Zero},
  };
  use primitives::{AutomationRegistry, Payout, is_null_asset};

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Token ledger the spend side is pulled from and fees are paid on
    type Ledger: LedgerOps<Self::AccountId>;
    /// Exchange executing the purchases
    type SwapProvider: SwapProvider<Self::AccountId>;
    /// Registry minting the per-buy automation slots
    type AutomationRegistry: AutomationRegistry<Self::AccountId>;
    /// Source of unix time for due checks
    type TimeProvider: UnixTime;
    /// Protocol owner; may configure, pause and trigger any buy
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;
    /// Pallet ID for account derivation
    #[pallet::constant]
    type PalletId: Get<PalletId>;
    /// Fee taken from every executed purchase
    #[pallet::constant]
    type ProtocolFee: Get<Permill>;
    /// Receives the owner share of every fee
    #[pallet::constant]
    type ProtocolFeeAccount: Get<Self::AccountId>;
    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;
    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  /// ## Lifecycle
  /// A recurring buy is created `Set` with `payment_due = now`, so the first purchase can run
  /// immediately. Every execution moves `payment_due` to `now + interval`; late executions
  /// push the schedule back instead of catching up. Cancellation is terminal.
  ///
  /// ## Fees
  /// 1% of each spend amount is withheld and half of it (rounded down) is paid out. With a
  /// payment interface that half goes to the interface and the rest to `ProtocolFeeAccount`;
  /// without one `ProtocolFeeAccount` gets the half and the rest stays in the registry
  /// account. A share its recipient cannot receive also stays there, for `sweep_fees`.
  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Id the next created buy receives
  #[pallet::storage]
  #[pallet::getter(fn next_recurring_buy_id)]
  pub type NextRecurringBuyId<T> = StorageValue<_, RecurringBuyId, ValueQuery>;

  /// Append-only buy table
  #[pallet::storage]
  #[pallet::getter(fn recurring_buy)]
  pub type RecurringBuys<T: Config> =
    StorageMap<_, Blake2_128Concat, RecurringBuyId, RecurringBuyOf<T>, OptionQuery>;

  /// Protocol configuration, written at genesis
  #[pallet::storage]
  #[pallet::getter(fn protocol_config)]
  pub type Configuration<T: Config> = StorageValue<_, ProtocolConfigOf<T>, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A recurring buy was registered
    RecurringBuyCreated {
      id: RecurringBuyId,
      recurring_buy: RecurringBuyOf<T>,
    },
    /// A recurring buy was deactivated by its sender
    RecurringBuyCancelled {
      id: RecurringBuyId,
      sender: T::AccountId,
    },
    /// A purchase executed; `amounts` is `[net spent, amount bought]`
    PaymentTransferred {
      id: RecurringBuyId,
      sender: T::AccountId,
      amounts: Vec<Balance>,
    },
    /// Due time advanced without moving funds
    PaymentDueAdvanced {
      id: RecurringBuyId,
      payment_due: u64,
    },
    AutomationLayerSet {
      who: T::AccountId,
      automation_layer: T::AccountId,
    },
    DefaultRouterSet {
      who: T::AccountId,
      default_router: T::AccountId,
    },
    AcceptingNewRecurringBuysSet {
      who: T::AccountId,
      accepting: bool,
    },
    Paused {
      who: T::AccountId,
    },
    Unpaused {
      who: T::AccountId,
    },
    /// Retained fee shares moved to the protocol fee account
    FeesSwept {
      asset: AssetId,
      amount: Balance,
      destination: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Default router cannot be the null account
    NullDefaultRouter,
    /// Automation layer cannot be the null account
    NullAutomationLayer,
    /// Protocol configuration was never initialized
    ConfigurationMissing,
    /// Amount to spend is zero
    InvalidAmount,
    /// Spend or buy token is the null asset
    InvalidToken,
    /// Spend and buy token are the same asset
    IdenticalTokens,
    /// Interval is zero
    InvalidInterval,
    /// New recurring buys are not being accepted
    NotAcceptingNewRecurringBuys,
    /// No recurring buy with this id
    RecurringBuyNotFound,
    /// Caller is not the sender of the recurring buy
    NotRecurringBuySender,
    /// Caller may not trigger this recurring buy
    UnauthorizedCaller,
    /// Recurring buy is cancelled or not yet due
    InvalidRecurringBuy,
    /// Sender approved less than the amount to spend
    InsufficientAllowance,
    /// Operation blocked while the protocol is paused
    ProtocolPaused,
    /// Protocol is not paused
    NotPaused,
    /// Recurring buy id counter exhausted
    RecurringBuyIdOverflow,
    /// Arithmetic overflow in schedule calculation
    ArithmeticOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Register a recurring buy owned by the signer.
    ///
    /// Without `dex_router` the buy records the current default router. The buy is due
    /// immediately.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_recurring_buy())]
    pub fn create_recurring_buy(
      origin: OriginFor<T>,
      amount_to_spend: Balance,
      token_to_spend: AssetId,
      token_to_buy: AssetId,
      time_interval_in_seconds: u64,
      payment_interface: Option<T::AccountId>,
      dex_router: Option<T::AccountId>,
    ) -> DispatchResult {
      let sender = ensure_signed(origin)?;
      let config = Self::configuration()?;

      ensure!(
        config.accepting_new_recurring_buys,
        Error::<T>::NotAcceptingNewRecurringBuys
      );
      ensure!(!amount_to_spend.is_zero(), Error::<T>::InvalidAmount);
      ensure!(
        !is_null_asset(token_to_spend) && !is_null_asset(token_to_buy),
        Error::<T>::InvalidToken
      );
      ensure!(token_to_spend != token_to_buy, Error::<T>::IdenticalTokens);
      ensure!(time_interval_in_seconds > 0, Error::<T>::InvalidInterval);
      ensure!(!config.paused, Error::<T>::ProtocolPaused);

      let id = NextRecurringBuyId::<T>::get();
      let next_id = id
        .checked_add(1)
        .ok_or(Error::<T>::RecurringBuyIdOverflow)?;

      let account_number =
        T::AutomationRegistry::create_account(&config.automation_layer, &sender).inspect_err(
          |e| log::warn!(target: LOG_TARGET, "automation slot request for buy {id} failed: {e:?}"),
        )?;

      let recurring_buy = RecurringBuy {
        sender,
        amount_to_spend,
        token_to_spend,
        token_to_buy,
        time_interval_in_seconds,
        payment_interface,
        dex_router: dex_router.unwrap_or(config.default_router),
        payment_due: Self::current_block_timestamp(),
        account_number,
        status: RecurringBuyStatus::Set,
      };

      RecurringBuys::<T>::insert(id, &recurring_buy);
      NextRecurringBuyId::<T>::put(next_id);

      log::debug!(
        target: LOG_TARGET,
        "recurring buy {id} created: {amount_to_spend} of {token_to_spend} -> {token_to_buy} every {time_interval_in_seconds}s"
      );

      Self::deposit_event(Event::RecurringBuyCreated { id, recurring_buy });
      Ok(())
    }

    /// Permanently deactivate a recurring buy. Only its sender may cancel; cancelling an
    /// already cancelled buy is accepted and changes nothing.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::cancel_recurring_payment())]
    pub fn cancel_recurring_payment(origin: OriginFor<T>, id: RecurringBuyId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let config = Self::configuration()?;

      RecurringBuys::<T>::try_mutate(id, |maybe| -> DispatchResult {
        let recurring_buy = maybe.as_mut().ok_or(Error::<T>::RecurringBuyNotFound)?;
        ensure!(recurring_buy.sender == who, Error::<T>::NotRecurringBuySender);
        ensure!(!config.paused, Error::<T>::ProtocolPaused);

        if !recurring_buy.is_active() {
          return Ok(());
        }
        recurring_buy.status = RecurringBuyStatus::Cancelled;

        log::debug!(target: LOG_TARGET, "recurring buy {id} cancelled");
        Self::deposit_event(Event::RecurringBuyCancelled { id, sender: who });
        Ok(())
      })
    }

    /// Execute a due purchase.
    ///
    /// Callable by the admin origin, the buy's sender, or a keeper the automation registry
    /// authorized for the buy's account slot.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::transfer_funds())]
    pub fn transfer_funds(origin: OriginFor<T>, id: RecurringBuyId) -> DispatchResult {
      let config = Self::configuration()?;
      let mut recurring_buy = RecurringBuys::<T>::get(id).ok_or(Error::<T>::RecurringBuyNotFound)?;
      let now = Self::ensure_executable(origin, &recurring_buy, &config)?;

      let next_due = Self::next_payment_due(&recurring_buy, now)?;
      let (net_amount, amount_out) = Self::execute_purchase(&recurring_buy, &config)?;

      recurring_buy.payment_due = next_due;
      RecurringBuys::<T>::insert(id, &recurring_buy);

      log::debug!(
        target: LOG_TARGET,
        "recurring buy {id} executed: spent {net_amount}, bought {amount_out}, next due {next_due}"
      );

      Self::deposit_event(Event::PaymentTransferred {
        id,
        sender: recurring_buy.sender,
        amounts: vec![net_amount, amount_out],
      });
      Ok(())
    }

    /// Advance a due buy's schedule by one interval without moving funds.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::simple_automation())]
    pub fn simple_automation(origin: OriginFor<T>, id: RecurringBuyId) -> DispatchResult {
      let config = Self::configuration()?;
      RecurringBuys::<T>::try_mutate(id, |maybe| -> DispatchResult {
        let recurring_buy = maybe.as_mut().ok_or(Error::<T>::RecurringBuyNotFound)?;
        let now = Self::ensure_executable(origin, recurring_buy, &config)?;

        let payment_due = Self::next_payment_due(recurring_buy, now)?;
        recurring_buy.payment_due = payment_due;

        Self::deposit_event(Event::PaymentDueAdvanced { id, payment_due });
        Ok(())
      })
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_automation_layer())]
    pub fn set_automation_layer(
      origin: OriginFor<T>,
      automation_layer: T::AccountId,
    ) -> DispatchResult {
      let who = T::AdminOrigin::ensure_origin(origin)?;
      Self::mutate_unpaused(|config| {
        ensure!(
          !Self::is_null_account(&automation_layer),
          Error::<T>::NullAutomationLayer
        );
        config.automation_layer = automation_layer.clone();
        Ok(())
      })?;
      Self::deposit_event(Event::AutomationLayerSet {
        who,
        automation_layer,
      });
      Ok(())
    }

    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::set_default_router())]
    pub fn set_default_router(origin: OriginFor<T>, default_router: T::AccountId) -> DispatchResult {
      let who = T::AdminOrigin::ensure_origin(origin)?;
      Self::mutate_unpaused(|config| {
        ensure!(
          !Self::is_null_account(&default_router),
          Error::<T>::NullDefaultRouter
        );
        config.default_router = default_router.clone();
        Ok(())
      })?;
      Self::deposit_event(Event::DefaultRouterSet {
        who,
        default_router,
      });
      Ok(())
    }

    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::set_accepting_new_recurring_buys())]
    pub fn set_accepting_new_recurring_buys(
      origin: OriginFor<T>,
      accepting: bool,
    ) -> DispatchResult {
      let who = T::AdminOrigin::ensure_origin(origin)?;
      Self::mutate_unpaused(|config| {
        config.accepting_new_recurring_buys = accepting;
        Ok(())
      })?;
      Self::deposit_event(Event::AcceptingNewRecurringBuysSet { who, accepting });
      Ok(())
    }

    /// Block every state-mutating call until `unpause`.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>) -> DispatchResult {
      let who = T::AdminOrigin::ensure_origin(origin)?;
      Self::mutate_unpaused(|config| {
        config.paused = true;
        Ok(())
      })?;
      Self::deposit_event(Event::Paused { who });
      Ok(())
    }

    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
      let who = T::AdminOrigin::ensure_origin(origin)?;
      Configuration::<T>::try_mutate(|maybe| -> DispatchResult {
        let config = maybe.as_mut().ok_or(Error::<T>::ConfigurationMissing)?;
        ensure!(config.paused, Error::<T>::NotPaused);
        config.paused = false;
        Ok(())
      })?;
      Self::deposit_event(Event::Unpaused { who });
      Ok(())
    }

    /// Move the registry account's whole balance of `asset` (fee shares retained from buys
    /// without a payment interface) to the protocol fee account.
    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::sweep_fees())]
    pub fn sweep_fees(origin: OriginFor<T>, asset: AssetId) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      ensure!(!Self::configuration()?.paused, Error::<T>::ProtocolPaused);

      let registry = Self::account_id();
      let destination = T::ProtocolFeeAccount::get();
      let amount = T::Ledger::balance(asset, &registry);
      if !amount.is_zero() {
        T::Ledger::transfer(asset, &registry, &destination, amount)?;
      }

      Self::deposit_event(Event::FeesSwept {
        asset,
        amount,
        destination,
      });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Registry account holding pulled funds between transfer and swap, and retained fees
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Unix seconds of the current block
    pub fn current_block_timestamp() -> u64 {
      T::TimeProvider::now().as_secs()
    }

    pub fn default_router() -> Option<T::AccountId> {
      Configuration::<T>::get().map(|config| config.default_router)
    }

    pub fn automation_layer() -> Option<T::AccountId> {
      Configuration::<T>::get().map(|config| config.automation_layer)
    }

    pub fn accepting_new_recurring_buys() -> bool {
      Configuration::<T>::get().is_some_and(|config| config.accepting_new_recurring_buys)
    }

    pub fn wrap_native() -> AssetId {
      Configuration::<T>::get().map_or(primitives::NULL_ASSET, |config| config.wrap_native)
    }

    pub fn is_paused() -> bool {
      Configuration::<T>::get().is_some_and(|config| config.paused)
    }

    /// Whether `id` is active and due, i.e. `transfer_funds` or `simple_automation` would
    /// pass the schedule check right now.
    pub fn check_simple_automation(id: RecurringBuyId) -> bool {
      RecurringBuys::<T>::get(id)
        .is_some_and(|recurring_buy| recurring_buy.is_due(Self::current_block_timestamp()))
    }

    /// Buys with ids in `[start, end]`, ascending, whatever their status.
    pub fn range_of_recurring_buys(
      start: RecurringBuyId,
      end: RecurringBuyId,
    ) -> Vec<(RecurringBuyId, RecurringBuyOf<T>)> {
      let next_id = NextRecurringBuyId::<T>::get();
      if start > end {
        return Vec::new();
      }
      (start..=end)
        .take_while(|id| *id < next_id)
        .filter_map(|id| RecurringBuys::<T>::get(id).map(|recurring_buy| (id, recurring_buy)))
        .collect()
    }

    /// Active buys with ids in `[start, end]`, ascending.
    pub fn valid_range_of_recurring_buys(
      start: RecurringBuyId,
      end: RecurringBuyId,
    ) -> Vec<(RecurringBuyId, RecurringBuyOf<T>)> {
      Self::range_of_recurring_buys(start, end)
        .into_iter()
        .filter(|(_, recurring_buy)| recurring_buy.is_active())
        .collect()
    }

    /// The all-zero account stands in for "no address".
    pub fn is_null_account(who: &T::AccountId) -> bool {
      T::AccountId::decode(&mut TrailingZeroInput::zeroes()).is_ok_and(|zero| &zero == who)
    }

    fn configuration() -> Result<ProtocolConfigOf<T>, DispatchError> {
      Configuration::<T>::get().ok_or_else(|| Error::<T>::ConfigurationMissing.into())
    }

    fn mutate_unpaused(
      f: impl FnOnce(&mut ProtocolConfigOf<T>) -> DispatchResult,
    ) -> DispatchResult {
      Configuration::<T>::try_mutate(|maybe| -> DispatchResult {
        let config = maybe.as_mut().ok_or(Error::<T>::ConfigurationMissing)?;
        ensure!(!config.paused, Error::<T>::ProtocolPaused);
        f(config)
      })
    }

    /// Authorize the caller and check the schedule. Returns the current timestamp.
    ///
    /// Not-active and not-yet-due both report `InvalidRecurringBuy`.
    fn ensure_executable(
      origin: OriginFor<T>,
      recurring_buy: &RecurringBuyOf<T>,
      config: &ProtocolConfigOf<T>,
    ) -> Result<u64, DispatchError> {
      if T::AdminOrigin::try_origin(origin.clone()).is_err() {
        let who = ensure_signed(origin)?;
        ensure!(
          who == recurring_buy.sender
            || T::AutomationRegistry::is_authorized(
              &config.automation_layer,
              recurring_buy.account_number,
              &who
            ),
          Error::<T>::UnauthorizedCaller
        );
      }

      let now = Self::current_block_timestamp();
      ensure!(recurring_buy.is_due(now), Error::<T>::InvalidRecurringBuy);
      ensure!(!config.paused, Error::<T>::ProtocolPaused);
      Ok(now)
    }

    fn next_payment_due(recurring_buy: &RecurringBuyOf<T>, now: u64) -> Result<u64, DispatchError> {
      now
        .checked_add(recurring_buy.time_interval_in_seconds)
        .ok_or_else(|| Error::<T>::ArithmeticOverflow.into())
    }

    /// Pull the spend amount, pay the fee split and swap the remainder for the sender.
    ///
    /// Returns `(net amount swapped, amount bought)`.
    fn execute_purchase(
      recurring_buy: &RecurringBuyOf<T>,
      config: &ProtocolConfigOf<T>,
    ) -> Result<(Balance, Balance), DispatchError> {
      let registry = Self::account_id();
      let asset_in = recurring_buy.token_to_spend;
      let amount = recurring_buy.amount_to_spend;

      ensure!(
        T::Ledger::allowance(asset_in, &recurring_buy.sender, &registry) >= amount,
        Error::<T>::InsufficientAllowance
      );
      T::Ledger::transfer_from(asset_in, &recurring_buy.sender, &registry, &registry, amount)?;

      let breakdown = FeeBreakdown::new(
        amount,
        T::ProtocolFee::get(),
        recurring_buy.payment_interface.is_some(),
      );
      Self::pay_fee_share(
        asset_in,
        &registry,
        &T::ProtocolFeeAccount::get(),
        breakdown.owner_share,
      )?;
      if let Some(interface) = &recurring_buy.payment_interface {
        Self::pay_fee_share(asset_in, &registry, interface, breakdown.interface_share)?;
      }

      let payout = Payout::for_purchase(recurring_buy.token_to_buy, config.wrap_native);
      let amount_out = T::SwapProvider::swap_exact_in(
        &recurring_buy.dex_router,
        &registry,
        asset_in,
        payout,
        breakdown.net_amount,
        &recurring_buy.sender,
      )
      .inspect_err(|e| {
        log::warn!(
          target: LOG_TARGET,
          "swap of {} {asset_in} via {:?} failed: {e:?}",
          breakdown.net_amount,
          recurring_buy.dex_router
        )
      })?;

      Ok((breakdown.net_amount, amount_out))
    }

    /// Pay a fee share out of the registry account. A share the recipient cannot receive
    /// (e.g. below the asset's minimum balance on a fresh account) stays with the registry.
    fn pay_fee_share(
      asset: AssetId,
      registry: &T::AccountId,
      to: &T::AccountId,
      share: Balance,
    ) -> DispatchResult {
      if share.is_zero() {
        return Ok(());
      }
      if !T::Ledger::can_receive(asset, to, share) {
        log::debug!(
          target: LOG_TARGET,
          "fee share of {share} {asset} not receivable by {to:?}, retained"
        );
        return Ok(());
      }
      T::Ledger::transfer(asset, registry, to, share)
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub default_router: Option<T::AccountId>,
    pub automation_layer: Option<T::AccountId>,
    pub wrap_native: AssetId,
    pub accepting_new_recurring_buys: bool,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Registry account survives holding only sufficient assets
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());

      assert_eq!(
        self.default_router.is_some(),
        self.automation_layer.is_some(),
        "default router and automation layer must be set together"
      );
      let (Some(default_router), Some(automation_layer)) =
        (self.default_router.clone(), self.automation_layer.clone())
      else {
        return;
      };
      assert!(
        !Pallet::<T>::is_null_account(&default_router),
        "default router must not be the null account"
      );
      assert!(
        !Pallet::<T>::is_null_account(&automation_layer),
        "automation layer must not be the null account"
      );

      Configuration::<T>::put(ProtocolConfig {
        default_router,
        automation_layer,
        accepting_new_recurring_buys: self.accepting_new_recurring_buys,
        wrap_native: self.wrap_native,
        paused: false,
      });
    }
  }
}
