extern crate alloc;

use crate as pallet_recurring_buy;
use crate::SwapProvider;
use alloc::vec;
use polkadot_sdk::frame_support::traits::fungible::Mutate as NativeMutate;
use polkadot_sdk::frame_support::traits::fungibles::Mutate;
use polkadot_sdk::frame_support::traits::tokens::{Fortitude, Precision, Preservation};
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, ord_parameter_types, parameter_types,
  traits::{ConstU32, ConstU64, ConstU128},
};
use polkadot_sdk::frame_system::{self, EnsureSignedBy};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, Permill,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  AssetId, Balance, Payout,
  params::{PRECISION, RECURRING_BUY_FEE},
  well_known::{DOT, ETH, USDC, WRAPPED_NATIVE},
};
use std::cell::RefCell;
use std::collections::BTreeMap;

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

/// Admin origin and protocol fee account
pub const OWNER: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;
pub const INTERFACE: AccountId = 4;
pub const KEEPER: AccountId = 5;
pub const DEFAULT_ROUTER: AccountId = 50;
pub const OTHER_ROUTER: AccountId = 51;
pub const LAYER: AccountId = 100;
pub const OTHER_LAYER: AccountId = 101;

/// Spend asset whose minimum balance exceeds typical fee shares
pub const HIGH_MIN_ASSET: AssetId = 5;
pub const HIGH_MIN_BALANCE: Balance = 1_000;

pub const INITIAL_NATIVE: Balance = 1_000 * PRECISION;
pub const INITIAL_TOKENS: Balance = 1_000 * PRECISION;
/// Unix seconds the test externalities start at
pub const GENESIS_TIME: u64 = 1_700_000_000;

thread_local! {
  // Router -> output per input as (numerator, denominator)
  pub static ROUTER_RATES: RefCell<BTreeMap<AccountId, (Balance, Balance)>> =
    const { RefCell::new(BTreeMap::new()) };
}

pub fn set_router_rate(router: AccountId, numerator: Balance, denominator: Balance) {
  ROUTER_RATES.with(|r| r.borrow_mut().insert(router, (numerator, denominator)));
}

/// Move the block clock to `secs` unix seconds
pub fn set_now(secs: u64) {
  Timestamp::set_timestamp(secs * 1_000);
}

pub fn advance_time(secs: u64) {
  set_now(RecurringBuy::current_block_timestamp() + secs);
}

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    Timestamp: polkadot_sdk::pallet_timestamp,
    AutomationRegistry: pallet_automation_registry,
    RecurringBuy: pallet_recurring_buy,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = Balance;
  type AssetId = AssetId;
  type AssetIdParameter = AssetId;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<AssetId, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> AssetId {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

impl polkadot_sdk::pallet_timestamp::Config for Test {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<1>;
  type WeightInfo = ();
}

impl pallet_automation_registry::Config for Test {
  type WeightInfo = ();
}

/// Fixed-rate exchange: burns the input from `who` and mints the output to `recipient`.
pub struct MockSwapProvider;
impl SwapProvider<AccountId> for MockSwapProvider {
  fn swap_exact_in(
    router: &AccountId,
    who: &AccountId,
    asset_in: AssetId,
    payout: Payout,
    amount_in: Balance,
    recipient: &AccountId,
  ) -> Result<Balance, DispatchError> {
    let (numerator, denominator) = ROUTER_RATES
      .with(|r| r.borrow().get(router).cloned())
      .ok_or(DispatchError::Other("Unknown router"))?;

    <Assets as Mutate<AccountId>>::burn_from(
      asset_in,
      who,
      amount_in,
      Preservation::Expendable,
      Precision::Exact,
      Fortitude::Polite,
    )?;

    let amount_out = amount_in.saturating_mul(numerator) / denominator;
    match payout {
      Payout::Native => {
        <Balances as NativeMutate<AccountId>>::mint_into(recipient, amount_out)?;
      }
      Payout::Token(asset_out) => {
        <Assets as Mutate<AccountId>>::mint_into(asset_out, recipient, amount_out)?;
      }
    }
    Ok(amount_out)
  }
}

ord_parameter_types! {
  pub const Owner: AccountId = OWNER;
}

parameter_types! {
  pub const RecurringBuyPalletId: PalletId = PalletId(*primitives::ecosystem::pallet_ids::RECURRING_BUY_PALLET_ID);
  pub const ProtocolFee: Permill = RECURRING_BUY_FEE;
  pub const ProtocolFeeAccount: AccountId = OWNER;
}

impl pallet_recurring_buy::Config for Test {
  type Ledger = pallet_recurring_buy::FungiblesLedger<Assets>;
  type SwapProvider = MockSwapProvider;
  type AutomationRegistry = AutomationRegistry;
  type TimeProvider = Timestamp;
  type AdminOrigin = EnsureSignedBy<Owner, AccountId>;
  type PalletId = RecurringBuyPalletId;
  type ProtocolFee = ProtocolFee;
  type ProtocolFeeAccount = ProtocolFeeAccount;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = RecurringBuyBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct RecurringBuyBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId> for RecurringBuyBenchmarkHelper {
  fn fund(who: &AccountId, asset: AssetId, amount: Balance) -> polkadot_sdk::sp_runtime::DispatchResult {
    let _ = Assets::force_create(frame_system::RawOrigin::Root.into(), asset, OWNER, true, 1);
    <Balances as NativeMutate<AccountId>>::mint_into(who, PRECISION)?;
    <Assets as Mutate<AccountId>>::mint_into(asset, who, amount)?;
    Ok(())
  }

  fn approve(
    owner: &AccountId,
    delegate: &AccountId,
    asset: AssetId,
    amount: Balance,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    use polkadot_sdk::frame_support::traits::fungibles::approvals::Mutate as _;
    Assets::approve(asset, owner, delegate, amount)
  }

  fn create_route(
    router: &AccountId,
    _asset_in: AssetId,
    _asset_out: AssetId,
  ) -> polkadot_sdk::sp_runtime::DispatchResult {
    set_router_rate(*router, 1, 1);
    Ok(())
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (OWNER, INITIAL_NATIVE),
      (ALICE, INITIAL_NATIVE),
      (BOB, INITIAL_NATIVE),
      (KEEPER, INITIAL_NATIVE),
    ],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  // Sufficient assets: holders need no native balance
  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: vec![
      (WRAPPED_NATIVE, OWNER, true, 1),
      (USDC, OWNER, true, 1),
      (DOT, OWNER, true, 1),
      (ETH, OWNER, true, 1),
      (HIGH_MIN_ASSET, OWNER, true, HIGH_MIN_BALANCE),
    ],
    metadata: vec![],
    accounts: vec![
      (USDC, OWNER, INITIAL_TOKENS),
      (USDC, ALICE, INITIAL_TOKENS),
      (USDC, BOB, INITIAL_TOKENS),
      (ETH, ALICE, INITIAL_TOKENS),
      (HIGH_MIN_ASSET, ALICE, INITIAL_TOKENS),
    ],
    reserves: vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_recurring_buy::GenesisConfig::<Test> {
    default_router: Some(DEFAULT_ROUTER),
    automation_layer: Some(LAYER),
    wrap_native: WRAPPED_NATIVE,
    accepting_new_recurring_buys: true,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  ROUTER_RATES.with(|r| r.borrow_mut().clear());

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| {
    System::set_block_number(1);
    set_now(GENESIS_TIME);
    set_router_rate(DEFAULT_ROUTER, 2, 1);
    set_router_rate(OTHER_ROUTER, 1, 2);
  });
  ext
}

/// Genesis without protocol configuration
pub fn new_unconfigured_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();
  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| {
    System::set_block_number(1);
    set_now(GENESIS_TIME);
  });
  ext
}
