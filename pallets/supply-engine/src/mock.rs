extern crate alloc;

use crate as pallet_supply_engine;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{Role, params};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Asset id of the managed token in the mock assets ledger
pub const TOKEN_ASSET_ID: u32 = 1;

/// Genesis admin: holds the full role bundle and the initial allocation
pub const ADMIN: u64 = 1;

// Stateful role-store double: membership survives for the lifetime of one
// test externalities instance and is reset by the builders below.
thread_local! {
  pub static ROLES: RefCell<BTreeSet<(Role, u64)>> = const { RefCell::new(BTreeSet::new()) };
}

/// Grant a role directly in the store, bypassing the engine
pub fn grant_role(role: Role, who: u64) {
  ROLES.with(|r| r.borrow_mut().insert((role, who)));
}

/// Revoke a role directly in the store, bypassing the engine
pub fn revoke_role(role: Role, who: u64) {
  ROLES.with(|r| r.borrow_mut().remove(&(role, who)));
}

pub fn has_role(role: Role, who: u64) -> bool {
  ROLES.with(|r| r.borrow().contains(&(role, who)))
}

pub struct MockRoles;
impl pallet_supply_engine::RoleStore<u64> for MockRoles {
  fn has_role(role: Role, who: &u64) -> bool {
    has_role(role, *who)
  }
  fn grant_role(role: Role, who: &u64) {
    grant_role(role, *who);
  }
  fn revoke_role(role: Role, who: &u64) {
    revoke_role(role, *who);
  }
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    Timestamp: polkadot_sdk::pallet_timestamp,
    SupplyEngine: pallet_supply_engine,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
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
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
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
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

impl polkadot_sdk::pallet_timestamp::Config for Test {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<5>;
  type WeightInfo = ();
}

pub struct EnginePalletId;
impl Get<PalletId> for EnginePalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::SUPPLY_ENGINE_PALLET_ID)
  }
}

impl pallet_supply_engine::Config for Test {
  type Assets = Assets;
  type Currency = Balances;
  type Roles = MockRoles;
  type TimeProvider = Timestamp;
  type PalletId = EnginePalletId;
  type TokenAssetId = ConstU32<TOKEN_ASSET_ID>;
  type MaxSupply = ConstU128<{ params::MAX_SUPPLY }>;
  type MaxAirdropBatch = ConstU32<{ params::MAX_AIRDROP_RECIPIENTS }>;
  type MaxFeeBasisPoints = ConstU32<{ params::MAX_FEE_BASIS_POINTS }>;
  type DefaultFeeBasisPoints = ConstU32<{ params::DEFAULT_FEE_BASIS_POINTS }>;
  type MinBurnInterval = ConstU64<{ params::MIN_BURN_INTERVAL_SECS }>;
  type DefaultBurnInterval = ConstU64<{ params::DEFAULT_BURN_INTERVAL_SECS }>;
  type MinBurnDivisor = ConstU128<{ params::MIN_BURN_DIVISOR }>;
  type MaxBurnDivisor = ConstU128<{ params::MAX_BURN_DIVISOR }>;
  type DefaultBurnDivisor = ConstU128<{ params::DEFAULT_BURN_DIVISOR }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = EngineBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct EngineBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for EngineBenchmarkHelper {
  fn grant(role: Role, who: &u64) {
    grant_role(role, *who);
  }

  fn fund_token(who: &u64, amount: u128) -> polkadot_sdk::sp_runtime::DispatchResult {
    use polkadot_sdk::frame_support::traits::fungibles::Mutate;
    Assets::mint_into(TOKEN_ASSET_ID, who, amount)?;
    Ok(())
  }

  fn fund_native(who: &u64, amount: u128) {
    use polkadot_sdk::frame_support::traits::Currency;
    let _ = Balances::deposit_creating(who, amount);
  }

  fn set_time(secs: u64) {
    polkadot_sdk::pallet_timestamp::Now::<Test>::put(secs * 1_000);
  }
}

fn build(admin: Option<u64>) -> polkadot_sdk::sp_io::TestExternalities {
  ROLES.with(|r| r.borrow_mut().clear());

  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: alloc::vec![(TOKEN_ASSET_ID, ADMIN, true, 1)],
    metadata: alloc::vec![],
    accounts: alloc::vec![],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_supply_engine::GenesisConfig::<Test> { admin }
    .assimilate_storage(&mut t)
    .unwrap();

  t.into()
}

/// Standard externalities: admin seeded with the role bundle and the
/// initial 20% allocation
pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  build(Some(ADMIN))
}

/// Externalities with no admin and zero issuance; tests grant roles
/// directly via [`grant_role`]
pub fn new_test_ext_without_admin() -> polkadot_sdk::sp_io::TestExternalities {
  build(None)
}
