#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn mint() -> Weight;
  fn transfer() -> Weight;
  fn approve() -> Weight;
  fn transfer_from() -> Weight;
  fn deposit_for_burn() -> Weight;
  fn trigger_scheduled_burn() -> Weight;
  fn burn_all_deposited() -> Weight;
  fn admin_burn() -> Weight;
  fn airdrop(recipients: u32) -> Weight;
  fn update_burn_interval() -> Weight;
  fn update_burn_divisor() -> Weight;
  fn update_fee_basis_points() -> Weight;
  fn withdraw_fees() -> Weight;
  fn recover_foreign_asset() -> Weight;
  fn recover_own_token() -> Weight;
  fn transfer_admin() -> Weight;
  fn renounce_admin() -> Weight;
  fn deposit_native() -> Weight;
  fn withdraw_native() -> Weight;
  fn pause() -> Weight;
  fn unpause() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config + crate::Config> WeightInfo for SubstrateWeight<T> {
  fn mint() -> Weight {
    Weight::from_parts(25_000_000, 2000)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn transfer() -> Weight {
    Weight::from_parts(35_000_000, 2400)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(4))
  }

  fn approve() -> Weight {
    Weight::from_parts(20_000_000, 1600)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn transfer_from() -> Weight {
    Weight::from_parts(40_000_000, 2600)
      .saturating_add(T::DbWeight::get().reads(5))
      .saturating_add(T::DbWeight::get().writes(5))
  }

  fn deposit_for_burn() -> Weight {
    Weight::from_parts(30_000_000, 2200)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(4))
  }

  fn trigger_scheduled_burn() -> Weight {
    Weight::from_parts(35_000_000, 2400)
      .saturating_add(T::DbWeight::get().reads(7))
      .saturating_add(T::DbWeight::get().writes(5))
  }

  fn burn_all_deposited() -> Weight {
    Weight::from_parts(30_000_000, 2200)
      .saturating_add(T::DbWeight::get().reads(5))
      .saturating_add(T::DbWeight::get().writes(5))
  }

  fn admin_burn() -> Weight {
    Weight::from_parts(25_000_000, 2000)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(4))
  }

  fn airdrop(recipients: u32) -> Weight {
    let bounded = u64::from(recipients.min(T::MaxAirdropBatch::get()));
    Weight::from_parts(
      15_000_000u64.saturating_add(bounded.saturating_mul(12_000_000)),
      2000u64.saturating_add(bounded.saturating_mul(128)),
    )
    .saturating_add(T::DbWeight::get().reads(3u64.saturating_add(bounded)))
    .saturating_add(T::DbWeight::get().writes(2u64.saturating_add(bounded)))
  }

  fn update_burn_interval() -> Weight {
    Weight::from_parts(12_000_000, 900)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn update_burn_divisor() -> Weight {
    Weight::from_parts(12_000_000, 900)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn update_fee_basis_points() -> Weight {
    Weight::from_parts(12_000_000, 900)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn withdraw_fees() -> Weight {
    Weight::from_parts(30_000_000, 2200)
      .saturating_add(T::DbWeight::get().reads(5))
      .saturating_add(T::DbWeight::get().writes(4))
  }

  fn recover_foreign_asset() -> Weight {
    Weight::from_parts(30_000_000, 2200)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn recover_own_token() -> Weight {
    Weight::from_parts(30_000_000, 2200)
      .saturating_add(T::DbWeight::get().reads(6))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn transfer_admin() -> Weight {
    Weight::from_parts(20_000_000, 1600)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn renounce_admin() -> Weight {
    Weight::from_parts(18_000_000, 1400)
      .saturating_add(T::DbWeight::get().reads(3))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn deposit_native() -> Weight {
    Weight::from_parts(30_000_000, 2200)
      .saturating_add(T::DbWeight::get().reads(5))
      .saturating_add(T::DbWeight::get().writes(4))
  }

  fn withdraw_native() -> Weight {
    Weight::from_parts(25_000_000, 2000)
      .saturating_add(T::DbWeight::get().reads(4))
      .saturating_add(T::DbWeight::get().writes(3))
  }

  fn pause() -> Weight {
    Weight::from_parts(10_000_000, 600)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }

  fn unpause() -> Weight {
    Weight::from_parts(10_000_000, 600)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn mint() -> Weight { Weight::from_parts(25_000_000, 2000) }
  fn transfer() -> Weight { Weight::from_parts(35_000_000, 2400) }
  fn approve() -> Weight { Weight::from_parts(20_000_000, 1600) }
  fn transfer_from() -> Weight { Weight::from_parts(40_000_000, 2600) }
  fn deposit_for_burn() -> Weight { Weight::from_parts(30_000_000, 2200) }
  fn trigger_scheduled_burn() -> Weight { Weight::from_parts(35_000_000, 2400) }
  fn burn_all_deposited() -> Weight { Weight::from_parts(30_000_000, 2200) }
  fn admin_burn() -> Weight { Weight::from_parts(25_000_000, 2000) }
  fn airdrop(recipients: u32) -> Weight {
    let bounded = u64::from(recipients.min(50));
    Weight::from_parts(15_000_000u64.saturating_add(bounded.saturating_mul(12_000_000)), 2000)
  }
  fn update_burn_interval() -> Weight { Weight::from_parts(12_000_000, 900) }
  fn update_burn_divisor() -> Weight { Weight::from_parts(12_000_000, 900) }
  fn update_fee_basis_points() -> Weight { Weight::from_parts(12_000_000, 900) }
  fn withdraw_fees() -> Weight { Weight::from_parts(30_000_000, 2200) }
  fn recover_foreign_asset() -> Weight { Weight::from_parts(30_000_000, 2200) }
  fn recover_own_token() -> Weight { Weight::from_parts(30_000_000, 2200) }
  fn transfer_admin() -> Weight { Weight::from_parts(20_000_000, 1600) }
  fn renounce_admin() -> Weight { Weight::from_parts(18_000_000, 1400) }
  fn deposit_native() -> Weight { Weight::from_parts(30_000_000, 2200) }
  fn withdraw_native() -> Weight { Weight::from_parts(25_000_000, 2000) }
  fn pause() -> Weight { Weight::from_parts(10_000_000, 600) }
  fn unpause() -> Weight { Weight::from_parts(10_000_000, 600) }
}
