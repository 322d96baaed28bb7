//! Supply Engine Pallet
//!
//! Issuance policy engine for a capped-supply token: role-gated minting and
//! batched grants, voluntary deposit-for-burn with a time-gated proportional
//! burn schedule, per-transfer fee skimming, and reserve-aware recovery of
//! stray balances.
//!
//! The engine owns no ledger of its own. Token balances live in the assets
//! ledger (`Config::Assets`), native value in `Config::Currency`, and role
//! membership in an external [`RoleStore`]; the pallet's sovereign account
//! holds the deposit and fee reserves on the ledger and the pallet keeps the
//! counters that say which part of that balance is reserved.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use primitives::Role;

/// Role-membership store consulted for every privileged entry point.
///
/// Membership (role -> set of accounts) is owned by the runtime, not by this
/// pallet; the engine only checks it and, on admin handover, migrates the
/// role bundle through it. Test doubles may substitute an arbitrary
/// membership predicate.
pub trait RoleStore<AccountId> {
  fn has_role(role: Role, who: &AccountId) -> bool;
  fn grant_role(role: Role, who: &AccountId);
  fn revoke_role(role: Role, who: &AccountId);
}

/// Deny-all store for runtimes that wire privileged paths elsewhere.
impl<AccountId> RoleStore<AccountId> for () {
  fn has_role(_role: Role, _who: &AccountId) -> bool {
    false
  }
  fn grant_role(_role: Role, _who: &AccountId) {}
  fn revoke_role(_role: Role, _who: &AccountId) {}
}

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  fn grant(role: Role, who: &AccountId);
  fn fund_token(
    who: &AccountId,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  fn fund_native(who: &AccountId, amount: primitives::Balance);
  fn set_time(secs: u64);
}

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use crate::RoleStore;
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      storage::with_storage_layer,
      traits::{
        UnixTime,
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{
          Inspect as FungiblesInspect, Mutate as FungiblesMutate,
          approvals::Mutate as ApprovalsMutate,
        },
        tokens::{Fortitude, Precision, Preservation},
      },
    },
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::{Balance, Role, params};

  /// The current storage version.
  const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

  /// Configuration trait for the supply engine pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// The assets ledger holding the managed token and any third-party
    /// assets the engine may be asked to recover
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + FungiblesMutate<Self::AccountId, AssetId = u32, Balance = Balance>
      + ApprovalsMutate<Self::AccountId, AssetId = u32, Balance = Balance>;

    /// Native currency handled by the value-forwarding paths
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// External role-membership store gating privileged entry points
    type Roles: crate::RoleStore<Self::AccountId>;

    /// Wall-clock source for the burn schedule
    type TimeProvider: UnixTime;

    /// The pallet ID deriving the engine's sovereign account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Asset id of the managed token in the assets ledger
    #[pallet::constant]
    type TokenAssetId: Get<u32>;

    /// Hard ceiling on the managed token's total issuance
    #[pallet::constant]
    type MaxSupply: Get<Balance>;

    /// Maximum number of recipients accepted in one airdrop batch
    #[pallet::constant]
    type MaxAirdropBatch: Get<u32>;

    /// Upper bound on the transfer fee rate, in basis points
    #[pallet::constant]
    type MaxFeeBasisPoints: Get<u32>;

    /// Fee rate applied until governance reconfigures it
    #[pallet::constant]
    type DefaultFeeBasisPoints: Get<u32>;

    /// Lower bound on the scheduled-burn interval, in seconds
    #[pallet::constant]
    type MinBurnInterval: Get<u64>;

    /// Burn interval applied until governance reconfigures it
    #[pallet::constant]
    type DefaultBurnInterval: Get<u64>;

    /// Smallest accepted burn divisor
    #[pallet::constant]
    type MinBurnDivisor: Get<Balance>;

    /// Largest accepted burn divisor
    #[pallet::constant]
    type MaxBurnDivisor: Get<Balance>;

    /// Burn divisor applied until governance reconfigures it
    #[pallet::constant]
    type DefaultBurnDivisor: Get<Balance>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  #[pallet::storage_version(STORAGE_VERSION)]
  pub struct Pallet<T>(PhantomData<T>);

  /// Tokens held by the engine account and earmarked for destruction.
  ///
  /// Invariant: never exceeds the engine account's token balance.
  #[pallet::storage]
  #[pallet::getter(fn deposited_balance)]
  pub type DepositPool<T: Config> = StorageValue<_, Balance, ValueQuery>;

  /// Tokens skimmed from ordinary transfers, pending withdrawal.
  ///
  /// Disjoint from [`DepositPool`]: the sum of both never exceeds the
  /// engine account's token balance.
  #[pallet::storage]
  #[pallet::getter(fn collected_fees)]
  pub type FeePool<T: Config> = StorageValue<_, Balance, ValueQuery>;

  /// Current transfer fee rate in basis points
  #[pallet::storage]
  #[pallet::getter(fn fee_basis_points)]
  pub type FeeBasisPoints<T: Config> =
    StorageValue<_, u32, ValueQuery, T::DefaultFeeBasisPoints>;

  /// Seconds that must elapse between scheduled burns
  #[pallet::storage]
  #[pallet::getter(fn burn_interval)]
  pub type BurnInterval<T: Config> = StorageValue<_, u64, ValueQuery, T::DefaultBurnInterval>;

  /// Divisor applied to total issuance to size each scheduled burn
  #[pallet::storage]
  #[pallet::getter(fn burn_divisor)]
  pub type BurnDivisor<T: Config> = StorageValue<_, Balance, ValueQuery, T::DefaultBurnDivisor>;

  /// Unix timestamp of the last successful scheduled burn
  #[pallet::storage]
  #[pallet::getter(fn last_burn_timestamp)]
  pub type LastBurnTimestamp<T: Config> = StorageValue<_, u64, ValueQuery>;

  /// Lifetime total of destroyed tokens, across all burn paths
  #[pallet::storage]
  #[pallet::getter(fn total_burned)]
  pub type TotalBurned<T: Config> = StorageValue<_, Balance, ValueQuery>;

  /// Cached admin identity; kept in sync with `Admin` role membership
  #[pallet::storage]
  #[pallet::getter(fn admin_account)]
  pub type AdminAccount<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Halts every state-mutating entry point while set
  #[pallet::storage]
  #[pallet::getter(fn is_paused)]
  pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

  /// Set while a value-moving entry point is executing; a nested guarded
  /// call observing it fails instead of proceeding
  #[pallet::storage]
  pub type EntryGuard<T: Config> = StorageValue<_, bool, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// New tokens issued to an account
    Minted { to: T::AccountId, amount: Balance },
    /// One airdrop grant settled
    Airdropped { to: T::AccountId, amount: Balance },
    /// Tokens destroyed
    Burned { amount: Balance, timestamp: u64 },
    /// Tokens committed to the deposit pool for future destruction
    DepositedForBurn { who: T::AccountId, amount: Balance },
    /// Scheduled-burn interval reconfigured
    BurnIntervalUpdated { new_interval: u64 },
    /// Burn divisor reconfigured
    BurnDivisorUpdated { new_divisor: Balance },
    /// Transfer fee rate reconfigured
    FeeBasisPointsUpdated { old_fee: u32, new_fee: u32 },
    /// Collected fees swept out of the engine account
    FeesWithdrawn { to: T::AccountId, amount: Balance },
    /// Engine-held tokens recovered to an external account
    TokensRecovered {
      asset_id: u32,
      to: T::AccountId,
      amount: Balance,
    },
    /// Native value swept out of the engine account
    NativeWithdrawn { to: T::AccountId, amount: Balance },
    /// Incoming native value could not be forwarded and stays on the engine
    NativeForwardFailed {
      admin: Option<T::AccountId>,
      amount: Balance,
    },
    /// Role bundle migrated to a new admin
    AdminTransferred {
      previous: Option<T::AccountId>,
      new_admin: T::AccountId,
    },
    /// An admin dropped its own role bundle without naming a successor
    AdminRenounced { who: T::AccountId },
    /// State-mutating entry points halted
    EngineHalted { who: T::AccountId },
    /// State-mutating entry points resumed
    EngineResumed { who: T::AccountId },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Amount arguments must be strictly positive
    ZeroAmount,
    /// The engine's own account cannot be the target of this operation
    InvalidRecipient,
    /// Recipient and amount lists differ in length
    ArrayLengthMismatch,
    /// Airdrop batch exceeds the configured maximum
    BatchTooLarge,
    /// Issuance would exceed the supply ceiling
    ExceedsMaxSupply,
    /// The burn interval has not yet elapsed
    BurnNotDue,
    /// Issuance over divisor rounds down to nothing
    BurnAmountTooSmall,
    /// The deposit pool is empty
    NoDepositedTokens,
    /// Burn interval below the configured minimum
    InvalidBurnInterval,
    /// Burn divisor outside the configured safety range
    BurnDivisorOutOfRange,
    /// Fee rate above the configured cap
    InvalidFeeBasisPoints,
    /// The fee pool is empty
    NoFeesToWithdraw,
    /// The managed token must be recovered through the reserve-aware path
    CannotRecoverSelf,
    /// The engine account holds nothing beyond its reserves
    NothingRecoverable,
    /// Requested more than the unreserved part of the engine balance
    ExceedsRecoverableBalance,
    /// Handover target is already the cached admin
    AlreadyAdmin,
    /// The engine account holds less native value than requested
    InsufficientNativeBalance,
    /// Caller does not hold the required role
    MissingRole,
    /// A guarded entry point was re-entered within one call stack
    ReentrantCall,
    /// The engine is paused
    EnginePaused,
    /// The engine is already paused
    AlreadyPaused,
    /// The engine is not paused
    NotPaused,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Issue `amount` new tokens to `to`, subject to the supply ceiling.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::mint())]
    pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Minter, &who)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      ensure!(to != Self::account_id(), Error::<T>::InvalidRecipient);
      Self::ensure_supply_headroom(amount)?;
      T::Assets::mint_into(T::TokenAssetId::get(), &to, amount)?;
      Self::deposit_event(Event::Minted { to, amount });
      Ok(())
    }

    /// Transfer `value` to `to`, skimming the configured fee into the fee
    /// pool. Self-transfers and zero values pass through untouched.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(origin: OriginFor<T>, to: T::AccountId, value: Balance) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::settle_transfer(&who, &to, value)
    }

    /// Register a signed-transfer approval with the ledger.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::approve())]
    pub fn approve(
      origin: OriginFor<T>,
      delegate: T::AccountId,
      value: Balance,
    ) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      T::Assets::approve(T::TokenAssetId::get(), &who, &delegate, value)
    }

    /// Transfer `value` from `owner` to `to` on the strength of an
    /// approval. Allowance is consumed for the full value, fee leg
    /// included; an insufficient allowance aborts the call.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::transfer_from())]
    pub fn transfer_from(
      origin: OriginFor<T>,
      owner: T::AccountId,
      to: T::AccountId,
      value: Balance,
    ) -> DispatchResult {
      Self::ensure_not_paused()?;
      let delegate = ensure_signed(origin)?;
      Self::settle_delegated_transfer(&delegate, &owner, &to, value)
    }

    /// Commit `amount` of the caller's tokens to the deposit pool, to be
    /// destroyed by a later burn. Open to any caller.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::deposit_for_burn())]
    pub fn deposit_for_burn(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      Self::with_entry_guard(|| {
        T::Assets::transfer(
          T::TokenAssetId::get(),
          &who,
          &Self::account_id(),
          amount,
          Preservation::Expendable,
        )?;
        DepositPool::<T>::try_mutate(|pool| -> DispatchResult {
          *pool = pool.checked_add(amount).ok_or(Error::<T>::ArithmeticOverflow)?;
          Ok(())
        })?;
        Self::deposit_event(Event::DepositedForBurn { who, amount });
        Ok(())
      })
    }

    /// Destroy `min(total_issuance / divisor, deposit_pool)` once per burn
    /// interval. The quota self-adjusts with issuance but never reaches
    /// outside the deposit pool.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::trigger_scheduled_burn())]
    pub fn trigger_scheduled_burn(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Burner, &who)?;
      Self::with_entry_guard(|| {
        let now = Self::now();
        let due = LastBurnTimestamp::<T>::get().saturating_add(BurnInterval::<T>::get());
        ensure!(now >= due, Error::<T>::BurnNotDue);
        let token = T::TokenAssetId::get();
        let quota = T::Assets::total_issuance(token)
          .checked_div(BurnDivisor::<T>::get())
          .ok_or(Error::<T>::BurnDivisorOutOfRange)?;
        ensure!(!quota.is_zero(), Error::<T>::BurnAmountTooSmall);
        let pool = DepositPool::<T>::get();
        let amount = quota.min(pool);
        ensure!(!amount.is_zero(), Error::<T>::NoDepositedTokens);
        Self::burn_from_engine(amount)?;
        DepositPool::<T>::put(pool - amount);
        LastBurnTimestamp::<T>::put(now);
        Self::deposit_event(Event::Burned {
          amount,
          timestamp: now,
        });
        Ok(())
      })
    }

    /// Destroy the entire deposit pool, ignoring the schedule. Leaves the
    /// last-burn timestamp untouched.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::burn_all_deposited())]
    pub fn burn_all_deposited(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Burner, &who)?;
      Self::with_entry_guard(|| {
        let pool = DepositPool::<T>::get();
        ensure!(!pool.is_zero(), Error::<T>::NoDepositedTokens);
        Self::burn_from_engine(pool)?;
        DepositPool::<T>::kill();
        Self::deposit_event(Event::Burned {
          amount: pool,
          timestamp: Self::now(),
        });
        Ok(())
      })
    }

    /// Destroy `amount` from the caller's own balance, independent of the
    /// deposit pool.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::admin_burn())]
    pub fn admin_burn(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      Self::with_entry_guard(|| {
        T::Assets::burn_from(
          T::TokenAssetId::get(),
          &who,
          amount,
          Preservation::Expendable,
          Precision::Exact,
          Fortitude::Polite,
        )?;
        TotalBurned::<T>::mutate(|total| *total = total.saturating_add(amount));
        Self::deposit_event(Event::Burned {
          amount,
          timestamp: Self::now(),
        });
        Ok(())
      })
    }

    /// Issue tokens to a bounded batch of recipients as one atomic unit.
    /// Entries are processed in order against a running issuance total;
    /// any invalid entry aborts the whole batch.
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::airdrop(recipients.len() as u32))]
    pub fn airdrop(
      origin: OriginFor<T>,
      recipients: Vec<T::AccountId>,
      amounts: Vec<Balance>,
    ) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Airdropper, &who)?;
      ensure!(
        recipients.len() == amounts.len(),
        Error::<T>::ArrayLengthMismatch
      );
      ensure!(
        recipients.len() as u32 <= T::MaxAirdropBatch::get(),
        Error::<T>::BatchTooLarge
      );
      Self::with_entry_guard(|| {
        // explicit storage layer: a bad entry rolls back every grant made
        // for earlier entries of the same batch
        with_storage_layer::<(), DispatchError, _>(|| {
          let token = T::TokenAssetId::get();
          let engine = Self::account_id();
          let cap = T::MaxSupply::get();
          let mut projected = T::Assets::total_issuance(token);
          for (to, amount) in recipients.into_iter().zip(amounts.into_iter()) {
            ensure!(to != engine, Error::<T>::InvalidRecipient);
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
            projected = projected
              .checked_add(amount)
              .ok_or(Error::<T>::ArithmeticOverflow)?;
            ensure!(projected <= cap, Error::<T>::ExceedsMaxSupply);
            T::Assets::mint_into(token, &to, amount)?;
            Self::deposit_event(Event::Minted {
              to: to.clone(),
              amount,
            });
            Self::deposit_event(Event::Airdropped { to, amount });
          }
          Ok(())
        })
      })
    }

    /// Update the scheduled-burn interval (seconds, at least one day).
    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::update_burn_interval())]
    pub fn update_burn_interval(origin: OriginFor<T>, new_interval: u64) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(
        new_interval >= T::MinBurnInterval::get(),
        Error::<T>::InvalidBurnInterval
      );
      BurnInterval::<T>::put(new_interval);
      Self::deposit_event(Event::BurnIntervalUpdated { new_interval });
      Ok(())
    }

    /// Update the burn divisor within its safety range.
    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::update_burn_divisor())]
    pub fn update_burn_divisor(origin: OriginFor<T>, new_divisor: Balance) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(
        new_divisor >= T::MinBurnDivisor::get() && new_divisor <= T::MaxBurnDivisor::get(),
        Error::<T>::BurnDivisorOutOfRange
      );
      BurnDivisor::<T>::put(new_divisor);
      Self::deposit_event(Event::BurnDivisorUpdated { new_divisor });
      Ok(())
    }

    /// Update the transfer fee rate, capped at `MaxFeeBasisPoints`.
    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::update_fee_basis_points())]
    pub fn update_fee_basis_points(origin: OriginFor<T>, new_fee: u32) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(
        new_fee <= T::MaxFeeBasisPoints::get(),
        Error::<T>::InvalidFeeBasisPoints
      );
      let old_fee = FeeBasisPoints::<T>::get();
      FeeBasisPoints::<T>::put(new_fee);
      Self::deposit_event(Event::FeeBasisPointsUpdated { old_fee, new_fee });
      Ok(())
    }

    /// Sweep the whole fee pool to `to`. The pool is zeroed before the
    /// outbound transfer so a re-entrant withdrawal finds nothing.
    #[pallet::call_index(12)]
    #[pallet::weight(T::WeightInfo::withdraw_fees())]
    pub fn withdraw_fees(origin: OriginFor<T>, to: T::AccountId) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(to != Self::account_id(), Error::<T>::InvalidRecipient);
      Self::with_entry_guard(|| {
        let amount = FeePool::<T>::get();
        ensure!(!amount.is_zero(), Error::<T>::NoFeesToWithdraw);
        FeePool::<T>::kill();
        T::Assets::transfer(
          T::TokenAssetId::get(),
          &Self::account_id(),
          &to,
          amount,
          Preservation::Expendable,
        )?;
        Self::deposit_event(Event::FeesWithdrawn { to, amount });
        Ok(())
      })
    }

    /// Recover a third-party asset parked on the engine account. The
    /// managed token itself must go through `recover_own_token`.
    #[pallet::call_index(13)]
    #[pallet::weight(T::WeightInfo::recover_foreign_asset())]
    pub fn recover_foreign_asset(
      origin: OriginFor<T>,
      asset_id: u32,
      to: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(
        asset_id != T::TokenAssetId::get(),
        Error::<T>::CannotRecoverSelf
      );
      Self::with_entry_guard(|| {
        T::Assets::transfer(
          asset_id,
          &Self::account_id(),
          &to,
          amount,
          Preservation::Expendable,
        )?;
        Self::deposit_event(Event::TokensRecovered {
          asset_id,
          to,
          amount,
        });
        Ok(())
      })
    }

    /// Recover managed tokens that reached the engine account outside the
    /// deposit and fee paths. Reserved pools are untouchable: only the
    /// surplus above `DepositPool + FeePool` may leave.
    #[pallet::call_index(14)]
    #[pallet::weight(T::WeightInfo::recover_own_token())]
    pub fn recover_own_token(
      origin: OriginFor<T>,
      to: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(to != Self::account_id(), Error::<T>::InvalidRecipient);
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      Self::with_entry_guard(|| {
        let token = T::TokenAssetId::get();
        let engine = Self::account_id();
        let reserved = DepositPool::<T>::get()
          .checked_add(FeePool::<T>::get())
          .ok_or(Error::<T>::ArithmeticOverflow)?;
        let held = T::Assets::balance(token, &engine);
        ensure!(held > reserved, Error::<T>::NothingRecoverable);
        ensure!(
          amount <= held - reserved,
          Error::<T>::ExceedsRecoverableBalance
        );
        T::Assets::transfer(token, &engine, &to, amount, Preservation::Expendable)?;
        Self::deposit_event(Event::TokensRecovered {
          asset_id: token,
          to,
          amount,
        });
        Ok(())
      })
    }

    /// Hand the full role bundle to `new_admin`: grant first, then revoke
    /// from the outgoing admin, then update the cached identity.
    #[pallet::call_index(15)]
    #[pallet::weight(T::WeightInfo::transfer_admin())]
    pub fn transfer_admin(origin: OriginFor<T>, new_admin: T::AccountId) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      ensure!(new_admin != Self::account_id(), Error::<T>::InvalidRecipient);
      Self::with_entry_guard(|| {
        let previous = AdminAccount::<T>::get();
        ensure!(
          previous.as_ref() != Some(&new_admin),
          Error::<T>::AlreadyAdmin
        );
        for role in Role::ADMIN_BUNDLE {
          T::Roles::grant_role(role, &new_admin);
        }
        if let Some(prev) = &previous {
          for role in Role::ADMIN_BUNDLE {
            T::Roles::revoke_role(role, prev);
          }
        }
        AdminAccount::<T>::put(new_admin.clone());
        Self::deposit_event(Event::AdminTransferred {
          previous,
          new_admin,
        });
        Ok(())
      })
    }

    /// Drop the caller's own role bundle without naming a successor. If the
    /// caller was the cached admin the engine is left admin-less, an
    /// irreversible terminal state unless another account already holds
    /// roles.
    #[pallet::call_index(16)]
    #[pallet::weight(T::WeightInfo::renounce_admin())]
    pub fn renounce_admin(origin: OriginFor<T>) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      Self::with_entry_guard(|| {
        for role in Role::ADMIN_BUNDLE {
          T::Roles::revoke_role(role, &who);
        }
        if AdminAccount::<T>::get().as_ref() == Some(&who) {
          AdminAccount::<T>::kill();
        }
        Self::deposit_event(Event::AdminRenounced { who });
        Ok(())
      })
    }

    /// Send native value to the engine; the engine immediately tries to
    /// forward it to the cached admin. A failed forward (including an
    /// unset admin) is tolerated: the value stays on the engine account
    /// and the call still succeeds.
    #[pallet::call_index(17)]
    #[pallet::weight(T::WeightInfo::deposit_native())]
    pub fn deposit_native(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      if amount.is_zero() {
        return Ok(());
      }
      Self::with_entry_guard(|| {
        let engine = Self::account_id();
        T::Currency::transfer(&who, &engine, amount, Preservation::Expendable)?;
        match AdminAccount::<T>::get() {
          Some(admin) => {
            if T::Currency::transfer(&engine, &admin, amount, Preservation::Expendable).is_err() {
              Self::deposit_event(Event::NativeForwardFailed {
                admin: Some(admin),
                amount,
              });
            }
          }
          None => {
            Self::deposit_event(Event::NativeForwardFailed {
              admin: None,
              amount,
            });
          }
        }
        Ok(())
      })
    }

    /// Sweep native value retained after failed forwards out of the engine
    /// account.
    #[pallet::call_index(18)]
    #[pallet::weight(T::WeightInfo::withdraw_native())]
    pub fn withdraw_native(
      origin: OriginFor<T>,
      to: T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      Self::ensure_not_paused()?;
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Admin, &who)?;
      Self::with_entry_guard(|| {
        let engine = Self::account_id();
        ensure!(
          T::Currency::balance(&engine) >= amount,
          Error::<T>::InsufficientNativeBalance
        );
        T::Currency::transfer(&engine, &to, amount, Preservation::Expendable)?;
        Self::deposit_event(Event::NativeWithdrawn { to, amount });
        Ok(())
      })
    }

    /// Halt every state-mutating entry point. Views stay readable.
    #[pallet::call_index(19)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Pauser, &who)?;
      ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);
      Paused::<T>::put(true);
      Self::deposit_event(Event::EngineHalted { who });
      Ok(())
    }

    /// Resume normal operation.
    #[pallet::call_index(20)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::ensure_role(Role::Pauser, &who)?;
      ensure!(Paused::<T>::get(), Error::<T>::NotPaused);
      Paused::<T>::kill();
      Self::deposit_event(Event::EngineResumed { who });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// The engine's sovereign account, holder of both reserve pools.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// The engine account's balance of the managed token.
    pub fn engine_balance() -> Balance {
      T::Assets::balance(T::TokenAssetId::get(), &Self::account_id())
    }

    /// Earliest timestamp at which the next scheduled burn is due.
    pub fn next_burn_time() -> u64 {
      LastBurnTimestamp::<T>::get().saturating_add(BurnInterval::<T>::get())
    }

    /// Issuance headroom left under the supply ceiling.
    pub fn mintable_supply() -> Balance {
      T::MaxSupply::get().saturating_sub(T::Assets::total_issuance(T::TokenAssetId::get()))
    }

    /// Engine-held tokens not claimed by either reserve pool.
    pub fn recoverable_balance() -> Balance {
      Self::engine_balance()
        .saturating_sub(DepositPool::<T>::get())
        .saturating_sub(FeePool::<T>::get())
    }

    fn now() -> u64 {
      T::TimeProvider::now().as_secs()
    }

    fn ensure_not_paused() -> DispatchResult {
      ensure!(!Paused::<T>::get(), Error::<T>::EnginePaused);
      Ok(())
    }

    fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
      ensure!(T::Roles::has_role(role, who), Error::<T>::MissingRole);
      Ok(())
    }

    /// Run `f` with the entry guard held. A nested guarded call fails with
    /// `ReentrantCall`; the flag clears on success and rolls back with the
    /// rest of the call on error.
    fn with_entry_guard(f: impl FnOnce() -> DispatchResult) -> DispatchResult {
      ensure!(!EntryGuard::<T>::get(), Error::<T>::ReentrantCall);
      EntryGuard::<T>::put(true);
      let result = f();
      EntryGuard::<T>::kill();
      result
    }

    fn transfer_fee(value: Balance) -> Result<Balance, DispatchError> {
      let bps = FeeBasisPoints::<T>::get();
      if bps == 0 {
        return Ok(0);
      }
      let fee = value
        .checked_mul(bps as Balance)
        .ok_or(Error::<T>::ArithmeticOverflow)?
        / params::FEE_DENOMINATOR;
      Ok(fee)
    }

    /// Burn from the engine account's own balance and advance the lifetime
    /// counter. Callers settle the deposit pool themselves.
    fn burn_from_engine(amount: Balance) -> DispatchResult {
      T::Assets::burn_from(
        T::TokenAssetId::get(),
        &Self::account_id(),
        amount,
        Preservation::Expendable,
        Precision::Exact,
        Fortitude::Polite,
      )?;
      TotalBurned::<T>::mutate(|total| *total = total.saturating_add(amount));
      Ok(())
    }

    /// Fee-skimming settlement of an ordinary transfer. The exemption
    /// check (self-transfer, zero value) precedes fee computation.
    fn settle_transfer(from: &T::AccountId, to: &T::AccountId, value: Balance) -> DispatchResult {
      let token = T::TokenAssetId::get();
      if from == to || value.is_zero() {
        T::Assets::transfer(token, from, to, value, Preservation::Expendable)?;
        return Ok(());
      }
      let fee = Self::transfer_fee(value)?;
      if fee > 0 {
        T::Assets::transfer(
          token,
          from,
          &Self::account_id(),
          fee,
          Preservation::Expendable,
        )?;
        FeePool::<T>::try_mutate(|pool| -> DispatchResult {
          *pool = pool.checked_add(fee).ok_or(Error::<T>::ArithmeticOverflow)?;
          Ok(())
        })?;
      }
      T::Assets::transfer(token, from, to, value - fee, Preservation::Expendable)?;
      Ok(())
    }

    /// Delegated counterpart of [`Self::settle_transfer`]; both legs draw
    /// down the delegate's allowance, so allowance is consumed for the
    /// full value.
    fn settle_delegated_transfer(
      delegate: &T::AccountId,
      owner: &T::AccountId,
      to: &T::AccountId,
      value: Balance,
    ) -> DispatchResult {
      let token = T::TokenAssetId::get();
      if owner == to || value.is_zero() {
        T::Assets::transfer_from(token, owner, delegate, to, value)?;
        return Ok(());
      }
      let fee = Self::transfer_fee(value)?;
      if fee > 0 {
        T::Assets::transfer_from(token, owner, delegate, &Self::account_id(), fee)?;
        FeePool::<T>::try_mutate(|pool| -> DispatchResult {
          *pool = pool.checked_add(fee).ok_or(Error::<T>::ArithmeticOverflow)?;
          Ok(())
        })?;
      }
      T::Assets::transfer_from(token, owner, delegate, to, value - fee)?;
      Ok(())
    }
  }

  /// Genesis configuration — seeds the admin, its allocation and the burn
  /// clock, and gives the engine account a provider reference.
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Account receiving the full role bundle and the initial allocation
    pub admin: Option<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Engine account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
      if let Some(admin) = &self.admin {
        for role in Role::ADMIN_BUNDLE {
          T::Roles::grant_role(role, admin);
        }
        AdminAccount::<T>::put(admin.clone());
        let allocation = params::INITIAL_ADMIN_ALLOCATION.mul_floor(T::MaxSupply::get());
        T::Assets::mint_into(T::TokenAssetId::get(), admin, allocation)
          .expect("initial allocation fits under an empty ledger");
        LastBurnTimestamp::<T>::put(T::TimeProvider::now().as_secs());
      }
    }
  }
}
