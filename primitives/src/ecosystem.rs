//! Ecosystem constants for the supply engine workspace.
//!
//! This module centralizes system-level constants: the pallet identifier used
//! to derive the engine's sovereign account, and the economic parameters
//! governing issuance, fees and the burn schedule.
//!
//! These constants are the single source of truth and are re-used by runtime
//! configurations via the primitives crate.

/// Balance type alias for consistency across the workspace
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used with `PalletId::into_account_truncating()` to deterministically
/// generate the engine's sovereign account, which holds the deposit and fee
/// reserves on the ledger.
pub mod pallet_ids {
  /// Supply engine pallet ID (issuance policy, reserves, burn schedule)
  pub const SUPPLY_ENGINE_PALLET_ID: &[u8; 8] = b"py/speng";
}

/// Economic parameters shared by the engine and its runtime configurations.
pub mod params {
  use super::Balance;
  use sp_arithmetic::Permill;

  /// Number of fractional digits of the managed token (USDC-style precision).
  pub const DECIMALS: u8 = 6;

  /// One whole token in base units (10^6).
  pub const UNIT: Balance = 1_000_000;

  /// Hard ceiling on total issuance: 200,000,000 whole tokens.
  ///
  /// No mint or airdrop path may push total issuance past this value.
  pub const MAX_SUPPLY: Balance = 200_000_000 * UNIT;

  /// Share of `MAX_SUPPLY` minted to the admin account at genesis (20%).
  pub const INITIAL_ADMIN_ALLOCATION: Permill = Permill::from_percent(20);

  /// Denominator for basis-point fee arithmetic.
  pub const FEE_DENOMINATOR: Balance = 10_000;

  /// Upper bound on the transfer fee rate: 500 bps = 5%.
  pub const MAX_FEE_BASIS_POINTS: u32 = 500;

  /// Initial transfer fee rate: 100 bps = 1%.
  pub const DEFAULT_FEE_BASIS_POINTS: u32 = 100;

  /// Seconds per day, the granularity of burn-schedule bounds.
  pub const SECONDS_PER_DAY: u64 = 86_400;

  /// Lower bound on the scheduled-burn interval (1 day).
  pub const MIN_BURN_INTERVAL_SECS: u64 = SECONDS_PER_DAY;

  /// Default scheduled-burn interval (365 days).
  pub const DEFAULT_BURN_INTERVAL_SECS: u64 = 365 * SECONDS_PER_DAY;

  /// Default burn divisor: each due burn may destroy issuance / 100,000,000.
  pub const DEFAULT_BURN_DIVISOR: Balance = 100_000_000;

  /// Safety range for the burn divisor.
  ///
  /// The divisor scales the per-burn quota down from total issuance; values
  /// outside this range either burn dust forever or approach full-issuance
  /// burns and are rejected by the configuration setter.
  pub const MIN_BURN_DIVISOR: Balance = 1_000;
  pub const MAX_BURN_DIVISOR: Balance = 1_000_000_000_000;

  /// Maximum number of recipients in a single airdrop batch.
  pub const MAX_AIRDROP_RECIPIENTS: u32 = 50;
}
