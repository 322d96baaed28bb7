use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Named capabilities gating the supply engine's privileged entry points.
///
/// This enum is the single source of truth for capability names across the
/// engine and whichever role store the runtime wires in. Membership itself
/// (role -> set of accounts) lives in the store, not here.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum Role {
  /// Root capability able to administer the role store itself
  DefaultAdmin,
  /// Configuration, recovery, fee withdrawal and admin handover
  Admin,
  /// Direct issuance of new tokens
  Minter,
  /// Scheduled and full burns of the deposit pool
  Burner,
  /// Batched issuance grants
  Airdropper,
  /// Halting and resuming state-mutating entry points
  Pauser,
}

impl Role {
  /// The full bundle migrated by an admin handover and granted at genesis.
  ///
  /// The outgoing admin must retain nothing and the incoming admin must be
  /// able to do everything the outgoing one could, so the bundle covers
  /// every capability.
  pub const ADMIN_BUNDLE: [Role; 6] = [
    Role::DefaultAdmin,
    Role::Admin,
    Role::Minter,
    Role::Burner,
    Role::Airdropper,
    Role::Pauser,
  ];
}
