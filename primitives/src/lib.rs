#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecosystem;
pub mod roles;

pub use ecosystem::*;
pub use roles::*;
