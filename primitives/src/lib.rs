#![cfg_attr(not(feature = "std"), no_std)]

pub mod assets;
pub mod automation;
pub mod ecosystem;

pub use assets::*;
pub use automation::*;
pub use ecosystem::*;
