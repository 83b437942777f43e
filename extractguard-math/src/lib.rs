// extractguard-math/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ratio;
pub mod rounding;
pub mod statistics;

pub use ratio::{percent_of, ratio};
pub use rounding::{round2, round_to};
pub use statistics::mean;

/// Common type definitions
pub type Score = f64;
