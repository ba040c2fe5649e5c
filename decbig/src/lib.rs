//! Arbitrary-precision unsigned integers with exact decimal I/O.
//!
//! [`BigUint`] stores nine decimal digits per limb, so parsing and rendering
//! are plain chunking with no base conversion. Supported arithmetic is
//! addition and subtraction; subtraction below zero is an error.

pub mod biguint;
pub mod error;
pub mod limbs;
#[cfg(feature = "serde")]
mod serialize;
pub mod stream;


pub use biguint::BigUint;
pub use error::{BigUintError, Result};
pub use stream::{read_biguint, write_biguint};
