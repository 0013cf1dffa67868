//! # cantor-num
//!
//! Arbitrary precision integer and rational arithmetic for Cantor CAS.
//!
//! The concrete big-number library sits behind the [`Backend`] trait and is
//! selected at build time via cargo features (`dashu-backend` is the
//! default; `num-backend` swaps in the `num` crate family). Everything
//! above that seam — [`BigInteger`], [`BigRational`], the number-theoretic
//! algorithms — behaves identically under every backend.
//!
//! ## Performance Notes
//!
//! - Values are heap-allocated with word-level arithmetic underneath
//! - All operations are exact; nothing rounds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod backend;
pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use algorithms::{div_rational, i_nth_root, iabs, isqrt, perfect_power, perfect_square, pow_signed};
pub use backend::Backend;
pub use error::NumError;
pub use integer::{big_one, big_zero, BigInteger};
pub use rational::BigRational;
