//! # cantor-core
//!
//! Structural comparison infrastructure for the Cantor CAS.
//!
//! This crate provides:
//! - The [`Canonical`] capability trait: structural equality, a total
//!   three-way order and a structural hash, shared by every symbolic value
//! - Generic container algorithms (`map_eq`, `map_compare`,
//!   `map_hash_combine`) that derive a container's identity from the
//!   identities of its entries
//! - The shared-ownership [`Symbol`] handle and its interning [`SymbolPool`]
//! - The [`Coeff`] and [`ExprValue`] capability traits consumed by the
//!   polynomial layer, together with a compact reference expression tree
//!   ([`Expr`]) implementing them

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical;
pub mod expr;
pub mod render;
pub mod symbol;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use canonical::{
    hash_combine, hash_of, map_compare, map_eq, map_hash_combine, seq_compare, seq_eq,
    unordered_map_eq, Canonical,
};
pub use expr::Expr;
pub use render::{render_map, render_seq};
pub use symbol::{symbol, Symbol, SymbolPool};
pub use traits::{Coeff, ExprValue};
