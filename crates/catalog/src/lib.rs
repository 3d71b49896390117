//! Product catalog domain module.
//!
//! This crate contains the product model (base products plus the add-on
//! decoration chain) and the factory resolving catalog codes, implemented
//! purely as deterministic domain logic (no I/O, no storage).

pub mod factory;
pub mod product;

pub use factory::Catalog;
pub use product::{Addon, Product, ProductCode};
