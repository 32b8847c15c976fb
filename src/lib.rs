//! Price Basket
//!
//! Prices a shopping basket: computes the subtotal, applies the configured
//! offers and produces a total with an itemised list of discounts.

pub mod basket;
pub mod catalog;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod money;
pub mod observability;
pub mod offers;
pub mod prelude;
pub mod products;
pub mod receipt;
pub mod service;
pub mod tokens;
