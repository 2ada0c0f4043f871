//! Cost estimation - static per-model price tables
//!
//! Cost is derived, never stored: a pure lookup of (prompt tokens,
//! completion tokens, model) against the vendor's table. Unknown models fall
//! back to the table's designated default row.
//!
//! # Module Structure
//!
//! - `pricing`: Price tables per vendor

mod pricing;

#[cfg(test)]
mod tests;

pub use pricing::{estimate_cost, price_table, ModelPricing, PriceTable};
