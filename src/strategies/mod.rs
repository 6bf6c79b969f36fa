//! Strategy Catalog
//!
//! Read-only table of heat-mitigation strategies. Base effectiveness is
//! indexed by climate zone; the scorer falls back to 0.5 for any climate an
//! entry does not list.

pub mod catalog;

pub use catalog::{CostTier, StrategyDefinition, StrategyKey, TimeTier, CATALOG};
