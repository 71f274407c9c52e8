//! Derived compliance figures.
//!
//! The calculator has a single computation: the annual Recovered Organic
//! Waste Product procurement requirement derived from population.

pub mod rowp;

pub use rowp::{RowpRequirement, phase_in_factor_2024, procurement_rate};
