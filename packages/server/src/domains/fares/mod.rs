//! Fare estimation - converts a resolved route into per-class prices.

pub mod estimator;

pub use estimator::{estimate, FareError, FareQuote};
