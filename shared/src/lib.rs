//! Shared types and models for the Bakery Production Management Platform
//!
//! This crate contains the domain entities and the pure costing and
//! forecasting logic shared between the backend and other components.

pub mod costing;
pub mod models;
pub mod types;
pub mod validation;

pub use costing::*;
pub use models::*;
pub use types::*;
pub use validation::*;
