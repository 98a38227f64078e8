//! HTTP handlers for the Bakery Production Management Platform

pub mod alerts;
pub mod health;
pub mod inventory;
pub mod invoices;
pub mod production;
pub mod products;
pub mod purchases;
pub mod reporting;
pub mod sales;

pub use alerts::*;
pub use health::*;
pub use inventory::*;
pub use invoices::*;
pub use production::*;
pub use products::*;
pub use purchases::*;
pub use reporting::*;
pub use sales::*;
