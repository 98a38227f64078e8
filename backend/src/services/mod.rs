//! Business logic services for the Bakery Production Management Platform

pub mod alerts;
pub mod inventory;
pub mod production;
pub mod products;
pub mod purchasing;
pub mod reporting;
pub mod sales;

pub use alerts::AlertService;
pub use inventory::InventoryService;
pub use production::ProductionService;
pub use products::ProductService;
pub use purchasing::PurchaseService;
pub use reporting::ReportingService;
pub use sales::SalesService;
