//! External API integrations

pub mod invoice_ocr;

pub use invoice_ocr::InvoiceOcrClient;
