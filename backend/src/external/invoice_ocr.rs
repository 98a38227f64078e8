//! Invoice OCR Client
//!
//! Client for the hosted invoice-analysis service that turns a photographed
//! supplier invoice into structured line items. The analysis itself is
//! outside the engine: its result is merged into ingredient stock only
//! after a successful response.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::types::InvoiceItem;
use shared::validation::normalize_invoice_unit;

use crate::error::{AppError, AppResult};

/// Client for the invoice OCR microservice
#[derive(Clone)]
pub struct InvoiceOcrClient {
    api_endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to analyze an invoice image
#[derive(Debug, Serialize)]
pub struct ParseInvoiceRequest {
    pub image_base64: String,
}

/// One extracted line item as returned by the OCR API
#[derive(Debug, Deserialize)]
pub struct InvoiceLineResponse {
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
    /// Estimated cost per unit of quantity
    pub cost: Decimal,
}

impl From<InvoiceLineResponse> for InvoiceItem {
    fn from(line: InvoiceLineResponse) -> Self {
        // The service is asked for g/ml/units but billing units slip through.
        let (unit, quantity) = normalize_invoice_unit(&line.unit, line.quantity);
        InvoiceItem {
            name: line.name,
            quantity,
            unit,
            cost: line.cost,
        }
    }
}

impl InvoiceOcrClient {
    /// Create a new invoice OCR client
    pub fn new(api_endpoint: String, api_key: String) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_endpoint,
            api_key,
            http_client,
        })
    }

    /// Send an invoice image for analysis
    pub async fn parse_invoice(&self, image_base64: String) -> AppResult<Vec<InvoiceItem>> {
        if self.api_endpoint.is_empty() {
            return Err(AppError::Configuration(
                "Invoice OCR endpoint is not configured".to_string(),
            ));
        }

        let response = self
            .http_client
            .post(&self.api_endpoint)
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&ParseInvoiceRequest { image_base64 })
            .send()
            .await
            .map_err(|e| AppError::OcrError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::OcrError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let lines: Vec<InvoiceLineResponse> = response
            .json()
            .await
            .map_err(|e| AppError::OcrError(format!("Failed to parse response: {}", e)))?;

        Ok(lines.into_iter().map(InvoiceItem::from).collect())
    }
}
