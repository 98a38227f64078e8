//! HTTP handlers for supplier-invoice scanning and merging

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::AppResult;
use crate::external::InvoiceOcrClient;
use crate::services::inventory::{InventoryService, InvoiceMergeSummary};
use crate::AppState;
use shared::types::InvoiceItem;

/// Request to analyze an invoice photo
#[derive(Debug, Deserialize)]
pub struct ScanInvoiceRequest {
    pub image_base64: String,
}

/// Analyze an invoice image and merge the extracted lines into stock
pub async fn scan_invoice(
    State(state): State<AppState>,
    Json(request): Json<ScanInvoiceRequest>,
) -> AppResult<Json<InvoiceMergeSummary>> {
    let client = InvoiceOcrClient::new(
        state.config.ocr.api_endpoint.clone(),
        state.config.ocr.api_key.clone(),
    )?;
    let items = client.parse_invoice(request.image_base64).await?;

    let service = InventoryService::new(state.store);
    let summary = service.merge_invoice_items(items).await?;
    Ok(Json(summary))
}

/// Merge already-extracted invoice lines into stock
pub async fn merge_invoice_items(
    State(state): State<AppState>,
    Json(items): Json<Vec<InvoiceItem>>,
) -> AppResult<Json<InvoiceMergeSummary>> {
    let service = InventoryService::new(state.store);
    let summary = service.merge_invoice_items(items).await?;
    Ok(Json(summary))
}
