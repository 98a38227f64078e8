//! Route definitions for the Bakery Production Management Platform

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Ingredient catalog and movement log
        .nest("/ingredients", ingredient_routes())
        .route("/movements", get(handlers::list_movements))
        // Finished-product catalog
        .nest("/products", product_routes())
        // Purchase ledger
        .nest("/purchases", purchase_routes())
        // Sales
        .nest("/sales", sale_routes())
        // Dough production and manufacturing
        .nest("/production", production_routes())
        .route("/manufacture", post(handlers::manufacture_product))
        // Derived projections
        .route("/alerts", get(handlers::list_alerts))
        .route("/reports/dashboard", get(handlers::get_dashboard_metrics))
        // Supplier invoices
        .nest("/invoices", invoice_routes())
}

/// Ingredient management routes
fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_ingredients).post(handlers::save_ingredient),
        )
        .route("/:ingredient_id", delete(handlers::delete_ingredient))
        .route(
            "/:ingredient_id/stock",
            post(handlers::update_ingredient_stock),
        )
}

/// Product management routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::save_product),
        )
        .route("/:product_id/stock", post(handlers::update_product_stock))
}

/// Purchase ledger routes
fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_purchases).post(handlers::record_purchase),
        )
        .route("/:purchase_id", delete(handlers::delete_purchase))
}

/// Sale routes
fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::record_sale))
        .route("/:sale_id", delete(handlers::delete_sale))
}

/// Dough production routes
fn production_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipe",
            get(handlers::get_dough_recipe).put(handlers::save_dough_recipe),
        )
        .route("/dough", post(handlers::produce_dough))
        .route(
            "/logs",
            get(handlers::list_production_logs).delete(handlers::clear_production_logs),
        )
}

/// Supplier invoice routes
fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/scan", post(handlers::scan_invoice))
        .route("/merge", post(handlers::merge_invoice_items))
}
