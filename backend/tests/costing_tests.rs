//! Costing engine tests
//!
//! Covers:
//! - the weighted-average fold applied by purchases
//! - order-independence of the fold
//! - the non-reverting purchase delete
//! - the derived (never stored) cost of the intermediate dough

use std::str::FromStr;

use rust_decimal::Decimal;
use tokio_test::block_on;

use bpm_backend::error::AppError;
use bpm_backend::services::purchasing::{PurchaseService, RecordPurchaseInput};
use bpm_backend::services::{InventoryService, ProductionService};
use bpm_backend::store::Store;
use shared::models::{DoughRecipe, DoughRecipeItem, Ingredient, IngredientKind};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn purchase_input(ingredient_id: &str, quantity: &str, total_cost: &str) -> RecordPurchaseInput {
    RecordPurchaseInput {
        ingredient_id: ingredient_id.to_string(),
        quantity: dec(quantity),
        total_cost: dec(total_cost),
        unit: None,
        date: None,
        notes: None,
    }
}

/// Insert a zero-stock, zero-cost base ingredient to purchase against
fn add_fresh_ingredient(store: &Store, id: &str) {
    let service = InventoryService::new(store.clone());
    block_on(service.save_ingredient(Ingredient {
        id: id.to_string(),
        name: id.to_string(),
        kind: IngredientKind::Base,
        quantity: Decimal::ZERO,
        unit: "g".to_string(),
        cost: Decimal::ZERO,
        min_threshold: Decimal::ZERO,
    }))
    .unwrap();
}

fn ingredient_by_id(store: &Store, id: &str) -> Ingredient {
    let service = InventoryService::new(store.clone());
    block_on(service.list_ingredients())
        .unwrap()
        .into_iter()
        .find(|i| i.id == id)
        .expect("ingredient not found")
}

fn two_item_recipe() -> DoughRecipe {
    DoughRecipe {
        base_amount: dec("1000"),
        items: vec![
            DoughRecipeItem {
                ingredient_id: "harina".to_string(),
                quantity: dec("600"),
                unit: None,
            },
            DoughRecipeItem {
                ingredient_id: "agua".to_string(),
                quantity: dec("300"),
                unit: None,
            },
        ],
    }
}

// ============================================================================
// Weighted-Average Purchase Fold
// ============================================================================

#[test]
fn test_purchase_folds_weighted_average() {
    let store = Store::in_memory();
    let purchases = PurchaseService::new(store.clone());
    add_fresh_ingredient(&store, "test_flour");

    // From zero stock: 50 kg for 190000 -> 3.8 per gram
    block_on(purchases.record_purchase(purchase_input("test_flour", "50000", "190000"))).unwrap();
    let ing = ingredient_by_id(&store, "test_flour");
    assert_eq!(ing.quantity, dec("50000"));
    assert_eq!(ing.cost, dec("3.8"));

    // Second purchase at 5 per gram blends in:
    // (50000 * 3.8 + 50000) / 60000 = 4.0
    block_on(purchases.record_purchase(purchase_input("test_flour", "10000", "50000"))).unwrap();
    let ing = ingredient_by_id(&store, "test_flour");
    assert_eq!(ing.quantity, dec("60000"));
    assert_eq!(ing.cost, dec("4"));
}

#[test]
fn test_purchase_fold_is_order_independent() {
    let purchases = [
        ("100", "2000"),
        ("50", "1500"),
        ("250", "5000"),
    ];
    let orders: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];

    // Global average: 8500 / 400 = 21.25
    let expected = dec("21.25");
    for order in orders {
        let store = Store::in_memory();
        let service = PurchaseService::new(store.clone());
        add_fresh_ingredient(&store, "test_flour");
        for idx in order {
            let (qty, total) = purchases[idx];
            block_on(service.record_purchase(purchase_input("test_flour", qty, total))).unwrap();
        }
        let ing = ingredient_by_id(&store, "test_flour");
        assert_eq!(ing.cost.round_dp(10), expected, "order {order:?}");
        assert_eq!(ing.quantity, dec("400"));
    }
}

#[test]
fn test_purchase_rejects_invalid_input() {
    let store = Store::in_memory();
    let service = PurchaseService::new(store.clone());

    let err = block_on(service.record_purchase(purchase_input("harina", "0", "1000")));
    assert!(matches!(err, Err(AppError::Validation { .. })));

    let err = block_on(service.record_purchase(purchase_input("harina", "100", "-1")));
    assert!(matches!(err, Err(AppError::Validation { .. })));

    let err = block_on(service.record_purchase(purchase_input("missing", "100", "1000")));
    assert!(matches!(err, Err(AppError::NotFound(_))));

    // Nothing was recorded by the rejected calls.
    assert!(block_on(service.list_purchases()).is_empty());
}

#[test]
fn test_purchase_appends_ledger_entry_and_movement() {
    let store = Store::in_memory();
    let purchases = PurchaseService::new(store.clone());
    let inventory = InventoryService::new(store.clone());

    let recorded =
        block_on(purchases.record_purchase(purchase_input("harina", "1000", "4000"))).unwrap();
    assert_eq!(recorded.ingredient_name, "Harina de Trigo");
    assert_eq!(recorded.unit, "g");

    let listed = block_on(purchases.list_purchases());
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, recorded.id);

    let movements = block_on(inventory.list_movements());
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].subject_id, "harina");
    assert_eq!(movements[0].quantity, dec("1000"));
}

// ============================================================================
// Purchase Non-Reversal
// ============================================================================

#[test]
fn test_delete_purchase_keeps_stock_and_cost() {
    let store = Store::in_memory();
    let service = PurchaseService::new(store.clone());
    add_fresh_ingredient(&store, "test_flour");

    let recorded =
        block_on(service.record_purchase(purchase_input("test_flour", "1000", "5000"))).unwrap();
    let before = ingredient_by_id(&store, "test_flour");

    block_on(service.delete_purchase(&recorded.id)).unwrap();

    assert!(block_on(service.list_purchases()).is_empty());
    let after = ingredient_by_id(&store, "test_flour");
    assert_eq!(after.quantity, before.quantity);
    assert_eq!(after.cost, before.cost);
}

#[test]
fn test_delete_missing_purchase_is_not_found() {
    let store = Store::in_memory();
    let service = PurchaseService::new(store);
    let err = block_on(service.delete_purchase("nope"));
    assert!(matches!(err, Err(AppError::NotFound(_))));
}

// ============================================================================
// Derived Dough Cost
// ============================================================================

#[test]
fn test_dough_cost_is_stable_across_reads() {
    let store = Store::in_memory();
    let production = ProductionService::new(store.clone());
    block_on(production.save_dough_recipe(two_item_recipe())).unwrap();

    // Seeded costs: harina 3.8, agua 0.1
    // (600 * 3.8 + 300 * 0.1) / 1000 = 2.31
    let first = ingredient_by_id(&store, "masa_base").cost;
    assert_eq!(first, dec("2.31"));
    for _ in 0..5 {
        assert_eq!(ingredient_by_id(&store, "masa_base").cost, first);
    }
}

#[test]
fn test_dough_cost_reacts_to_raw_cost_change() {
    let store = Store::in_memory();
    let production = ProductionService::new(store.clone());
    let inventory = InventoryService::new(store.clone());
    block_on(production.save_dough_recipe(two_item_recipe())).unwrap();

    let mut harina = ingredient_by_id(&store, "harina");
    harina.cost = dec("4.8");
    block_on(inventory.save_ingredient(harina)).unwrap();

    // (600 * 4.8 + 300 * 0.1) / 1000 = 2.91
    assert_eq!(ingredient_by_id(&store, "masa_base").cost, dec("2.91"));
}

#[test]
fn test_dough_cost_independent_of_dough_stock() {
    let store = Store::in_memory();
    let production = ProductionService::new(store.clone());
    block_on(production.save_dough_recipe(two_item_recipe())).unwrap();

    let before = ingredient_by_id(&store, "masa_base").cost;
    block_on(production.produce_dough(dec("5000"))).unwrap();
    let after = ingredient_by_id(&store, "masa_base");

    assert_eq!(after.quantity, dec("5000"));
    assert_eq!(after.cost, before);
}

#[test]
fn test_saved_dough_cost_is_always_recomputed() {
    let store = Store::in_memory();
    let production = ProductionService::new(store.clone());
    let inventory = InventoryService::new(store.clone());
    block_on(production.save_dough_recipe(two_item_recipe())).unwrap();

    // Whatever cost the caller writes on the intermediate is discarded.
    let mut dough = ingredient_by_id(&store, "masa_base");
    dough.cost = dec("999");
    block_on(inventory.save_ingredient(dough)).unwrap();

    assert_eq!(ingredient_by_id(&store, "masa_base").cost, dec("2.31"));
}

#[test]
fn test_saved_ingredient_round_trips_all_other_fields() {
    let store = Store::in_memory();
    let inventory = InventoryService::new(store.clone());

    let custom = Ingredient {
        id: "levadura".to_string(),
        name: "Levadura Fresca".to_string(),
        kind: IngredientKind::Base,
        quantity: dec("750"),
        unit: "g".to_string(),
        cost: dec("9.5"),
        min_threshold: dec("150"),
    };
    block_on(inventory.save_ingredient(custom.clone())).unwrap();

    let stored = ingredient_by_id(&store, "levadura");
    assert_eq!(stored, custom);
}
