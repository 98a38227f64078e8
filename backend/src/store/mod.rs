//! JSON-file entity store
//!
//! Five keyed collections (ingredients, products, purchases, sales,
//! production logs) plus the movement log and the singleton dough recipe,
//! held behind one `RwLock` and persisted as one JSON file per collection.
//! The in-memory state is authoritative; files are a best-effort flush after
//! every committed mutation. Missing files seed on first run, corrupt files
//! load as empty collections; neither is ever fatal.
//!
//! Compound operations (purchase, production, manufacture, sale) run inside
//! a single write-lock critical section, which preserves the run-to-completion
//! atomicity of the engine even though the HTTP server is concurrent.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared::models::{
    DoughRecipe, Ingredient, InventoryMovement, MovementKind, Product, ProductionLog, Purchase,
    Sale, UNKNOWN_INGREDIENT_NAME,
};

use crate::error::AppResult;

mod seed;

const INGREDIENTS_FILE: &str = "ingredients.json";
const PRODUCTS_FILE: &str = "products.json";
const PURCHASES_FILE: &str = "purchases.json";
const SALES_FILE: &str = "sales.json";
const MOVEMENTS_FILE: &str = "movements.json";
const PRODUCTION_LOGS_FILE: &str = "production_logs.json";
const DOUGH_RECIPE_FILE: &str = "dough_recipe.json";

/// Handle to the entity store, cheap to clone
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreState>>,
    data_dir: Option<PathBuf>,
}

/// All persisted collections
#[derive(Debug)]
pub struct StoreState {
    pub ingredients: Vec<Ingredient>,
    pub products: Vec<Product>,
    pub purchases: Vec<Purchase>,
    pub sales: Vec<Sale>,
    pub movements: Vec<InventoryMovement>,
    pub production_logs: Vec<ProductionLog>,
    pub dough_recipe: DoughRecipe,
}

/// One raw-ingredient deduction made while converting stock into dough
#[derive(Debug, Clone)]
pub struct DoughConsumption {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: Decimal,
    /// Value of the consumed portion at the ingredient's current cost
    pub cost: Decimal,
    pub unit: String,
}

impl Store {
    /// Open the store rooted at `data_dir`, seeding on first run
    pub fn open(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        let state = StoreState::load(&data_dir);
        let store = Self {
            inner: Arc::new(RwLock::new(state)),
            data_dir: Some(data_dir),
        };
        // Flush so that a seeded first run is visible on disk immediately.
        if let Ok(state) = store.inner.try_read() {
            store.persist(&state);
        }
        Ok(store)
    }

    /// Fresh seeded store with no disk backing, for tests
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState::seeded())),
            data_dir: None,
        }
    }

    /// Run a read-only projection over the state
    pub async fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let state = self.inner.read().await;
        f(&state)
    }

    /// Run a mutation as a single critical section
    ///
    /// The closure sees the state under an exclusive lock for its whole
    /// read-modify-write sequence. On success the affected collections are
    /// flushed to disk; on error nothing is flushed (mutating before all
    /// validation has passed is a caller bug).
    pub async fn write<T>(
        &self,
        f: impl FnOnce(&mut StoreState) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut state = self.inner.write().await;
        let out = f(&mut state)?;
        self.persist(&state);
        Ok(out)
    }

    fn persist(&self, state: &StoreState) {
        let Some(dir) = &self.data_dir else {
            return;
        };
        if let Err(err) = std::fs::create_dir_all(dir) {
            tracing::warn!("Failed to create data dir {}: {}", dir.display(), err);
            return;
        }
        persist_collection(dir, INGREDIENTS_FILE, &state.ingredients);
        persist_collection(dir, PRODUCTS_FILE, &state.products);
        persist_collection(dir, PURCHASES_FILE, &state.purchases);
        persist_collection(dir, SALES_FILE, &state.sales);
        persist_collection(dir, MOVEMENTS_FILE, &state.movements);
        persist_collection(dir, PRODUCTION_LOGS_FILE, &state.production_logs);
        persist_collection(dir, DOUGH_RECIPE_FILE, &state.dough_recipe);
    }
}

fn persist_collection<T: Serialize>(dir: &Path, file: &str, value: &T) {
    let path = dir.join(file);
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if let Err(err) = std::fs::write(&path, json) {
                tracing::warn!("Failed to write {}: {}", path.display(), err);
            }
        }
        Err(err) => tracing::warn!("Failed to serialize {}: {}", file, err),
    }
}

/// Load one collection file: `None` when the file does not exist (first
/// run), an empty collection when it exists but cannot be parsed
fn load_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Option<Vec<T>> {
    let path = dir.join(file);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(_) => return None,
    };
    match serde_json::from_str(&raw) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!(
                "Corrupt collection {}, loading as empty: {}",
                path.display(),
                err
            );
            Some(Vec::new())
        }
    }
}

impl StoreState {
    /// First-run state: seeded catalogs, empty ledgers
    pub fn seeded() -> Self {
        Self {
            ingredients: seed::seed_ingredients(),
            products: seed::seed_products(),
            purchases: Vec::new(),
            sales: Vec::new(),
            movements: Vec::new(),
            production_logs: Vec::new(),
            dough_recipe: seed::default_dough_recipe(),
        }
    }

    fn load(dir: &Path) -> Self {
        let ingredients =
            load_collection(dir, INGREDIENTS_FILE).unwrap_or_else(seed::seed_ingredients);
        let products = load_collection(dir, PRODUCTS_FILE).unwrap_or_else(seed::seed_products);
        let dough_recipe = std::fs::read_to_string(dir.join(DOUGH_RECIPE_FILE))
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(seed::default_dough_recipe);

        Self {
            ingredients,
            products,
            purchases: load_collection(dir, PURCHASES_FILE).unwrap_or_default(),
            sales: load_collection(dir, SALES_FILE).unwrap_or_default(),
            movements: load_collection(dir, MOVEMENTS_FILE).unwrap_or_default(),
            production_logs: load_collection(dir, PRODUCTION_LOGS_FILE).unwrap_or_default(),
            dough_recipe,
        }
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn ingredient_mut(&mut self, id: &str) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|i| i.id == id)
    }

    /// Display name for an ingredient id, degrading to a placeholder when
    /// the ingredient has been deleted
    pub fn ingredient_name(&self, id: &str) -> String {
        self.ingredient(id)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| UNKNOWN_INGREDIENT_NAME.to_string())
    }

    /// The intermediate dough ingredient, identified structurally by kind
    pub fn intermediate(&self) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.is_intermediate())
    }

    pub fn intermediate_mut(&mut self) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|i| i.is_intermediate())
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Append an audit record to the movement log
    pub fn log_movement(
        &mut self,
        kind: MovementKind,
        subject_id: &str,
        quantity: Decimal,
        description: String,
    ) {
        self.movements.push(InventoryMovement {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            kind,
            subject_id: subject_id.to_string(),
            quantity,
            description,
        });
    }

    /// Recompute the intermediate's cached cost from the current recipe and
    /// current raw-ingredient costs
    pub fn refresh_intermediate_cost(&mut self) {
        let cost = self
            .dough_recipe
            .cost_per_gram(|id| self.ingredient(id).map(|i| i.cost));
        if let Some(dough) = self.intermediate_mut() {
            dough.cost = cost;
        }
    }

    /// Deduct the raw ingredients for `amount` grams of dough and report
    /// what was consumed, valued at current costs
    ///
    /// No shortfall check: quantities may go negative. Recipe items whose
    /// ingredient has been deleted are skipped.
    pub fn consume_dough_inputs(&mut self, amount: Decimal) -> Vec<DoughConsumption> {
        let requirements = self.dough_recipe.requirements_for(amount);
        let mut consumed = Vec::with_capacity(requirements.len());
        for (ingredient_id, required) in requirements {
            let Some(ing) = self.ingredient_mut(&ingredient_id) else {
                continue;
            };
            let cost = ing.cost * required;
            ing.quantity -= required;
            consumed.push(DoughConsumption {
                ingredient_id,
                name: ing.name.clone(),
                quantity: required,
                cost,
                unit: ing.unit.clone(),
            });
        }
        consumed
    }
}
