//! First-run seed data
//!
//! Catalog for the Umami Fénix operation: base ingredients for dough,
//! the intermediate dough good, fillings and packaging, the master dough
//! formula, and the finished-product catalog. Prices are average Colombian
//! market estimates (COP), 2024/2025.

use rust_decimal::Decimal;

use shared::models::{
    DoughRecipe, DoughRecipeItem, Ingredient, IngredientKind, Product, RecipeItem,
};

fn ingredient(
    id: &str,
    name: &str,
    kind: IngredientKind,
    quantity: i64,
    unit: &str,
    cost: Decimal,
    min_threshold: i64,
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        quantity: Decimal::from(quantity),
        unit: unit.to_string(),
        cost,
        min_threshold: Decimal::from(min_threshold),
    }
}

pub(crate) fn seed_ingredients() -> Vec<Ingredient> {
    use IngredientKind::{Base, Filling, Intermediate, Packaging};

    vec![
        // The intermediate good: ready-to-use dough. Cost is derived from
        // the recipe on every read, never stored authoritatively.
        ingredient(
            "masa_base",
            "Masa (Lista para usar)",
            Intermediate,
            0,
            "g",
            Decimal::ZERO,
            2000,
        ),
        // Base ingredients for making dough
        ingredient("harina", "Harina de Trigo", Base, 50_000, "g", Decimal::new(38, 1), 5000), // $190.000 bulto 50kg aprox
        ingredient("margarina", "Margarina Hojaldre", Base, 10_000, "g", Decimal::from(22), 2000), // $11.000 libra aprox
        ingredient("aceite", "Aceite Vegetal", Base, 20_000, "ml", Decimal::from(12), 3000), // $12.000 litro
        ingredient("sal", "Sal", Base, 2000, "g", Decimal::new(25, 1), 500),
        ingredient("azucar", "Azúcar", Base, 3000, "g", Decimal::from(5), 500),
        ingredient("color", "Color/Achiote", Base, 500, "g", Decimal::from(45), 100),
        ingredient("agua", "Agua Filtrada", Base, 100_000, "ml", Decimal::new(1, 1), 1000),
        // Fillings and packaging
        ingredient("queso_costeno", "Queso Costeño", Filling, 10_000, "g", Decimal::from(28), 2000), // $28.000 kilo
        ingredient("queso_moz", "Queso Mozzarella", Filling, 5000, "g", Decimal::from(32), 1000),
        ingredient("pollo", "Pollo Desmechado", Filling, 5000, "g", Decimal::from(25), 1000), // Pechuga + cocción
        ingredient("carne", "Carne Molida/Desmechada", Filling, 5000, "g", Decimal::from(30), 1000),
        ingredient("jamon", "Jamón", Filling, 2000, "g", Decimal::from(35), 500),
        ingredient("salchicha", "Salchicha", Filling, 100, "units", Decimal::from(600), 20),
        ingredient("chorizo", "Chorizo", Filling, 2000, "g", Decimal::from(28), 500),
        ingredient("butifarra", "Butifarra", Filling, 2000, "g", Decimal::from(25), 500),
        ingredient("bocadillo", "Bocadillo (Guayaba)", Filling, 3000, "g", Decimal::from(12), 1000),
        ingredient("pina", "Piña Calada", Filling, 3000, "g", Decimal::from(15), 1000),
        ingredient("maiz", "Maíz Dulce", Filling, 2000, "g", Decimal::from(18), 500),
        ingredient("espinaca", "Espinaca", Filling, 1000, "g", Decimal::from(10), 200),
        ingredient("bolsa", "Bolsas Empaque", Packaging, 500, "units", Decimal::from(80), 50),
    ]
}

/// The master dough formula, for 1000 g of dough
pub(crate) fn default_dough_recipe() -> DoughRecipe {
    fn item(ingredient_id: &str, quantity: i64) -> DoughRecipeItem {
        DoughRecipeItem {
            ingredient_id: ingredient_id.to_string(),
            quantity: Decimal::from(quantity),
            unit: None,
        }
    }

    DoughRecipe {
        base_amount: Decimal::from(1000),
        items: vec![
            item("harina", 600),
            item("agua", 300),
            item("aceite", 50),
            item("margarina", 20),
            item("sal", 15),
            item("azucar", 10),
            item("color", 5),
        ],
    }
}

fn item(ingredient_id: &str, quantity: i64) -> RecipeItem {
    RecipeItem {
        ingredient_id: ingredient_id.to_string(),
        quantity: Decimal::from(quantity),
    }
}

fn product(id: &str, name: &str, category: &str, price: i64, recipe: Vec<RecipeItem>) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::from(price),
        stock: 0,
        recipe,
    }
}

pub(crate) fn seed_products() -> Vec<Product> {
    const DEDITOS: &str = "Deditos (Bandeja x6)";
    const EMPANADAS: &str = "Empanadas (Bandeja x18)";
    const OTROS: &str = "Otros";
    const PERSONALES: &str = "Personales";

    vec![
        product("d_pollo", "Dedito Pollo x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("pollo", 180), item("bolsa", 1),
        ]),
        product("d_pollo_queso", "Dedito Pollo/Queso x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("pollo", 100), item("queso_costeno", 80), item("bolsa", 1),
        ]),
        product("d_carne", "Dedito Carne x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("carne", 180), item("bolsa", 1),
        ]),
        product("d_hawaiana", "Dedito Hawaiana x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("jamon", 60), item("queso_moz", 60), item("pina", 60), item("bolsa", 1),
        ]),
        product("d_mpq", "Dedito Maíz/Pollo/Queso x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("pollo", 60), item("maiz", 60), item("queso_costeno", 60), item("bolsa", 1),
        ]),
        product("d_jamon_queso", "Dedito Jamón/Queso x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("jamon", 90), item("queso_costeno", 90), item("bolsa", 1),
        ]),
        product("d_espinaca", "Dedito Espinaca x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("espinaca", 80), item("queso_costeno", 100), item("bolsa", 1),
        ]),
        product("d_ranchera", "Dedito Ranchera x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("salchicha", 3), item("maiz", 50), item("queso_costeno", 50), item("bolsa", 1),
        ]),
        product("d_napolitana", "Dedito Napolitana x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("jamon", 60), item("queso_moz", 80), item("bolsa", 1),
        ]),
        product("d_salvaje", "Dedito Salvaje x6", DEDITOS, 14000, vec![
            item("masa_base", 240), item("chorizo", 50), item("butifarra", 50), item("maiz", 30), item("queso_costeno", 30), item("bolsa", 1),
        ]),
        product("e_pollo", "Empanada Pollo x18", EMPANADAS, 14000, vec![
            item("masa_base", 360), item("pollo", 200), item("bolsa", 1),
        ]),
        product("e_pollo_queso", "Empanada Pollo/Queso x18", EMPANADAS, 14000, vec![
            item("masa_base", 360), item("pollo", 100), item("queso_costeno", 100), item("bolsa", 1),
        ]),
        product("e_carne", "Empanada Carne x18", EMPANADAS, 14000, vec![
            item("masa_base", 360), item("carne", 200), item("bolsa", 1),
        ]),
        product("e_ranchera", "Empanada Ranchera x18", EMPANADAS, 14000, vec![
            item("masa_base", 360), item("salchicha", 4), item("maiz", 50), item("queso_costeno", 50), item("bolsa", 1),
        ]),
        product("e_jamon_queso", "Empanada Jamón/Queso x18", EMPANADAS, 14000, vec![
            item("masa_base", 360), item("jamon", 100), item("queso_costeno", 100), item("bolsa", 1),
        ]),
        product("e_hawaiana", "Empanada Hawaiana x18", EMPANADAS, 14000, vec![
            item("masa_base", 360), item("jamon", 60), item("pina", 60), item("queso_moz", 60), item("bolsa", 1),
        ]),
        product("e_bocadillo", "Empanada Bocadillo/Queso x18", EMPANADAS, 14000, vec![
            item("masa_base", 360), item("bocadillo", 100), item("queso_costeno", 100), item("bolsa", 1),
        ]),
        product("medallones", "Medallones Salchicha x25", OTROS, 10000, vec![
            item("masa_base", 200), item("salchicha", 10), item("bolsa", 1),
        ]),
        product("bolitas", "Bolitas Carne Pequeñas x20", OTROS, 10000, vec![
            item("masa_base", 180), item("carne", 150), item("bolsa", 1),
        ]),
        product("p_dedito_q8_25", "Dedito Queso x8 (25g)", PERSONALES, 13000, vec![
            item("masa_base", 100), item("queso_costeno", 200), item("bolsa", 1),
        ]),
        product("p_dedito_q8_40", "Dedito Queso x8 (40g)", PERSONALES, 16000, vec![
            item("masa_base", 160), item("queso_costeno", 320), item("bolsa", 1),
        ]),
        product("p_cazador", "Dedito Cazador x7", PERSONALES, 14000, vec![
            item("masa_base", 175), item("salchicha", 7), item("bolsa", 1),
        ]),
        product("p_jamon", "Dedito Jamón x7", PERSONALES, 15000, vec![
            item("masa_base", 175), item("jamon", 150), item("bolsa", 1),
        ]),
        product("p_bocadillo", "Dedito Bocadillo x7", PERSONALES, 14000, vec![
            item("masa_base", 175), item("bocadillo", 150), item("bolsa", 1),
        ]),
    ]
}
