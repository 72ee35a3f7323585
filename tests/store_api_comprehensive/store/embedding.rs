//! Embedding Tests
//!
//! A record type holding a `KeyedStore` as a field, with stores nested as
//! values inside it.

use crate::*;

/// A recipe whose ingredients are stores of `unit` and `amount`.
struct Recipe {
    ingredients: KeyedStore,
}

impl Recipe {
    fn new() -> Self {
        init_tracing();
        Self {
            ingredients: KeyedStore::new(),
        }
    }

    fn set_ingredient(&mut self, name: &str, unit: &str, amount: &str) {
        let mut details = KeyedStore::new();
        details.set("unit", unit);
        details.set("amount", amount);

        self.ingredients.set(name, details);
    }

    fn ingredient(&self, name: &str) -> Option<(String, String)> {
        let details = self.ingredients.get_store(name).ok()??;
        let unit = details.get("unit")?.as_str()?.to_string();
        let amount = details.get("amount")?.as_str()?.to_string();
        Some((unit, amount))
    }

    fn ingredients(&self) -> Vec<String> {
        self.ingredients
            .get_keys()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|name| {
                self.ingredient(name)
                    .map(|(unit, amount)| format!("{} {} {}", amount, unit, name))
            })
            .collect()
    }
}

#[test]
fn test_works_as_a_struct_field() {
    let mut oatmeal = Recipe::new();

    assert!(!oatmeal.ingredients.has_any());
    assert!(oatmeal.ingredients().is_empty());

    oatmeal.set_ingredient("oats", "cup", "1/2");
    oatmeal.set_ingredient("water", "cup", "1");
    oatmeal.set_ingredient("salt", "dash", "1");

    assert_eq!(
        oatmeal.ingredients(),
        vec!["1/2 cup oats", "1 cup water", "1 dash salt"]
    );
}

#[test]
fn test_embedded_store_reachable_by_compound_key() {
    let mut oatmeal = Recipe::new();
    oatmeal.set_ingredient("oats", "cup", "1/2");

    assert!(oatmeal.ingredients.has("oats/unit"));
    assert_eq!(
        oatmeal.ingredients.get("oats/amount"),
        Some(&Value::from("1/2"))
    );
}

#[test]
fn test_replacing_an_ingredient_keeps_position() {
    let mut oatmeal = Recipe::new();
    oatmeal.set_ingredient("oats", "cup", "1/2");
    oatmeal.set_ingredient("water", "cup", "1");
    oatmeal.set_ingredient("oats", "cup", "3/4");

    assert_eq!(oatmeal.ingredients(), vec!["3/4 cup oats", "1 cup water"]);
}

#[test]
fn test_uninitialized_store_embeds_as_null() {
    let mut outer = null_store();
    outer.set("details", KeyedStore::new());

    assert!(outer.has("details"));
    assert!(!outer.has_value_at("details"));
    assert!(outer.get_store("details").unwrap().unwrap().is_null());
}

#[test]
fn test_non_mapping_value_is_not_a_store() {
    let store = story_store();
    let err = store.get_store("title").unwrap_err();
    assert!(err.is_wrong_type());
}

#[test]
fn test_json_round_trip_preserves_nesting() {
    let mut oatmeal = Recipe::new();
    oatmeal.set_ingredient("oats", "cup", "1/2");
    oatmeal.set_ingredient("salt", "dash", "1");

    let json = oatmeal.ingredients.to_json();
    assert_eq!(
        json,
        r#"{"oats":{"unit":"cup","amount":"1/2"},"salt":{"unit":"dash","amount":"1"}}"#
    );

    let restored = KeyedStore::from_json(&json).unwrap();
    assert_eq!(restored.get_all(), oatmeal.ingredients.get_all());
    assert_eq!(restored.get_keys(), Some(vec!["oats", "salt"]));
}

#[test]
fn test_json_round_trip_keeps_tag_like_ingredients() {
    let mut oatmeal = Recipe::new();
    oatmeal.set_ingredient("oats", "cup", "1/2");
    oatmeal.ingredients.set("garnish/$f64", "NaN");
    oatmeal.ingredients.set("topping/$bytes", "not base64!");

    let restored = KeyedStore::from_json(&oatmeal.ingredients.to_json()).unwrap();
    assert_eq!(restored.get_all(), oatmeal.ingredients.get_all());
    assert_eq!(restored.get("garnish/$f64"), Some(&Value::from("NaN")));
}
