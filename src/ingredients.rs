use crate::model::DrinkRecord;

/// Number of ingredient/measure slots in a drink record
pub const INGREDIENT_SLOTS: usize = 15;

/// (ingredient key, measure key) for slots 1 through 15, in order
const SLOT_KEYS: [(&str, &str); INGREDIENT_SLOTS] = [
    ("strIngredient1", "strMeasure1"),
    ("strIngredient2", "strMeasure2"),
    ("strIngredient3", "strMeasure3"),
    ("strIngredient4", "strMeasure4"),
    ("strIngredient5", "strMeasure5"),
    ("strIngredient6", "strMeasure6"),
    ("strIngredient7", "strMeasure7"),
    ("strIngredient8", "strMeasure8"),
    ("strIngredient9", "strMeasure9"),
    ("strIngredient10", "strMeasure10"),
    ("strIngredient11", "strMeasure11"),
    ("strIngredient12", "strMeasure12"),
    ("strIngredient13", "strMeasure13"),
    ("strIngredient14", "strMeasure14"),
    ("strIngredient15", "strMeasure15"),
];

/// Flatten the numbered ingredient/measure fields into display lines
///
/// Slots are visited in order. A slot with no ingredient is skipped even if
/// it carries a measure. A missing measure is rendered as an empty string,
/// so "Ice" with no measure becomes `"Ice - "`.
pub fn normalize_ingredients(drink: &DrinkRecord) -> Vec<String> {
    SLOT_KEYS
        .iter()
        .filter_map(|(ingredient_key, measure_key)| {
            let ingredient = drink.field(ingredient_key).filter(|s| !s.is_empty())?;
            let measure = drink.field(measure_key).unwrap_or_default();
            Some(format!("{} - {}", ingredient, measure))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn drink(value: Value) -> DrinkRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_no_slots() {
        let record = drink(json!({"strDrink": "Water"}));
        assert!(normalize_ingredients(&record).is_empty());
    }

    #[test]
    fn test_all_fifteen_slots_in_order() {
        let mut fields = serde_json::Map::new();
        for i in 1..=INGREDIENT_SLOTS {
            fields.insert(format!("strIngredient{i}"), json!(format!("I{i}")));
            fields.insert(format!("strMeasure{i}"), json!(format!("M{i}")));
        }
        let record = drink(Value::Object(fields));

        let expected: Vec<String> = (1..=INGREDIENT_SLOTS)
            .map(|i| format!("I{i} - M{i}"))
            .collect();
        assert_eq!(normalize_ingredients(&record), expected);
    }

    #[test]
    fn test_missing_measure_renders_empty() {
        let record = drink(json!({
            "strIngredient1": "Ice",
            "strMeasure1": null,
            "strIngredient2": "Lime",
        }));

        assert_eq!(normalize_ingredients(&record), vec!["Ice - ", "Lime - "]);
    }

    #[test]
    fn test_measure_without_ingredient_is_skipped() {
        let record = drink(json!({
            "strIngredient1": "Gin",
            "strMeasure1": "2 oz",
            "strIngredient2": null,
            "strMeasure2": "1 dash",
            "strIngredient3": "",
            "strMeasure3": "1 oz",
            "strIngredient4": "Tonic",
            "strMeasure4": "Top",
        }));

        assert_eq!(
            normalize_ingredients(&record),
            vec!["Gin - 2 oz", "Tonic - Top"]
        );
    }

    #[test]
    fn test_sparse_slots_keep_slot_order() {
        let record = drink(json!({
            "strIngredient12": "Sugar",
            "strMeasure12": "1 tsp",
            "strIngredient3": "Mint",
            "strMeasure3": "6 leaves",
        }));

        assert_eq!(
            normalize_ingredients(&record),
            vec!["Mint - 6 leaves", "Sugar - 1 tsp"]
        );
    }

    #[test]
    fn test_slots_past_fifteen_are_ignored() {
        let record = drink(json!({
            "strIngredient16": "Bitters",
            "strMeasure16": "2 dashes",
        }));

        assert!(normalize_ingredients(&record).is_empty());
    }
}
