// SPDX-License-Identifier: MIT

//! Diary aggregation: daily nutrient totals plus plant-food heuristics.
//!
//! The plant-weight heuristic works on free-text entry names and
//! descriptions in English and Russian, since the diary is kept in both
//! languages. Quantities are extracted from the description when a gram or
//! cup pattern is present; otherwise a recognized plant item counts as one
//! flat 80 g serving.

use crate::models::{DayEntry, DayTotals, FoodEntry, Meal};
use regex::Regex;
use std::sync::LazyLock;

/// Produce names that mark an entry as plant-based, in both diary languages.
const PLANT_KEYWORDS: &[&str] = &[
    "apple", "banana", "orange", "tomato", "cucumber", "carrot", "onion", "lettuce", "spinach",
    "broccoli", "pepper", "potato", "cabbage", "grape", "berry", "cherry", "peach", "pear",
    "авокадо", "яблоко", "банан", "апельсин", "помидор", "огурец", "морковь", "лук", "салат",
    "шпинат", "брокколи", "перец", "картофель", "капуста", "виноград", "ягода", "вишня",
    "персик", "груша", "овощ", "фрукт", "зелень", "vegetable", "fruit", "greens",
];

const AVOCADO_KEYWORDS: &[&str] = &["avocado", "авокадо"];

/// Grams per cup when only a cup quantity is given.
const GRAMS_PER_CUP: f64 = 100.0;

/// Flat serving assumed for a plant item with no parseable quantity.
const DEFAULT_PLANT_SERVING_G: f64 = 80.0;

static GRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*г|(\d+)\s*g\b").expect("valid gram regex"));
static CUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d*\.?\d+)\s*cup").expect("valid cup regex"));

/// Aggregate one day's diary entries into totals plus a normalized list.
pub fn aggregate_day(entries: &[FoodEntry]) -> (DayTotals, Vec<DayEntry>) {
    let mut totals = DayTotals::default();

    for entry in entries {
        totals.calories += entry.calories;
        totals.protein += entry.protein;
        totals.fat += entry.fat;
        totals.carbohydrate += entry.carbohydrate;
        totals.saturated_fat += entry.saturated_fat;
        totals.cholesterol += entry.cholesterol;
        totals.fiber += entry.fiber;
        totals.calcium += entry.calcium;
        totals.omega3 += entry.omega3;
        totals.plant_weight += plant_weight(entry);
        if is_avocado(entry) {
            totals.avocado += 1;
        }
    }

    let normalized = entries
        .iter()
        .map(|entry| DayEntry {
            name: entry.food_entry_name.clone(),
            description: entry.food_entry_description.clone(),
            meal: Meal::parse(entry.meal.as_deref()),
            calories: entry.calories,
            protein: entry.protein,
            fat: entry.fat,
            carbohydrate: entry.carbohydrate,
        })
        .collect();

    (totals, normalized)
}

/// Heuristic grams of plant food contributed by one entry.
///
/// Non-plant entries contribute 0 regardless of description content.
pub fn plant_weight(entry: &FoodEntry) -> f64 {
    let name = lower(&entry.food_entry_name);
    let description = lower(&entry.food_entry_description);

    let is_plant = PLANT_KEYWORDS
        .iter()
        .any(|kw| name.contains(kw) || description.contains(kw));
    if !is_plant {
        return 0.0;
    }

    if let Some(caps) = GRAM_RE.captures(&description) {
        let grams = caps
            .get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| m.as_str().parse::<f64>().ok());
        if let Some(g) = grams {
            return g;
        }
    }

    if let Some(caps) = CUP_RE.captures(&description) {
        if let Some(cups) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) {
            return cups * GRAMS_PER_CUP;
        }
    }

    DEFAULT_PLANT_SERVING_G
}

/// Whether the entry name mentions an avocado (either language).
pub fn is_avocado(entry: &FoodEntry) -> bool {
    let name = lower(&entry.food_entry_name);
    AVOCADO_KEYWORDS.iter().any(|kw| name.contains(kw))
}

fn lower(field: &Option<String>) -> String {
    field.as_deref().unwrap_or_default().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, description: &str) -> FoodEntry {
        FoodEntry {
            food_entry_name: Some(name.to_string()),
            food_entry_description: Some(description.to_string()),
            ..FoodEntry::default()
        }
    }

    #[test]
    fn test_plant_weight_gram_pattern() {
        assert_eq!(plant_weight(&entry("Огурец", "100 г")), 100.0);
        assert_eq!(plant_weight(&entry("Cucumber", "250g serving")), 250.0);
    }

    #[test]
    fn test_plant_weight_cup_pattern() {
        assert_eq!(plant_weight(&entry("Spinach", "2 cup")), 200.0);
        assert_eq!(plant_weight(&entry("Berry mix", "0.5 cup frozen")), 50.0);
    }

    #[test]
    fn test_plant_weight_default_serving() {
        assert_eq!(plant_weight(&entry("Banana", "one medium")), 80.0);
    }

    #[test]
    fn test_non_plant_contributes_zero() {
        // Quantity patterns in the description must not matter for
        // non-plant items.
        assert_eq!(plant_weight(&entry("Chicken breast", "200 г")), 0.0);
        assert_eq!(plant_weight(&entry("Steak", "2 cup diced")), 0.0);
    }

    #[test]
    fn test_plant_keyword_in_description_counts() {
        assert_eq!(plant_weight(&entry("Lunch salad bowl", "apple 120 g")), 120.0);
    }

    #[test]
    fn test_avocado_counter() {
        assert!(is_avocado(&entry("Avocado toast", "")));
        assert!(is_avocado(&entry("Салат с АВОКАДО", "")));
        assert!(!is_avocado(&entry("Banana", "avocado on the side")));
    }

    #[test]
    fn test_totals_sum_with_coerced_fields() {
        let mut a = FoodEntry::default();
        a.calories = 100.0;
        a.protein = 10.0;
        let mut b = FoodEntry::default();
        b.calories = 50.5;
        // b.protein stays 0 (the coerced default for a missing field)

        let (totals, entries) = aggregate_day(&[a, b]);
        assert_eq!(totals.calories, 150.5);
        assert_eq!(totals.protein, 10.0);
        assert_eq!(totals.avocado, 0);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_avocado_increments_once_per_entry() {
        let avocado = entry("avocado", "1 whole");
        let (totals, _) = aggregate_day(&[avocado.clone(), avocado]);
        assert_eq!(totals.avocado, 2);
    }

    #[test]
    fn test_empty_day() {
        let (totals, entries) = aggregate_day(&[]);
        assert_eq!(totals, DayTotals::default());
        assert!(entries.is_empty());
    }
}
