// SPDX-License-Identifier: MIT

//! Aggregated daily nutrition models served to the frontend.

use serde::Serialize;

/// Meal slot for grouping diary entries. Anything the vendor reports
/// outside the three main meals lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Other,
}

impl Meal {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("breakfast") => Meal::Breakfast,
            Some("lunch") => Meal::Lunch,
            Some("dinner") => Meal::Dinner,
            _ => Meal::Other,
        }
    }
}

/// Per-day nutrient totals. Every field is the sum of the corresponding
/// entry field, with missing values counted as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub saturated_fat: f64,
    pub cholesterol: f64,
    pub fiber: f64,
    pub calcium: f64,
    pub omega3: f64,
    /// Grams of plant-based food, heuristically detected.
    pub plant_weight: f64,
    /// Number of entries naming an avocado.
    pub avocado: u32,
}

/// Normalized diary entry for display grouping.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub meal: Meal,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
}

/// Response body of `GET /api/nutrition/day`.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    /// The date actually queried (after default/clamp policy), ISO format.
    pub date: String,
    #[serde(flatten)]
    pub totals: DayTotals,
    pub entries: Vec<DayEntry>,
}
