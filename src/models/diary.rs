// SPDX-License-Identifier: MIT

//! Typed FatSecret diary payloads.
//!
//! FatSecret serializes every numeric field as a JSON string and collapses
//! single-element lists to a bare object, so the models here normalize both
//! quirks at the deserialization boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level response of `food_entries.get.v2`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiaryResponse {
    pub food_entries: Option<FoodEntries>,
}

impl DiaryResponse {
    /// Flatten the optional one-or-many wrapper into a plain list.
    pub fn into_entries(self) -> Vec<FoodEntry> {
        self.food_entries
            .map(|fe| fe.food_entry.into_vec())
            .unwrap_or_default()
    }
}

/// `food_entries` node wrapping the entry list.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodEntries {
    pub food_entry: OneOrMany<FoodEntry>,
}

/// FatSecret returns a bare object when a day has exactly one entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(v) => v,
            OneOrMany::One(x) => vec![x],
        }
    }
}

/// One food-log line from the vendor diary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodEntry {
    #[serde(default)]
    pub food_entry_name: Option<String>,
    #[serde(default)]
    pub food_entry_description: Option<String>,
    #[serde(default)]
    pub meal: Option<String>,

    #[serde(default, deserialize_with = "de_coerced")]
    pub calories: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub protein: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub fat: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub carbohydrate: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub saturated_fat: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub cholesterol: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub fiber: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub calcium: f64,
    #[serde(default, deserialize_with = "de_coerced")]
    pub omega3: f64,
}

/// Coerce a vendor value to a number: numbers pass through, numeric strings
/// parse, everything else (missing, null, garbage) is 0.
pub fn coerce_numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn de_coerced<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_numeric(&value))
}
