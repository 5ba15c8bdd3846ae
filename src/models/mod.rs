// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod diary;
pub mod summary;

pub use diary::{coerce_numeric, DiaryResponse, FoodEntry};
pub use summary::{DayEntry, DaySummary, DayTotals, Meal};
