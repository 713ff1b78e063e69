// ABOUTME: Wire-format data structures for meals and daily plans
// ABOUTME: ProteinItem, Meal, DailyPlan and their cost/origin/meal-type enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model for the meal plan API
//!
//! Field names and enum spellings follow the JSON wire format consumed by
//! the frontend bundle, so serde renames are load-bearing here.

use serde::{Deserialize, Serialize};

/// Relative cost of a protein source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CostTier {
    /// Cheapest staples (dhal and similar)
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
}

/// Where a protein source comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OriginType {
    Animal,
    Plant,
    Dairy,
}

/// A protein source with its macros and cost classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProteinItem {
    /// Food name including the serving it is quoted for
    pub name: String,
    /// Protein grams per serving
    pub protein: u32,
    /// Cost tier
    pub cost: CostTier,
    /// Origin (animal, plant, dairy)
    #[serde(rename = "type")]
    pub origin: OriginType,
}

/// One of the three daily eating occasions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// A single meal: one protein, one vegetable dish, one carbohydrate dish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Which meal slot this was generated for
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Selected protein source
    pub protein: ProteinItem,
    /// Selected vegetable dish name
    pub veggie: String,
    /// Selected carbohydrate dish name
    pub carb: String,
}

/// A full day's plan: three meals, aggregate protein, and sampled tips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    /// Exact sum of the three selected proteins' grams
    pub total_protein: u32,
    /// Caller-supplied target, echoed back unvalidated. Selection is not
    /// steered toward it.
    pub protein_goal: i64,
    /// Generation timestamp, `%Y-%m-%d %H:%M:%S` local time
    pub date: String,
    /// Three distinct tips sampled without replacement
    pub tips: Vec<String>,
}
