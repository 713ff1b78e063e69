// ABOUTME: Static food and tip reference data for plan generation
// ABOUTME: Fixed catalog of 10 proteins, 10 veggies, 10 carbs, and 10 tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The food catalog
//!
//! Immutable reference data populated once at startup and shared read-only
//! for the life of the process. The catalog is never empty by construction,
//! which is what lets the planner expose infallible operations.

use crate::models::{CostTier, OriginType, ProteinItem};

/// Fixed reference lists of foods and tips
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    proteins: Vec<ProteinItem>,
    veggies: Vec<String>,
    carbs: Vec<String>,
    tips: Vec<String>,
}

impl FoodCatalog {
    /// Build the Sri Lankan budget food catalog
    #[must_use]
    pub fn new() -> Self {
        let protein =
            |name: &str, protein: u32, cost: CostTier, origin: OriginType| ProteinItem {
                name: name.to_owned(),
                protein,
                cost,
                origin,
            };

        Self {
            proteins: vec![
                protein("Eggs (2 large)", 12, CostTier::Low, OriginType::Animal),
                protein(
                    "Canned Sardines (100g)",
                    20,
                    CostTier::Medium,
                    OriginType::Animal,
                ),
                protein(
                    "Canned Mackerel (100g)",
                    19,
                    CostTier::Medium,
                    OriginType::Animal,
                ),
                protein(
                    "Chicken Liver (100g)",
                    24,
                    CostTier::Medium,
                    OriginType::Animal,
                ),
                protein(
                    "Dhal (1 cup cooked)",
                    18,
                    CostTier::VeryLow,
                    OriginType::Plant,
                ),
                protein(
                    "Chickpeas (1 cup cooked)",
                    15,
                    CostTier::Low,
                    OriginType::Plant,
                ),
                protein(
                    "Cottage Cheese (100g)",
                    11,
                    CostTier::Medium,
                    OriginType::Dairy,
                ),
                protein("Plain Curd (1 cup)", 8, CostTier::Low, OriginType::Dairy),
                protein("Dried Fish (50g)", 25, CostTier::Medium, OriginType::Animal),
                protein("Mackerel (100g)", 19, CostTier::Medium, OriginType::Animal),
            ],
            veggies: [
                "Kankun (Water Spinach) Mallung",
                "Mukunuwenna (Alternanthera) Mallung",
                "Gotukola (Centella) Sambol",
                "Cabbage Salad",
                "Spinach (Nivithi) Curry",
                "Bean Curry",
                "Brinjal (Eggplant) Moju",
                "Cucumber Salad",
                "Carrot Salad",
                "Kohila (Lasia Spinosa) Curry",
            ]
            .map(str::to_owned)
            .to_vec(),
            carbs: [
                "Red Rice (1 scoop)",
                "White Rice (1 scoop)",
                "Roti (1 piece)",
                "Jak Fruit (1 cup)",
                "Oats (1 cup)",
                "Whole Grain Bread (2 slices)",
                "Sweet Potato (1 medium)",
                "String Hoppers (5 pieces)",
                "Hoppers (2 pieces)",
                "Kurakkan Roti (1 piece)",
            ]
            .map(str::to_owned)
            .to_vec(),
            tips: [
                "Spread your protein intake evenly across all meals",
                "Combine rice and dhal to form a complete protein",
                "Fill half your plate with vegetables to feel full",
                "Use minimal oil when cooking - try steaming or baking",
                "Drink plenty of water before meals to reduce appetite",
                "Focus on weight training 3x/week to preserve muscle",
                "Be patient - aim for 0.5kg loss per week (not more)",
                "Get 7-8 hours of sleep for better recovery and hormones",
                "Limit sugary drinks and snacks - they add empty calories",
                "Walk for 30 minutes daily to boost metabolism",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }

    /// Protein sources, in catalog order
    #[must_use]
    pub fn proteins(&self) -> &[ProteinItem] {
        &self.proteins
    }

    /// Vegetable dish names, in catalog order
    #[must_use]
    pub fn veggies(&self) -> &[String] {
        &self.veggies
    }

    /// Carbohydrate dish names, in catalog order
    #[must_use]
    pub fn carbs(&self) -> &[String] {
        &self.carbs
    }

    /// Motivational tips, in catalog order
    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_entries_per_list() {
        let catalog = FoodCatalog::new();
        assert_eq!(catalog.proteins().len(), 10);
        assert_eq!(catalog.veggies().len(), 10);
        assert_eq!(catalog.carbs().len(), 10);
        assert_eq!(catalog.tips().len(), 10);
    }

    #[test]
    fn protein_grams_span_expected_range() {
        let catalog = FoodCatalog::new();
        let min = catalog.proteins().iter().map(|p| p.protein).min().unwrap();
        let max = catalog.proteins().iter().map(|p| p.protein).max().unwrap();
        assert_eq!(min, 8);
        assert_eq!(max, 25);
    }
}
