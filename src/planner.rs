// ABOUTME: Random meal and daily plan generation over the food catalog
// ABOUTME: Uniform independent draws per field, distinct tip sampling per plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Meal plan generation
//!
//! Selection is deliberately simple: each meal draws its protein, veggie,
//! and carb independently and uniformly, with replacement across meals (the
//! same item may show up at breakfast and dinner). Only the tips sample is
//! without replacement. There is no weighting by cost tier and no steering
//! toward the protein goal; the goal is echoed back informationally.
//!
//! The RNG is passed in by the caller so handlers can use entropy-seeded
//! randomness while tests drive the planner with a seeded [`rand::rngs::StdRng`].

use std::sync::Arc;

use chrono::Local;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::FoodCatalog;
use crate::models::{DailyPlan, Meal, MealType};

/// Goal used when the caller does not supply one
pub const DEFAULT_PROTEIN_GOAL: i64 = 50;

/// Number of tips attached to every daily plan
pub const PLAN_TIP_COUNT: usize = 3;

/// Timestamp format stamped onto generated plans
const PLAN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generates meals and daily plans from a shared catalog
#[derive(Debug, Clone)]
pub struct MealPlanner {
    catalog: Arc<FoodCatalog>,
}

impl MealPlanner {
    /// Create a planner over the given catalog
    #[must_use]
    pub fn new(catalog: Arc<FoodCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this planner draws from
    #[must_use]
    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Generate a single meal for the given slot
    ///
    /// Each field is an independent uniform draw. Infallible: the catalog
    /// lists are non-empty by construction.
    pub fn generate_meal<R: Rng + ?Sized>(&self, rng: &mut R, meal_type: MealType) -> Meal {
        let proteins = self.catalog.proteins();
        let veggies = self.catalog.veggies();
        let carbs = self.catalog.carbs();

        let protein = proteins[rng.gen_range(0..proteins.len())].clone();
        let veggie = veggies[rng.gen_range(0..veggies.len())].clone();
        let carb = carbs[rng.gen_range(0..carbs.len())].clone();

        Meal {
            meal_type,
            protein,
            veggie,
            carb,
        }
    }

    /// Generate a full daily plan: breakfast, lunch, dinner, and tips
    ///
    /// The three meals are independent draws with no exclusion between them.
    /// `protein_goal` is echoed back without validation; negative and zero
    /// values pass through unchanged.
    pub fn generate_daily_plan<R: Rng + ?Sized>(&self, rng: &mut R, protein_goal: i64) -> DailyPlan {
        let breakfast = self.generate_meal(rng, MealType::Breakfast);
        let lunch = self.generate_meal(rng, MealType::Lunch);
        let dinner = self.generate_meal(rng, MealType::Dinner);

        let total_protein =
            breakfast.protein.protein + lunch.protein.protein + dinner.protein.protein;

        DailyPlan {
            breakfast,
            lunch,
            dinner,
            total_protein,
            protein_goal,
            date: Local::now().format(PLAN_DATE_FORMAT).to_string(),
            tips: self.sample_tips(rng, PLAN_TIP_COUNT),
        }
    }

    /// Sample `count` distinct tips uniformly without replacement
    ///
    /// Silently caps at the catalog size instead of erroring when `count`
    /// exceeds it.
    pub fn sample_tips<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        self.catalog
            .tips()
            .choose_multiple(rng, count)
            .cloned()
            .collect()
    }
}
