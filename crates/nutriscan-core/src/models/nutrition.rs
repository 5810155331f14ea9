// ABOUTME: Nutrition tracking models for food logging and aggregation
// ABOUTME: NutrientProfile, FoodCategory, LoggedItem, and AggregateReport definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-serving nutrient values for one logged item
///
/// All fields are non-negative. The catalog's numbers are taken as-is per
/// entry; there is no unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutrientProfile {
    /// Energy in kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
    /// Sugar in grams
    pub sugar_g: f64,
}

impl NutrientProfile {
    /// The all-zero profile (identity for summation)
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
        fiber_g: 0.0,
        sugar_g: 0.0,
    };

    /// Construct a profile from the six nutrient values
    #[must_use]
    pub const fn new(
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        fiber_g: f64,
        sugar_g: f64,
    ) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
            sugar_g,
        }
    }

    /// Component-wise sum of two profiles
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
            fiber_g: self.fiber_g + other.fiber_g,
            sugar_g: self.sugar_g + other.sugar_g,
        }
    }
}

/// Fixed category enumeration for logged items
///
/// The wire form is the lowercase variant name. The list is part of the
/// external contract and must not change without coordinating with the
/// dashboard collaborator.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Fruits (apple, banana, ...)
    Fruit,
    /// Vegetables
    Vegetable,
    /// Protein-dense foods (meat, fish, eggs)
    Protein,
    /// Dairy products
    Dairy,
    /// Grains and starches
    Grain,
    /// Snacks
    Snack,
    /// Drinks of any kind
    Beverage,
    /// Desserts and sweets
    Dessert,
    /// Composed meals that don't fit a single group
    Meal,
    /// Vitamins, powders, and other supplements
    Supplement,
}

impl FoodCategory {
    /// All categories in declaration order
    pub const ALL: [Self; 10] = [
        Self::Fruit,
        Self::Vegetable,
        Self::Protein,
        Self::Dairy,
        Self::Grain,
        Self::Snack,
        Self::Beverage,
        Self::Dessert,
        Self::Meal,
        Self::Supplement,
    ];

    /// Parse a category from its wire form (case-insensitive)
    ///
    /// Returns `None` for anything outside the fixed enumeration; callers
    /// decide whether that is an error (manual entry) or a fallback
    /// (recognizer text).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fruit" => Some(Self::Fruit),
            "vegetable" => Some(Self::Vegetable),
            "protein" => Some(Self::Protein),
            "dairy" => Some(Self::Dairy),
            "grain" => Some(Self::Grain),
            "snack" => Some(Self::Snack),
            "beverage" => Some(Self::Beverage),
            "dessert" => Some(Self::Dessert),
            "meal" => Some(Self::Meal),
            "supplement" => Some(Self::Supplement),
            _ => None,
        }
    }

    /// The wire form of this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
            Self::Protein => "protein",
            Self::Dairy => "dairy",
            Self::Grain => "grain",
            Self::Snack => "snack",
            Self::Beverage => "beverage",
            Self::Dessert => "dessert",
            Self::Meal => "meal",
            Self::Supplement => "supplement",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged food/supplement item
///
/// Created once at log time, immutable thereafter; removed only when the
/// session is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedItem {
    /// Identifier unique within the owning session's lifetime
    pub id: String,
    /// Free-text item name (user- or recognizer-supplied)
    pub name: String,
    /// Category from the fixed enumeration
    pub category: FoodCategory,
    /// When the item was logged
    pub timestamp: DateTime<Utc>,
    /// Per-serving nutrient values resolved at log time
    pub profile: NutrientProfile,
}

/// Aggregate dashboard payload derived from a session snapshot
///
/// Recomputed on every request, never stored. Invariant:
/// `item_count == category_breakdown.values().sum() == snapshot length`, and
/// each `totals` field equals the per-item sum of that nutrient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Component-wise sum over all item profiles
    pub totals: NutrientProfile,
    /// Count of items per category; categories with zero items are omitted
    pub category_breakdown: BTreeMap<FoodCategory, usize>,
    /// Number of items in the snapshot
    pub item_count: usize,
}
