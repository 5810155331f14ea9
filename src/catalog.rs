// ABOUTME: Static nutrition catalog mapping keywords to per-serving nutrient profiles
// ABOUTME: Ordered first-substring-match resolution with a mandatory default fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 NutriScan Contributors

//! # Nutrition Catalog
//!
//! Maps a free-text item name to a [`NutrientProfile`] by substring keyword
//! lookup. The catalog is an explicit **ordered list** — never a hash map —
//! because resolution returns the profile of the *first* entry whose keyword
//! is a substring of the lowercased input. Iteration order is therefore part
//! of the contract: a multi-word keyword (`"whey protein"`) must be declared
//! before any shorter keyword it contains (`"protein bar"` vs a hypothetical
//! bare `"protein"`), or the longer entry is unreachable.
//!
//! Resolution is total: anything that matches no keyword gets the mandatory
//! default profile.

use crate::models::NutrientProfile;

/// One ordered catalog entry
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Lowercase, non-empty match keyword
    pub keyword: String,
    /// Per-serving nutrient values for a match
    pub profile: NutrientProfile,
}

impl CatalogEntry {
    /// Create an entry, normalizing the keyword to lowercase
    ///
    /// Keywords must be non-empty: an empty keyword is a substring of every
    /// name and would shadow all later entries.
    #[must_use]
    pub fn new(keyword: &str, profile: NutrientProfile) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            profile,
        }
    }
}

/// Ordered keyword table with a mandatory default profile
#[derive(Debug, Clone)]
pub struct NutritionCatalog {
    entries: Vec<CatalogEntry>,
    default_profile: NutrientProfile,
}

impl NutritionCatalog {
    /// Build a catalog from ordered entries and a default profile
    #[must_use]
    pub const fn new(entries: Vec<CatalogEntry>, default_profile: NutrientProfile) -> Self {
        Self {
            entries,
            default_profile,
        }
    }

    /// The built-in demo table
    ///
    /// Values are per typical serving. Multi-word keywords are declared ahead
    /// of the shorter keywords they contain.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = vec![
            // Multi-word keywords first: a shorter contained keyword declared
            // earlier would mask these forever.
            CatalogEntry::new(
                "whey protein",
                NutrientProfile::new(120.0, 24.0, 3.0, 1.0, 0.0, 2.0),
            ),
            CatalogEntry::new(
                "protein bar",
                NutrientProfile::new(200.0, 20.0, 22.0, 7.0, 3.0, 12.0),
            ),
            CatalogEntry::new(
                "pre-workout",
                NutrientProfile::new(10.0, 0.0, 2.0, 0.0, 0.0, 0.0),
            ),
            CatalogEntry::new(
                "greek yogurt",
                NutrientProfile::new(100.0, 17.0, 6.0, 0.7, 0.0, 4.0),
            ),
            CatalogEntry::new(
                "chicken",
                NutrientProfile::new(239.0, 27.0, 0.0, 14.0, 0.0, 0.0),
            ),
            CatalogEntry::new(
                "salmon",
                NutrientProfile::new(208.0, 20.0, 0.0, 13.0, 0.0, 0.0),
            ),
            CatalogEntry::new("egg", NutrientProfile::new(78.0, 6.3, 0.6, 5.3, 0.0, 0.6)),
            CatalogEntry::new(
                "apple",
                NutrientProfile::new(52.0, 0.3, 14.0, 0.2, 2.4, 10.0),
            ),
            CatalogEntry::new(
                "banana",
                NutrientProfile::new(89.0, 1.1, 23.0, 0.3, 2.6, 12.0),
            ),
            CatalogEntry::new(
                "orange",
                NutrientProfile::new(47.0, 0.9, 12.0, 0.2, 2.4, 9.0),
            ),
            CatalogEntry::new(
                "oatmeal",
                NutrientProfile::new(150.0, 5.0, 27.0, 3.0, 4.0, 1.0),
            ),
            CatalogEntry::new("rice", NutrientProfile::new(206.0, 4.3, 45.0, 0.4, 0.6, 0.1)),
            CatalogEntry::new("bread", NutrientProfile::new(79.0, 2.7, 14.0, 1.0, 1.2, 1.5)),
            CatalogEntry::new(
                "broccoli",
                NutrientProfile::new(34.0, 2.8, 7.0, 0.4, 2.6, 1.7),
            ),
            CatalogEntry::new(
                "spinach",
                NutrientProfile::new(23.0, 2.9, 3.6, 0.4, 2.2, 0.4),
            ),
            CatalogEntry::new("salad", NutrientProfile::new(33.0, 2.8, 6.5, 0.4, 2.1, 2.4)),
            CatalogEntry::new(
                "smoothie",
                NutrientProfile::new(180.0, 4.0, 38.0, 1.5, 3.0, 28.0),
            ),
            CatalogEntry::new("coffee", NutrientProfile::new(2.0, 0.3, 0.0, 0.0, 0.0, 0.0)),
            CatalogEntry::new("water", NutrientProfile::ZERO),
            CatalogEntry::new(
                "chocolate",
                NutrientProfile::new(546.0, 4.9, 61.0, 31.0, 7.0, 48.0),
            ),
            CatalogEntry::new("vitamin", NutrientProfile::new(5.0, 0.0, 1.0, 0.0, 0.0, 0.0)),
        ];

        // Generic mixed-serving estimate for anything the table doesn't know.
        let default_profile = NutrientProfile::new(150.0, 5.0, 18.0, 6.0, 2.0, 5.0);

        Self::new(entries, default_profile)
    }

    /// Resolve a free-text name to a nutrient profile
    ///
    /// Lowercases the input and returns the profile of the **first** entry
    /// whose keyword is a substring of it; the default profile otherwise.
    /// Total function: never fails, has no side effects.
    #[must_use]
    pub fn resolve(&self, name: &str) -> NutrientProfile {
        let normalized = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| normalized.contains(entry.keyword.as_str()))
            .map_or(self.default_profile, |entry| entry.profile)
    }

    /// The default profile returned when no keyword matches
    #[must_use]
    pub const fn default_profile(&self) -> NutrientProfile {
        self.default_profile
    }

    /// Number of keyword entries (excluding the default)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no keyword entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NutritionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
