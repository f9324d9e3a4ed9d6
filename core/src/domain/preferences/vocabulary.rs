//! Fixed vocabularies offered to users as selectable chips.
//!
//! The matchers accept arbitrary free text; these lists only describe the
//! values seen in normal operation.

pub const COMMON_ALLERGENS: &[&str] = &[
    "Peanuts",
    "Tree Nuts",
    "Dairy",
    "Eggs",
    "Fish",
    "Shellfish",
    "Soy",
    "Wheat",
    "Gluten",
    "Sesame",
];

pub const COMMON_DIETARY_PREFERENCES: &[&str] = &[
    "Vegan",
    "Vegetarian",
    "Pescatarian",
    "Gluten-Free",
    "Dairy-Free",
    "Nut-Free",
    "Halal",
    "Kosher",
    "Keto",
    "Paleo",
    "Low-Carb",
    "Low-Sodium",
];
