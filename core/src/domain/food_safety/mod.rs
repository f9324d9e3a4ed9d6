pub mod analyzer;
pub mod conflict_rules;
pub mod entities;
pub mod matchers;
pub mod ports;
pub mod presentation;
pub mod services;
pub mod value_objects;

pub use analyzer::analyze_food_tags;
pub use conflict_rules::{ConflictRules, ConflictTable};
pub use entities::*;
pub use matchers::{check_allergens, check_dietary_preferences, check_dietary_preferences_with};
