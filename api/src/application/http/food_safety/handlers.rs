pub mod analyze_food;
pub mod analyze_meals;
pub mod check_allergens;
pub mod check_dietary;
pub mod get_conflict_rules;
