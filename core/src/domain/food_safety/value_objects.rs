use uuid::Uuid;

use crate::domain::{food_safety::entities::FoodTagSet, preferences::entities::UserPreferences};

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub user_id: Uuid,
    pub tags: FoodTagSet,
    /// When set, the stored preferences are not consulted.
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeMealsInput {
    pub user_id: Uuid,
    pub meals: Vec<FoodTagSet>,
    pub preferences: Option<UserPreferences>,
}
