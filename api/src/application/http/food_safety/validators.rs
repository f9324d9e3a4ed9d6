use mealguard_core::domain::{
    food_safety::entities::FoodTagSet, preferences::entities::UserPreferences,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::preferences::validators::{
    UpdatePreferencesValidator, validate_entry_lengths,
};

const MAX_TAG_LEN: usize = 200;

#[allow(clippy::ptr_arg)]
fn validate_tag_lengths(tags: &Vec<String>) -> Result<(), ValidationError> {
    if tags.iter().any(|tag| tag.chars().count() > MAX_TAG_LEN) {
        return Err(ValidationError::new("tag_too_long")
            .with_message(format!("tags are limited to {MAX_TAG_LEN} characters").into()));
    }
    Ok(())
}

/// A food described by its parts instead of raw tags.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FoodDescription {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub brand: Option<String>,

    #[serde(default)]
    #[validate(length(max = 256), custom(function = "validate_tag_lengths"))]
    pub ingredients: Vec<String>,
}

fn collect_tags(food: Option<FoodDescription>, tags: Vec<String>) -> FoodTagSet {
    let mut collected = match food {
        Some(food) => {
            FoodTagSet::from_food(&food.name, food.brand.as_deref(), &food.ingredients)
                .into_inner()
        }
        None => Vec::new(),
    };
    collected.extend(tags);

    FoodTagSet::new(collected)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeFoodValidator {
    #[serde(default)]
    #[validate(length(max = 256), custom(function = "validate_tag_lengths"))]
    pub tags: Vec<String>,

    #[validate(nested)]
    pub food: Option<FoodDescription>,

    /// Analyze against these lists instead of the stored ones.
    #[validate(nested)]
    pub preferences: Option<UpdatePreferencesValidator>,
}

impl AnalyzeFoodValidator {
    pub fn into_parts(self) -> (FoodTagSet, Option<UserPreferences>) {
        (
            collect_tags(self.food, self.tags),
            self.preferences.map(UserPreferences::from),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MealInput {
    /// Caller reference echoed back in the response.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    #[validate(length(max = 256), custom(function = "validate_tag_lengths"))]
    pub tags: Vec<String>,

    #[validate(nested)]
    pub food: Option<FoodDescription>,
}

impl MealInput {
    pub fn into_parts(self) -> (Option<String>, FoodTagSet) {
        (self.id, collect_tags(self.food, self.tags))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AnalyzeMealsValidator {
    #[validate(length(min = 1, max = 100, message = "between 1 and 100 meals"), nested)]
    pub meals: Vec<MealInput>,

    #[validate(nested)]
    pub preferences: Option<UpdatePreferencesValidator>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckAllergensValidator {
    #[validate(length(max = 256), custom(function = "validate_tag_lengths"))]
    pub tags: Vec<String>,

    #[validate(length(max = 64), custom(function = "validate_entry_lengths"))]
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckDietaryValidator {
    #[validate(length(max = 256), custom(function = "validate_tag_lengths"))]
    pub tags: Vec<String>,

    #[validate(length(max = 64), custom(function = "validate_entry_lengths"))]
    pub dietary_preferences: Vec<String>,
}
