use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    food_safety::{
        entities::{AnalysisResult, FoodTagSet},
        value_objects::{AnalyzeFoodInput, AnalyzeMealsInput},
    },
    preferences::entities::UserPreferences,
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodSafetyService: Send + Sync {
    /// Pure analysis against an explicit preference snapshot.
    fn analyze(&self, tags: &FoodTagSet, preferences: &UserPreferences) -> AnalysisResult;

    /// Uses `input.preferences` when given, otherwise fetches them.
    fn analyze_food(&self, input: AnalyzeFoodInput) -> impl Future<Output = AnalysisResult> + Send;

    fn analyze_with_fetch(
        &self,
        user_id: Uuid,
        tags: FoodTagSet,
    ) -> impl Future<Output = AnalysisResult> + Send;

    /// One preference snapshot for the whole batch; results keep input order.
    fn analyze_meals(
        &self,
        input: AnalyzeMealsInput,
    ) -> impl Future<Output = Vec<AnalysisResult>> + Send;
}
