use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{
    common::services::Service,
    food_safety::{
        analyzer::analyze_food_tags,
        conflict_rules::ConflictRules,
        entities::{AnalysisResult, FoodTagSet},
        ports::FoodSafetyService,
        value_objects::{AnalyzeFoodInput, AnalyzeMealsInput},
    },
    preferences::{
        entities::UserPreferences,
        ports::{PreferenceCache, PreferenceRepository, PreferenceService},
    },
};

impl<PR, PC, CR> FoodSafetyService for Service<PR, PC, CR>
where
    PR: PreferenceRepository,
    PC: PreferenceCache,
    CR: ConflictRules,
{
    fn analyze(&self, tags: &FoodTagSet, preferences: &UserPreferences) -> AnalysisResult {
        analyze_food_tags(tags.as_slice(), preferences, self.conflict_rules())
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, tags = input.tags.len()))]
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> AnalysisResult {
        let preferences = match input.preferences {
            Some(preferences) => preferences,
            None => self.fetch_preferences(input.user_id).await,
        };

        let result = self.analyze(&input.tags, &preferences);
        debug!(
            allergen_warning = result.has_allergen_warning,
            dietary_conflict = result.has_dietary_conflict,
            "Food analyzed"
        );

        result
    }

    async fn analyze_with_fetch(&self, user_id: Uuid, tags: FoodTagSet) -> AnalysisResult {
        self.analyze_food(AnalyzeFoodInput {
            user_id,
            tags,
            preferences: None,
        })
        .await
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id, meals = input.meals.len()))]
    async fn analyze_meals(&self, input: AnalyzeMealsInput) -> Vec<AnalysisResult> {
        if input.meals.is_empty() {
            return Vec::new();
        }

        let preferences = match input.preferences {
            Some(preferences) => preferences,
            None => self.fetch_preferences(input.user_id).await,
        };

        input
            .meals
            .iter()
            .map(|meal| self.analyze(meal, &preferences))
            .collect()
    }
}
