use crate::application::http::{
    food_safety::router::FoodSafetyApiDoc, health::HealthApiDoc,
    preferences::router::PreferencesApiDoc, vocabulary::VocabularyApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealguard API",
        description = "Allergen and dietary conflict analysis for logged foods"
    ),
    nest(
        (path = "/preferences", api = PreferencesApiDoc),
        (path = "/food-safety", api = FoodSafetyApiDoc),
        (path = "/vocabulary", api = VocabularyApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
