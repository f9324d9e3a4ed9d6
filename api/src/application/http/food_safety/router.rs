use super::handlers::{
    analyze_food::{__path_analyze_food, analyze_food},
    analyze_meals::{__path_analyze_meals, analyze_meals},
    check_allergens::{__path_check_allergens, check_allergens},
    check_dietary::{__path_check_dietary, check_dietary},
    get_conflict_rules::{__path_get_conflict_rules, get_conflict_rules},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_food,
    analyze_meals,
    check_allergens,
    check_dietary,
    get_conflict_rules
))]
pub struct FoodSafetyApiDoc;

pub fn food_safety_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/food-safety/analyze"),
            post(analyze_food),
        )
        .route(
            &format!("{root_path}/food-safety/analyze/batch"),
            post(analyze_meals),
        )
        .route(
            &format!("{root_path}/food-safety/allergens"),
            post(check_allergens),
        )
        .route(
            &format!("{root_path}/food-safety/dietary"),
            post(check_dietary),
        )
        .route(
            &format!("{root_path}/food-safety/conflict-rules"),
            get(get_conflict_rules),
        )
}
