use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_safety::{entities::AnalysisResult, matchers::normalize_tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BannerVariant {
    Danger,
    Warning,
    Info,
    Clear,
}

/// Full-width banner shown on a food detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SafetyBanner {
    pub variant: BannerVariant,
    pub title: String,
    pub messages: Vec<String>,
}

impl From<&AnalysisResult> for SafetyBanner {
    fn from(result: &AnalysisResult) -> Self {
        let (variant, title, messages) = if result.has_allergen_warning {
            (BannerVariant::Danger, "Allergen warning", result.warnings.clone())
        } else if result.has_dietary_conflict {
            (BannerVariant::Warning, "Dietary conflict", result.warnings.clone())
        } else if !result.dietary_matches.is_empty() {
            (
                BannerVariant::Info,
                "Matches your dietary preferences",
                vec![format!("Matches: {}", result.dietary_matches.join(", "))],
            )
        } else {
            // Unknown preferences land here too.
            (BannerVariant::Clear, "No conflicts found", Vec::new())
        };

        Self {
            variant,
            title: title.to_string(),
            messages,
        }
    }
}

/// Single-token marker for compact list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyBadge {
    Allergen,
    DietConflict,
    DietMatch,
    None,
}

impl From<&AnalysisResult> for SafetyBadge {
    fn from(result: &AnalysisResult) -> Self {
        if result.has_allergen_warning {
            SafetyBadge::Allergen
        } else if result.has_dietary_conflict {
            SafetyBadge::DietConflict
        } else if !result.dietary_matches.is_empty() {
            SafetyBadge::DietMatch
        } else {
            SafetyBadge::None
        }
    }
}

/// Roll-up of a batch of results, used by dashboard alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlertSummary {
    pub meals_analyzed: usize,
    pub meals_with_allergens: usize,
    pub meals_with_dietary_conflicts: usize,
    /// Distinct allergens across the batch, first occurrence order.
    pub allergens: Vec<String>,
    pub dietary_conflicts: Vec<String>,
}

impl AlertSummary {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a AnalysisResult>) -> Self {
        let mut summary = Self::default();
        let mut seen_allergens = HashSet::new();
        let mut seen_conflicts = HashSet::new();

        for result in results {
            summary.meals_analyzed += 1;

            if result.has_allergen_warning {
                summary.meals_with_allergens += 1;
            }
            if result.has_dietary_conflict {
                summary.meals_with_dietary_conflicts += 1;
            }

            for allergen in &result.allergen_matches {
                if seen_allergens.insert(normalize_tag(allergen)) {
                    summary.allergens.push(allergen.clone());
                }
            }
            for conflict in &result.dietary_conflicts {
                if seen_conflicts.insert(normalize_tag(conflict)) {
                    summary.dietary_conflicts.push(conflict.clone());
                }
            }
        }

        summary
    }

    pub fn has_alerts(&self) -> bool {
        self.meals_with_allergens > 0 || self.meals_with_dietary_conflicts > 0
    }
}
