use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Free-text tags describing one food, meal or product.
///
/// Order only matters for display; matching treats the tags as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FoodTagSet(Vec<String>);

impl FoodTagSet {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Name first, then the brand when present, then ingredient keywords.
    pub fn from_food(name: &str, brand: Option<&str>, ingredients: &[String]) -> Self {
        let mut tags = Vec::with_capacity(ingredients.len() + 2);
        tags.push(name.to_string());
        if let Some(brand) = brand
            && !brand.trim().is_empty()
        {
            tags.push(brand.to_string());
        }
        tags.extend(ingredients.iter().cloned());

        Self(tags)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for FoodTagSet {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

impl<const N: usize> From<[&str; N]> for FoodTagSet {
    fn from(tags: [&str; N]) -> Self {
        Self(tags.iter().map(|tag| tag.to_string()).collect())
    }
}

/// Outcome of matching one tag set against one preference snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub has_allergen_warning: bool,
    pub allergen_matches: Vec<String>,
    pub has_dietary_conflict: bool,
    pub dietary_matches: Vec<String>,
    pub dietary_conflicts: Vec<String>,
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    /// No warning raised. This does not mean the food was verified safe:
    /// an unknown preference set yields the same result.
    pub fn is_clear(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryCheck {
    pub matches: Vec<String>,
    pub conflicts: Vec<String>,
}
