use std::collections::HashSet;

use crate::domain::food_safety::{
    conflict_rules::{ConflictRules, ConflictTable},
    entities::DietaryCheck,
};

/// Trim and lowercase. Every comparison in the matchers goes through this.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

fn normalized_tags<T: AsRef<str>>(food_tags: &[T]) -> HashSet<String> {
    food_tags
        .iter()
        .map(|tag| normalize_tag(tag.as_ref()))
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Entries of `candidates` whose normalized form satisfies `hit`, in
/// candidate order, first spelling kept on duplicates.
fn select_entries<C, F>(candidates: &[C], mut hit: F) -> Vec<String>
where
    C: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    let mut seen = HashSet::new();

    candidates
        .iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let key = normalize_tag(candidate);
            (!key.is_empty() && hit(&key) && seen.insert(key)).then(|| candidate.to_string())
        })
        .collect()
}

/// Allergies that appear verbatim (case-insensitively) among the food tags.
///
/// Matching is exact: `"peanut butter"` does not match `"Peanuts"`.
pub fn check_allergens<T, A>(food_tags: &[T], allergies: &[A]) -> Vec<String>
where
    T: AsRef<str>,
    A: AsRef<str>,
{
    let tags = normalized_tags(food_tags);
    select_entries(allergies, |allergy| tags.contains(allergy))
}

/// Dietary check against the built-in conflict table.
pub fn check_dietary_preferences<T, P>(food_tags: &[T], preferences: &[P]) -> DietaryCheck
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    check_dietary_preferences_with(food_tags, preferences, ConflictTable::builtin())
}

/// Direct matches plus indirect conflicts through `rules`.
///
/// A preference can land in both lists: a food tagged `"vegan"` and `"honey"`
/// both matches and conflicts with `"Vegan"`.
pub fn check_dietary_preferences_with<T, P, R>(
    food_tags: &[T],
    preferences: &[P],
    rules: &R,
) -> DietaryCheck
where
    T: AsRef<str>,
    P: AsRef<str>,
    R: ConflictRules + ?Sized,
{
    let tags = normalized_tags(food_tags);

    let matches = select_entries(preferences, |preference| tags.contains(preference));
    let conflicts = select_entries(preferences, |preference| {
        rules
            .conflicting_keywords(preference)
            .is_some_and(|keywords| keywords.iter().any(|keyword| tags.contains(keyword)))
    });

    DietaryCheck { matches, conflicts }
}
