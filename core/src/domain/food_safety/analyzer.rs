use crate::domain::{
    food_safety::{
        conflict_rules::ConflictRules,
        entities::{AnalysisResult, DietaryCheck},
        matchers::{check_allergens, check_dietary_preferences_with},
    },
    preferences::entities::UserPreferences,
};

pub fn allergen_warning(allergens: &[String]) -> String {
    format!("Contains allergens: {}", allergens.join(", "))
}

pub fn dietary_warning(conflicts: &[String]) -> String {
    format!("Conflicts with dietary preferences: {}", conflicts.join(", "))
}

/// Runs both matchers and assembles the warning lines. Allergen line first.
pub fn analyze_food_tags<T, R>(
    food_tags: &[T],
    preferences: &UserPreferences,
    rules: &R,
) -> AnalysisResult
where
    T: AsRef<str>,
    R: ConflictRules + ?Sized,
{
    let allergen_matches = check_allergens(food_tags, &preferences.allergies);
    let DietaryCheck {
        matches: dietary_matches,
        conflicts: dietary_conflicts,
    } = check_dietary_preferences_with(food_tags, &preferences.dietary_preferences, rules);

    let mut warnings = Vec::with_capacity(2);
    if !allergen_matches.is_empty() {
        warnings.push(allergen_warning(&allergen_matches));
    }
    if !dietary_conflicts.is_empty() {
        warnings.push(dietary_warning(&dietary_conflicts));
    }

    AnalysisResult {
        has_allergen_warning: !allergen_matches.is_empty(),
        allergen_matches,
        has_dietary_conflict: !dietary_conflicts.is_empty(),
        dietary_matches,
        dietary_conflicts,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{food_safety::conflict_rules::ConflictTable, preferences::fakes::prefs};

    fn analyze(tags: &[&str], preferences: &UserPreferences) -> AnalysisResult {
        analyze_food_tags(tags, preferences, ConflictTable::builtin())
    }

    #[test]
    fn allergy_hit_raises_allergen_warning() {
        let result = analyze(&["Peanut Butter", "peanuts", "sugar"], &prefs(&["Peanuts"], &[]));

        assert!(result.has_allergen_warning);
        assert_eq!(result.allergen_matches, vec!["Peanuts"]);
        assert!(!result.has_dietary_conflict);
        assert_eq!(result.warnings, vec!["Contains allergens: Peanuts"]);
    }

    #[test]
    fn snack_with_one_of_two_allergies() {
        let result = analyze(
            &["Snickers", "Mars", "peanuts", "milk", "sugar"],
            &prefs(&["Peanuts", "Gluten"], &[]),
        );

        assert!(result.has_allergen_warning);
        assert_eq!(result.allergen_matches, vec!["Peanuts"]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Peanuts"));
        assert!(!result.warnings[0].contains("Gluten"));
    }

    #[test]
    fn cheese_pizza_conflicts_with_vegan_without_allergen_flag() {
        let result = analyze(&["Cheese Pizza", "dairy"], &prefs(&[], &["Vegan"]));

        assert!(!result.has_allergen_warning);
        assert!(result.allergen_matches.is_empty());
        assert!(result.has_dietary_conflict);
        assert_eq!(result.dietary_conflicts, vec!["Vegan"]);
        assert_eq!(result.warnings, vec!["Conflicts with dietary preferences: Vegan"]);
    }

    #[test]
    fn dietary_conflict_only() {
        let result = analyze(&["Honey Oats", "honey"], &prefs(&[], &["Vegan"]));

        assert!(!result.has_allergen_warning);
        assert!(result.has_dietary_conflict);
        assert_eq!(result.dietary_conflicts, vec!["Vegan"]);
        assert_eq!(result.warnings, vec!["Conflicts with dietary preferences: Vegan"]);
    }

    #[test]
    fn preference_without_table_entry_is_clear() {
        let result = analyze(&["bread", "sugar"], &prefs(&[], &["Keto"]));

        assert!(result.is_clear());
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn empty_preferences_produce_no_warnings() {
        let result = analyze(&["peanuts", "milk", "pork"], &UserPreferences::default());

        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn allergen_line_precedes_dietary_line() {
        let result = analyze(
            &["milk", "eggs"],
            &prefs(&["Eggs", "Dairy"], &["Dairy-Free", "Vegan"]),
        );

        assert_eq!(
            result.warnings,
            vec![
                "Contains allergens: Eggs",
                "Conflicts with dietary preferences: Dairy-Free, Vegan",
            ]
        );
    }

    #[test]
    fn dietary_match_alone_raises_no_flag() {
        let result = analyze(&["halal"], &prefs(&[], &["Halal"]));

        assert_eq!(result.dietary_matches, vec!["Halal"]);
        assert!(!result.has_dietary_conflict);
        assert!(result.warnings.is_empty());
    }
}
