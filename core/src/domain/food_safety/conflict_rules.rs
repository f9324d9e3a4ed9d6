use std::{
    collections::{BTreeMap, BTreeSet},
    sync::LazyLock,
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, food_safety::matchers::normalize_tag};

/// Lookup from a normalized dietary-preference key to the ingredient
/// keywords that violate it.
pub trait ConflictRules: Send + Sync {
    fn conflicting_keywords(&self, preference_key: &str) -> Option<&BTreeSet<String>>;
}

const BUILTIN_RULES: &[(&str, &[&str])] = &[
    (
        "vegan",
        &["dairy", "eggs", "meat", "fish", "shellfish", "honey"],
    ),
    ("vegetarian", &["meat", "fish", "shellfish"]),
    ("pescatarian", &["meat"]),
    ("dairy-free", &["dairy", "milk", "cheese", "butter", "cream"]),
    ("gluten-free", &["gluten", "wheat", "barley", "rye"]),
    ("nut-free", &["peanuts", "tree nuts"]),
    ("halal", &["pork", "alcohol"]),
    ("kosher", &["pork", "shellfish"]),
];

static BUILTIN_TABLE: LazyLock<ConflictTable> = LazyLock::new(|| {
    ConflictTable::new(
        BUILTIN_RULES
            .iter()
            .map(|(key, keywords)| (*key, keywords.iter().copied())),
    )
});

/// Immutable conflict table. Keys and keywords are stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConflictTable {
    rules: BTreeMap<String, BTreeSet<String>>,
}

impl ConflictTable {
    pub fn new<K, I, W>(rules: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut table: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (key, keywords) in rules {
            let key = normalize_tag(key.as_ref());
            if key.is_empty() {
                continue;
            }
            table.entry(key).or_default().extend(
                keywords
                    .into_iter()
                    .map(|keyword| normalize_tag(keyword.as_ref()))
                    .filter(|keyword| !keyword.is_empty()),
            );
        }

        Self { rules: table }
    }

    /// The table shipped with the application.
    pub fn builtin() -> &'static ConflictTable {
        &BUILTIN_TABLE
    }

    /// Parses a `{"preference": ["keyword", ...]}` document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidConflictRules(e.to_string()))
    }

    pub fn rules(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ConflictTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl<'de> Deserialize<'de> for ConflictTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl ConflictRules for ConflictTable {
    fn conflicting_keywords(&self, preference_key: &str) -> Option<&BTreeSet<String>> {
        self.rules.get(preference_key)
    }
}
