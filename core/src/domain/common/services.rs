use std::sync::Arc;

use crate::domain::{
    food_safety::conflict_rules::ConflictRules,
    preferences::ports::{PreferenceCache, PreferenceRepository},
};

/// Aggregate service. Each domain implements its service trait on it.
pub struct Service<PR, PC, CR>
where
    PR: PreferenceRepository,
    PC: PreferenceCache,
    CR: ConflictRules,
{
    pub(crate) preference_repository: Arc<PR>,
    pub(crate) preference_cache: Arc<PC>,
    pub(crate) conflict_rules: Arc<CR>,
}

impl<PR, PC, CR> Service<PR, PC, CR>
where
    PR: PreferenceRepository,
    PC: PreferenceCache,
    CR: ConflictRules,
{
    pub fn new(preference_repository: PR, preference_cache: PC, conflict_rules: CR) -> Self {
        Self {
            preference_repository: Arc::new(preference_repository),
            preference_cache: Arc::new(preference_cache),
            conflict_rules: Arc::new(conflict_rules),
        }
    }

    pub fn conflict_rules(&self) -> &CR {
        &self.conflict_rules
    }
}

impl<PR, PC, CR> Clone for Service<PR, PC, CR>
where
    PR: PreferenceRepository,
    PC: PreferenceCache,
    CR: ConflictRules,
{
    fn clone(&self) -> Self {
        Self {
            preference_repository: Arc::clone(&self.preference_repository),
            preference_cache: Arc::clone(&self.preference_cache),
            conflict_rules: Arc::clone(&self.conflict_rules),
        }
    }
}
