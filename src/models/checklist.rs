// src/models/checklist.rs

use serde::{Deserialize, Serialize};

use crate::models::{
    guide::{Difficulty, DocumentType},
    profile::UserProfile,
};

/// One trackable task on the personalized checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique within the checklist.
    pub id: String,
    pub title: String,
    pub description: String,
    pub document_type: DocumentType,
    pub is_completed: bool,
    pub estimated_time: String,
    pub difficulty: Difficulty,
}

/// Persisted checklist with an explicit seeded marker, so a list the user
/// emptied is not confused with one that was never derived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistState {
    pub seeded: bool,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistState {
    /// Derives the personalized checklist from the template set.
    /// Templates for documents the user already holds are excluded; every
    /// other template passes through unconditionally. Runs once per seeded
    /// state.
    pub fn derive(templates: Vec<ChecklistItem>, profile: &UserProfile) -> Self {
        let items = templates
            .into_iter()
            .filter(|item| match item.document_type {
                DocumentType::Aadhaar => !profile.has_aadhaar,
                DocumentType::Pan => !profile.has_pan,
                DocumentType::Voter => !profile.has_voter_id,
                _ => true,
            })
            .collect();
        Self {
            seeded: true,
            items,
        }
    }

    /// Flips completion of the item with `id`, leaving the others unchanged.
    /// Returns false when no item matches.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_completed = !item.is_completed;
                true
            }
            None => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_completed).count()
    }

    /// Completion percentage rounded to the nearest integer.
    /// An empty checklist is 0%, not a division by zero.
    pub fn progress_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.completed_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn profile_with(has_aadhaar: bool, has_pan: bool, has_voter_id: bool) -> UserProfile {
        UserProfile {
            name: "Ravi".to_string(),
            date_of_birth: "2002-03-01".to_string(),
            state: "KA".to_string(),
            has_aadhaar,
            has_pan,
            has_voter_id,
            completed_onboarding: true,
        }
    }

    #[test]
    fn derivation_excludes_documents_already_held() {
        let state = ChecklistState::derive(data::checklist_templates(), &profile_with(true, false, false));

        assert!(state.seeded);
        let kinds: Vec<DocumentType> = state.items.iter().map(|i| i.document_type).collect();
        assert_eq!(kinds, vec![DocumentType::Pan, DocumentType::Voter]);
    }

    #[test]
    fn derivation_keeps_everything_for_a_fresh_citizen() {
        let state = ChecklistState::derive(data::checklist_templates(), &profile_with(false, false, false));
        assert_eq!(state.items.len(), 3);
        assert!(state.items.iter().all(|item| !item.is_completed));
    }

    #[test]
    fn derivation_can_produce_an_empty_seeded_list() {
        let state = ChecklistState::derive(data::checklist_templates(), &profile_with(true, true, true));
        assert!(state.seeded);
        assert!(state.items.is_empty());
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn item_ids_are_unique() {
        let state = ChecklistState::derive(data::checklist_templates(), &profile_with(false, false, false));
        let mut ids: Vec<&str> = state.items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.items.len());
    }

    #[test]
    fn toggle_flips_exactly_one_item() {
        let mut state = ChecklistState::derive(data::checklist_templates(), &profile_with(false, false, false));

        assert!(state.toggle("pan"));
        assert_eq!(state.completed_count(), 1);
        let pan = state.items.iter().find(|i| i.id == "pan").unwrap();
        assert!(pan.is_completed);
        assert!(state.items.iter().filter(|i| i.id != "pan").all(|i| !i.is_completed));

        // Toggling again undoes the completion.
        assert!(state.toggle("pan"));
        assert_eq!(state.completed_count(), 0);
    }

    #[test]
    fn toggle_of_unknown_id_is_rejected() {
        let mut state = ChecklistState::derive(data::checklist_templates(), &profile_with(false, false, false));
        assert!(!state.toggle("passport"));
        assert_eq!(state.completed_count(), 0);
    }

    #[test]
    fn progress_rounds_to_nearest_integer() {
        let mut state = ChecklistState::derive(data::checklist_templates(), &profile_with(false, false, false));
        assert_eq!(state.progress_percent(), 0);

        state.toggle("aadhaar");
        assert_eq!(state.progress_percent(), 33);

        state.toggle("pan");
        assert_eq!(state.progress_percent(), 67);

        state.toggle("voter");
        assert_eq!(state.progress_percent(), 100);
    }
}
