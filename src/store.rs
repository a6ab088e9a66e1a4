//! View State Store
//!
//! The committed UI state: both caches, the current selection, and the
//! transient edit buffers. Only the controller's call-completion handlers
//! mutate this; derivations are pure reads over the latest committed state.

use std::collections::HashMap;

use crate::models::{ActionItem, Expedition, ExpeditionOption, PhotoDraft};

/// Committed view state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Expedition cache, in backend order
    pub expeditions: Vec<Expedition>,
    /// Open action items keyed by expedition id
    pub actions_by_expedition: HashMap<String, Vec<ActionItem>>,
    /// Currently selected expedition (a cache key whenever the cache is non-empty)
    pub current_expedition_id: Option<String>,
    /// Notes draft, seeded from the current expedition's record
    pub notes_draft: String,
    /// Per-action findings input buffers
    pub findings_drafts: HashMap<String, String>,
    /// Pending photo selection, valid while the photo modal is open
    pub photo_draft: Option<PhotoDraft>,
    /// Notes modal visibility
    pub notes_modal_open: bool,
    /// Photo modal visibility
    pub photo_modal_open: bool,
    /// Photo upload in flight (disables the upload affordance)
    pub is_uploading: bool,
    /// Last expedition-load failure, kept for display
    pub load_error: Option<String>,
}

impl ViewState {
    // ========================
    // Derivations
    // ========================

    pub fn has_expeditions(&self) -> bool {
        !self.expeditions.is_empty()
    }

    pub fn has_multiple_expeditions(&self) -> bool {
        self.expeditions.len() > 1
    }

    /// Look up an expedition by id
    pub fn expedition(&self, id: &str) -> Option<&Expedition> {
        self.expeditions.iter().find(|exp| exp.id == id)
    }

    /// The currently selected expedition record
    pub fn current_expedition(&self) -> Option<&Expedition> {
        self.current_expedition_id
            .as_deref()
            .and_then(|id| self.expedition(id))
    }

    /// Open action items of the current expedition (empty when none)
    pub fn current_actions(&self) -> &[ActionItem] {
        self.current_expedition_id
            .as_deref()
            .and_then(|id| self.actions_by_expedition.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Selector entries, in cache order
    pub fn expedition_options(&self) -> Vec<ExpeditionOption> {
        self.expeditions
            .iter()
            .map(|exp| ExpeditionOption {
                label: exp.name.clone(),
                value: exp.id.clone(),
            })
            .collect()
    }

    /// Findings input buffer for an action (empty when untouched)
    pub fn findings_input(&self, action_id: &str) -> &str {
        self.findings_drafts
            .get(action_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    // ========================
    // Mutation helpers
    // ========================

    /// Select an expedition and re-seed the notes draft from its record
    ///
    /// Ids not present in the cache are rejected, keeping the selection a
    /// valid cache key.
    pub fn set_current(&mut self, id: &str) -> bool {
        let Some(notes) = self.expedition(id).map(|exp| exp.notes.clone()) else {
            return false;
        };
        self.notes_draft = notes;
        self.current_expedition_id = Some(id.to_string());
        true
    }

    /// Drop an expedition and its action-cache entry; clears the selection
    /// if it pointed at the removed record
    pub fn remove_expedition(&mut self, id: &str) {
        self.expeditions.retain(|exp| exp.id != id);
        self.actions_by_expedition.remove(id);
        if self.current_expedition_id.as_deref() == Some(id) {
            self.current_expedition_id = None;
        }
    }

    /// Remove one action item from an expedition's list by identity
    pub fn remove_action(&mut self, expedition_id: &str, action_id: &str) {
        if let Some(actions) = self.actions_by_expedition.get_mut(expedition_id) {
            actions.retain(|item| item.id != action_id);
        }
    }

    /// Overwrite one expedition's notes, preserving every other field
    pub fn patch_notes(&mut self, expedition_id: &str, notes: &str) {
        if let Some(exp) = self.expeditions.iter_mut().find(|exp| exp.id == expedition_id) {
            let patched = exp.with_notes(notes);
            *exp = patched;
        }
    }
}
