//! Expedition Controller
//!
//! Orchestrates the view state against the remote service: initial load,
//! selection, action handling, notes editing and photo upload. Every
//! user-triggered operation validates locally, issues the remote call, and
//! patches the caches only after the call confirms success; failures leave
//! the caches at their last-known-good state and report through the
//! notification sink.
//!
//! Calls issued by distinct user actions are independent and may settle in
//! any order. Known race, kept from the original design: a batched action
//! reload can resolve after an individual completion toggle and transiently
//! revive the completed item until the next reload.


use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::gateway::{ExpeditionGateway, Notifier, Severity};
use crate::models::PhotoDraft;
use crate::photo;
use crate::store::ViewState;

/// Client-side controller for one expedition record page
pub struct ExpeditionController {
    /// Record context this controller was opened for
    record_id: String,
    gateway: Arc<dyn ExpeditionGateway>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<ViewState>,
}

impl ExpeditionController {
    pub fn new(
        record_id: impl Into<String>,
        gateway: Arc<dyn ExpeditionGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            gateway,
            notifier,
            state: Mutex::new(ViewState::default()),
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Clone of the committed view state, for rendering
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    // ========================
    // Loading
    // ========================

    /// Fetch the expedition list and, when non-empty, batch-load open action
    /// items for every expedition. Also serves as the explicit reload.
    pub async fn load_expeditions(&self) {
        log::info!("loading expeditions for record {}", self.record_id);
        match self.gateway.fetch_expeditions().await {
            Ok(expeditions) => {
                let ids: Vec<String> = expeditions.iter().map(|exp| exp.id.clone()).collect();
                {
                    let mut state = self.state.lock().await;
                    state.expeditions = expeditions;
                    state.load_error = None;
                    match ids.first() {
                        Some(first) => {
                            state.set_current(first);
                        }
                        None => state.current_expedition_id = None,
                    }
                }
                if !ids.is_empty() {
                    self.load_actions(&ids).await;
                }
            }
            Err(e) => {
                log::error!("failed to fetch expeditions: {}", e);
                let mut state = self.state.lock().await;
                state.expeditions.clear();
                state.actions_by_expedition.clear();
                state.current_expedition_id = None;
                state.load_error = Some(e.to_string());
            }
        }
    }

    /// Batched action-item fetch; the result replaces the cache wholesale
    async fn load_actions(&self, expedition_ids: &[String]) {
        match self.gateway.fetch_action_items(expedition_ids).await {
            Ok(actions) => {
                let mut state = self.state.lock().await;
                state.actions_by_expedition = actions;
            }
            Err(e) => {
                log::error!("failed to load actions: {}", e);
                self.notifier.notify(Severity::Error, "Error loading actions");
            }
        }
    }

    // ========================
    // Selection
    // ========================

    /// Switch the current expedition; pure local operation, no remote call
    pub async fn select_expedition(&self, expedition_id: &str) {
        let mut state = self.state.lock().await;
        if !state.set_current(expedition_id) {
            log::warn!("ignoring selection of unknown expedition {}", expedition_id);
        }
    }

    // ========================
    // Action items
    // ========================

    /// Per-row completion checkbox; only the transition to completed is wired
    pub async fn set_action_completion(&self, action_id: &str, completed: bool) {
        if !completed {
            return;
        }
        match self.gateway.set_action_completion(action_id, true).await {
            Ok(()) => {
                {
                    let mut state = self.state.lock().await;
                    if let Some(current) = state.current_expedition_id.clone() {
                        state.remove_action(&current, action_id);
                    }
                }
                self.notifier
                    .notify(Severity::Success, "Action marked as complete!");
            }
            Err(e) => {
                log::error!("failed to complete action {}: {}", action_id, e);
                self.notifier.notify(Severity::Error, "Error updating action");
            }
        }
    }

    /// Update an action's findings input buffer (per input event)
    pub async fn set_findings_input(&self, action_id: &str, text: &str) {
        let mut state = self.state.lock().await;
        state
            .findings_drafts
            .insert(action_id.to_string(), text.to_string());
    }

    /// Submit the findings buffer for an action
    ///
    /// An empty buffer issues no request. Findings are write-only from this
    /// surface: the action cache is never patched with the submitted text.
    pub async fn submit_findings(&self, action_id: &str) {
        let findings = {
            let state = self.state.lock().await;
            state.findings_input(action_id).to_string()
        };
        if findings.is_empty() {
            return;
        }
        match self.gateway.update_findings(action_id, &findings).await {
            Ok(()) => {
                self.state.lock().await.findings_drafts.remove(action_id);
                self.notifier.notify(Severity::Success, "Finding Updated!");
            }
            Err(e) => {
                log::error!("failed to update findings for {}: {}", action_id, e);
                self.notifier
                    .notify(Severity::Error, "Error updating findings");
            }
        }
    }

    // ========================
    // Expedition completion
    // ========================

    /// Mark the current expedition complete
    ///
    /// Blocked locally while the expedition still has open action items;
    /// the remote call is only issued once the local list is empty.
    pub async fn complete_expedition(&self) {
        let expedition_id = {
            let state = self.state.lock().await;
            let Some(id) = state.current_expedition_id.clone() else {
                log::warn!("completion requested with no expedition selected");
                return;
            };
            if !state.current_actions().is_empty() {
                drop(state);
                self.notifier.notify(
                    Severity::Error,
                    "Cannot complete expedition. There are pending actions",
                );
                return;
            }
            id
        };
        match self.gateway.complete_expedition(&expedition_id).await {
            Ok(()) => {
                {
                    let mut state = self.state.lock().await;
                    state.remove_expedition(&expedition_id);
                    if let Some(next) = state.expeditions.first().map(|exp| exp.id.clone()) {
                        state.set_current(&next);
                    }
                }
                self.notifier
                    .notify(Severity::Success, "Expedition marked as complete");
            }
            Err(e) => {
                log::error!("failed to complete expedition {}: {}", expedition_id, e);
                self.notifier
                    .notify(Severity::Error, "Error completing expedition");
            }
        }
    }

    // ========================
    // Notes editing
    // ========================

    /// Open the notes modal, seeding the draft from the current record
    pub async fn open_notes_modal(&self) {
        let mut state = self.state.lock().await;
        let Some(notes) = state.current_expedition().map(|exp| exp.notes.clone()) else {
            log::warn!("notes modal requested with no expedition selected");
            return;
        };
        state.notes_draft = notes;
        state.notes_modal_open = true;
    }

    /// Update the notes draft (per input event, no debouncing)
    pub async fn set_notes_draft(&self, text: &str) {
        self.state.lock().await.notes_draft = text.to_string();
    }

    /// Persist the notes draft to the backend
    ///
    /// On success the cached record gets the draft value with every other
    /// field preserved; on failure the modal stays open with the draft
    /// intact so the user may retry.
    pub async fn save_notes(&self) {
        let (expedition_id, draft) = {
            let state = self.state.lock().await;
            let Some(id) = state.current_expedition_id.clone() else {
                log::warn!("notes save requested with no expedition selected");
                return;
            };
            (id, state.notes_draft.clone())
        };
        match self.gateway.update_notes(&expedition_id, &draft).await {
            Ok(()) => {
                {
                    let mut state = self.state.lock().await;
                    state.patch_notes(&expedition_id, &draft);
                    state.notes_modal_open = false;
                }
                self.notifier
                    .notify(Severity::Success, "Notes updated successfully!");
            }
            Err(e) => {
                log::error!("failed to update notes for {}: {}", expedition_id, e);
                self.notifier.notify(Severity::Error, "Error updating notes");
            }
        }
    }

    /// Close the notes modal, discarding the draft without persisting
    pub async fn close_notes_modal(&self) {
        let mut state = self.state.lock().await;
        state.notes_modal_open = false;
        state.notes_draft.clear();
    }

    // ========================
    // Photo upload
    // ========================

    /// Open the photo modal, clearing any previous selection
    pub async fn open_photo_modal(&self) {
        let mut state = self.state.lock().await;
        state.photo_draft = None;
        state.photo_modal_open = true;
    }

    /// Close the photo modal and drop the pending selection
    pub async fn close_photo_modal(&self) {
        let mut state = self.state.lock().await;
        state.photo_modal_open = false;
        state.photo_draft = None;
    }

    /// React to a file pick: read and encode the file, then keep the result
    ///
    /// The read cannot be aborted; when picks race, whichever read finishes
    /// last owns the draft.
    pub async fn select_photo_file(&self, file_name: &str, path: &Path) {
        match photo::read_as_data_url(path).await {
            Ok(data_url) => {
                let content = photo::strip_data_uri(&data_url).to_string();
                let mut state = self.state.lock().await;
                state.photo_draft = Some(PhotoDraft {
                    file_name: file_name.to_string(),
                    content,
                });
            }
            Err(e) => {
                log::error!("failed to read photo {}: {}", file_name, e);
            }
        }
    }

    /// Upload the pending photo to the current expedition
    ///
    /// The busy flag covers exactly the duration of the remote call and is
    /// cleared on both outcomes, unconditionally.
    pub async fn upload_photo(&self) {
        let (expedition_id, draft) = {
            let mut state = self.state.lock().await;
            let Some(id) = state.current_expedition_id.clone() else {
                log::warn!("photo upload requested with no expedition selected");
                return;
            };
            let draft = state
                .photo_draft
                .clone()
                .filter(|d| !d.file_name.is_empty() && !d.content.is_empty());
            let Some(draft) = draft else {
                drop(state);
                self.notifier
                    .notify(Severity::Error, "Please select a photo to upload.");
                return;
            };
            state.is_uploading = true;
            (id, draft)
        };

        let result = self
            .gateway
            .upload_photo(&expedition_id, &draft.file_name, &draft.content)
            .await;

        {
            let mut state = self.state.lock().await;
            state.is_uploading = false;
            if result.is_ok() {
                state.photo_modal_open = false;
                state.photo_draft = None;
            }
        }
        match result {
            Ok(()) => self
                .notifier
                .notify(Severity::Success, "Photo uploaded successfully."),
            Err(e) => {
                log::error!("failed to upload photo to {}: {}", expedition_id, e);
                self.notifier.notify(Severity::Error, "Photo upload failed.");
            }
        }
    }
}
