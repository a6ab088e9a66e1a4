//! Remote Service Gateway
//!
//! Abstract interfaces to the backend service and the user-notification
//! sink. Implementations live with the host application (HTTP, IPC, etc.);
//! the controller only ever talks to these traits.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{ActionItem, Expedition};

/// Common result type for remote operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Opaque remote-call failure
///
/// The controller never inspects the cause; it logs the message and reports
/// a fixed per-operation notification instead.
#[derive(Debug, Clone)]
pub struct GatewayError(String);

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GatewayError {}

impl From<String> for GatewayError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// Remote operations on expeditions and their action items
///
/// All operations are async; each either resolves with a value or fails
/// with an opaque error. The gateway carries its own record context, so
/// fetching takes no arguments.
#[async_trait]
pub trait ExpeditionGateway: Send + Sync {
    /// Fetch the full expedition list, in backend order
    async fn fetch_expeditions(&self) -> GatewayResult<Vec<Expedition>>;

    /// Fetch open action items for a set of expeditions in one call
    async fn fetch_action_items(
        &self,
        expedition_ids: &[String],
    ) -> GatewayResult<HashMap<String, Vec<ActionItem>>>;

    /// Mark an expedition complete
    async fn complete_expedition(&self, expedition_id: &str) -> GatewayResult<()>;

    /// Replace an expedition's notes text
    async fn update_notes(&self, expedition_id: &str, notes: &str) -> GatewayResult<()>;

    /// Replace an action item's findings text
    async fn update_findings(&self, action_id: &str, findings: &str) -> GatewayResult<()>;

    /// Set an action item's completion flag
    async fn set_action_completion(&self, action_id: &str, completed: bool) -> GatewayResult<()>;

    /// Attach a photo (base64 payload) to an expedition
    async fn upload_photo(
        &self,
        expedition_id: &str,
        file_name: &str,
        content: &str,
    ) -> GatewayResult<()>;
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// User-notification sink (toast-style)
///
/// Fire-and-forget; never fails from the caller's perspective.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}
