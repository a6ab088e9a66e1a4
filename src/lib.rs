//! Expedition Monitor
//!
//! Client-side view-state controller for expedition field records and their
//! open action items.
//!
//! Layered architecture:
//! - models: Data structures matching backend records
//! - gateway: Remote service and notification abstractions
//! - store: Committed view state and derivations
//! - photo: File-to-transport encoding for photo attachments
//! - controller: User-action handlers and cache update rules

mod controller;
mod gateway;
mod models;
mod photo;
mod store;

pub use controller::ExpeditionController;
pub use gateway::{ExpeditionGateway, GatewayError, GatewayResult, Notifier, Severity};
pub use models::{ActionItem, Expedition, ExpeditionOption, PhotoDraft};
pub use photo::{read_as_data_url, strip_data_uri};
pub use store::ViewState;
