//! # U$D Games catalog
//!
//! A terminal client for the U$D Games inventory service.
//!
//! ## Features
//! - Browse the whole catalog, filtered by name as you type
//! - Add, edit and delete games through modal forms
//! - Full catalog refetch after every change
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{CatalogItem, ItemDraft, ItemForm, FormField, Alert};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{ApiError, CatalogClient, NetworkActor};
