//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Mode, Screen};
use crate::models::{Alert, CatalogItem, ItemForm};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub screen: Screen,
    pub mode: Mode,

    // Search box
    pub search: String,
    pub input_mode: InputMode,
    /// Cursor of whichever text input is active
    pub cursor_position: usize,

    // Catalog list, already filtered by the search text
    pub visible_items: Vec<CatalogItem>,
    pub total_items: usize,
    pub selected: usize,
    pub is_loading: bool,

    // Add/edit form
    pub form: ItemForm,

    // Popups
    pub alert: Option<Alert>,
    pub show_help: bool,
}
