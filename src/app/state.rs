//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{InputMode, Mode, Screen};
use crate::messages::RenderState;
use crate::models::{Alert, CatalogItem, ItemForm};

/// Items whose name contains `search` (case-insensitive), in list order.
/// An empty search keeps everything.
pub fn filter_items<'a>(items: &'a [CatalogItem], search: &str) -> Vec<&'a CatalogItem> {
    let needle = search.to_lowercase();
    items.iter().filter(|item| item.name_matches(&needle)).collect()
}

/// Catalog screen state - pure data, no I/O
pub struct AppState {
    pub screen: Screen,
    pub mode: Mode,

    // Last fetched catalog; replaced wholesale on every refetch
    pub items: Vec<CatalogItem>,

    // Search box
    pub search: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Index into the filtered list
    pub selected: usize,

    // Add/edit form
    pub form: ItemForm,

    // List requests still in flight
    pub pending_lists: usize,
    pub next_request_id: u64,

    // Popups
    pub alert: Option<Alert>,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            screen: Screen::Splash,
            mode: Mode::Viewing,
            items: Vec::new(),
            search: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            selected: 0,
            form: ItemForm::default(),
            pending_lists: 0,
            next_request_id: 1,
            alert: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Items currently shown, recomputed from the search text each time
    pub fn visible_items(&self) -> Vec<&CatalogItem> {
        filter_items(&self.items, &self.search)
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.visible_items().get(self.selected).copied()
    }

    /// Keep the selection inside the filtered list
    pub fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }

    /// Get the active text input
    pub fn current_input(&self) -> &str {
        if self.mode.is_form() {
            self.form.value(self.form.focused)
        } else {
            &self.search
        }
    }

    /// Get mutable reference to the active text input
    pub fn current_input_mut(&mut self) -> &mut String {
        if self.mode.is_form() {
            let field = self.form.focused;
            self.form.value_mut(field)
        } else {
            &mut self.search
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            screen: self.screen,
            mode: self.mode.clone(),
            search: self.search.clone(),
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            visible_items: self.visible_items().into_iter().cloned().collect(),
            total_items: self.items.len(),
            selected: self.selected,
            is_loading: self.pending_lists > 0,
            form: self.form.clone(),
            alert: self.alert.clone(),
            show_help: self.show_help,
        }
    }
}
