//! Command handlers - catalog screen behaviour for UI events and network responses

use crate::app::AppState;
use crate::constants::{ALERT_TITLE, MSG_DELETE_FAILED, MSG_FILL_ALL_FIELDS, MSG_SAVE_FAILED};
use crate::messages::ui_events::{InputMode, Mode, Screen};
use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::models::{Alert, ItemForm};

impl AppState {
    // ========================
    // Splash
    // ========================

    /// Mount the catalog; the first list fetch happens here
    pub fn finish_splash(&mut self) -> Option<NetworkCommand> {
        if self.screen != Screen::Splash {
            return None;
        }
        self.screen = Screen::Catalog;
        Some(self.request_list())
    }

    // ========================
    // Catalog fetch
    // ========================

    /// Full resynchronization with the server
    pub fn request_list(&mut self) -> NetworkCommand {
        self.pending_lists += 1;
        NetworkCommand::List { id: self.next_id() }
    }

    // ========================
    // List navigation
    // ========================

    pub fn select_next(&mut self) {
        let len = self.visible_items().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_items().len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    // ========================
    // Search
    // ========================

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.search.len();
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // ========================
    // Input editing
    // ========================

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
        self.after_edit();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
        self.after_edit();
    }

    fn after_edit(&mut self) {
        if !self.mode.is_form() {
            self.clamp_selection();
        }
    }

    // ========================
    // Add / edit form
    // ========================

    pub fn open_add(&mut self) {
        if self.mode != Mode::Viewing {
            return;
        }
        self.input_mode = InputMode::Normal;
        self.form.clear();
        self.cursor_position = 0;
        self.mode = Mode::ModalAdd;
    }

    pub fn open_edit(&mut self) {
        if self.mode != Mode::Viewing {
            return;
        }
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        self.form = ItemForm::from_item(&item);
        self.input_mode = InputMode::Normal;
        self.cursor_position = self.form.name.len();
        self.mode = Mode::ModalEdit { item_id: item.id };
    }

    pub fn next_field(&mut self) {
        self.form.focused = self.form.focused.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_field(&mut self) {
        self.form.focused = self.form.focused.prev();
        self.cursor_position = self.current_input().len();
    }

    /// Validate the form and emit create/update.
    ///
    /// Repeated saves are not deduplicated.
    pub fn save(&mut self) -> Option<NetworkCommand> {
        if !self.form.is_complete() {
            self.alert = Some(Alert::new(ALERT_TITLE, MSG_FILL_ALL_FIELDS));
            return None;
        }

        let draft = self.form.to_draft();
        let cmd = match self.mode {
            Mode::ModalAdd => NetworkCommand::Create {
                id: self.next_id(),
                draft,
            },
            Mode::ModalEdit { item_id } => {
                let id = self.next_id();
                NetworkCommand::Update { id, item_id, draft }
            }
            _ => return None,
        };
        tracing::debug!(id = ?cmd.id(), name = %self.form.name, "Saving item");
        Some(cmd)
    }

    pub fn cancel_form(&mut self) {
        if self.mode.is_form() {
            self.mode = Mode::Viewing;
        }
    }

    // ========================
    // Delete confirmation
    // ========================

    pub fn open_delete(&mut self) {
        if self.mode != Mode::Viewing {
            return;
        }
        if let Some(target) = self.selected_item().cloned() {
            self.input_mode = InputMode::Normal;
            self.mode = Mode::ModalDeleteConfirm { target };
        }
    }

    /// Close the dialog right away and emit the delete
    pub fn confirm_delete(&mut self) -> Option<NetworkCommand> {
        let Mode::ModalDeleteConfirm { target } = &self.mode else {
            return None;
        };
        let item_id = target.id;
        self.mode = Mode::Viewing;
        Some(NetworkCommand::Delete {
            id: self.next_id(),
            item_id,
        })
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.mode, Mode::ModalDeleteConfirm { .. }) {
            self.mode = Mode::Viewing;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response; may ask for a refetch
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::Listed { items, .. } => {
                self.pending_lists = self.pending_lists.saturating_sub(1);
                self.items = items;
                self.clamp_selection();
                None
            }
            NetworkResponse::Saved { id, item } => {
                tracing::info!(id, item_id = item.id, "Item saved");
                if self.mode.is_form() {
                    self.mode = Mode::Viewing;
                }
                self.form.clear();
                Some(self.request_list())
            }
            NetworkResponse::Deleted { id, item_id } => {
                tracing::info!(id, item_id, "Item deleted");
                Some(self.request_list())
            }
            NetworkResponse::Failed { id, op, message } => {
                tracing::error!(id, op = op.as_str(), %message, "Catalog operation failed");
                match op {
                    Operation::List => {
                        self.pending_lists = self.pending_lists.saturating_sub(1);
                        None
                    }
                    Operation::Create | Operation::Update => {
                        self.alert = Some(Alert::new(ALERT_TITLE, MSG_SAVE_FAILED));
                        None
                    }
                    Operation::Delete => {
                        self.alert = Some(Alert::new(ALERT_TITLE, MSG_DELETE_FAILED));
                        Some(self.request_list())
                    }
                }
            }
        }
    }
}
