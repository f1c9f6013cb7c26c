//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::CatalogItem;

/// Top-level screen
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Screen {
    #[default]
    Splash,
    Catalog,
}

/// Modal state of the catalog screen
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Mode {
    #[default]
    Viewing,
    ModalAdd,
    ModalEdit { item_id: i64 },
    ModalDeleteConfirm { target: CatalogItem },
}

impl Mode {
    pub fn is_form(&self) -> bool {
        matches!(self, Mode::ModalAdd | Mode::ModalEdit { .. })
    }
}

/// Input mode of the search box
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Splash timer elapsed
    SplashFinished,

    // List navigation
    SelectNext,
    SelectPrev,

    // Search box
    StartSearch,
    StopSearch,

    // Text editing (search box or focused form field)
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Item actions
    OpenAdd,
    OpenEdit,
    OpenDelete,

    // Add/edit form
    NextField,
    PrevField,
    Save,
    CancelForm,

    // Delete confirmation
    ConfirmDelete,
    CancelDelete,

    // Popups
    DismissAlert,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    screen: Screen,
    mode: &Mode,
    input_mode: InputMode,
    alert_open: bool,
    show_help: bool,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if screen == Screen::Splash {
        return None;
    }

    // Blocking popups swallow every key
    if alert_open {
        return Some(UiEvent::DismissAlert);
    }
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match mode {
        Mode::Viewing => match input_mode {
            InputMode::Normal => handle_list_keys(key),
            InputMode::Editing => handle_text_keys(key).or(match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopSearch),
                _ => None,
            }),
        },
        Mode::ModalAdd | Mode::ModalEdit { .. } => match key.code {
            KeyCode::Esc => Some(UiEvent::CancelForm),
            KeyCode::Enter => Some(UiEvent::Save),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::PrevField),
            _ => handle_text_keys(key),
        },
        Mode::ModalDeleteConfirm { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(UiEvent::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => Some(UiEvent::CancelDelete),
            _ => None,
        },
    }
}

/// Keys for the catalog list
fn handle_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('/') => Some(UiEvent::StartSearch),
        KeyCode::Char('a') => Some(UiEvent::OpenAdd),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::OpenEdit),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::OpenDelete),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        _ => None,
    }
}

/// Keys shared by every text input
fn handle_text_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn viewing(code: KeyCode) -> Option<UiEvent> {
        key_to_ui_event(press(code), Screen::Catalog, &Mode::Viewing, InputMode::Normal, false, false)
    }

    #[test]
    fn test_splash_ignores_keys_but_quits() {
        let mode = Mode::Viewing;
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('a')), Screen::Splash, &mode, InputMode::Normal, false, false),
            None
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(ctrl_c, Screen::Splash, &mode, InputMode::Normal, false, false),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(viewing(KeyCode::Char('a')), Some(UiEvent::OpenAdd));
        assert_eq!(viewing(KeyCode::Enter), Some(UiEvent::OpenEdit));
        assert_eq!(viewing(KeyCode::Char('d')), Some(UiEvent::OpenDelete));
        assert_eq!(viewing(KeyCode::Char('/')), Some(UiEvent::StartSearch));
        assert_eq!(viewing(KeyCode::Down), Some(UiEvent::SelectNext));
        assert_eq!(viewing(KeyCode::Char('q')), Some(UiEvent::Quit));
    }

    #[test]
    fn test_search_editing_types_letters() {
        let ev = key_to_ui_event(
            press(KeyCode::Char('q')),
            Screen::Catalog,
            &Mode::Viewing,
            InputMode::Editing,
            false,
            false,
        );
        assert_eq!(ev, Some(UiEvent::CharInput('q')));
        let ev = key_to_ui_event(press(KeyCode::Esc), Screen::Catalog, &Mode::Viewing, InputMode::Editing, false, false);
        assert_eq!(ev, Some(UiEvent::StopSearch));
    }

    #[test]
    fn test_form_keys() {
        let mode = Mode::ModalEdit { item_id: 3 };
        let map = |code| key_to_ui_event(press(code), Screen::Catalog, &mode, InputMode::Normal, false, false);
        assert_eq!(map(KeyCode::Enter), Some(UiEvent::Save));
        assert_eq!(map(KeyCode::Esc), Some(UiEvent::CancelForm));
        assert_eq!(map(KeyCode::Tab), Some(UiEvent::NextField));
        assert_eq!(map(KeyCode::BackTab), Some(UiEvent::PrevField));
        assert_eq!(map(KeyCode::Char('d')), Some(UiEvent::CharInput('d')));
    }

    #[test]
    fn test_alert_swallows_keys() {
        let ev = key_to_ui_event(
            press(KeyCode::Char('a')),
            Screen::Catalog,
            &Mode::ModalAdd,
            InputMode::Normal,
            true,
            false,
        );
        assert_eq!(ev, Some(UiEvent::DismissAlert));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        for code in [KeyCode::Char('a'), KeyCode::Char('q'), KeyCode::Enter, KeyCode::Esc] {
            let ev = key_to_ui_event(press(code), Screen::Catalog, &Mode::Viewing, InputMode::Normal, false, true);
            assert_eq!(ev, Some(UiEvent::CloseHelp));
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(
            key_to_ui_event(key, Screen::Catalog, &Mode::Viewing, InputMode::Normal, false, false),
            None
        );
    }
}
