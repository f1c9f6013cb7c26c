//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    let follow_up = self.state.handle_response(response);
                    self.dispatch(follow_up);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn dispatch(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            tracing::debug!(id = ?cmd.id(), op = ?cmd.operation(), "Dispatching command");
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SplashFinished => {
                let cmd = self.state.finish_splash();
                self.dispatch(cmd);
            }

            // List navigation
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),

            // Search
            UiEvent::StartSearch => self.state.start_search(),
            UiEvent::StopSearch => self.state.stop_search(),

            // Input editing
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Item actions
            UiEvent::OpenAdd => self.state.open_add(),
            UiEvent::OpenEdit => self.state.open_edit(),
            UiEvent::OpenDelete => self.state.open_delete(),

            // Form
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::Save => {
                let cmd = self.state.save();
                self.dispatch(cmd);
            }
            UiEvent::CancelForm => self.state.cancel_form(),

            // Delete confirmation
            UiEvent::ConfirmDelete => {
                let cmd = self.state.confirm_delete();
                self.dispatch(cmd);
            }
            UiEvent::CancelDelete => self.state.cancel_delete(),

            // Popups
            UiEvent::DismissAlert => self.state.dismiss_alert(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
