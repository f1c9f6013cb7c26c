//! U$D Games catalog - actor-based terminal client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - catalog screen state machine
//! - Network Layer (Tokio) - async calls to the catalog service

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use usd_games_tui::constants::{API_BASE_URL, APP_SUBTITLE, APP_TITLE, LOG_FILE, SPLASH_DURATION};
use usd_games_tui::messages::ui_events::{key_to_ui_event, InputMode, Mode, Screen};
use usd_games_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use usd_games_tui::models::{CatalogItem, FormField};
use usd_games_tui::ui::{centered_fixed, centered_rect, rating_color, render_input, set_input_cursor};
use usd_games_tui::{AppActor, CatalogClient, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(base_url = API_BASE_URL, "Starting catalog client");
    let client = CatalogClient::new(API_BASE_URL)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Splash timer
    let splash_tx = ui_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(SPLASH_DURATION).await;
        let _ = splash_tx.send(UiEvent::SplashFinished);
    });

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Catalog client stopped");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.screen,
                    &current_state.mode,
                    current_state.input_mode,
                    current_state.alert.is_some(),
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    match state.screen {
        Screen::Splash => {
            draw_splash(f, area);
            return;
        }
        Screen::Catalog => draw_catalog(f, state, area),
    }

    match &state.mode {
        Mode::Viewing => {}
        Mode::ModalAdd | Mode::ModalEdit { .. } => draw_form_popup(f, state, area),
        Mode::ModalDeleteConfirm { target } => draw_delete_popup(f, target, area),
    }

    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(alert) = &state.alert {
        draw_alert_popup(f, &alert.title, &alert.message, area);
    }
}

fn draw_splash(f: &mut Frame, area: Rect) {
    let background = Block::default().style(Style::default().bg(Color::Rgb(0, 51, 102)));
    f.render_widget(background, area);

    let title_area = centered_fixed(100, 1, area);
    let title = Paragraph::new(APP_TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 51, 102)).bold());
    f.render_widget(title, title_area);
}

fn draw_catalog(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Title + subtitle
            Constraint::Length(3),  // Search box
            Constraint::Min(3),     // Items
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(APP_TITLE, Style::default().fg(Color::White).bold())),
        Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray))),
    ]);
    f.render_widget(header, chunks[0]);

    draw_search_box(f, state, chunks[1]);
    draw_item_list(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);
}

fn draw_search_box(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.mode == Mode::Viewing && state.input_mode == InputMode::Editing;

    if state.search.is_empty() && !editing {
        let placeholder = Paragraph::new(Span::styled(
            "Search game... (/)",
            Style::default().fg(Color::DarkGray),
        ))
        .block(Block::default().borders(Borders::ALL).title(" Search "));
        f.render_widget(placeholder, area);
        return;
    }

    f.render_widget(render_input(&state.search, " Search ", editing), area);
    if editing {
        set_input_cursor(f, area, &state.search, state.cursor_position);
    }
}

fn draw_item_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let loading = if state.is_loading { " [...]" } else { "" };
    let title = if state.visible_items.len() == state.total_items {
        format!(" Games ({}){} ", state.total_items, loading)
    } else {
        format!(" Games ({}/{}){} ", state.visible_items.len(), state.total_items, loading)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
        .title_bottom(Line::from(" a:add  e:edit  d:delete ").right_aligned());

    if state.visible_items.is_empty() {
        let text = if state.total_items == 0 {
            "No games in the catalog."
        } else {
            "No game matches the search."
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .visible_items
        .iter()
        .map(|item| {
            let title = Line::from(vec![
                Span::styled(item.name.clone(), Style::default().bold()),
                Span::raw("  "),
                Span::styled(
                    format!("* {}", item.rating),
                    Style::default().fg(rating_color(&item.rating)),
                ),
            ]);
            let details = Line::from(Span::styled(
                format!("  {} | {}", item.category, item.platform),
                Style::default().fg(Color::Gray),
            ));
            let image = Line::from(Span::styled(
                format!("  {}", item.image_url),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(vec![title, details, image])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        " Loading... "
    } else if state.input_mode == InputMode::Editing {
        " ESC/Enter:stop searching | arrows:move "
    } else {
        " /:search | a:add | e:edit | d:delete | ?:help | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_form_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    // Five inputs of three rows, plus hint line and borders
    let popup_area = centered_fixed(60, 18, area);

    let (title, action) = match state.mode {
        Mode::ModalEdit { .. } => (" Edit Game ", "Save"),
        _ => (" Add Game ", "Add"),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(format!(" Enter:{} | Esc:Cancel | Tab:next ", action)).right_aligned())
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, popup_area);
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 5])
        .split(inner);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        let focused = *field == state.form.focused;
        let label = format!(" {} ", field.label());
        let value = state.form.value(*field);
        f.render_widget(render_input(value, &label, focused), *row);
        if focused {
            set_input_cursor(f, *row, value, state.cursor_position);
        }
    }
}

fn draw_delete_popup(f: &mut Frame, target: &CatalogItem, area: Rect) {
    let popup_area = centered_fixed(50, 7, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Confirm Deletion ")
        .style(Style::default().bg(Color::Black));

    let text = vec![
        Line::from(""),
        Line::from(format!("Are you sure you want to delete \"{}\"?", target.name)),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: Delete    n/Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let body = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}

fn draw_alert_popup(f: &mut Frame, title: &str, message: &str, area: Rect) {
    let popup_area = centered_fixed(40, 6, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {} ", title))
        .title_bottom(Line::from(" OK ").right_aligned())
        .style(Style::default().bg(Color::Black));

    let body = Paragraph::new(vec![Line::from(""), Line::from(message.to_string())])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 U$D GAMES - Keyboard Shortcuts

 CATALOG
   ↑ / ↓  (k / j)     Select game
   /                  Search by name
   a                  Add game
   e / Enter          Edit selected game
   d / Delete         Delete selected game

 FORM
   Tab / ↓            Next field
   Shift+Tab / ↑      Previous field
   Enter              Save
   Esc                Cancel

 DELETE DIALOG
   y / Enter          Confirm
   n / Esc            Cancel

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
