// Event handling and main UI loop

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::data::SalesTable;
use crate::ui::{
    Dashboard, HelpModal,
    focus::Focus,
    help::{HelpModalState, HelpSection},
    state::{AppState, InputMode},
};

mod dashboard;
mod help;

pub fn run_ui(table: SalesTable, config: &Config, data_path: &Path) -> io::Result<()> {
    let mut app_state = AppState::new(table, config.display.metric);
    app_state.data_path = Some(data_path.display().to_string());

    tracing::info!(
        records = app_state.table.len(),
        metric = %app_state.metric,
        "starting dashboard"
    );

    // Setup terminal with alternate screen (full terminal)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app_state);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
) -> io::Result<()> {
    loop {
        draw(terminal, state)?;

        // Nothing changes without input, so block until the next event
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(key, state) {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
            _ => {
                // Resize and the rest just trigger a redraw
            }
        }
    }
}

/// Render one frame: the dashboard, then the help modal on top if open.
pub fn draw<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
) -> io::Result<()> {
    terminal.draw(|frame| {
        Dashboard::render(frame, state);

        if let Some(ref mut help_state) = state.help_modal {
            HelpModal::render(frame, help_state);
        }
    })?;
    Ok(())
}

fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply one key press. Returns true when the app should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if is_ctrl_c(&key) {
        return true;
    }

    // Check if help modal is open - handle help keys first
    if state.help_modal.is_some() {
        help::handle_help_key(key, state);
        return false;
    }

    // While editing, characters belong to the text buffer, not global shortcuts
    if state.input_mode == InputMode::Editing {
        dashboard::handle_editing_key(key, state);
        return false;
    }

    if should_quit(&key) {
        return true;
    }

    match key.code {
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
            help::open_help(state);
        }
        KeyCode::Tab => {
            state.focus = state.focus.next();
        }
        KeyCode::BackTab => {
            state.focus = state.focus.previous();
        }
        _ => dashboard::handle_dashboard_key(key, state),
    }

    false
}
