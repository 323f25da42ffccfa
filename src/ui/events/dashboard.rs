use super::*;

pub(super) fn handle_dashboard_key(key: KeyEvent, state: &mut AppState) {
    match state.focus {
        Focus::ClusterFilter | Focus::ItemTypeFilter => handle_filter_key(key, state),
        Focus::MetricSelect => {
            if matches!(
                key.code,
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter
            ) {
                state.metric = state.metric.toggle();
                tracing::debug!(metric = %state.metric, "trend metric changed");
            }
        }
        Focus::ItemCodeInput => {
            if key.code == KeyCode::Enter {
                state.input_mode = InputMode::Editing;
                state.item_code.end();
            }
        }
        Focus::Interpretation => match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.scroll_notes_up(),
            KeyCode::Down | KeyCode::Char('j') => state.scroll_notes_down(),
            KeyCode::PageUp => {
                state.notes_scroll = state.notes_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                state.notes_scroll = state
                    .notes_scroll
                    .saturating_add(10)
                    .min(state.notes_max_scroll);
            }
            KeyCode::Home => state.notes_scroll = 0,
            KeyCode::End => state.notes_scroll = state.notes_max_scroll,
            _ => {}
        },
    }
}

fn handle_filter_key(key: KeyEvent, state: &mut AppState) {
    let select = if state.focus == Focus::ClusterFilter {
        &mut state.clusters
    } else {
        &mut state.item_types
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => select.move_up(),
        KeyCode::Down | KeyCode::Char('j') => select.move_down(),
        KeyCode::Home => {
            if !select.options.is_empty() {
                select.list_state.select(Some(0));
            }
        }
        KeyCode::End => {
            if !select.options.is_empty() {
                select.list_state.select(Some(select.options.len() - 1));
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter => select.toggle_cursor(),
        KeyCode::Char('a') | KeyCode::Char('A') => select.select_all(),
        KeyCode::Char('n') | KeyCode::Char('N') => select.clear(),
        _ => return,
    }

    tracing::debug!(
        clusters = ?state.clusters.selected,
        item_types = ?state.item_types.selected,
        "filter changed"
    );
}

pub(super) fn handle_editing_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        // Commit the buffer as the lookup query
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
            state.commit_lookup();
        }
        // Drop the edit and restore the last committed value
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            let committed = state.lookup_query.clone().unwrap_or_default();
            state.item_code.set(&committed);
        }
        KeyCode::Backspace => state.item_code.backspace(),
        KeyCode::Delete => state.item_code.delete(),
        KeyCode::Left => state.item_code.left(),
        KeyCode::Right => state.item_code.right(),
        KeyCode::Home => state.item_code.home(),
        KeyCode::End => state.item_code.end(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.item_code.insert(c);
        }
        _ => {}
    }
}
