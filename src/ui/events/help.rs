use super::*;

pub(super) fn open_help(state: &mut AppState) {
    state.help_modal = Some(HelpModalState {
        current_section: HelpSection::About,
        scroll_offset: 0,
        max_scroll: 0,
        app_version: state.app_version.clone(),
        data_path: state.data_path.clone(),
        record_count: state.table.len(),
        cluster_count: state.clusters.options.len(),
        item_type_count: state.item_types.options.len(),
    });
}

pub(super) fn handle_help_key(key: KeyEvent, state: &mut AppState) {
    if let Some(ref mut help_state) = state.help_modal {
        match key.code {
            // Close help
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                state.help_modal = None;
            }
            // Next section
            KeyCode::Tab | KeyCode::Right => {
                help_state.current_section = help_state.current_section.next();
                help_state.scroll_offset = 0; // Reset scroll when changing sections
            }
            // Previous section
            KeyCode::BackTab | KeyCode::Left => {
                help_state.current_section = help_state.current_section.previous();
                help_state.scroll_offset = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                help_state.scroll_offset = help_state.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                help_state.scroll_offset = help_state
                    .scroll_offset
                    .saturating_add(1)
                    .min(help_state.max_scroll);
            }
            KeyCode::PageUp => {
                help_state.scroll_offset = help_state.scroll_offset.saturating_sub(10);
            }
            KeyCode::PageDown => {
                help_state.scroll_offset = help_state
                    .scroll_offset
                    .saturating_add(10)
                    .min(help_state.max_scroll);
            }
            KeyCode::Home => {
                help_state.scroll_offset = 0;
            }
            KeyCode::End => {
                help_state.scroll_offset = help_state.max_scroll;
            }
            _ => {}
        }
    }
}
