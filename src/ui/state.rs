// Application state management

use crate::data::{Lookup, Report, SalesMetric, SalesTable, Selection};
use crate::ui::focus::Focus;
use crate::ui::help::HelpModalState;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal, // Navigation - global shortcuts active
    Editing, // Item code input - characters go to the text buffer
}

/// Multi-choice filter. `selected` keeps the order values were picked in.
#[derive(Debug, Clone, Default)]
pub struct MultiSelect {
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub list_state: ListState,
}

impl MultiSelect {
    /// Every option starts selected.
    pub fn new(options: Vec<String>) -> Self {
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            selected: options.clone(),
            options,
            list_state,
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn move_up(&mut self) {
        if let Some(i) = self.cursor() {
            if i > 0 {
                self.list_state.select(Some(i - 1));
            }
        }
    }

    pub fn move_down(&mut self) {
        if let Some(i) = self.cursor() {
            if i + 1 < self.options.len() {
                self.list_state.select(Some(i + 1));
            }
        }
    }

    /// Selecting appends to the end, deselecting removes.
    pub fn toggle(&mut self, option: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(pos);
        } else if self.options.iter().any(|o| o == option) {
            self.selected.push(option.to_string());
        }
    }

    pub fn toggle_cursor(&mut self) {
        if let Some(option) = self.cursor().and_then(|i| self.options.get(i)).cloned() {
            self.toggle(&option);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.options.clone();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Single-line text buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let idx = self.byte_index(self.cursor - 1);
            self.value.remove(idx);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.char_len();
    }

    /// Slice of the value that fits `width` columns with the cursor in view,
    /// plus the cursor column inside that slice.
    pub fn visible(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let offset = self.cursor.saturating_sub(width - 1);
        let text = self.value.chars().skip(offset).take(width).collect();
        (text, self.cursor - offset)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub table: SalesTable,
    pub clusters: MultiSelect,
    pub item_types: MultiSelect,
    pub metric: SalesMetric,

    // Item lookup: `item_code` is the edit buffer, `lookup_query` the committed value
    pub item_code: TextInput,
    pub lookup_query: Option<String>,

    pub focus: Focus,
    pub input_mode: InputMode,

    // Lookup + interpretation panel scrolling
    pub notes_scroll: u16,
    pub notes_max_scroll: u16,

    pub help_modal: Option<HelpModalState>,
    pub data_path: Option<String>,
    pub app_version: String,
}

impl AppState {
    pub fn new(table: SalesTable, metric: SalesMetric) -> Self {
        let clusters = MultiSelect::new(table.cluster_options());
        let item_types = MultiSelect::new(table.item_type_options());

        Self {
            table,
            clusters,
            item_types,
            metric,
            item_code: TextInput::default(),
            lookup_query: None,
            focus: Focus::default(),
            input_mode: InputMode::default(),
            notes_scroll: 0,
            notes_max_scroll: 0,
            help_modal: None, // Opened when 'H' key is pressed
            data_path: None,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            clusters: self.clusters.selected.clone(),
            item_types: self.item_types.selected.clone(),
        }
    }

    /// Full recompute of every panel from the current widget values
    pub fn report(&self) -> Report {
        let selection = self.selection();
        Report::build(&self.table.filter(&selection), &selection, self.metric)
    }

    pub fn lookup(&self) -> Option<Lookup> {
        self.lookup_query
            .as_deref()
            .and_then(|query| self.table.lookup(query))
    }

    /// Commit the edit buffer as the lookup query. Empty means no lookup.
    pub fn commit_lookup(&mut self) {
        self.lookup_query = if self.item_code.value.is_empty() {
            None
        } else {
            Some(self.item_code.value.clone())
        };
        self.notes_scroll = 0;
        tracing::debug!(query = ?self.lookup_query, "lookup query committed");
    }

    pub fn scroll_notes_up(&mut self) {
        self.notes_scroll = self.notes_scroll.saturating_sub(1);
    }

    pub fn scroll_notes_down(&mut self) {
        if self.notes_scroll < self.notes_max_scroll {
            self.notes_scroll += 1;
        }
    }
}
