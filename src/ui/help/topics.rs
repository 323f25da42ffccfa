// Help modal implementation

use super::navigation::{HelpModalState, HelpSection};
use crate::data::Segment;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct HelpModal;

fn header(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )])
}

fn key_line(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", keys), Style::default().fg(Color::Yellow)),
        Span::raw(format!("- {}", desc)),
    ])
}

impl HelpModal {
    pub fn render(frame: &mut Frame, state: &mut HelpModalState) {
        let area = frame.area();

        // Calculate modal size (80% width, 90% height)
        let modal_width = (area.width * 80) / 100;
        let modal_height = (area.height * 90) / 100;

        // Ensure minimum size without spilling past the terminal
        let modal_width = modal_width.max(60).min(area.width);
        let modal_height = modal_height.max(20).min(area.height);

        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        // Clear background
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!("Help - {}", state.current_section.title()))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        // Layout: tabs + content + footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Section tabs
                Constraint::Min(1),    // Content area
                Constraint::Length(1), // Footer/navigation hints
            ])
            .split(inner);

        Self::render_tabs(frame, chunks[0], state.current_section);

        let content = Self::section_content(state);
        let content_height = content.len() as u16;
        let viewport_height = chunks[1].height;

        state.max_scroll = content_height.saturating_sub(viewport_height);
        state.scroll_offset = state.scroll_offset.min(state.max_scroll);

        let visible_content: Vec<Line> = content
            .into_iter()
            .skip(state.scroll_offset as usize)
            .take(viewport_height as usize)
            .collect();

        let paragraph = Paragraph::new(visible_content)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, chunks[1]);

        Self::render_footer(frame, chunks[2], state);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, current: HelpSection) {
        let sections = HelpSection::all_sections();
        let mut spans = Vec::new();

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }

            let style = if *section == current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            spans.push(Span::styled(section.title().to_string(), style));
        }

        let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);

        frame.render_widget(tabs, area);
    }

    fn render_footer(frame: &mut Frame, area: Rect, state: &HelpModalState) {
        let mut hints = vec![
            Span::styled("[Tab/Arrows]", Style::default().fg(Color::Yellow)),
            Span::raw(" Switch  "),
            Span::styled("[↑↓/jk]", Style::default().fg(Color::Yellow)),
            Span::raw(" Scroll  "),
            Span::styled("[Esc/H]", Style::default().fg(Color::Yellow)),
            Span::raw(" Close"),
        ];

        // Add scroll indicators
        if state.scroll_offset > 0 {
            hints.insert(0, Span::styled("↑ ", Style::default().fg(Color::Cyan)));
        }
        if state.scroll_offset < state.max_scroll {
            hints.push(Span::styled(" ↓", Style::default().fg(Color::Cyan)));
        }

        let footer = Paragraph::new(Line::from(hints))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        frame.render_widget(footer, area);
    }

    pub fn section_content(state: &HelpModalState) -> Vec<Line<'static>> {
        match state.current_section {
            HelpSection::About => Self::about_content(state),
            HelpSection::Filters => Self::filters_content(),
            HelpSection::Charts => Self::charts_content(),
            HelpSection::KeyboardShortcuts => Self::keyboard_shortcuts_content(),
        }
    }

    fn about_content(state: &HelpModalState) -> Vec<Line<'static>> {
        let data_path = state
            .data_path
            .clone()
            .unwrap_or_else(|| "(unknown)".to_string());

        let mut lines = vec![
            Line::from(vec![Span::styled(
                "salesdash - Sales Segmentation Dashboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(format!("Version:    {}", state.app_version)),
            Line::from(format!("Data file:  {}", data_path)),
            Line::from(format!("Records:    {}", state.record_count)),
            Line::from(format!("Clusters:   {}", state.cluster_count)),
            Line::from(format!("Item types: {}", state.item_type_count)),
            Line::from(""),
            header("SEGMENTS"),
        ];

        for segment in Segment::ALL {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}", segment.label()),
                Style::default().fg(Color::Yellow),
            )]));
            if let Some(first) = segment.explanation().first() {
                lines.push(Line::from(format!("    {}", first)));
            }
        }

        lines
    }

    fn filters_content() -> Vec<Line<'static>> {
        vec![
            header("CLUSTER AND ITEM TYPE FILTERS"),
            Line::from("  Every option starts selected. A row is shown only when both its"),
            Line::from("  cluster and its item type are selected. Clearing either list"),
            Line::from("  empties every chart."),
            Line::from(""),
            Line::from("  Interpretation notes follow the order clusters were selected in."),
            Line::from(""),
            header("SALES TYPE"),
            Line::from("  Chooses the column plotted by the monthly trend chart:"),
            Line::from("  RETAIL SALES or WAREHOUSE SALES."),
            Line::from(""),
            header("ITEM LOOKUP"),
            Line::from("  Press Enter on the item code box, type a code and press Enter"),
            Line::from("  again. Codes match exactly as text, so leading zeros count."),
            Line::from("  Lookups search the whole dataset and ignore the filters."),
        ]
    }

    fn charts_content() -> Vec<Line<'static>> {
        vec![
            header("KPI ROW"),
            Line::from("  Total SKUs counts distinct item codes in the filtered rows."),
            Line::from("  Averages skip empty cells and show — when nothing is left."),
            Line::from(""),
            header("CLUSTER TAGS"),
            Line::from("  Charts label clusters C1, C2, ... in the order of the cluster list."),
            Line::from("  The sidebar and the profile panel key show which tag is which."),
            Line::from(""),
            header("CLUSTER SALES PROFILE"),
            Line::from("  Mean retail and warehouse sales per selected cluster."),
            Line::from(""),
            header("ITEM TYPE CONTRIBUTION"),
            Line::from("  Share of rows per item type inside each cluster."),
            Line::from("  Shares within a cluster add up to 100%."),
            Line::from(""),
            header("MONTHLY SALES TREND"),
            Line::from("  Mean of the chosen sales type per month, one line per cluster."),
            Line::from("  Months with no values for a cluster are left out."),
        ]
    }

    fn keyboard_shortcuts_content() -> Vec<Line<'static>> {
        vec![
            header("GLOBAL KEYS"),
            key_line("H / ?", "Toggle this help screen"),
            key_line("Q / Ctrl+C", "Quit application"),
            key_line("Tab", "Focus next panel"),
            key_line("Shift+Tab", "Focus previous panel"),
            Line::from(""),
            header("FILTER LISTS"),
            key_line("↑/↓  k/j", "Move cursor"),
            key_line("Space/Enter", "Toggle option"),
            key_line("A", "Select all"),
            key_line("N", "Select none"),
            Line::from(""),
            header("SALES TYPE"),
            key_line("←/→", "Switch metric"),
            Line::from(""),
            header("ITEM CODE"),
            key_line("Enter", "Start editing / look up"),
            key_line("Esc", "Cancel editing"),
            key_line("Backspace", "Delete character"),
            Line::from(""),
            header("INTERPRETATION PANEL"),
            key_line("↑/↓  k/j", "Scroll"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(section: HelpSection) -> HelpModalState {
        HelpModalState {
            current_section: section,
            scroll_offset: 0,
            max_scroll: 0,
            app_version: "0.1.0".to_string(),
            data_path: Some("sales.csv".to_string()),
            record_count: 12,
            cluster_count: 3,
            item_type_count: 2,
        }
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_about_lists_dataset_and_segments() {
        let content = text(&HelpModal::section_content(&state(HelpSection::About)));
        assert!(content.contains("Data file:  sales.csv"));
        assert!(content.contains("Records:    12"));
        assert!(content.contains("High Performing Core Products"));
    }

    #[test]
    fn test_every_section_has_content() {
        for section in HelpSection::all_sections() {
            assert!(!HelpModal::section_content(&state(section)).is_empty());
        }
    }
}
