// Dashboard screen implementation

use crate::data::{Lookup, Report, short_label_for};
use crate::summary::{FOUND_MESSAGE, NOT_FOUND_MESSAGE, format_value};
use crate::ui::components::{Footer, checkbox_line, legend_entry, panel_block};
use crate::ui::constants::*;
use crate::ui::focus::Focus;
use crate::ui::state::{AppState, InputMode, MultiSelect};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List, ListItem,
        Paragraph, Widget, Wrap,
    },
};

mod sections;

pub struct Dashboard;

impl Dashboard {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        // One full recompute per render pass
        let report = state.report();
        let lookup = state.lookup();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title + intro
                Constraint::Min(0),    // Sidebar + panels
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_title(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        Self::render_sidebar(frame, body[0], state);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // KPI row
                Constraint::Percentage(50), // Profile + item mix
                Constraint::Min(0),         // Trend + notes
            ])
            .split(body[1]);

        Self::render_kpis(frame, main[0], &report);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main[1]);
        Self::render_cluster_profile(frame, top[0], &report, &state.clusters.options);
        Self::render_item_mix(
            frame,
            top[1],
            &report,
            &state.clusters.options,
            &state.item_types.options,
        );

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main[2]);
        Self::render_monthly_trend(frame, bottom[0], &report, &state.clusters.options);
        Self::render_notes(frame, bottom[1], state, &report, lookup.as_ref());

        Footer::dashboard(state.focus, state.input_mode, report.rows, state.table.len())
            .render(chunks[2], frame.buffer_mut());
    }

    fn render_title(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(DASHBOARD_TITLE)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).bold());

        let intro: Vec<Line> = INTRO_LINES
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Gray))))
            .collect();

        let paragraph = Paragraph::new(intro)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
