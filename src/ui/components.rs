// Reusable UI components

use crate::ui::focus::Focus;
use crate::ui::state::InputMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn from_controls(prefix: String, controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw(prefix)];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn dashboard(focus: Focus, input_mode: InputMode, rows: usize, total: usize) -> Self {
        let prefix = format!("Rows: {}/{}  |  ", rows, total);

        if input_mode == InputMode::Editing {
            return Self::from_controls(
                prefix,
                &[("[Enter]", "Look up"), ("[Esc]", "Cancel"), ("[←/→]", "Move")],
            );
        }

        let panel_controls: &[(&'static str, &'static str)] = match focus {
            Focus::ClusterFilter | Focus::ItemTypeFilter => &[
                ("[↑/↓]", "Navigate"),
                ("[Space]", "Toggle"),
                ("[A]", "All"),
                ("[N]", "None"),
            ],
            Focus::MetricSelect => &[("[←/→]", "Switch metric")],
            Focus::ItemCodeInput => &[("[Enter]", "Edit item code")],
            Focus::Interpretation => &[("[↑/↓]", "Scroll")],
        };

        let mut controls: Vec<(&'static str, &'static str)> = panel_controls.to_vec();
        controls.extend([("[Tab]", "Next"), ("[H]", "Help"), ("[Q]", "Quit")]);

        Self::from_controls(prefix, &controls)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

/// Bordered block whose border lights up when the panel has focus
pub fn panel_block(title: impl Into<Line<'static>>, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title: Line<'static> = title.into();

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

pub fn checkbox_line(label: &str, checked: bool) -> Line<'static> {
    let symbol = if checked { "[x]" } else { "[ ]" };
    let symbol_style = if checked {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(symbol, symbol_style),
        Span::raw(" "),
        Span::raw(label.to_string()),
    ])
}

/// Coloured square followed by a label, for chart legends
pub fn legend_entry(label: &str, color: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::raw(label.to_string()),
        Span::raw("  "),
    ]
}
