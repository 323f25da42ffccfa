use super::*;

/// Width of each bar so `groups` groups of `bars_per_group` bars fit the area.
pub(super) fn bar_width_for(inner_width: u16, groups: u16, bars_per_group: u16, group_gap: u16) -> u16 {
    let groups = groups.max(1);
    let per_group = inner_width.saturating_sub(group_gap * (groups - 1)) / groups;
    (per_group / bars_per_group.max(1)).clamp(1, 12)
}

/// Bar heights are integers; keep two decimals of resolution and drop negatives.
pub(super) fn bar_height(value: Option<f64>) -> u64 {
    value
        .filter(|v| v.is_finite())
        .map(|v| (v.max(0.0) * 100.0).round() as u64)
        .unwrap_or(0)
}

fn color_for(options: &[String], label: &str) -> Color {
    series_color(options.iter().position(|o| o == label).unwrap_or(0))
}

/// Short tag for a cluster, numbered by its place in the option list.
pub(super) fn cluster_tag(options: &[String], label: &str) -> String {
    match options.iter().position(|o| o == label) {
        Some(i) => format!("C{}", i + 1),
        None => "C?".to_string(),
    }
}

fn tag_span(options: &[String], label: &str) -> Span<'static> {
    Span::styled(
        cluster_tag(options, label),
        Style::default().fg(color_for(options, label)).bold(),
    )
}

/// Tag and short name of each cluster, packed into rows no wider than `width`.
/// An entry never splits across rows.
pub(super) fn cluster_key_lines<'a>(
    options: &[String],
    clusters: impl IntoIterator<Item = &'a str>,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for cluster in clusters {
        let entry = [
            tag_span(options, cluster),
            Span::raw(" "),
            Span::raw(short_label_for(cluster).to_string()),
        ];
        let entry_width: usize = entry.iter().map(Span::width).sum();

        if !row.is_empty() {
            if used + 2 + entry_width > width as usize {
                lines.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            } else {
                row.push(Span::raw("  "));
                used += 2;
            }
        }
        row.extend(entry);
        used += entry_width;
    }

    if !row.is_empty() {
        lines.push(Line::from(row));
    }
    lines
}

fn no_data(frame: &mut Frame, area: Rect, block: Block<'static>) {
    let message = Paragraph::new(NO_DATA_MESSAGE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(message, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().bold()),
        Span::raw(value.to_string()),
    ])
}

fn bullet(text: &str) -> Line<'static> {
    Line::from(format!("- {}", text))
}

/// Lookup result followed by the interpretation of every selected cluster.
pub(super) fn notes_lines(report: &Report, lookup: Option<&Lookup>) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Item Lookup")];

    match lookup {
        None => lines.push(Line::from(Span::styled(
            "Enter an item code in the sidebar to look it up.",
            Style::default().fg(Color::DarkGray),
        ))),
        Some(Lookup::NotFound { .. }) => lines.push(Line::from(Span::styled(
            NOT_FOUND_MESSAGE,
            Style::default().fg(Color::Red).bold(),
        ))),
        Some(Lookup::Found {
            record,
            explanation,
        }) => {
            lines.push(Line::from(Span::styled(
                FOUND_MESSAGE,
                Style::default().fg(Color::Green).bold(),
            )));
            lines.push(field_line("Item Code", &record.item_code));
            lines.push(field_line("Description", &record.item_description));
            lines.push(field_line("Item Type", &record.item_type));
            lines.push(field_line("Cluster", &record.cluster));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "What this means",
                Style::default().bold(),
            )));
            lines.extend(explanation.iter().map(|l| bullet(l)));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading("Cluster Interpretation"));

    if report.interpretation.is_empty() {
        lines.push(Line::from(Span::styled(
            "No clusters selected.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for note in &report.interpretation {
        lines.push(Line::from(Span::styled(
            note.cluster.clone(),
            Style::default().fg(Color::Yellow).bold(),
        )));
        lines.extend(note.lines.iter().map(|l| bullet(l)));
        lines.push(Line::from(""));
    }

    lines
}

impl Dashboard {
    pub(super) fn render_sidebar(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let cluster_height = (state.clusters.options.len() as u16 + 2).clamp(3, 12);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(cluster_height), // Cluster filter
                Constraint::Min(3),                 // Item type filter
                Constraint::Length(3),              // Sales metric
                Constraint::Length(3),              // Item code
            ])
            .split(area);

        let focus = state.focus;
        Self::render_filter(
            frame,
            chunks[0],
            &mut state.clusters,
            Focus::ClusterFilter.title(),
            focus == Focus::ClusterFilter,
            true,
        );
        Self::render_filter(
            frame,
            chunks[1],
            &mut state.item_types,
            Focus::ItemTypeFilter.title(),
            focus == Focus::ItemTypeFilter,
            false,
        );
        Self::render_metric(frame, chunks[2], state);
        Self::render_item_code(frame, chunks[3], state);
    }

    fn render_filter(
        frame: &mut Frame,
        area: Rect,
        select: &mut MultiSelect,
        title: &str,
        focused: bool,
        tagged: bool,
    ) {
        let items: Vec<ListItem> = select
            .options
            .iter()
            .map(|o| {
                let mut line = checkbox_line(o, select.is_selected(o));
                if tagged {
                    line.spans.insert(2, tag_span(&select.options, o));
                    line.spans.insert(3, Span::raw(" "));
                }
                ListItem::new(line)
            })
            .collect();

        let title = format!(
            " {} ({}/{}) ",
            title,
            select.selected.len(),
            select.options.len()
        );

        let highlight = if focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(panel_block(title, focused))
            .highlight_style(highlight)
            .highlight_symbol(if focused { "> " } else { "  " });

        frame.render_stateful_widget(list, area, &mut select.list_state);
    }

    fn render_metric(frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::MetricSelect;
        let line = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(state.metric.column(), Style::default().fg(Color::White).bold()),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(panel_block(format!(" {} ", Focus::MetricSelect.title()), focused));
        frame.render_widget(paragraph, area);
    }

    fn render_item_code(frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::ItemCodeInput;
        let editing = focused && state.input_mode == InputMode::Editing;

        let title = if editing {
            format!(" {} (editing) ", Focus::ItemCodeInput.title())
        } else {
            format!(" {} ", Focus::ItemCodeInput.title())
        };
        let block = panel_block(title, focused);
        let inner = block.inner(area);

        let (visible, column) = state.item_code.visible(inner.width as usize);
        let text = if state.item_code.value.is_empty() && !editing {
            Span::styled(ITEM_CODE_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(visible)
        };

        frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

        if editing && inner.width > 0 {
            frame.set_cursor_position((inner.x + column as u16, inner.y));
        }
    }

    pub(super) fn render_kpis(frame: &mut Frame, area: Rect, report: &Report) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let kpis = [
            (
                "Total SKUs",
                report.kpis.distinct_items.to_string(),
                Color::White,
            ),
            (
                "Avg Retail Sales",
                format_value(report.kpis.avg_retail),
                RETAIL_COLOR,
            ),
            (
                "Avg Warehouse Sales",
                format_value(report.kpis.avg_warehouse),
                WAREHOUSE_COLOR,
            ),
        ];

        for ((label, value, color), column) in kpis.into_iter().zip(columns.iter()) {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                value,
                Style::default().fg(color).bold(),
            )))
            .alignment(Alignment::Center)
            .block(panel_block(format!(" {} ", label), false));
            frame.render_widget(paragraph, *column);
        }
    }

    pub(super) fn render_cluster_profile(
        frame: &mut Frame,
        area: Rect,
        report: &Report,
        clusters: &[String],
    ) {
        let mut title = vec![Span::raw(" Cluster Sales Profile  ")];
        title.extend(legend_entry("Retail", RETAIL_COLOR));
        title.extend(legend_entry("Warehouse", WAREHOUSE_COLOR));
        let block = panel_block(Line::from(title), false);

        if report.profile.is_empty() {
            no_data(frame, area, block);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let key = cluster_key_lines(
            clusters,
            report.profile.iter().map(|p| p.cluster.as_str()),
            inner.width,
        );
        // Drop the key rather than squeeze the bars out
        let key_rows = if key.len() as u16 <= inner.height / 2 {
            key.len() as u16
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(key_rows)])
            .split(inner);

        let group_gap = 2;
        let bar_width = bar_width_for(inner.width, report.profile.len() as u16, 2, group_gap);

        let mut chart = BarChart::default()
            .max(bar_height(Some(report.profile_max())).max(1))
            .bar_width(bar_width)
            .bar_gap(0)
            .group_gap(group_gap);

        for profile in &report.profile {
            let bars = [
                Bar::default()
                    .value(bar_height(profile.retail))
                    .text_value(format_value(profile.retail))
                    .style(Style::default().fg(RETAIL_COLOR))
                    .value_style(Style::default().fg(Color::Black).bg(RETAIL_COLOR)),
                Bar::default()
                    .value(bar_height(profile.warehouse))
                    .text_value(format_value(profile.warehouse))
                    .style(Style::default().fg(WAREHOUSE_COLOR))
                    .value_style(Style::default().fg(Color::Black).bg(WAREHOUSE_COLOR)),
            ];
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(cluster_tag(clusters, &profile.cluster)).centered())
                    .bars(&bars),
            );
        }

        frame.render_widget(chart, chunks[0]);
        if key_rows > 0 {
            frame.render_widget(Paragraph::new(key), chunks[1]);
        }
    }

    pub(super) fn render_item_mix(
        frame: &mut Frame,
        area: Rect,
        report: &Report,
        clusters: &[String],
        item_types: &[String],
    ) {
        let block = panel_block(" Item Type Contribution per Cluster ", false);

        if report.item_mix.is_empty() {
            no_data(frame, area, block);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        let bars_per_group = report
            .item_mix
            .iter()
            .map(|m| m.shares.len())
            .max()
            .unwrap_or(1) as u16;
        let group_gap = 2;

        let mut chart = BarChart::default()
            .bar_width(bar_width_for(
                inner.width,
                report.item_mix.len() as u16,
                bars_per_group,
                group_gap,
            ))
            .bar_gap(0)
            .group_gap(group_gap)
            .max(1000);

        for mix in &report.item_mix {
            let bars: Vec<Bar> = mix
                .shares
                .iter()
                .map(|s| {
                    Bar::default()
                        .value((s.share * 1000.0).round() as u64)
                        .text_value(format!("{:.0}%", s.share * 100.0))
                        .style(Style::default().fg(color_for(item_types, &s.item_type)))
                        .value_style(Style::default().fg(Color::Black))
                })
                .collect();
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(cluster_tag(clusters, &mix.cluster)).centered())
                    .bars(&bars),
            );
        }

        frame.render_widget(chart, chunks[0]);

        let legend: Vec<Span> = item_types
            .iter()
            .enumerate()
            .flat_map(|(i, t)| legend_entry(t, series_color(i)))
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(legend)).wrap(Wrap { trim: true }),
            chunks[1],
        );
    }

    pub(super) fn render_monthly_trend(
        frame: &mut Frame,
        area: Rect,
        report: &Report,
        clusters: &[String],
    ) {
        let block = panel_block(format!(" Monthly Sales Trend ({}) ", report.metric), false);

        if report.trend.is_empty() {
            no_data(frame, area, block);
            return;
        }

        let series: Vec<Vec<(f64, f64)>> = report
            .trend
            .iter()
            .map(|s| s.points.iter().map(|p| (p.month as f64, p.value)).collect())
            .collect();

        let all_points = || series.iter().flatten();
        let mut x_min = all_points().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let mut x_max = all_points().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        if x_max <= x_min {
            x_min -= 1.0;
            x_max += 1.0;
        }

        let y_min = all_points().map(|p| p.1).fold(0.0, f64::min);
        let mut y_max = all_points().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        if y_max <= y_min {
            y_max = y_min + 1.0;
        }
        let y_max = y_max + (y_max - y_min) * 0.05;

        let datasets: Vec<Dataset> = report
            .trend
            .iter()
            .zip(series.iter())
            .map(|(s, data)| {
                Dataset::default()
                    .name(cluster_tag(clusters, &s.cluster))
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(color_for(clusters, &s.cluster)))
                    .data(data)
            })
            .collect();

        let x_axis = Axis::default()
            .title("MONTH")
            .style(Style::default().fg(Color::DarkGray))
            .bounds([x_min, x_max])
            .labels(vec![
                Span::raw(format!("{:.0}", x_min)),
                Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
                Span::raw(format!("{:.0}", x_max)),
            ]);

        let y_axis = Axis::default()
            .style(Style::default().fg(Color::DarkGray))
            .bounds([y_min, y_max])
            .labels(vec![
                Span::raw(format!("{:.2}", y_min)),
                Span::raw(format!("{:.2}", (y_min + y_max) / 2.0)),
                Span::raw(format!("{:.2}", y_max)),
            ]);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .hidden_legend_constraints((Constraint::Ratio(1, 3), Constraint::Ratio(3, 4)));

        frame.render_widget(chart, area);
    }

    pub(super) fn render_notes(
        frame: &mut Frame,
        area: Rect,
        state: &mut AppState,
        report: &Report,
        lookup: Option<&Lookup>,
    ) {
        let focused = state.focus == Focus::Interpretation;
        let block = panel_block(" Item Lookup & Cluster Interpretation ", focused);
        let inner = block.inner(area);

        let paragraph = Paragraph::new(notes_lines(report, lookup)).wrap(Wrap { trim: false });

        // Bound by wrapped rows, counted before the block adds its borders
        let rows = paragraph.line_count(inner.width).min(u16::MAX as usize) as u16;
        state.notes_max_scroll = rows.saturating_sub(inner.height);
        state.notes_scroll = state.notes_scroll.min(state.notes_max_scroll);

        let paragraph = paragraph.block(block).scroll((state.notes_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
