//! Stats row and result-card list widgets

use crate::models::ScanResult;
use crate::session::{ScanStats, SortKey};
use crate::output::format_bytes;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Scroll/selection state for the results list
#[derive(Debug, Default)]
pub struct ResultsState {
    pub list_state: ListState,
}

impl ResultsState {
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn page_down(&mut self, len: usize) {
        for _ in 0..5 {
            self.next(len);
        }
    }

    pub fn page_up(&mut self, len: usize) {
        for _ in 0..5 {
            self.previous(len);
        }
    }
}

/// Colour for a status-code badge
fn status_color(status_code: u16) -> Color {
    match status_code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Render the aggregate counters as a four-tile row
pub fn render_stats(area: Rect, buf: &mut Buffer, stats: &ScanStats) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let values = [
        ("Wordlist", stats.wordlist_size.to_string()),
        ("Checked", stats.total_checked.to_string()),
        ("Found", stats.found_count.to_string()),
        ("Success rate", stats.success_rate_display()),
    ];

    for (tile, (label, value)) in tiles.iter().zip(values) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::DarkGray),
            ));

        let inner = block.inner(*tile);
        block.render(*tile, buf);

        let line = Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(line).render(inner, buf);
    }
}

/// Build the card lines for one result
fn result_item(result: &ScanResult) -> ListItem<'static> {
    let color = status_color(result.status_code);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            result.subdomain.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", result.status_code),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])];

    lines.push(Line::from(Span::styled(
        format!("  {}", result.effective_url()),
        Style::default().fg(Color::DarkGray),
    )));

    let response_time = result
        .response_time_ms()
        .map(|ms| format!("{}ms", ms))
        .unwrap_or_else(|| "N/A".to_string());
    let size = result
        .content_length
        .map(format_bytes)
        .unwrap_or_else(|| "N/A".to_string());

    lines.push(Line::from(vec![
        Span::styled(format!("  {}", response_time), Style::default().fg(Color::Gray)),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled(size, Style::default().fg(Color::Gray)),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled(result.server.clone(), Style::default().fg(Color::Gray)),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            result.content_type_display().to_string(),
            Style::default().fg(Color::Gray),
        ),
    ]));

    lines.push(Line::from(Span::styled(
        format!("  {}", result.title),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));

    if let Some(ref ssl) = result.ssl_info {
        let subject = ssl
            .subject
            .as_ref()
            .and_then(|s| s.common_name.as_deref())
            .unwrap_or("N/A");
        let issuer = ssl
            .issuer
            .as_ref()
            .and_then(|i| i.organization_name.as_deref())
            .unwrap_or("N/A");
        let expires = ssl.not_after.as_deref().unwrap_or("N/A");

        lines.push(Line::from(vec![
            Span::styled("  TLS ", Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("{} · issued by {}, expires {}", subject, issuer, expires),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    lines.push(Line::from(""));

    ListItem::new(lines)
}

/// Render the filtered view as a scrollable card list
pub fn render_results_list(
    area: Rect,
    buf: &mut Buffer,
    results: &[ScanResult],
    sort: SortKey,
    state: &mut ResultsState,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let title = format!(
        " {} active subdomains found · sorted by {} ",
        results.len(),
        sort.label()
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            title,
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ));

    if results.is_empty() {
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No results match your criteria",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Try adjusting your filters or scanning a different domain.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = results.iter().map(result_item).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(24, 34, 44)));

    StatefulWidget::render(list, area, buf, &mut state.list_state);
}
