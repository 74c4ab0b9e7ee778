//! Main UI rendering
//!
//! One reactive draw pass over the application state; nothing on screen
//! moves except through state transitions and tick events.

use crate::tui::app::{App, Focus};
use crate::tui::widgets::{
    input::render_input,
    notify::render_notifications,
    results::{render_results_list, render_stats},
    status::{HeaderBar, LoadingSpinner, StatusBar, StatusMode},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Min(10),    // Content
            Constraint::Length(2),  // Status bar
        ])
        .split(size);

    // Header shows the session target once one exists
    let header = if app.session.has_results() || app.scanning {
        HeaderBar::new("subscout", VERSION).with_domain(app.session.domain())
    } else {
        HeaderBar::new("subscout", VERSION)
    };
    f.render_widget(header, chunks[0]);

    render_content(f, chunks[1], app);

    // Status bar reflects where input currently goes
    let status_mode = if app.scanning {
        StatusMode::Scanning
    } else {
        match app.focus {
            Focus::Domain | Focus::Threads | Focus::Timeout => StatusMode::Form,
            Focus::Search | Focus::StatusCode => StatusMode::Filter,
            Focus::Results => StatusMode::Results,
        }
    };

    let status = if app.session.filter().is_empty() {
        StatusBar::new(status_mode)
    } else {
        StatusBar::new(status_mode).with_message("filter active")
    };
    f.render_widget(status, chunks[2]);

    // Toasts render last so they overlay everything else
    render_notifications(size, f.buffer_mut(), &app.notifications);
}

fn render_content(f: &mut Frame, area: Rect, app: &mut App) {
    let mut constraints = vec![Constraint::Length(3)]; // Scan form
    if app.scanning {
        constraints.push(Constraint::Length(3)); // Scanning banner
    }
    if app.session.has_results() {
        constraints.push(Constraint::Length(3)); // Stats
        constraints.push(Constraint::Length(3)); // Filter bar
    }
    constraints.push(Constraint::Min(5)); // Results / idle panel

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut row = 0;

    render_form(f, rows[row], app);
    row += 1;

    if app.scanning {
        render_scanning_banner(f, rows[row], &app.spinner);
        row += 1;
    }

    if app.session.has_results() {
        render_stats(rows[row], f.buffer_mut(), &app.session.stats());
        row += 1;

        render_filter_bar(f, rows[row], app);
        row += 1;

        render_results_list(
            rows[row],
            f.buffer_mut(),
            app.session.filtered(),
            app.session.sort_key(),
            &mut app.results_state,
            app.focus == Focus::Results,
        );
    } else {
        render_idle_panel(f, rows[row]);
    }
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_input(
        fields[0],
        f.buffer_mut(),
        &app.domain_input,
        app.focus == Focus::Domain,
    );
    render_input(
        fields[1],
        f.buffer_mut(),
        &app.threads_input,
        app.focus == Focus::Threads,
    );
    render_input(
        fields[2],
        f.buffer_mut(),
        &app.timeout_input,
        app.focus == Focus::Timeout,
    );
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_input(
        fields[0],
        f.buffer_mut(),
        &app.search_input,
        app.focus == Focus::Search,
    );
    render_input(
        fields[1],
        f.buffer_mut(),
        &app.status_input,
        app.focus == Focus::StatusCode,
    );
}

fn render_scanning_banner(f: &mut Frame, area: Rect, spinner: &LoadingSpinner) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", spinner.current_frame()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(spinner.message(), Style::default().fg(Color::White)),
    ]);

    f.render_widget(Paragraph::new(line), inner);
}

fn render_idle_panel(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Enter a domain and press Enter to start a scan.",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Results appear here with filtering, sorting, and CSV export.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
