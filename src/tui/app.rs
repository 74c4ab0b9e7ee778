//! TUI application state and event handling

use crate::client::ScanClient;
use crate::config::Settings;
use crate::domain;
use crate::error::{Result, SubscoutError};
use crate::models::ScanRequest;
use crate::session::{ResultFilter, ScanSession};
use crate::tui::events::{AppEvent, EventHandler, KeyAction, ScanOutcome};
use crate::tui::widgets::{
    input::InputState,
    notify::{NotificationKind, Notifications},
    results::ResultsState,
    status::LoadingSpinner,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Which element owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Domain,
    Threads,
    Timeout,
    Search,
    StatusCode,
    Results,
}

impl Focus {
    /// Whether this focus target is a text-entry field
    pub fn is_input(self) -> bool {
        !matches!(self, Focus::Results)
    }
}

/// Main application struct
pub struct App {
    pub focus: Focus,
    /// Submission guard: true from request dispatch until the outcome
    /// arrives. A second submission while set is silently ignored.
    pub scanning: bool,

    // Scan form
    pub domain_input: InputState,
    pub threads_input: InputState,
    pub timeout_input: InputState,

    // Filter bar
    pub search_input: InputState,
    pub status_input: InputState,

    // Session state and view state
    pub session: ScanSession,
    pub results_state: ResultsState,

    pub notifications: Notifications,
    pub spinner: LoadingSpinner,
    pub should_quit: bool,

    client: ScanClient,
    default_threads: u32,
    default_timeout: u64,
    export_dir: PathBuf,
    export_prefix: String,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = ScanClient::new(
            &settings.service.endpoint,
            settings.service.request_timeout(),
        )?;

        Ok(Self {
            focus: Focus::Domain,
            scanning: false,
            domain_input: InputState::new("Domain").with_placeholder("example.com"),
            threads_input: InputState::new("Threads")
                .with_default(&settings.scan.threads.to_string()),
            timeout_input: InputState::new("Timeout (s)")
                .with_default(&settings.scan.timeout_secs.to_string()),
            search_input: InputState::new("Search").with_placeholder("subdomain or title"),
            status_input: InputState::new("Status").with_placeholder("e.g. 200"),
            session: ScanSession::new(),
            results_state: ResultsState::default(),
            notifications: Notifications::new(settings.console.notification_lifetime()),
            spinner: LoadingSpinner::new("Scanning..."),
            should_quit: false,
            client,
            default_threads: settings.scan.threads,
            default_timeout: settings.scan.timeout_secs,
            export_dir: PathBuf::from("."),
            export_prefix: settings.console.export_prefix.clone(),
        })
    }

    /// Check if the app is in a mode where text entry is expected
    pub fn is_input_mode(&self) -> bool {
        self.focus.is_input()
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, action: KeyAction, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Domain | Focus::Threads | Focus::Timeout => {
                self.handle_form_key(action, event_tx)
            }
            Focus::Search | Focus::StatusCode => self.handle_filter_key(action),
            Focus::Results => self.handle_results_key(action, event_tx),
        }
    }

    fn handle_form_key(&mut self, action: KeyAction, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        match action {
            KeyAction::Back => {
                self.should_quit = true;
            }
            KeyAction::Enter => self.start_scan(event_tx),
            KeyAction::Tab | KeyAction::Down => self.focus_next(),
            KeyAction::BackTab | KeyAction::Up => self.focus_previous(),
            _ => {
                let numeric = !matches!(self.focus, Focus::Domain);
                let input = self.focused_input_mut();
                apply_edit(input, action, numeric);
            }
        }
    }

    fn handle_filter_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Back | KeyAction::Enter => {
                self.focus = Focus::Results;
            }
            KeyAction::Tab | KeyAction::Down => self.focus_next(),
            KeyAction::BackTab | KeyAction::Up => self.focus_previous(),
            _ => {
                let numeric = self.focus == Focus::StatusCode;
                let input = self.focused_input_mut();
                let before = input.value.clone();
                apply_edit(input, action, numeric);
                if input.value != before {
                    // Live filtering: every edit recomputes the view from
                    // the full result set.
                    self.apply_filter();
                }
            }
        }
    }

    fn handle_results_key(&mut self, action: KeyAction, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        let len = self.session.filtered().len();
        match action {
            KeyAction::Back => {
                self.should_quit = true;
            }
            KeyAction::Up => self.results_state.previous(len),
            KeyAction::Down => self.results_state.next(len),
            KeyAction::PageUp => self.results_state.page_up(len),
            KeyAction::PageDown => self.results_state.page_down(len),
            KeyAction::Tab => self.focus_next(),
            KeyAction::BackTab => self.focus_previous(),
            KeyAction::Char('s') => self.cycle_sort(),
            KeyAction::Char('e') => self.export_results(),
            KeyAction::Char('/') => {
                self.focus = Focus::Search;
            }
            KeyAction::Enter => {
                // Re-run the scan with the current form as-is.
                self.start_scan(event_tx);
            }
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Domain => Focus::Threads,
            Focus::Threads => Focus::Timeout,
            Focus::Timeout => {
                if self.session.has_results() {
                    Focus::Search
                } else {
                    Focus::Domain
                }
            }
            Focus::Search => Focus::StatusCode,
            Focus::StatusCode => Focus::Results,
            Focus::Results => Focus::Domain,
        };
    }

    fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::Domain => {
                if self.session.has_results() {
                    Focus::Results
                } else {
                    Focus::Timeout
                }
            }
            Focus::Threads => Focus::Domain,
            Focus::Timeout => Focus::Threads,
            Focus::Search => Focus::Timeout,
            Focus::StatusCode => Focus::Search,
            Focus::Results => Focus::StatusCode,
        };
    }

    fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focus {
            Focus::Domain => &mut self.domain_input,
            Focus::Threads => &mut self.threads_input,
            Focus::Timeout => &mut self.timeout_input,
            Focus::Search => &mut self.search_input,
            Focus::StatusCode => &mut self.status_input,
            Focus::Results => unreachable!("results focus has no input"),
        }
    }

    /// Validate the form and dispatch the scan request. Validation
    /// failures surface as notifications and never reach the network.
    pub fn start_scan(&mut self, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        if self.scanning {
            return;
        }

        if self.domain_input.value.trim().is_empty() {
            self.domain_input.set_error("required");
            self.notifications
                .push("Please enter a domain", NotificationKind::Error);
            return;
        }

        let domain = match domain::parse_target(&self.domain_input.value) {
            Ok(domain) => domain,
            Err(_) => {
                self.domain_input.set_error("invalid");
                self.notifications
                    .push("Please enter a valid domain", NotificationKind::Error);
                return;
            }
        };

        let threads = self
            .threads_input
            .value
            .trim()
            .parse()
            .unwrap_or(self.default_threads);
        let timeout = self
            .timeout_input
            .value
            .trim()
            .parse()
            .unwrap_or(self.default_timeout);

        let request = ScanRequest::new(&domain, threads, timeout);

        self.scanning = true;
        self.spinner = LoadingSpinner::new(&format!("Scanning {}...", domain));

        let client = self.client.clone();
        let tx = event_tx.clone();

        tokio::spawn(async move {
            let result = client.scan(&request).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::ScanComplete(Box::new(ScanOutcome {
                domain: request.domain,
                result,
            })));
        });
    }

    /// Handle scan completion. A failed scan leaves the previous result
    /// set untouched.
    pub fn handle_scan_complete(&mut self, outcome: ScanOutcome) {
        self.scanning = false;

        match outcome.result {
            Ok(response) => {
                let found = response.found_count;
                self.session.load(response);
                self.search_input.clear();
                self.status_input.clear();
                self.results_state.reset();
                self.focus = Focus::Results;

                if found > 0 {
                    self.notifications.push(
                        &format!("Found {} active subdomains", found),
                        NotificationKind::Success,
                    );
                } else {
                    self.notifications.push(
                        "No active subdomains found with current wordlist",
                        NotificationKind::Info,
                    );
                }
            }
            Err(error) => {
                tracing::warn!(domain = %outcome.domain, %error, "scan failed");
                self.notifications
                    .push("Scan failed. Please try again.", NotificationKind::Error);
            }
        }
    }

    /// Rebuild the filtered view from the filter bar inputs
    fn apply_filter(&mut self) {
        let filter = ResultFilter {
            search: self.search_input.value.clone(),
            status_code: self.status_input.value.trim().parse().ok(),
        };
        self.session.apply_filter(filter);
        self.results_state.reset();
    }

    /// Advance the sort cycle on the filtered view
    fn cycle_sort(&mut self) {
        let key = self.session.cycle_sort();
        self.results_state.reset();
        self.notifications.push(
            &format!("Sorted by {}", key.label()),
            NotificationKind::Info,
        );
    }

    /// Export the filtered view as CSV next to the console
    fn export_results(&mut self) {
        if self.session.filtered().is_empty() {
            self.notifications
                .push("No results to export", NotificationKind::Error);
            return;
        }

        match crate::export::export_csv(
            self.session.filtered(),
            &self.export_dir,
            &self.export_prefix,
        ) {
            Ok(path) => self.notifications.push(
                &format!(
                    "Exported {} results to {}",
                    self.session.filtered().len(),
                    path.display()
                ),
                NotificationKind::Success,
            ),
            Err(e) => self
                .notifications
                .push(&e.to_string(), NotificationKind::Error),
        }
    }

    /// Tick for animations and notification expiry
    pub fn tick(&mut self) {
        if self.scanning {
            self.spinner.tick();
        }
        self.notifications.prune();
    }
}

/// Apply a text-editing action to an input field. Numeric fields only
/// accept digits.
fn apply_edit(input: &mut InputState, action: KeyAction, numeric: bool) {
    match action {
        KeyAction::Char(c) => {
            if !numeric || c.is_ascii_digit() {
                input.insert(c);
            }
        }
        KeyAction::Backspace => input.delete_backward(),
        KeyAction::Delete => input.delete_forward(),
        KeyAction::Left => input.move_left(),
        KeyAction::Right => input.move_right(),
        KeyAction::Home => input.move_home(),
        KeyAction::End => input.move_end(),
        _ => {}
    }
}

/// TUI runner that manages the terminal and event loop
pub struct TuiRunner {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
    app: App,
}

impl TuiRunner {
    /// Create a new TUI runner, optionally seeding the scan form with a
    /// target carried over from the command line.
    pub fn new(settings: &Settings, initial_domain: Option<&str>) -> Result<Self> {
        enable_raw_mode().map_err(|e| SubscoutError::Other(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| SubscoutError::Other(e.to_string()))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| SubscoutError::Other(e.to_string()))?;

        let events = EventHandler::new(Duration::from_millis(100));
        let mut app = App::new(settings)?;
        if let Some(domain) = initial_domain {
            app.domain_input = InputState::new("Domain").with_default(domain);
        }

        Ok(Self {
            terminal,
            events,
            app,
        })
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        let event_tx = self.events.sender();

        loop {
            self.terminal
                .draw(|f| crate::tui::ui::draw(f, &mut self.app))
                .map_err(|e| SubscoutError::Other(e.to_string()))?;

            if let Some(event) = self.events.next().await {
                match event {
                    AppEvent::Key(key) => {
                        let action = if self.app.is_input_mode() {
                            KeyAction::from_input(key)
                        } else {
                            KeyAction::from_navigation(key)
                        };
                        self.app.handle_key(action, &event_tx);
                    }
                    AppEvent::Tick => {
                        self.app.tick();
                    }
                    AppEvent::ScanComplete(outcome) => {
                        self.app.handle_scan_complete(*outcome);
                    }
                    AppEvent::Resize(_, _) => {
                        // Terminal handles resize automatically
                    }
                }
            }

            if self.app.should_quit {
                break;
            }
        }

        Ok(())
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
