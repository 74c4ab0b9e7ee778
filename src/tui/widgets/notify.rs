//! Transient notification toasts
//!
//! Notifications stack in the top-right corner, never block input, and
//! fall off on their own once their lifetime passes. Pruning happens on
//! tick events rather than free-running timers, so rendering stays a pure
//! function of state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Notification categories, each with its own visual treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::Cyan,
            NotificationKind::Warning => Color::Yellow,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
            NotificationKind::Info => "ℹ",
            NotificationKind::Warning => "⚠",
        }
    }
}

/// One transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created: Instant,
}

/// Stack of live notifications
#[derive(Debug)]
pub struct Notifications {
    items: VecDeque<Notification>,
    lifetime: Duration,
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, message: &str, kind: NotificationKind) {
        self.items.push_back(Notification {
            message: message.to_string(),
            kind,
            created: Instant::now(),
        });
    }

    /// Drop notifications older than their lifetime. Called on tick.
    pub fn prune(&mut self) {
        let lifetime = self.lifetime;
        while self
            .items
            .front()
            .is_some_and(|n| n.created.elapsed() >= lifetime)
        {
            self.items.pop_front();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn last_kind(&self) -> Option<NotificationKind> {
        self.items.back().map(|n| n.kind)
    }
}

/// Render the notification stack as overlays in the top-right corner
pub fn render_notifications(area: Rect, buf: &mut Buffer, notifications: &Notifications) {
    let width = 44.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }

    let mut y = area.y + 1;

    for notification in notifications.iter() {
        let height = 3;
        if y + height > area.y + area.height {
            break;
        }

        let x = area.x + area.width.saturating_sub(width + 1);
        let toast_area = Rect::new(x, y, width, height);

        Clear.render(toast_area, buf);

        let color = notification.kind.color();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        let inner = block.inner(toast_area);
        block.render(toast_area, buf);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", notification.kind.icon()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::White),
            ),
        ]);

        Paragraph::new(line).render(inner, buf);

        y += height;
    }
}
