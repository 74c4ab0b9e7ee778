//! Input widget for text entry

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Input field state
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input value
    pub value: String,
    /// Cursor position
    pub cursor: usize,
    /// Prompt text
    pub prompt: String,
    /// Placeholder text
    pub placeholder: String,
    /// Error message if any
    pub error: Option<String>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            prompt: "Enter value".to_string(),
            placeholder: String::new(),
            error: None,
        }
    }
}

impl InputState {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            ..Default::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_default(mut self, default: &str) -> Self {
        self.value = default.to_string();
        self.cursor = default.len();
        self
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        self.error = None;
    }

    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
            self.error = None;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
            self.error = None;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.error = None;
    }

    pub fn set_error(&mut self, error: &str) {
        self.error = Some(error.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Render an input field into the given area, drawing the cursor when
/// focused.
pub fn render_input(area: Rect, buf: &mut Buffer, state: &InputState, focused: bool) {
    let value_style = if state.value.is_empty() && !state.placeholder.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![];

    if focused && !state.value.is_empty() {
        let (before, after) = state.value.split_at(state.cursor);
        let (cursor_char, rest) = if after.is_empty() {
            (" ", "")
        } else {
            after.split_at(1)
        };

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char,
            Style::default().bg(Color::White).fg(Color::Black),
        ));
        spans.push(Span::styled(rest, value_style));
    } else if focused && state.value.is_empty() {
        spans.push(Span::styled(
            " ",
            Style::default().bg(Color::White).fg(Color::Black),
        ));
        if !state.placeholder.is_empty() {
            spans.push(Span::styled(
                state.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    } else if state.value.is_empty() {
        spans.push(Span::styled(state.placeholder.as_str(), value_style));
    } else {
        spans.push(Span::styled(state.value.as_str(), value_style));
    }

    let input_line = Line::from(spans);

    let border_color = if state.error.is_some() {
        Color::Red
    } else if focused {
        Color::Cyan
    } else {
        Color::Gray
    };

    let title = if let Some(ref error) = state.error {
        format!(" {} - {} ", state.prompt, error)
    } else {
        format!(" {} ", state.prompt)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            title,
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(input_line).block(block);
    paragraph.render(area, buf);
}
