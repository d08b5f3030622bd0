//! Mutually exclusive choice group.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A horizontal group of mutually exclusive options.
///
/// Exclusivity is structural: the selection is a single `Option<usize>`, so
/// at most one option can ever be active and "two options checked" cannot be
/// represented.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    label: String,
    options: Vec<String>,
    selected: Option<usize>,
}

impl RadioGroup {
    /// Creates a new group with nothing selected.
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            options,
            selected: None,
        }
    }

    /// Returns the index of the selected option, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the option at `index`. Out-of-bounds indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
    }

    /// Selects the next option, starting from the first when nothing is
    /// selected, wrapping around at the end.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % self.options.len(),
        });
    }

    /// Selects the previous option, starting from the last when nothing is
    /// selected, wrapping around at the start.
    pub fn select_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            None => len - 1,
            Some(i) => (i + len - 1) % len,
        });
    }

    /// Returns the option labels.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Renders the group as a single bordered row of `(•)` / `( )` options.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_radio_group(radio: &RadioGroup, focused: bool, frame: &mut Frame, area: Rect) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title(radio.label.clone())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans: Vec<Span> = Vec::new();
    for (i, option) in radio.options.iter().enumerate() {
        let marker = if radio.selected == Some(i) {
            "(\u{2022}) "
        } else {
            "( ) "
        };
        let style = if radio.selected == Some(i) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{marker}{option}   "), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
