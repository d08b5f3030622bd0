//! Review screen — shows the serialized payload before handoff.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::AllocationRequest;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the review screen.
#[derive(Debug, Clone)]
pub struct ReviewState {
    request: AllocationRequest,
    rendered: String,
}

impl ReviewState {
    /// Serializes the request for display. Fails only if the payload cannot
    /// be rendered as JSON.
    pub fn new(request: AllocationRequest) -> serde_json::Result<Self> {
        let rendered = request.to_json()?;
        Ok(Self { request, rendered })
    }

    /// Returns the request under review.
    pub fn request(&self) -> &AllocationRequest {
        &self.request
    }

    /// Consumes the state, yielding the confirmed request.
    pub fn into_request(self) -> AllocationRequest {
        self.request
    }

    /// Returns the pretty-printed JSON payload.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl ScreenState for ReviewState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Confirm,
            KeyCode::Esc => Action::Navigate(Screen::RequestForm),
            _ => Action::None,
        }
    }
}

/// Renders the review screen.
#[mutants::skip]
pub fn draw_review(state: &ReviewState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Review Request ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines: Vec<Line> = state.rendered().lines().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines), body_area);

    let footer = Paragraph::new(Line::from("Enter: submit  Esc: back to form"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
