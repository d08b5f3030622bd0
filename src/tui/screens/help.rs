//! Help screen — keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Row, Table};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the help screen. Stateless; exists for uniform key dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpState;

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                Action::Navigate(Screen::RequestForm)
            }
            _ => Action::None,
        }
    }
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let rows = vec![
        Row::new(["Tab / Shift+Tab", "Move between selector and fields"]),
        Row::new(["\u{2190} / \u{2192}", "Choose the project request type"]),
        Row::new(["Space", "Toggle the focused checkbox"]),
        Row::new(["Enter", "Validate the form and review the payload"]),
        Row::new(["F1", "Show this help"]),
        Row::new(["Esc", "Quit (or leave this screen)"]),
    ];
    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(18),
            ratatui::layout::Constraint::Min(0),
        ],
    )
    .block(block);
    frame.render_widget(table, area);
}
