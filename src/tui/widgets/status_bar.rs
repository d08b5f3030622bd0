//! Status bar widget — persistent one-line form context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from the form screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Label of the selected request type, if any.
    pub selection_label: Option<String>,
    /// How many required fields are still empty.
    pub missing_required: usize,
}

/// Renders a one-line status bar showing the selection and required-field
/// progress.
///
/// Display format (left-aligned):
/// - Nothing selected:   `No request type selected` (DarkGray)
/// - Fields outstanding: `[Renew existing project]  2 required fields empty`
/// - All filled:         `[Renew existing project]  ready to review` (Green)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);

    let spans: Vec<Span> = match &ctx.selection_label {
        None => vec![Span::styled(
            "No request type selected",
            Style::default().fg(Color::DarkGray),
        )],
        Some(label) => {
            let mut spans = vec![Span::styled(format!("[{label}]  "), cyan)];
            if ctx.missing_required == 0 {
                spans.push(Span::styled("ready to review", green));
            } else {
                let plural = if ctx.missing_required == 1 { "" } else { "s" };
                spans.push(Span::styled(
                    format!("{} required field{plural} empty", ctx.missing_required),
                    cyan,
                ));
            }
            spans
        }
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
