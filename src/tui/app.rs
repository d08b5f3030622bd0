use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::model::AllocationRequest;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::help::{HelpState, draw_help};
use super::screens::request_form::{RequestFormState, draw_request_form};
use super::screens::review::{ReviewState, draw_review};
use super::widgets::status_bar::draw_status_bar;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The allocation request form.
    RequestForm,
    /// Payload review before handoff.
    Review,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    form: RequestFormState,
    review: Option<ReviewState>,
    help: HelpState,
    submitted: Option<AllocationRequest>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on the [`Screen::RequestForm`] screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::RequestForm,
            form: RequestFormState::new(),
            review: None,
            help: HelpState,
            submitted: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key)?;
            }
        }
        Ok(())
    }

    /// Renders the current screen with the status bar underneath.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::RequestForm => draw_request_form(&self.form, frame, main),
            Screen::Review => {
                if let Some(review) = &self.review {
                    draw_review(review, frame, main);
                }
            }
            Screen::Help => draw_help(frame, main),
        }

        draw_status_bar(&self.form.status(), frame, status);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), AppError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // F1 is global so help stays reachable while a text field has focus.
        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.screen = Screen::Help;
            }
            return Ok(());
        }

        let action = match self.screen {
            Screen::RequestForm => self.form.handle_key(key),
            Screen::Review => match self.review.as_mut() {
                Some(review) => review.handle_key(key),
                None => Action::Navigate(Screen::RequestForm),
            },
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action)
    }

    fn apply(&mut self, action: Action) -> Result<(), AppError> {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Review(request) => {
                self.review = Some(ReviewState::new(request)?);
                self.screen = Screen::Review;
            }
            Action::Confirm => {
                self.submitted = self.review.take().map(ReviewState::into_request);
                self.should_quit = true;
            }
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the confirmed request, if the user submitted one.
    pub fn submitted(&self) -> Option<&AllocationRequest> {
        self.submitted.as_ref()
    }
}
