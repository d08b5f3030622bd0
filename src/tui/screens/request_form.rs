//! Allocation request screen — the admin form whose regions and required
//! markers track the selected request type.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::{
    FormView, ViewError, compute_directives, existing_project_visible, new_project_visible,
    sync_form,
};
use crate::model::{
    AllocationRequest, Field, Region, RequestType, ValidationError, normalize_yes_no, parse_list,
    validate_email, validate_url, validate_username,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{FieldKind, Form, FormField, draw_form};
use crate::tui::widgets::radio::{RadioGroup, draw_radio_group};
use crate::tui::widgets::status_bar::StatusBarContext;

/// Which part of the screen has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// The request-type radio group.
    Selector,
    /// The form fields below it.
    Fields,
}

/// State for the allocation request screen.
///
/// The screen is the concrete [`FormView`]: the controller drives region
/// visibility and required markers through it, once at construction and
/// again after every selection change.
#[derive(Debug, Clone)]
pub struct RequestFormState {
    radio: RadioGroup,
    form: Form,
    focus: Focus,
    general_error: Option<String>,
}

impl Default for RequestFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestFormState {
    /// Creates the form with nothing selected: all toggled regions start
    /// hidden and no field is required.
    pub fn new() -> Self {
        let radio = RadioGroup::new(
            "Project Request Type",
            RequestType::all().iter().map(|t| t.label().to_string()).collect(),
        );
        let form = Form::new(vec![
            FormField::text(Field::Username),
            FormField::text(Field::ExistingProject),
            FormField::text(Field::PiName),
            FormField::text(Field::PiEmail),
            FormField::text(Field::PiInstitution),
            FormField::text(Field::ProjectTitle),
            FormField::text(Field::ProjectWebsite),
            FormField::text(Field::ProjectShortName),
            FormField::text(Field::ScienceFields).with_label("Science Fields (comma separated)"),
            FormField::text(Field::RelatedToProposal).with_label("Related to Proposal (Yes/No)"),
            FormField::text(Field::Justification),
            FormField::text(Field::FundingSources).with_label("Funding Sources (comma separated)"),
            FormField::checkbox(Field::AccessRunningApps),
            FormField::checkbox(Field::AccessShell),
            FormField::checkbox(Field::AccessDownload),
            FormField::checkbox(Field::InterestInHpc),
        ]);

        let mut state = Self {
            radio,
            form,
            focus: Focus::Selector,
            general_error: None,
        };
        sync_form(&mut state);
        state
    }

    /// Creates the form with a request type already selected, as when a
    /// rejected submission is re-displayed for correction.
    pub fn with_selection(request_type: RequestType) -> Self {
        let mut state = Self::new();
        if let Some(index) = RequestType::all().iter().position(|t| *t == request_type) {
            state.radio.select(index);
        }
        sync_form(&mut state);
        state
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns a reference to the request-type selector for rendering.
    pub fn radio(&self) -> &RadioGroup {
        &self.radio
    }

    /// Returns `true` when the selector, not the fields, has focus.
    pub fn selector_focused(&self) -> bool {
        self.focus == Focus::Selector
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Returns the status bar context for the current form state.
    pub fn status(&self) -> StatusBarContext {
        let selection = self.selected_request_type();
        let directives = compute_directives(selection);
        let missing_required = directives
            .field_required
            .iter()
            .filter(|&&(field, required)| required && self.form.value(field).trim().is_empty())
            .count();
        StatusBarContext {
            selection_label: selection.map(|s| s.label().to_string()),
            missing_required,
        }
    }

    fn change_selection(&mut self, forward: bool) {
        if forward {
            self.radio.select_next();
        } else {
            self.radio.select_prev();
        }
        sync_form(self);
    }

    /// Returns the trimmed value of a text field, if non-empty.
    fn text(&self, field: Field) -> Option<String> {
        let value = self.form.value(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Validates all fields against the current directives and builds the
    /// submission payload.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;

        let Some(request_type) = self.selected_request_type() else {
            self.general_error = Some("Select a project request type first".to_string());
            return Action::None;
        };

        let username = self.form.value(Field::Username).trim().to_string();
        if let Err(e) = validate_username(&username) {
            self.form.set_error(Field::Username, e.to_string());
        }

        // Required-presence per the current selection. Validate every field
        // individually to show all errors at once.
        let directives = compute_directives(Some(request_type));
        for &(field, required) in &directives.field_required {
            if required && self.form.value(field).trim().is_empty() {
                self.form
                    .set_error(field, ValidationError::Required.to_string());
            }
        }

        let is_new = new_project_visible(Some(request_type));
        if is_new {
            let email = self.form.value(Field::PiEmail).trim();
            if !email.is_empty()
                && let Err(e) = validate_email(email)
            {
                self.form.set_error(Field::PiEmail, e.to_string());
            }
            let website = self.form.value(Field::ProjectWebsite).trim();
            if !website.is_empty()
                && let Err(e) = validate_url(website)
            {
                self.form.set_error(Field::ProjectWebsite, e.to_string());
            }
            let proposal = self.form.value(Field::RelatedToProposal).trim();
            if !proposal.is_empty()
                && let Err(e) = normalize_yes_no(proposal)
            {
                self.form.set_error(Field::RelatedToProposal, e.to_string());
            }
        }

        if self.form.has_errors() {
            return Action::None;
        }

        // Hidden regions contribute nothing, even if the user typed into
        // them before switching selection.
        let request = AllocationRequest {
            username,
            project_request_type: request_type,
            existing_project: if existing_project_visible(Some(request_type)) {
                self.text(Field::ExistingProject)
            } else {
                None
            },
            pi_name: if is_new { self.text(Field::PiName) } else { None },
            pi_email: if is_new { self.text(Field::PiEmail) } else { None },
            pi_institution: if is_new {
                self.text(Field::PiInstitution)
            } else {
                None
            },
            project_title: if is_new {
                self.text(Field::ProjectTitle)
            } else {
                None
            },
            project_website: if is_new {
                self.text(Field::ProjectWebsite)
            } else {
                None
            },
            project_short_name: if is_new {
                self.text(Field::ProjectShortName)
            } else {
                None
            },
            science_fields: if is_new {
                parse_list(self.form.value(Field::ScienceFields))
            } else {
                vec![]
            },
            related_to_proposal: if is_new {
                self.text(Field::RelatedToProposal)
                    .and_then(|v| normalize_yes_no(&v).ok())
                    .map(str::to_string)
            } else {
                None
            },
            justification: if is_new {
                self.text(Field::Justification)
            } else {
                None
            },
            funding_sources: if is_new {
                parse_list(self.form.value(Field::FundingSources))
            } else {
                vec![]
            },
            access_running_apps: is_new && self.form.checked(Field::AccessRunningApps),
            access_shell: is_new && self.form.checked(Field::AccessShell),
            access_download: is_new && self.form.checked(Field::AccessDownload),
            interest_in_hpc: is_new && self.form.checked(Field::InterestInHpc),
            created_at: Utc::now(),
        };

        Action::Review(request)
    }
}

impl FormView for RequestFormState {
    fn selected_request_type(&self) -> Option<RequestType> {
        self.radio
            .selected()
            .and_then(|i| RequestType::all().get(i).copied())
    }

    fn set_region_visible(&mut self, region: Region, visible: bool) -> Result<(), ViewError> {
        if self.form.set_region_visible(region, visible) {
            Ok(())
        } else {
            Err(ViewError::MissingRegion(region))
        }
    }

    fn set_field_required(&mut self, field: Field, required: bool) -> Result<(), ViewError> {
        if self.form.set_field_required(field, required) {
            Ok(())
        } else {
            Err(ViewError::MissingField(field))
        }
    }
}

impl ScreenState for RequestFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match (self.focus, key.code) {
            (_, KeyCode::Esc) => return Action::Quit,
            (_, KeyCode::Enter) => return self.submit(),
            (Focus::Selector, KeyCode::Tab) => {
                self.focus = Focus::Fields;
                self.form.focus_first();
            }
            (Focus::Selector, KeyCode::BackTab) => {
                self.focus = Focus::Fields;
                self.form.focus_last();
            }
            (Focus::Selector, KeyCode::Right) => self.change_selection(true),
            (Focus::Selector, KeyCode::Left) => self.change_selection(false),
            (Focus::Fields, KeyCode::Tab) => {
                if self.form.focus_next() {
                    self.focus = Focus::Selector;
                }
            }
            (Focus::Fields, KeyCode::BackTab) => {
                if self.form.focus_prev() {
                    self.focus = Focus::Selector;
                }
            }
            (Focus::Fields, KeyCode::Char(' '))
                if self.form.focused_kind() == Some(FieldKind::Checkbox) =>
            {
                self.form.toggle_checked();
            }
            (Focus::Fields, KeyCode::Char(ch)) => self.form.insert_char(ch),
            (Focus::Fields, KeyCode::Backspace) => self.form.delete_char(),
            _ => {}
        }
        Action::None
    }
}

/// Renders the allocation request screen.
#[mutants::skip]
pub fn draw_request_form(state: &RequestFormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Allocation Request ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_rows = state.form().fields().iter().filter(|f| f.visible).count() as u16 * 3;
    let [radio_area, form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(visible_rows),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_radio_group(state.radio(), state.selector_focused(), frame, radio_area);
    draw_form(state.form(), frame, form_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: move  \u{2190}/\u{2192}: choose type  Space: toggle  Enter: review  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
