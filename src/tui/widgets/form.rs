//! Sectioned form widget: text and checkbox fields tagged with form regions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, Region};

/// What kind of input a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, edited character by character.
    Text,
    /// A boolean toggled with the space bar.
    Checkbox,
}

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Which form field this input represents.
    pub field: Field,
    /// Display label shown on the input's border.
    pub label: String,
    /// Input kind.
    pub kind: FieldKind,
    /// Current text value (text fields only).
    pub value: String,
    /// Current toggle state (checkbox fields only).
    pub checked: bool,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be filled in on submit.
    pub required: bool,
    /// Whether the field is currently shown. Hidden fields are skipped by
    /// focus traversal and not rendered.
    pub visible: bool,
}

impl FormField {
    /// Creates a text field labelled after the model field.
    pub fn text(field: Field) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            kind: FieldKind::Text,
            value: String::new(),
            checked: false,
            error: None,
            required: false,
            visible: true,
        }
    }

    /// Creates a checkbox field labelled after the model field.
    pub fn checkbox(field: Field) -> Self {
        Self {
            kind: FieldKind::Checkbox,
            ..Self::text(field)
        }
    }

    /// Replaces the display label (e.g. to add an input hint).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A multi-field form with focus management over the visible fields.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the kind of the focused field, if the form has any fields.
    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.fields.get(self.focus).map(|f| f.kind)
    }

    /// Moves focus to the next visible field. Returns `true` if focus wrapped
    /// past the last field back to the start.
    pub fn focus_next(&mut self) -> bool {
        if self.fields.iter().all(|f| !f.visible) {
            return false;
        }
        let mut wrapped = false;
        loop {
            self.focus += 1;
            if self.focus >= self.fields.len() {
                self.focus = 0;
                wrapped = true;
            }
            if self.fields[self.focus].visible {
                break;
            }
        }
        wrapped
    }

    /// Moves focus to the previous visible field. Returns `true` if focus
    /// wrapped past the first field to the end.
    pub fn focus_prev(&mut self) -> bool {
        if self.fields.iter().all(|f| !f.visible) {
            return false;
        }
        let mut wrapped = false;
        loop {
            if self.focus == 0 {
                self.focus = self.fields.len() - 1;
                wrapped = true;
            } else {
                self.focus -= 1;
            }
            if self.fields[self.focus].visible {
                break;
            }
        }
        wrapped
    }

    /// Moves focus to the first visible field.
    pub fn focus_first(&mut self) {
        self.focus = self.fields.iter().position(|f| f.visible).unwrap_or(0);
    }

    /// Moves focus to the last visible field.
    pub fn focus_last(&mut self) {
        if let Some(index) = self.fields.iter().rposition(|f| f.visible) {
            self.focus = index;
        }
    }

    /// Appends a character to the focused field (text fields only).
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && field.kind == FieldKind::Text
        {
            field.value.push(ch);
        }
    }

    /// Deletes the last character of the focused field (text fields only).
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && field.kind == FieldKind::Text
        {
            field.value.pop();
        }
    }

    /// Flips the focused checkbox. No-op on text fields.
    pub fn toggle_checked(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && field.kind == FieldKind::Checkbox
        {
            field.checked = !field.checked;
        }
    }

    /// Shows or hides every field belonging to `region`. Returns `false` if
    /// the form renders no field of that region.
    pub fn set_region_visible(&mut self, region: Region, visible: bool) -> bool {
        let mut found = false;
        for field in &mut self.fields {
            if field.field.region() == Some(region) {
                field.visible = visible;
                found = true;
            }
        }
        if found && !self.fields[self.focus].visible {
            // Focus must not rest on a hidden field.
            self.focus_next();
        }
        found
    }

    /// Sets the required flag on a field. Returns `false` if the form does
    /// not render that field.
    pub fn set_field_required(&mut self, field: Field, required: bool) -> bool {
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(f) => {
                f.required = required;
                true
            }
            None => false,
        }
    }

    /// Sets a validation error message on a field.
    pub fn set_error(&mut self, field: Field, error: String) {
        if let Some(f) = self.fields.iter_mut().find(|f| f.field == field) {
            f.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the text value of a field, or an empty string if the form
    /// does not render it.
    pub fn value(&self, field: Field) -> &str {
        self.field(field).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Returns the toggle state of a checkbox field.
    pub fn checked(&self, field: Field) -> bool {
        self.field(field).is_some_and(|f| f.checked)
    }

    /// Returns the form field for a model field, if rendered.
    pub fn field(&self, field: Field) -> Option<&FormField> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Returns all fields in form order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders the visible fields of a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let visible: Vec<(usize, &FormField)> = form
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.visible)
        .collect();

    let constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (row, &(index, field)) in visible.iter().enumerate() {
        let is_focused = index == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = match field.kind {
            FieldKind::Text => vec![Span::raw(&field.value)],
            FieldKind::Checkbox => {
                vec![Span::raw(if field.checked { "[x]" } else { "[ ]" })]
            }
        };
        if is_focused && field.kind == FieldKind::Text {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[row]);

        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[row].x + 2,
                y: rows[row].y + row_height.saturating_sub(1),
                width: rows[row].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::text(Field::Username),
            FormField::text(Field::ExistingProject),
            FormField::text(Field::PiName),
            FormField::checkbox(Field::InterestInHpc),
        ])
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        let form = make_form();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_next_advances_and_wraps() {
        let mut form = make_form();
        assert!(!form.focus_next());
        assert_eq!(form.focus(), 1);
        assert!(!form.focus_next());
        assert!(!form.focus_next());
        assert!(form.focus_next(), "should report wrap past last field");
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_wraps_backward() {
        let mut form = make_form();
        assert!(form.focus_prev(), "should report wrap past first field");
        assert_eq!(form.focus(), 3);
    }

    #[test]
    fn focus_skips_hidden_fields() {
        let mut form = make_form();
        form.set_region_visible(Region::ExistingProject, false);
        form.focus_next();
        assert_eq!(
            form.fields()[form.focus()].field,
            Field::PiName,
            "focus should skip the hidden existing-project row"
        );
    }

    #[test]
    fn hiding_the_focused_field_moves_focus() {
        let mut form = make_form();
        form.focus_next(); // existing project
        form.set_region_visible(Region::ExistingProject, false);
        assert!(form.fields()[form.focus()].visible);
    }

    #[test]
    fn focus_first_lands_on_first_visible() {
        let mut form = Form::new(vec![
            FormField::text(Field::ExistingProject),
            FormField::text(Field::Username),
        ]);
        form.set_region_visible(Region::ExistingProject, false);
        form.focus_first();
        assert_eq!(form.fields()[form.focus()].field, Field::Username);
    }

    #[test]
    fn focus_last_lands_on_last_visible() {
        let mut form = make_form();
        form.set_region_visible(Region::HpcInterest, false);
        form.focus_last();
        assert_eq!(form.fields()[form.focus()].field, Field::PiName);
    }

    #[test]
    fn focus_next_with_all_hidden_is_noop() {
        let mut form = Form::new(vec![FormField::text(Field::ExistingProject)]);
        form.set_region_visible(Region::ExistingProject, false);
        assert!(!form.focus_next());
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_on_empty_form_is_noop() {
        let mut form = Form::new(vec![]);
        assert!(!form.focus_next());
        assert!(!form.focus_prev());
        assert_eq!(form.focus(), 0);
    }

    // --- Editing ---

    #[test]
    fn insert_char_appends_to_focused() {
        let mut form = make_form();
        form.insert_char('g');
        form.insert_char('l');
        assert_eq!(form.value(Field::Username), "gl");
        assert_eq!(form.value(Field::ExistingProject), "");
    }

    #[test]
    fn delete_char_removes_last() {
        let mut form = make_form();
        form.insert_char('a');
        form.insert_char('b');
        form.delete_char();
        assert_eq!(form.value(Field::Username), "a");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut form = make_form();
        form.delete_char();
        assert_eq!(form.value(Field::Username), "");
    }

    #[test]
    fn toggle_flips_focused_checkbox() {
        let mut form = make_form();
        form.focus_last(); // the checkbox
        assert!(!form.checked(Field::InterestInHpc));
        form.toggle_checked();
        assert!(form.checked(Field::InterestInHpc));
        form.toggle_checked();
        assert!(!form.checked(Field::InterestInHpc));
    }

    #[test]
    fn toggle_on_text_field_is_noop() {
        let mut form = make_form();
        form.toggle_checked();
        assert_eq!(form.value(Field::Username), "");
        assert!(!form.checked(Field::Username));
    }

    #[test]
    fn insert_char_on_checkbox_is_noop() {
        let mut form = make_form();
        form.focus_last();
        form.insert_char('x');
        assert_eq!(form.value(Field::InterestInHpc), "");
    }

    #[test]
    fn focused_kind_reports_checkbox() {
        let mut form = make_form();
        assert_eq!(form.focused_kind(), Some(FieldKind::Text));
        form.focus_last();
        assert_eq!(form.focused_kind(), Some(FieldKind::Checkbox));
    }

    // --- Region visibility and required flags ---

    #[test]
    fn set_region_visible_updates_all_region_fields() {
        let mut form = Form::new(vec![
            FormField::text(Field::PiName),
            FormField::text(Field::PiEmail),
            FormField::text(Field::Username),
        ]);
        assert!(form.set_region_visible(Region::ProjectDetails, false));
        assert!(!form.field(Field::PiName).unwrap().visible);
        assert!(!form.field(Field::PiEmail).unwrap().visible);
        assert!(form.field(Field::Username).unwrap().visible);
    }

    #[test]
    fn set_region_visible_reports_missing_region() {
        let mut form = make_form();
        assert!(!form.set_region_visible(Region::AccessPermissions, true));
    }

    #[test]
    fn set_field_required_flags_one_field() {
        let mut form = make_form();
        assert!(form.set_field_required(Field::PiName, true));
        assert!(form.field(Field::PiName).unwrap().required);
        assert!(!form.field(Field::Username).unwrap().required);
    }

    #[test]
    fn set_field_required_reports_missing_field() {
        let mut form = make_form();
        assert!(!form.set_field_required(Field::FundingSources, true));
    }

    // --- Errors ---

    #[test]
    fn set_error_on_field() {
        let mut form = make_form();
        form.set_error(Field::Username, "bad username".into());
        assert!(form.has_errors());
        assert_eq!(
            form.field(Field::Username).unwrap().error,
            Some("bad username".into())
        );
    }

    #[test]
    fn clear_errors_removes_all() {
        let mut form = make_form();
        form.set_error(Field::Username, "err1".into());
        form.set_error(Field::PiName, "err2".into());
        form.clear_errors();
        assert!(!form.has_errors());
    }

    #[test]
    fn set_error_on_missing_field_is_noop() {
        let mut form = make_form();
        form.set_error(Field::FundingSources, "nope".into());
        assert!(!form.has_errors());
    }

    // --- Accessors ---

    #[test]
    fn value_of_missing_field_is_empty() {
        let form = make_form();
        assert_eq!(form.value(Field::FundingSources), "");
    }

    #[test]
    fn with_label_overrides_display_label() {
        let field = FormField::text(Field::ScienceFields).with_label("Science Fields (comma separated)");
        assert_eq!(field.label, "Science Fields (comma separated)");
        assert_eq!(field.field, Field::ScienceFields);
    }
}
