use crate::model::{Field, Region, RequestType};

/// Errors a [`FormView`] reports when asked to mutate something it lacks.
///
/// A missing region or field is a rendering mismatch, not a fatal condition:
/// the controller logs it and keeps updating the rest of the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The form does not render the given region.
    #[error("form has no region: {0}")]
    MissingRegion(Region),

    /// The form does not render the given field.
    #[error("form has no field: {0}")]
    MissingField(Field),
}

/// The form surface the controller drives.
///
/// Decision logic depends only on this trait, so tests can inject a fake
/// view and the TUI screen is just one implementation.
pub trait FormView {
    /// Returns the currently selected request type, or `None` if nothing is
    /// selected yet. The selection widget guarantees exclusivity.
    fn selected_request_type(&self) -> Option<RequestType>;

    /// Shows or hides a region of the form.
    fn set_region_visible(&mut self, region: Region, visible: bool) -> Result<(), ViewError>;

    /// Sets or clears the required marker on a field.
    fn set_field_required(&mut self, field: Field, required: bool) -> Result<(), ViewError>;
}
