//! Pure decision logic: selection state in, visibility and required flags out.

use crate::model::{Field, Region, RequestType};

/// The complete visibility and required-flag assignment for one selection state.
///
/// Recomputed from scratch on every selection change; nothing is mutated
/// incrementally, so applying the same directives twice is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDirectives {
    /// Visibility of each toggled region, in form order.
    pub region_visibility: Vec<(Region, bool)>,
    /// Required flag for every field that lives inside a toggled region.
    pub field_required: Vec<(Field, bool)>,
}

impl FormDirectives {
    /// Returns whether a region should be visible.
    pub fn is_visible(&self, region: Region) -> bool {
        self.region_visibility
            .iter()
            .any(|&(r, visible)| r == region && visible)
    }

    /// Returns whether a field should be required.
    pub fn is_required(&self, field: Field) -> bool {
        self.field_required
            .iter()
            .any(|&(f, required)| f == field && required)
    }
}

/// Returns `true` iff the existing-project row should be shown.
pub fn existing_project_visible(selection: Option<RequestType>) -> bool {
    matches!(selection, Some(RequestType::Renew | RequestType::Add))
}

/// Returns `true` iff the new-project regions (project details, access
/// permissions, HPC interest) should be shown.
pub fn new_project_visible(selection: Option<RequestType>) -> bool {
    matches!(selection, Some(RequestType::New))
}

/// Computes the full directive set for a selection.
///
/// With nothing selected both predicates are false: every region hides and no
/// field is forced required. That is the defined initial state, not an error.
pub fn compute_directives(selection: Option<RequestType>) -> FormDirectives {
    let show_existing = existing_project_visible(selection);
    let show_details = new_project_visible(selection);

    let region_visibility = vec![
        (Region::ExistingProject, show_existing),
        (Region::ProjectDetails, show_details),
        (Region::AccessPermissions, show_details),
        (Region::HpcInterest, show_details),
    ];

    // Every field in a toggled region gets an explicit flag, so switching
    // selections always clears flags left over from the previous state.
    let field_required = Field::all()
        .iter()
        .copied()
        .filter(|field| field.region().is_some())
        .map(|field| {
            let required = match field {
                Field::ExistingProject => show_existing,
                _ => show_details && Field::required_for_new().contains(&field),
            };
            (field, required)
        })
        .collect();

    FormDirectives {
        region_visibility,
        field_required,
    }
}
