use tracing::{debug, warn};

use super::directives::compute_directives;
use super::view::FormView;

/// Recomputes directives from the view's current selection and applies them.
///
/// Call this once when the form is first shown (a pre-selected option on
/// re-display must take effect immediately) and again after every selection
/// change. Applying an unchanged selection leaves the view as it was.
///
/// A view that is missing a region or field loses only that one mutation;
/// the rest of the form is still updated.
pub fn sync_form<V: FormView>(view: &mut V) {
    let selection = view.selected_request_type();
    let directives = compute_directives(selection);

    let required: Vec<&'static str> = directives
        .field_required
        .iter()
        .filter(|&&(_, required)| required)
        .map(|&(field, _)| field.name())
        .collect();
    debug!(?selection, ?required, "applying form directives");

    for &(region, visible) in &directives.region_visibility {
        if let Err(e) = view.set_region_visible(region, visible) {
            warn!(%e, "skipping region update");
        }
    }
    for &(field, required) in &directives.field_required {
        if let Err(e) = view.set_field_required(field, required) {
            warn!(%e, "skipping field update");
        }
    }
}
