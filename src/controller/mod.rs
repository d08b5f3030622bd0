//! Form visibility controller: pure directive computation plus effect application.

mod directives;
mod sync;
mod view;

pub use directives::{
    FormDirectives, compute_directives, existing_project_visible, new_project_visible,
};
pub use sync::sync_form;
pub use view::{FormView, ViewError};
