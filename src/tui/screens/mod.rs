//! TUI screen implementations.

pub mod help;
pub mod request_form;
pub mod review;

pub use help::{HelpState, draw_help};
pub use request_form::{RequestFormState, draw_request_form};
pub use review::{ReviewState, draw_review};
