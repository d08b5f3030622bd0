//! Reusable TUI widgets.

pub mod form;
pub mod radio;
pub mod status_bar;

pub use form::{FieldKind, Form, FormField, draw_form};
pub use radio::{RadioGroup, draw_radio_group};
pub use status_bar::{StatusBarContext, draw_status_bar};
