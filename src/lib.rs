#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal admin form for project allocation requests.
//!
//! The heart of the crate is the [`controller`] module: a pure mapping from
//! the selected request type to region visibility and required-field flags,
//! applied to any [`controller::FormView`] implementation. The [`tui`] layer
//! provides the concrete view.

pub mod controller;
pub mod model;
pub mod tui;
