//! Controllers and wiring for the Back Office console.
//!
//! The controllers here are the presentation-agnostic half of every console
//! screen: [`list::ListController`] drives the paginated/sortable/filterable
//! tables and [`form::FormController`] drives the create/edit forms. The
//! actual shell (widgets, routing) renders their state and forwards user
//! events back to them.

pub mod config;
pub mod context;
pub mod form;
pub mod list;
pub mod logging;
pub mod notify;
