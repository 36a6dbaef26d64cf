//! Modal dialogs layered over the staff dashboard.

pub mod detail;
pub mod viewer;
