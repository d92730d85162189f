//! Admission-list widgets: the panel, the table, and pagination controls.

pub mod pagination;
pub mod panel;
pub mod table;

pub use panel::roster_panel;
