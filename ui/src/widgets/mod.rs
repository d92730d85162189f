pub mod roster;

pub use roster::roster_panel;
