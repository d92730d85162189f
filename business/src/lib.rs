//! Domain layer for the admission roster viewer.
//!
//! UI code stays "dumb": it reads states, renders, and dispatches commands.
//! Everything the UI reads or dispatches is defined here.

mod api;
mod applicant;
mod config;
mod fetch_page_command;
pub mod http;
mod roster_state;
mod route;

pub use api::{ApiError, ApiResult, fetch_page};
pub use applicant::Applicant;
pub use config::RosterConfig;
pub use fetch_page_command::{FetchPageCommand, FetchPageInput, ensure_page_loaded};
pub use roster_state::{PAGE_STEP, RosterState};
pub use route::{PAGE_ROOT, RouteState};
