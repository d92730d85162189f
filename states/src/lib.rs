//! Shared application state container.
//!
//! The UI owns a single [`StateCtx`]; widgets read states and dispatch
//! [`Command`]s, never mutating shared state behind the container's back.
//! Commands run asynchronously and publish their results back through an
//! [`Updater`] channel which the UI thread drains once per frame via
//! [`StateCtx::sync_pending`].

mod command;
mod ctx;
mod error;
mod snapshot;
mod state;

pub use command::{Command, Updater};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::{CommandSnapshot, StateSnapshot};
pub use state::State;
