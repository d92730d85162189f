use std::any::Any;

/// A piece of shared application state stored in [`crate::StateCtx`].
///
/// States are plain data owned by the UI thread. A state that commands need
/// to read overrides [`State::snapshot`] to hand out a cloned, `Send` copy;
/// states that must stay on the UI thread keep the default `None`.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Cloned copy for command snapshots.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}
