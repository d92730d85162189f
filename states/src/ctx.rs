use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use flume::{Receiver, Sender};
use tokio_util::sync::CancellationToken;

use crate::command::{StateUpdate, spawn};
use crate::{Command, CommandSnapshot, Error, State, StateSnapshot, Updater};

type QueuedCommand = Box<dyn FnOnce(&StateCtx)>;

/// The shared state container.
///
/// Owned by the UI thread. Per frame the app calls [`StateCtx::sync_pending`]
/// first (apply results published by async commands), renders widgets that
/// read states and enqueue commands, then calls [`StateCtx::flush_commands`]
/// to spawn whatever the frame requested.
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn State>>,
    send: Sender<StateUpdate>,
    recv: Receiver<StateUpdate>,
    queued: Vec<QueuedCommand>,
    repaint: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            storage: BTreeMap::new(),
            send,
            recv,
            queued: Vec::new(),
            repaint: None,
        }
    }

    /// Register a state instance. Re-registering a type replaces the old value.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Hook invoked whenever an async command publishes an update, so the
    /// windowing loop can schedule a repaint.
    pub fn set_repaint(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(hook));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "try_state"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "try_state_mut"))
    }

    /// Panics when `T` was never registered; that is container misuse.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Synchronous in-frame mutation of state `T`.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Clone every snapshot-capable state for a command about to run.
    pub fn snapshot(&self) -> CommandSnapshot {
        let mut states = StateSnapshot::new();
        for (type_id, state) in &self.storage {
            if let Some(cloned) = state.snapshot() {
                states.insert_cloned(*type_id, cloned);
            }
        }
        CommandSnapshot::new(states)
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), self.repaint.clone())
    }

    /// Spawn command `C` immediately with a snapshot of the current states.
    pub fn dispatch<C: Command>(&self) {
        log::debug!("dispatching command {}", type_name::<C>());
        let fut = C::default().run(self.snapshot(), self.updater(), CancellationToken::new());
        spawn(fut);
    }

    /// Queue command `C` for the end of the current frame.
    ///
    /// Enqueueing twice spawns twice; de-duplication is the caller's business.
    pub fn enqueue_command<C: Command>(&mut self) {
        self.queued.push(Box::new(|ctx| ctx.dispatch::<C>()));
    }

    /// Spawn all commands queued during this frame.
    pub fn flush_commands(&mut self) {
        let queued = std::mem::take(&mut self.queued);
        for run in queued {
            run(self);
        }
    }

    /// Apply updates published by async commands since the last call.
    ///
    /// Updates are applied in publish order; an update for an unregistered
    /// state is dropped with a warning.
    pub fn sync_pending(&mut self) {
        while let Ok(update) = self.recv.try_recv() {
            match self.storage.get_mut(&update.type_id) {
                Some(state) => (update.apply)(state.as_any_mut()),
                None => log::warn!(
                    "dropping update for unregistered state {}",
                    update.state_name
                ),
            }
        }
    }
}
