use std::any::{Any, TypeId, type_name};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use flume::Sender;
use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, State};

/// A boxed mutation shipped from an async command back to the UI thread.
///
/// The closure downcasts and mutates the target state when
/// [`crate::StateCtx::sync_pending`] applies it at the next frame boundary.
pub(crate) struct StateUpdate {
    pub(crate) type_id: TypeId,
    pub(crate) state_name: &'static str,
    pub(crate) apply: Box<dyn FnOnce(&mut dyn Any) + Send>,
}

/// Write half of the state channel handed to running commands.
#[derive(Clone)]
pub struct Updater {
    send: Sender<StateUpdate>,
    repaint: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Updater {
    pub(crate) fn new(
        send: Sender<StateUpdate>,
        repaint: Option<Arc<dyn Fn() + Send + Sync>>,
    ) -> Self {
        Self { send, repaint }
    }

    /// Queue a mutation of state `T`, applied on the UI thread at the next
    /// [`crate::StateCtx::sync_pending`] call.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let update = StateUpdate {
            type_id: TypeId::of::<T>(),
            state_name: type_name::<T>(),
            apply: Box::new(move |any| {
                if let Some(state) = any.downcast_mut::<T>() {
                    f(state);
                }
            }),
        };
        if self.send.send(update).is_err() {
            log::warn!(
                "state context dropped, discarding update for {}",
                type_name::<T>()
            );
            return;
        }
        // Poke the UI so eframe renders a frame even when the user is idle.
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}

/// A side effect dispatched explicitly by the UI.
///
/// Commands never run implicitly: the UI enqueues them during a frame and
/// [`crate::StateCtx::flush_commands`] spawns them at the end of it. A
/// command reads its inputs from the [`CommandSnapshot`], performs IO, and
/// publishes results via [`Updater::update`].
///
/// The cancellation token is cooperative; commands that have nothing to
/// cancel may ignore it.
pub trait Command: Default {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}

/// Spawn a command future on the platform executor.
///
/// Native callers must be inside a Tokio runtime (the app binary enters one
/// for the lifetime of the process; tests use `#[tokio::test]`).
pub(crate) fn spawn(fut: Pin<Box<dyn Future<Output = ()> + Send>>) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::spawn(fut);
    }

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(fut);
}
