use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::State;

/// Cloned, `Send` copies of snapshot-capable states.
#[derive(Default)]
pub struct StateSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: State + Clone + Send + 'static>(&self) -> Option<T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
    }
}

/// Read-only view of the state container taken when a command is spawned.
#[derive(Default)]
pub struct CommandSnapshot {
    states: StateSnapshot,
}

impl CommandSnapshot {
    pub fn new(states: StateSnapshot) -> Self {
        Self { states }
    }

    pub fn try_state<T: State + Clone + Send + 'static>(&self) -> Option<T> {
        self.states.get::<T>()
    }

    /// Panics when the state was never registered or does not snapshot;
    /// that is container misuse, not a runtime condition.
    pub fn state<T: State + Clone + Send + 'static>(&self) -> T {
        self.states
            .get::<T>()
            .unwrap_or_else(|| panic!("state snapshot for {} is missing", type_name::<T>()))
    }
}
