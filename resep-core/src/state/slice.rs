use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{KeyValueStore, PersistentStore, StorageKey};

/// One independently persisted piece of state.
///
/// Loaded with a fallback on construction; every [`update`](Slice::update)
/// writes the new value through to its key before returning.
#[derive(Debug)]
pub struct Slice<T, S> {
    key: StorageKey,
    value: T,
    store: PersistentStore<S>,
}

impl<T, S> Slice<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn load(store: PersistentStore<S>, key: StorageKey, fallback: T) -> Self {
        let value = store.read(key, fallback);
        Self { key, value, store }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Applies `mutate` to the in-memory value and persists the result.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let result = mutate(&mut self.value);
        self.write_through();
        result
    }

    fn write_through(&self) {
        self.store.write(self.key, &self.value);
    }
}
