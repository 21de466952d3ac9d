//! In-memory partition cache with request coalescing.
//!
//! Partitions are immutable for the lifetime of a published dataset, so
//! entries are cached forever. Concurrent requests for the same key
//! coalesce onto one load: the first caller runs the loader while the
//! rest block on a gate, then read the cached value. A failed load
//! clears the slot so a later call can retry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};

enum Slot<T> {
    Ready(Arc<T>),
    Pending(Arc<Gate>),
}

struct Gate {
    done: Mutex<bool>,
    cond: Condvar,
}

impl Gate {
    fn new() -> Self {
        Gate {
            done: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    fn open(&self) {
        let mut done = self.done.lock().unwrap();
        *done = true;
        self.cond.notify_all();
    }

    fn wait(&self) {
        let mut done = self.done.lock().unwrap();
        while !*done {
            done = self.cond.wait(done).unwrap();
        }
    }
}

/// Keyed cache of loaded values. Generic over the value so the load
/// path can be tested without a network.
pub struct PrefixCache<T> {
    slots: Mutex<HashMap<String, Slot<T>>>,
}

impl<T> Default for PrefixCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrefixCache<T> {
    pub fn new() -> Self {
        PrefixCache {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key`, loading it with `loader` on a
    /// miss. Only one caller runs the loader per miss; the others wait
    /// for its result. A failed load returns the error to the caller
    /// that ran it, and waiters fall through to a fresh load.
    pub fn get_or_load<F, E>(&self, key: &str, loader: F) -> Result<Arc<T>, E>
    where
        F: Fn() -> Result<T, E>,
    {
        enum Next {
            Wait(Arc<Gate>),
            Load(Arc<Gate>),
        }

        loop {
            let next = {
                let mut slots = self.slots.lock().unwrap();
                match slots.entry(key.to_string()) {
                    Entry::Occupied(occupied) => match occupied.get() {
                        Slot::Ready(value) => return Ok(value.clone()),
                        Slot::Pending(gate) => Next::Wait(gate.clone()),
                    },
                    Entry::Vacant(vacant) => {
                        let gate = Arc::new(Gate::new());
                        vacant.insert(Slot::Pending(gate.clone()));
                        Next::Load(gate)
                    }
                }
            };
            match next {
                Next::Load(gate) => return self.run_loader(key, &gate, loader),
                Next::Wait(gate) => gate.wait(),
                // After the gate opens the loader either published a
                // value or cleared the slot; re-check from the top.
            }
        }
    }

    fn run_loader<F, E>(&self, key: &str, gate: &Gate, loader: F) -> Result<Arc<T>, E>
    where
        F: Fn() -> Result<T, E>,
    {
        match loader() {
            Ok(value) => {
                let value = Arc::new(value);
                let mut slots = self.slots.lock().unwrap();
                slots.insert(key.to_string(), Slot::Ready(value.clone()));
                drop(slots);
                gate.open();
                Ok(value)
            }
            Err(err) => {
                let mut slots = self.slots.lock().unwrap();
                slots.remove(key);
                drop(slots);
                gate.open();
                Err(err)
            }
        }
    }

    /// Number of cached (ready) entries.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap();
        slots
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
