//! Shared test helpers: a recorder that logs every callback invocation.

#![allow(dead_code)]

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use field_validator::ValidatorBuilder;

/// One observed callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call<F> {
    Add(F, String),
    Remove(F),
    /// Error records plus the `Debug` rendering of the event.
    Errors(Vec<(F, String)>, String),
}

/// Records callbacks in invocation order.
#[derive(Debug)]
pub struct Recorder<F> {
    log: Arc<Mutex<Vec<Call<F>>>>,
}

impl<F> Recorder<F>
where
    F: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Installs all three callbacks on `builder`.
    pub fn attach<E, K>(
        &self,
        builder: ValidatorBuilder<F, E, String, K>,
    ) -> ValidatorBuilder<F, E, String, K>
    where
        E: Debug + 'static,
        K: Eq + Hash + 'static,
    {
        let (add, remove, errors) = (self.log.clone(), self.log.clone(), self.log.clone());
        builder
            .add_error(move |field, message| {
                add.lock()
                    .unwrap()
                    .push(Call::Add(field.clone(), message.clone()));
            })
            .remove_error(move |field| {
                remove.lock().unwrap().push(Call::Remove(field.clone()));
            })
            .on_errors(move |list, event| {
                let list = list
                    .iter()
                    .map(|e| (e.field.clone(), e.message.clone()))
                    .collect();
                errors
                    .lock()
                    .unwrap()
                    .push(Call::Errors(list, format!("{event:?}")));
            })
    }

    /// Snapshot of the calls so far.
    pub fn calls(&self) -> Vec<Call<F>> {
        self.log.lock().unwrap().clone()
    }

    /// Number of `on_errors` invocations so far.
    pub fn on_errors_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Errors(..)))
            .count()
    }
}
