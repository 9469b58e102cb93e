//! Reactive Drivers
//!
//! Runs the endpoint drivers against state held in signals. The signal is
//! wrapped in a [`SignalCell`], so a view that is disposed while a call is
//! in flight simply stops receiving its settle step.

use leptos::prelude::*;
use leptos::task::spawn_local;
use remote_collection::{
    CollectionCache, Confirmation, Draft, Endpoint, FormState, Record, RecordId, StateCell,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A signal seen as a driver's state cell
pub struct SignalCell<S: 'static>(pub RwSignal<S>);

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Re-list the collection into `cache`
pub fn refresh<T>(cache: RwSignal<CollectionCache<T>>, endpoint: Endpoint<T>)
where
    T: Record + DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        if endpoint.refresh(&SignalCell(cache)).await.is_none() {
            tracing::debug!(path = %endpoint.path(), "list settled after unmount");
        }
    });
}

/// Delete `id` once confirmed; the cache only changes if the server agrees
pub fn delete<T>(
    cache: RwSignal<CollectionCache<T>>,
    endpoint: Endpoint<T>,
    id: RecordId,
    answer: Confirmation,
) where
    T: Record + DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        let _ = endpoint.delete_from(&SignalCell(cache), &id, answer).await;
    });
}

/// Edit mode: fetch the record and pre-fill the draft
pub fn load_form<T, D>(form: RwSignal<FormState<D>>, endpoint: Endpoint<T>)
where
    T: Record + DeserializeOwned + 'static,
    D: Draft<Record = T> + Send + Sync + 'static,
{
    spawn_local(async move {
        let _ = endpoint.load_form(&SignalCell(form)).await;
    });
}

/// Send `payload` for the form's record and call `on_saved` on success
pub fn submit_form<T, D, P>(
    form: RwSignal<FormState<D>>,
    endpoint: Endpoint<T>,
    payload: P,
    on_saved: impl FnOnce() + 'static,
) where
    T: Record + DeserializeOwned + 'static,
    D: Draft<Record = T> + Send + Sync + 'static,
    P: Serialize + 'static,
{
    spawn_local(async move {
        if endpoint.submit_form(&SignalCell(form), &payload).await {
            on_saved();
        }
    });
}
