//! Collection Cache
//!
//! Local mirror of the last successful List, with loading and error state.
//! Every remote call is split into `begin` (before the await) and a
//! `settle_*` step (after it), so a view can drop the settle step once it
//! has been unmounted.

use crate::error::SyncResult;
use crate::record::{Record, RecordId};

/// Answer to the destructive-action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// What a delete call ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The prompt was declined; nothing was sent
    Cancelled,
    /// The server confirmed and the record left the cache
    Deleted,
}

/// Collection cache for one entity type
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionCache<T> {
    items: Vec<T>,
    in_flight: usize,
    /// Records with a delete call outstanding
    deleting: Vec<RecordId>,
    error: Option<String>,
    loaded: bool,
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            in_flight: 0,
            deleting: Vec::new(),
            error: None,
            loaded: false,
        }
    }
}

impl<T: Record> CollectionCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advisory: true while any call is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Message of the most recent failure, cleared when a new call begins
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether at least one List has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A call is about to be issued
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    /// A delete of `id` is about to be issued
    pub fn begin_delete(&mut self, id: &RecordId) {
        self.begin();
        self.deleting.push(id.clone());
    }

    /// Whether a delete of `id` is outstanding; a List alone does not count
    pub fn is_deleting(&self, id: &RecordId) -> bool {
        self.deleting.contains(id)
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Apply a List result. Failure keeps the stale items visible.
    pub fn settle_list(&mut self, result: SyncResult<Vec<T>>) -> SyncResult<()> {
        self.finish();
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Apply a Delete result. Only a confirmed delete touches the items.
    pub fn settle_delete(&mut self, id: &RecordId, result: SyncResult<()>) -> SyncResult<DeleteOutcome> {
        self.finish();
        if let Some(pos) = self.deleting.iter().position(|pending| pending == id) {
            self.deleting.remove(pos);
        }
        match result {
            Ok(()) => {
                self.items.retain(|item| item.id() != id);
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
