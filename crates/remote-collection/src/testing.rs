//! Test Support
//!
//! Scripted in-memory transport and a minimal record type.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};
use crate::form::Draft;
use crate::record::{Record, RecordId};
use crate::state::StateCell;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<ApiResponse>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(ApiResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> SyncResult<ApiResponse> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SyncError::Network("no scripted response".into()))
    }
}

/// A cell whose owner goes away after a fixed number of writes, the way a
/// view is disposed while its request is still in flight
pub struct DetachingCell<S> {
    state: RefCell<S>,
    writes_left: Cell<usize>,
    gone: Cell<bool>,
}

impl<S> DetachingCell<S> {
    pub fn new(state: S, live_writes: usize) -> Self {
        Self {
            state: RefCell::new(state),
            writes_left: Cell::new(live_writes),
            gone: Cell::new(false),
        }
    }

    pub fn into_inner(self) -> S {
        self.state.into_inner()
    }
}

impl<S> StateCell<S> for DetachingCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        if self.gone.get() {
            return None;
        }
        self.state.read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        match self.writes_left.get() {
            0 => {
                self.gone.set(true);
                None
            }
            n => {
                self.writes_left.set(n - 1);
                self.state.write(f)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
}

impl Record for Customer {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

pub fn customer(id: i64, name: &str) -> Customer {
    Customer {
        id: RecordId::numeric(id),
        name: name.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDraft {
    pub name: String,
}

impl Draft for CustomerDraft {
    type Record = Customer;
    type Edit = String;

    fn from_record(record: &Customer) -> Self {
        Self {
            name: record.name.clone(),
        }
    }

    fn apply(&mut self, name: String) {
        self.name = name;
    }
}
