//! Endpoint
//!
//! Typed handle on one REST resource path: List, GetOne, Submit, Delete,
//! plus drivers that run an operation against cache or form state.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::{CollectionCache, Confirmation, DeleteOutcome};
use crate::error::{SyncError, SyncResult};
use crate::form::{Draft, FormState};
use crate::record::{Record, RecordId};
use crate::state::StateCell;
use crate::transport::{ApiRequest, Transport};

/// Characters escaped when an identifier becomes a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A REST collection such as `customers`, yielding records of type `T`
pub struct Endpoint<T> {
    transport: Arc<dyn Transport>,
    path: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            path: self.path,
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint").field("path", &self.path).finish()
    }
}

impl<T> Endpoint<T>
where
    T: Record + DeserializeOwned,
{
    pub fn new(transport: Arc<dyn Transport>, path: &'static str) -> Self {
        Self {
            transport,
            path: path.trim_matches('/'),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        self.path
    }

    fn item_path(&self, id: &RecordId) -> String {
        format!("{}/{}", self.path, utf8_percent_encode(id.as_str(), SEGMENT))
    }

    /// Send and turn any non-success status into [`SyncError::Status`]
    async fn call(&self, request: ApiRequest) -> SyncResult<String> {
        let method = request.method.clone();
        let path = request.path.clone();
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                return Err(err);
            }
        };

        if !response.is_success() {
            let err = SyncError::from_status(response.status, &response.body);
            tracing::warn!(%method, %path, status = response.status, error = %err, "request rejected");
            return Err(err);
        }
        Ok(response.body)
    }

    fn decode<V: DeserializeOwned>(&self, body: &str) -> SyncResult<V> {
        serde_json::from_str(body).map_err(|e| {
            tracing::warn!(path = %self.path, error = %e, "undecodable response body");
            SyncError::Decode(e.to_string())
        })
    }

    // ========================
    // Operations
    // ========================

    /// `GET /<path>`: every record, in server order
    pub async fn list(&self) -> SyncResult<Vec<T>> {
        let body = self.call(ApiRequest::new(Method::GET, self.path)).await?;
        let records: Vec<T> = self.decode(&body)?;
        tracing::debug!(path = %self.path, count = records.len(), "listed records");
        Ok(records)
    }

    /// `GET /<path>/<id>`
    pub async fn get_one(&self, id: &RecordId) -> SyncResult<T> {
        let body = self
            .call(ApiRequest::new(Method::GET, self.item_path(id)))
            .await?;
        self.decode(&body)
    }

    /// `POST /<path>` without an id, `PATCH /<path>/<id>` with one.
    ///
    /// Success is decided by status alone. The saved record is returned when
    /// the body holds one; an empty or non-record body yields `None`.
    pub async fn submit<P: Serialize>(
        &self,
        id: Option<&RecordId>,
        payload: &P,
    ) -> SyncResult<Option<T>> {
        let body = serde_json::to_value(payload).map_err(|e| SyncError::Encode(e.to_string()))?;
        let request = match id {
            Some(id) => ApiRequest::new(Method::PATCH, self.item_path(id)),
            None => ApiRequest::new(Method::POST, self.path),
        };

        let body = self.call(request.with_body(body)).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&body) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::debug!(path = %self.path, error = %e, "saved; body is not a record");
                Ok(None)
            }
        }
    }

    /// `DELETE /<path>/<id>`; the response body is ignored
    pub async fn delete(&self, id: &RecordId) -> SyncResult<()> {
        self.call(ApiRequest::new(Method::DELETE, self.item_path(id)))
            .await?;
        tracing::debug!(path = %self.path, %id, "deleted record");
        Ok(())
    }

    // ========================
    // Drivers
    // ========================
    //
    // Each driver applies its `begin` step, awaits the call, then its
    // settle step. `None` means the cell's owner went away first.

    /// List into the cache, replacing its contents on success only
    pub async fn refresh<C>(&self, cache: &C) -> Option<SyncResult<()>>
    where
        C: StateCell<CollectionCache<T>>,
    {
        cache.write(|c| c.begin())?;
        let result = self.list().await;
        cache.write(|c| c.settle_list(result))
    }

    /// Confirmed delete: request first, then drop the record from the cache
    pub async fn delete_from<C>(
        &self,
        cache: &C,
        id: &RecordId,
        confirmation: Confirmation,
    ) -> Option<SyncResult<DeleteOutcome>>
    where
        C: StateCell<CollectionCache<T>>,
    {
        if confirmation == Confirmation::Declined {
            return Some(Ok(DeleteOutcome::Cancelled));
        }
        cache.write(|c| c.begin_delete(id))?;
        let result = self.delete(id).await;
        cache.write(|c| c.settle_delete(id, result))
    }

    /// Fill an edit-mode form from `GET /<path>/<id>`
    pub async fn load_form<D, C>(&self, form: &C) -> Option<SyncResult<()>>
    where
        D: Draft<Record = T>,
        C: StateCell<FormState<D>>,
    {
        let Some(id) = form.read(|f| f.record_id().cloned())? else {
            return Some(Ok(()));
        };
        form.write(|f| f.begin_load())?;
        let result = self.get_one(&id).await;
        form.write(|f| f.settle_load(result))
    }

    /// Submit `payload` for the form's record. Returns `true` once the form
    /// may be left; `false` if it was busy, the server rejected it, or the
    /// form went away meanwhile.
    pub async fn submit_form<D, P, C>(&self, form: &C, payload: &P) -> bool
    where
        D: Draft<Record = T>,
        P: Serialize,
        C: StateCell<FormState<D>>,
    {
        if form.write(|f| f.begin_submit()) != Some(true) {
            return false;
        }
        let Some(id) = form.read(|f| f.record_id().cloned()) else {
            return false;
        };
        let result = self.submit(id.as_ref(), payload).await;
        form.write(|f| f.settle_submit(result)) == Some(true)
    }
}
