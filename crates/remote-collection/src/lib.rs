//! Remote Collection Sync
//!
//! Fetch-on-mount, confirmed delete and form submission against a REST
//! collection, with uniform loading and error state.
//!
//! - [`Endpoint`]: List / GetOne / Submit / Delete for one resource path
//! - [`CollectionCache`]: the last successful List, mutated only after a
//!   server-confirmed delete
//! - [`FormState`]: draft lifecycle for create and edit forms
//! - [`StateCell`]: where a driver finds its cache or form
//! - [`Transport`]: the network seam, [`HttpTransport`] in production

mod cache;
mod coerce;
mod endpoint;
mod error;
mod form;
mod record;
mod state;
mod transport;

#[cfg(test)]
mod testing;

pub use cache::{CollectionCache, Confirmation, DeleteOutcome};
pub use coerce::{
    calendar_date, join_list, optional_calendar_date, parse_date, split_list, DraftError, DATE_FORMAT,
};
pub use endpoint::Endpoint;
pub use error::{error_message, SyncError, SyncResult};
pub use form::{Draft, FormPhase, FormState};
pub use record::{Record, RecordId};
pub use state::StateCell;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

pub use reqwest::Method;
