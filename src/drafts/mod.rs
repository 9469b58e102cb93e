//! Form Drafts
//!
//! Per-entity draft records, their tagged field edits, and the payloads
//! they coerce into on submission.

mod customer;
mod order;

pub use customer::{CustomerDraft, CustomerEdit};
pub use order::{customer_options, OrderDraft, OrderEdit};
