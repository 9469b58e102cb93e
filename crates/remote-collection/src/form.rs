//! Form State
//!
//! Per-form state machine around a draft record:
//! `Empty → Loading → Populated → Submitting → {NavigatedAway | Populated + error}`.
//! Create forms start at `Populated` with default values.

use crate::error::SyncResult;
use crate::record::RecordId;

/// In-progress form values for one entity type
pub trait Draft: Clone + Default {
    /// The entity an edit form is loaded from
    type Record;

    /// Tagged single-field update: field identifier plus new value
    type Edit;

    /// Pre-fill from an existing record
    fn from_record(record: &Self::Record) -> Self;

    /// Replace exactly the field named by `edit`
    fn apply(&mut self, edit: Self::Edit);
}

/// Create a new record or edit an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Edit form before (or after a failed) load; fields are hidden
    Empty,
    Loading,
    Populated,
    Submitting,
    /// Saved; the view should return to the list
    NavigatedAway,
}

/// A draft plus where it is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    mode: FormMode,
    phase: FormPhase,
    draft: D,
    error: Option<String>,
}

impl<D: Draft> FormState<D> {
    /// Create-mode form, populated with defaults
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            phase: FormPhase::Populated,
            draft: D::default(),
            error: None,
        }
    }

    /// Edit-mode form, empty until loaded
    pub fn edit(id: RecordId) -> Self {
        Self {
            mode: FormMode::Edit(id),
            phase: FormPhase::Empty,
            draft: D::default(),
            error: None,
        }
    }

    /// Create without an id, edit with one
    pub fn for_id(id: Option<RecordId>) -> Self {
        match id {
            Some(id) => Self::edit(id),
            None => Self::create(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn record_id(&self) -> Option<&RecordId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drives the loading flag that disables submit and cancel
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Loading | FormPhase::Submitting)
    }

    /// Whether the fields hold known values and may be rendered
    pub fn shows_fields(&self) -> bool {
        matches!(self.phase, FormPhase::Populated | FormPhase::Submitting)
    }

    // ========================
    // Transitions
    // ========================

    /// Edit forms only: GetOne is about to be issued
    pub fn begin_load(&mut self) {
        if self.is_edit() && self.phase == FormPhase::Empty {
            self.phase = FormPhase::Loading;
            self.error = None;
        }
    }

    /// Apply the GetOne result. Failure leaves the form `Empty`.
    pub fn settle_load(&mut self, result: SyncResult<D::Record>) -> SyncResult<()> {
        match result {
            Ok(record) => {
                self.draft = D::from_record(&record);
                self.phase = FormPhase::Populated;
                Ok(())
            }
            Err(err) => {
                self.phase = FormPhase::Empty;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Apply one field edit while the draft is editable
    pub fn apply(&mut self, edit: D::Edit) {
        if self.phase == FormPhase::Populated {
            self.draft.apply(edit);
        }
    }

    /// Derived update outside of user edits, e.g. defaults that depend on a
    /// related collection
    pub fn update_draft(&mut self, update: impl FnOnce(&mut D)) {
        if self.phase == FormPhase::Populated {
            update(&mut self.draft);
        }
    }

    /// Returns `false` if the form is not in a submittable phase
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Populated {
            return false;
        }
        self.phase = FormPhase::Submitting;
        self.error = None;
        true
    }

    /// Apply the Submit result; `true` means the view may navigate away
    pub fn settle_submit<T>(&mut self, result: SyncResult<T>) -> bool {
        match result {
            Ok(_) => {
                self.phase = FormPhase::NavigatedAway;
                true
            }
            Err(err) => {
                self.phase = FormPhase::Populated;
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Client-side rejection before any request; the draft is kept
    pub fn reject(&mut self, message: impl Into<String>) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Populated;
        }
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::testing::{customer, Customer, CustomerDraft, DetachingCell, ScriptedTransport};
    use crate::Endpoint;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_create_starts_populated() {
        let form: FormState<CustomerDraft> = FormState::create();
        assert_eq!(form.phase(), FormPhase::Populated);
        assert!(form.shows_fields());
        assert!(!form.is_busy());
        assert_eq!(form.record_id(), None);
    }

    #[test]
    fn test_edit_load_populates_draft() {
        let mut form: FormState<CustomerDraft> = FormState::edit(RecordId::numeric(3));
        assert!(!form.shows_fields());

        form.begin_load();
        assert_eq!(form.phase(), FormPhase::Loading);
        assert!(form.is_busy());

        form.settle_load(Ok(customer(3, "Ada"))).unwrap();
        assert_eq!(form.phase(), FormPhase::Populated);
        assert_eq!(form.draft().name, "Ada");
    }

    #[test]
    fn test_failed_load_hides_fields() {
        let mut form: FormState<CustomerDraft> = FormState::edit(RecordId::numeric(3));
        form.begin_load();
        let _ = form.settle_load(Err(SyncError::from_status(404, r#"{"message":"gone"}"#)));
        assert_eq!(form.phase(), FormPhase::Empty);
        assert!(!form.shows_fields());
        assert_eq!(form.error(), Some("gone"));
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut form: FormState<CustomerDraft> = FormState::create();
        form.apply("Ada".into());
        assert!(form.begin_submit());
        form.apply("Grace".into());
        assert_eq!(form.draft().name, "Ada");
        assert!(!form.begin_submit());
    }

    #[test]
    fn test_failed_submit_keeps_input_and_message() {
        let mut form: FormState<CustomerDraft> = FormState::create();
        form.apply("Ada".into());
        assert!(form.begin_submit());

        let left = form.settle_submit::<Customer>(Err(SyncError::from_status(
            400,
            r#"{"message":["firstName must not be empty"]}"#,
        )));
        assert!(!left);
        assert_eq!(form.phase(), FormPhase::Populated);
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(form.error(), Some("firstName must not be empty"));
    }

    #[test]
    fn test_reject_returns_to_populated() {
        let mut form: FormState<CustomerDraft> = FormState::create();
        assert!(form.begin_submit());
        form.reject("At least one menu item is required");
        assert_eq!(form.phase(), FormPhase::Populated);
        assert_eq!(form.error(), Some("At least one menu item is required"));
    }

    #[tokio::test]
    async fn test_submit_driver_patches_in_edit_mode() {
        let transport = ScriptedTransport::new();
        transport.reply(200, r#"{"id":3,"name":"Ada"}"#);
        transport.reply(200, r#"{"id":3,"name":"Ada L."}"#);
        let endpoint: Endpoint<Customer> = Endpoint::new(transport.clone(), "customers");

        let form = RefCell::new(FormState::<CustomerDraft>::for_id(Some(RecordId::numeric(3))));
        endpoint.load_form(&form).await.unwrap().unwrap();
        form.borrow_mut().apply("Ada L.".into());

        let payload = json!({ "name": form.borrow().draft().name.clone() });
        assert!(endpoint.submit_form(&form, &payload).await);
        assert_eq!(form.borrow().phase(), FormPhase::NavigatedAway);

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].method, reqwest::Method::PATCH);
        assert_eq!(sent[1].path, "customers/3");
        assert_eq!(sent[1].body, Some(json!({ "name": "Ada L." })));
    }

    #[tokio::test]
    async fn test_load_driver_is_noop_for_create() {
        let transport = ScriptedTransport::new();
        let endpoint: Endpoint<Customer> = Endpoint::new(transport.clone(), "customers");
        let form = RefCell::new(FormState::<CustomerDraft>::create());

        endpoint.load_form(&form).await.unwrap().unwrap();
        assert!(transport.requests().is_empty());
        assert_eq!(form.borrow().phase(), FormPhase::Populated);
    }

    #[tokio::test]
    async fn test_no_content_reply_leaves_create_form() {
        let transport = ScriptedTransport::new();
        transport.reply(204, "");
        let endpoint: Endpoint<Customer> = Endpoint::new(transport.clone(), "customers");

        let form = RefCell::new(FormState::<CustomerDraft>::create());
        form.borrow_mut().apply("Ada".into());
        assert!(endpoint.submit_form(&form, &json!({ "name": "Ada" })).await);

        let form = form.into_inner();
        assert_eq!(form.phase(), FormPhase::NavigatedAway);
        assert_eq!(form.error(), None);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_non_record_reply_leaves_edit_form() {
        let transport = ScriptedTransport::new();
        transport.reply(200, r#"{"id":3,"name":"Ada"}"#);
        transport.reply(200, r#"{"ok":true}"#);
        let endpoint: Endpoint<Customer> = Endpoint::new(transport.clone(), "customers");

        let form = RefCell::new(FormState::<CustomerDraft>::edit(RecordId::numeric(3)));
        endpoint.load_form(&form).await.unwrap().unwrap();
        assert!(endpoint.submit_form(&form, &json!({ "name": "Ada" })).await);
        assert_eq!(form.borrow().phase(), FormPhase::NavigatedAway);
        assert_eq!(form.borrow().error(), None);
    }

    #[tokio::test]
    async fn test_rejected_submit_does_not_leave() {
        let transport = ScriptedTransport::new();
        transport.reply(400, r#"{"message":["firstName must not be empty"]}"#);
        let endpoint: Endpoint<Customer> = Endpoint::new(transport.clone(), "customers");

        let form = RefCell::new(FormState::<CustomerDraft>::create());
        form.borrow_mut().apply("Ada".into());
        assert!(!endpoint.submit_form(&form, &json!({ "name": "" })).await);

        let form = form.into_inner();
        assert_eq!(form.phase(), FormPhase::Populated);
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(form.error(), Some("firstName must not be empty"));
    }

    #[tokio::test]
    async fn test_busy_form_sends_nothing() {
        let transport = ScriptedTransport::new();
        let endpoint: Endpoint<Customer> = Endpoint::new(transport.clone(), "customers");

        let form = RefCell::new(FormState::<CustomerDraft>::edit(RecordId::numeric(3)));
        form.borrow_mut().begin_load();
        assert!(!endpoint.submit_form(&form, &json!({ "name": "Ada" })).await);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_saved_after_owner_gone_does_not_leave() {
        let transport = ScriptedTransport::new();
        transport.reply(201, r#"{"id":4,"name":"Ada"}"#);
        let endpoint: Endpoint<Customer> = Endpoint::new(transport.clone(), "customers");

        let form = DetachingCell::new(FormState::<CustomerDraft>::create(), 1);
        assert!(!endpoint.submit_form(&form, &json!({ "name": "Ada" })).await);
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(form.into_inner().phase(), FormPhase::Submitting);
    }
}
