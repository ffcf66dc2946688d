//! Detail/form controller: load-by-id, validate, submit create-or-update.

use client::ResourceApi;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::notify::Notifier;

/// Lifecycle phase of a detail/form screen.
///
/// Editing an existing entity passes through `Loading` on entry; creating
/// a new one starts straight at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Loading,
    Loaded,
    LoadError,
    Validating,
    Submitting,
    Saved,
    SubmitError,
}

/// Controller state behind one create/edit form.
///
/// The draft payload itself stays with the view (it owns the input
/// widgets); the controller validates it, drives the submission and keeps
/// the phase/error state. A failed submit leaves the caller's draft
/// untouched so the user can retry without re-typing.
pub struct FormController<R: ResourceApi, N: Notifier> {
    client: R,
    notifier: N,
    entity_id: Option<Uuid>,
    entity: Option<R::Entity>,
    phase: FormPhase,
    error: Option<String>,
    field_errors: Option<ValidationErrors>,
    touched: bool,
}

impl<R: ResourceApi, N: Notifier> FormController<R, N> {
    pub fn new(client: R, notifier: N) -> Self {
        Self {
            client,
            notifier,
            entity_id: None,
            entity: None,
            phase: FormPhase::Idle,
            error: None,
            field_errors: None,
            touched: false,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        self.field_errors.as_ref()
    }

    /// The loaded entity, for pre-populating the form in edit mode.
    pub fn entity(&self) -> Option<&R::Entity> {
        self.entity.as_ref()
    }

    pub fn entity_id(&self) -> Option<Uuid> {
        self.entity_id
    }

    pub fn is_editing(&self) -> bool {
        self.entity_id.is_some()
    }

    /// Whether validation messages should be shown; set on first submit.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Fetches the entity to edit. Only called when the route carries an
    /// id; the create flow skips this entirely.
    pub async fn load(&mut self, id: Uuid) -> bool {
        self.phase = FormPhase::Loading;
        self.error = None;

        match self.client.get(id).await {
            Ok(entity) => {
                self.entity_id = Some(id);
                self.entity = Some(entity);
                self.phase = FormPhase::Loaded;
                true
            }
            Err(err) => {
                error!(
                    resource = self.client.resource_name(),
                    id = %id,
                    error = %err,
                    "failed to load entity"
                );
                self.error = Some(format!("Failed to load {}", self.client.resource_name()));
                self.phase = FormPhase::LoadError;
                false
            }
        }
    }

    /// Validates and submits a create payload.
    ///
    /// Returns true when the entity was saved; the caller then navigates
    /// back to the list route.
    pub async fn submit_create(&mut self, draft: &R::Create) -> bool
    where
        R::Create: Validate,
    {
        if !self.start_validation(draft) {
            return false;
        }

        match self.client.create(draft).await {
            Ok(entity) => {
                info!(resource = self.client.resource_name(), "created");
                self.notifier
                    .success(&format!("{} created", self.client.resource_name()));
                self.entity = Some(entity);
                self.finish_save();
                true
            }
            Err(err) => {
                error!(
                    resource = self.client.resource_name(),
                    error = %err,
                    "create failed"
                );
                self.error = Some(format!(
                    "Failed to create {}",
                    self.client.resource_name()
                ));
                self.phase = FormPhase::SubmitError;
                false
            }
        }
    }

    /// Validates and submits a partial update for the loaded entity.
    pub async fn submit_update(&mut self, payload: &R::Update) -> bool
    where
        R::Update: Validate,
    {
        let Some(id) = self.entity_id else {
            warn!(
                resource = self.client.resource_name(),
                "update submitted without a loaded entity"
            );
            return false;
        };

        if !self.start_validation(payload) {
            return false;
        }

        match self.client.update(id, payload).await {
            Ok(entity) => {
                info!(resource = self.client.resource_name(), id = %id, "updated");
                self.notifier
                    .success(&format!("{} updated", self.client.resource_name()));
                self.entity = Some(entity);
                self.finish_save();
                true
            }
            Err(err) => {
                error!(
                    resource = self.client.resource_name(),
                    id = %id,
                    error = %err,
                    "update failed"
                );
                self.error = Some(format!(
                    "Failed to update {}",
                    self.client.resource_name()
                ));
                self.phase = FormPhase::SubmitError;
                false
            }
        }
    }

    /// Marks the form touched and validates the payload. Invalid payloads
    /// abort the submission before any network call.
    fn start_validation<P: Validate>(&mut self, payload: &P) -> bool {
        self.touched = true;
        let resume = self.phase;
        self.phase = FormPhase::Validating;

        if let Err(errors) = payload.validate() {
            warn!(
                resource = self.client.resource_name(),
                invalid_fields = errors.field_errors().len(),
                "payload failed validation"
            );
            self.field_errors = Some(errors);
            self.phase = resume;
            return false;
        }

        self.field_errors = None;
        self.error = None;
        self.phase = FormPhase::Submitting;
        true
    }

    /// Returns the form to a pristine state after a successful save and
    /// releases the held entity id.
    fn finish_save(&mut self) {
        self.entity_id = None;
        self.error = None;
        self.field_errors = None;
        self.touched = false;
        self.phase = FormPhase::Saved;
    }
}
