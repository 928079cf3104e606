//! In-memory scheme list and its transitions
//!
//! Every network-backed operation is split in two: `begin_*` takes what the
//! request needs out of the state and hands back a ticket, `finish_*` applies
//! the response. The split lets the browser run the request on its event loop
//! between the two halves, and lets the generation check drop responses that
//! belong to a selection the user already left.

use tracing::{debug, error, info, warn};

use crate::error::SchemeError;
use crate::modal::ModalState;
use crate::record::{SchemeField, SchemeRecord};

/// Screens the list view can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    AddScheme,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::AddScheme => "/addscheme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient pop-up message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Side effects a finished request asks the view to perform
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    pub notification: Option<Notification>,
    pub navigate: Option<Route>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    fn notify(notification: Notification) -> Self {
        Self {
            notification: Some(notification),
            navigate: None,
        }
    }

    fn login_if(mut self, err: &SchemeError) -> Self {
        if err.requires_login() {
            self.navigate = Some(Route::Login);
        }
        self
    }
}

/// Ticket for an issued list load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLoad {
    generation: u64,
}

/// Ticket for an issued update or delete; carries the request body
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMutation {
    generation: u64,
    pub record: SchemeRecord,
}

impl PendingMutation {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// State owned by the scheme list view
#[derive(Debug, Clone, Default)]
pub struct SchemeListState {
    schemes: Vec<SchemeRecord>,
    modal: ModalState,
    error: Option<String>,
    loading: bool,
    /// Bumped on every selection change
    generation: u64,
    /// Bumped on every issued list load
    load_generation: u64,
}

impl SchemeListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schemes(&self) -> &[SchemeRecord] {
        &self.schemes
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Inline banner text for the last failed list load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn select_for_view(&mut self, record: SchemeRecord) {
        debug!(id = %record.id, "view scheme");
        self.open(ModalState::view(record));
    }

    pub fn select_for_edit(&mut self, record: SchemeRecord) {
        debug!(id = %record.id, "edit scheme");
        self.open(ModalState::edit(record));
    }

    pub fn select_for_delete(&mut self, record: SchemeRecord) {
        debug!(id = %record.id, "delete scheme");
        self.open(ModalState::confirm_delete(record));
    }

    /// Close the modal and drop the edit buffer, confirmed or not
    pub fn close_modal(&mut self) {
        debug!("close modal");
        self.open(ModalState::Closed);
    }

    /// Overwrite one attribute of the edit buffer
    pub fn set_field(
        &mut self,
        field: SchemeField,
        value: impl Into<String>,
    ) -> Result<(), SchemeError> {
        match self.modal.buffer_mut() {
            Some(buffer) => buffer.set_field(field, value),
            None => Err(SchemeError::Validation("no scheme is being edited".to_string())),
        }
    }

    fn open(&mut self, modal: ModalState) {
        self.generation = self.generation.wrapping_add(1);
        self.modal = modal;
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> PendingLoad {
        self.load_generation = self.load_generation.wrapping_add(1);
        self.loading = true;
        PendingLoad {
            generation: self.load_generation,
        }
    }

    /// Replace the whole list with the server's, or record the failure
    pub fn finish_load(
        &mut self,
        pending: PendingLoad,
        result: Result<Vec<SchemeRecord>, SchemeError>,
    ) -> Outcome {
        if pending.generation != self.load_generation {
            debug!("dropping superseded scheme list response");
            return Outcome::none();
        }
        self.loading = false;

        match result {
            Ok(schemes) => {
                info!(count = schemes.len(), "loaded schemes");
                self.schemes = schemes;
                self.error = None;
                Outcome::none()
            }
            Err(err) => {
                error!(error = %err, "failed to load schemes");
                self.error = Some(err.to_string());
                Outcome::none().login_if(&err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    /// Take the edit buffer as the update request body
    pub fn begin_edit(&self) -> Option<PendingMutation> {
        match &self.modal {
            ModalState::Editing { buffer, .. } => Some(PendingMutation {
                generation: self.generation,
                record: buffer.clone(),
            }),
            _ => {
                warn!("save requested while no scheme is being edited");
                None
            }
        }
    }

    pub fn finish_edit(
        &mut self,
        pending: PendingMutation,
        result: Result<(), SchemeError>,
    ) -> Outcome {
        let current = self.is_current(pending.generation);

        match result {
            Ok(()) => {
                self.replace(pending.record);
                if !current {
                    debug!("edit completed after the selection changed");
                    return Outcome::none();
                }
                self.modal = ModalState::Closed;
                Outcome::notify(Notification::success("Scheme edited successfully!"))
            }
            Err(err) => {
                error!(id = %pending.record.id, error = %err, "failed to update scheme");
                if !current {
                    return Outcome::none();
                }
                Outcome::notify(Notification::error("Error editing scheme!")).login_if(&err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Take the buffer as the delete request body.
    ///
    /// A buffer without an identifier is logged and dropped here; no request
    /// is issued and the user is not told.
    pub fn begin_delete(&self) -> Option<PendingMutation> {
        let buffer = match &self.modal {
            ModalState::ConfirmingDelete { buffer, .. } => buffer,
            _ => {
                warn!("delete confirmed while no scheme is selected for deletion");
                return None;
            }
        };
        if !buffer.has_id() {
            error!("Invalid scheme ID for deletion");
            return None;
        }
        Some(PendingMutation {
            generation: self.generation,
            record: buffer.clone(),
        })
    }

    /// Delete failures only notify; the modal stays open and nothing navigates
    pub fn finish_delete(
        &mut self,
        pending: PendingMutation,
        result: Result<(), SchemeError>,
    ) -> Outcome {
        let current = self.is_current(pending.generation);

        match result {
            Ok(()) => {
                self.remove(pending.id());
                if !current {
                    debug!("delete completed after the selection changed");
                    return Outcome::none();
                }
                self.modal = ModalState::Closed;
                Outcome::notify(Notification::success("Scheme deleted successfully!"))
            }
            Err(err) => {
                error!(id = %pending.record.id, error = %err, "failed to delete scheme");
                if !current {
                    return Outcome::none();
                }
                let message = if err.is_status() {
                    "Failed to delete scheme.".to_string()
                } else {
                    format!("Error deleting scheme: {}", err)
                };
                Outcome::notify(Notification::error(message))
            }
        }
    }

    // ------------------------------------------------------------------
    // List patching
    // ------------------------------------------------------------------

    fn replace(&mut self, record: SchemeRecord) {
        if let Some(slot) = self.schemes.iter_mut().find(|s| s.id == record.id) {
            *slot = record;
        }
    }

    fn remove(&mut self, id: &str) {
        self.schemes.retain(|s| s.id != id);
    }
}
