//! # Scheme Admin Core
//!
//! Platform-independent pieces of the scheme administration screen:
//!
//! - **Record**: the `SchemeRecord` wire model and its editable fields
//! - **Errors**: typed failures for transport, auth, status and validation
//! - **Api**: the `SchemeApi` port and the credential capability it is given
//! - **Modal**: the view/edit/delete-confirm state machine
//! - **State**: the in-memory list with begin/finish transitions per request
//! - **Controller**: async driver that pairs the state with a `SchemeApi`
//!
//! Nothing here touches a browser or a socket; the web UI and the native
//! host each bring their own `SchemeApi` implementation.

pub mod api;
pub mod controller;
pub mod error;
pub mod modal;
pub mod record;
pub mod state;

pub use api::{CredentialProvider, Credentials, Endpoint, SchemeApi, DEFAULT_API_BASE_URL};
pub use controller::SchemeListController;
pub use error::{SchemeError, SchemeResult};
pub use modal::{ModalMode, ModalState};
pub use record::{Amount, SchemeField, SchemeListResponse, SchemeRecord};
pub use state::{
    Notification, NotificationLevel, Outcome, PendingLoad, PendingMutation, Route,
    SchemeListState,
};
