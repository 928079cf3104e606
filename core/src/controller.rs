//! Async driver for the scheme list
//!
//! Runs each `begin_*`/`finish_*` pair around the matching `SchemeApi` call.
//! The headless CLI and the tests drive the list through this; the browser
//! UI calls the two halves itself so it can spawn the request.

use crate::api::SchemeApi;
use crate::error::SchemeError;
use crate::record::{SchemeField, SchemeRecord};
use crate::state::{Outcome, SchemeListState};

pub struct SchemeListController<A> {
    api: A,
    state: SchemeListState,
}

impl<A: SchemeApi> SchemeListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: SchemeListState::new(),
        }
    }

    pub fn state(&self) -> &SchemeListState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_state(self) -> SchemeListState {
        self.state
    }

    /// Fetch the whole list and replace the in-memory copy
    pub async fn load_all(&mut self) -> Outcome {
        let pending = self.state.begin_load();
        let result = self.api.list_schemes().await;
        self.state.finish_load(pending, result)
    }

    pub fn select_for_view(&mut self, record: SchemeRecord) {
        self.state.select_for_view(record);
    }

    pub fn select_for_edit(&mut self, record: SchemeRecord) {
        self.state.select_for_edit(record);
    }

    pub fn select_for_delete(&mut self, record: SchemeRecord) {
        self.state.select_for_delete(record);
    }

    pub fn close_modal(&mut self) {
        self.state.close_modal();
    }

    pub fn set_field(
        &mut self,
        field: SchemeField,
        value: impl Into<String>,
    ) -> Result<(), SchemeError> {
        self.state.set_field(field, value)
    }

    /// Send the edit buffer; a no-op when no edit is open
    pub async fn commit_edit(&mut self) -> Outcome {
        let Some(pending) = self.state.begin_edit() else {
            return Outcome::none();
        };
        let result = self.api.update_scheme(pending.id(), &pending.record).await;
        self.state.finish_edit(pending, result)
    }

    /// Send the delete; a no-op when nothing is confirmed or the id is empty
    pub async fn commit_delete(&mut self) -> Outcome {
        let Some(pending) = self.state.begin_delete() else {
            return Outcome::none();
        };
        let result = self.api.delete_scheme(pending.id(), &pending.record).await;
        self.state.finish_delete(pending, result)
    }
}
