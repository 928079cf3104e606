//! Modal display state
//!
//! One variant per mode, so "only one mode is open" holds by construction.

use crate::record::SchemeRecord;

/// Which of the three modal views is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    View,
    Edit,
    ConfirmDelete,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Viewing(SchemeRecord),
    Editing {
        record: SchemeRecord,
        buffer: SchemeRecord,
    },
    ConfirmingDelete {
        record: SchemeRecord,
        buffer: SchemeRecord,
    },
}

impl ModalState {
    pub fn view(record: SchemeRecord) -> Self {
        ModalState::Viewing(record)
    }

    /// Open the edit form with a private copy of `record` as buffer
    pub fn edit(record: SchemeRecord) -> Self {
        let buffer = record.clone();
        ModalState::Editing { record, buffer }
    }

    pub fn confirm_delete(record: SchemeRecord) -> Self {
        let buffer = record.clone();
        ModalState::ConfirmingDelete { record, buffer }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn mode(&self) -> Option<ModalMode> {
        match self {
            ModalState::Closed => None,
            ModalState::Viewing(_) => Some(ModalMode::View),
            ModalState::Editing { .. } => Some(ModalMode::Edit),
            ModalState::ConfirmingDelete { .. } => Some(ModalMode::ConfirmDelete),
        }
    }

    /// The record the modal was opened with
    pub fn record(&self) -> Option<&SchemeRecord> {
        match self {
            ModalState::Closed => None,
            ModalState::Viewing(record) => Some(record),
            ModalState::Editing { record, .. } | ModalState::ConfirmingDelete { record, .. } => {
                Some(record)
            }
        }
    }

    pub fn buffer(&self) -> Option<&SchemeRecord> {
        match self {
            ModalState::Editing { buffer, .. } | ModalState::ConfirmingDelete { buffer, .. } => {
                Some(buffer)
            }
            _ => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut SchemeRecord> {
        match self {
            ModalState::Editing { buffer, .. } | ModalState::ConfirmingDelete { buffer, .. } => {
                Some(buffer)
            }
            _ => None,
        }
    }
}
