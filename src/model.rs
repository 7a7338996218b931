use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// The connection form, edited freely by the shell
    pub form: ConnectionFormData,

    /// Where the current submission attempt stands
    pub submission: SubmissionState,
}

impl Model {
    /// Enter `Loading`, discarding any previous success or error payload
    pub fn begin_submission(&mut self) {
        self.submission = SubmissionState::Loading;
    }

    /// Record a failed submission
    pub fn fail_submission(&mut self, failure: SubmissionFailure) {
        self.submission = SubmissionState::Error { failure };
    }

    /// Record a failed submission and return a render command
    ///
    /// Combines `fail_submission()` with `render()`, the common pattern in
    /// the update handlers.
    pub fn fail_and_render(
        &mut self,
        failure: SubmissionFailure,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.fail_submission(failure);
        crux_core::render::render()
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn access_code(&self) -> Option<&str> {
        self.submission.access_code()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.submission.error_message()
    }

    pub fn validation_errors(&self) -> &[String] {
        self.submission.validation_errors()
    }
}
