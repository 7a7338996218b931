use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::types::{ConnectionFormData, SubmissionFailure, SubmissionState};
use crate::update_field;
use crate::Effect;

/// Handle a form update - replace the form with the document pushed by the
/// shell.
///
/// The shell sends the whole form on every edit; rendering is skipped when
/// nothing changed so keystroke echoes stay cheap. Edits while a request is
/// in flight are allowed and do not affect the already-captured payload.
pub fn handle_form_update(form_data: String, model: &mut Model) -> Command<Effect, Event> {
    match serde_json::from_str::<ConnectionFormData>(&form_data) {
        Ok(form) => update_field!(model.form, form),
        Err(e) => {
            log::error!("Malformed form document from shell: {e}. JSON: {form_data}");
            model.fail_and_render(SubmissionFailure::Transport {
                message: format!("Invalid form data: {e}"),
            })
        }
    }
}

/// Start a fresh session after a success: drop the result and the
/// connection fields, keep the diagnostic details.
pub fn handle_new_connection(model: &mut Model) -> Command<Effect, Event> {
    model.form.clear_connection_fields();
    model.submission = SubmissionState::Idle;
    crux_core::render::render()
}

/// Leave the error view and return to the form with all fields intact
pub fn handle_retry_diagnosis(model: &mut Model) -> Command<Effect, Event> {
    update_field!(model.submission, SubmissionState::Idle)
}
