mod clipboard;
mod form;
mod submit;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - the only mutator of the model
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Form lifecycle
        Event::FormUpdate { form_data } => form::handle_form_update(form_data, model),
        Event::NewConnection => form::handle_new_connection(model),
        Event::RetryDiagnosis => form::handle_retry_diagnosis(model),

        // Submission workflow
        Event::Connect => submit::handle_connect(model),
        Event::ConnectResponse(result) => submit::handle_connect_response(result, model),

        // Access code copying
        Event::CopyAccessCode => clipboard::handle_copy_access_code(model),
        Event::ClipboardWriteCompleted(result) => {
            clipboard::handle_write_completed(result, model)
        }
    }
}
