use crux_core::Command;

use crate::commands::clipboard::ClipboardResult;
use crate::events::Event;
use crate::model::Model;
use crate::{ClipboardCmd, Effect};

/// Handle the copy intent. Outside the success view there is nothing to
/// copy, so no clipboard effect is emitted.
pub fn handle_copy_access_code(model: &mut Model) -> Command<Effect, Event> {
    match model.access_code() {
        Some(code) => ClipboardCmd::write(code.to_string())
            .build()
            .then_send(Event::ClipboardWriteCompleted),
        None => Command::done(),
    }
}

/// Clipboard writes are best effort: a failed write is logged for the
/// developer console and otherwise ignored, with no state transition.
pub fn handle_write_completed(
    result: ClipboardResult,
    _model: &mut Model,
) -> Command<Effect, Event> {
    if let ClipboardResult::Failed { message } = result {
        log::warn!("Clipboard write failed: {message}");
    }
    Command::done()
}
