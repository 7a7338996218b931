use serde::{Deserialize, Serialize};

use crate::commands::clipboard::ClipboardResult;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Shell pushed the current form contents as a JSON document
    FormUpdate { form_data: String },

    /// User asked to submit the connection form
    Connect,

    /// User asked to copy the access code to the clipboard
    CopyAccessCode,

    /// User starts a new session after a success
    NewConnection,

    /// User leaves an error view to edit and resubmit
    RetryDiagnosis,

    // Internal events (skipped from serialization)
    #[serde(skip)]
    ConnectResponse(Result<AccessGrant, SubmissionFailure>),
    #[serde(skip)]
    ClipboardWriteCompleted(ClipboardResult),
}
