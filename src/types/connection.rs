use serde::{Deserialize, Serialize};

/// User-entered connection form.
///
/// Only `ip` and `netmask` are required; the rest are diagnostic details
/// the user may fill in from the terminal output. No format validation
/// happens here, semantic validation belongs to the classification service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionFormData {
    pub ip: String,
    pub netmask: String,
    pub address_type: String,
    pub range: String,
    pub available_ips: String,
    pub network_address: String,
    pub broadcast_address: String,
}

impl ConnectionFormData {
    /// Both required fields carry something other than whitespace
    pub fn has_required_fields(&self) -> bool {
        !self.ip.trim().is_empty() && !self.netmask.trim().is_empty()
    }

    /// Clear the fields a new session starts over with.
    ///
    /// The diagnostic detail fields are kept, matching the behavior of the
    /// success view's "Initialize New Connection" action.
    pub fn clear_connection_fields(&mut self) {
        self.ip.clear();
        self.netmask.clear();
    }
}

/// State of the connection submission workflow.
///
/// Exactly one variant is active at a time, so an access code and a
/// rejection list can never coexist, and entering `Loading` drops any
/// previous payload.
///
/// ```text
/// Idle --Connect (valid fields)--------> Loading
/// Idle --Connect (missing ip/netmask)--> Error(MissingFields)
/// Loading --grant response-------------> Success
/// Loading --errors[] response----------> Error(Rejected)
/// Loading --other failure--------------> Error(Transport)
/// Success --NewConnection--------------> Idle
/// Error --RetryDiagnosis---------------> Idle
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success {
        access_code: String,
    },
    Error {
        failure: SubmissionFailure,
    },
}

/// Why a submission did not produce an access code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionFailure {
    /// A required field was blank; no request was sent
    MissingFields { message: String },
    /// The service rejected the submission with itemized reasons
    Rejected { errors: Vec<String> },
    /// The request never produced a usable answer
    Transport { message: String },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The access code, present only in the success view
    pub fn access_code(&self) -> Option<&str> {
        match self {
            Self::Success { access_code } => Some(access_code),
            _ => None,
        }
    }

    /// Single-line error text, present for failures that carry one
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error {
                failure: SubmissionFailure::MissingFields { message },
            }
            | Self::Error {
                failure: SubmissionFailure::Transport { message },
            } => Some(message),
            _ => None,
        }
    }

    /// Itemized rejection reasons, empty unless the service rejected the
    /// submission
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::Error {
                failure: SubmissionFailure::Rejected { errors },
            } => errors,
            _ => &[],
        }
    }
}
