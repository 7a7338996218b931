//! HTTP helpers for talking to the classification service.
//!
//! Response interpretation lives here as plain functions so the three
//! submission outcomes stay debuggable and testable outside the update
//! loop.

use crux_http::Response;

use crate::types::{AccessGrant, ClassifyRejection, SubmissionFailure};

/// Base URL of the classification service.
///
/// The single configuration value of the core, fixed at build time.
pub const BASE_URL: &str = "https://vulerability-engine.vercel.app";

/// Endpoint performing IP range classification
pub const CLASSIFY_ENDPOINT: &str = "/ip-address-ranges";

/// Shown when the request never produced an answer at all
pub const CONNECTION_FAILED: &str = "Connection failed.";

/// Shown when the service answered non-2xx without a usable body
pub const CONNECTION_REFUSED: &str = "Server connection refused.";

/// Constructs the full address from a given endpoint.
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Interpret a classification answer from its status and raw body.
///
/// Exactly three outcomes:
/// - 2xx with a `code` field: access granted
/// - non-2xx with an `errors` array: rejected, reasons kept in order
/// - anything else: transport failure, carrying the server's `message`
///   when it sent one
pub fn interpret_classify_body(
    success: bool,
    body: Option<&[u8]>,
) -> Result<AccessGrant, SubmissionFailure> {
    let body = body.unwrap_or_default();

    if success {
        return serde_json::from_slice::<AccessGrant>(body).map_err(|e| {
            log::error!("Unusable classification response: {e}");
            SubmissionFailure::Transport {
                message: CONNECTION_FAILED.to_string(),
            }
        });
    }

    match serde_json::from_slice::<ClassifyRejection>(body) {
        Ok(ClassifyRejection {
            errors: Some(errors),
            ..
        }) => Err(SubmissionFailure::Rejected { errors }),
        Ok(ClassifyRejection {
            message: Some(message),
            ..
        }) => Err(SubmissionFailure::Transport { message }),
        Ok(_) | Err(_) => Err(SubmissionFailure::Transport {
            message: CONNECTION_REFUSED.to_string(),
        }),
    }
}

/// Process the raw `crux_http` result into a classification outcome.
///
/// Only the status/body extraction lives here; `crux_http` responses have
/// no public constructor, so everything worth testing is in
/// [`interpret_classify_body`].
pub fn process_classify_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<AccessGrant, SubmissionFailure> {
    match result {
        Ok(mut response) => {
            let success = response.status().is_success();
            let body = response.take_body();
            interpret_classify_body(success, body.as_deref())
        }
        Err(e) => {
            log::warn!("Classification request failed: {e}");
            Err(SubmissionFailure::Transport {
                message: CONNECTION_FAILED.to_string(),
            })
        }
    }
}
