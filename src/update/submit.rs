use crux_core::Command;

use crate::events::Event;
use crate::http_helpers::{build_url, process_classify_response, CLASSIFY_ENDPOINT};
use crate::model::Model;
use crate::types::{AccessGrant, ClassifyRequest, SubmissionFailure, SubmissionState};
use crate::{Effect, HttpCmd};

/// Shown when submit is pressed with a blank required field
const REQUIRED_FIELDS: &str = "IP and Netmask are required.";

/// Handle the connect intent: check the required fields, then send the form
/// to the classification service.
///
/// Re-entry while `Loading` is not guarded here; the shell disables the
/// submit control during a pending request. Overlapping submissions resolve
/// last-response-wins.
pub fn handle_connect(model: &mut Model) -> Command<Effect, Event> {
    if !model.form.has_required_fields() {
        return model.fail_and_render(SubmissionFailure::MissingFields {
            message: REQUIRED_FIELDS.to_string(),
        });
    }

    let request = ClassifyRequest::from(&model.form);
    model.begin_submission();

    match HttpCmd::post(build_url(CLASSIFY_ENDPOINT))
        .header("Content-Type", "application/json")
        .body_json(&request)
    {
        Ok(builder) => Command::all([
            crux_core::render::render(),
            builder
                .build()
                .then_send(|result| Event::ConnectResponse(process_classify_response(result))),
        ]),
        Err(e) => model.fail_and_render(SubmissionFailure::Transport {
            message: format!("Failed to create classification request: {e}"),
        }),
    }
}

/// Apply the classification outcome, whenever it arrives.
///
/// There is no cancellation, so a response landing after the user left the
/// loading view still overwrites the state.
pub fn handle_connect_response(
    result: Result<AccessGrant, SubmissionFailure>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(grant) => {
            model.submission = SubmissionState::Success {
                access_code: grant.code,
            };
        }
        Err(failure) => model.fail_submission(failure),
    }
    crux_core::render::render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConnectionFormData;

    fn valid_model() -> Model {
        Model {
            form: ConnectionFormData {
                ip: "192.168.1.45".to_string(),
                netmask: "255.255.255.0".to_string(),
                available_ips: "65,534".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    mod connect {
        use super::*;

        #[test]
        fn missing_ip_fails_without_a_request() {
            let mut model = Model {
                form: ConnectionFormData {
                    netmask: "255.255.255.0".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            };

            let mut command = handle_connect(&mut model);

            assert_eq!(model.error_message(), Some(REQUIRED_FIELDS));
            assert!(model.validation_errors().is_empty());
            assert!(!command
                .effects()
                .any(|effect| matches!(effect, Effect::Http(_))));
        }

        #[test]
        fn whitespace_only_netmask_fails_without_a_request() {
            let mut model = Model {
                form: ConnectionFormData {
                    ip: "192.168.1.45".to_string(),
                    netmask: "   ".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            };

            let mut command = handle_connect(&mut model);

            assert_eq!(model.error_message(), Some(REQUIRED_FIELDS));
            assert!(!command
                .effects()
                .any(|effect| matches!(effect, Effect::Http(_))));
        }

        #[test]
        fn valid_form_enters_loading_and_sends_one_request() {
            let mut model = valid_model();

            let mut command = handle_connect(&mut model);

            assert!(model.is_loading());
            let requests = command
                .effects()
                .filter(|effect| matches!(effect, Effect::Http(_)))
                .count();
            assert_eq!(requests, 1);
        }

        #[test]
        fn request_targets_the_classification_endpoint_with_sanitized_payload() {
            let mut model = valid_model();

            let mut command = handle_connect(&mut model);

            let request = command
                .effects()
                .find_map(|effect| match effect {
                    Effect::Http(request) => Some(request),
                    _ => None,
                })
                .expect("expected an HTTP effect");

            assert_eq!(
                request.operation.url,
                "https://vulerability-engine.vercel.app/ip-address-ranges"
            );
            let body = String::from_utf8(request.operation.body.clone()).unwrap();
            assert!(body.contains(r#""available":"65534""#));
            assert!(body.contains(r#""ip":"192.168.1.45""#));
        }

        #[test]
        fn entering_loading_discards_previous_error() {
            let mut model = valid_model();
            model.fail_submission(SubmissionFailure::Rejected {
                errors: vec!["ip invalid".to_string()],
            });

            let _ = handle_connect(&mut model);

            assert!(model.is_loading());
            assert!(model.validation_errors().is_empty());
            assert_eq!(model.error_message(), None);
        }
    }

    mod connect_response {
        use super::*;

        #[test]
        fn grant_transitions_to_success() {
            let mut model = valid_model();
            model.begin_submission();

            let _ = handle_connect_response(
                Ok(AccessGrant {
                    code: "ABC123".to_string(),
                }),
                &mut model,
            );

            assert_eq!(model.access_code(), Some("ABC123"));
            assert!(model.validation_errors().is_empty());
            assert_eq!(model.error_message(), None);
        }

        #[test]
        fn rejection_carries_the_reasons_in_order() {
            let mut model = valid_model();
            model.begin_submission();

            let _ = handle_connect_response(
                Err(SubmissionFailure::Rejected {
                    errors: vec!["ip invalid".to_string(), "netmask invalid".to_string()],
                }),
                &mut model,
            );

            assert_eq!(
                model.validation_errors(),
                ["ip invalid".to_string(), "netmask invalid".to_string()]
            );
            assert_eq!(model.error_message(), None);
            assert_eq!(model.access_code(), None);
        }

        #[test]
        fn transport_failure_sets_single_line_message() {
            let mut model = valid_model();
            model.begin_submission();

            let _ = handle_connect_response(
                Err(SubmissionFailure::Transport {
                    message: "server unavailable".to_string(),
                }),
                &mut model,
            );

            assert_eq!(model.error_message(), Some("server unavailable"));
            assert!(model.validation_errors().is_empty());
        }

        #[test]
        fn late_response_overwrites_whatever_state_is_current() {
            // No request fencing: the last response to arrive wins, even if
            // the user has already navigated away from the loading view.
            let mut model = valid_model();
            model.submission = SubmissionState::Idle;

            let _ = handle_connect_response(
                Ok(AccessGrant {
                    code: "LATE42".to_string(),
                }),
                &mut model,
            );

            assert_eq!(model.access_code(), Some("LATE42"));
        }
    }
}
