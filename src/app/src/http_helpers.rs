//! HTTP helper functions for Crux Core
//!
//! This module extracts common HTTP response handling logic from macros
//! into debuggable, testable functions.

use crux_http::Response;
use serde::Deserialize;

use crate::types::AuthFailure;

/// Base URL for authentication service endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`.
pub const BASE_URL: &str = "https://relative";

/// Endpoint of the authentication service's change-password operation
pub const UPDATE_PASSWORD_ENDPOINT: &str = "/update-password";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use account_ui_core::http_helpers::build_url;
/// let url = build_url("/update-password");
/// assert_eq!(url, "https://relative/update-password");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts the error text of a failed response body.
///
/// A JSON body with a `message` field wins over the raw text.
pub fn extract_error_message(body: Option<Vec<u8>>) -> Option<String> {
    let body = body.filter(|b| !b.is_empty())?;

    if let Ok(ErrorBody { message }) = serde_json::from_slice::<ErrorBody>(&body) {
        return Some(message);
    }

    match String::from_utf8(body) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("error body is not valid UTF-8: {e}");
            None
        }
    }
}

/// Convert a non-2xx response into an [`AuthFailure`] carrying its status.
///
/// `crux_http` already reports 4xx/5xx answers as `HttpError::Http`, so only
/// informational and redirect answers reach this path.
pub fn failure_from_response(response: &mut Response<Vec<u8>>) -> AuthFailure {
    let status = u16::from(response.status());
    AuthFailure::with_status(status, extract_error_message(response.take_body()))
}

/// Process the result of a status-only request to the authentication service
pub fn process_auth_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), AuthFailure> {
    match result {
        Ok(response) if is_response_success(&response) => Ok(()),
        Ok(mut response) => Err(failure_from_response(&mut response)),
        // `message` is only the status text; the body is what the service said
        Err(crux_http::HttpError::Http { code, body, .. }) => Err(AuthFailure::with_status(
            u16::from(code),
            extract_error_message(body),
        )),
        Err(crux_http::HttpError::Io(message)) => Err(AuthFailure::transport(message)),
        Err(e) => Err(AuthFailure::transport(e.to_string())),
    }
}

/// Failure used when an authenticated request is attempted without a session
pub fn not_authenticated(action: &str) -> AuthFailure {
    AuthFailure::with_status(401, Some(format!("{action} failed: Not authenticated")))
}

/// Failure used when building a request fails (e.g., JSON serialization error)
pub fn request_build_failure(action: &str, error: impl std::fmt::Display) -> AuthFailure {
    AuthFailure::transport(format!("Failed to create {action} request: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crux_http::http::StatusCode;

    #[test]
    fn json_message_is_preferred() {
        let body = br#"{"message":"Current password is wrong"}"#.to_vec();

        assert_eq!(
            extract_error_message(Some(body)).as_deref(),
            Some("Current password is wrong")
        );
    }

    #[test]
    fn plain_text_body_is_used_as_is() {
        let body = b"current password is not correct".to_vec();

        assert_eq!(
            extract_error_message(Some(body)).as_deref(),
            Some("current password is not correct")
        );
    }

    #[test]
    fn empty_or_missing_body_has_no_message() {
        assert_eq!(extract_error_message(Some(Vec::new())), None);
        assert_eq!(extract_error_message(None), None);
    }

    fn http_error(
        code: StatusCode,
        body: Option<Vec<u8>>,
    ) -> crux_http::Result<Response<Vec<u8>>> {
        Err(crux_http::HttpError::Http {
            code,
            message: code.to_string(),
            body,
        })
    }

    mod auth_response {
        use super::*;

        #[test]
        fn bad_request_keeps_status_and_body() {
            let result = http_error(
                StatusCode::BadRequest,
                Some(b"current password is not correct".to_vec()),
            );

            let failure = process_auth_response(result).unwrap_err();

            assert_eq!(failure.status, Some(400));
            assert_eq!(
                failure.message.as_deref(),
                Some("current password is not correct")
            );
        }

        #[test]
        fn empty_body_has_no_message() {
            let result = http_error(StatusCode::InternalServerError, Some(Vec::new()));

            let failure = process_auth_response(result).unwrap_err();

            assert_eq!(failure.status, Some(500));
            assert_eq!(failure.message, None);
        }

        #[test]
        fn missing_body_does_not_fall_back_to_status_text() {
            let result = http_error(StatusCode::ServiceUnavailable, None);

            let failure = process_auth_response(result).unwrap_err();

            assert_eq!(failure.status, Some(503));
            assert_eq!(failure.message, None);
        }

        #[test]
        fn json_body_message_is_used() {
            let result = http_error(
                StatusCode::InternalServerError,
                Some(br#"{"message":"password store unavailable"}"#.to_vec()),
            );

            let failure = process_auth_response(result).unwrap_err();

            assert_eq!(
                failure.message.as_deref(),
                Some("password store unavailable")
            );
        }

        #[test]
        fn io_error_is_a_transport_failure_with_its_own_text() {
            let result = Err(crux_http::HttpError::Io("connection refused".to_string()));

            let failure = process_auth_response(result).unwrap_err();

            assert_eq!(failure.status, None);
            assert_eq!(failure.message.as_deref(), Some("connection refused"));
        }
    }

    #[test]
    fn not_authenticated_maps_to_401() {
        let failure = not_authenticated("Change password");

        assert_eq!(failure.status, Some(401));
        assert_eq!(
            failure.message.as_deref(),
            Some("Change password failed: Not authenticated")
        );
    }
}
