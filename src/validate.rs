use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::{ApiError, Result};

/// Response envelope: status line plus the raw body text.
///
/// The body is kept unparsed until [`ApiResponse::validate`] runs, so a payload
/// that is not JSON surfaces as a parse failure rather than a validation one.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    status: StatusCode,
    status_text: String,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        let status_text = status
            .canonical_reason()
            .unwrap_or("<unknown status>")
            .to_owned();
        Self {
            status,
            status_text,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Canonical reason phrase for the status code.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Raw body text as received.
    pub fn body_text(&self) -> &str {
        &self.body
    }

    /// Parses the body, then checks the status and that the body is non-empty.
    ///
    /// Order matters: a malformed payload is [`ApiError::Parse`] even when the
    /// status also mismatches. A body of JSON `null` is [`ApiError::EmptyBody`];
    /// `{}` and `[]` pass. Every failure is logged before it propagates.
    pub fn validate(&self, expected: StatusCode) -> Result<JsonValue> {
        let body: JsonValue = serde_json::from_str(&self.body).map_err(|err| {
            let error = ApiError::Parse(format!("invalid response JSON: {err}"));
            tracing::error!(status = self.status.as_u16(), %error, "response validation failed");
            error
        })?;

        tracing::debug!(
            status = self.status.as_u16(),
            status_text = %self.status_text,
            body = %body,
            "response validated"
        );

        if self.status != expected {
            let error = ApiError::StatusMismatch {
                expected: expected.as_u16(),
                actual: self.status.as_u16(),
            };
            tracing::error!(%error, "response validation failed");
            return Err(error);
        }

        if body.is_null() {
            let error = ApiError::EmptyBody;
            tracing::error!(%error, "response validation failed");
            return Err(error);
        }

        Ok(body)
    }

    /// Validates, then decodes the body into a typed value.
    pub fn validate_as<T: DeserializeOwned>(&self, expected: StatusCode) -> Result<T> {
        let body = self.validate(expected)?;
        serde_json::from_value(body).map_err(|err| {
            let error = ApiError::Parse(format!("unexpected response shape: {err}"));
            tracing::error!(%error, "response decoding failed");
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::ApiResponse;
    use crate::ApiError;

    fn response(status: StatusCode, body: &str) -> ApiResponse {
        ApiResponse::new(status, body.to_owned())
    }

    #[test]
    fn matching_status_returns_parsed_body() {
        let body = response(StatusCode::OK, r#"{"id":"1","name":"kit"}"#)
            .validate(StatusCode::OK)
            .expect("validation must pass");
        assert_eq!(body, json!({"id": "1", "name": "kit"}));
    }

    #[test]
    fn malformed_body_is_parse_error_even_on_status_mismatch() {
        let err = response(StatusCode::NOT_FOUND, "not json")
            .validate(StatusCode::OK)
            .expect_err("validation must fail");
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn status_mismatch_carries_both_codes() {
        let err = response(StatusCode::NOT_FOUND, "{}")
            .validate(StatusCode::OK)
            .expect_err("validation must fail");
        match err {
            ApiError::StatusMismatch { expected, actual } => {
                assert_eq!(expected, 200);
                assert_eq!(actual, 404);
            }
            other => panic!("expected status mismatch, got {other:?}"),
        }
    }

    #[test]
    fn null_body_is_empty_but_empty_object_is_not() {
        let err = response(StatusCode::OK, "null")
            .validate(StatusCode::OK)
            .expect_err("null body must fail");
        assert!(matches!(err, ApiError::EmptyBody));

        response(StatusCode::OK, "{}")
            .validate(StatusCode::OK)
            .expect("empty object must pass");
        response(StatusCode::OK, "[]")
            .validate(StatusCode::OK)
            .expect("empty array must pass");
    }

    #[test]
    fn typed_decode_flags_shape_mismatch() {
        let err = response(StatusCode::OK, r#"{"name": 7}"#)
            .validate_as::<crate::ApiObject>(StatusCode::OK)
            .expect_err("decode must fail");
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
