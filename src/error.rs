/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or request execution error from `reqwest`, passed through unchanged.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// The base URL or endpoint path could not be resolved into a valid URL.
    #[error("invalid url: {0}")]
    Url(String),
    /// A header name or value could not be encoded for the wire.
    #[error("invalid header: {0}")]
    Header(String),
    /// Response body is not well-formed JSON.
    #[error("parse error: {0}")]
    Parse(String),
    /// Response status differs from the status the caller expected.
    #[error("expected status {expected} but got {actual}")]
    StatusMismatch {
        /// Status code the caller required.
        expected: u16,
        /// Status code the server actually returned.
        actual: u16,
    },
    /// Response body parsed to JSON `null`. Empty objects and arrays are not empty.
    #[error("response body is empty")]
    EmptyBody,
    /// An authenticated call was made before any token was set.
    #[error("no authentication token available")]
    MissingToken,
    /// A token refresh was requested without a stored refresh token.
    #[error("no refresh token available")]
    MissingRefreshToken,
}
