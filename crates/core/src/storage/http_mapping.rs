//! Pure functions for mapping remote store error responses to repository errors.

use serde::Deserialize;

use super::RepositoryError;

/// Error object returned by the remote store on a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Maps a non-success response to a [`RepositoryError::Remote`].
///
/// The `message` of a structured error body is surfaced verbatim. Bodies
/// that are not error objects are surfaced as raw text, and empty bodies
/// fall back to the status code.
///
/// # Examples
///
/// ```
/// use pizzeria_core::storage::{remote_error_from_response, RepositoryError};
///
/// let body = r#"{"code":"42501","message":"permission denied for table products"}"#;
/// assert_eq!(
///     remote_error_from_response(401, body),
///     RepositoryError::Remote("permission denied for table products".to_string())
/// );
/// ```
pub fn remote_error_from_response(status: u16, body: &str) -> RepositoryError {
    if let Ok(error) = serde_json::from_str::<RemoteErrorBody>(body) {
        return RepositoryError::Remote(error.message);
    }
    let body = body.trim();
    if body.is_empty() {
        return RepositoryError::Remote(format!("Remote store returned status {}", status));
    }
    RepositoryError::Remote(body.to_string())
}
