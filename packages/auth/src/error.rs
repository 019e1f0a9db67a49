// ABOUTME: Error types for token file loading and backend dispatch
// ABOUTME: Separates missing user input, decode failures, and transport failures

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No file selected.")]
    NoFileSelected,

    #[error("Please provide a refresh token.")]
    MissingRefreshToken,

    #[error("Please provide an access token.")]
    MissingAccessToken,

    /// The token file is not a well-formed JSON record. Displays the parser
    /// message unchanged.
    #[error("{0}")]
    TokenFile(serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Client settings are locked; press Edit first")]
    SettingsLocked,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The token file could not be read. Displays the OS message unchanged.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_file_error_is_verbatim() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = parse_err.to_string();
        let err = AuthError::TokenFile(parse_err);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_io_error_is_verbatim() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AuthError::from(io_err);
        assert!(matches!(err, AuthError::Io(_)));
        assert_eq!(err.to_string(), "no such file");
    }

    #[test]
    fn test_missing_token_messages() {
        assert_eq!(
            AuthError::MissingRefreshToken.to_string(),
            "Please provide a refresh token."
        );
        assert_eq!(
            AuthError::MissingAccessToken.to_string(),
            "Please provide an access token."
        );
        assert_eq!(AuthError::NoFileSelected.to_string(), "No file selected.");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthError>();
    }
}
