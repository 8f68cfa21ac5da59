//! Error types for VinTrack

use thiserror::Error;

/// Main error type for VinTrack operations
#[derive(Error, Debug)]
pub enum VintrackError {
    /// Configuration value missing or inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error while talking to the identity service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The identity service rejected a request
    #[error("Auth error: {0}")]
    Auth(String),

    /// The OAuth redirect could not be understood
    #[error("Invalid OAuth callback: {0}")]
    Callback(String),

    /// The user did not finish signing in before the deadline
    #[error("Sign-in timed out after {0} seconds")]
    SignInTimeout(u64),

    /// Unknown OAuth provider name
    #[error("Unknown identity provider: {0}")]
    UnknownProvider(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using VintrackError
pub type VintrackResult<T> = Result<T, VintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VintrackError::Auth("invalid grant".to_string());
        assert_eq!(format!("{}", err), "Auth error: invalid grant");

        let err = VintrackError::SignInTimeout(180);
        assert_eq!(format!("{}", err), "Sign-in timed out after 180 seconds");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: VintrackError = io_err.into();
        assert!(matches!(err, VintrackError::Io(_)));
    }
}
