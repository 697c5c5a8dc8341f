use std::error::Error;

/// Base trait for all application errors
pub trait GameBoardError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type GameBoardResult<T> = Result<T, Box<dyn GameBoardError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Could not determine current directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Whether this error only means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ReadFailed { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl GameBoardError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::CurrentDirUnavailable { .. } => "CURRENT_DIR_UNAVAILABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gameboard_result() {
        let _result: GameBoardResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_parse_error() {
        let error = ConfigError::ConfigParseError {
            path: "/tmp/config.toml".to_string(),
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file '/tmp/config.toml': invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_read_failed_not_found() {
        let error = ConfigError::ReadFailed {
            path: "missing.toml".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.is_not_found());
        assert!(!error.is_user_error());
        assert_eq!(error.error_code(), "CONFIG_READ_FAILED");

        let denied = ConfigError::ReadFailed {
            path: "locked.toml".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!denied.is_not_found());
    }
}
