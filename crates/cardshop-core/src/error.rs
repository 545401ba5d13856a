//! Error types for the Card Shop storefront

use thiserror::Error;

/// Errors raised by the navigation controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A required piece of navbar markup is absent
    #[error("Navbar element not found: {0}")]
    MissingElement(&'static str),

    /// Two submenus were registered under the same id
    #[error("Duplicate dropdown id: {0}")]
    DuplicateDropdown(String),

    /// The requested submenu was never registered
    #[error("Unknown dropdown: {0}")]
    UnknownDropdown(String),
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::ShopConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range
    #[error("Invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Result type alias using NavError
pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavError::MissingElement("navbar-toggler");
        assert_eq!(format!("{}", err), "Navbar element not found: navbar-toggler");

        let err = NavError::UnknownDropdown("singles".to_string());
        assert_eq!(format!("{}", err), "Unknown dropdown: singles");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
