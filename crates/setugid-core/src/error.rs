//! Error types for privilege probing

use thiserror::Error;

/// Result type for privilege probing
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors raised while reading optional privilege state.
///
/// None of these reach callers of [`crate::is_privilege_elevated`]; the
/// predicate degrades to the conservative answer instead.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Capability error: {0}")]
    Capability(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_error_display() {
        let err = ProbeError::Capability("capget failed".to_string());
        assert_eq!(err.to_string(), "Capability error: capget failed");
    }

    #[test]
    fn test_permission_denied_display() {
        let err = ProbeError::PermissionDenied("environment is not trusted".to_string());
        assert!(err.to_string().contains("Permission denied"));
        assert!(err.to_string().contains("not trusted"));
    }

    #[test]
    fn test_result_error() {
        fn returns_error() -> Result<bool> {
            Err(ProbeError::Capability("no kernel support".to_string()))
        }
        assert!(returns_error().is_err());
    }
}
