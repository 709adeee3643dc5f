//! Scope configuration errors.

use std::path::PathBuf;

/// Error returned when a theme scope declaration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// The declaration text is not valid YAML/JSON, or names an option
    /// that does not exist.
    #[error("invalid scope declaration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The declaration file could not be read.
    #[error("failed to read scope file \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = ScopeError::Io {
            path: PathBuf::from("/missing/scope.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/scope.yaml"));
        assert!(msg.contains("not found"));
    }
}
