//! Error types for the transport boundary.
//!
//! The snapshot core itself is total: every resolver degrades missing
//! platform capabilities to documented sentinels, so none of the three
//! public operations can fail. [`SnapshotError`] exists for the surrounding
//! transport layer only - marshalling a snapshot for a bridge, or a fault in
//! the bridge itself.

use thiserror::Error;

/// Transport-level error for the snapshot service.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Encoding or decoding a snapshot for transport failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The surrounding bridge failed (malformed call, unavailable channel).
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias for the transport boundary.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Serialization(e.to_string())
    }
}

impl SnapshotError {
    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        SnapshotError::Serialization(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        SnapshotError::Transport(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SnapshotError::transport("bridge unavailable");
        assert_eq!(err.to_string(), "Transport error: bridge unavailable");
    }

    #[test]
    fn test_json_error_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("not json {");
        let err: SnapshotError = result.unwrap_err().into();
        assert!(matches!(err, SnapshotError::Serialization(_)));
    }
}
