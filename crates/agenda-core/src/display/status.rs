//! Status and warning message types for operation feedback.

use std::fmt;

use crate::error::AgendaError;

/// Wrapper type for displaying a one-line operation verdict.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&AgendaError> for OperationStatus {
    fn from(err: &AgendaError) -> Self {
        Self::failure(err.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::from(&AgendaError::NothingToUndo);
        assert_eq!(format!("{failure}"), "Error: Nothing to undo\n");
    }
}
