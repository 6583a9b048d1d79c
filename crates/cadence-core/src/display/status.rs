//! Status messages for operations that produce no resource to show.

use std::fmt;

/// A one-line success or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Failure message for a lookup that found nothing.
    pub fn not_found(kind: &str, id: impl fmt::Display) -> Self {
        Self::failure(format!("{kind} {id} not found"))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Reminder queued");
        assert_eq!(success.to_string(), "Success: Reminder queued\n");

        let missing = OperationStatus::not_found("Task", "abcd1234");
        assert!(!missing.success);
        assert_eq!(missing.to_string(), "Error: Task abcd1234 not found\n");
    }
}
