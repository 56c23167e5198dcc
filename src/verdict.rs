//! Verdict types for validation results

use serde::{Deserialize, Serialize};

/// Outcome of validating a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the file passed validation
    pub passed: bool,
    /// Human-readable diagnostic message
    pub message: String,
}

impl Verdict {
    /// Create a passing verdict
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    /// Create a failing verdict
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Append file metadata to the message
    pub fn with_metadata(mut self, bytes: usize, lines: usize) -> Self {
        self.message = format!("{} (Size: {} bytes, Lines: {})", self.message, bytes, lines);
        self
    }

    /// Check if this verdict passed
    pub fn is_pass(&self) -> bool {
        self.passed
    }

    /// Check if this verdict failed
    pub fn is_fail(&self) -> bool {
        !self.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_and_fail() {
        let ok = Verdict::pass("Valid SQL statements");
        assert!(ok.is_pass());
        assert!(!ok.is_fail());
        assert_eq!(ok.message, "Valid SQL statements");

        let bad = Verdict::fail("File is empty");
        assert!(bad.is_fail());
        assert_eq!(bad.message, "File is empty");
    }

    #[test]
    fn test_with_metadata() {
        let verdict = Verdict::pass("Valid SQL statements").with_metadata(42, 3);
        assert_eq!(
            verdict.message,
            "Valid SQL statements (Size: 42 bytes, Lines: 3)"
        );
        assert!(verdict.passed);
    }
}
