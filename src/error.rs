//! Error types for timetable operations.
//!
//! Only structural violations are errors. A faculty clash or a course
//! that cannot be auto-placed is a regular result (see
//! [`PlacementOutcome`](crate::session::PlacementOutcome) and
//! [`PlacementReport`](crate::scheduler::PlacementReport)).

use crate::session::Role;

/// Result alias for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Errors raised by the grid store, importer, config and session.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// A (day, slot) pair outside the configured layout was addressed.
    #[error("cell out of range: day '{day}', slot '{slot}'")]
    OutOfRange { day: String, slot: String },

    /// Course catalog text failed structural validation.
    #[error("invalid course CSV: {message}")]
    Format { message: String },

    /// Layout or configuration is unusable.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Reading an import file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session role may not perform the action.
    #[error("{role} role may not {action}")]
    Forbidden { role: Role, action: &'static str },
}

impl TimetableError {
    /// Creates an out-of-range error from any displayable key parts.
    pub fn out_of_range(day: impl ToString, slot: impl ToString) -> Self {
        Self::OutOfRange {
            day: day.to_string(),
            slot: slot.to_string(),
        }
    }

    /// Creates a format error.
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = TimetableError::out_of_range("Sat", "8-9");
        assert_eq!(e.to_string(), "cell out of range: day 'Sat', slot '8-9'");

        let e = TimetableError::format("missing header");
        assert_eq!(e.to_string(), "invalid course CSV: missing header");

        let e = TimetableError::Forbidden {
            role: Role::Student,
            action: "edit the timetable",
        };
        assert_eq!(e.to_string(), "Student role may not edit the timetable");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: TimetableError = io.into();
        assert!(matches!(e, TimetableError::Io(_)));
    }
}
