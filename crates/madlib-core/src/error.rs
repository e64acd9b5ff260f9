use crate::words::Role;
use thiserror::Error;

/// Exit status for a run that failed on I/O rather than on validation
pub const EXIT_IO_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum MadlibError {
    // Startup errors
    #[error("MISSING_WORD: no {role} was supplied before the template")]
    MissingWord { role: Role },

    // Line errors
    #[error("LINE_TOO_LONG: line {line} is {len} bytes, limit is {max}")]
    LineTooLong { line: usize, len: usize, max: usize },

    #[error("UNRESOLVED_PLACEHOLDER: stray '<' at line {line}, column {column}")]
    UnresolvedPlaceholder { line: usize, column: usize },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl MadlibError {
    /// Process exit status reported for this condition
    ///
    /// The validation codes are part of the external contract and must not
    /// change: 101 missing word, 103 length violation, 104 unresolved
    /// placeholder.
    pub fn exit_code(&self) -> i32 {
        match self {
            MadlibError::MissingWord { .. } => 101,
            MadlibError::LineTooLong { .. } => 103,
            MadlibError::UnresolvedPlaceholder { .. } => 104,
            MadlibError::IoError(_) => EXIT_IO_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, MadlibError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes_are_stable() {
        assert_eq!(
            MadlibError::MissingWord { role: Role::Verb }.exit_code(),
            101
        );
        assert_eq!(
            MadlibError::LineTooLong {
                line: 3,
                len: 101,
                max: 100
            }
            .exit_code(),
            103
        );
        assert_eq!(
            MadlibError::UnresolvedPlaceholder { line: 1, column: 0 }.exit_code(),
            104
        );
        let io_err = MadlibError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io_err.exit_code(), EXIT_IO_FAILURE);
    }

    #[test]
    fn test_messages_carry_code_prefix() {
        let err = MadlibError::MissingWord { role: Role::Adjective };
        assert_eq!(
            err.to_string(),
            "MISSING_WORD: no adjective was supplied before the template"
        );

        let err = MadlibError::LineTooLong {
            line: 2,
            len: 120,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "LINE_TOO_LONG: line 2 is 120 bytes, limit is 100"
        );
    }
}
