use crate::error::{MadlibError, Result};
use crate::limits::OUTPUT_MAX;

/// Check a fully substituted line before it is emitted
///
/// Length is checked first, then leftover `<` markers.
pub fn validate_line(line: &str, line_no: usize) -> Result<()> {
    if line.len() > OUTPUT_MAX {
        return Err(MadlibError::LineTooLong {
            line: line_no,
            len: line.len(),
            max: OUTPUT_MAX,
        });
    }

    if let Some(column) = line.find('<') {
        return Err(MadlibError::UnresolvedPlaceholder {
            line: line_no,
            column,
        });
    }

    Ok(())
}
