//! Render command - fill the template on stdin and print it to stdout

use madlib_core::{RunSummary, StreamReader, run};
use std::io;

/// Read words and template lines from stdin and write rendered lines to stdout
pub fn run_stdio() -> madlib_core::Result<RunSummary> {
    let mut source = StreamReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    let summary = run(&mut source, &mut out)?;
    tracing::debug!("Rendered {} line(s)", summary.lines);
    Ok(summary)
}
