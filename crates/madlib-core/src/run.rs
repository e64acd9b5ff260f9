//! Run driver: read the words, then render every template line

use crate::error::Result;
use crate::input::TemplateSource;
use crate::template::Substituter;
use crate::words::WordSet;
use std::io::Write;

/// Outcome of a run that reached end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of template lines written to the output
    pub lines: usize,
}

/// Read five words from `source`, then substitute and emit each template line
///
/// Lines are written to `out` as they are rendered. `out` is flushed before
/// returning, on success and on error, so lines emitted ahead of a failing
/// line are kept.
///
/// # Errors
///
/// Returns an error if:
/// - Any of the five words is missing
/// - A template line is too long, before or after substitution
/// - A substituted line still contains `<`
/// - Reading or writing fails
pub fn run<S, W>(source: &mut S, out: &mut W) -> Result<RunSummary>
where
    S: TemplateSource + ?Sized,
    W: Write + ?Sized,
{
    let words = WordSet::read_from(source)?;
    let engine = Substituter::new(&words);

    let mut summary = RunSummary { lines: 0 };
    let result = emit_lines(source, &engine, out, &mut summary);
    out.flush()?;

    match result {
        Ok(()) => {
            tracing::debug!(lines = summary.lines, "template rendered");
            Ok(summary)
        }
        Err(e) => {
            tracing::debug!(emitted = summary.lines, "{}", e);
            Err(e)
        }
    }
}

fn emit_lines<S, W>(
    source: &mut S,
    engine: &Substituter<'_>,
    out: &mut W,
    summary: &mut RunSummary,
) -> Result<()>
where
    S: TemplateSource + ?Sized,
    W: Write + ?Sized,
{
    while let Some(line) = source.read_line()? {
        let rendered = engine.render_line(&line, source.line_number())?;
        writeln!(out, "{}", rendered)?;
        summary.lines += 1;
        tracing::trace!(line = source.line_number(), "{}", rendered);
    }
    Ok(())
}
