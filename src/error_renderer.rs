//! Error rendering using ariadne
//!
//! Every error has a one-line form (see [`error_line`]). When the source text
//! of the file named by a runtime error's span is available, the error is
//! drawn as an ariadne report pointing at the offending term instead.

use crate::{Error, ExecutionError};
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

/// One-line form of an error, `filename:start:end: message`.
///
/// Runtime errors use their own span. Decode errors have no term to point
/// at, so they name `origin` (the document's path, or `<stdin>`) at offset 0;
/// a JSON syntax error's message carries its line and column.
pub fn error_line(error: &Error, origin: &str) -> String {
    match error {
        Error::Decode(err) => format!("{}:0:0: {}", origin, err),
        Error::Runtime(err) => err.to_string(),
    }
}

/// Render an error to stderr
///
/// `origin` names the document that was run. `source` is the text of the
/// file named by a runtime error's location, if the caller could read it.
///
/// # Example
/// ```no_run
/// use rinha::{Engine, EngineOptions, render_error};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let engine = Engine::new(EngineOptions::default());
/// let document = std::fs::read_to_string("fib.json").unwrap();
///
/// if let Err(e) = engine.execute(&arena, &document, &mut std::io::stdout()) {
///     let source = std::fs::read_to_string("fib.rinha").ok();
///     render_error(&e, "fib.json", source.as_deref());
/// }
/// ```
pub fn render_error(error: &Error, origin: &str, source: Option<&str>) {
    render_error_to_writer(error, origin, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    error: &Error,
    origin: &str,
    source: Option<&str>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(error, origin, source, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error, origin: &str, source: Option<&str>) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, origin, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(
    error: &Error,
    origin: &str,
    source: Option<&str>,
) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, origin, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    origin: &str,
    source: Option<&str>,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match (error, source) {
        (Error::Runtime(err), Some(source)) if fits(err, source) => {
            render_report(err, source, writer, use_color)
        }
        _ => writeln!(writer, "{}", error_line(error, origin)),
    }
}

/// Whether the span can be drawn against `source`.
fn fits(error: &ExecutionError, source: &str) -> bool {
    let span = &error.span;
    span.start <= span.end
        && span.end <= source.len()
        && source.is_char_boundary(span.start)
        && source.is_char_boundary(span.end)
}

fn render_report(
    error: &ExecutionError,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let filename = error.span.filename.as_str();
    let range = error.span.start..error.span.end;
    let message = error.kind.to_string();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // Locations are byte offsets into the source text.
    let config = Config::default()
        .with_color(use_color)
        .with_index_type(IndexType::Byte);

    Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(config)
        .with_message(&message)
        .with_label(
            Label::new((filename, range))
                .with_message(&message)
                .with_color(colors.next()),
        )
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}
