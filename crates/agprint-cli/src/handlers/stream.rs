use agprint_types::{EventRecord, parse_record};
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::presentation::formatters::{FormatOptions, format_record};

/// Counts reported after a line-oriented run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    pub rendered: usize,
    pub failed: usize,
}

pub fn handle_stdin(options: &FormatOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let summary = process_lines(stdin.lock(), stdout.lock(), stderr.lock(), options)
        .context("Failed to process stdin")?;
    tracing::debug!(
        rendered = summary.rendered,
        failed = summary.failed,
        "stdin exhausted"
    );
    Ok(())
}

pub fn handle_file(path: &Path, options: &FormatOptions) -> Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let summary = process_lines(
        BufReader::new(file),
        io::stdout().lock(),
        io::stderr().lock(),
        options,
    )
    .with_context(|| format!("Failed to read {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        rendered = summary.rendered,
        failed = summary.failed,
        "file processed"
    );
    Ok(())
}

/// Render one JSON record per line.
///
/// Blank lines are skipped. A line that fails to parse or validate is
/// reported on `err` and processing continues with the next line. Bytes that
/// are not UTF-8 are replaced, so such a line is reported as unparseable.
/// Only I/O failures abort the run.
pub fn process_lines<R, W, E>(
    mut reader: R,
    mut out: W,
    mut err: E,
    options: &FormatOptions,
) -> Result<StreamSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = StreamSummary::default();
    let mut writer = RecordWriter::new(&mut out, options);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record = match parse_record(trimmed) {
            Ok(record) => record,
            Err(e) if e.is_parse_error() => {
                summary.failed += 1;
                tracing::debug!(error = %e, "skipping unparseable line");
                writeln!(err, "Error parsing JSON line: {}", trimmed)?;
                writeln!(err, "  {}", e)?;
                continue;
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(err, "Error formatting message: {}", e)?;
                continue;
            }
        };

        writer.write(&record)?;
        summary.rendered += 1;
    }

    writer.finish()?;
    Ok(summary)
}

/// Writes rendered records, keeping boxes off the line of a preceding delta.
struct RecordWriter<'a, W: Write> {
    out: &'a mut W,
    options: &'a FormatOptions,
    /// Inline delta text has been written without a closing newline
    line_open: bool,
}

impl<'a, W: Write> RecordWriter<'a, W> {
    fn new(out: &'a mut W, options: &'a FormatOptions) -> Self {
        Self {
            out,
            options,
            line_open: false,
        }
    }

    fn write(&mut self, record: &EventRecord) -> Result<()> {
        let rendered = format_record(record, true, self.options);
        if rendered.is_empty() {
            return Ok(());
        }

        if record.is_stream_event() {
            write!(self.out, "{}", rendered)?;
            self.out.flush()?;
            self.line_open = !rendered.ends_with('\n');
        } else {
            self.close_line()?;
            writeln!(self.out, "{}", rendered)?;
        }
        Ok(())
    }

    fn close_line(&mut self) -> Result<()> {
        if self.line_open {
            writeln!(self.out)?;
            self.line_open = false;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.close_line()?;
        self.out.flush()?;
        Ok(())
    }
}
