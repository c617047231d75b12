use agprint_types::parse_record;
use anyhow::{Result, bail};
use std::io::{self, Write};

use crate::presentation::formatters::{FormatOptions, format_record};

/// Render a single record passed on the command line.
///
/// Any parse or validation failure is fatal since there is nothing else
/// to move on to.
pub fn handle(json: &str, options: &FormatOptions) -> Result<()> {
    let json = json.trim();
    let record = match parse_record(json) {
        Ok(record) => record,
        Err(e) if e.is_parse_error() => {
            bail!("Could not parse inline JSON: {}\n  {}", json, e)
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = format_record(&record, true, options);
    if rendered.is_empty() {
        return Ok(());
    }

    let mut out = io::stdout().lock();
    if record.is_stream_event() {
        write!(out, "{}", rendered)?;
    } else {
        writeln!(out, "{}", rendered)?;
    }
    out.flush()?;
    Ok(())
}
