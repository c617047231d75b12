//! Readable terminal rendering for agent stream-json event records.
//!
//! The binary reads one JSON record per line from stdin or a file (or a
//! single inline record), validates it, and prints a boxed, color-coded
//! block for each. The formatters are usable directly:
//!
//! ```
//! use agprint::{FormatOptions, format_record};
//! use agprint_types::parse_record;
//!
//! let record = parse_record(r#"{"type":"user","message":{"content":"hi"}}"#).unwrap();
//! let text = format_record(&record, false, &FormatOptions::plain(40));
//! assert_eq!(text, "hi");
//! ```

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, InputSource};
pub use commands::run;
pub use handlers::stream::{StreamSummary, process_lines};
pub use presentation::formatters::{FormatOptions, RecordView, format_record, format_value};
