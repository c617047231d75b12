//! Event record schema for agent conversation streams.
//!
//! A record is one JSON object emitted by an agent runtime: an assistant or
//! user turn, a run summary, a system notice, or a streaming delta. This crate
//! decodes such objects into typed values and checks the fields that
//! rendering relies on.
//!
//! ```
//! use agprint_types::{parse_record, EventRecord};
//!
//! let line = r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Hi"}]}}"#;
//! let record = parse_record(line).unwrap();
//! assert!(matches!(record, EventRecord::Assistant(_)));
//! ```

pub mod error;
pub mod record;
pub mod validate;

pub use error::{Error, Result};
pub use record::*;
pub use validate::validate;
