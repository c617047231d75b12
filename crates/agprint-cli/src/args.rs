use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agprint")]
#[command(about = "Pretty-print agent stream-json event records", long_about = None)]
#[command(after_help = "\
Examples:
  agent --output-format stream-json | agprint
  agprint session.jsonl
  agprint '{\"type\":\"user\",\"message\":{\"content\":\"Hello\"}}'

Environment:
  AGPRINT_WIDTH   Box width in columns (default: terminal width, else 80)
  AGPRINT_COLOR   always | never | auto (default: auto)
  NO_COLOR        Disable color when set
  AGPRINT_LOG     Log filter for diagnostics on stderr (default: warn)")]
pub struct Cli {
    /// JSONL file to read, or one inline JSON record starting with '{'.
    /// Reads stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

/// Where records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Inline(String),
}

impl Cli {
    pub fn input_source(&self) -> Result<InputSource> {
        match self.inputs.as_slice() {
            [] => Ok(InputSource::Stdin),
            [input] if input.trim_start().starts_with('{') => {
                Ok(InputSource::Inline(input.clone()))
            }
            [path] => Ok(InputSource::File(PathBuf::from(path))),
            _ => bail!(
                "Too many arguments: expected a single file path or inline JSON record (got {})",
                self.inputs.len()
            ),
        }
    }
}
