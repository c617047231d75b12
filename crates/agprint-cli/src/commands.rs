use super::args::{Cli, InputSource};
use super::handlers;
use crate::config::detect_format_options;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let source = cli.input_source()?;
    let options = detect_format_options();
    tracing::debug!(
        ?source,
        width = options.width,
        color = options.enable_color,
        "starting"
    );

    match source {
        InputSource::Stdin => handlers::stream::handle_stdin(&options),
        InputSource::File(path) => handlers::stream::handle_file(&path, &options),
        InputSource::Inline(json) => handlers::inline::handle(&json, &options),
    }
}
