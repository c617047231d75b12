use owo_colors::OwoColorize;

use super::FormatOptions;
use super::options::DEFAULT_WIDTH;

pub const RULE_CHAR: char = '─';

/// A dimmed rule spanning the configured width.
pub fn horizontal_rule(options: &FormatOptions) -> String {
    let width = if options.width == 0 {
        DEFAULT_WIDTH
    } else {
        options.width
    };
    let rule = RULE_CHAR.to_string().repeat(width);
    options.paint(&rule, |s| s.dimmed().to_string())
}

/// Rule, header, content, rule.
pub fn wrap_in_box(header: &str, content: &str, options: &FormatOptions) -> String {
    let rule = horizontal_rule(options);
    format!("{}\n{}\n{}\n{}", rule, header, content, rule)
}
