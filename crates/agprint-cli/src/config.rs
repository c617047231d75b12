//! Render configuration detected from the environment.
//!
//! Detection happens once in the CLI shell; the result is handed to the
//! formatter as a plain [`FormatOptions`] value.

use is_terminal::IsTerminal;
use terminal_size::{Width, terminal_size};

use crate::presentation::formatters::FormatOptions;
use crate::presentation::formatters::options::DEFAULT_WIDTH;

pub const WIDTH_ENV: &str = "AGPRINT_WIDTH";
pub const COLOR_ENV: &str = "AGPRINT_COLOR";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            "auto" => Some(ColorMode::Auto),
            _ => None,
        }
    }
}

pub fn detect_format_options() -> FormatOptions {
    let width_override = std::env::var(WIDTH_ENV).ok();
    let terminal_width = terminal_size().map(|(Width(w), _)| w as usize);

    let no_color = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
    let color_mode = std::env::var(COLOR_ENV).ok().and_then(|v| {
        let mode = ColorMode::parse(&v);
        if mode.is_none() {
            tracing::warn!(value = %v, "ignoring unrecognized {}", COLOR_ENV);
        }
        mode
    });

    FormatOptions {
        width: resolve_width(width_override.as_deref(), terminal_width),
        enable_color: resolve_color(no_color, color_mode, std::io::stdout().is_terminal()),
    }
}

/// Explicit override, then the terminal, then [`DEFAULT_WIDTH`].
pub fn resolve_width(env_override: Option<&str>, terminal_width: Option<usize>) -> usize {
    if let Some(raw) = env_override {
        match raw.trim().parse::<usize>() {
            Ok(width) if width > 0 => return width,
            _ => tracing::warn!(value = %raw, "ignoring invalid {}", WIDTH_ENV),
        }
    }

    terminal_width
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

pub fn resolve_color(no_color: bool, mode: Option<ColorMode>, stdout_is_tty: bool) -> bool {
    match mode {
        Some(ColorMode::Always) => true,
        Some(ColorMode::Never) => false,
        Some(ColorMode::Auto) | None => !no_color && stdout_is_tty,
    }
}
