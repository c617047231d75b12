/// Column count used when the terminal width cannot be detected
pub const DEFAULT_WIDTH: usize = 80;

/// Display formatting options
///
/// Passed explicitly into every renderer so formatting never reads ambient
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub enable_color: bool,
    /// Width of box rules, in columns
    pub width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            width: DEFAULT_WIDTH,
        }
    }
}

impl FormatOptions {
    /// Color disabled, fixed width. Deterministic output for tests and pipes.
    pub fn plain(width: usize) -> Self {
        Self {
            enable_color: false,
            width,
        }
    }

    /// Apply `style` only when color is enabled.
    pub fn paint(&self, text: &str, style: fn(&str) -> String) -> String {
        if self.enable_color {
            style(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_paint_respects_color_flag() {
        let plain = FormatOptions::plain(40);
        assert_eq!(plain.paint("hi", |s| s.red().to_string()), "hi");

        let colored = FormatOptions::default();
        let painted = colored.paint("hi", |s| s.red().to_string());
        assert_ne!(painted, "hi");
        assert!(painted.contains("hi"));
    }
}
