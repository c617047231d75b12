//! Assertions over rendered terminal output.

use anyhow::{Context, Result, bail};

const RULE_CHAR: char = '─';

fn is_rule(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == RULE_CHAR)
}

/// Assert that `output` contains exactly `expected` boxes, each framed by
/// rules of `width` characters.
pub fn assert_box_count(output: &str, width: usize, expected: usize) -> Result<()> {
    let rules: Vec<&str> = output.lines().filter(|l| is_rule(l)).collect();

    if let Some(bad) = rules.iter().find(|r| r.chars().count() != width) {
        bail!(
            "Expected rules of width {}, found one of width {}",
            width,
            bad.chars().count()
        );
    }

    if rules.len() != expected * 2 {
        bail!(
            "Expected {} boxes ({} rules), found {} rules in:\n{}",
            expected,
            expected * 2,
            rules.len(),
            output
        );
    }

    Ok(())
}

/// Assert that no line of `output` is a rule.
pub fn assert_no_box(output: &str) -> Result<()> {
    if let Some(line) = output.lines().find(|l| is_rule(l)) {
        bail!("Expected unboxed output, found rule {:?}", line);
    }
    Ok(())
}

/// Assert that some line of `output` equals `expected` exactly.
pub fn assert_has_line(output: &str, expected: &str) -> Result<()> {
    output
        .lines()
        .find(|l| *l == expected)
        .map(|_| ())
        .with_context(|| format!("Expected line {:?} in:\n{}", expected, output))
}

/// Assert that `first` appears before `second` in `output`.
pub fn assert_in_order(output: &str, first: &str, second: &str) -> Result<()> {
    let a = output
        .find(first)
        .with_context(|| format!("{:?} not found in output", first))?;
    let b = output
        .find(second)
        .with_context(|| format!("{:?} not found in output", second))?;

    if a >= b {
        bail!("Expected {:?} before {:?}", first, second);
    }
    Ok(())
}

/// Assert that `output` carries no ANSI escape sequences.
pub fn assert_no_ansi(output: &str) -> Result<()> {
    if output.contains('\u{1b}') {
        bail!("Expected plain output, found ANSI escapes in:\n{}", output);
    }
    Ok(())
}
