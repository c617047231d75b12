use agprint_types::{CompletionStatus, ModelUsage, RunSummary};
use owo_colors::OwoColorize;

use super::FormatOptions;
use super::number::{format_cost, format_grouped, format_seconds};
use super::text::indent;

pub const RESULT_HEADER: &str = "📊 Result";

pub fn format_run_summary(summary: &RunSummary, options: &FormatOptions) -> String {
    let mut lines = vec![status_line(summary.status(), options)];

    lines.push(String::new());
    lines.push(section("Statistics:", options));
    lines.push(format!("  Duration: {}", format_seconds(summary.duration_ms)));
    lines.push(format!(
        "  API Time: {}",
        format_seconds(summary.duration_api_ms)
    ));
    lines.push(format!("  Turns: {}", summary.num_turns));
    lines.push(format!("  Cost: {}", format_cost(summary.total_cost_usd)));
    lines.push(format!("  Session: {}", summary.session_id));

    let usage = &summary.usage;
    lines.push(String::new());
    lines.push(section("Token Usage:", options));
    lines.push(format!("  Input: {}", format_grouped(usage.input_tokens)));
    lines.push(format!("  Output: {}", format_grouped(usage.output_tokens)));
    if usage.cache_read_input_tokens > 0 {
        lines.push(format!(
            "  Cache Read: {}",
            format_grouped(usage.cache_read_input_tokens)
        ));
    }
    if usage.cache_creation_input_tokens > 0 {
        lines.push(format!(
            "  Cache Creation: {}",
            format_grouped(usage.cache_creation_input_tokens)
        ));
    }

    if !summary.model_usage.is_empty() {
        lines.push(String::new());
        lines.push(section("Model Usage:", options));
        for (model, usage) in &summary.model_usage {
            lines.extend(format_model_usage(model, usage, options));
        }
    }

    if !summary.permission_denials.is_empty() {
        lines.push(String::new());
        lines.push(section("Permission Denials:", options));
        for denial in &summary.permission_denials {
            lines.push(format!(
                "  - {} ({})",
                options.paint(&denial.tool_name, |s| s.red().to_string()),
                denial.tool_use_id
            ));
        }
    }

    if let Some(text) = summary.result.as_deref().filter(|t| !t.trim().is_empty()) {
        lines.push(String::new());
        lines.push(section("Final Result:", options));
        lines.push(indent(text.trim_end(), "  "));
    }

    lines.join("\n")
}

fn status_line(status: CompletionStatus<'_>, options: &FormatOptions) -> String {
    match status {
        CompletionStatus::Success => {
            options.paint("✅ Completed successfully", |s| s.green().bold().to_string())
        }
        CompletionStatus::MaxTurns => {
            options.paint("⚠️ Max turns reached", |s| s.yellow().bold().to_string())
        }
        CompletionStatus::ExecutionError => {
            options.paint("❌ Execution error", |s| s.red().bold().to_string())
        }
        CompletionStatus::Other(subtype) => {
            let label = if subtype.is_empty() { "unknown" } else { subtype };
            options.paint(&format!("ℹ️ Finished: {}", label), |s| {
                s.cyan().bold().to_string()
            })
        }
    }
}

fn format_model_usage(model: &str, usage: &ModelUsage, options: &FormatOptions) -> Vec<String> {
    let mut lines = vec![format!(
        "  {}:",
        options.paint(model, |s| s.bright_white().to_string())
    )];
    lines.push(format!("    Input: {}", format_grouped(usage.input_tokens)));
    lines.push(format!("    Output: {}", format_grouped(usage.output_tokens)));
    if usage.cache_read_input_tokens > 0 {
        lines.push(format!(
            "    Cache Read: {}",
            format_grouped(usage.cache_read_input_tokens)
        ));
    }
    if usage.cache_creation_input_tokens > 0 {
        lines.push(format!(
            "    Cache Creation: {}",
            format_grouped(usage.cache_creation_input_tokens)
        ));
    }
    lines.push(format!("    Cost: {}", format_cost(usage.cost_usd)));
    lines
}

fn section(title: &str, options: &FormatOptions) -> String {
    options.paint(title, |s| s.bold().to_string())
}
