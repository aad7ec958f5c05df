//! Progress reporting for tool execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::sync::Mutex;
use std::time::Duration;
use vibes_application::{ToolContext, ToolHooks};
use vibes_domain::ToolError;

/// Shows a spinner per running tool
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self, message: String) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolHooks for ProgressReporter {
    fn on_tool_start(&self, ctx: &ToolContext) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(ctx.tool_name.clone());
        pb.set_message("running...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_tool_complete(&self, _ctx: &ToolContext, result: &Value, duration_ms: u64) {
        let mock = result
            .get("mock_data")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let note = if mock {
            format!(" {}", "(mock data)".yellow())
        } else {
            String::new()
        };
        self.finish(format!("{} {}ms{}", "done".green(), duration_ms, note));
    }

    fn on_tool_error(&self, _ctx: &ToolContext, error: &ToolError) {
        self.finish(format!("{} {}", "failed:".red(), error));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ToolHooks for SimpleProgress {
    fn on_tool_start(&self, ctx: &ToolContext) {
        eprintln!("{} {}", "->".cyan(), ctx.tool_name.bold());
    }

    fn on_tool_complete(&self, ctx: &ToolContext, _result: &Value, duration_ms: u64) {
        eprintln!("  {} {} ({}ms)", "v".green(), ctx.tool_name, duration_ms);
    }

    fn on_tool_error(&self, ctx: &ToolContext, error: &ToolError) {
        eprintln!("  {} {} ({})", "x".red(), ctx.tool_name, error);
    }
}
