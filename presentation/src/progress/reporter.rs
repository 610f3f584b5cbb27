//! Progress reporting during dispatch

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use legalai_application::DispatchProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a task runs; cleared before the answer is printed
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn set_message(&self, message: String) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(message);
        }
    }

    pub fn task_display_name(task: &str) -> &'static str {
        match task {
            "draft" => "Drafting",
            "summarize" => "Summarizing",
            "timeline" => "Building timeline",
            "analyze" => "Analyzing document",
            "search" => "Searching case law",
            "translate" => "Translating",
            "transcribe" => "Transcribing",
            _ => "Thinking",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchProgressNotifier for ProgressReporter {
    fn on_task_start(&self, task: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::task_display_name(task));
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_model_turn(&self, turn: usize) {
        if turn > 1 {
            self.set_message(format!("model turn {}", turn));
        }
    }

    fn on_tool_call(&self, tool_name: &str) {
        self.set_message(format!("calling {}", tool_name));
    }

    fn on_tool_result(&self, tool_name: &str, success: bool, duration_ms: u64) {
        let mark = if success { "v".green() } else { "x".red() };
        self.set_message(format!("{} {} ({}ms)", mark, tool_name, duration_ms));
    }

    fn on_task_complete(&self, _task: &str, _success: bool) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Plain line-per-event progress on stderr (no spinner)
pub struct SimpleProgress;

impl DispatchProgressNotifier for SimpleProgress {
    fn on_task_start(&self, task: &str) {
        eprintln!("{} {}", "->".cyan(), ProgressReporter::task_display_name(task).bold());
    }

    fn on_tool_call(&self, tool_name: &str) {
        eprintln!("  {} {}", "tool".dimmed(), tool_name);
    }

    fn on_tool_result(&self, tool_name: &str, success: bool, duration_ms: u64) {
        if success {
            eprintln!("  {} {} ({}ms)", "v".green(), tool_name, duration_ms);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), tool_name);
        }
    }
}
