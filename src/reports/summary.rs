//! Summary report generator for shell output.
//!
//! A compact, human-readable maturity report for terminal usage.

use super::{AuditReport, ReportError, ReportFormat, ReportGenerator};
use crate::narrative::{narrative_lines, NarrativeLine};
use crate::scoring::{Impact, MaturityLevel};
use unicode_width::UnicodeWidthStr;

/// Width of the score bars, in cells.
const BAR_WIDTH: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn maturity_color(level: MaturityLevel) -> &'static str {
    match level {
        MaturityLevel::High => "green",
        MaturityLevel::Medium => "yellow",
        MaturityLevel::Low => "red",
    }
}

const fn impact_color(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "red",
        Impact::Medium => "yellow",
        Impact::Low => "dim",
    }
}

/// Render `score` on a 0..=10 scale as a bar, with `goal` marked by `│`.
fn score_bar(score: f64, goal: f64) -> String {
    let cells = |value: f64| {
        let scaled = (value.clamp(0.0, 10.0) / 10.0 * BAR_WIDTH as f64).round();
        scaled as usize
    };
    let filled = cells(score);
    let goal_cell = cells(goal).min(BAR_WIDTH - 1);
    (0..BAR_WIDTH)
        .map(|i| match (i < filled, i == goal_cell) {
            (_, true) => '│',
            (true, false) => '█',
            (false, false) => '░',
        })
        .collect()
}

fn pad_right(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn push_narrative(&self, lines: &mut Vec<String>, text: &str) {
        lines.push(self.color("AI Executive Summary", "bold"));
        for line in narrative_lines(text) {
            match line {
                NarrativeLine::Header(header) => lines.push(self.color(header, "cyan")),
                NarrativeLine::Text(body) => lines.push(format!("  {body}")),
                NarrativeLine::Blank => lines.push(String::new()),
            }
        }
        lines.push(String::new());
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &AuditReport) -> Result<String, ReportError> {
        let result = &report.result;
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Infrastructure Maturity Report", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Client:", "cyan"),
            report.profile.company
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Contact:", "cyan"),
            report.profile.representative()
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Auth ID:", "cyan"),
            report.report_id
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Date:", "cyan"),
            report.submitted_at.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(String::new());

        // Score
        let maturity = self.color(
            &format!("{} Maturity", result.maturity),
            maturity_color(result.maturity),
        );
        lines.push(format!(
            "{}  {} / 10  {}",
            self.color("Score:", "cyan"),
            self.color(&result.display_score(), "bold"),
            maturity
        ));
        lines.push(String::new());
        lines.push(self.color("Diagnostic Synthesis", "bold"));
        lines.push(format!("  {}", result.maturity.synthesis()));
        lines.push(String::new());

        // Categories
        lines.push(self.color("Actual Resilience vs Industry Leader Goal", "bold"));
        let label_width = result
            .radar_data
            .iter()
            .map(|entry| UnicodeWidthStr::width(entry.name.as_str()))
            .max()
            .unwrap_or(0);
        for entry in &result.radar_data {
            let gap = entry.gap();
            let gap_text = if gap > 0.0 {
                self.color(&format!("-{gap:.1}"), "red")
            } else {
                self.color("on goal", "green")
            };
            lines.push(format!(
                "  {}  {}  {:>4.1} / {:<2}  {}",
                pad_right(&entry.name, label_width),
                score_bar(entry.score, entry.goal),
                entry.score,
                entry.goal,
                gap_text
            ));
        }
        lines.push(String::new());

        if let Some(analysis) = &result.ai_analysis {
            self.push_narrative(&mut lines, analysis);
        }

        // Recommendations
        lines.push(self.color("Priority Initiatives", "bold"));
        for (i, rec) in result.recommendations.iter().enumerate() {
            lines.push(format!(
                "  {:02}  {}  {}",
                i + 1,
                self.color(&rec.title, "bold"),
                self.color(&format!("[{} · {} Impact]", rec.category, rec.impact), impact_color(rec.impact))
            ));
            lines.push(format!("      {}", rec.description));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
