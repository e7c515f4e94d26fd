//! Questions command handler.
//!
//! Prints the question bank so answer files can be prepared offline.

use crate::model::{questions_for, AnswerLevel, Section};
use crate::pipeline::{write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::Result;
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Print the questions of one section, or of all three.
pub fn run_questions(
    format: ReportFormat,
    section: Option<Section>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let sections = section.map_or_else(|| Section::ALL.to_vec(), |s| vec![s]);

    let text = match format {
        ReportFormat::Json => format_questions_json(&sections)?,
        _ => format_questions_text(&sections),
    };

    write_output(&text, &OutputTarget::from_option(output_file), false)
}

fn format_questions_json(sections: &[Section]) -> Result<String> {
    let value: Vec<_> = sections
        .iter()
        .map(|&section| {
            json!({
                "section": section.name(),
                "title": section.title(),
                "scores": AnswerLevel::ALL.map(AnswerLevel::score),
                "questions": questions_for(section),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&value)?)
}

fn format_questions_text(sections: &[Section]) -> String {
    let mut out = String::new();
    for &section in sections {
        let _ = writeln!(out, "{} ({})", section.title(), section.name());
        let _ = writeln!(out, "{}", "=".repeat(section.title().len() + section.name().len() + 3));
        for (index, question) in questions_for(section).iter().enumerate() {
            let _ = writeln!(out, "{:>2}. {}", index + 1, question.text);
            let _ = writeln!(out, "    {}", question.explanation);
            for level in AnswerLevel::ALL {
                let _ = writeln!(out, "      {} = {}", level.score(), question.label(level));
            }
        }
        out.push('\n');
    }
    out
}
