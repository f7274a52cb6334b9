use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::assessment::{find_question, questions};
use crate::history::AssessmentRecord;
use crate::scoring::engine::tally;
use crate::scoring::{ClassificationResult, Dosha};
use crate::submit::Submission;

const MAX_BAR_WIDTH: usize = 30;
const MIN_BAR_WIDTH: usize = 10;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width for percentage bars: fits narrow terminals, capped otherwise
fn bar_width(term_width: Option<usize>) -> usize {
    match term_width {
        // Name (6) + percent (5) + counts and tag (~30)
        Some(w) => w.saturating_sub(41).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => MAX_BAR_WIDTH,
    }
}

/// Render a percentage as a fixed-width bar of filled and empty cells
pub fn format_bar(percent: u32, width: usize) -> String {
    let filled = ((percent.min(100) as usize * width) + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn paint(dosha: Dosha, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match dosha {
        Dosha::Vata => text.blue().to_string(),
        Dosha::Pitta => text.red().to_string(),
        Dosha::Kapha => text.green().to_string(),
    }
}

/// Format a classification with its breakdown and recommendations
pub fn format_result(result: &ClassificationResult, use_colors: bool) -> String {
    let width = bar_width(get_terminal_width());
    let mut lines = Vec::new();

    let heading = format!("Your constitution: {}", result.constitution);
    lines.push(if use_colors {
        heading.bold().to_string()
    } else {
        heading
    });
    lines.push(String::new());

    for dosha in Dosha::ALL {
        let percent = result.percentages.get(dosha);
        let tag = if dosha == result.primary {
            "  Primary"
        } else if Some(dosha) == result.secondary {
            "  Secondary"
        } else {
            ""
        };
        let name = format!("{:<6}", dosha.display_name());
        let bar = format_bar(percent, width);
        lines.push(format!(
            "  {} {} {:>4}%  ({} of {}){}",
            paint(dosha, &name, use_colors),
            paint(dosha, &bar, use_colors),
            percent,
            result.scores.get(dosha),
            result.total_responses,
            tag
        ));
    }

    lines.push(String::new());
    let rec_heading = format!("Recommendations for {}", result.primary.display_name());
    lines.push(if use_colors {
        rec_heading.bold().to_string()
    } else {
        rec_heading
    });
    for (heading, items) in result.recommendations.sections() {
        lines.push(format!("  {}", heading));
        for item in items {
            lines.push(format!("    - {}", item));
        }
    }

    lines.join("\n")
}

/// Format a submission: the result plus whether it was saved
pub fn format_submission(submission: &Submission, use_colors: bool) -> String {
    let saved_line = match submission.assessment_id {
        Some(id) => format!("Saved as assessment #{}.", id),
        None => "Not saved: no user set (use --user or set `user` in config).".to_string(),
    };
    let saved_line = if use_colors {
        saved_line.dimmed().to_string()
    } else {
        saved_line
    };
    format!(
        "{}\n\n{}",
        format_result(&submission.result, use_colors),
        saved_line
    )
}

/// Per-dosha answer counts for a stored record, e.g. "Vata 1  Pitta 2  Kapha 0"
///
/// Counts the stored answers only. The saved `dosha_result` is shown as-is.
fn format_counts(record: &AssessmentRecord, use_colors: bool) -> String {
    let counts = tally(&record.responses);
    Dosha::ALL
        .iter()
        .map(|dosha| {
            let text = format!("{} {}", dosha.display_name(), counts.get(*dosha));
            paint(*dosha, &text, use_colors)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_history_line(record: &AssessmentRecord, show_user: bool, use_colors: bool) -> String {
    let index = format!("#{:<4}", record.id);
    let date = record.created_at.format("%Y-%m-%d %H:%M").to_string();
    let result = match Dosha::parse(&record.dosha_result) {
        Some(dosha) => paint(dosha, &format!("{:<6}", dosha.display_name()), use_colors),
        None => format!("{:<6}", record.dosha_result),
    };
    let counts = format_counts(record, use_colors);
    let answered = record
        .responses
        .iter()
        .filter(|(id, _)| find_question(id).is_some())
        .count();
    let answers = format!("{} of {} answered", answered, questions().len());
    let user = if show_user {
        format!("  {}", record.user_id)
    } else {
        String::new()
    };
    if use_colors {
        format!(
            "{} {}{}  {}  {}  {}",
            index.dimmed(),
            date,
            user,
            result,
            counts,
            answers.dimmed()
        )
    } else {
        format!("{} {}{}  {}  {}  {}", index, date, user, result, counts, answers)
    }
}

fn join_history(records: &[AssessmentRecord], show_user: bool, use_colors: bool) -> String {
    if records.is_empty() {
        return "No assessments yet.".to_string();
    }

    records
        .iter()
        .map(|record| format_history_line(record, show_user, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one user's stored assessments, one line each, in the order given
pub fn format_history(records: &[AssessmentRecord], use_colors: bool) -> String {
    join_history(records, false, use_colors)
}

/// Format assessments across all users; each line also names its user
pub fn format_all_history(records: &[AssessmentRecord], use_colors: bool) -> String {
    join_history(records, true, use_colors)
}

/// Format the question bank with numbered options
pub fn format_questions(use_colors: bool) -> String {
    let mut lines = Vec::new();
    let mut section = "";
    for (i, question) in questions().iter().enumerate() {
        if question.section != section {
            section = question.section;
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(if use_colors {
                section.bold().to_string()
            } else {
                section.to_string()
            });
        }
        lines.push(format!("{:>3}. {} ({})", i + 1, question.prompt, question.id));
        for (n, option) in question.options.iter().enumerate() {
            lines.push(format!(
                "       {}) {} [{}]",
                n + 1,
                option.label,
                paint(option.dosha, option.dosha.as_str(), use_colors)
            ));
        }
    }
    lines.join("\n")
}

/// Serialize any output value as pretty JSON
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::ResponseSet;
    use crate::history::HistoryState;
    use crate::scoring::classify;
    use chrono::{TimeZone, Utc};

    fn result_for(answers: &[(&str, &str)]) -> ClassificationResult {
        let set: ResponseSet = answers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        classify(&set)
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(format_bar(100, 10), "██████████");
        assert_eq!(format_bar(33, 10), "███░░░░░░░");
        assert_eq!(format_bar(67, 10), "███████░░░");
    }

    #[test]
    fn test_bar_width_bounds() {
        assert_eq!(bar_width(None), MAX_BAR_WIDTH);
        assert_eq!(bar_width(Some(20)), MIN_BAR_WIDTH);
        assert_eq!(bar_width(Some(200)), MAX_BAR_WIDTH);
        assert_eq!(bar_width(Some(61)), 20);
    }

    #[test]
    fn test_format_result_plain() {
        let result = result_for(&[("skin", "vata"), ("hair", "pitta"), ("eyes", "kapha")]);
        let output = format_result(&result, false);

        assert!(output.starts_with("Your constitution: Vata-Pitta"));
        assert!(output.contains("  33%  (1 of 3)  Primary"));
        assert!(output.contains("(1 of 3)  Secondary"));
        assert!(output.contains("Recommendations for Vata"));
        assert!(output.contains("    - Warm, cooked foods"));
        assert!(output.contains("  Mental Health"));
    }

    #[test]
    fn test_format_submission_saved_and_unsaved() {
        let result = result_for(&[("skin", "kapha")]);
        let saved = Submission {
            message: "Assessment completed",
            result: result.clone(),
            assessment_id: Some(7),
            saved: true,
        };
        assert!(format_submission(&saved, false).ends_with("Saved as assessment #7."));

        let unsaved = Submission {
            message: "Assessment completed",
            result,
            assessment_id: None,
            saved: false,
        };
        assert!(format_submission(&unsaved, false).contains("Not saved"));
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(format_history(&[], false), "No assessments yet.");
    }

    #[test]
    fn test_format_history_lines() {
        let mut responses = ResponseSet::new();
        responses.insert("skin", "pitta");
        responses.insert("hair", "pitta");
        responses.insert("unknown", "pitta");

        let mut state = HistoryState::new();
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        state.record("alice", &responses, "pitta", at);

        let output = format_history(&state.for_user("alice"), false);
        assert_eq!(
            output,
            "#1    2026-03-14 09:30  Pitta   Vata 0  Pitta 3  Kapha 0  2 of 12 answered"
        );
    }

    #[test]
    fn test_format_history_counts_stored_answers() {
        let mut responses = ResponseSet::new();
        responses.insert("skin", "pitta");
        responses.insert("hair", "pitta");
        responses.insert("eyes", "vata");

        let mut state = HistoryState::new();
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 7, 0).unwrap();
        // Stored result is shown as saved, never recomputed from the counts
        state.record("alice", &responses, "kapha", at);

        let output = format_history(&state.for_user("alice"), false);
        assert!(output.contains("Kapha   Vata 1  Pitta 2  Kapha 0  3 of 12 answered"));
    }

    #[test]
    fn test_format_all_history_names_users() {
        let mut responses = ResponseSet::new();
        responses.insert("skin", "vata");

        let mut state = HistoryState::new();
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        state.record("alice", &responses, "vata", at);
        state.record("bob", &responses, "vata", at);

        let output = format_all_history(&state.all(), false);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "#2    2026-03-14 09:30  bob  Vata    Vata 1  Pitta 0  Kapha 0  1 of 12 answered",
                "#1    2026-03-14 09:30  alice  Vata    Vata 1  Pitta 0  Kapha 0  1 of 12 answered",
            ]
        );
    }

    #[test]
    fn test_format_questions_lists_all() {
        let output = format_questions(false);
        assert!(output.starts_with("Physical Traits\n"));
        assert!(output.contains("  1. What best describes your body type? (bodyType)"));
        assert!(output.contains(" 12. How do you respond to stress? (stress)"));
        assert!(output.contains("       2) Medium build, muscular [pitta]"));
        assert!(output.contains("\n\nEnvironmental\n"));
    }

    #[test]
    fn test_format_json_result() {
        let result = result_for(&[("skin", "pitta")]);
        let json = format_json(&result).unwrap();
        assert!(json.contains("\"primaryDosha\": \"pitta\""));
    }
}
