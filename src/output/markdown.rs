use chrono::{DateTime, Local};

use crate::project::{Project, RATING_MAX};
use crate::scoring::{calculate_scores, ScoreKind};

pub const NO_PROJECTS_MESSAGE: &str = "No projects found.\n";

/// Qualitative label for a 1-5 rating, `None` outside that range.
pub fn score_label(value: i32) -> Option<&'static str> {
    match value {
        1 => Some("very low"),
        2 => Some("low"),
        3 => Some("medium"),
        4 => Some("high"),
        5 => Some("very high"),
        _ => None,
    }
}

/// Label for a rating, falling back to the literal number.
pub fn describe_rating(value: i32) -> String {
    score_label(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Report title, generation time and the score the ranking uses.
pub fn format_header(kind: ScoreKind) -> String {
    format_header_at(kind, Local::now())
}

pub fn format_header_at(kind: ScoreKind, generated_at: DateTime<Local>) -> String {
    format!(
        "# Project Priorities\n\n*Generated on {}*\n\n*Sorted by {} score (highest to lowest)*\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        kind.label()
    )
}

/// One ranked project block: heading, description, scores, then components.
pub fn format_project(project: &Project, rank: usize) -> String {
    let scores = calculate_scores(project);

    let mut content = String::new();
    content.push_str(&format!("## {}. {}\n\n", rank, project.name));
    content.push_str(&format!("**Description:** {}\n\n", project.description));

    content.push_str("### Scores\n");
    content.push_str(&format!("- **ICE Score:** {:.2}\n", scores.ice));
    content.push_str(&format!("- **RICE Score:** {:.2}\n\n", scores.rice));

    content.push_str("### Components\n");
    for (name, value) in project.ratings.components() {
        content.push_str(&format_component(name, value));
    }
    content.push('\n');
    content.push_str("---\n\n");

    content
}

fn format_component(name: &str, value: i32) -> String {
    match score_label(value) {
        Some(label) => format!("- **{}:** {}/{} ({})\n", name, value, RATING_MAX, label),
        None => format!("- **{}:** {}\n", name, value),
    }
}

pub fn format_no_projects_message() -> String {
    NO_PROJECTS_MESSAGE.to_string()
}

/// Whole document for projects already sorted by `kind`, ranked from 1.
pub fn format_report(sorted: &[Project], kind: ScoreKind) -> String {
    let mut document = format_header(kind);

    if sorted.is_empty() {
        document.push_str(&format_no_projects_message());
        return document;
    }

    for (idx, project) in sorted.iter().enumerate() {
        document.push_str(&format_project(project, idx + 1));
    }
    document
}
