use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::project::Project;
use crate::scoring::{calculate_scores, ScoreKind};
use super::markdown::describe_rating;

/// A project paired with its rank and the score it was ranked by
pub struct RankedProject<'a> {
    pub project: &'a Project,
    pub rank: usize,
    pub score: f64,
}

/// Rank already-sorted projects from 1
pub fn rank_projects(sorted: &[Project], kind: ScoreKind) -> Vec<RankedProject<'_>> {
    sorted
        .iter()
        .enumerate()
        .map(|(idx, project)| RankedProject {
            project,
            rank: idx + 1,
            score: kind.score(project),
        })
        .collect()
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Two decimal places, as everywhere scores are shown
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn fit_description(description: &str, used: usize) -> String {
    match get_terminal_width() {
        Some(width) if width > used + 10 => truncate_text(description, width - used),
        Some(_) => truncate_text(description, 20),
        None => description.to_string(),
    }
}

/// Format projects in stored order, one line each with both scores
/// Format: "- {name}: {description} (ICE: {ice} | RICE: {rice})"
pub fn format_project_list(projects: &[Project], use_colors: bool) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let lines = projects.iter().map(|project| {
        let scores = calculate_scores(project);
        let ice = format_score(scores.ice);
        let rice = format_score(scores.rice);
        let used = project.name.len() + ice.len() + rice.len() + 24;
        let description = fit_description(&project.description, used);

        if use_colors {
            format!(
                "- {}: {} (ICE: {} | RICE: {})",
                project.name.bold(),
                description,
                ice.cyan(),
                rice.yellow()
            )
        } else {
            format!(
                "- {}: {} (ICE: {} | RICE: {})",
                project.name, description, ice, rice
            )
        }
    });

    std::iter::once("Projects:".to_string())
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked projects as a table: Rank, Score, Name, Description
/// Rank column: 3 chars (fits "99."), right-aligned
/// Score column: 8 chars, right-aligned (fits "12500.00")
pub fn format_ranked_table(ranked: &[RankedProject], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No projects found.".to_string();
    }

    let score_width = 8;
    let separator = "  ";

    ranked
        .iter()
        .map(|entry| {
            let rank_str = format!("{:>2}.", entry.rank);
            let score_padded =
                format!("{:>width$}", format_score(entry.score), width = score_width);
            let used =
                rank_str.len() + 1 + score_width + separator.len() * 2 + entry.project.name.len();
            let description = fit_description(&entry.project.description, used);

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    entry.project.name.cyan(),
                    separator,
                    description
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str, score_padded, separator, entry.project.name, separator, description
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked projects as tab-separated values for scripting
/// Columns: rank, name, ice, rice (no headers, no colors)
pub fn format_tsv(ranked: &[RankedProject]) -> String {
    ranked
        .iter()
        .map(|entry| {
            let scores = calculate_scores(entry.project);
            format!(
                "{}\t{}\t{}\t{}",
                entry.rank,
                entry.project.name,
                format_score(scores.ice),
                format_score(scores.rice)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single project with every component and both scores
pub fn format_project_detail(project: &Project, use_colors: bool) -> String {
    let scores = calculate_scores(project);
    let mut lines = Vec::with_capacity(9);

    if use_colors {
        lines.push(format!("Project: {}", project.name.bold()));
    } else {
        lines.push(format!("Project: {}", project.name));
    }
    lines.push(format!("Description: {}", project.description));
    for (name, value) in project.ratings.components() {
        lines.push(format!("{}: {}", name, describe_rating(value)));
    }
    lines.push(format!("ICE Score: {}", format_score(scores.ice)));
    lines.push(format!("RICE Score: {}", format_score(scores.rice)));

    lines.join("\n")
}
