use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{write_config, Config, PromptConfig};
use crate::export::{export_projects, ranked_projects, ReportSink};
use crate::output::{
    format_project_detail, format_project_list, format_ranked_table, format_tsv, rank_projects,
};
use crate::project::{NewProject, ProjectError, ProjectService, Ratings, RATING_MAX, RATING_MIN};
use crate::prompt::{prompt_rating, InputProvider};
use crate::scoring::{calculate_scores, ScoreKind};

/// Values given on the command line for `create`; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub impact: Option<i64>,
    pub confidence: Option<i64>,
    pub ease: Option<i64>,
    pub reach: Option<i64>,
    pub effort: Option<i64>,
}

fn prompt_text(
    input: &mut dyn InputProvider,
    given: Option<String>,
    prompt: &str,
) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => input.read_line(prompt),
    }
}

fn in_rating_range(value: i64) -> bool {
    (i64::from(RATING_MIN)..=i64::from(RATING_MAX)).contains(&value)
}

/// Create a project from flags, prompting for whatever was not given.
pub fn create(
    service: &mut ProjectService,
    prompts: &PromptConfig,
    input: &mut dyn InputProvider,
    options: CreateOptions,
) -> Result<String> {
    let name = prompt_text(input, options.name, &prompts.project_name)?;
    if name.trim().is_empty() {
        return Err(ProjectError::EmptyField("name").into());
    }

    let description = prompt_text(input, options.description, &prompts.project_description)?;
    if description.trim().is_empty() {
        return Err(ProjectError::EmptyField("description").into());
    }

    let flags = [
        options.impact,
        options.confidence,
        options.ease,
        options.reach,
        options.effort,
    ];
    let mut values = [0i64; 5];
    for (i, (_, questions)) in prompts.rating_prompts().into_iter().enumerate() {
        values[i] = match flags[i] {
            Some(value) => value,
            None => i64::from(prompt_rating(input, questions)?),
        };
    }

    // Flag values are checked together once every rating is known
    if !values.iter().all(|&value| in_rating_range(value)) {
        return Err(ProjectError::RatingsOutOfRange.into());
    }

    let [impact, confidence, ease, reach, effort] = values.map(|value| value as i32);
    let project = service.create_project(NewProject {
        name,
        description,
        ratings: Ratings {
            impact,
            confidence,
            ease,
            reach,
            effort,
        },
    })?;

    let scores = calculate_scores(&project);
    Ok(format!(
        "Project created successfully: {}\nICE Score: {:.2}\nRICE Score: {:.2}",
        project.name, scores.ice, scores.rice
    ))
}

/// List projects in stored order, or ranked when `sort` is given.
pub fn list(
    service: &ProjectService,
    sort: Option<&str>,
    tsv: bool,
    use_colors: bool,
) -> Result<String> {
    let Some(key) = sort else {
        return Ok(format_project_list(&service.get_projects(), use_colors));
    };

    let kind: ScoreKind = key.parse()?;
    let sorted = ranked_projects(service.store(), kind);
    let ranked = rank_projects(&sorted, kind);

    if tsv {
        Ok(format_tsv(&ranked))
    } else {
        Ok(format_ranked_table(&ranked, use_colors))
    }
}

pub fn view(service: &ProjectService, name: &str, use_colors: bool) -> Result<String> {
    let project = service.get_project(name)?;
    Ok(format_project_detail(project, use_colors))
}

/// Export the ranked report to `sink` and describe what happened.
pub fn export(
    service: &ProjectService,
    sort_key: &str,
    sink: &mut dyn ReportSink,
) -> Result<String> {
    let kind: ScoreKind = sort_key.parse()?;
    let summary = export_projects(service.store(), kind, sink)
        .with_context(|| format!("Failed to export projects to {}", sink.describe()))?;

    if summary.exported == 0 {
        return Ok(format!(
            "No projects found to export. Wrote an empty report to {}.",
            sink.describe()
        ));
    }

    Ok(format!(
        "Successfully exported {} projects to {}, sorted by {} score.",
        summary.exported,
        sink.describe(),
        summary.kind
    ))
}

/// Remove every project, asking first unless `confirmed`.
pub fn clear(
    service: &mut ProjectService,
    confirmed: bool,
    input: &mut dyn InputProvider,
) -> Result<String> {
    let count = service.store().len();
    if count == 0 {
        return Ok("No projects to clear.".to_string());
    }

    if !confirmed {
        let answer = input.read_line(&format!("Remove all {} projects? [y/N]: ", count))?;
        let answer = answer.to_lowercase();
        if answer != "y" && answer != "yes" {
            return Ok("Aborted. No projects were removed.".to_string());
        }
    }

    service.clear()?;
    Ok(format!("Removed {} projects.", count))
}

/// Write the default configuration to `path`.
pub fn init(path: &Path, force: bool) -> Result<String> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    write_config(path, &Config::default())?;
    Ok(format!("Wrote default configuration to {}", path.display()))
}
