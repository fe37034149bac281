use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
///
/// Example YAML:
/// ```yaml
/// projects_file: /home/me/.config/parpt/projects.json
/// markdown_file: projects.md
/// prompts:
///   project_name: "Project name: "
///   impact:
///     - "Money impact (1-5): "
///     - "User happiness (1-5): "
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON file the project store persists to
    #[serde(default = "super::default_projects_file")]
    pub projects_file: PathBuf,

    /// Markdown file `export` writes the report to
    #[serde(default = "default_markdown_file")]
    pub markdown_file: PathBuf,

    #[serde(default)]
    pub prompts: PromptConfig,
}

fn default_markdown_file() -> PathBuf {
    PathBuf::from("projects.md")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_file: super::default_projects_file(),
            markdown_file: default_markdown_file(),
            prompts: PromptConfig::default(),
        }
    }
}

/// Questions asked by `create` for each value not passed on the command line.
///
/// Each rating is asked as several questions; the answers are averaged.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub project_name: String,
    pub project_description: String,
    pub impact: Vec<String>,
    pub confidence: Vec<String>,
    pub ease: Vec<String>,
    pub reach: Vec<String>,
    pub effort: Vec<String>,
}

fn prompts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            project_name: "Project name: ".to_string(),
            project_description: "Project description: ".to_string(),
            impact: prompts(&[
                "Impact 1: Money impact (1-5): ",
                "Impact 2: User happiness (1-5): ",
                "Impact 3: Competitive edge (1-5): ",
                "Impact 4: Problem solving (1-5): ",
            ]),
            confidence: prompts(&[
                "Confidence 1: Requirements clarity (1-5): ",
                "Confidence 2: Prior experience (1-5): ",
                "Confidence 3: Team skills (1-5): ",
                "Confidence 4: Requirements stability (1-5): ",
            ]),
            ease: prompts(&[
                "Ease 1: Build complexity (1-5): ",
                "Ease 2: Tools availability (1-5): ",
                "Ease 3: Code reuse (1-5): ",
                "Ease 4: Testability (1-5): ",
            ]),
            reach: prompts(&[
                "Reach 1: User coverage (1-5): ",
                "Reach 2: New user attraction (1-5): ",
                "Reach 3: Change visibility (1-5): ",
                "Reach 4: Usage frequency (1-5): ",
            ]),
            effort: prompts(&[
                "Effort 1: Build time (1-5): ",
                "Effort 2: Team size (1-5): ",
                "Effort 3: Maintenance (1-5): ",
                "Effort 4: Ongoing work (1-5): ",
            ]),
        }
    }
}

impl PromptConfig {
    /// Rating prompt lists keyed by config field name, in creation order.
    pub fn rating_prompts(&self) -> [(&'static str, &[String]); 5] {
        [
            ("impact", self.impact.as_slice()),
            ("confidence", self.confidence.as_slice()),
            ("ease", self.ease.as_slice()),
            ("reach", self.reach.as_slice()),
            ("effort", self.effort.as_slice()),
        ]
    }
}
