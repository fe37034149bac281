use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.projects_file.as_os_str().is_empty() {
        errors.push("projects_file: must not be empty".to_string());
    }
    if config.markdown_file.as_os_str().is_empty() {
        errors.push("markdown_file: must not be empty".to_string());
    }

    if config.prompts.project_name.trim().is_empty() {
        errors.push("prompts.project_name: must not be blank".to_string());
    }
    if config.prompts.project_description.trim().is_empty() {
        errors.push("prompts.project_description: must not be blank".to_string());
    }

    // Every rating needs at least one question to average over
    for (field, list) in config.prompts.rating_prompts() {
        if list.is_empty() {
            errors.push(format!("prompts.{}: needs at least one prompt", field));
        }
        for (i, prompt) in list.iter().enumerate() {
            if prompt.trim().is_empty() {
                errors.push(format!("prompts.{}[{}]: must not be blank", field, i));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
