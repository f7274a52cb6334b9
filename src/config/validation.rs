use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref user) = config.user {
        if user.trim().is_empty() {
            errors.push("user: must not be empty (remove the field for anonymous use)".to_string());
        }
    }

    if let Some(ref path) = config.history_path {
        if path.as_os_str().is_empty() {
            errors.push("history_path: must not be empty".to_string());
        } else if path.is_dir() {
            errors.push(format!("history_path: '{}' is a directory", path.display()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
