use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - Draft id cannot be empty and cannot contain whitespace or `/`
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    draft_id: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    validate_draft_id(draft_id)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Rejects draft ids that can't be used as a URL path segment.
pub fn validate_draft_id(draft_id: &str) -> Result<(), AppError> {
    if draft_id.is_empty() {
        return Err(AppError::config_error("Draft id cannot be empty"));
    }

    if draft_id.contains('/') || draft_id.chars().any(char::is_whitespace) {
        return Err(AppError::config_error(format!(
            "Draft id '{draft_id}' cannot contain '/' or whitespace"
        )));
    }

    Ok(())
}
