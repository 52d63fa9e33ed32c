use crate::error::{AppError, Result};

/// Validates a Kubernetes resource name
pub fn validate_resource_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AppError::Validation("Resource name cannot be empty".to_string()));
    }

    if name.len() > 253 {
        return Err(AppError::Validation("Resource name cannot exceed 253 characters".to_string()));
    }

    // Kubernetes name validation: lowercase alphanumeric, '-' and '.', cannot start/end with a symbol
    let is_valid = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
        && name.starts_with(|c: char| c.is_ascii_alphanumeric())
        && name.ends_with(|c: char| c.is_ascii_alphanumeric());

    if !is_valid {
        return Err(AppError::Validation(format!(
            "Invalid resource name '{}': must be lowercase alphanumeric characters, '-' or '.', and start and end with an alphanumeric character",
            name
        )));
    }

    Ok(())
}

/// Validates a Kubernetes namespace name
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(AppError::Validation("Namespace cannot be empty".to_string()));
    }

    // Namespaces are DNS labels: no dots, at most 63 characters
    if namespace.len() > 63 {
        return Err(AppError::Validation("Namespace cannot exceed 63 characters".to_string()));
    }

    if namespace.contains('.') {
        return Err(AppError::Validation(format!(
            "Invalid namespace '{}': must not contain '.'",
            namespace
        )));
    }

    validate_resource_name(namespace)
}
