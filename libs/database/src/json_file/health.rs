use std::path::Path;

use tracing::debug;

use crate::common::DatabaseError;

/// Check that a store file can be used
///
/// Verifies that the directory holding `path` exists. The file itself may be
/// missing; it is created on first access.
///
/// # Example
/// ```ignore
/// use database::json_file::check_health;
///
/// check_health(&config.users_path()).await?;
/// ```
pub async fn check_health(path: &Path) -> Result<(), DatabaseError> {
    debug!(path = %path.display(), "Running store health check");

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let metadata = tokio::fs::metadata(dir).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!(
            "Store directory {} is not accessible: {}",
            dir.display(),
            e
        ))
    })?;

    if !metadata.is_dir() {
        return Err(DatabaseError::HealthCheckFailed(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    if tokio::fs::metadata(path).await.is_ok_and(|m| m.is_dir()) {
        return Err(DatabaseError::HealthCheckFailed(format!(
            "{} is a directory, expected a JSON file",
            path.display()
        )));
    }

    debug!(path = %path.display(), "Store health check passed");
    Ok(())
}
