use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Ensure directory exists.
pub fn ensure_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| format!("Unable to create directory {}: {}", path.display(), e))?;
    }
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(0o700)).ok();
    }
    Ok(())
}

/// Time-derived record ID: Unix milliseconds as a decimal string.
///
/// Two records created in the same millisecond share an ID.
pub fn record_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}
