//! JSON snapshot of a fetch cycle's selection.
//!
//! Files are organized by local date, one file per run:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── technology_091502.json
//!     └── health_143010.json
//! ```

use crate::error::NewsError;
use crate::models::SelectionSet;
use crate::utils::ensure_writable_dir;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Path of the snapshot for `section` taken at `now`.
pub fn snapshot_path(json_output_dir: &Path, section: &str, now: DateTime<Local>) -> PathBuf {
    json_output_dir
        .join(now.format("%Y-%m-%d").to_string())
        .join(format!(
            "{}_{}.json",
            section.to_lowercase().replace(char::is_whitespace, "_"),
            now.format("%H%M%S")
        ))
}

/// Serialize `selection` under `json_output_dir` and return the written path.
///
/// # Arguments
///
/// * `selection` - The ranked articles of the current cycle
/// * `json_output_dir` - Root directory; a dated subdirectory is created under it
/// * `section` - Section name used in the file name
///
/// # Returns
///
/// The path of the written snapshot.
///
/// # Errors
///
/// [`NewsError::Io`] if the directory is not writable or the write fails,
/// [`NewsError::Json`] if serialization fails.
#[instrument(level = "info", skip(selection), fields(articles = selection.len()))]
pub async fn write_selection(
    selection: &SelectionSet,
    json_output_dir: &Path,
    section: &str,
) -> Result<PathBuf, NewsError> {
    let path = snapshot_path(json_output_dir, section, Local::now());
    if let Some(dir) = path.parent() {
        ensure_writable_dir(dir).await?;
    }

    let json = serde_json::to_string_pretty(selection)?;
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote selection JSON");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::article;
    use crate::models::Tone;
    use chrono::TimeZone;

    #[test]
    fn test_snapshot_path_layout() {
        let now = Local.with_ymd_and_hms(2025, 5, 6, 9, 15, 2).unwrap();
        let path = snapshot_path(Path::new("/tmp/out"), "Science Now", now);
        assert_eq!(path, PathBuf::from("/tmp/out/2025-05-06/science_now_091502.json"));
    }

    #[tokio::test]
    async fn test_write_selection_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let selection =
            SelectionSet::new(vec![article("Moon base", "Plans announced.", Tone::Neutral)]);

        let path = write_selection(&selection, dir.path(), "Science").await.unwrap();
        assert!(path.starts_with(dir.path()));

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        let back: SelectionSet = serde_json::from_str(&written).unwrap();
        assert_eq!(back, selection);
    }
}
