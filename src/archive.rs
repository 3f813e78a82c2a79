use std::fs;
use std::io::Write;

use camino::Utf8Path;
use tracing::info;

use crate::domain::AnnotatedRecord;
use crate::error::OrthoError;

/// Records joined by single newlines, nothing appended after the last one.
/// `None` when there is nothing to write.
pub fn render(records: &[AnnotatedRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    Some(
        records
            .iter()
            .map(AnnotatedRecord::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Writes the archive in one step: a temp file beside `path` that is then
/// persisted over it. Returns `false` without touching the filesystem when
/// `records` is empty.
pub fn write_archive(path: &Utf8Path, records: &[AnnotatedRecord]) -> Result<bool, OrthoError> {
    let Some(content) = render(records) else {
        return Ok(false);
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    fs::create_dir_all(parent.as_std_path())
        .map_err(|err| OrthoError::Filesystem(format!("create {parent}: {err}")))?;

    let mut temp = tempfile::Builder::new()
        .prefix(".ortho-fetch")
        .tempfile_in(parent.as_std_path())
        .map_err(|err| OrthoError::Filesystem(err.to_string()))?;
    temp.write_all(content.as_bytes())
        .map_err(|err| OrthoError::Filesystem(err.to_string()))?;
    set_archive_permissions(temp.as_file())?;
    temp.persist(path.as_std_path())
        .map_err(|err| OrthoError::Filesystem(format!("write {path}: {err}")))?;

    info!(%path, records = records.len(), "archive written");
    Ok(true)
}

/// Temp files are created owner-only; the archive gets ordinary file mode.
#[cfg(unix)]
fn set_archive_permissions(file: &fs::File) -> Result<(), OrthoError> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o644))
        .map_err(|err| OrthoError::Filesystem(err.to_string()))
}

#[cfg(not(unix))]
fn set_archive_permissions(_file: &fs::File) -> Result<(), OrthoError> {
    Ok(())
}
