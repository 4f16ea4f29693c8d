use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context as _;

use crate::encode::png::EncodedImage;
use crate::foundation::error::ThumbResult;

/// Write `img` to `path` atomically: a sibling temporary file is written and synced, then
/// renamed into place. Parent directories are created as needed.
#[tracing::instrument(skip(img), fields(path = %path.as_ref().display(), len = img.bytes.len()))]
pub fn publish(path: impl AsRef<Path>, img: &EncodedImage) -> ThumbResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }

    let tmp = temp_sibling(path);
    let written = write_synced(&tmp, &img.bytes).and_then(|()| {
        std::fs::rename(&tmp, path)
            .with_context(|| format!("rename '{}' to '{}'", tmp.display(), path.display()))
    });
    if let Err(err) = written {
        remove_best_effort(&tmp);
        return Err(err.into());
    }
    tracing::debug!("published");
    Ok(())
}

/// Remove a file, logging instead of failing. A missing file is not worth a warning.
pub fn remove_best_effort(path: impl AsRef<Path>) {
    let path = path.as_ref();
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "cleanup failed"),
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let mut f = std::fs::File::create(path)
        .with_context(|| format!("create '{}'", path.display()))?;
    f.write_all(bytes)
        .with_context(|| format!("write '{}'", path.display()))?;
    f.sync_all()
        .with_context(|| format!("sync '{}'", path.display()))?;
    Ok(())
}

// Distinguishes concurrent publishes of the same path within one process.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "thumbnail".to_owned());
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id()))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/publish.rs"]
mod tests;
