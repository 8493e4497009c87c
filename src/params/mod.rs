use anyhow::{Context, Result};
use std::path::Path;

#[cfg(test)]
mod tests;

/// Enumerate (os, version) test parameters from a configuration root.
///
/// The root holds one directory per OS, each holding one directory per
/// version with its Dockerfile. One pair is emitted per version directory
/// whose OS name passes the filter; non-directory entries are skipped.
/// Pairs come back in filesystem listing order.
pub fn parameters<F>(root: impl AsRef<Path>, os_filter: F) -> Result<Vec<(String, String)>>
where
    F: Fn(&str) -> bool,
{
    let root = root.as_ref();
    let mut pairs = Vec::new();

    let entries = std::fs::read_dir(root)
        .with_context(|| format!("Failed to list configuration root {}", root.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let os = entry.file_name().to_string_lossy().into_owned();
        if !os_filter(&os) {
            continue;
        }
        let versions = std::fs::read_dir(entry.path())
            .with_context(|| format!("Failed to list versions under {}", entry.path().display()))?;
        for version in versions {
            let version = version?;
            if !version.file_type()?.is_dir() {
                continue;
            }
            pairs.push((os.clone(), version.file_name().to_string_lossy().into_owned()));
        }
    }

    Ok(pairs)
}
