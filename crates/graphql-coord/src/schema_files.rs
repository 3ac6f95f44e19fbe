use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The SDL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct SchemaFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Recursively finds every file at or under `file_or_dir_paths` whose
/// extension is one of `graphql_file_exts` (with or without a leading `.`).
///
/// If a single file path is given and nothing matched, that file is used
/// anyway: naming one file explicitly is taken to mean it is SDL.
pub(crate) fn find_schema_files(
    file_or_dir_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<SchemaFiles> {
    let graphql_file_exts: HashSet<&str> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
    let mut found = SchemaFiles::default();
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!(
                "Failed to scan for schema files at/under {}",
                path.display(),
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let has_graphql_ext = entry_path
                .extension()
                .is_some_and(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()));
            if has_graphql_ext {
                log::trace!("Found schema file at {entry_path:#?}.");
                found.file_paths.push(canonicalize(entry_path)?);
            } else {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                found.num_skipped_files += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && let [only_path] = file_or_dir_paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding to load {only_path:#?} even though it doesn't match any \
            of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.file_paths.push(canonicalize(only_path)?);
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
    }

    log::debug!("Found {} schema files.", found.file_paths.len());
    Ok(found)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path {}", path.display()))
}
