use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::error::SortError;

/// Outcome of a successful sort.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortSummary {
    pub files_copied: usize,
    /// Files left alone because their destination is the file itself.
    pub files_skipped: usize,
    /// Files copied per extension; `""` holds files without one.
    pub groups: BTreeMap<String, usize>,
}

/// Copies every file below `source` into `target/<extension>/`.
///
/// Sources are left in place. Name collisions inside a group are overwritten,
/// so of two `notes.txt` files in different subdirectories only the one
/// copied last survives.
#[derive(Debug, Clone)]
pub struct FileSorter {
    source: PathBuf,
    target: PathBuf,
    progress: Option<ProgressBar>,
}

impl FileSorter {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(source: P, target: Q) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            target: target.as_ref().to_path_buf(),
            progress: None,
        }
    }

    /// Reports copy progress on `pb`; its length is set once files are counted.
    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        self.progress = Some(pb);
        self
    }

    pub fn sort_files(&self) -> Result<SortSummary, SortError> {
        ensure_directory(&self.source)?;
        ensure_directory(&self.target)?;

        let target =
            fs::canonicalize(&self.target).map_err(|e| SortError::io(&self.target, e))?;
        let groups = self.group_by_extension(&target)?;
        let total: usize = groups.values().map(Vec::len).sum();

        if let Some(ref pb) = self.progress {
            pb.set_length(total as u64);
        }

        let mut summary = SortSummary::default();
        for (extension, files) in &groups {
            let folder = self.target.join(extension);
            fs::create_dir_all(&folder).map_err(|e| SortError::io(&folder, e))?;
            debug!("Copying {} file(s) into {}", files.len(), folder.display());

            for file in files {
                // Every walked file has a name; walkdir never yields `..`.
                let Some(name) = file.file_name() else {
                    continue;
                };
                let destination = folder.join(name);

                // Copying a file onto itself truncates it.
                if is_same_file(file, &destination) {
                    warn!("Skipping {}: already in place", file.display());
                    summary.files_skipped += 1;
                } else {
                    fs::copy(file, &destination).map_err(|e| SortError::io(file, e))?;
                    summary.files_copied += 1;
                    *summary.groups.entry(extension.clone()).or_default() += 1;
                }

                if let Some(ref pb) = self.progress {
                    pb.inc(1);
                }
            }
        }

        if let Some(ref pb) = self.progress {
            pb.finish_with_message("Sorting complete");
        }

        Ok(summary)
    }

    /// Groups every file under the source by extension, pruning `target` when
    /// it lies inside the source so earlier output is not sorted again.
    fn group_by_extension(
        &self,
        target: &Path,
    ) -> Result<BTreeMap<String, Vec<PathBuf>>, SortError> {
        let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

        let walker = WalkDir::new(&self.source).into_iter().filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || fs::canonicalize(e.path()).map_or(true, |p| p != target)
        });

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.source.clone());
                SortError::io(path, e.into())
            })?;

            if entry.file_type().is_file() {
                groups
                    .entry(extension_key(entry.path()))
                    .or_default()
                    .push(entry.into_path());
            }
        }

        Ok(groups)
    }
}

/// Sorts `source_dir` into `target_dir`, logging instead of returning errors.
///
/// A missing or non-directory path is reported and nothing is copied.
pub fn sort(source_dir: &Path, target_dir: &Path) {
    match FileSorter::new(source_dir, target_dir).sort_files() {
        Ok(summary) => {
            debug!(
                "Copied {} file(s) in {} group(s), skipped {}",
                summary.files_copied,
                summary.groups.len(),
                summary.files_skipped
            );
            info!("File copying completed successfully.");
        }
        Err(e) => error!("{}", e),
    }
}

/// The extension without its dot, or `""` when there is none.
pub fn extension_key(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn ensure_directory(path: &Path) -> Result<(), SortError> {
    if !path.exists() {
        return Err(SortError::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(SortError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
