//! Directory scanning and size collection.
//!
//! This module provides the core scanning logic: listing a directory's
//! regular files against a [`FilterSpec`], optionally walking the whole
//! subtree, and aggregating the matches into a sorted result set. Error
//! conditions are handled gracefully; the one place where local recovery
//! applies is a subdirectory that vanishes or becomes unreadable mid-walk,
//! which is skipped rather than failing the whole scan.

use std::{fmt, fs, path::Path, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    filter::FilterSpec,
};

/// A matched regular file: its size in bytes and its path.
///
/// Ordering compares the `(size, path)` tuple as a whole, size first, which
/// is exactly the order the presenter relies on after [`Scanner::scan`]
/// reverses it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileEntry {
    /// File size in bytes.
    pub size: u64,

    /// Path as produced by directory traversal.
    pub path: PathBuf,
}

/// Predicate applied to each matched file after extension filtering and
/// before sorting. Files for which it returns `false` are dropped.
pub type PostFilter = Box<dyn Fn(&Path) -> bool>;

/// Directory scanner for collecting file sizes.
///
/// The `Scanner` owns the resolved extension filter and the traversal mode.
/// Each listing call opens, reads, and closes its directory handle within
/// its own invocation; no state is retained between calls.
pub struct Scanner {
    /// Resolved extension filter.
    filter: FilterSpec,

    /// When `true`, walk every descendant directory instead of just the root.
    recursive: bool,

    /// Optional predicate applied after extension filtering (e.g. the
    /// staleness check behind `--useless`).
    post_filter: Option<PostFilter>,

    /// When `true`, suppresses the progress spinner (used by `--json` mode).
    quiet: bool,
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("filter", &self.filter)
            .field("recursive", &self.recursive)
            .field("post_filter", &self.post_filter.is_some())
            .field("quiet", &self.quiet)
            .finish()
    }
}

impl Scanner {
    /// Create a new scanner with the given filter and traversal mode.
    #[must_use]
    pub const fn new(filter: FilterSpec, recursive: bool) -> Self {
        Self {
            filter,
            recursive,
            post_filter: None,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    ///
    /// Quiet mode is required for `--json` output so that only the final
    /// JSON document is printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Install a predicate applied to each match after extension filtering
    /// and before the empty check and sort.
    #[must_use]
    pub fn with_post_filter(mut self, post_filter: PostFilter) -> Self {
        self.post_filter = Some(post_filter);
        self
    }

    /// Scan `root` and return the sorted result set.
    ///
    /// Collects matches via [`scan_tree`], applies the post-filter predicate
    /// when one is installed, and sorts the survivors descending by
    /// `(size, path)`. A spinner is shown on stderr while the walk runs
    /// unless quiet mode is active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnreadable`] when `root` itself cannot be
    /// listed, and [`Error::NoMatchingFiles`] when nothing survives the
    /// filters.
    ///
    /// # Panics
    ///
    /// May panic if the progress bar template string is invalid, which does
    /// not occur as the template is hardcoded and valid.
    ///
    /// [`scan_tree`]: Scanner::scan_tree
    pub fn scan(&self, root: &Path) -> Result<Vec<FileEntry>> {
        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Scanning...");
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };

        let collected = self.scan_tree(root);
        progress.finish_and_clear();

        let mut files = collected?;

        if let Some(predicate) = &self.post_filter {
            files.retain(|entry| predicate(&entry.path));
        }

        if files.is_empty() {
            return Err(Error::NoMatchingFiles {
                dir: root.to_path_buf(),
                extensions: self.filter.describe(),
            });
        }

        files.sort_by(|a, b| b.cmp(a));
        Ok(files)
    }

    /// Collect matches from `root`, walking the subtree when recursive.
    ///
    /// The non-recursive mode is exactly [`scan_one`] on the root. The
    /// recursive mode visits the root first and then every descendant
    /// directory in pre-order; a descendant that vanishes or becomes
    /// unreadable mid-walk is skipped. Symbolic links to directories are
    /// not followed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnreadable`] when the root itself cannot
    /// be listed.
    ///
    /// [`scan_one`]: Scanner::scan_one
    pub fn scan_tree(&self, root: &Path) -> Result<Vec<FileEntry>> {
        if !self.recursive {
            return self.scan_one(root);
        }

        let mut found = self.scan_one(root)?;

        for entry in WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if entry.file_type().is_dir()
                && let Ok(mut matches) = self.scan_one(entry.path())
            {
                found.append(&mut matches);
            }
        }

        Ok(found)
    }

    /// List the direct children of `dir` that pass the extension filter.
    ///
    /// Only regular files are reported; directories, symlinks to
    /// directories, and other non-regular entries are skipped. A child that
    /// disappears between listing and stat is skipped as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnreadable`] when the directory listing
    /// fails (permissions, not-found).
    pub fn scan_one(&self, dir: &Path) -> Result<Vec<FileEntry>> {
        let entries = fs::read_dir(dir).map_err(|source| Error::DirectoryUnreadable {
            dir: dir.to_path_buf(),
            source,
        })?;

        let mut found = Vec::new();

        for entry in entries.flatten() {
            let path = entry.path();

            let Ok(metadata) = fs::metadata(&path) else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }

            if self.filter.matches(&extension_of(&path)) {
                found.push(FileEntry {
                    size: metadata.len(),
                    path,
                });
            }
        }

        Ok(found)
    }
}

/// The extension of a file name: the substring after the final `.`,
/// lowercased, or the empty string when the name has no dot.
fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };

    let name = name.to_string_lossy().to_lowercase();
    match name.rfind('.') {
        Some(dot) => name[dot + 1..].to_string(),
        None => String::new(),
    }
}
