//! Document discovery with gitignore support
//!
//! Walks one root at a time with the ignore crate, honoring `.gitignore`,
//! and filters files through include/exclude globs matched against the path
//! relative to the root.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Include or exclude glob, matched against the path relative to the walk root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobPattern(String);

impl GlobPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn compile(&self) -> Result<Glob, FileWalkerError> {
        Glob::new(&self.0).map_err(|source| FileWalkerError::InvalidGlob {
            pattern: self.0.clone(),
            source,
        })
    }
}

impl From<String> for GlobPattern {
    fn from(pattern: String) -> Self {
        GlobPattern(pattern)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File did not match include patterns, or matched an exclude pattern
    ExcludedByPattern,
    /// Entry is not a regular file (e.g., directory)
    NotAFile,
}

/// Result of file walking - either a file to scan or a skipped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// File to be scanned
    File(FileEntry),
    /// Entry that was skipped with reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A discovered file and the root it was found under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file, as produced by the walk
    pub path: PathBuf,
    /// Root the walk started from; a file root is its own parent
    pub root: PathBuf,
}

impl FileEntry {
    /// Creates a new FileEntry
    pub fn new(path: PathBuf, root: PathBuf) -> Self {
        Self { path, root }
    }

    /// Path relative to the walk root
    pub fn relative_path(&self) -> &Path {
        self.path.strip_prefix(&self.root).unwrap_or(&self.path)
    }
}

/// Iterator over discovered files
pub struct FileWalker {
    walker: ignore::Walk,
    root: PathBuf,
    include_set: Option<GlobSet>,
    exclude_set: GlobSet,
    verbose: bool,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Directory (or single file) to walk
    /// * `include` - Include patterns (empty means include all)
    /// * `exclude` - Exclude patterns (applied after include)
    pub fn new(
        root: &Path,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
    ) -> Result<Self, FileWalkerError> {
        Self::with_verbose(root, include, exclude, false)
    }

    /// Creates a new FileWalker that also reports skipped entries
    pub fn with_verbose(
        root: &Path,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
        verbose: bool,
    ) -> Result<Self, FileWalkerError> {
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .build();

        let include_set = if include.is_empty() {
            None
        } else {
            Some(Self::build_globset(include)?)
        };

        // .git is never scanned
        let mut exclude_patterns = Vec::from(exclude);
        exclude_patterns.push(GlobPattern::new("**/.git/**"));
        let exclude_set = Self::build_globset(&exclude_patterns)?;

        // Relative paths of a single-file root are taken from its directory
        let root = if root.is_file() {
            root.parent().map(Path::to_path_buf).unwrap_or_default()
        } else {
            root.to_path_buf()
        };

        Ok(Self {
            walker,
            root,
            include_set,
            exclude_set,
            verbose,
        })
    }

    /// Builds a GlobSet from patterns
    fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, FileWalkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(pattern.compile()?);
        }
        builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Walks the tree and returns an iterator over matching files
    pub fn walk(self) -> impl Iterator<Item = Result<FileEntry, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(file)) => Some(Ok(file)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the tree and returns an iterator with skip information
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let FileWalker {
            walker,
            root,
            include_set,
            exclude_set,
            verbose,
        } = self;

        walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(FileWalkerError::Walk(e))),
            };

            let skipped = |reason: SkipReason| {
                verbose.then(|| {
                    Ok::<_, FileWalkerError>(WalkResult::Skipped {
                        path: entry.path().to_path_buf(),
                        reason,
                    })
                })
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return skipped(SkipReason::NotAFile);
            }

            let file = FileEntry::new(entry.path().to_path_buf(), root.clone());
            let relative = file.relative_path();

            if let Some(ref include_set) = include_set
                && !include_set.is_match(relative)
            {
                return skipped(SkipReason::ExcludedByPattern);
            }

            if exclude_set.is_match(relative) || exclude_set.is_match(&file.path) {
                return skipped(SkipReason::ExcludedByPattern);
            }

            Some(Ok(WalkResult::File(file)))
        })
    }
}

/// Walks every root and collects the discovered files
///
/// # Errors
///
/// Returns the first glob or walk error encountered.
pub fn discover_files(
    roots: &[PathBuf],
    include: &[GlobPattern],
    exclude: &[GlobPattern],
) -> Result<Vec<FileEntry>, FileWalkerError> {
    let mut files = Vec::new();
    for root in roots {
        let walker = FileWalker::new(root, include, exclude)?;
        for file in walker.walk() {
            files.push(file?);
        }
    }
    tracing::debug!(files = files.len(), "discovered files");
    Ok(files)
}
