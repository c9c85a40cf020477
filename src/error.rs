//! Error types for the scanning pipeline.
//!
//! Every failure the tool can report to the user is a variant of [`Error`].
//! All of them are terminal: the binary prints the single-line message and
//! exits with a non-zero status. The only non-fatal condition in the whole
//! pipeline is an unreadable subdirectory during a recursive walk, which the
//! scanner skips without constructing an error at all.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// User-visible failures, each with its exact output message.
#[derive(Debug, Error)]
pub enum Error {
    /// The target directory given on the command line does not exist or is
    /// not a directory. Carries the path as the user typed it.
    #[error("There is no \"{0}\" directory.")]
    DirectoryNotFound(String),

    /// An `l=` token named a library that is not in the catalog. Carries the
    /// comma-joined list of valid library names.
    #[error("Available libraries: {0}")]
    UnknownLibrary(String),

    /// The scan produced no files. Carries the scanned directory and the
    /// rendered extension set (`{a, b}` or the word `any`).
    #[error("No files in \"{}\" with {extensions} extension(s).", dir.display())]
    NoMatchingFiles {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Rendered extension filter, see [`crate::filter::FilterSpec::describe`].
        extensions: String,
    },

    /// A directory listing failed outright (permissions, not-found).
    #[error("Could not read directory \"{}\": {source}", dir.display())]
    DirectoryUnreadable {
        /// Directory whose listing failed.
        dir: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A token was classified but could not be parsed.
    #[error("Invalid argument \"{0}\".")]
    InvalidArgument(String),

    /// The user declined the pagination prompt.
    #[error("-- Exit.")]
    UserAbort,
}
