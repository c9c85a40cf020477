//! Free-token classification for the scan command line.
//!
//! The clap surface handles `--help` and the boolean flags; everything else
//! arrives here as a free-form token. Each token is classified, first match
//! wins: a numeral caps the listing, `e=` and `l=` tokens accumulate into
//! the extension filter, and anything else is taken as the target
//! directory. The last directory and the last numeral win when several are
//! given.

use std::{
    env,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use crate::{
    error::{Error, Result},
    filter::{self, FilterSpec, LibraryCatalog},
};

/// Integer or decimal numeral, e.g. `3`, `12.`, `2.5`.
static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\d*$").expect("hardcoded pattern is valid"));

/// Scan parameters resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanParams {
    /// Walk subdirectories as well as the target directory.
    pub recursive: bool,

    /// Mirror of the filter's exclude mode.
    pub exclude: bool,

    /// Cap on the number of listed files: `-1` unlimited, `0` summary only,
    /// positive values truncate after sorting.
    pub limit: i64,

    /// Apply the last-access staleness post-filter.
    pub useless: bool,
}

/// The fully resolved command line: where to scan, what to match, and how
/// to report.
#[derive(Debug, Clone)]
pub struct ResolvedArgs {
    /// Target directory.
    pub dir: PathBuf,

    /// Resolved extension filter.
    pub filter: FilterSpec,

    /// Scan parameters.
    pub params: ScanParams,
}

/// Classify the free tokens into a directory, a filter, and scan parameters.
///
/// `recursive` and `useless` arrive pre-parsed from the flag surface and are
/// carried through into the returned [`ScanParams`]. The directory defaults
/// to the current working directory, the filter to match-any, and the limit
/// to unlimited.
///
/// # Errors
///
/// - [`Error::UnknownLibrary`] when an `l=` token names a library missing
///   from the catalog.
/// - [`Error::DirectoryNotFound`] when a directory token does not name an
///   existing directory.
/// - [`Error::InvalidArgument`] when a numeral token cannot be parsed.
pub fn resolve_tokens(
    tokens: &[String],
    catalog: &LibraryCatalog,
    recursive: bool,
    useless: bool,
) -> Result<ResolvedArgs> {
    let mut dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut filter = FilterSpec::match_any();
    let mut limit: i64 = -1;

    for token in tokens {
        if NUMERAL.is_match(token) {
            limit = parse_limit(token)?;
        } else if let Some(body) = token.strip_prefix("e=") {
            let (names, exclude) = filter::parse_list(body);
            filter.union(names, exclude);
        } else if let Some(body) = token.strip_prefix("l=") {
            let (names, exclude) = filter::parse_list(body);
            filter.union(resolve_libraries(&names, catalog)?, exclude);
        } else {
            dir = resolve_directory(token)?;
        }
    }

    let exclude = filter.exclude();
    Ok(ResolvedArgs {
        dir,
        filter,
        params: ScanParams {
            recursive,
            exclude,
            limit,
            useless,
        },
    })
}

/// Parse a numeral token into a limit, flooring decimals.
#[allow(clippy::cast_possible_truncation)]
fn parse_limit(token: &str) -> Result<i64> {
    let value: f64 = token
        .parse()
        .map_err(|_| Error::InvalidArgument(token.to_string()))?;
    Ok(value.floor() as i64)
}

/// Resolve library names to the union of their extension sets.
fn resolve_libraries(names: &[String], catalog: &LibraryCatalog) -> Result<Vec<String>> {
    let mut extensions = Vec::new();
    for name in names {
        let Some(set) = catalog.resolve(name) else {
            return Err(Error::UnknownLibrary(catalog.names()));
        };
        extensions.extend(set.iter().cloned());
    }
    Ok(extensions)
}

/// Expand a leading `~`, then require an existing directory.
///
/// The error names the path as the user typed it, before tilde expansion.
fn resolve_directory(token: &str) -> Result<PathBuf> {
    let path = expand_tilde(Path::new(token));
    if path.is_dir() {
        Ok(path)
    } else {
        Err(Error::DirectoryNotFound(token.to_string()))
    }
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
