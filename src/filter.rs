//! Extension filter resolution.
//!
//! This module turns `e=` / `l=` command-line tokens into a [`FilterSpec`]:
//! a normalized set of file extensions plus an include/exclude mode. Library
//! tokens are resolved against a [`LibraryCatalog`], a named grouping of
//! extensions (e.g. `audio` covers `mp3` and `flac`).

use std::collections::{BTreeMap, BTreeSet};

/// A named, read-only mapping from library name to its extension set.
///
/// The default catalog ships three libraries (`audio`, `video`, `documents`);
/// the configuration file can add to or override them. Names are kept in a
/// sorted map so that error messages enumerate them in a stable order.
#[derive(Debug, Clone)]
pub struct LibraryCatalog {
    /// Library name → extension set.
    libraries: BTreeMap<String, BTreeSet<String>>,
}

impl Default for LibraryCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            libraries: BTreeMap::new(),
        };
        catalog.insert("audio", &["mp3", "flac"]);
        catalog.insert("video", &["mkv", "mp4", "avi", "webpm", "mov"]);
        catalog.insert("documents", &["txt", "doc", "pdf"]);
        catalog
    }
}

impl LibraryCatalog {
    /// Add a library to the catalog, replacing any existing one with the
    /// same name. Extensions are normalized (lowercased, leading dots
    /// stripped, empty entries dropped).
    pub fn insert(&mut self, name: &str, extensions: &[&str]) {
        let normalized = extensions
            .iter()
            .map(|ext| normalize_name(ext))
            .filter(|ext| !ext.is_empty())
            .collect();
        self.libraries.insert(name.to_lowercase(), normalized);
    }

    /// Look up a library's extension set by name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.libraries.get(name)
    }

    /// Comma-joined library names in sorted order, as used by the
    /// unknown-library error message.
    #[must_use]
    pub fn names(&self) -> String {
        self.libraries
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A resolved extension filter: which extensions to match, and whether the
/// set is an include list or an exclude list.
///
/// The empty-string sentinel means "match any extension". It is the initial
/// state and never coexists with concrete entries: every [`union`] drops it
/// as soon as a real extension is present.
///
/// [`union`]: FilterSpec::union
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Lowercase extensions without leading dots.
    extensions: BTreeSet<String>,

    /// When `true`, match files whose extension is NOT in the set.
    exclude: bool,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::match_any()
    }
}

impl FilterSpec {
    /// The unrestricted filter: matches every extension.
    #[must_use]
    pub fn match_any() -> Self {
        Self {
            extensions: BTreeSet::from([String::new()]),
            exclude: false,
        }
    }

    /// Whether this filter is still the match-any sentinel.
    #[must_use]
    pub fn is_match_any(&self) -> bool {
        self.extensions.len() == 1 && self.extensions.contains("")
    }

    /// Whether the filter is in exclude mode.
    #[must_use]
    pub const fn exclude(&self) -> bool {
        self.exclude
    }

    /// The current extension set.
    #[must_use]
    pub const fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Union another token's extensions into this filter.
    ///
    /// The token's mode becomes the filter's mode: when several tokens
    /// disagree, the last one wins. After the union the match-any sentinel
    /// is dropped if any concrete extension is present, so `any + mp3` does
    /// not degenerate into `any`.
    pub fn union<I>(&mut self, extensions: I, exclude: bool)
    where
        I: IntoIterator<Item = String>,
    {
        self.extensions.extend(extensions);
        self.exclude = exclude;
        if self.extensions.len() > 1 {
            self.extensions.remove("");
        }
    }

    /// Whether a file with the given (lowercase) extension passes the filter.
    #[must_use]
    pub fn matches(&self, extension: &str) -> bool {
        if self.exclude {
            !self.extensions.contains(extension)
        } else {
            self.is_match_any() || self.extensions.contains(extension)
        }
    }

    /// Render the filter for the no-matching-files message: the word `any`
    /// for the sentinel, otherwise the literal set in sorted order.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_match_any() {
            "any".to_string()
        } else {
            let names: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
            format!("{{{}}}", names.join(", "))
        }
    }
}

/// Parse the body of an `e=` or `l=` token.
///
/// A leading `-` marks the list as exclusions. The rest is a comma-separated
/// list of names; each is normalized and empty entries are dropped.
///
/// # Examples
///
/// ```
/// # use sizescan::filter::parse_list;
/// assert_eq!(parse_list("mp3,avi"), (vec!["mp3".into(), "avi".into()], false));
/// assert_eq!(parse_list("-txt"), (vec!["txt".into()], true));
/// ```
#[must_use]
pub fn parse_list(body: &str) -> (Vec<String>, bool) {
    let (list, exclude) = body
        .strip_prefix('-')
        .map_or((body, false), |rest| (rest, true));

    let names = list
        .split(',')
        .map(normalize_name)
        .filter(|name| !name.is_empty())
        .collect();

    (names, exclude)
}

/// Lowercase a name and strip any leading dots (`.MP3` → `mp3`).
fn normalize_name(name: &str) -> String {
    name.trim_start_matches('.').to_lowercase()
}
