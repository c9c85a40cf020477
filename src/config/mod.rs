//! Effective configuration assembly.
//!
//! The process-wide knobs (pagination page size, extension library catalog,
//! staleness threshold) are gathered into an immutable [`Config`] that is
//! passed explicitly to the components that need it. Values come from the
//! optional config file where present and from the hardcoded defaults
//! otherwise.

pub mod file;

pub use file::FileConfig;

use crate::{filter::LibraryCatalog, stale::StaleAge};

/// Default number of entry lines printed per pagination page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Effective, immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pagination page size.
    pub page_size: usize,

    /// Library catalog consulted when resolving `l=` tokens.
    pub catalog: LibraryCatalog,

    /// Staleness threshold for the `--useless` post-filter.
    pub stale: StaleAge,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            catalog: LibraryCatalog::default(),
            stale: StaleAge::default(),
        }
    }
}

impl Config {
    /// Merge config-file values over the defaults.
    ///
    /// User-defined libraries add to the built-in catalog, replacing any
    /// built-in library with the same name.
    #[must_use]
    pub fn from_file(file: &FileConfig) -> Self {
        let mut catalog = LibraryCatalog::default();
        if let Some(libraries) = &file.libraries {
            for (name, extensions) in libraries {
                let extensions: Vec<&str> = extensions.iter().map(String::as_str).collect();
                catalog.insert(name, &extensions);
            }
        }

        let default_age = StaleAge::default();

        Self {
            page_size: file.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            catalog,
            stale: StaleAge {
                days: file.stale.days.unwrap_or(default_age.days),
                months: file.stale.months.unwrap_or(default_age.months),
                years: file.stale.years.unwrap_or(default_age.years),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.stale, StaleAge::default());
        assert!(config.catalog.resolve("audio").is_some());
    }

    #[test]
    fn test_from_empty_file_equals_defaults() {
        let config = Config::from_file(&FileConfig::default());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.stale, StaleAge::default());
        assert_eq!(config.catalog.names(), "audio, documents, video");
    }

    #[test]
    fn test_file_overrides_page_size() {
        let file: FileConfig = toml::from_str("page_size = 10").unwrap();
        assert_eq!(Config::from_file(&file).page_size, 10);
    }

    #[test]
    fn test_file_libraries_extend_catalog() {
        let file: FileConfig = toml::from_str(
            r#"
            [libraries]
            ebooks = ["epub", "mobi"]
            "#,
        )
        .unwrap();

        let config = Config::from_file(&file);
        assert_eq!(config.catalog.names(), "audio, documents, ebooks, video");
        assert!(config.catalog.resolve("ebooks").unwrap().contains("epub"));
    }

    #[test]
    fn test_file_libraries_override_builtin() {
        let file: FileConfig = toml::from_str(
            r#"
            [libraries]
            audio = ["ogg"]
            "#,
        )
        .unwrap();

        let audio = Config::from_file(&file).catalog;
        let audio = audio.resolve("audio").unwrap();
        assert!(audio.contains("ogg"));
        assert!(!audio.contains("mp3"));
    }

    #[test]
    fn test_file_overrides_stale_fields_independently() {
        let file: FileConfig = toml::from_str(
            r#"
            [stale]
            years = 1
            "#,
        )
        .unwrap();

        let stale = Config::from_file(&file).stale;
        assert_eq!(stale.years, 1);
        assert_eq!(stale.months, 1);
        assert_eq!(stale.days, 0);
    }
}
