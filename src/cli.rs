//! Command-line interface definition.
//!
//! This module defines the flag surface using the
//! [clap](https://docs.rs/clap/) library: `--help`, `-r`, `--useless`, and
//! `--json`. Everything else on the command line is a free-form token
//! (target directory, `e=`/`l=` filter specs, or a numeric result cap) and
//! is classified by [`sizescan::args::resolve_tokens`], which keeps the
//! tokens order-independent.

use clap::Parser;

/// Usage example appended to `--help`.
const EXAMPLE: &str = "\
Example:
  sizescan ~/Desktop e=mp4,mp3 3 -r

  Prints the 3 largest 'mp4' and 'mp3' files, with their sizes, found in
  '~/Desktop' and all its subdirectories.";

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "sizescan")]
#[command(
    about = "Scans a directory for files with specified extensions and lists their sizes and names"
)]
#[command(version)]
#[command(after_help = EXAMPLE)]
pub struct Cli {
    /// Free-form tokens, in any order:
    ///
    ///   <DIRECTORY>            directory to scan (default: current directory)
    ///   e=<EXT>[,<EXT>...]     only list files with these extensions
    ///   e=-<EXT>[,<EXT>...]    exclude these extensions (same for libraries)
    ///   l=<LIBRARY>[,...]      named extension groups: audio, video, documents
    ///   <NUMBER>               print out only <NUMBER> largest files
    #[arg(num_args = 0.., value_name = "TOKEN", verbatim_doc_comment)]
    tokens: Vec<String>,

    /// Search all subfolders
    #[arg(short = 'r')]
    recursive: bool,

    /// Only list files that have not been accessed recently
    ///
    /// The age threshold defaults to one month and can be changed in the
    /// config file.
    #[arg(long)]
    useless: bool,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// Suppresses the progress spinner and the interactive pagination.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// The unclassified free-form tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether `-r` recursive traversal is enabled.
    #[must_use]
    pub const fn recursive(&self) -> bool {
        self.recursive
    }

    /// Whether the `--useless` staleness filter is enabled.
    #[must_use]
    pub const fn useless(&self) -> bool {
        self.useless
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["sizescan"]);

        assert!(args.tokens().is_empty());
        assert!(!args.recursive());
        assert!(!args.useless());
        assert!(!args.json());
    }

    #[test]
    fn test_flags() {
        let args = Cli::parse_from(["sizescan", "-r", "--useless", "--json"]);

        assert!(args.recursive());
        assert!(args.useless());
        assert!(args.json());
    }

    #[test]
    fn test_free_tokens_pass_through_in_order() {
        let args = Cli::parse_from(["sizescan", "/music", "e=mp3", "l=video", "3"]);
        assert_eq!(args.tokens(), ["/music", "e=mp3", "l=video", "3"]);
    }

    #[test]
    fn test_flags_mix_with_tokens_anywhere() {
        let args = Cli::parse_from(["sizescan", "e=mp3", "-r", "5"]);

        assert!(args.recursive());
        assert_eq!(args.tokens(), ["e=mp3", "5"]);
    }

    #[test]
    fn test_exclusion_tokens_are_not_flags() {
        // The '-' sits after the '=', so clap must not treat these as options.
        let args = Cli::parse_from(["sizescan", "e=-txt", "l=-audio"]);
        assert_eq!(args.tokens(), ["e=-txt", "l=-audio"]);
    }
}
