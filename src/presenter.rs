//! Paginated result presentation.
//!
//! This module prints the framed summary line and the per-file listing,
//! paging through the sorted results and asking the user whether to
//! continue after each full page. The pagination loop is an explicit state
//! machine; a declined prompt surfaces as [`Outcome::Aborted`], a typed
//! result the binary maps to the user-abort exit, never a panic.
//!
//! A limit that cuts the listing below the full count disables pagination
//! entirely: the listing stops silently at the first page boundary and the
//! trailing end-of-list line is never printed.

use std::io::{BufRead, Write};

use crate::{scanner::FileEntry, utils::format_size};

/// How a presentation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The listing ran to its end (or to its cap).
    Completed,

    /// The user declined the pagination prompt.
    Aborted,
}

/// Pagination states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Printing the current page of entries.
    Listing,

    /// A full page was printed and more entries remain; waiting for the
    /// user's reply.
    AwaitingConfirmation,

    /// Terminal: the listing finished.
    Done,

    /// Terminal: the user declined to continue.
    Aborted,
}

/// Interactive printer for a sorted result set.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    /// Number of entry lines printed per page.
    page_size: usize,
}

impl Presenter {
    /// Create a presenter with the given page size.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Print the summary and the paginated listing.
    ///
    /// The summary counts and sums ALL results; a non-negative `limit` then
    /// truncates the listing (so `limit == 0` yields the framed header and
    /// nothing else). Pagination prompts are only issued when no cap cut
    /// the listing short; any reply other than exactly `y` aborts.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the output sink or the input prompt.
    pub fn present<R, W>(
        &self,
        results: &[FileEntry],
        limit: i64,
        mut input: R,
        mut output: W,
    ) -> std::io::Result<Outcome>
    where
        R: BufRead,
        W: Write,
    {
        let total: u64 = results.iter().map(|entry| entry.size).sum();
        let header = format!(
            "FOUND {} FILES; THE OVERALL SIZE IS {}.",
            results.len(),
            format_size(total)
        );
        let divider = "=".repeat(header.len());
        writeln!(output, "{divider}\n{header}\n{divider}")?;

        let listed = match usize::try_from(limit) {
            Ok(cap) if cap < results.len() => &results[..cap],
            _ => results,
        };
        let capped = listed.len() < results.len();

        let mut next = 0;
        let mut state = State::Listing;

        loop {
            match state {
                State::Listing => {
                    let page_end = usize::min(next + self.page_size, listed.len());
                    for entry in &listed[next..page_end] {
                        writeln!(
                            output,
                            "{}\t:\t{}",
                            format_size(entry.size),
                            entry.path.display()
                        )?;
                    }
                    next = page_end;

                    state = if capped {
                        State::Done
                    } else if next < listed.len() {
                        State::AwaitingConfirmation
                    } else {
                        writeln!(output, "-- Reached the end.")?;
                        State::Done
                    };
                }
                State::AwaitingConfirmation => {
                    write!(output, "\nMore? (y) ")?;
                    output.flush()?;

                    let mut reply = String::new();
                    input.read_line(&mut reply)?;

                    state = if reply.trim_end_matches(['\r', '\n']) == "y" {
                        writeln!(output)?;
                        State::Listing
                    } else {
                        State::Aborted
                    };
                }
                State::Done => return Ok(Outcome::Completed),
                State::Aborted => return Ok(Outcome::Aborted),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// `count` entries of one byte each, with zero-padded names so that the
    /// descending-path sort order is easy to reason about.
    fn entries(count: usize) -> Vec<FileEntry> {
        (0..count)
            .map(|i| FileEntry {
                size: 1,
                path: PathBuf::from(format!("/tmp/file{i:03}.txt")),
            })
            .collect()
    }

    fn present(
        results: &[FileEntry],
        limit: i64,
        input: &str,
    ) -> (String, Outcome) {
        let presenter = Presenter::new(25);
        let mut output = Vec::new();
        let outcome = presenter
            .present(results, limit, input.as_bytes(), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), outcome)
    }

    fn entry_lines(output: &str) -> usize {
        output.lines().filter(|line| line.contains("\t:\t")).count()
    }

    #[test]
    fn test_header_is_framed_by_dividers() {
        let (output, outcome) = present(&entries(2), -1, "");
        let lines: Vec<&str> = output.lines().collect();

        let header = "FOUND 2 FILES; THE OVERALL SIZE IS 2 Bytes.";
        assert_eq!(lines[0], "=".repeat(header.len()));
        assert_eq!(lines[1], header);
        assert_eq!(lines[2], lines[0]);
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_limit_zero_prints_header_only() {
        let zero_sized: Vec<FileEntry> = (0..3)
            .map(|i| FileEntry {
                size: 0,
                path: PathBuf::from(format!("/tmp/empty{i}")),
            })
            .collect();

        let (output, outcome) = present(&zero_sized, 0, "");
        let header = "FOUND 3 FILES; THE OVERALL SIZE IS 0 Bytes.";
        let divider = "=".repeat(header.len());

        assert_eq!(output, format!("{divider}\n{header}\n{divider}\n"));
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_short_listing_ends_without_prompt() {
        let (output, outcome) = present(&entries(3), -1, "");

        assert_eq!(entry_lines(&output), 3);
        assert!(!output.contains("More? (y)"));
        assert!(output.ends_with("-- Reached the end.\n"));
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_exactly_one_page_ends_without_prompt() {
        let (output, outcome) = present(&entries(25), -1, "");

        assert_eq!(entry_lines(&output), 25);
        assert!(!output.contains("More? (y)"));
        assert!(output.ends_with("-- Reached the end.\n"));
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_confirmation_continues_to_next_page() {
        let (output, outcome) = present(&entries(30), -1, "y\n");

        assert_eq!(entry_lines(&output), 30);
        assert!(output.contains("\nMore? (y) "));
        assert!(output.ends_with("-- Reached the end.\n"));
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_any_other_reply_aborts() {
        let (output, outcome) = present(&entries(30), -1, "n\n");

        assert_eq!(entry_lines(&output), 25);
        assert!(!output.contains("-- Reached the end."));
        assert_eq!(outcome, Outcome::Aborted);
    }

    #[test]
    fn test_reply_must_be_exactly_y() {
        let (_, outcome) = present(&entries(30), -1, "yes\n");
        assert_eq!(outcome, Outcome::Aborted);

        let (_, outcome) = present(&entries(30), -1, " y\n");
        assert_eq!(outcome, Outcome::Aborted);
    }

    #[test]
    fn test_empty_input_aborts() {
        let (_, outcome) = present(&entries(30), -1, "");
        assert_eq!(outcome, Outcome::Aborted);
    }

    #[test]
    fn test_capped_listing_truncates_and_stays_silent() {
        let (output, outcome) = present(&entries(10), 5, "");

        assert_eq!(entry_lines(&output), 5);
        assert!(!output.contains("More? (y)"));
        assert!(!output.contains("-- Reached the end."));
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_capped_listing_stops_at_page_boundary() {
        // A cap above the page size still stops after the first page,
        // without prompting.
        let (output, outcome) = present(&entries(60), 30, "");

        assert_eq!(entry_lines(&output), 25);
        assert!(!output.contains("More? (y)"));
        assert!(!output.contains("-- Reached the end."));
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_limit_at_or_above_count_is_not_a_cap() {
        let (output, outcome) = present(&entries(3), 3, "");

        assert_eq!(entry_lines(&output), 3);
        assert!(output.ends_with("-- Reached the end.\n"));
        assert_eq!(outcome, Outcome::Completed);

        let (output, _) = present(&entries(3), 100, "");
        assert!(output.ends_with("-- Reached the end.\n"));
    }

    #[test]
    fn test_summary_counts_all_results_despite_cap() {
        let mixed = vec![
            FileEntry {
                size: 1024,
                path: PathBuf::from("/tmp/big.bin"),
            },
            FileEntry {
                size: 512,
                path: PathBuf::from("/tmp/small.bin"),
            },
        ];

        let (output, _) = present(&mixed, 1, "");
        assert!(output.contains("FOUND 2 FILES; THE OVERALL SIZE IS 1.5 Kbytes."));
        assert_eq!(entry_lines(&output), 1);
    }

    #[test]
    fn test_entry_line_format() {
        let single = vec![FileEntry {
            size: 1536,
            path: PathBuf::from("/tmp/song.mp3"),
        }];

        let (output, _) = present(&single, -1, "");
        assert!(output.contains("1.5 Kbytes\t:\t/tmp/song.mp3"));
    }
}
