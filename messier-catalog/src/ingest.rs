//! Building a [`Catalogue`] from many lines.
//!
//! Blank lines are always skipped. With a comment prefix configured, lines starting
//! with it are skipped too. Line numbers in errors are 1-based and count every physical
//! line, skipped ones included.
//!
//! | Policy | First bad line |
//! |--------|----------------|
//! | [`IngestPolicy::Strict`] | ingest stops, `Err(AtLine { .. })` |
//! | [`IngestPolicy::Lenient`] | recorded in [`IngestReport::rejected`], ingest continues |

use crate::catalogue::Catalogue;
use crate::error::{CatalogueError, CatalogueResult};
use crate::record::Record;
use std::fs;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestPolicy {
    /// Abort on the first line that fails to parse.
    #[default]
    Strict,
    /// Skip lines that fail to parse and collect their errors.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestOptions {
    pub policy: IngestPolicy,
    /// Lines whose first non-whitespace text starts with this are skipped.
    pub comment_prefix: Option<String>,
}

impl IngestOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            policy: IngestPolicy::Lenient,
            ..Self::default()
        }
    }

    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    fn skips(&self, line: &str) -> bool {
        let trimmed = line.trim();
        trimmed.is_empty()
            || self
                .comment_prefix
                .as_deref()
                .is_some_and(|prefix| trimmed.starts_with(prefix))
    }
}

/// A line that failed to parse under [`IngestPolicy::Lenient`].
#[derive(Debug)]
pub struct Rejected {
    /// 1-based line number.
    pub line: usize,
    pub error: CatalogueError,
}

#[derive(Debug, Default)]
pub struct IngestReport {
    pub catalogue: Catalogue,
    pub rejected: Vec<Rejected>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parses `lines` into a catalogue.
///
/// # Errors
/// Under [`IngestPolicy::Strict`], [`CatalogueError::AtLine`] wrapping the first parse
/// failure. Never fails under [`IngestPolicy::Lenient`].
pub fn ingest_lines<I, S>(lines: I, options: &IngestOptions) -> CatalogueResult<IngestReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter();
    let mut report = IngestReport {
        catalogue: Catalogue::with_capacity(lines.size_hint().0),
        rejected: Vec::new(),
    };

    for (index, line) in lines.enumerate() {
        let line_no = index + 1;
        let mut text = line.as_ref();
        if index == 0 {
            text = text.trim_start_matches(BYTE_ORDER_MARK);
        }
        if options.skips(text) {
            continue;
        }

        match Record::parse(text) {
            Ok(record) => report.catalogue.add(record),
            Err(error) => match options.policy {
                IngestPolicy::Strict => return Err(CatalogueError::at_line(line_no, error)),
                IngestPolicy::Lenient => report.rejected.push(Rejected {
                    line: line_no,
                    error,
                }),
            },
        }
    }

    Ok(report)
}

/// Reads and parses a catalogue file.
///
/// # Errors
/// [`CatalogueError::Io`] if the file cannot be read, otherwise as [`ingest_lines`].
pub fn read_catalogue<P: AsRef<Path>>(
    path: P,
    options: &IngestOptions,
) -> CatalogueResult<IngestReport> {
    let contents = fs::read_to_string(path.as_ref())?;
    ingest_lines(contents.lines(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use std::io::Write;

    const M1: &str = r#"M1, "NGC 1952", "Crab Nebula", Supernova remnant, 4.9-8.1, Taurus, 8.4, 5h 34m 31.9400s, 22° 0' 52.2000""#;
    const M2: &str = r#"M2, "NGC 7089", "-", Globular cluster, 33.0, Aquarius, 6.3, 21h 33m 27.0200s, -0° 49' 23.7000""#;
    const BAD_ID: &str = r#"M2a, "NGC 7089", "-", Globular cluster, 33.0, Aquarius, 6.3, 21h 33m 27.0200s, -0° 49' 23.7000""#;

    #[test]
    fn test_blank_lines_skipped() {
        let report = ingest_lines(["", M1, "   ", M2, ""], &IngestOptions::strict()).unwrap();
        assert_eq!(report.catalogue.len(), 2);
        assert!(report.is_clean());
    }

    #[test]
    fn test_strict_reports_line_number() {
        let err = ingest_lines([M1, "", BAD_ID, M2], &IngestOptions::strict()).unwrap_err();
        match err {
            CatalogueError::AtLine { line, ref source } => {
                assert_eq!(line, 3);
                assert_eq!(source.field(), Some(Field::PrimaryId));
            }
            other => panic!("Expected AtLine, got {other:?}"),
        }
    }

    #[test]
    fn test_lenient_collects_rejections() {
        let report = ingest_lines([M1, BAD_ID, "nonsense", M2], &IngestOptions::lenient()).unwrap();
        let ids: Vec<&str> = report.catalogue.iter().map(Record::primary_id).collect();
        assert_eq!(ids, ["M1", "M2"]);
        let lines: Vec<usize> = report.rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, [2, 3]);
        assert!(matches!(
            report.rejected[1].error,
            CatalogueError::MalformedLine { .. }
        ));
    }

    #[test]
    fn test_comment_prefix() {
        let options = IngestOptions::strict().with_comment_prefix("#");
        let report = ingest_lines(["# Messier objects", M1, "  # note"], &options).unwrap();
        assert_eq!(report.catalogue.len(), 1);

        assert!(ingest_lines(["# Messier objects", M1], &IngestOptions::strict()).is_err());
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let first = format!("{BYTE_ORDER_MARK}{M1}");
        let report = ingest_lines([first.as_str(), M2], &IngestOptions::strict()).unwrap();
        assert_eq!(report.catalogue.get(0).unwrap().primary_id(), "M1");
    }

    #[test]
    fn test_read_catalogue_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{M1}").unwrap();
        writeln!(file, "{M2}").unwrap();
        file.flush().unwrap();

        let report = read_catalogue(file.path(), &IngestOptions::default()).unwrap();
        assert_eq!(report.catalogue.len(), 2);
    }

    #[test]
    fn test_read_catalogue_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalogue(dir.path().join("missing.txt"), &IngestOptions::default())
            .unwrap_err();
        assert!(matches!(err, CatalogueError::Io(_)));
        assert!(!err.is_recoverable());
    }
}
