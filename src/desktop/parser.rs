//! Line-by-line desktop file parser.
//!
//! Each line is split into key, optional locale and value, then stored on
//! the matching [`DesktopEntry`] field. Lines that cannot be used are
//! reported as [`Diagnostic`]s and skipped; they never abort the pass.

use crate::config::{GroupMode, ParserConfig};
use crate::desktop::entry::DesktopEntry;
use crate::desktop::keys::Key;
use crate::desktop::localized::split_localized_line;
use crate::error::EntryError;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// The group holding the keys this parser reads.
const ENTRY_GROUP: &str = "Desktop Entry";

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line has no `=`.
    MissingSeparator,
    /// The key is not one the parser stores.
    UnknownKey { key: String, value: String },
    /// The line sits in a group other than `[Desktop Entry]`.
    OutsideEntryGroup { group: String },
}

/// A skipped line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line_number: usize,
    pub line: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::MissingSeparator => {
                write!(f, "line {}: missing '=' in {:?}", self.line_number, self.line)
            }
            DiagnosticKind::UnknownKey { key, value } => {
                write!(f, "line {}: invalid: {} {}", self.line_number, key, value)
            }
            DiagnosticKind::OutsideEntryGroup { group } => write!(
                f,
                "line {}: ignored key in [{}]: {:?}",
                self.line_number, group, self.line
            ),
        }
    }
}

/// The result of a parse pass: the entry plus every skipped line.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub entry: DesktopEntry,
    pub diagnostics: Vec<Diagnostic>,
}

/// Group state while scanning a file in [`GroupMode::Tracked`].
enum Group {
    Entry,
    Other(String),
}

/// Parses desktop files into [`DesktopEntry`] records.
#[derive(Debug, Clone)]
pub struct EntryParser {
    group_mode: GroupMode,
    skip_comments: bool,
}

impl Default for EntryParser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl EntryParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            group_mode: config.group_mode,
            skip_comments: config.skip_comments,
        }
    }

    /// Validate `path`, read it and parse every line.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseOutcome, EntryError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(EntryError::NotFound(path.to_path_buf()));
        }

        if !path.to_string_lossy().ends_with(".desktop") {
            return Err(EntryError::InvalidFormat(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| EntryError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(?path, "Parsing desktop file");
        let mut entry = DesktopEntry::with_source(path);
        let diagnostics = self.parse_into(&mut entry, &content);

        Ok(ParseOutcome { entry, diagnostics })
    }

    /// Parse desktop file content held in memory.
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        let mut entry = DesktopEntry::default();
        let diagnostics = self.parse_into(&mut entry, content);
        ParseOutcome { entry, diagnostics }
    }

    fn parse_into(&self, entry: &mut DesktopEntry, content: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut group = Group::Entry;

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if self.skip_comments && (trimmed.is_empty() || trimmed.starts_with('#')) {
                continue;
            }

            match self.group_mode {
                GroupMode::Legacy => {
                    if line.contains("[Desktop Entry]") {
                        continue;
                    }
                }
                GroupMode::Tracked => {
                    if let Some(name) = group_header(trimmed) {
                        group = if name == ENTRY_GROUP {
                            Group::Entry
                        } else {
                            Group::Other(name.to_string())
                        };
                        continue;
                    }

                    if let Group::Other(name) = &group {
                        let diagnostic = Diagnostic {
                            line_number: index + 1,
                            line: line.to_string(),
                            kind: DiagnosticKind::OutsideEntryGroup {
                                group: name.clone(),
                            },
                        };
                        debug!("{}", diagnostic);
                        diagnostics.push(diagnostic);
                        continue;
                    }
                }
            }

            if let Some(kind) = apply_line(entry, line) {
                let diagnostic = Diagnostic {
                    line_number: index + 1,
                    line: line.to_string(),
                    kind,
                };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }

        debug!(diagnostics = diagnostics.len(), "Finished parsing desktop entry");
        diagnostics
    }
}

/// Return the group name if `line` is a `[Group]` header.
fn group_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// Classify one `Key[locale]=Value` line and store it on `entry`.
///
/// Returns the reason when the line could not be stored.
fn apply_line(entry: &mut DesktopEntry, line: &str) -> Option<DiagnosticKind> {
    let Some((key, _locale, value)) = split_localized_line(line) else {
        return Some(DiagnosticKind::MissingSeparator);
    };

    match Key::lookup(key) {
        Some(key) => {
            entry.apply_line(key, line, value);
            None
        }
        None => Some(DiagnosticKind::UnknownKey {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
