use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::debug;

use crate::errors::{EscapeError, ParseError};

// @module: Catalog parsing and escaped-string decoding

// @const: Keyword opening the source string of an entry
const MSGID_KEYWORD: &str = "msgid ";

// @const: Keyword opening the translation string of an entry
const MSGSTR_KEYWORD: &str = "msgstr ";

// @struct: Single translation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    // @field: Decoded source text (msgid)
    pub source_text: String,

    // @field: Decoded translation text (msgstr), empty when untranslated
    pub translated_text: String,

    // @field: 1-based line where the msgid declaration begins
    pub first_line: usize,
}

impl CatalogEntry {
    /// Creates a new catalog entry
    pub fn new(source_text: String, translated_text: String, first_line: usize) -> Self {
        CatalogEntry {
            source_text,
            translated_text,
            first_line,
        }
    }

    /// Whether the entry carries a non-empty translation
    pub fn is_translated(&self) -> bool {
        !self.translated_text.is_empty()
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "msgid {}", encode(&self.source_text))?;
        writeln!(f, "msgstr {}", encode(&self.translated_text))
    }
}

/// Decode one physical line of quoted, escaped string segments.
///
/// Adjacent quoted segments concatenate (`"foo""bar"` decodes to `foobar`),
/// which is how the catalog format continues strings across segments. The
/// scan keeps two flags, "inside quotes" and "escaping"; quotes toggle the
/// first and are never emitted, a backslash inside quotes starts an escape,
/// and the escape map is `t`, `n`, `\`, `"`. Anything else is an input error.
pub fn decode_line(line: &str) -> Result<String, EscapeError> {
    let mut decoded = String::with_capacity(line.len());
    let mut in_quotes = false;
    let mut escaping = false;

    for ch in line.chars() {
        if escaping {
            escaping = false;
            match ch {
                't' => decoded.push('\t'),
                'n' => decoded.push('\n'),
                '\\' => decoded.push('\\'),
                '"' => decoded.push('"'),
                other => return Err(EscapeError::UnknownEscape(other)),
            }
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }

        if !in_quotes {
            return Err(EscapeError::OutsideQuotes(ch));
        }

        if ch == '\\' {
            escaping = true;
            continue;
        }

        decoded.push(ch);
    }

    if escaping {
        return Err(EscapeError::UnfinishedEscape);
    }
    if in_quotes {
        return Err(EscapeError::Unterminated);
    }

    Ok(decoded)
}

/// Encode text as a single double-quoted catalog string literal.
///
/// Inverse of [`decode_line`] for text made of mappable characters:
/// `decode_line(&encode(s))` returns `s` exactly.
pub fn encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() + 2);
    encoded.push('"');
    for ch in text.chars() {
        match ch {
            '\t' => encoded.push_str("\\t"),
            '\n' => encoded.push_str("\\n"),
            '\\' => encoded.push_str("\\\\"),
            '"' => encoded.push_str("\\\""),
            other => encoded.push(other),
        }
    }
    encoded.push('"');
    encoded
}

/// Parser position within the entry grammar.
///
/// Each state carries only the data valid in it, so there is no pair of
/// accumulators whose presence could drift apart.
enum ParserState {
    /// No entry opened yet (only legal before the first msgid)
    AwaitingEntry,
    /// msgid seen, accumulating source continuation lines
    AccumulatingSource { first_line: usize, source: String },
    /// msgstr seen, accumulating translation continuation lines
    AccumulatingTranslation {
        first_line: usize,
        source: String,
        translation: String,
    },
}

/// A parsed catalog file
#[derive(Debug)]
pub struct Catalog {
    /// Source filename
    pub source_file: PathBuf,

    /// Entries in declaration order
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Read and parse a catalog file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let entries = Self::parse_str(&content)
            .with_context(|| format!("Malformed catalog: {}", path.display()))?;

        Ok(Catalog {
            source_file: path.to_path_buf(),
            entries,
        })
    }

    /// Parse full catalog text into an ordered entry sequence.
    ///
    /// Lines are split on `'\n'`; empty lines and `#` comments are skipped.
    /// A grammar violation aborts the whole parse with the offending line
    /// number. An input with no entries is an error, never an empty result.
    pub fn parse_str(content: &str) -> Result<Vec<CatalogEntry>, ParseError> {
        let mut entries = Vec::new();
        let mut state = ParserState::AwaitingEntry;
        let mut last_line = 0;

        for (index, raw_line) in content.split('\n').enumerate() {
            let line_number = index + 1;
            last_line = line_number;

            // Comment or empty line; whitespace-only lines are content
            if raw_line.is_empty() || raw_line.starts_with('#') {
                continue;
            }

            // Before the first entry, only a msgid declaration may appear
            if matches!(state, ParserState::AwaitingEntry)
                && !raw_line.starts_with(MSGID_KEYWORD)
            {
                return Err(ParseError::ExpectedMsgid { line: line_number });
            }

            let line = if let Some(rest) = raw_line.strip_prefix(MSGID_KEYWORD) {
                state = match state {
                    ParserState::AwaitingEntry => ParserState::AccumulatingSource {
                        first_line: line_number,
                        source: String::new(),
                    },
                    ParserState::AccumulatingTranslation {
                        first_line,
                        source,
                        translation,
                    } => {
                        entries.push(CatalogEntry::new(source, translation, first_line));
                        ParserState::AccumulatingSource {
                            first_line: line_number,
                            source: String::new(),
                        }
                    }
                    ParserState::AccumulatingSource { first_line, .. } => {
                        return Err(ParseError::PreviousEntryIncomplete {
                            line: line_number,
                            started_at: first_line,
                        });
                    }
                };

                if !rest.starts_with('"') {
                    return Err(ParseError::MsgidWithoutString { line: line_number });
                }
                rest
            } else if let Some(rest) = raw_line.strip_prefix(MSGSTR_KEYWORD) {
                state = match state {
                    ParserState::AccumulatingSource { first_line, source } => {
                        ParserState::AccumulatingTranslation {
                            first_line,
                            source,
                            translation: String::new(),
                        }
                    }
                    ParserState::AccumulatingTranslation { first_line, .. } => {
                        return Err(ParseError::DuplicateMsgstr {
                            line: line_number,
                            started_at: first_line,
                        });
                    }
                    ParserState::AwaitingEntry => {
                        return Err(ParseError::ExpectedMsgid { line: line_number });
                    }
                };
                rest
            } else {
                raw_line
            };

            let decoded = decode_line(line).map_err(|source| ParseError::Escape {
                line: line_number,
                source,
            })?;

            match &mut state {
                ParserState::AwaitingEntry => {
                    // Bare continuation line before any msgid
                    return Err(ParseError::ExpectedMsgid { line: line_number });
                }
                ParserState::AccumulatingSource { source, .. } => source.push_str(&decoded),
                ParserState::AccumulatingTranslation { translation, .. } => {
                    translation.push_str(&decoded)
                }
            }
        }

        match state {
            ParserState::AccumulatingTranslation {
                first_line,
                source,
                translation,
            } => {
                entries.push(CatalogEntry::new(source, translation, first_line));
            }
            ParserState::AccumulatingSource { first_line, .. } => {
                return Err(ParseError::UnexpectedEof {
                    line: last_line,
                    started_at: first_line,
                });
            }
            ParserState::AwaitingEntry => {
                return Err(ParseError::EmptyCatalog);
            }
        }

        debug!("Parsed {} catalog entries", entries.len());

        Ok(entries)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Catalog")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
