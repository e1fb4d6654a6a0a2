use log::{debug, info};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::BibFilterError;
use crate::latex::BIBTEX_HEADER_REGEX;

const NON_RECORD_TYPES: &[&str] = &["string", "comment", "preamble"];

/// A BibTeX database held in memory as unparsed text.
///
/// Records are located with a pattern search on demand; nothing is parsed
/// into fields. The text is never modified after loading.
#[derive(Default)]
pub struct BibDatabase {
    content: String,
}

impl fmt::Debug for BibDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BibDatabase")
            .field("bytes", &self.content.len())
            .field("entries_count", &self.entry_count())
            .finish()
    }
}

impl BibDatabase {
    /// Load the whole database file into memory.
    pub fn from_file(path: &Path) -> Result<Self, BibFilterError> {
        let content = fs::read_to_string(path).map_err(|e| BibFilterError::file_access(path, e))?;
        let database = Self::from_string(content);
        info!("Loaded {:?} ({} records)", path, database.entry_count());
        Ok(database)
    }

    pub fn from_string(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of `@type{` records in the text, not counting `@string`,
    /// `@comment` and `@preamble` blocks. Informational only.
    pub fn entry_count(&self) -> usize {
        BIBTEX_HEADER_REGEX
            .captures_iter(&self.content)
            .filter(|cap| !NON_RECORD_TYPES.contains(&cap[1].to_ascii_lowercase().as_str()))
            .count()
    }

    /// Return the record whose identifier is exactly `citekey`, trimmed.
    ///
    /// The record must open with `@type{citekey,` at the end of a line and
    /// ends at the first line holding only `}`, which may directly follow the
    /// header. Braces nested inside field values are not tracked.
    pub fn get_entry(&self, citekey: &str) -> Option<&str> {
        let pattern = match Self::entry_pattern(citekey) {
            Ok(re) => re,
            Err(e) => {
                debug!("Could not build search pattern for '{}': {}", citekey, e);
                return None;
            }
        };
        pattern.find(&self.content).map(|m| m.as_str().trim())
    }

    fn entry_pattern(citekey: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!(
            r"(?s)@\w+\{{{},\r?\n(?:.*?\r?\n)??\}}(?:\r?\n|\z)",
            regex::escape(citekey)
        ))
    }
}
