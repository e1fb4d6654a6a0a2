use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::BibFilterError;
use crate::latex::AUX_CITATION_REGEX;

/// Control entries emitted by REVTeX and AIP styles. They look like citations
/// in the aux file but have no record in any user database.
pub const CONTROL_CITEKEYS: &[&str] = &["REVTEX41Control", "aip41Control"];

/// Read the LaTeX aux file at `path` and return the distinct citation keys it
/// references, in first-seen order.
pub fn parse_aux_citekeys(path: &Path) -> Result<Vec<String>, BibFilterError> {
    let file = File::open(path).map_err(|e| BibFilterError::file_access(path, e))?;
    extract_citekeys(BufReader::new(file)).map_err(|e| BibFilterError::file_access(path, e))
}

/// Collect citation keys from `\citation{...}` and `\abx@aux@cite{...}` lines.
///
/// Lines that match neither marker are skipped. Keys listed in
/// [`CONTROL_CITEKEYS`] are never returned.
pub fn extract_citekeys<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut citekeys = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let Some(cap) = AUX_CITATION_REGEX.captures(&line) else {
            continue;
        };
        // Exactly one of the two alternatives participates in a match
        let Some(list) = cap.get(1).or_else(|| cap.get(2)) else {
            continue;
        };

        for key in list.as_str().split(',').map(str::trim) {
            if key.is_empty() || CONTROL_CITEKEYS.contains(&key) {
                continue;
            }
            if seen.insert(key.to_string()) {
                citekeys.push(key.to_string());
            }
        }
    }

    debug!("Found {} distinct citation keys", citekeys.len());
    Ok(citekeys)
}
