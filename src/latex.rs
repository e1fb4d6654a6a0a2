pub mod bibliography;
pub mod citations;
pub mod parser;

use once_cell::sync::Lazy;
use regex::Regex;

pub use bibliography::BibDatabase;
pub use citations::{extract_citekeys, parse_aux_citekeys, CONTROL_CITEKEYS};
pub use parser::{find_aux_files, resolve_aux_file};

// Citation markers written by BibTeX (\citation) and biblatex (\abx@aux@cite)
static AUX_CITATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\\citation\{(.+)\}|\\abx@aux@cite\{(.+)\})").expect("Invalid aux citation regex pattern")
});
static BIBTEX_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*@(\w+)\s*\{").expect("Invalid BibTeX header regex pattern")
});
