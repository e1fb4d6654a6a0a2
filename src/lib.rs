pub mod error;
pub mod internal;
pub mod latex;

pub use error::BibFilterError;
pub use internal::{filter_bibliography_internal, FilterOptions, FilterReport, OutputTarget};
pub use latex::{BibDatabase, CONTROL_CITEKEYS};
