use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while filtering a bibliography against an aux file.
///
/// Citation keys missing from the database are not errors; they are
/// reported as warnings and processing continues.
#[derive(Error, Debug)]
pub enum BibFilterError {
    #[error("no aux files available in {dir:?}")]
    NoAuxFile { dir: PathBuf },

    #[error("failed to access {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write filtered records: {0}")]
    Output(#[from] io::Error),
}

impl BibFilterError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
