use log::{info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::BibFilterError;
use crate::latex::{parse_aux_citekeys, resolve_aux_file, BibDatabase};

/// Where filtered records are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Open the destination for writing. The handle is closed when dropped.
    pub fn open(&self) -> Result<Box<dyn Write>, BibFilterError> {
        match self {
            Self::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| BibFilterError::file_access(path, e))?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// BibTeX database to filter
    pub database: PathBuf,
    /// Aux file to read; discovered in `working_dir` when `None`
    pub aux: Option<PathBuf>,
    /// Directory searched for `*.aux` files
    pub working_dir: PathBuf,
    pub output: OutputTarget,
}

impl FilterOptions {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            aux: None,
            working_dir: PathBuf::from("."),
            output: OutputTarget::Stdout,
        }
    }
}

/// Outcome of a filtering run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub aux_file: PathBuf,
    /// Keys whose records were written, in output order
    pub written: Vec<String>,
    /// Keys with no record in the database
    pub missing: Vec<String>,
}

/// Filter the database down to the records cited by the aux file.
///
/// Missing keys are logged as warnings and listed in the report; only file
/// access problems and a failed aux discovery are errors.
pub fn filter_bibliography_internal(options: &FilterOptions) -> Result<FilterReport, BibFilterError> {
    let aux_file = resolve_aux_file(options.aux.as_deref(), &options.working_dir)?;

    info!("Reading citation keys from {:?}", aux_file);
    let citekeys = parse_aux_citekeys(&aux_file)?;
    let database = BibDatabase::from_file(&options.database)?;

    let mut writer = options.output.open()?;
    let mut report = write_entries(&database, &citekeys, &mut writer)?;
    writer.flush()?;

    report.aux_file = aux_file;
    info!(
        "Wrote {} of {} cited records ({} missing)",
        report.written.len(),
        citekeys.len(),
        report.missing.len()
    );
    Ok(report)
}

/// Write each record found for `citekeys` followed by a blank line.
pub fn write_entries<W: Write + ?Sized>(
    database: &BibDatabase,
    citekeys: &[String],
    writer: &mut W,
) -> io::Result<FilterReport> {
    let mut report = FilterReport::default();

    for citekey in citekeys {
        match database.get_entry(citekey) {
            Some(entry) => {
                write!(writer, "{}\n\n", entry)?;
                report.written.push(citekey.clone());
            }
            None => {
                warn!("citekey '{}' not found in database", citekey);
                report.missing.push(citekey.clone());
            }
        }
    }

    Ok(report)
}

