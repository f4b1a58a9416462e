use std::fmt;

/// Result type for jurnal-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while exporting or printing
#[derive(Debug)]
pub enum Error {
    /// Export or print was invoked with no rows
    EmptyExport,

    /// Writing the artifact failed
    Io(std::io::Error),

    /// Spreadsheet encoding failed
    Csv(csv::Error),

    /// Word document packaging failed
    Zip(zip::result::ZipError),

    /// Print backend reported a failure
    Print(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyExport => write!(f, "Nothing to export: no rows match"),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Zip(err) => write!(f, "Document packaging error: {}", err),
            Error::Print(msg) => write!(f, "Print failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Zip(err) => Some(err),
            Error::EmptyExport | Error::Print(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err)
    }
}
