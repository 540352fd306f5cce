use dx_error::Error as ComputeError;
use std::{io, path::PathBuf};

/// Utility enum to package errors that can occur while differentiating an expression and writing
/// the results.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed, differentiated, or simplified.
    Compute(ComputeError),

    /// A file could not be read or written.
    Io(PathBuf, io::Error),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        match self {
            Self::Compute(err) => {
                if let Err(io_err) = err.report_to_stderr(src_id, input) {
                    eprintln!("error: could not write report: {}", io_err);
                }
            },
            Self::Io(path, err) => eprintln!("error: {}: {}", path.display(), err),
        }
    }
}

impl From<ComputeError> for Error {
    fn from(err: ComputeError) -> Self {
        Self::Compute(err)
    }
}

/// Extension trait to attach the offending path to an [`io::Error`].
pub trait WithPath<T> {
    /// Converts the error into an [`Error::Io`] for the given path.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T, Error>;
}

impl<T> WithPath<T> for io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T, Error> {
        self.map_err(|err| Error::Io(path.into(), err))
    }
}
