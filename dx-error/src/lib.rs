//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

// the derive macro refers to `dx_error::EXPR`
#[cfg(test)]
extern crate self as dx_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as [`Any`], so that the concrete kind can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Writes the report of this error into a [`String`].
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use dx_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "something went wrong",
        labels = ["right here".to_string(), format!("and {} here", second)],
        help = "try something else",
    )]
    struct Sample {
        second: &'static str,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "other")]
    struct Other;

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1, 2..3], Sample { second: "also" });
        assert!(err.is::<Sample>());
        assert!(!err.is::<Other>());
        assert_eq!(err.downcast_ref::<Sample>().map(|s| s.second), Some("also"));
    }

    #[test]
    fn report_contains_message_and_labels() {
        let err = Error::new(vec![0..1, 4..5], Sample { second: "also" });
        let report = err.report_to_string("input", "x + y").unwrap();
        let report = strip_ansi_escapes::strip_str(report);
        assert!(report.contains("something went wrong"));
        assert!(report.contains("right here"));
        assert!(report.contains("and also here"));
        assert!(report.contains("try something else"));
    }
}
