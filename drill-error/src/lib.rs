//! Contains the common [`ErrorKind`] trait implemented by every user-facing error in the drill,
//! and the [`Error`] type that ties an error kind to the regions of the typed answer it came
//! from.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

// lets `#[derive(ErrorKind)]` resolve `drill_error::*` paths in this crate's own tests
#[cfg(test)]
extern crate self as drill_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading a typed answer.
pub trait ErrorKind: Debug + Send {
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

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error, rendered against `src`, into the given writer.
    ///
    /// The `ariadne` crate's [`Report`] type does not implement `Display`, so the report is
    /// always written to a sink.
    pub fn write_report<W: io::Write>(&self, src_id: &str, src: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(src)), w)
    }

    /// Renders the report for this error into a [`String`], including any color codes.
    pub fn report_to_string(&self, src_id: &str, src: &str) -> String {
        let mut buf = Vec::new();
        if self.write_report(src_id, src, &mut buf).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_attrs::ErrorKind;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "unknown symbol",
        labels = [format!("`{}` is not one of the allowed variables", name)],
        help = "use only `x`, `y`, `a`, or `b`",
    )]
    struct UnknownSymbol {
        name: String,
    }

    #[test]
    fn derived_report() {
        let err = Error::new(vec![2..3], UnknownSymbol { name: "z".to_string() });
        let report = err.report_to_string("answer", "2+z");
        let plain = String::from_utf8(strip_ansi_escapes::strip(report.as_bytes())).unwrap();

        assert!(plain.contains("unknown symbol"));
        assert!(plain.contains("`z` is not one of the allowed variables"));
        assert!(plain.contains("use only `x`, `y`, `a`, or `b`"));
    }

    #[test]
    fn missing_spans_do_not_panic() {
        let err = Error::new(Vec::new(), UnknownSymbol { name: "q".to_string() });
        let report = err.report_to_string("answer", "q");
        let plain = String::from_utf8(strip_ansi_escapes::strip(report.as_bytes())).unwrap();
        assert!(plain.contains("unknown symbol"));
    }
}
