//! Diagnostics side-channel for the prune pass
//!
//! Pruning reports entry counts and ambiguous canonical spellings through a
//! [`Reporter`] handed in by the caller. Reports never influence the result.

use std::fmt;
use std::io::Write;

/// A single diagnostic emitted while pruning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Number of entries handed to the pass
    EntriesIn(usize),
    /// Number of entries that survived the pass
    EntriesOut(usize),
    /// Two rank-0 orthographies share the same value
    Ambiguous { value: String, rank: u32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EntriesIn(n) => write!(f, "{} entries in", n),
            Diagnostic::EntriesOut(n) => write!(f, "{} entries out", n),
            Diagnostic::Ambiguous { value, rank } => {
                write!(f, "warning: ambiguous orthography `{}`, rank {}", value, rank)
            }
        }
    }
}

/// Receiver for prune diagnostics
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Ambiguous { value, rank } => {
                tracing::warn!(value = %value, rank, "{}", diagnostic)
            }
            _ => tracing::info!("{}", diagnostic),
        }
    }
}

/// Writes one plain-text line per diagnostic to a sink such as stderr.
///
/// Write failures are dropped: diagnostics must not abort the pass.
#[derive(Debug)]
pub struct StreamReporter<W: Write> {
    sink: W,
}

impl<W: Write> StreamReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl StreamReporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> Reporter for StreamReporter<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        let _ = writeln!(self.sink, "{}", diagnostic);
    }
}

/// Keeps every diagnostic in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ambiguity warnings only
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::Ambiguous { .. }))
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_lines() {
        assert_eq!(Diagnostic::EntriesIn(3).to_string(), "3 entries in");
        assert_eq!(Diagnostic::EntriesOut(0).to_string(), "0 entries out");
        assert_eq!(
            Diagnostic::Ambiguous {
                value: "colour".to_string(),
                rank: 0
            }
            .to_string(),
            "warning: ambiguous orthography `colour`, rank 0"
        );
    }

    #[test]
    fn test_stream_reporter_writes_lines() {
        let mut reporter = StreamReporter::new(Vec::new());
        reporter.report(Diagnostic::EntriesIn(2));
        reporter.report(Diagnostic::EntriesOut(1));
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "2 entries in\n1 entries out\n");
    }

    #[test]
    fn test_recording_reporter_filters_warnings() {
        let mut reporter = RecordingReporter::new();
        reporter.report(Diagnostic::EntriesIn(2));
        reporter.report(Diagnostic::Ambiguous {
            value: "a".to_string(),
            rank: 0,
        });
        assert_eq!(reporter.diagnostics.len(), 2);
        assert_eq!(reporter.warnings().count(), 1);
    }
}
