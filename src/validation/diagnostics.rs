//! Diagnostics reported to the end user.
//!
//! A diagnostic is the only kind of failure this crate surfaces to the person writing the
//! code: everything else is either an expected empty result or a host integration fault
//! returned as [`crate::Error`]. Each diagnostic is an instance of a static
//! [`DiagnosticDescriptor`] that fixes its id, severity and message format.
//!
//! # Key Components
//!
//! - [`DiagnosticDescriptor`] - Static rule metadata (id, title, message format)
//! - [`Diagnostic`] - One reported occurrence with locations and message arguments
//! - [`Diagnostics`] - Thread-safe container for diagnostics collected by parallel workers
//!
//! # Thread Safety
//!
//! [`Diagnostics`] uses `boxcar::Vec` internally, which provides lock-free concurrent append
//! operations. Workers analysing different classes push into the same container without
//! coordination; [`Diagnostics::sorted`] restores a stable order afterwards.

use std::fmt::{self, Write};

use crate::model::Location;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Informational message, not indicating a problem.
    Info,

    /// Something that probably does not do what the author intended.
    Warning,

    /// The code cannot work as written; the host should fail the build.
    Error,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Info => write!(f, "INFO"),
            DiagnosticSeverity::Warning => write!(f, "WARN"),
            DiagnosticSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// Static metadata of a diagnostic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    /// Stable identifier, e.g. `COIN1001`
    pub id: &'static str,
    /// Short title
    pub title: &'static str,
    /// Message with positional placeholders `{0}`, `{1}`, ...
    pub message_format: &'static str,
    /// Rule category
    pub category: &'static str,
    /// Default severity
    pub severity: DiagnosticSeverity,
    /// Whether hosts report the rule without explicit opt-in
    pub enabled_by_default: bool,
    /// Longer description
    pub description: &'static str,
}

impl DiagnosticDescriptor {
    /// Substitutes `{index}` placeholders in the message format with `arguments`.
    ///
    /// Placeholders without a matching argument are left untouched.
    #[must_use]
    pub fn format_message(&self, arguments: &[String]) -> String {
        arguments
            .iter()
            .enumerate()
            .fold(self.message_format.to_string(), |message, (index, arg)| {
                message.replace(&format!("{{{index}}}"), arg)
            })
    }
}

/// One reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule this diagnostic instantiates.
    pub descriptor: &'static DiagnosticDescriptor,

    /// Formatted, human-readable message.
    pub message: String,

    /// Primary location, where the host places the squiggle and where fixes apply.
    pub location: Location,

    /// Further locations of the same symbol (other partial declarations).
    pub additional_locations: Vec<Location>,

    /// Message arguments, in placeholder order.
    pub arguments: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic for `descriptor` at `location`, formatting the message from
    /// `arguments`.
    pub fn new(
        descriptor: &'static DiagnosticDescriptor,
        location: Location,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            descriptor,
            message: descriptor.format_message(&arguments),
            location,
            additional_locations: Vec::new(),
            arguments,
        }
    }

    /// Adds further locations of the reported symbol.
    #[must_use]
    pub fn with_additional_locations(mut self, locations: Vec<Location>) -> Self {
        self.additional_locations = locations;
        self
    }

    /// Rule identifier
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }

    /// Severity of the rule
    #[must_use]
    pub fn severity(&self) -> DiagnosticSeverity {
        self.descriptor.severity
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {}",
            self.severity(),
            self.id(),
            self.location,
            self.message
        )?;

        if !self.additional_locations.is_empty() {
            write!(f, " (+{} more location(s))", self.additional_locations.len())?;
        }

        Ok(())
    }
}

/// Thread-safe container for collecting diagnostics.
#[derive(Debug)]
pub struct Diagnostics {
    entries: boxcar::Vec<Diagnostic>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// Creates a new empty diagnostics container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: boxcar::Vec::new(),
        }
    }

    /// Adds a diagnostic.
    pub fn push(&self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Returns true if any diagnostics have been collected.
    pub fn has_any(&self) -> bool {
        self.entries.count() > 0
    }

    /// Returns true if any error-level diagnostics have been collected.
    pub fn has_errors(&self) -> bool {
        self.iter()
            .any(|d| d.severity() == DiagnosticSeverity::Error)
    }

    /// Returns the total number of diagnostics.
    pub fn count(&self) -> usize {
        self.entries.count()
    }

    /// Returns the number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.iter()
            .filter(|d| d.severity() == DiagnosticSeverity::Error)
            .count()
    }

    /// Returns an iterator over all diagnostics in insertion order.
    ///
    /// Insertion order is not deterministic when diagnostics were pushed from several
    /// threads; use [`Diagnostics::sorted`] for stable output.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|(_, d)| d)
    }

    /// Returns diagnostics with the given rule id.
    pub fn by_id(&self, id: &str) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.id() == id).collect()
    }

    /// Returns all diagnostics ordered by document, then position, then id.
    pub fn sorted(&self) -> Vec<&Diagnostic> {
        let mut all: Vec<&Diagnostic> = self.iter().collect();
        all.sort_by(|a, b| {
            (&a.location.document, a.location.span.start, a.id()).cmp(&(
                &b.location.document,
                b.location.span.start,
                b.id(),
            ))
        });
        all
    }

    /// Formats a summary of all diagnostics for display.
    pub fn summary(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "Diagnostics: {} total, {} error(s)",
            self.count(),
            self.error_count()
        );
        for diag in self.sorted() {
            let _ = writeln!(output, "  {diag}");
        }

        output
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceSpan;
    use std::{sync::Arc, thread};

    static TEST_RULE: DiagnosticDescriptor = DiagnosticDescriptor {
        id: "TEST0001",
        title: "Test rule",
        message_format: "'{0}' conflicts with '{1}'",
        category: "Test",
        severity: DiagnosticSeverity::Warning,
        enabled_by_default: true,
        description: "Rule used by unit tests",
    };

    fn at(document: &str, start: usize) -> Location {
        Location::new(document, SourceSpan::new(start, 1))
    }

    #[test]
    fn test_format_message() {
        assert_eq!(
            TEST_RULE.format_message(&["A".to_string(), "B".to_string()]),
            "'A' conflicts with 'B'"
        );
        assert_eq!(
            TEST_RULE.format_message(&["A".to_string()]),
            "'A' conflicts with '{1}'"
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(&TEST_RULE, at("a.cs", 4), vec!["A".into(), "B".into()])
            .with_additional_locations(vec![at("b.cs", 0)]);

        assert_eq!(diag.id(), "TEST0001");
        assert_eq!(diag.severity(), DiagnosticSeverity::Warning);
        assert_eq!(
            diag.to_string(),
            "[WARN] TEST0001 a.cs@4..5: 'A' conflicts with 'B' (+1 more location(s))"
        );
    }

    #[test]
    fn test_concurrent_push_and_sorted() {
        let diagnostics = Arc::new(Diagnostics::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let diagnostics = Arc::clone(&diagnostics);
                thread::spawn(move || {
                    diagnostics.push(Diagnostic::new(&TEST_RULE, at("a.cs", 40 - i * 10), vec![]));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(diagnostics.count(), 4);
        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.by_id("TEST0001").len(), 4);

        let starts: Vec<_> = diagnostics
            .sorted()
            .iter()
            .map(|d| d.location.span.start)
            .collect();
        assert_eq!(starts, vec![10, 20, 30, 40]);
    }
}
