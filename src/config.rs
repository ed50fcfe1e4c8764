//! Generator configuration
//!
//! This module provides the options a host passes to
//! [`crate::inherit::InheritedConstructorGenerator`]. None of them changes which constructors
//! are inherited; they control naming of the marker, which artifacts a run produces, and how
//! the work is scheduled.

/// Configuration for a constructor inheritance run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritorConfig {
    /// Namespace the marker attribute is declared in
    pub marker_namespace: String,

    /// Simple name of the marker attribute class
    pub marker_name: String,

    /// Emit the marker attribute declaration as a fragment of every run
    pub emit_marker_source: bool,

    /// Run the extensibility validator and report its diagnostics
    pub report_diagnostics: bool,

    /// Analyse classes in parallel
    /// Classes never share state, so this only affects scheduling, not output order
    pub parallel: bool,

    /// Spaces per indentation level in generated code (default: 4)
    pub indent: usize,
}

impl Default for InheritorConfig {
    fn default() -> Self {
        Self {
            marker_namespace: "Constructor.Inheritor".to_string(),
            marker_name: "InheritConstructorsAttribute".to_string(),
            emit_marker_source: true,
            report_diagnostics: true,
            parallel: true,
            indent: 4,
        }
    }
}

impl InheritorConfig {
    /// Creates a configuration that only emits constructor fragments
    ///
    /// No marker declaration, no diagnostics. Useful when the host declares the marker itself
    /// and runs the validator as a separate analyzer.
    #[must_use]
    pub fn generation_only() -> Self {
        Self {
            emit_marker_source: false,
            report_diagnostics: false,
            ..Self::default()
        }
    }

    /// Creates the default configuration with parallel analysis disabled
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Fully qualified marker name, e.g. `Constructor.Inheritor.InheritConstructorsAttribute`
    ///
    /// Adapters compare attribute classes against this name to set
    /// [`crate::model::ClassModel::is_marked`].
    #[must_use]
    pub fn qualified_marker_name(&self) -> String {
        if self.marker_namespace.is_empty() {
            self.marker_name.clone()
        } else {
            format!("{}.{}", self.marker_namespace, self.marker_name)
        }
    }

    /// Name the marker is applied with in source, without the `Attribute` suffix
    #[must_use]
    pub fn marker_usage_name(&self) -> &str {
        self.marker_name
            .strip_suffix("Attribute")
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.marker_name)
    }
}
