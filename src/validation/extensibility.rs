//! Extensibility validation for classes marked for constructor inheritance.
//!
//! Generated constructors are emitted as a second `partial` declaration of the class, so a
//! marked class only works if the user's own declaration is `partial` as well. This module
//! checks that precondition and reports one [`Diagnostic`] per offending class.
//!
//! # States
//!
//! | State | Meaning | Diagnostic |
//! |-------|---------|------------|
//! | [`ExtensibilityState::NotMarked`] | Not marked, or a value type | no |
//! | [`ExtensibilityState::Compliant`] | Marked and declared `partial` | no |
//! | [`ExtensibilityState::MarkedButNotExtensible`] | Marked, not `partial` | yes |
//!
//! Value types are deliberately treated as not marked: constructor inheritance has different
//! semantics for them and the rule does not apply.

use tracing::debug;

use crate::{
    model::ClassModel,
    validation::diagnostics::{Diagnostic, DiagnosticDescriptor, DiagnosticSeverity},
    Result,
};

/// Identifier of the "marked class must be partial" rule
pub const MUST_BE_PARTIAL_ID: &str = "COIN1001";

/// The "marked class must be partial" rule
pub static MUST_BE_PARTIAL: DiagnosticDescriptor = DiagnosticDescriptor {
    id: MUST_BE_PARTIAL_ID,
    title: "The class marked with InheritConstructors attribute must be marked as partial",
    message_format: "Add 'partial' modifier to {0} to allow automatic parent constructors inheritance",
    category: "Other",
    severity: DiagnosticSeverity::Error,
    enabled_by_default: true,
    description: "Inherited constructors are generated into a separate partial declaration of the class, which only merges with a declaration that is partial itself.",
};

/// Outcome of checking one class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensibilityState {
    /// The rule does not apply
    NotMarked,
    /// Marked and extensible
    Compliant,
    /// Marked but not extensible; reported
    MarkedButNotExtensible,
}

/// Validates that marked reference types are declared extensible.
///
/// Stateless; one instance can be shared by all worker threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensibilityValidator;

impl ExtensibilityValidator {
    /// Creates a new validator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classifies `class`
    #[must_use]
    pub fn check(&self, class: &ClassModel) -> ExtensibilityState {
        if !class.is_reference_type || !class.is_marked {
            ExtensibilityState::NotMarked
        } else if class.is_extensible {
            ExtensibilityState::Compliant
        } else {
            ExtensibilityState::MarkedButNotExtensible
        }
    }

    /// Checks `class` and builds the diagnostic for a violation.
    ///
    /// The diagnostic is placed on the class's primary location, lists the remaining
    /// declaration locations as additional locations and carries the class's simple name as
    /// its only argument.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Contract`] if a violating class has no declaration location;
    /// the symbol model must provide at least one for every class declared in source.
    pub fn validate(&self, class: &ClassModel) -> Result<Option<Diagnostic>> {
        if self.check(class) != ExtensibilityState::MarkedButNotExtensible {
            return Ok(None);
        }

        let (primary, additional) = class.locations.split_first().ok_or_else(|| {
            contract_error!("Class '{}' ({}) has no declaration location", class.name, class.id)
        })?;

        debug!(class = %class.qualified_name(), location = %primary, "marked class is not partial");

        Ok(Some(
            Diagnostic::new(&MUST_BE_PARTIAL, primary.clone(), vec![class.name.clone()])
                .with_additional_locations(additional.to_vec()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{ClassModel, Location, SourceSpan, SymbolId},
        Error,
    };

    fn class(name: &str) -> ClassModel {
        ClassModel::new(SymbolId::new(1), "App", name)
            .with_location(Location::new("a.cs", SourceSpan::new(10, 6)))
    }

    #[test]
    fn test_states() {
        let validator = ExtensibilityValidator::new();

        assert_eq!(validator.check(&class("A")), ExtensibilityState::NotMarked);
        assert_eq!(
            validator.check(&class("A").marked().extensible()),
            ExtensibilityState::Compliant
        );
        assert_eq!(
            validator.check(&class("A").marked()),
            ExtensibilityState::MarkedButNotExtensible
        );
        assert_eq!(
            validator.check(&class("A").marked().value_type()),
            ExtensibilityState::NotMarked
        );
    }

    #[test]
    fn test_validate_reports_once_with_locations() {
        let widget = class("Widget")
            .marked()
            .with_location(Location::new("b.cs", SourceSpan::new(3, 6)))
            .with_location(Location::new("c.cs", SourceSpan::new(7, 6)));

        let diag = ExtensibilityValidator::new()
            .validate(&widget)
            .unwrap()
            .unwrap();

        assert_eq!(diag.id(), "COIN1001");
        assert_eq!(diag.arguments, vec!["Widget".to_string()]);
        assert_eq!(
            diag.message,
            "Add 'partial' modifier to Widget to allow automatic parent constructors inheritance"
        );
        assert_eq!(&*diag.location.document, "a.cs");
        assert_eq!(diag.additional_locations.len(), 2);
        assert_eq!(&*diag.additional_locations[1].document, "c.cs");
    }

    #[test]
    fn test_validate_compliant_and_unmarked() {
        let validator = ExtensibilityValidator::new();
        assert!(validator.validate(&class("A")).unwrap().is_none());
        assert!(validator
            .validate(&class("A").marked().extensible())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_validate_without_location() {
        let orphan = ClassModel::new(SymbolId::new(5), "App", "Orphan").marked();
        assert!(matches!(
            ExtensibilityValidator::new().validate(&orphan),
            Err(Error::Contract { .. })
        ));
    }
}
