//! Extensibility validation and its automated correction.
//!
//! A class that opts into constructor inheritance must be declared `partial`, otherwise the
//! generated fragment cannot merge with it. This module checks that rule, describes
//! violations as [`Diagnostic`]s and corrects them by adding the modifier.
//!
//! Both halves are pure functions over the symbol model: the validator returns a diagnostic
//! value instead of reporting through a callback, and the corrector returns replacement text
//! instead of mutating a document.

mod diagnostics;
mod extensibility;
mod fix;

pub use diagnostics::{Diagnostic, DiagnosticDescriptor, DiagnosticSeverity, Diagnostics};
pub use extensibility::{
    ExtensibilityState, ExtensibilityValidator, MUST_BE_PARTIAL, MUST_BE_PARTIAL_ID,
};
pub use fix::{CorrectedDeclaration, ExtensibilityCorrector, FIX_TITLE, PARTIAL_KEYWORD};
