//! Automated correction for [`MUST_BE_PARTIAL`] violations.
//!
//! The corrector resolves the class declaration enclosing a reported location and inserts the
//! `partial` modifier directly in front of the `class` keyword, i.e. after any existing
//! modifiers. Attributes, trivia and every other token are left exactly as written. The
//! validator is not re-run; the caller decides what to do with the corrected text.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    model::{ClassDeclaration, Location, SymbolModel},
    validation::{
        diagnostics::Diagnostic,
        extensibility::{MUST_BE_PARTIAL, MUST_BE_PARTIAL_ID},
    },
    Error, Result,
};

/// Modifier inserted by the corrector
pub const PARTIAL_KEYWORD: &str = "partial";

/// Title hosts show for the code action
pub const FIX_TITLE: &str = "Make class partial";

/// A replacement for one class declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedDeclaration {
    /// Location of the original declaration
    pub location: Location,
    /// The complete replacement text
    pub text: String,
}

/// Adds the extensibility modifier to class declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensibilityCorrector;

impl ExtensibilityCorrector {
    /// Creates a new corrector
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns true if this corrector can fix `diagnostic`
    #[must_use]
    pub fn can_fix(&self, diagnostic: &Diagnostic) -> bool {
        diagnostic.id() == MUST_BE_PARTIAL.id
    }

    /// Corrects the class declaration enclosing `location`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEnclosingClass`] if the model resolves no class declaration at
    /// `location`, and [`Error::Contract`] if the resolved declaration's keyword offset does
    /// not point at the `class` keyword.
    pub fn correct(&self, model: &dyn SymbolModel, location: &Location) -> Result<CorrectedDeclaration> {
        let declaration = Self::resolve(model, location)?;

        let text = Self::add_modifier(&declaration)?;
        debug!(declaration = %declaration.location, "added partial modifier");

        Ok(CorrectedDeclaration {
            location: declaration.location,
            text,
        })
    }

    /// Corrects the declaration a [`MUST_BE_PARTIAL`] diagnostic was reported on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] for diagnostics of any other rule, plus the errors of
    /// [`ExtensibilityCorrector::correct`].
    pub fn correct_diagnostic(
        &self,
        model: &dyn SymbolModel,
        diagnostic: &Diagnostic,
    ) -> Result<CorrectedDeclaration> {
        if !self.can_fix(diagnostic) {
            return Err(contract_error!(
                "Diagnostic {} cannot be fixed by the {} corrector",
                diagnostic.id(),
                MUST_BE_PARTIAL_ID
            ));
        }
        self.correct(model, &diagnostic.location)
    }

    /// Applies the fixes for all fixable `diagnostics` located in `document` to `source`.
    ///
    /// Each fix only inserts the modifier in front of a `class` keyword, so declarations
    /// nested in one another are corrected together. Diagnostics of other rules or other
    /// documents are skipped, and several diagnostics on the same declaration produce a
    /// single insertion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEnclosingClass`] if a diagnostic resolves to no declaration, and
    /// [`Error::Contract`] if a resolved declaration's `class` keyword is not found in
    /// `source` at its recorded position.
    pub fn fix_all(
        &self,
        model: &dyn SymbolModel,
        document: &str,
        source: &str,
        diagnostics: &[Diagnostic],
    ) -> Result<String> {
        let mut insertions = BTreeSet::new();

        for diagnostic in diagnostics {
            if !self.can_fix(diagnostic) || &*diagnostic.location.document != document {
                trace!(id = diagnostic.id(), "skipping diagnostic in batch fix");
                continue;
            }

            let declaration = Self::resolve(model, &diagnostic.location)?;
            if declaration.is_partial() {
                continue;
            }

            let offset = declaration.location.span.start + declaration.keyword_offset;
            let at_keyword = source
                .get(offset..)
                .is_some_and(|rest| rest.starts_with("class"));
            if !at_keyword {
                return Err(contract_error!(
                    "Declaration {} has no 'class' keyword at offset {} of the document",
                    declaration.location,
                    offset
                ));
            }
            insertions.insert(offset);
        }

        let insertion = format!("{PARTIAL_KEYWORD} ");
        let mut result = source.to_string();
        // Back to front so earlier offsets stay valid
        for &offset in insertions.iter().rev() {
            result.insert_str(offset, &insertion);
        }

        debug!(document, fixes = insertions.len(), "applied batch fix");
        Ok(result)
    }

    fn resolve(model: &dyn SymbolModel, location: &Location) -> Result<ClassDeclaration> {
        model
            .enclosing_class_declaration(location)
            .ok_or_else(|| Error::NoEnclosingClass {
                location: location.clone(),
            })
    }

    /// Returns `declaration`'s text with the `partial` modifier inserted before the `class`
    /// keyword. A declaration that already is partial is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] if `keyword_offset` does not point at the `class` keyword.
    pub fn add_modifier(declaration: &ClassDeclaration) -> Result<String> {
        let offset = declaration.keyword_offset;
        let at_keyword = declaration
            .text
            .get(offset..)
            .is_some_and(|rest| rest.starts_with("class"));
        if !at_keyword {
            return Err(contract_error!(
                "Declaration at {} has no 'class' keyword at offset {}",
                declaration.location,
                offset
            ));
        }

        if declaration.is_partial() {
            return Ok(declaration.text.clone());
        }

        let mut text = String::with_capacity(declaration.text.len() + PARTIAL_KEYWORD.len() + 1);
        text.push_str(&declaration.text[..offset]);
        text.push_str(PARTIAL_KEYWORD);
        text.push(' ');
        text.push_str(&declaration.text[offset..]);
        Ok(text)
    }
}
