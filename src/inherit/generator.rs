//! Per-class and per-compilation driver.
//!
//! [`InheritedConstructorGenerator`] wires the pipeline together for each candidate class:
//!
//! 1. Gate: only marked reference types that are declared extensible are synthesized for
//! 2. [`SignatureSet`](crate::inherit::SignatureSet) of the class's own constructors
//! 3. [`select_inheritable`](crate::inherit::select_inheritable) over the base constructors
//! 4. [`ConstructorSynthesizer`] renders the fragment, or reports that there is none
//!
//! Independently, the [`ExtensibilityValidator`] runs over the same class when diagnostics
//! are enabled. Classes never share state, so a full run analyses them in parallel with
//! `rayon`; the output still follows the model's class order.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    config::InheritorConfig,
    inherit::{
        inheritable_constructors, marker::marker_source, ConstructorSynthesizer, GeneratedSource,
    },
    model::{ClassModel, SymbolId, SymbolModel},
    utils::CancellationToken,
    validation::{Diagnostics, ExtensibilityValidator},
    Error, Result,
};

/// Everything a run produced
#[derive(Debug, Default)]
pub struct GeneratorOutput {
    /// Fragments to emit, marker declaration first, then classes in model order
    pub sources: Vec<GeneratedSource>,
    /// Diagnostics reported by the validator
    pub diagnostics: Diagnostics,
}

impl GeneratorOutput {
    /// Looks up a fragment by its hint name
    #[must_use]
    pub fn source(&self, hint_name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|source| source.hint_name == hint_name)
    }
}

/// Generates inherited constructors for every eligible class of a symbol model.
pub struct InheritedConstructorGenerator {
    config: InheritorConfig,
    synthesizer: ConstructorSynthesizer,
    validator: ExtensibilityValidator,
}

impl InheritedConstructorGenerator {
    /// Creates a generator with the given configuration
    #[must_use]
    pub fn new(config: InheritorConfig) -> Self {
        InheritedConstructorGenerator {
            synthesizer: ConstructorSynthesizer::new(config.indent),
            validator: ExtensibilityValidator::new(),
            config,
        }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &InheritorConfig {
        &self.config
    }

    /// Returns true if constructors are synthesized for `class`
    #[must_use]
    pub fn is_eligible(class: &ClassModel) -> bool {
        class.is_reference_type && class.is_marked && class.is_extensible
    }

    /// Synthesizes the constructors fragment for a single class.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the class is not eligible or has nothing to inherit.
    ///
    /// # Errors
    ///
    /// Returns the synthesizer's errors for malformed constructor data.
    pub fn generate_for_class(&self, class: &ClassModel) -> Result<Option<GeneratedSource>> {
        if !Self::is_eligible(class) {
            trace!(class = %class.qualified_name(), "not eligible for constructor inheritance");
            return Ok(None);
        }

        let inherited = inheritable_constructors(class);
        if inherited.is_empty() {
            trace!(class = %class.qualified_name(), "no inheritable constructors");
            return Ok(None);
        }

        let source = self.synthesizer.synthesize(class, &inherited)?;
        if let Some(source) = &source {
            debug!(
                class = %class.qualified_name(),
                constructors = inherited.len(),
                hint_name = %source.hint_name,
                "synthesized forwarding constructors"
            );
        }
        Ok(source)
    }

    /// Looks up `id` in `model` and synthesizes its fragment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClassNotFound`] if the model does not know `id`.
    pub fn generate_by_id(
        &self,
        model: &dyn SymbolModel,
        id: SymbolId,
    ) -> Result<Option<GeneratedSource>> {
        let class = model.class(id).ok_or(Error::ClassNotFound(id))?;
        self.generate_for_class(&class)
    }

    /// Runs the generator (and, if configured, the validator) over every class of `model`.
    ///
    /// `cancel` is checked before each class; a class whose analysis has started always
    /// completes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if cancellation was requested, or the first error any
    /// class analysis produced.
    pub fn run(&self, model: &dyn SymbolModel, cancel: &CancellationToken) -> Result<GeneratorOutput> {
        cancel.check()?;

        let classes = model.classes();
        debug!(classes = classes.len(), parallel = self.config.parallel, "starting run");

        let diagnostics = Diagnostics::new();
        let analyse = |class: &std::sync::Arc<ClassModel>| -> Result<Option<GeneratedSource>> {
            cancel.check()?;
            if self.config.report_diagnostics {
                if let Some(diagnostic) = self.validator.validate(class)? {
                    diagnostics.push(diagnostic);
                }
            }
            self.generate_for_class(class)
        };

        let generated: Vec<Option<GeneratedSource>> = if self.config.parallel {
            classes.par_iter().map(analyse).collect::<Result<_>>()?
        } else {
            classes.iter().map(analyse).collect::<Result<_>>()?
        };

        let mut sources = Vec::with_capacity(generated.len() + 1);
        if self.config.emit_marker_source {
            sources.push(marker_source(&self.config));
        }
        sources.extend(generated.into_iter().flatten());

        debug!(
            sources = sources.len(),
            diagnostics = diagnostics.count(),
            "run finished"
        );
        Ok(GeneratorOutput {
            sources,
            diagnostics,
        })
    }
}

impl Default for InheritedConstructorGenerator {
    fn default() -> Self {
        Self::new(InheritorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Accessibility, ModelRegistry},
        test::factories::{base_class, derived_class, int, param},
    };

    #[test]
    fn test_generate_for_class_gates() {
        let generator = InheritedConstructorGenerator::default();
        let base = base_class(vec![(Accessibility::Public, vec![param("a", int())])]);

        let eligible = derived_class(base.clone(), vec![]);
        assert!(generator.generate_for_class(&eligible).unwrap().is_some());

        let mut not_partial = derived_class(base.clone(), vec![]);
        not_partial.is_extensible = false;
        assert!(generator.generate_for_class(&not_partial).unwrap().is_none());

        let mut not_marked = derived_class(base.clone(), vec![]);
        not_marked.is_marked = false;
        assert!(generator.generate_for_class(&not_marked).unwrap().is_none());

        let value_type = derived_class(base, vec![]).value_type();
        assert!(generator.generate_for_class(&value_type).unwrap().is_none());
    }

    #[test]
    fn test_generate_by_id() {
        let registry = ModelRegistry::new();
        let base = base_class(vec![(Accessibility::Public, vec![param("a", int())])]);
        let derived = registry.add_class(derived_class(base, vec![]));
        let generator = InheritedConstructorGenerator::default();

        assert!(generator
            .generate_by_id(&registry, derived.id)
            .unwrap()
            .is_some());
        assert!(matches!(
            generator.generate_by_id(&registry, SymbolId::new(999)),
            Err(Error::ClassNotFound(_))
        ));
    }

    #[test]
    fn test_run_cancelled_before_start() {
        let registry = ModelRegistry::new();
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(matches!(
            InheritedConstructorGenerator::default().run(&registry, &cancel),
            Err(Error::Cancelled)
        ));
    }

    #[test]
    fn test_run_empty_model_emits_marker_only() {
        let registry = ModelRegistry::new();
        let output = InheritedConstructorGenerator::default()
            .run(&registry, &CancellationToken::new())
            .unwrap();

        assert_eq!(output.sources.len(), 1);
        assert!(output.source("InheritConstructorsAttribute").is_some());
        assert!(!output.diagnostics.has_any());

        let output = InheritedConstructorGenerator::new(InheritorConfig::generation_only())
            .run(&registry, &CancellationToken::new())
            .unwrap();
        assert!(output.sources.is_empty());
    }
}
