//! # inheritor Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the inheritor library. Import this module to get quick access to the essential
//! types for wiring a symbol model into the generator.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all inheritor operations
pub use crate::Error;

/// The result type used throughout inheritor
pub use crate::Result;

/// Generator configuration
pub use crate::InheritorConfig;

// ================================================================================================
// Symbol Model
// ================================================================================================

/// Classes, constructors and the adapter trait hosts implement
pub use crate::model::{
    Accessibility, ClassDeclaration, ClassModel, ClassModelRc, ConstructorSymbol,
    ConstructorSymbolRc, Location, ModelRegistry, Parameter, ParameterType, PassingMode,
    SourceSpan, SymbolId, SymbolModel,
};

// ================================================================================================
// Synthesis
// ================================================================================================

/// Selection, rendering and the per-compilation driver
pub use crate::inherit::{
    inheritable_constructors, ConstructorSynthesizer, GeneratedSource, GeneratorOutput,
    InheritedConstructorGenerator, SignatureSet,
};

// ================================================================================================
// Validation
// ================================================================================================

/// The extensibility rule and its correction
pub use crate::validation::{
    Diagnostic, DiagnosticSeverity, Diagnostics, ExtensibilityCorrector, ExtensibilityValidator,
};

/// Cooperative cancellation
pub use crate::utils::CancellationToken;
