//! Constructor inheritance: signatures, selection and synthesis.
//!
//! The pipeline for one class runs strictly in this order, and the order of the selected
//! constructors is carried through unchanged into the generated text:
//!
//! ```text
//! ClassModel ──► SignatureSet ──► select_inheritable ──► ConstructorSynthesizer ──► GeneratedSource
//!  (own ctors)    (implemented)    (base order kept)       (None if nothing left)
//! ```
//!
//! # Key Components
//!
//! - [`ConstructorSignature`] / [`SignatureSet`] - Structural signatures and deduplication
//! - [`select_inheritable`] / [`inheritable_constructors`] - Private and implemented
//!   constructors are filtered out
//! - [`ConstructorSynthesizer`] - Renders forwarding constructors into a `partial` fragment
//! - [`InheritedConstructorGenerator`] - Runs the pipeline over a whole [`crate::model::SymbolModel`]
//! - [`marker_source`] - The marker attribute declaration
//!
//! # Examples
//!
//! ```rust
//! use inheritor::inherit::{inheritable_constructors, ConstructorSynthesizer};
//! use inheritor::model::{Accessibility, ClassModel, Parameter, ParameterType, SymbolId};
//! use std::sync::Arc;
//!
//! let base = Arc::new(
//!     ClassModel::new(SymbolId::new(1), "App", "Base")
//!         .with_constructor(Accessibility::Public, vec![
//!             Parameter::new("id", ParameterType::named("int")),
//!         ]),
//! );
//! let derived = ClassModel::new(SymbolId::new(2), "App", "Derived")
//!     .with_base(base)
//!     .marked()
//!     .extensible();
//!
//! let inherited = inheritable_constructors(&derived);
//! let source = ConstructorSynthesizer::default()
//!     .synthesize(&derived, &inherited)?
//!     .expect("one constructor to inherit");
//!
//! assert!(source.text.contains("public Derived(int id)"));
//! # Ok::<(), inheritor::Error>(())
//! ```

mod generator;
mod marker;
mod selector;
mod signature;
mod synthesizer;

pub use generator::{GeneratorOutput, InheritedConstructorGenerator};
pub use marker::marker_source;
pub use selector::{inheritable_constructors, select_inheritable};
pub use signature::{ConstructorSignature, SignatureSet};
pub use synthesizer::{hint_name, ConstructorSynthesizer, GeneratedSource, AUTO_GENERATED_HEADER};
