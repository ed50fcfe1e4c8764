//! Symbolic model of classes and their constructors.
//!
//! This module defines the read-only data the synthesis core works on and the
//! [`SymbolModel`] trait through which a host toolchain provides it. Every entity is
//! materialized once per class under analysis and never mutated afterwards; synthesized
//! declarations are a separate artifact and never feed back into the model.
//!
//! # Key Components
//!
//! - [`ClassModel`]: A class, its base class snapshot, its own constructors and the three
//!   flags the generator gates on (reference type, marked, extensible)
//! - [`ConstructorSymbol`]: Accessibility plus ordered [`Parameter`]s
//! - [`PassingMode`] and [`Accessibility`]: Closed enumerations, with raw ECMA-335 mappings
//!   for hosts that read compiled metadata
//! - [`ClassDeclaration`] and [`Location`]: The syntax side, used by diagnostics and fixes
//! - [`SymbolModel`]: The adapter interface
//! - [`ModelRegistry`]: A thread-safe in-memory adapter
//!
//! # Examples
//!
//! ```rust
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
//! assert_eq!(derived.base_constructors().len(), 1);
//! ```

mod accessibility;
mod adapter;
mod class;
mod constructor;
mod id;
mod location;
mod parameter;
mod registry;

pub use accessibility::{Accessibility, MethodAccessFlags, METHOD_ACCESS_MASK};
pub use adapter::SymbolModel;
pub use class::{ClassModel, ClassModelRc};
pub use constructor::{ConstructorSymbol, ConstructorSymbolRc};
pub use id::SymbolId;
pub use location::{ClassDeclaration, Location, SourceSpan};
pub use parameter::{ParamAttributes, Parameter, ParameterType, PassingMode};
pub use registry::ModelRegistry;
