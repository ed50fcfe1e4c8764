// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0


#![doc(html_no_source)]
#![deny(missing_docs)]

//! # inheritor
//!
//! Constructor inheritance for C#-like class hierarchies, as a host-independent library.
//!
//! C# does not inherit constructors: a derived class has to repeat every base constructor it
//! wants to expose and forward the arguments by hand. `inheritor` automates that for classes
//! carrying the `[InheritConstructors]` marker. For every such class it selects the base
//! constructors worth inheriting and renders a `partial` class fragment containing one
//! forwarding constructor per selection. Marked classes that cannot merge with a fragment
//! (because they are not `partial`) are reported as diagnostics, and a corrector adds the
//! missing modifier.
//!
//! The compiler host is abstracted behind [`model::SymbolModel`]. Everything in this crate is
//! a pure function of that model, so the same core serves a build-time generator, an IDE
//! integration or a test harness.
//!
//! ## Features
//!
//! - **Structural deduplication** - Own constructors are matched by parameter types and passing
//!   modes, never by names
//! - **Faithful forwarding** - `ref`, `out`, `ref readonly`, `params` and default values are
//!   mirrored onto the generated constructor
//! - **Parallel analysis** - Classes are analysed concurrently with deterministic output order
//! - **Diagnostics and fixes** - `COIN1001` with an automated "Make class partial" correction
//!
//! ## Quick Start
//!
//! ```rust
//! use inheritor::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = ModelRegistry::new();
//! let base = registry.add_class(
//!     ClassModel::new(SymbolId::new(1), "App", "Base")
//!         .with_constructor(Accessibility::Public, vec![
//!             Parameter::new("id", ParameterType::named("int")),
//!         ]),
//! );
//! registry.add_class(
//!     ClassModel::new(SymbolId::new(2), "App", "Derived")
//!         .with_base(Arc::clone(&base))
//!         .marked()
//!         .extensible(),
//! );
//!
//! let output = InheritedConstructorGenerator::default()
//!     .run(&registry, &CancellationToken::new())?;
//!
//! let fragment = output.source("App.Derived.Constructors.cs").expect("generated");
//! assert!(fragment.text.contains("public Derived(int id)"));
//! # Ok::<(), inheritor::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`model`] - Symbol model, raw metadata mappings and the host adapter trait
//! - [`inherit`] - Signature sets, selection, synthesis and the per-compilation driver
//! - [`validation`] - The extensibility rule, its diagnostics and its corrector
//! - [`config`] - Generator configuration
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber. Per-class decisions are
//! logged at `trace`, synthesized fragments and reported violations at `debug`.
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use inheritor::prelude::*;
///
/// let generator = InheritedConstructorGenerator::new(InheritorConfig::sequential());
/// assert!(!generator.config().parallel);
/// ```
pub mod prelude;

/// Generator configuration
pub mod config;

/// The symbol model the synthesis core operates on.
///
/// Classes, constructors, parameters and their source locations, plus the mappings from raw
/// ECMA-335 flag values and the [`model::SymbolModel`] trait hosts implement.
pub mod model;

/// Constructor selection and synthesis
pub mod inherit;

/// The extensibility rule, its diagnostics and its automated correction
pub mod validation;

/// Cancellation and other small shared utilities
pub mod utils;

/// `inheritor` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use inheritor::{model::PassingMode, Result};
///
/// fn mode(keyword: &str) -> Result<PassingMode> {
///     PassingMode::from_keyword(keyword)
/// }
///
/// assert_eq!(mode("out").unwrap(), PassingMode::OutputOnly);
/// assert!(mode("scoped").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `inheritor` Error type
///
/// The error type for all fallible operations in this crate. Every variant describes a fault
/// in the data the host handed over, never a user mistake; see [`validation`] for those.
pub use error::Error;

/// Generator configuration, see [`config::InheritorConfig`].
pub use config::InheritorConfig;
