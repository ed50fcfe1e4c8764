//! Rendering of forwarding constructors.
//!
//! The synthesizer turns the selector's output into one source fragment per class. The
//! fragment re-opens the class as `partial` inside its namespace and declares one forwarding
//! constructor per inherited base constructor, in the order received:
//!
//! ```text
//! // <auto-generated/>
//! namespace App
//! {
//!     partial class Derived
//!     {
//!         public Derived(int a)
//!             : base(a) {}
//!
//!         protected Derived(ref int a, out string b)
//!             : base(ref a, out b) {}
//!     }
//! }
//! ```
//!
//! Classes in the global namespace are emitted without the namespace block. The synthesizer
//! is pure: it never touches the symbol model and never writes files.

use crate::{
    model::{ClassModel, ConstructorSymbol, ConstructorSymbolRc},
    Error, Result,
};

/// Header line placed on top of every generated fragment
pub const AUTO_GENERATED_HEADER: &str = "// <auto-generated/>";

/// A named source fragment handed to the host for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Unique name of the fragment within one compilation
    pub hint_name: String,
    /// Complete source text
    pub text: String,
}

/// Returns the fragment name for `class`, e.g. `App.Repository(T).Constructors.cs`.
///
/// Angle brackets are not valid in every file system, so type parameter lists are written
/// with parentheses.
#[must_use]
pub fn hint_name(class: &ClassModel) -> String {
    format!(
        "{}.Constructors.cs",
        class.qualified_name().replace('<', "(").replace('>', ")")
    )
}

/// Renders forwarding constructor declarations.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorSynthesizer {
    indent: usize,
}

impl ConstructorSynthesizer {
    /// Creates a synthesizer that indents by `indent` spaces per nesting level
    #[must_use]
    pub fn new(indent: usize) -> Self {
        ConstructorSynthesizer { indent }
    }

    /// Renders the fragment for `class` declaring one forwarding constructor per entry of
    /// `inherited`.
    ///
    /// The caller must have established that the class is declared extensible, otherwise the
    /// host cannot merge the fragment with the user's declaration.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if `inherited` is empty: there is nothing to emit, and the host must not
    /// emit an empty fragment either.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAccessibility`] if a constructor's accessibility has no
    /// keyword mapping. No partial output is produced in that case.
    pub fn synthesize(
        &self,
        class: &ClassModel,
        inherited: &[ConstructorSymbolRc],
    ) -> Result<Option<GeneratedSource>> {
        if inherited.is_empty() {
            return Ok(None);
        }

        let level = usize::from(!class.namespace.is_empty());
        let constructors = inherited
            .iter()
            .map(|ctor| self.render_constructor(&class.name, ctor, level + 1))
            .collect::<Result<Vec<_>>>()?;

        let mut text = String::from(AUTO_GENERATED_HEADER);
        text.push('\n');
        if level > 0 {
            text.push_str(&format!("namespace {}\n{{\n", class.namespace));
        }
        text.push_str(&format!(
            "{pad}partial class {name}\n{pad}{{\n",
            pad = self.pad(level),
            name = class.display_name()
        ));
        text.push_str(&constructors.join("\n"));
        text.push_str(&format!("{}}}\n", self.pad(level)));
        if level > 0 {
            text.push_str("}\n");
        }

        Ok(Some(GeneratedSource {
            hint_name: hint_name(class),
            text,
        }))
    }

    /// Renders a single forwarding constructor named `class_name`, indented to `level`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAccessibility`] if the accessibility has no keyword.
    pub fn render_constructor(
        &self,
        class_name: &str,
        ctor: &ConstructorSymbol,
        level: usize,
    ) -> Result<String> {
        let keyword =
            ctor.accessibility
                .constructor_keyword()
                .ok_or_else(|| Error::UnsupportedAccessibility {
                    constructor: ctor.to_string(),
                    accessibility: ctor.accessibility,
                })?;

        let declarations = ctor
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let arguments = ctor
            .params
            .iter()
            .map(|param| format!("{}{}", param.mode.argument_prefix(), param.name))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!(
            "{pad}{keyword} {class_name}({declarations})\n{pad}{inner}: base({arguments}) {{}}\n",
            pad = self.pad(level),
            inner = self.pad(1),
        ))
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}

impl Default for ConstructorSynthesizer {
    fn default() -> Self {
        Self::new(4)
    }
}
