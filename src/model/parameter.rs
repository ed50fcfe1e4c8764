//! Constructor parameters, their types and passing modes.
//!
//! A parameter is described by three things the synthesizer needs: a name, a type and the way
//! the argument is passed. Types are opaque to this crate - they are passed through verbatim,
//! including any generic arguments - so [`ParameterType`] only keeps two strings: an identity
//! used for signature comparison and the minimally-qualified display used when rendering.
//!
//! Forwarding repeats each parameter's passing-mode keyword at the call site, with one
//! exception: a `ref readonly` parameter receives its argument through `in`.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use bitflags::bitflags;
use strum::{Display, EnumCount, EnumIter};

use crate::Result;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Parameter attributes (ECMA-335 II.23.1.13)
    pub struct ParamAttributes: u16 {
        /// Param is \[In\]
        const IN = 0x0001;
        /// Param is \[out\]
        const OUT = 0x0002;
        /// Param is optional
        const OPTIONAL = 0x0010;
        /// Param has default value
        const HAS_DEFAULT = 0x1000;
        /// Param has `FieldMarshal`
        const HAS_FIELD_MARSHAL = 0x2000;
    }
}

/// How an argument is transferred to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
pub enum PassingMode {
    /// Passed by value, no keyword
    #[default]
    ByValue,
    /// Passed by mutable reference (`ref`)
    ByReference,
    /// Output-only reference (`out`)
    OutputOnly,
    /// Read-only reference (`ref readonly`).
    ///
    /// Declared as `ref readonly`, but forwarded to the base constructor with `in`; see
    /// [`PassingMode::argument_prefix`].
    ReadOnlyReference,
}

impl PassingMode {
    /// Derives the passing mode from a decoded parameter signature.
    ///
    /// ## Arguments
    /// * `by_ref` - The signature element is a managed reference (`BYREF`)
    /// * `flags` - The `Param` table flags for this parameter
    /// * `is_readonly` - The parameter carries a read-only marker (`IsReadOnlyAttribute` or an
    ///   `InAttribute` modreq)
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownPassingMode`] for combinations no compiler emits: a
    /// read-only or `[Out]`-only marker on a by-value parameter.
    pub fn from_param(by_ref: bool, flags: ParamAttributes, is_readonly: bool) -> Result<Self> {
        let out_only = flags.contains(ParamAttributes::OUT) && !flags.contains(ParamAttributes::IN);

        match (by_ref, out_only, is_readonly) {
            // [In] alone on a by-value parameter is a marshalling hint
            (false, false, false) => Ok(PassingMode::ByValue),
            (false, _, _) => Err(crate::Error::UnknownPassingMode(format!(
                "by-value parameter with flags 0x{:04X}{}",
                flags.bits(),
                if is_readonly { " and read-only marker" } else { "" }
            ))),
            (true, _, true) => Ok(PassingMode::ReadOnlyReference),
            (true, true, false) => Ok(PassingMode::OutputOnly),
            (true, false, false) => Ok(PassingMode::ByReference),
        }
    }

    /// Parses a passing-mode keyword as it appears in a parameter declaration.
    ///
    /// `in` is accepted as an alias of `ref readonly`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownPassingMode`] for any other keyword.
    pub fn from_keyword(keyword: &str) -> Result<Self> {
        match keyword.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => Ok(PassingMode::ByValue),
            ["ref"] => Ok(PassingMode::ByReference),
            ["out"] => Ok(PassingMode::OutputOnly),
            ["ref", "readonly"] | ["in"] => Ok(PassingMode::ReadOnlyReference),
            _ => Err(crate::Error::UnknownPassingMode(keyword.to_string())),
        }
    }

    /// Keyword prefix used in a parameter declaration, including the trailing space
    #[must_use]
    pub fn declaration_prefix(&self) -> &'static str {
        match self {
            PassingMode::ByValue => "",
            PassingMode::ByReference => "ref ",
            PassingMode::OutputOnly => "out ",
            PassingMode::ReadOnlyReference => "ref readonly ",
        }
    }

    /// Keyword prefix used when passing an argument, including the trailing space.
    ///
    /// A `ref readonly` parameter is declared with two keywords but receives its argument
    /// through `in`.
    #[must_use]
    pub fn argument_prefix(&self) -> &'static str {
        match self {
            PassingMode::ByValue => "",
            PassingMode::ByReference => "ref ",
            PassingMode::OutputOnly => "out ",
            PassingMode::ReadOnlyReference => "in ",
        }
    }
}

/// The type of a parameter.
///
/// Equality and hashing only consider [`ParameterType::identity`]; two parameters whose types
/// are displayed differently (e.g. `List<int>` imported from different namespaces) but refer
/// to the same type compare equal.
#[derive(Debug, Clone, Eq)]
pub struct ParameterType {
    /// Fully qualified, unambiguous name of the type
    pub identity: String,
    /// Minimally-qualified display used in generated declarations
    pub display: String,
}

impl ParameterType {
    /// Creates a parameter type whose display differs from its identity
    pub fn new(identity: impl Into<String>, display: impl Into<String>) -> Self {
        ParameterType {
            identity: identity.into(),
            display: display.into(),
        }
    }

    /// Creates a parameter type that is displayed by its identity (keywords like `int`)
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        ParameterType {
            display: name.clone(),
            identity: name,
        }
    }
}

impl PartialEq for ParameterType {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Hash for ParameterType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// A named constructor parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name as declared on the constructor
    pub name: String,
    /// Declared type
    pub ty: ParameterType,
    /// Passing mode
    pub mode: PassingMode,
    /// Declared with `params`
    pub is_params: bool,
    /// Default value expression, already rendered as source text
    pub default_value: Option<String>,
}

impl Parameter {
    /// Creates a by-value parameter
    pub fn new(name: impl Into<String>, ty: ParameterType) -> Self {
        Parameter {
            name: name.into(),
            ty,
            mode: PassingMode::ByValue,
            is_params: false,
            default_value: None,
        }
    }

    /// Sets the passing mode
    #[must_use]
    pub fn with_mode(mut self, mode: PassingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Marks the parameter as a `params` array
    #[must_use]
    pub fn with_params(mut self) -> Self {
        self.is_params = true;
        self
    }

    /// Sets the default value expression
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Renders the minimally-qualified declaration of the parameter, e.g. `ref int value` or
/// `string name = "x"`.
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_params {
            f.write_str("params ")?;
        }
        write!(f, "{}{} {}", self.mode.declaration_prefix(), self.ty, self.name)?;
        if let Some(value) = &self.default_value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}
