use std::{fmt, sync::Arc};

use crate::model::{Accessibility, Parameter, SymbolId};

/// Reference to a `ConstructorSymbol`
pub type ConstructorSymbolRc = Arc<ConstructorSymbol>;

/// An instance constructor, either declared on the class under analysis or on its base class.
///
/// Static constructors are not part of the model; the symbol model must not hand them over.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorSymbol {
    /// The class that declares this constructor
    pub declaring_type: SymbolId,
    /// Declared accessibility
    pub accessibility: Accessibility,
    /// Parameters in declaration order
    pub params: Vec<Parameter>,
}

impl ConstructorSymbol {
    /// Creates a constructor with the given accessibility and parameters
    pub fn new(declaring_type: SymbolId, accessibility: Accessibility, params: Vec<Parameter>) -> Self {
        ConstructorSymbol {
            declaring_type,
            accessibility,
            params,
        }
    }
}

/// Debug-friendly rendering: `protected .ctor(int a, ref string b)`
impl fmt::Display for ConstructorSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .ctor(", self.accessibility)?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")
    }
}
