use std::fmt;

/// An opaque identifier the symbol model assigns to every class it exposes.
///
/// Identifiers only need to be unique within one model. The synthesis core never interprets
/// the value, it only uses it to tie constructors back to their declaring class and to look
/// classes up through [`crate::model::SymbolModel`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Creates a new identifier from a raw value
    #[must_use]
    pub fn new(value: u32) -> Self {
        SymbolId(value)
    }

    /// Returns the raw identifier value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for SymbolId {
    fn from(value: u32) -> Self {
        SymbolId(value)
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
