//! Structural constructor signatures and the set of signatures a class already implements.
//!
//! A signature is the ordered sequence of `(type, passing mode)` pairs of a constructor.
//! Parameter names, default values and accessibility do not take part: `Derived(int a)`
//! implements `Base(int b)`, while `Derived(ref int a)` does not.

use std::collections::HashSet;

use crate::model::{ConstructorSymbol, ParameterType, PassingMode};

/// Ordered `(type, passing mode)` sequence identifying a constructor.
///
/// Equality is element-wise, order- and length-sensitive. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructorSignature(Vec<(ParameterType, PassingMode)>);

impl ConstructorSignature {
    /// Builds the signature of `constructor`
    #[must_use]
    pub fn of(constructor: &ConstructorSymbol) -> Self {
        ConstructorSignature(
            constructor
                .params
                .iter()
                .map(|param| (param.ty.clone(), param.mode))
                .collect(),
        )
    }

    /// The `(type, mode)` elements in parameter order
    #[must_use]
    pub fn elements(&self) -> &[(ParameterType, PassingMode)] {
        &self.0
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the parameterless signature
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Deduplicated set of the constructor signatures a class implements itself.
///
/// Structurally identical signatures collapse into one entry. The set is only ever used for
/// membership tests, so iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct SignatureSet {
    signatures: HashSet<ConstructorSignature>,
}

impl SignatureSet {
    /// Collects the signatures of `constructors`; an empty input yields an empty set
    pub fn from_constructors<'a, I>(constructors: I) -> Self
    where
        I: IntoIterator<Item = &'a ConstructorSymbol>,
    {
        SignatureSet {
            signatures: constructors
                .into_iter()
                .map(ConstructorSignature::of)
                .collect(),
        }
    }

    /// Returns true if a constructor with this signature is already implemented
    #[must_use]
    pub fn contains(&self, signature: &ConstructorSignature) -> bool {
        self.signatures.contains(signature)
    }

    /// Returns true if `constructor`'s signature is already implemented
    #[must_use]
    pub fn implements(&self, constructor: &ConstructorSymbol) -> bool {
        self.contains(&ConstructorSignature::of(constructor))
    }

    /// Number of distinct signatures
    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Returns true if the set holds no signature
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
