//! Declared accessibility of constructors.
//!
//! The accessibility of a base constructor decides two things: whether it can be inherited
//! at all (private constructors never are) and which keyword the forwarding constructor is
//! declared with. Hosts that read compiled metadata can build an [`Accessibility`] straight
//! from the ECMA-335 `MethodAttributes` access field via [`Accessibility::from_method_flags`].
//!
//! # Keyword mapping
//!
//! | Accessibility | Keyword |
//! |---------------|---------|
//! | `Public` | `public` |
//! | `Protected` | `protected` |
//! | `Internal` | `internal` |
//! | `ProtectedOrInternal` | `protected internal` |
//! | anything else | fault, see [`crate::Error::UnsupportedAccessibility`] |

use bitflags::bitflags;
use strum::{Display, EnumCount, EnumIter};

use crate::Result;

/// Bitmask for `ACCESS` state extraction
pub const METHOD_ACCESS_MASK: u32 = 0x0007;

bitflags! {
    #[derive(PartialEq)]
    /// Method access flags (ECMA-335 II.23.1.10)
    pub struct MethodAccessFlags: u32 {
        /// Member not referenceable
        const COMPILER_CONTROLLED = 0x0000;
        /// Accessible only by the parent type
        const PRIVATE = 0x0001;
        /// Accessible by sub-types only in this Assembly
        const FAM_AND_ASSEM = 0x0002;
        /// Accessibly by anyone in the Assembly
        const ASSEM = 0x0003;
        /// Accessible only by type and sub-types
        const FAMILY = 0x0004;
        /// Accessibly by sub-types anywhere, plus anyone in assembly
        const FAM_OR_ASSEM = 0x0005;
        /// Accessibly by anyone who has visibility to this scope
        const PUBLIC = 0x0006;
    }
}

/// Declared accessibility of a constructor.
///
/// Carries the full set of values a symbol model can report, including the two that have no
/// constructor keyword mapping (`NotApplicable`, `ProtectedAndInternal`). Keeping them
/// representable lets the synthesizer reject them explicitly instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Accessibility {
    /// Compiler controlled, not referenceable from source
    #[strum(to_string = "not applicable")]
    NotApplicable,
    /// Accessible only from the declaring type
    #[strum(to_string = "private")]
    Private,
    /// Accessible from derived types within the same assembly
    #[strum(to_string = "private protected")]
    ProtectedAndInternal,
    /// Accessible from derived types
    #[strum(to_string = "protected")]
    Protected,
    /// Accessible from the same assembly
    #[strum(to_string = "internal")]
    Internal,
    /// Accessible from derived types or the same assembly
    #[strum(to_string = "protected internal")]
    ProtectedOrInternal,
    /// Accessible from anywhere
    #[strum(to_string = "public")]
    Public,
}

impl Accessibility {
    /// Extract the accessibility from raw method attributes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownAccessibility`] when the access field holds `7`, the
    /// one value ECMA-335 leaves undefined.
    pub fn from_method_flags(flags: u32) -> Result<Self> {
        let access = MethodAccessFlags::from_bits_truncate(flags & METHOD_ACCESS_MASK);

        if access == MethodAccessFlags::COMPILER_CONTROLLED {
            Ok(Accessibility::NotApplicable)
        } else if access == MethodAccessFlags::PRIVATE {
            Ok(Accessibility::Private)
        } else if access == MethodAccessFlags::FAM_AND_ASSEM {
            Ok(Accessibility::ProtectedAndInternal)
        } else if access == MethodAccessFlags::ASSEM {
            Ok(Accessibility::Internal)
        } else if access == MethodAccessFlags::FAMILY {
            Ok(Accessibility::Protected)
        } else if access == MethodAccessFlags::FAM_OR_ASSEM {
            Ok(Accessibility::ProtectedOrInternal)
        } else if access == MethodAccessFlags::PUBLIC {
            Ok(Accessibility::Public)
        } else {
            Err(crate::Error::UnknownAccessibility(flags & METHOD_ACCESS_MASK))
        }
    }

    /// Returns the declaration keyword(s) for a constructor with this accessibility, if the
    /// accessibility can be mirrored onto a forwarding constructor.
    #[must_use]
    pub fn constructor_keyword(&self) -> Option<&'static str> {
        match self {
            Accessibility::Public => Some("public"),
            Accessibility::Protected => Some("protected"),
            Accessibility::Internal => Some("internal"),
            Accessibility::ProtectedOrInternal => Some("protected internal"),
            Accessibility::NotApplicable
            | Accessibility::Private
            | Accessibility::ProtectedAndInternal => None,
        }
    }

    /// Returns true for `Private`, the one accessibility that is never inheritable
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self, Accessibility::Private)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_method_flags() {
        assert_eq!(
            Accessibility::from_method_flags(0x0006).unwrap(),
            Accessibility::Public
        );
        assert_eq!(
            Accessibility::from_method_flags(0x0004).unwrap(),
            Accessibility::Protected
        );
        assert_eq!(
            Accessibility::from_method_flags(0x0003).unwrap(),
            Accessibility::Internal
        );
        assert_eq!(
            Accessibility::from_method_flags(0x0005).unwrap(),
            Accessibility::ProtectedOrInternal
        );
        assert_eq!(
            Accessibility::from_method_flags(0x0001).unwrap(),
            Accessibility::Private
        );
        // .ctor flags: public | hidebysig | specialname | rtspecialname
        assert_eq!(
            Accessibility::from_method_flags(0x1886).unwrap(),
            Accessibility::Public
        );
    }

    #[test]
    fn test_from_method_flags_undefined_value() {
        assert!(matches!(
            Accessibility::from_method_flags(0x1887),
            Err(Error::UnknownAccessibility(7))
        ));
    }

    #[test]
    fn test_constructor_keywords() {
        let mapped: Vec<_> = Accessibility::iter()
            .filter_map(|a| a.constructor_keyword())
            .collect();
        assert_eq!(
            mapped,
            vec!["protected", "internal", "protected internal", "public"]
        );
        assert_eq!(Accessibility::COUNT, 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(Accessibility::ProtectedOrInternal.to_string(), "protected internal");
        assert_eq!(Accessibility::ProtectedAndInternal.to_string(), "private protected");
    }
}
