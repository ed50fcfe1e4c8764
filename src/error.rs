use thiserror::Error;

use crate::model::{Accessibility, Location, SymbolId};

macro_rules! contract_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Contract {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Contract {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a broken input contract between the host's symbol model and the
/// synthesis core. None of them is meant for the end user: the only user-facing failure
/// (a marked class that is not declared `partial`) travels as a
/// [`crate::validation::Diagnostic`], not as an `Error`.
///
/// Results that are merely empty - a class with nothing to inherit, a class that is not
/// marked - are never errors either. They surface as `Ok(None)` or an empty collection.
///
/// # Error Categories
///
/// ## Symbol data faults
/// - [`Error::UnsupportedAccessibility`] - Accessibility with no constructor keyword
/// - [`Error::UnknownAccessibility`] - Raw access field outside the ECMA-335 range
/// - [`Error::UnknownPassingMode`] - Passing-mode keyword the model cannot represent
/// - [`Error::ClassNotFound`] - Identifier that the symbol model does not know
///
/// ## Host wiring faults
/// - [`Error::NoEnclosingClass`] - A fix was requested at a location with no class
/// - [`Error::Contract`] - Any other violated precondition, with source position
///
/// ## Control flow
/// - [`Error::Cancelled`] - The host cancelled a run between two class analyses
///
/// # Examples
///
/// ```rust
/// use inheritor::{Error, model::Accessibility};
///
/// match Accessibility::from_method_flags(0x0007) {
///     Err(Error::UnknownAccessibility(raw)) => assert_eq!(raw, 7),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor carries an accessibility that has no constructor keyword mapping.
    ///
    /// Only `public`, `protected`, `internal` and `protected internal` can be mirrored onto a
    /// forwarding constructor. Reaching this error means the symbol model handed over a
    /// constructor that should never have been selected.
    #[error("Unsupported accessibility '{accessibility}' on constructor {constructor}")]
    UnsupportedAccessibility {
        /// Display form of the offending constructor
        constructor: String,
        /// The accessibility that could not be rendered
        accessibility: Accessibility,
    },

    /// The raw method access field holds a value outside of `0..=6`.
    #[error("Unknown method access value - 0x{0:04X}")]
    UnknownAccessibility(u32),

    /// A parameter passing mode could not be mapped.
    #[error("Unknown parameter passing mode - '{0}'")]
    UnknownPassingMode(String),

    /// No class declaration encloses the location a correction was requested for.
    ///
    /// Corrections are only ever requested for locations that a validator reported, so this
    /// indicates that the host resolved the location against a different document.
    #[error("No class declaration encloses {location}")]
    NoEnclosingClass {
        /// The location that was searched
        location: Location,
    },

    /// The symbol model does not contain the requested class.
    #[error("Class {0} not found in the symbol model")]
    ClassNotFound(SymbolId),

    /// The host cancelled the run.
    #[error("Operation cancelled")]
    Cancelled,

    /// A precondition of the core was violated by its caller.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of the violated precondition
    /// * `file` - Source file where the violation was detected
    /// * `line` - Source line where the violation was detected
    #[error("Contract violation - {file}:{line}: {message}")]
    Contract {
        /// The message to be printed for the Contract error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}
