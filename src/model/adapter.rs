//! The boundary between a host toolchain and the synthesis core.
//!
//! A host implements [`SymbolModel`] as a thin mapping layer over whatever symbol table it
//! already has. The core never sees host types; it only consumes [`ClassModel`] snapshots and
//! [`ClassDeclaration`] syntax slices.

use crate::model::{ClassDeclaration, ClassModelRc, Location, SymbolId};

/// Read-only, queryable view of the classes in one compilation.
///
/// Implementations must be `Send + Sync`: the generator analyses classes in parallel and
/// shares the model between worker threads.
pub trait SymbolModel: Send + Sync {
    /// Looks up a class by identifier.
    fn class(&self, id: SymbolId) -> Option<ClassModelRc>;

    /// All candidate classes of the compilation, in a stable order.
    ///
    /// The order determines the order of generated fragments and diagnostics.
    fn classes(&self) -> Vec<ClassModelRc>;

    /// Resolves the innermost class declaration enclosing `location`.
    ///
    /// Returns `None` if no class declaration in the location's document covers the start of
    /// its span.
    fn enclosing_class_declaration(&self, location: &Location) -> Option<ClassDeclaration>;
}
