use std::sync::Arc;

use crate::model::{
    Accessibility, ConstructorSymbol, ConstructorSymbolRc, Location, Parameter, SymbolId,
};

/// Reference to a `ClassModel`
pub type ClassModelRc = Arc<ClassModel>;

/// A read-only view of one class, materialized once per analysis.
///
/// The base class is held as a snapshot of its own model, so a derived class and its base
/// can be analysed without going back to the symbol model. Root types have no base.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClassModel {
    /// Identifier assigned by the symbol model
    pub id: SymbolId,
    /// Containing namespace, dot separated; empty for the global namespace
    pub namespace: String,
    /// Simple name without type parameters
    pub name: String,
    /// Declared type parameter names, in order
    pub type_params: Vec<String>,
    /// Base class, `None` for root types
    pub base: Option<ClassModelRc>,
    /// The class's own instance constructors, in declaration order
    pub constructors: Vec<ConstructorSymbolRc>,
    /// The type is declared with the `class` keyword.
    ///
    /// Records, structs and interfaces must be reported as `false`: the corrector only knows how
    /// to make a `class` declaration partial.
    pub is_reference_type: bool,
    /// The type carries the inheritance marker
    pub is_marked: bool,
    /// The declaration carries the extensibility (`partial`) modifier
    pub is_extensible: bool,
    /// Declaration locations; the first one is the primary location
    pub locations: Vec<Location>,
}

impl ClassModel {
    /// Creates a reference type with no constructors, no base, not marked and not extensible
    pub fn new(id: SymbolId, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        ClassModel {
            id,
            namespace: namespace.into(),
            name: name.into(),
            type_params: Vec::new(),
            base: None,
            constructors: Vec::new(),
            is_reference_type: true,
            is_marked: false,
            is_extensible: false,
            locations: Vec::new(),
        }
    }

    /// Sets the base class
    #[must_use]
    pub fn with_base(mut self, base: ClassModelRc) -> Self {
        self.base = Some(base);
        self
    }

    /// Appends a type parameter
    #[must_use]
    pub fn with_type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    /// Appends a constructor declared on this class
    #[must_use]
    pub fn with_constructor(mut self, accessibility: Accessibility, params: Vec<Parameter>) -> Self {
        self.constructors
            .push(Arc::new(ConstructorSymbol::new(self.id, accessibility, params)));
        self
    }

    /// Marks the class for constructor inheritance
    #[must_use]
    pub fn marked(mut self) -> Self {
        self.is_marked = true;
        self
    }

    /// Declares the class extensible
    #[must_use]
    pub fn extensible(mut self) -> Self {
        self.is_extensible = true;
        self
    }

    /// Turns the type into a value type
    #[must_use]
    pub fn value_type(mut self) -> Self {
        self.is_reference_type = false;
        self
    }

    /// Appends a declaration location
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Constructors of the base class, empty for root types
    #[must_use]
    pub fn base_constructors(&self) -> &[ConstructorSymbolRc] {
        self.base
            .as_ref()
            .map_or(&[][..], |base| base.constructors.as_slice())
    }

    /// Minimally-qualified display, e.g. `Repository<T>`
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.type_params.is_empty() {
            self.name.clone()
        } else {
            format!("{}<{}>", self.name, self.type_params.join(", "))
        }
    }

    /// Namespace-qualified display, e.g. `App.Data.Repository<T>`
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.display_name()
        } else {
            format!("{}.{}", self.namespace, self.display_name())
        }
    }

    /// The primary declaration location, if the model knows one
    #[must_use]
    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }
}
