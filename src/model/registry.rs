//! In-memory [`SymbolModel`] implementation.
//!
//! `ModelRegistry` is the reference adapter: a host (or a test) registers class models and the
//! class declarations it knows about, and the generator queries them through the
//! [`SymbolModel`] trait. Registration is safe from multiple threads, so a host can populate
//! the registry while walking several documents in parallel.
//!
//! # Example
//!
//! ```rust
//! use inheritor::model::{ClassModel, ModelRegistry, SymbolId, SymbolModel};
//!
//! let registry = ModelRegistry::new();
//! let source = "namespace App { [InheritConstructors] class Widget : Base { } }";
//! let decl = registry.declare_from_source("Widget.cs", source, "Widget").unwrap();
//!
//! registry.add_class(
//!     ClassModel::new(SymbolId::new(1), "App", "Widget")
//!         .marked()
//!         .with_location(decl.location.clone()),
//! );
//! assert_eq!(registry.classes().len(), 1);
//! ```

use std::sync::Arc;

use dashmap::DashMap;

use crate::model::{
    ClassDeclaration, ClassModel, ClassModelRc, Location, SourceSpan, SymbolId, SymbolModel,
};

/// Thread-safe registry of class models and declaration syntax
pub struct ModelRegistry {
    /// Class models indexed by identifier
    classes: DashMap<SymbolId, ClassModelRc>,
    /// Class declarations grouped by document
    declarations: DashMap<Arc<str>, Vec<ClassDeclaration>>,
}

impl ModelRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        ModelRegistry {
            classes: DashMap::new(),
            declarations: DashMap::new(),
        }
    }

    /// Registers a class model, replacing any model with the same identifier
    pub fn add_class(&self, class: ClassModel) -> ClassModelRc {
        let class = Arc::new(class);
        self.classes.insert(class.id, class.clone());
        class
    }

    /// Registers a class declaration
    pub fn add_declaration(&self, declaration: ClassDeclaration) {
        self.declarations
            .entry(declaration.location.document.clone())
            .or_default()
            .push(declaration);
    }

    /// Finds the declaration of class `name` in `source`, registers it and returns it.
    ///
    /// The declaration is taken to start after the preceding `;`, `{` or `}` (so leading
    /// attributes and modifiers are included) and to end at the brace closing the class body.
    /// Braces inside string literals or comments are not recognised.
    pub fn declare_from_source(
        &self,
        document: &str,
        source: &str,
        name: &str,
    ) -> Option<ClassDeclaration> {
        let keyword = find_class_keyword(source, name)?;

        let start = source[..keyword]
            .rfind(['{', '}', ';'])
            .map_or(0, |pos| pos + 1);
        let start = start + (source[start..keyword].len() - source[start..keyword].trim_start().len());

        let open = keyword + source[keyword..].find('{')?;
        let mut depth = 0usize;
        let mut end = None;
        for (offset, ch) in source[open..].char_indices() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(open + offset + 1);
                        break;
                    }
                }
                _ => {}
            }
        }
        let end = end?;

        let declaration = ClassDeclaration::new(
            Location::new(document, SourceSpan::new(start, end - start)),
            &source[start..end],
            keyword - start,
        );
        self.add_declaration(declaration.clone());
        Some(declaration)
    }

    /// Number of registered classes
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no class is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolModel for ModelRegistry {
    fn class(&self, id: SymbolId) -> Option<ClassModelRc> {
        self.classes.get(&id).map(|entry| entry.value().clone())
    }

    fn classes(&self) -> Vec<ClassModelRc> {
        let mut classes: Vec<ClassModelRc> = self
            .classes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        classes.sort_by_key(|class| class.id);
        classes
    }

    fn enclosing_class_declaration(&self, location: &Location) -> Option<ClassDeclaration> {
        let declarations = self.declarations.get(&location.document)?;
        declarations
            .iter()
            .filter(|decl| decl.location.span.contains(location.span.start))
            .min_by_key(|decl| decl.location.span.length)
            .cloned()
    }
}

/// Byte offset of the `class` keyword introducing `name`
fn find_class_keyword(source: &str, name: &str) -> Option<usize> {
    let is_ident = |ch: char| ch.is_alphanumeric() || ch == '_';

    source.match_indices("class").find_map(|(pos, _)| {
        let before_ok = source[..pos].chars().next_back().map_or(true, |ch| !is_ident(ch));
        let rest = &source[pos + "class".len()..];
        let trimmed = rest.trim_start();
        if !before_ok || trimmed.len() == rest.len() || !trimmed.starts_with(name) {
            return None;
        }
        let after_ok = trimmed[name.len()..].chars().next().map_or(true, |ch| !is_ident(ch));
        after_ok.then_some(pos)
    })
}
