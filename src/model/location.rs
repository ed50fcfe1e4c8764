//! Source locations and class declaration syntax as seen by the symbol model.

use std::{fmt, sync::Arc};

/// A half-open byte range `[start, start + length)` inside one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceSpan {
    /// Offset of the first byte
    pub start: usize,
    /// Number of bytes covered
    pub length: usize,
}

impl SourceSpan {
    /// Creates a new span
    #[must_use]
    pub fn new(start: usize, length: usize) -> Self {
        SourceSpan { start, length }
    }

    /// Offset one past the last byte
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns true if `offset` lies inside the span
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// A span inside a named document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Path or other document identifier
    pub document: Arc<str>,
    /// Covered range
    pub span: SourceSpan,
}

impl Location {
    /// Creates a new location
    pub fn new(document: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        Location {
            document: document.into(),
            span,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.document, self.span.start, self.span.end())
    }
}

/// The syntax of a single class declaration, as resolved by the host for a location.
///
/// `text` is the complete declaration (attributes, modifiers, keyword, name, body) exactly as
/// it appears in the document, so the corrector can produce a replacement without a syntax
/// tree of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// Where the declaration sits in its document
    pub location: Location,
    /// Declaration source text
    pub text: String,
    /// Byte offset of the `class` keyword within `text`
    pub keyword_offset: usize,
}

impl ClassDeclaration {
    /// Creates a declaration; `keyword_offset` is relative to `text`
    pub fn new(location: Location, text: impl Into<String>, keyword_offset: usize) -> Self {
        ClassDeclaration {
            location,
            text: text.into(),
            keyword_offset,
        }
    }

    /// The modifiers written in front of the `class` keyword.
    ///
    /// Attribute lists, comments and literals are skipped; only the bare words between them
    /// are returned.
    #[must_use]
    pub fn modifiers(&self) -> Vec<&str> {
        modifier_words(self.text.get(..self.keyword_offset).unwrap_or_default())
    }

    /// Returns true if the declaration carries the `partial` modifier
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.modifiers().contains(&"partial")
    }
}

/// Splits a declaration head into the words outside of attributes, comments and literals
fn modifier_words(head: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut attribute_depth = 0usize;
    let mut word_start = None;
    let mut pos = 0;

    while let Some(ch) = head[pos..].chars().next() {
        let rest = &head[pos..];
        let skipped = if rest.starts_with("//") {
            Some(rest.find('\n').unwrap_or(rest.len()))
        } else if rest.starts_with("/*") {
            Some(rest[2..].find("*/").map_or(rest.len(), |end| end + 4))
        } else if ch == '"' || ch == '\'' {
            Some(literal_len(rest, ch))
        } else {
            None
        };

        let in_word =
            skipped.is_none() && attribute_depth == 0 && (ch.is_alphanumeric() || ch == '_');
        if !in_word {
            if let Some(start) = word_start.take() {
                words.push(&head[start..pos]);
            }
        }

        if let Some(len) = skipped {
            pos += len;
            continue;
        }

        match ch {
            '[' => attribute_depth += 1,
            ']' => attribute_depth = attribute_depth.saturating_sub(1),
            _ if in_word && word_start.is_none() => word_start = Some(pos),
            _ => {}
        }
        pos += ch.len_utf8();
    }

    if let Some(start) = word_start {
        words.push(&head[start..]);
    }
    words
}

/// Byte length of the string or char literal at the start of `rest`, quotes included
fn literal_len(rest: &str, quote: char) -> usize {
    let mut escaped = false;
    for (offset, ch) in rest.char_indices().skip(1) {
        match ch {
            '\\' if !escaped => escaped = true,
            c if c == quote && !escaped => return offset + c.len_utf8(),
            _ => escaped = false,
        }
    }
    rest.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = SourceSpan::new(10, 5);
        assert!(span.contains(10));
        assert!(span.contains(14));
        assert!(!span.contains(15));
        assert!(!span.contains(9));
        assert_eq!(span.end(), 15);
    }

    #[test]
    fn test_declaration_modifiers() {
        let text = "[InheritConstructors]\n    public sealed class Widget : Base { }";
        let offset = text.find("class").unwrap();
        let decl = ClassDeclaration::new(
            Location::new("a.cs", SourceSpan::new(0, text.len())),
            text,
            offset,
        );

        assert_eq!(decl.modifiers(), vec!["public", "sealed"]);
        assert!(!decl.is_partial());
    }

    #[test]
    fn test_declaration_partial() {
        let text = "internal partial class Widget { }";
        let decl = ClassDeclaration::new(
            Location::new("a.cs", SourceSpan::new(0, text.len())),
            text,
            text.find("class").unwrap(),
        );
        assert!(decl.is_partial());
    }

    #[test]
    fn test_declaration_modifiers_skip_trivia() {
        let text = "[InheritConstructors]\n    // TODO make partial\n    /* partial */ public class Widget : Base { }";
        let decl = ClassDeclaration::new(
            Location::new("a.cs", SourceSpan::new(0, text.len())),
            text,
            text.find("class").unwrap(),
        );
        assert_eq!(decl.modifiers(), vec!["public"]);
        assert!(!decl.is_partial());
    }

    #[test]
    fn test_declaration_modifiers_skip_attribute_arguments() {
        let text = "[Obsolete(\"] partial\"), InheritConstructors] internal partial class Widget { }";
        let decl = ClassDeclaration::new(
            Location::new("a.cs", SourceSpan::new(0, text.len())),
            text,
            text.find("class").unwrap(),
        );
        assert_eq!(decl.modifiers(), vec!["internal", "partial"]);
        assert!(decl.is_partial());
    }
}
