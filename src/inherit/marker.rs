//! The marker attribute that opts a class into constructor inheritance.
//!
//! The host injects this declaration into every compilation so user code can apply the
//! marker without referencing an extra assembly. The core itself never looks at attributes:
//! the host's adapter turns "carries the marker" into [`crate::model::ClassModel::is_marked`].

use crate::{config::InheritorConfig, inherit::GeneratedSource};

/// Renders the marker attribute declaration for the configured namespace and name.
///
/// The attribute is class-only, not inherited by derived classes and may be applied once.
#[must_use]
pub fn marker_source(config: &InheritorConfig) -> GeneratedSource {
    let pad = " ".repeat(config.indent);
    let text = format!(
        "using System;\n\
         namespace {namespace}\n\
         {{\n\
         {pad}[AttributeUsage(AttributeTargets.Class, Inherited = false, AllowMultiple = false)]\n\
         {pad}sealed class {name} : Attribute {{}}\n\
         }}\n",
        namespace = config.marker_namespace,
        name = config.marker_name,
    );

    GeneratedSource {
        hint_name: config.marker_name.clone(),
        text,
    }
}
