//! End-to-end tests for constructor inheritance.
//!
//! These tests drive the public API the way a host would: classes are registered in a
//! [`ModelRegistry`], the generator runs over the whole model, and diagnostics are fed back
//! into the corrector.

use std::sync::Arc;

use inheritor::prelude::*;
use inheritor::validation::{FIX_TITLE, MUST_BE_PARTIAL_ID};

const PROGRAM: &str = "\
using System;
using Constructor.Inheritor;

namespace App
{
    public class Base
    {
        public Base(int a) { }
        protected Base(int a, int b) { }
    }

    [InheritConstructors]
    public partial class Complete : Base
    {
    }

    [InheritConstructors]
    public class Pending : Base
    {
    }
}
";

fn int() -> ParameterType {
    ParameterType::named("int")
}

/// Base with a public `(int)` and a protected `(int, int)` constructor
fn scenario_base(id: u32) -> ClassModel {
    ClassModel::new(SymbolId::new(id), "App", "Base")
        .with_constructor(Accessibility::Public, vec![Parameter::new("a", int())])
        .with_constructor(
            Accessibility::Protected,
            vec![Parameter::new("a", int()), Parameter::new("b", int())],
        )
}

fn derived(id: u32, name: &str, base: &ClassModelRc) -> ClassModel {
    ClassModel::new(SymbolId::new(id), "App", name)
        .with_base(Arc::clone(base))
        .marked()
        .extensible()
        .with_location(Location::new("Program.cs", SourceSpan::new(0, 1)))
}

fn synthesize(class: &ClassModel) -> Option<GeneratedSource> {
    InheritedConstructorGenerator::default()
        .generate_for_class(class)
        .unwrap()
}

#[test]
fn scenario_inherit_all_constructors() {
    let base = Arc::new(scenario_base(1));
    let source = synthesize(&derived(2, "Derived", &base)).unwrap();

    assert_eq!(source.hint_name, "App.Derived.Constructors.cs");
    assert!(source.text.starts_with("// <auto-generated/>\n"));
    assert!(source.text.contains("partial class Derived"));
    assert!(source.text.contains("public Derived(int a)"));
    assert!(source.text.contains(": base(a) {}"));
    assert!(source.text.contains("protected Derived(int a, int b)"));
    assert!(source.text.contains(": base(a, b) {}"));
    assert!(
        source.text.find("public Derived").unwrap()
            < source.text.find("protected Derived").unwrap()
    );
}

#[test]
fn scenario_skip_already_declared_constructor() {
    let base = Arc::new(scenario_base(1));
    // Parameter names differ from the base; only types and modes count
    let class = derived(2, "Derived", &base)
        .with_constructor(Accessibility::Private, vec![Parameter::new("other", int())]);

    let source = synthesize(&class).unwrap();
    assert!(!source.text.contains("Derived(int a)\n"));
    assert!(source.text.contains("protected Derived(int a, int b)"));
    assert_eq!(source.text.matches(": base(").count(), 1);
}

#[test]
fn scenario_passing_mode_distinguishes_signatures() {
    let base = Arc::new(
        ClassModel::new(SymbolId::new(1), "App", "Base").with_constructor(
            Accessibility::Public,
            vec![Parameter::new("value", int()).with_mode(PassingMode::ByReference)],
        ),
    );
    let class = derived(2, "Derived", &base)
        .with_constructor(Accessibility::Public, vec![Parameter::new("value", int())]);

    let source = synthesize(&class).unwrap();
    assert!(source.text.contains("public Derived(ref int value)"));
    assert!(source.text.contains(": base(ref value) {}"));
}

#[test]
fn scenario_private_only_base() {
    let registry = ModelRegistry::new();
    let base = registry.add_class(
        ClassModel::new(SymbolId::new(1), "App", "Base")
            .with_constructor(Accessibility::Private, vec![Parameter::new("a", int())]),
    );
    let class = registry.add_class(derived(2, "Derived", &base));

    assert!(inheritable_constructors(&class).is_empty());

    let output = InheritedConstructorGenerator::new(InheritorConfig::generation_only())
        .run(&registry, &CancellationToken::new())
        .unwrap();
    assert!(output.sources.is_empty());
    assert!(!output.diagnostics.has_any());
}

#[test]
fn generation_is_idempotent() {
    let base = Arc::new(scenario_base(1));
    let class = derived(2, "Derived", &base);

    let inherited = inheritable_constructors(&class);
    assert_eq!(inherited.len(), 2);

    // Feed the generated constructors back in as the class's own constructors
    let regenerated = inherited.iter().fold(class, |class, ctor| {
        class.with_constructor(ctor.accessibility, ctor.params.clone())
    });

    assert!(inheritable_constructors(&regenerated).is_empty());
    assert!(synthesize(&regenerated).is_none());
}

#[test]
fn scenario_not_partial_is_reported_and_fixed() -> Result<()> {
    let registry = ModelRegistry::new();
    let base = registry.add_class(scenario_base(1));

    for (id, name, extensible) in [(2, "Complete", true), (3, "Pending", false)] {
        let decl = registry
            .declare_from_source("Program.cs", PROGRAM, name)
            .unwrap();
        let name_start = decl.location.span.start + decl.keyword_offset + "class ".len();
        let mut class = ClassModel::new(SymbolId::new(id), "App", name)
            .with_base(Arc::clone(&base))
            .marked()
            .with_location(Location::new(
                "Program.cs",
                SourceSpan::new(name_start, name.len()),
            ));
        class.is_extensible = extensible;
        registry.add_class(class);
    }

    let output = InheritedConstructorGenerator::default().run(&registry, &CancellationToken::new())?;

    // Marker, then the only extensible class
    assert_eq!(output.sources.len(), 2);
    assert_eq!(output.sources[0].hint_name, "InheritConstructorsAttribute");
    assert_eq!(output.sources[1].hint_name, "App.Complete.Constructors.cs");

    assert_eq!(output.diagnostics.count(), 1);
    let diagnostic = output.diagnostics.sorted()[0].clone();
    assert_eq!(diagnostic.id(), MUST_BE_PARTIAL_ID);
    assert_eq!(diagnostic.severity(), DiagnosticSeverity::Error);
    assert_eq!(
        diagnostic.message,
        "Add 'partial' modifier to Pending to allow automatic parent constructors inheritance"
    );

    let corrector = ExtensibilityCorrector::new();
    assert!(corrector.can_fix(&diagnostic));
    assert_eq!(FIX_TITLE, "Make class partial");

    let corrected = corrector.correct_diagnostic(&registry, &diagnostic)?;
    assert_eq!(
        corrected.text,
        "[InheritConstructors]\n    public partial class Pending : Base\n    {\n    }"
    );

    let fixed = corrector.fix_all(&registry, "Program.cs", PROGRAM, &[diagnostic])?;
    assert_eq!(
        fixed,
        PROGRAM.replace("public class Pending", "public partial class Pending")
    );
    Ok(())
}

#[test]
fn parallel_and_sequential_runs_agree() -> Result<()> {
    let registry = ModelRegistry::new();
    let base = registry.add_class(scenario_base(1));
    for id in 2..40 {
        let name = format!("Derived{id}");
        let mut class = derived(id, &name, &base);
        if id % 3 == 0 {
            class = class.with_constructor(Accessibility::Public, vec![Parameter::new("x", int())]);
        }
        if id % 7 == 0 {
            class.is_extensible = false;
        }
        registry.add_class(class);
    }

    let cancel = CancellationToken::new();
    let parallel = InheritedConstructorGenerator::default().run(&registry, &cancel)?;
    let sequential =
        InheritedConstructorGenerator::new(InheritorConfig::sequential()).run(&registry, &cancel)?;

    assert_eq!(parallel.sources, sequential.sources);
    assert_eq!(parallel.diagnostics.count(), sequential.diagnostics.count());
    assert_eq!(parallel.diagnostics.sorted(), sequential.diagnostics.sorted());
    assert_eq!(parallel.diagnostics.count(), 5);
    Ok(())
}
