use crate::{
    inherit::SignatureSet,
    model::{ClassModel, ConstructorSymbolRc},
};

/// Selects the base constructors that `implemented` does not already cover.
///
/// A base constructor is inheritable when it is not private and its signature is absent from
/// the derived class's [`SignatureSet`]. The result keeps base-declaration order. An empty
/// result - no base constructors, all excluded, or no base class at all - is a normal outcome.
#[must_use]
pub fn select_inheritable(
    base_constructors: &[ConstructorSymbolRc],
    implemented: &SignatureSet,
) -> Vec<ConstructorSymbolRc> {
    base_constructors
        .iter()
        .filter(|ctor| !ctor.accessibility.is_private() && !implemented.implements(ctor))
        .cloned()
        .collect()
}

/// Runs the signature set and the selector for one class.
///
/// Root types yield an empty sequence.
#[must_use]
pub fn inheritable_constructors(class: &ClassModel) -> Vec<ConstructorSymbolRc> {
    let implemented =
        SignatureSet::from_constructors(class.constructors.iter().map(|ctor| &**ctor));
    select_inheritable(class.base_constructors(), &implemented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::Accessibility,
        test::factories::{base_class, derived_class, int, param, string},
    };

    #[test]
    fn test_select_skips_private() {
        let base = base_class(vec![
            (Accessibility::Private, vec![param("a", int())]),
            (Accessibility::Public, vec![param("s", string())]),
        ]);
        let derived = derived_class(base, vec![]);

        let selected = inheritable_constructors(&derived);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].accessibility, Accessibility::Public);
    }

    #[test]
    fn test_select_skips_implemented() {
        let base = base_class(vec![
            (Accessibility::Public, vec![param("a", int())]),
            (Accessibility::Protected, vec![param("a", int()), param("b", int())]),
        ]);
        let derived = derived_class(base, vec![(Accessibility::Internal, vec![param("x", int())])]);

        let selected = inheritable_constructors(&derived);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].params.len(), 2);
    }

    #[test]
    fn test_select_preserves_base_order() {
        let base = base_class(vec![
            (Accessibility::Protected, vec![param("b", string())]),
            (Accessibility::Public, vec![]),
            (Accessibility::Internal, vec![param("a", int())]),
        ]);
        let derived = derived_class(base.clone(), vec![]);

        let selected = inheritable_constructors(&derived);
        let order: Vec<_> = selected.iter().map(|c| c.accessibility).collect();
        assert_eq!(
            order,
            vec![
                Accessibility::Protected,
                Accessibility::Public,
                Accessibility::Internal
            ]
        );
        assert!(selected
            .iter()
            .zip(base.constructors.iter())
            .all(|(a, b)| std::sync::Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_select_empty_cases() {
        let empty_base = base_class(vec![]);
        assert!(inheritable_constructors(&derived_class(empty_base, vec![])).is_empty());

        let private_only = base_class(vec![(Accessibility::Private, vec![])]);
        assert!(inheritable_constructors(&derived_class(private_only, vec![])).is_empty());

        let root = crate::model::ClassModel::new(crate::model::SymbolId::new(9), "App", "Root");
        assert!(inheritable_constructors(&root).is_empty());
    }
}
