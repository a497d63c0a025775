use marten_fol::structures::{substitution::Substitution, term::Term};
use marten_fol::unification::{find_disagreement, occurs, unify, Disagreement};

fn var(name: &str) -> Term {
    Term::variable(name)
}

fn con(name: &str) -> Term {
    Term::constant(name)
}

fn app(symbol: &str, args: Vec<Term>) -> Term {
    Term::application(symbol, args)
}

mod disagreements {
    use super::*;

    #[test]
    fn equal_terms() {
        let term = app("f", vec![var("x"), con("a")]);
        assert_eq!(find_disagreement(&term, &term), Disagreement::Equal);
    }

    #[test]
    fn conflicting_heads() {
        assert_eq!(
            find_disagreement(&con("a"), &con("b")),
            Disagreement::Conflict
        );
        assert_eq!(
            find_disagreement(&app("f", vec![con("a")]), &app("g", vec![con("a")])),
            Disagreement::Conflict
        );
    }

    #[test]
    fn conflicting_arity() {
        assert_eq!(
            find_disagreement(
                &app("f", vec![con("a")]),
                &app("f", vec![con("a"), con("b")])
            ),
            Disagreement::Conflict
        );
    }

    #[test]
    fn variable_first() {
        // The variable side leads the pair, whichever side it appears on.
        assert_eq!(
            find_disagreement(&app("f", vec![con("a"), var("x")]), &app("f", vec![con("a"), con("b")])),
            Disagreement::Pair("x".to_string(), con("b"))
        );
        assert_eq!(
            find_disagreement(&app("f", vec![con("a"), con("b")]), &app("f", vec![con("a"), var("x")])),
            Disagreement::Pair("x".to_string(), con("b"))
        );
    }

    #[test]
    fn first_pair_leftmost() {
        assert_eq!(
            find_disagreement(&app("f", vec![var("x"), var("y")]), &app("f", vec![con("a"), con("b")])),
            Disagreement::Pair("x".to_string(), con("a"))
        );
    }
}

mod unifiers {
    use super::*;

    #[test]
    fn identical_terms_empty_unifier() {
        let term = app("f", vec![var("x"), con("a")]);

        let sigma = unify(&term, &term).expect("unifiable");
        assert!(sigma.is_empty());
    }

    #[test]
    fn empty_substitution_is_identity() {
        let term = app("f", vec![var("x"), app("g", vec![var("y")])]);
        assert_eq!(Substitution::default().apply(&term), term);
    }

    #[test]
    fn unifier_equalizes() {
        let left = app("f", vec![var("x"), con("b")]);
        let right = app("f", vec![con("a"), var("y")]);

        let sigma = unify(&left, &right).expect("unifiable");
        assert_eq!(sigma.apply(&left), sigma.apply(&right));
        assert_eq!(sigma.apply(&left), app("f", vec![con("a"), con("b")]));
    }

    #[test]
    fn unifier_idempotent() {
        // x must map to g(a), not g(y), for a single application to suffice.
        let left = app("f", vec![var("x"), var("y")]);
        let right = app("f", vec![app("g", vec![var("y")]), con("a")]);

        let sigma = unify(&left, &right).expect("unifiable");

        let once = sigma.apply(&left);
        assert_eq!(sigma.apply(&once), once);

        let once = sigma.apply(&right);
        assert_eq!(sigma.apply(&once), once);
    }

    #[test]
    fn variable_to_variable() {
        let sigma = unify(&var("x"), &var("y")).expect("unifiable");
        assert_eq!(sigma.len(), 1);
        assert_eq!(sigma.apply(&var("x")), sigma.apply(&var("y")));
    }

    #[test]
    fn occurs_check() {
        assert!(unify(&var("x"), &app("f", vec![var("x")])).is_none());
        assert!(unify(
            &app("f", vec![var("x")]),
            &app("f", vec![app("g", vec![var("x")])])
        )
        .is_none());
    }

    #[test]
    fn occurs_depth() {
        assert!(occurs(
            &"x".to_string(),
            &app("f", vec![app("g", vec![con("a"), var("x")])])
        ));
        assert!(!occurs(&"x".to_string(), &app("f", vec![var("y"), con("x")])));
    }

    #[test]
    fn conflicts_fail() {
        assert!(unify(&con("a"), &con("b")).is_none());
        assert!(unify(&app("f", vec![var("x")]), &app("g", vec![var("x")])).is_none());
    }

    #[test]
    fn nested_bindings() {
        // f(x, g(x)) with f(a, y): x ↦ a, then y ↦ g(a).
        let left = app("f", vec![var("x"), app("g", vec![var("x")])]);
        let right = app("f", vec![con("a"), var("y")]);

        let sigma = unify(&left, &right).expect("unifiable");
        assert_eq!(sigma.get(&"y".to_string()), Some(&app("g", vec![con("a")])));
        assert_eq!(sigma.apply(&left), sigma.apply(&right));
    }
}
