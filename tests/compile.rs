use marten_fol::builder::parse::parse_formula;
use marten_fol::compile::{
    bind::bind_terms,
    compile,
    distribute::distribute,
    normalize::normalize,
    prenex::prenex,
    skolemize::{skolemize, strip_universals},
    standardize::standardize,
};
use marten_fol::context::NameSupply;
use marten_fol::structures::{formula::Formula, symbol::Symbol, term::Term};

/// The formula after every pass up to distribution, with a fresh name supply.
fn matrix_of(source: &str) -> Formula {
    let mut names = NameSupply::default();
    let formula = standardize(normalize(bind_terms(parse_formula(source).expect("parses"))), &mut names);
    strip_universals(skolemize(prenex(formula))).1
}

/// The names bound by quantifiers of `formula`, in walk order.
fn binders(formula: &Formula, names: &mut Vec<Symbol>) {
    match formula {
        Formula::Forall(v, g) | Formula::Exists(v, g) => {
            names.push(v.clone());
            binders(g, names);
        }
        Formula::Negation(g) => binders(g, names),
        Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) => {
            binders(a, names);
            binders(b, names);
        }
        Formula::Predicate(..) | Formula::Contradiction => {}
    }
}

/// Whether any existential quantifier remains in `formula`.
fn has_existential(formula: &Formula) -> bool {
    match formula {
        Formula::Exists(..) => true,
        Formula::Forall(_, g) | Formula::Negation(g) => has_existential(g),
        Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) => {
            has_existential(a) || has_existential(b)
        }
        Formula::Predicate(..) | Formula::Contradiction => false,
    }
}

mod parsing {
    use super::*;

    #[test]
    fn quantified_predicate() {
        let formula = parse_formula("(FORALL x (p x y))").expect("parses");

        let expected = Formula::forall(
            "x",
            Formula::predicate("p", vec![Term::variable("x"), Term::variable("y")]),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn nested_terms() {
        let formula = parse_formula("(p (f x (g y) z))").expect("parses");

        let inner = Term::application(
            "f",
            vec![
                Term::variable("x"),
                Term::application("g", vec![Term::variable("y")]),
                Term::variable("z"),
            ],
        );
        assert_eq!(formula, Formula::predicate("p", vec![inner]));
    }

    #[test]
    fn bare_nullary_predicate() {
        assert_eq!(
            parse_formula("p"),
            Ok(Formula::predicate("p", Vec::default()))
        );
    }

    #[test]
    fn connectives() {
        let formula = parse_formula("(IMPLIES (p) (EXISTS y (q y)))").expect("parses");

        let expected = Formula::implies(
            Formula::predicate("p", Vec::default()),
            Formula::exists("y", Formula::predicate("q", vec![Term::variable("y")])),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn rejections() {
        assert!(parse_formula("").is_err());
        assert!(parse_formula("(").is_err());
        assert!(parse_formula("((p))").is_err());
        assert!(parse_formula("(FORALL (p x))").is_err());
        assert!(parse_formula("(p a))").is_err());
        assert!(parse_formula("(p -)").is_err());
    }
}

mod binding {
    use super::*;

    #[test]
    fn free_symbols_become_constants() {
        let formula = bind_terms(parse_formula("(p a)").expect("parses"));

        assert_eq!(
            formula,
            Formula::predicate("p", vec![Term::constant("a")])
        );
    }

    #[test]
    fn bound_symbols_stay_variables() {
        let formula = bind_terms(parse_formula("(FORALL x (p x a))").expect("parses"));

        let expected = Formula::forall(
            "x",
            Formula::predicate("p", vec![Term::variable("x"), Term::constant("a")]),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn scope_ends_with_quantifier() {
        let formula =
            bind_terms(parse_formula("(AND (FORALL x (p x)) (q x))").expect("parses"));

        let expected = Formula::and(
            Formula::forall("x", Formula::predicate("p", vec![Term::variable("x")])),
            Formula::predicate("q", vec![Term::constant("x")]),
        );
        assert_eq!(formula, expected);
    }
}

mod normalization {
    use super::*;

    #[test]
    fn idempotent() {
        let sources = [
            "(NOT (AND (p) (NOT (q))))",
            "(IMPLIES (FORALL x (p x)) (EXISTS y (q y)))",
            "(NOT (NOT (NOT (p))))",
            "(NOT (EXISTS x (IMPLIES (p x) (CONTR))))",
        ];

        for source in sources {
            let once = normalize(bind_terms(parse_formula(source).expect("parses")));
            assert_eq!(normalize(once.clone()), once);
        }
    }

    #[test]
    fn conditional_eliminated() {
        let formula = normalize(parse_formula("(IMPLIES (p) (q))").expect("parses"));

        let expected = Formula::or(
            Formula::negation(Formula::predicate("p", Vec::default())),
            Formula::predicate("q", Vec::default()),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn negation_pushed_to_atoms() {
        let formula = normalize(parse_formula("(NOT (OR (p) (NOT (q))))").expect("parses"));

        let expected = Formula::and(
            Formula::negation(Formula::predicate("p", Vec::default())),
            Formula::predicate("q", Vec::default()),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn quantifiers_dualized() {
        let formula = normalize(parse_formula("(NOT (FORALL x (p x)))").expect("parses"));

        let expected = Formula::exists(
            "x",
            Formula::negation(Formula::predicate("p", vec![Term::variable("x")])),
        );
        assert_eq!(formula, expected);
    }
}

mod standardization {
    use super::*;

    #[test]
    fn rebinding_renamed() {
        let mut names = NameSupply::default();

        let formula = parse_formula("(AND (FORALL x (p x)) (FORALL x (q x)))").expect("parses");
        let formula = standardize(bind_terms(formula), &mut names);

        let mut bound = Vec::default();
        binders(&formula, &mut bound);

        assert_eq!(bound, vec!["x".to_string(), "-1".to_string()]);
    }

    #[test]
    fn renaming_followed_by_occurrences() {
        let mut names = NameSupply::default();

        let formula = parse_formula("(AND (EXISTS x (p x)) (FORALL x (q x)))").expect("parses");
        let formula = standardize(bind_terms(formula), &mut names);

        let expected = Formula::and(
            Formula::exists("x", Formula::predicate("p", vec![Term::variable("x")])),
            Formula::forall("-1", Formula::predicate("q", vec![Term::variable("-1")])),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn unique_across_formulas() {
        let mut names = NameSupply::default();

        let first = parse_formula("(FORALL x (p x))").expect("parses");
        let first = standardize(bind_terms(first), &mut names);

        let second = parse_formula("(FORALL x (NOT (p x)))").expect("parses");
        let second = standardize(bind_terms(second), &mut names);

        let mut bound = Vec::default();
        binders(&first, &mut bound);
        binders(&second, &mut bound);

        assert_eq!(bound, vec!["x".to_string(), "-1".to_string()]);
    }

    #[test]
    fn shadowing_renamed() {
        let mut names = NameSupply::default();

        let formula = parse_formula("(FORALL x (EXISTS x (p x)))").expect("parses");
        let formula = standardize(bind_terms(formula), &mut names);

        let expected = Formula::forall(
            "x",
            Formula::exists("-1", Formula::predicate("p", vec![Term::variable("-1")])),
        );
        assert_eq!(formula, expected);
    }
}

mod prenexing {
    use super::*;

    #[test]
    fn prefixes_pulled_in_order() {
        let mut names = NameSupply::default();

        let formula = parse_formula("(OR (FORALL x (p x)) (EXISTS y (q y)))").expect("parses");
        let formula = prenex(standardize(bind_terms(formula), &mut names));

        let expected = Formula::forall(
            "x",
            Formula::exists(
                "y",
                Formula::or(
                    Formula::predicate("p", vec![Term::variable("x")]),
                    Formula::predicate("q", vec![Term::variable("y")]),
                ),
            ),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn no_existential_after_skolemization() {
        let sources = [
            "(EXISTS y (p y))",
            "(FORALL x (EXISTS y (loves x y)))",
            "(NOT (EXISTS y (FORALL x (loves x y))))",
            "(AND (EXISTS x (p x)) (EXISTS y (q y)))",
        ];

        for source in sources {
            let mut names = NameSupply::default();
            let formula =
                normalize(bind_terms(parse_formula(source).expect("parses")));
            let formula = skolemize(prenex(standardize(formula, &mut names)));

            assert!(!has_existential(&formula), "existential in {source}");
        }
    }
}

mod skolemization {
    use super::*;

    #[test]
    fn skolem_function_of_enclosing_universals() {
        let matrix = matrix_of("(FORALL x (EXISTS y (loves x y)))");

        let expected = Formula::predicate(
            "loves",
            vec![
                Term::variable("x"),
                Term::application("y", vec![Term::variable("x")]),
            ],
        );
        assert_eq!(matrix, expected);
    }

    #[test]
    fn skolem_constant_without_universals() {
        let matrix = matrix_of("(EXISTS y (p y))");

        assert_eq!(
            matrix,
            Formula::predicate("p", vec![Term::constant("y")])
        );
    }

    #[test]
    fn universal_prefix_stripped() {
        let mut names = NameSupply::default();
        let formula = parse_formula("(FORALL x (FORALL y (r x y)))").expect("parses");
        let formula = skolemize(prenex(standardize(bind_terms(formula), &mut names)));

        let (universals, matrix) = strip_universals(formula);

        assert_eq!(universals, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(
            matrix,
            Formula::predicate("r", vec![Term::variable("x"), Term::variable("y")])
        );
    }
}

mod distribution {
    use super::*;

    #[test]
    fn conjunction_unions() {
        let clauses = distribute(matrix_of("(AND (OR (p a) (q a)) (r a))")).expect("distributes");

        assert_eq!(clauses.len(), 2);
        let sizes: Vec<usize> = clauses.iter().map(|clause| clause.size()).collect();
        assert!(sizes.contains(&1));
        assert!(sizes.contains(&2));
    }

    #[test]
    fn disjunction_distributes() {
        let clauses =
            distribute(matrix_of("(OR (AND (p) (q)) (AND (r) (s)))")).expect("distributes");

        // {p r}, {p s}, {q r}, {q s}
        assert_eq!(clauses.len(), 4);
        assert!(clauses.iter().all(|clause| clause.size() == 2));
    }

    #[test]
    fn contradiction_is_the_empty_clause() {
        let clauses = distribute(matrix_of("(CONTR)")).expect("distributes");

        assert_eq!(clauses.len(), 1);
        assert!(clauses.iter().all(|clause| clause.is_empty()));
    }

    #[test]
    fn negated_contradiction_is_no_clause() {
        let clauses = distribute(matrix_of("(NOT (CONTR))")).expect("distributes");
        assert!(clauses.is_empty());
    }
}

mod pipeline {
    use super::*;

    #[test]
    fn compiled_clauses() {
        let mut names = NameSupply::default();

        let formula = parse_formula("(FORALL x (IMPLIES (p x) (q x)))").expect("parses");
        let clauses = compile(formula, &mut names).expect("compiles");

        assert_eq!(clauses.len(), 1);
        assert!(clauses.iter().all(|clause| clause.size() == 2));
    }

    #[test]
    fn variables_are_clause_local_universals() {
        let mut names = NameSupply::default();

        let formula = parse_formula("(FORALL x (p x a))").expect("parses");
        let clauses = compile(formula, &mut names).expect("compiles");

        let clause = clauses.first().expect("a clause");
        assert_eq!(clause.variables(), vec!["x".to_string()]);
    }
}
