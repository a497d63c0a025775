use std::time::Duration;

use marten_fol::runner::find_inconsistent;

fn set(formulas: &[&str]) -> Vec<String> {
    formulas.iter().map(|s| s.to_string()).collect()
}

mod runner {
    use super::*;

    #[test]
    fn complementary_units() {
        let sets = vec![set(&["(P a)", "(NOT (P a))"])];
        assert_eq!(find_inconsistent(&sets, Duration::from_secs(5)), vec![0]);
    }

    #[test]
    fn modus_ponens() {
        let sets = vec![set(&[
            "(FORALL x (IMPLIES (P x) (Q x)))",
            "(P a)",
            "(NOT (Q a))",
        ])];
        assert_eq!(find_inconsistent(&sets, Duration::from_secs(5)), vec![0]);
    }

    #[test]
    fn satisfiable_pair() {
        let sets = vec![set(&["(P a)", "(Q b)"])];
        assert_eq!(
            find_inconsistent(&sets, Duration::from_secs(5)),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn mixed_sets() {
        let sets = vec![
            set(&["(FORALL x (P x))", "(NOT (P a))"]),
            set(&["(P a)", "(P b)"]),
        ];
        assert_eq!(find_inconsistent(&sets, Duration::from_secs(5)), vec![0]);
    }

    #[test]
    fn symmetric_relation() {
        let sets = vec![set(&[
            "(FORALL x (FORALL y (IMPLIES (R x y) (R y x))))",
            "(R a b)",
            "(NOT (R b a))",
        ])];
        assert_eq!(find_inconsistent(&sets, Duration::from_secs(5)), vec![0]);
    }

    #[test]
    fn quantifier_order_consistent() {
        // Everyone loves someone; no one is loved by everyone. Consistent, and
        // saturation closes quickly: the occurs check blocks the only candidate pair.
        let sets = vec![set(&[
            "(FORALL x (EXISTS y (loves x y)))",
            "(NOT (EXISTS y (FORALL x (loves x y))))",
        ])];
        assert_eq!(
            find_inconsistent(&sets, Duration::from_secs(5)),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn ascending_indices() {
        let sets = vec![
            set(&["(P a)", "(NOT (P a))"]),
            set(&["(P a)"]),
            set(&["(CONTR)"]),
            set(&["(Q b)", "(NOT (Q a))"]),
            set(&["(FORALL x (P x))", "(NOT (P c))"]),
        ];
        assert_eq!(
            find_inconsistent(&sets, Duration::from_secs(10)),
            vec![0, 2, 4]
        );
    }

    #[test]
    fn no_sets() {
        assert_eq!(
            find_inconsistent(&[], Duration::from_secs(1)),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn malformed_set_skipped() {
        let sets = vec![
            set(&["(P a", "(NOT (P a))"]),
            set(&["(P a)", "(NOT (P a))"]),
        ];
        assert_eq!(find_inconsistent(&sets, Duration::from_secs(5)), vec![1]);
    }

    #[test]
    fn diverging_set_times_out() {
        // The first set saturates without end; the second is a quick refutation.
        let sets = vec![
            set(&["(FORALL x (IMPLIES (P x) (P (f x))))", "(P a)"]),
            set(&["(P a)", "(NOT (P a))"]),
        ];
        assert_eq!(find_inconsistent(&sets, Duration::from_secs(2)), vec![1]);
    }
}
