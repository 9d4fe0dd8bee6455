use sleuth::{config::FormulaConfig, formula::Formula, types::err::FormulaError};

mod basic {
    use super::*;

    #[test]
    fn empty_formula() {
        let hand = Formula::default();

        assert_eq!(hand.branch_count(), 0);
        assert!(!hand.ever_asserted());
        assert!(!hand.is_collapsed());

        assert!(hand.common_elements().is_empty());
        assert!(hand.pos_elements().is_empty());
        assert!(hand.neg_elements().is_empty());
        assert!(hand.possibles().is_empty());
        assert!(!hand.contains_any(&[0, 1, 2]));
    }

    #[test]
    fn one_disjunction() {
        let mut hand = Formula::default();
        assert!(hand.assert_disjunction(&[1, 2, 3]).is_ok());

        assert_eq!(hand.branch_count(), 3);
        assert!(hand.ever_asserted());

        // Nothing is settled, everything is possible.
        assert!(hand.pos_elements().is_empty());
        assert_eq!(hand.possibles(), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn singleton_disjunction_resolves() {
        let mut hand = Formula::default();
        assert!(hand.assert_disjunction(&[4]).is_ok());

        assert_eq!(hand.pos_elements().into_iter().collect::<Vec<_>>(), vec![4]);
        assert!(hand.possibles().is_empty());
        assert!(hand.contains_any(&[4, 9]));
        assert!(!hand.contains_any(&[9]));
    }

    #[test]
    fn one_negation() {
        let mut hand = Formula::default();
        assert!(hand.assert_negation(&[1, 2]).is_ok());

        assert_eq!(hand.branch_count(), 1);
        assert_eq!(
            hand.neg_elements().into_iter().collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(hand.pos_elements().is_empty());
        assert!(hand.possibles().is_empty());
    }

    #[test]
    fn contradiction_collapses() {
        let mut hand = Formula::default();
        assert!(hand.assert_disjunction(&[7]).is_ok());
        assert!(hand.assert_negation(&[7]).is_ok());

        assert_eq!(hand.branch_count(), 0);
        assert!(hand.is_collapsed());

        // Indistinguishable from the initial state by the queries alone.
        assert!(hand.common_elements().is_empty());
        assert!(hand.possibles().is_empty());
        assert!(!hand.contains_any(&[7]));
    }

    #[test]
    fn idempotence_boundary() {
        let mut hand = Formula::default();
        assert!(hand.assert_disjunction(&[4]).is_ok());
        assert!(hand.pos_elements().contains(&4));

        // A disjunction naming an already settled item neither unsettles it nor collapses.
        assert!(hand.assert_disjunction(&[4, 9]).is_ok());
        assert!(hand.pos_elements().contains(&4));
        assert!(!hand.is_collapsed());
    }

    #[test]
    fn repeated_disjunction_merges() {
        let mut hand = Formula::default();
        assert!(hand.assert_disjunction(&[1, 2]).is_ok());
        assert!(hand.assert_disjunction(&[1, 2]).is_ok());

        // Distribution leaves {1}, {2}, and {1 2}, and the smaller branches are dropped in
        // favour of the larger, as the reference tracker does.
        assert_eq!(hand.branch_count(), 1);
        let held = hand.pos_elements();
        assert!(held.contains(&1));
        assert!(held.contains(&2));
    }

    #[test]
    fn monotonic_knowledge() {
        let mut hand = Formula::default();
        assert!(hand.assert_disjunction(&[1, 2]).is_ok());
        assert!(hand.assert_negation(&[2]).is_ok());
        assert!(hand.pos_elements().contains(&1));

        // Consistent further evidence never unsettles a settled item.
        assert!(hand.assert_disjunction(&[3, 4]).is_ok());
        assert!(hand.pos_elements().contains(&1));

        assert!(hand.assert_negation(&[4]).is_ok());
        assert!(hand.pos_elements().contains(&1));
        assert!(hand.pos_elements().contains(&3));
        assert!(hand.neg_elements().contains(&2));
    }
}

mod errs {
    use super::*;

    #[test]
    fn empty_assertions() {
        let mut hand = Formula::default();

        assert_eq!(hand.assert_disjunction(&[]), Err(FormulaError::EmptyAssertion));
        assert_eq!(hand.assert_negation(&[]), Err(FormulaError::EmptyAssertion));

        // A failed assertion is not evidence.
        assert!(!hand.ever_asserted());
        assert_eq!(hand.branch_count(), 0);
    }

    #[test]
    fn branch_bound() {
        let mut hand = Formula::from_config(FormulaConfig { branch_bound: 4 });
        assert!(hand.assert_disjunction(&[1, 2, 3]).is_ok());

        assert_eq!(
            hand.assert_disjunction(&[4, 5]),
            Err(FormulaError::BranchBound {
                required: 6,
                bound: 4
            })
        );

        // The formula is unchanged by the failed assertion.
        assert_eq!(hand.branch_count(), 3);
        assert_eq!(hand.possibles(), vec![vec![1], vec![2], vec![3]]);
    }
}

mod structures {
    use sleuth::structures::{
        branch::{Branch, CBranch},
        literal::{CLiteral, Literal},
    };

    use super::*;

    #[test]
    fn literal_order_and_negation() {
        let literal = CLiteral::new(5, true);

        assert_eq!(literal.item(), 5);
        assert!(literal.polarity());
        assert_eq!(literal.negate(), CLiteral::new(5, false));

        // Items before polarity, false before true.
        assert!(CLiteral::new(5, false) < literal);
        assert!(literal < CLiteral::new(6, false));
    }

    #[test]
    fn resident_branches() {
        let mut hand = Formula::default();
        assert!(hand.assert_disjunction(&[1]).is_ok());
        assert!(hand.assert_negation(&[2]).is_ok());

        let resident: Vec<&CBranch> = hand.branches().collect();
        assert_eq!(resident.len(), 1);

        let expected: CBranch = vec![CLiteral::new(2, false), CLiteral::new(1, true)].canonical();
        assert_eq!(resident[0], &expected);

        assert_eq!(resident[0].size(), 2);
        assert!(!resident[0].contradictory());
        assert_eq!(format!("{}", resident[0]), "[1 -2]");
    }
}
