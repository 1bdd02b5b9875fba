//! End-to-end scenarios for the LP and QP game formulations.

use zerosum::domain::equilibrium::{balanced_strategy, optimal_strategy, SolveOptions};
use zerosum::domain::solver::{ClarabelSolver, HiGHSSolver};
use zerosum::domain::{Equilibrium, MatrixGame};
use zerosum::error::Error;

const EPS: f64 = 1e-5;

fn game(rows: &[&[f64]]) -> MatrixGame {
    MatrixGame::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

fn lp(game: &MatrixGame) -> Equilibrium {
    optimal_strategy(game, &HiGHSSolver::new(), &SolveOptions::default()).unwrap()
}

fn qp(game: &MatrixGame) -> Equilibrium {
    balanced_strategy(
        game,
        &HiGHSSolver::new(),
        &ClarabelSolver::new(),
        &SolveOptions::default(),
    )
    .unwrap()
}

fn assert_is_distribution(eq: &Equilibrium) {
    let sum: f64 = eq.strategy.probabilities().iter().sum();
    assert!((sum - 1.0).abs() < EPS, "probabilities sum to {sum}");
    for &p in eq.strategy.probabilities() {
        assert!(p >= -EPS, "negative probability {p}");
    }
}

#[test]
fn lp_minimax_guarantee_holds_for_assorted_matrices() {
    let matrices: Vec<Vec<Vec<f64>>> = vec![
        vec![vec![5.0]],
        vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
        vec![vec![3.0, 1.0], vec![0.0, 2.0]],
        vec![vec![2.0, -1.0, 0.5], vec![-3.0, 4.0, 1.0], vec![0.0, 0.0, 0.0]],
        vec![
            vec![0.0, -3.0, 2.0],
            vec![0.0, 1.0, -4.0],
            vec![0.0, -1.0, 1.0],
        ],
    ];
    for rows in matrices {
        let game = MatrixGame::from_rows(rows.clone()).unwrap();
        let eq = lp(&game);
        assert_is_distribution(&eq);
        assert!(
            game.security_level(&eq.strategy) >= eq.value - EPS,
            "minimax guarantee violated for {rows:?}: secures {} < value {}",
            game.security_level(&eq.strategy),
            eq.value
        );
    }
}

#[test]
fn trivial_one_by_one_game() {
    let g = game(&[&[5.0]]);
    let eq = lp(&g);
    assert_eq!(eq.strategy.probabilities(), &[1.0]);
    assert!((eq.value - 5.0).abs() < EPS);
}

#[test]
fn matching_pennies_is_an_even_coin_flip() {
    let g = game(&[&[1.0, -1.0], &[-1.0, 1.0]]);
    let eq = lp(&g);
    assert!((eq.strategy.prob(0) - 0.5).abs() < EPS);
    assert!((eq.strategy.prob(1) - 0.5).abs() < EPS);
    assert!(eq.value.abs() < EPS);
}

#[test]
fn skew_game_with_weakly_dominant_row() {
    // Row 0 weakly dominates row 1, so the equilibrium is pure.
    let g = game(&[&[0.0, 1.0], &[-1.0, 0.0]]);
    let eq = lp(&g);
    assert!((eq.strategy.prob(0) - 1.0).abs() < EPS);
    assert!(eq.value.abs() < EPS);
}

#[test]
fn dominance_solvable_game_has_mixed_equilibrium() {
    // Neither row dominates; the correct row equilibrium mixes evenly and
    // guarantees 1.5 against both columns.
    let g = game(&[&[3.0, 1.0], &[0.0, 2.0]]);
    let eq = lp(&g);
    assert!((eq.strategy.prob(0) - 0.5).abs() < EPS);
    assert!((eq.strategy.prob(1) - 0.5).abs() < EPS);
    assert!((eq.value - 1.5).abs() < EPS);
}

#[test]
fn balanced_solver_matches_rock_paper_scissors_symmetry() {
    let g = game(&[&[0.0, -1.0, 1.0], &[1.0, 0.0, -1.0], &[-1.0, 1.0, 0.0]]);
    let eq = qp(&g);
    assert_is_distribution(&eq);
    for i in 0..3 {
        assert!((eq.strategy.prob(i) - 1.0 / 3.0).abs() < EPS);
    }
    assert!(eq.value.abs() < EPS);
}

#[test]
fn balanced_norm_never_exceeds_lp_norm() {
    let matrices: Vec<Vec<Vec<f64>>> = vec![
        // Zero game: all strategies optimal, LP picks a vertex.
        vec![vec![0.0, 0.0], vec![0.0, 0.0]],
        vec![vec![0.0, -1.0, 1.0], vec![1.0, 0.0, -1.0], vec![-1.0, 1.0, 0.0]],
        vec![vec![3.0, 1.0], vec![0.0, 2.0]],
        // Skew-symmetric 4x4 known to stress degenerate QP solves.
        vec![
            vec![0.0, 0.0, 20.0, -50.0],
            vec![0.0, 0.0, 0.0, 0.0],
            vec![-20.0, 0.0, 0.0, 30.0],
            vec![50.0, 0.0, -30.0, 0.0],
        ],
    ];
    for rows in matrices {
        let game = MatrixGame::from_rows(rows.clone()).unwrap();
        let lp_eq = lp(&game);
        let qp_eq = qp(&game);
        assert_is_distribution(&qp_eq);
        assert!(
            game.security_level(&qp_eq.strategy) >= qp_eq.value - EPS,
            "balanced strategy loses the minimax guarantee for {rows:?}"
        );
        assert!(
            qp_eq.strategy.sum_of_squares() <= lp_eq.strategy.sum_of_squares() + EPS,
            "balanced norm {} exceeds LP norm {} for {rows:?}",
            qp_eq.strategy.sum_of_squares(),
            lp_eq.strategy.sum_of_squares()
        );
    }
}

#[test]
fn fully_degenerate_game_balances_evenly() {
    let g = game(&[&[0.0, 0.0], &[0.0, 0.0]]);
    let eq = qp(&g);
    assert!((eq.strategy.prob(0) - 0.5).abs() < EPS);
    assert!((eq.strategy.prob(1) - 0.5).abs() < EPS);
    assert!(eq.value.abs() < EPS);
}

#[test]
fn solving_twice_is_deterministic_within_tolerance() {
    let g = game(&[&[0.0, -1.0, 1.0], &[1.0, 0.0, -1.0], &[-1.0, 1.0, 0.0]]);
    let a = qp(&g);
    let b = qp(&g);
    for i in 0..3 {
        assert!((a.strategy.prob(i) - b.strategy.prob(i)).abs() < EPS);
    }
    let a = lp(&g);
    let b = lp(&g);
    for i in 0..3 {
        assert!((a.strategy.prob(i) - b.strategy.prob(i)).abs() < EPS);
    }
}

#[test]
fn negative_value_game_solves_in_both_formulations() {
    let g = game(&[&[-0.5]]);
    let lp_eq = lp(&g);
    let qp_eq = qp(&g);
    assert!((lp_eq.value + 0.5).abs() < EPS);
    assert!((qp_eq.value + 0.5).abs() < EPS);
}

#[test]
fn malformed_matrices_fail_before_solving() {
    assert!(matches!(
        MatrixGame::from_rows(vec![]),
        Err(Error::MalformedMatrix { .. })
    ));
    assert!(matches!(
        MatrixGame::from_rows(vec![vec![1.0, 2.0]]),
        Err(Error::MalformedMatrix { .. })
    ));
    assert!(matches!(
        MatrixGame::from_rows(vec![vec![f64::INFINITY]]),
        Err(Error::MalformedMatrix { .. })
    ));
}
