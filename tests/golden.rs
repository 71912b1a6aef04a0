//! Regression fixture: a 2-2-2 sigmoid network with fixed weights, trained
//! once. The expected cells are derived by hand from the update formula and
//! must not drift.

use dendrite::{ActivationFunction, Matrix, Network, Vector};

const TOLERANCE: f64 = 1e-9;

fn fixed_network() -> Network {
    let mut network = Network::new(ActivationFunction::Sigmoid, &[2, 2, 2], 0.1).unwrap();

    let mut w0 = Matrix::zeros(2, 2).unwrap();
    w0.set(0, 0, 3.0).unwrap();
    w0.set(0, 1, 1.0).unwrap();
    w0.set(1, 0, 2.0).unwrap();
    w0.set(1, 1, 7.0).unwrap();
    network.set_weights_of_boundary(0, w0).unwrap();

    let mut w1 = Matrix::zeros(2, 2).unwrap();
    w1.set(0, 0, 2.0).unwrap();
    w1.set(0, 1, 1.0).unwrap();
    w1.set(1, 0, 3.0).unwrap();
    w1.set(1, 1, 4.0).unwrap();
    network.set_weights_of_boundary(1, w1).unwrap();

    network
}

fn assert_cells(weights: &Matrix, expected_by_row: &[[f64; 2]; 2]) {
    for (row, expected_row) in expected_by_row.iter().enumerate() {
        for (column, expected) in expected_row.iter().enumerate() {
            let actual = weights.get(column, row).unwrap();
            assert!(
                (actual - expected).abs() < TOLERANCE,
                "cell ({column}, {row}): got {actual}, expected {expected}"
            );
        }
    }
}

#[test]
fn forward_pass_on_fixed_weights() {
    let network = fixed_network();
    let input = Vector::column_from(&[0.4, 0.5]).unwrap();
    let output = network.query(&input).unwrap();

    // Hidden layer: sigmoid(2.2) = 0.90024951..., sigmoid(3.9) = 0.98015969...
    assert!((output.get(0).unwrap() - 0.9913454520410483).abs() < TOLERANCE);
    assert!((output.get(1).unwrap() - 0.9920048135114655).abs() < TOLERANCE);
}

#[test]
fn one_training_step_updates_both_boundaries_in_place() {
    let mut network = fixed_network();

    // Handles taken before training; they alias the live weights.
    let w0 = network.weights_of_boundary(0).unwrap();
    let w1 = network.weights_of_boundary(1).unwrap();

    let input = Vector::column_from(&[0.4, 0.5]).unwrap();
    let expected = Vector::column_from(&[0.8, 0.5]).unwrap();
    network.train(&input, &expected).unwrap();

    // Boundary 1 updates first, against the raw expected values as the error
    // vector; boundary 0 then sees the error propagated through boundary 1's
    // pre-update transpose.
    assert_cells(
        &w0,
        &[
            [3.0075432276393657, 2.019756072388815],
            [1.0016335201122062, 7.00427826696054],
        ],
    );
    assert_cells(
        &w1,
        &[
            [2.0006179058238347, 3.00042047119719],
            [1.000571209285594, 4.000388695239461],
        ],
    );
}

#[test]
fn training_twice_keeps_mutating_the_same_storage() {
    let mut network = fixed_network();
    let w1 = network.weights_of_boundary(1).unwrap();

    let input = Vector::column_from(&[0.4, 0.5]).unwrap();
    let expected = Vector::column_from(&[0.8, 0.5]).unwrap();
    network.train(&input, &expected).unwrap();
    let after_one = w1.get(0, 0).unwrap();
    network.train(&input, &expected).unwrap();
    let after_two = w1.get(0, 0).unwrap();

    assert_ne!(after_one, 2.0);
    assert_ne!(after_two, after_one);
}
