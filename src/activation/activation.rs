use serde::{Deserialize, Serialize};
use std::f64::consts::E;

/// Pure scalar activation, fixed once per network at construction.
///
/// The same instance is reused in three places: elementwise activation during
/// the forward pass, the weight-initialization formula, and the backward-pass
/// update formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Logistic sigmoid, `1 / (1 + e^(-x))`.
    Sigmoid,
    /// Passes values through unchanged; useful for testing the structural
    /// composition of a network independently of the sigmoid.
    Identity,
}

impl ActivationFunction {
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Identity => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_values() {
        let sigmoid = ActivationFunction::Sigmoid;
        assert_eq!(sigmoid.activate(0.0), 0.5);
        assert!((sigmoid.activate(2.2) - 0.9002495108803148).abs() < 1e-12);
        assert!(sigmoid.activate(-40.0) < 1e-15);
    }

    #[test]
    fn identity_passes_through() {
        let identity = ActivationFunction::Identity;
        assert_eq!(identity.activate(-3.25), -3.25);
    }
}
