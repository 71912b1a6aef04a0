use log::{debug, trace};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::math::vector::Vector;

/// Fully-connected feedforward network.
///
/// The weight matrix at boundary `i` connects layer `i` to layer `i + 1` and
/// has one row per destination node and one column per source node. Weights
/// are mutated in place by every [`Network::train`] call; accessors hand out
/// live, aliasing handles rather than defensive copies.
#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    activation: ActivationFunction,
    weights: Vec<Matrix>,
    /// Learning rate.
    alpha: f64,
}

fn ensure_layer_sizes_valid(layer_sizes: &[usize]) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(Error::InvalidArgument(
            "a network needs at least two layers".into(),
        ));
    }
    for (position, count) in layer_sizes.iter().enumerate() {
        if *count == 0 {
            return Err(Error::InvalidArgument(format!(
                "count of nodes on layer {position} cannot be 0"
            )));
        }
    }
    Ok(())
}

impl Network {
    /// Builds a network with `thread_rng`-initialized weights.
    pub fn new(
        activation: ActivationFunction,
        layer_sizes: &[usize],
        learning_rate: f64,
    ) -> Result<Network> {
        Network::with_rng(activation, layer_sizes, learning_rate, &mut thread_rng())
    }

    /// Builds a network drawing initial weights from the given source, so a
    /// seeded generator yields a reproducible network. Every cell is set to
    /// `activation.activate(u)` for a uniform `u` in [0, 1).
    pub fn with_rng<R: Rng>(
        activation: ActivationFunction,
        layer_sizes: &[usize],
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Network> {
        ensure_layer_sizes_valid(layer_sizes)?;
        let mut weights = Vec::with_capacity(layer_sizes.len() - 1);
        for boundary in 0..layer_sizes.len() - 1 {
            let columns = layer_sizes[boundary];
            let rows = layer_sizes[boundary + 1];
            let mut w = Matrix::zeros(columns, rows)?;
            for row in 0..rows {
                for column in 0..columns {
                    w.set(column, row, activation.activate(rng.gen::<f64>()))?;
                }
            }
            weights.push(w);
        }
        debug!(
            "constructed network with layers {:?}, learning rate {}",
            layer_sizes, learning_rate
        );
        Ok(Network {
            activation,
            weights,
            alpha: learning_rate,
        })
    }

    /// Number of layer boundaries, i.e. layer count minus one.
    pub fn layer_boundaries(&self) -> usize {
        self.weights.len()
    }

    pub fn learning_rate(&self) -> f64 {
        self.alpha
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    fn ensure_boundary_in_range(&self, boundary: usize) -> Result<()> {
        if boundary >= self.weights.len() {
            return Err(Error::IndexOutOfRange(format!(
                "layer boundary {boundary} outside 0..{}",
                self.weights.len()
            )));
        }
        Ok(())
    }

    /// Live handle onto the weights between layer `boundary` and
    /// `boundary + 1`; mutations through it are seen by the network.
    pub fn weights_of_boundary(&self, boundary: usize) -> Result<Matrix> {
        self.ensure_boundary_in_range(boundary)?;
        Ok(self.weights[boundary].clone())
    }

    /// Replaces the weights between layer `boundary` and `boundary + 1`.
    /// The handle is stored as-is; the caller's clone keeps aliasing it.
    pub fn set_weights_of_boundary(&mut self, boundary: usize, weights: Matrix) -> Result<()> {
        self.ensure_boundary_in_range(boundary)?;
        self.weights[boundary] = weights;
        Ok(())
    }

    /// The live ordered weight sequence, first boundary to last.
    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    fn ensure_column_shaped<'a>(vector: &'a Vector, what: &str) -> Result<&'a Matrix> {
        match vector {
            Vector::Column(m) => Ok(m),
            Vector::Row(_) => Err(Error::InvalidArgument(format!(
                "{what} must be a column-shaped vector"
            ))),
        }
    }

    /// Forward inference: per boundary, multiply the weight matrix by the
    /// current vector and activate elementwise. Pure in (weights, input).
    pub fn query(&self, input: &Vector) -> Result<Vector> {
        let input = Network::ensure_column_shaped(input, "query input")?;
        trace!("query across {} layer boundaries", self.weights.len());
        let mut intermediate = input.clone();
        for w in &self.weights {
            intermediate = w.matmul(&intermediate)?;
            intermediate = intermediate.map(|x| self.activation.activate(x));
        }
        Vector::try_from(intermediate)
    }

    /// One online training step: a forward pass that caches every layer
    /// output, then an in-place weight update walking the boundaries from
    /// last to first.
    ///
    /// Per boundary, error is propagated to the previous layer through the
    /// transpose of the weights as they were *before* this boundary's update.
    /// The update itself recomputes each destination node's weighted input
    /// sum, reapplies the activation function to it, and uses
    /// `sum * (1 - sum)` as the derivative term; both `-1` factors in the
    /// delta are part of the numeric contract and must stay as written.
    pub fn train(&mut self, input: &Vector, expected: &Vector) -> Result<()> {
        let input = Network::ensure_column_shaped(input, "train input")?;
        let expected = Network::ensure_column_shaped(expected, "expected output")?;
        debug!(
            "training step across {} layer boundaries",
            self.weights.len()
        );

        // Forward pass, keeping every layer's output. The raw input is
        // layer 0's output.
        let mut outputs: Vec<Matrix> = Vec::with_capacity(self.weights.len() + 1);
        outputs.push(input.clone());
        {
            let mut intermediate = input.clone();
            for w in &self.weights {
                intermediate = w.matmul(&intermediate)?;
                intermediate = intermediate.map(|x| self.activation.activate(x));
                outputs.push(intermediate.clone());
            }
        }

        // Backward pass over layer boundaries, last to first.
        let mut e = expected.clone();
        for layer in (1..outputs.len()).rev() {
            let mut w = self.weights[layer - 1].clone();
            // Snapshot before any cell of w is touched; error propagation
            // below must use the pre-update weights.
            let w_transposed = w.transpose();

            let o_outputs = &outputs[layer];
            let o_inputs = outputs[layer - 1].transpose();

            for k in 0..o_outputs.rows() {
                let mut sumj = 0.0;
                for j in 0..o_inputs.columns() {
                    let wjk = w.get(j, k)?;
                    let oj = o_inputs.get(j, 0)?;
                    sumj += wjk * oj;
                }
                let sumj = self.activation.activate(sumj);

                for j in 0..o_inputs.columns() {
                    let wjk = w.get(j, k)?;
                    let oj = o_inputs.get(j, 0)?;
                    let ej = e.get(0, j)?;
                    let delta = -1.0 * ej * sumj * (1.0 - sumj) * oj;
                    w.set(j, k, wjk + (-1.0 * (self.alpha * delta)))?;
                }
            }
            trace!("updated weights of boundary {}", layer - 1);

            e = w_transposed.matmul(&e)?;
        }

        Ok(())
    }
}
