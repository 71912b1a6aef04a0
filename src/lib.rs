pub mod activation;
pub mod error;
pub mod math;
pub mod network;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::Error;
pub use math::matrix::Matrix;
pub use math::vector::Vector;
pub use network::network::Network;
