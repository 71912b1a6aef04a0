use dendrite::{ActivationFunction, Error, Matrix, Network, Vector};

fn run() -> Result<(), Error> {
    let mut network = Network::new(ActivationFunction::Sigmoid, &[2, 2, 2], 0.1)?;

    {
        let mut w = Matrix::zeros(2, 2)?;
        w.set(0, 0, 3.0)?;
        w.set(0, 1, 1.0)?;
        w.set(1, 0, 2.0)?;
        w.set(1, 1, 7.0)?;
        network.set_weights_of_boundary(0, w)?;
    }

    {
        let mut w = Matrix::zeros(2, 2)?;
        w.set(0, 0, 2.0)?;
        w.set(0, 1, 1.0)?;
        w.set(1, 0, 3.0)?;
        w.set(1, 1, 4.0)?;
        network.set_weights_of_boundary(1, w)?;
    }

    let input = Vector::column_from(&[0.4, 0.5])?;
    let expected = Vector::column_from(&[0.8, 0.5])?;

    network.train(&input, &expected)?;

    for (boundary, weights) in network.weights().iter().enumerate() {
        let mut weights = weights.clone();
        weights.set_name(format!("weights of boundary {boundary}"));
        println!("{weights}");
    }

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
