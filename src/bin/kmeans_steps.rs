//! Headless driver that advances a k-means session one step at a time and
//! prints the centroids after every step.
//!
//! Points are read from a `(n, 2)` float64 `.npy` file, or generated as the
//! three-disk demo set when no input is given (or the input is `-`). The final
//! centroids can optionally be written to another `.npy` file.
//!
//! Convergence is announced once. Stepping then continues for `extra_steps`
//! more iterations (default 0), each reporting whether the centroids are
//! still settled.
//!
//! Usage: `kmeans-steps <k> <seed> [input.npy|-] [output.npy|-] [extra_steps]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use kmeans_stepper::{dataset, KMeansConfig, KMeansSession, SessionState};
use ndarray::Array2;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::fs::File;
use std::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Advances allowed before giving up, initialization included.
const MAX_STEPS: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 6 {
        eprintln!(
            "Usage: {} <k> <seed> [input.npy|-] [output.npy|-] [extra_steps]",
            args[0]
        );
        std::process::exit(1);
    }

    let k: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;
    let input_path = args.get(3).filter(|p| p.as_str() != "-");
    let output_path = args.get(4).filter(|p| p.as_str() != "-");
    let extra_steps: usize = match args.get(5) {
        Some(n) => n.parse()?,
        None => 0,
    };

    let config = KMeansConfig::new(k).with_seed(seed);

    let mut session = match input_path {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            let data: Array2<f64> = Array2::read_npy(reader)?;
            info!(path = %path, n_points = data.nrows(), "loaded points");
            KMeansSession::from_array(&data.view(), config)?
        }
        None => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let points = dataset::demo_points(&mut rng);
            info!(n_points = points.len(), "generated demo points");
            KMeansSession::new(points, config)?
        }
    };

    // Steps still to run after convergence, None until it happens
    let mut remaining: Option<usize> = None;

    for _ in 0..MAX_STEPS.saturating_add(extra_steps) {
        if remaining == Some(0) {
            break;
        }
        let report = session.advance()?;

        println!("step {}:", report.iteration);
        for centroid in session.centroids().unwrap_or_default() {
            let members = session
                .points()
                .iter()
                .filter(|p| p.label() == Some(centroid.label))
                .count();
            println!(
                "  centroid {} at ({:.4}, {:.4}) with {} points",
                centroid.label, centroid.x, centroid.y, members
            );
        }

        if report.newly_converged {
            println!("all centroids converged");
            remaining = Some(extra_steps);
        } else if let Some(n) = remaining.as_mut() {
            println!("  still converged: {}", report.converged);
            *n -= 1;
        }
    }

    if session.state() != SessionState::Converged {
        warn!(max_steps = MAX_STEPS, "stopped before convergence");
    }

    if let Some(path) = output_path {
        let centroids = session
            .centroids_array()
            .ok_or("No centroids after stepping")?;
        let writer = File::create(path)?;
        centroids.write_npy(writer)?;
        info!(path = %path, "saved centroids");
    }

    Ok(())
}
