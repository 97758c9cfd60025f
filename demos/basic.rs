//! Basic example stepping through k-means on the three-disk demo set
//!
//! Run with: cargo run --example basic

use kmeans_stepper::{dataset, KMeansConfig, KMeansSession};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("=== kmeans-stepper example ===\n");

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let points = dataset::demo_points(&mut rng);

    println!("Generated {} points around:", points.len());
    for (i, (x, y)) in dataset::DEMO_CENTERS.iter().enumerate() {
        println!("  Center {}: ({:.2}, {:.2})", i, x, y);
    }
    println!();

    let config = KMeansConfig::new(3).with_seed(42);
    let mut session = KMeansSession::new(points, config).expect("Invalid configuration");

    // Each advance stands in for one key press in an interactive viewer
    for _ in 0..20 {
        let report = session.advance().expect("Step failed");

        match report.max_displacement {
            None => println!("Initialized (seeds chosen)"),
            Some(shift) => println!("Iteration {}: max shift = {:.6}", report.iteration, shift),
        }

        for centroid in session.centroids().unwrap() {
            println!(
                "  Centroid {}: ({:.4}, {:.4})",
                centroid.label, centroid.x, centroid.y
            );
        }

        if report.newly_converged {
            println!("\nAll centroids converged!");
            break;
        }
    }

    println!("\nCluster distribution:");
    let labels = session.labels_array();
    for i in 0..session.labels().k() {
        let count = labels.iter().filter(|&&l| l == i as i64).count();
        println!("  Cluster {}: {} points", i, count);
    }

    println!("\n=== Done! ===");
}
