use clusterkit::{DBSCAN, KMeans, Labels, Matrix, NOISE, NeighborSearch, dataset, report};
use ndarray::array;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Clustering Algorithms Comparison ===\n");

    // Three blobs around (2, 2), (8, 8) and (2, 8), plus a few stray points
    let centers = array![[2.0, 2.0], [8.0, 8.0], [2.0, 8.0]];
    let mut rng = StdRng::seed_from_u64(7);
    let blobs = dataset::blobs(&centers, 5, 0.3, &mut rng)?;
    let strays = array![[5.0, 5.0], [0.0, 0.0], [10.0, 0.0]];
    let x = ndarray::concatenate(ndarray::Axis(0), &[blobs.view(), strays.view()])?;

    println!("Dataset: {} samples, {} features", x.nrows(), x.ncols());
    println!("Expected: 3 natural clusters + some noise points\n");

    println!("=== K-Means Clustering ===");
    for &k in &[2, 3, 4, 5] {
        match test_kmeans(&x, k) {
            Ok(result) => println!("{}", result),
            Err(e) => println!("K-Means(k={}) failed: {}", k, e),
        }
    }

    println!("\n=== DBSCAN Clustering ===");
    let dbscan_configs = vec![
        (0.3, 2, "Tight clusters"),
        (0.5, 2, "Medium density"),
        (1.0, 2, "Loose clusters"),
        (1.0, 4, "Higher min_samples"),
    ];

    for &(eps, min_samples, description) in &dbscan_configs {
        match test_dbscan(&x, eps, min_samples) {
            Ok(result) => println!(
                "DBSCAN(eps={}, min_samples={}): {} - {}",
                eps, min_samples, description, result
            ),
            Err(e) => println!("DBSCAN(eps={}, min_samples={}) failed: {}", eps, min_samples, e),
        }
    }

    println!("\n=== Detailed Analysis ===");

    let mut best_kmeans = KMeans::new(3).random_state(7);
    let (clusters, centers) = best_kmeans.cluster(&x)?;
    println!("K-Means (k=3) results:");
    println!("  Inertia (within-cluster sum of squares): {:.4}", best_kmeans.inertia.unwrap_or(f64::NAN));
    for (k, (members, center)) in clusters.iter().zip(centers.iter()).enumerate() {
        match center {
            Some(center) => println!("  Cluster {}: {} points around {}", k, members.nrows(), center),
            None => println!("  Cluster {}: empty", k),
        }
    }

    let mut best_dbscan = DBSCAN::new(1.0, 2).algorithm(NeighborSearch::Grid);
    let dbscan_labels = best_dbscan.fit_predict(&x)?;
    println!("\nDBSCAN (eps=1.0, min_samples=2) results:");
    println!("  Number of clusters found: {}", best_dbscan.get_n_clusters().unwrap_or(0));
    println!("  Number of noise points: {}", best_dbscan.get_n_noise_points().unwrap_or(0));
    println!(
        "  Number of core samples: {}",
        best_dbscan.core_sample_indices.as_ref().map_or(0, Vec::len)
    );
    print_cluster_summary("DBSCAN", &dbscan_labels);
    report::log_label_counts("dbscan labels", &dbscan_labels);

    Ok(())
}

fn test_kmeans(x: &Matrix, k: usize) -> clusterkit::Result<String> {
    let mut kmeans = KMeans::new(k).iters(100).random_state(7);
    kmeans.fit(x)?;

    let empty = kmeans.empty_clusters().map_or(0, |e| e.len());
    Ok(format!(
        "K-Means(k={}): {} non-empty clusters, Inertia: {:.4}",
        k,
        k - empty,
        kmeans.inertia.unwrap_or(f64::NAN)
    ))
}

fn test_dbscan(x: &Matrix, eps: f64, min_samples: usize) -> clusterkit::Result<String> {
    let mut dbscan = DBSCAN::new(eps, min_samples);
    dbscan.fit(x)?;

    Ok(format!(
        "{} clusters, {} noise points",
        dbscan.get_n_clusters().unwrap_or(0),
        dbscan.get_n_noise_points().unwrap_or(0)
    ))
}

fn print_cluster_summary(algorithm: &str, labels: &Labels) {
    println!("  {} cluster assignments:", algorithm);
    for (label, count) in clusterkit::metrics::label_counts(labels) {
        if label == NOISE {
            println!("    Noise: {} points", count);
        } else {
            println!("    Cluster {}: {} points", label, count);
        }
    }
}
