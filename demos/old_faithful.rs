#[path = "../tests/fixtures/mod.rs"]
mod fixtures;

use clusterkit::{KMeans, report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let x = fixtures::old_faithful();
    let mut kmeans = KMeans::new(2);
    let (clusters, centers) = kmeans.cluster(&x)?;

    for (k, (members, center)) in clusters.iter().zip(centers.iter()).enumerate() {
        match center {
            Some(center) => println!("cluster {}: {} eruptions, center {}", k, members.nrows(), center),
            None => println!("cluster {}: empty", k),
        }
    }

    if let Some(labels) = kmeans.labels.as_ref() {
        report::log_label_counts("old faithful", labels);
        let path = std::env::temp_dir().join("old_faithful.csv");
        report::save_scatter_csv(&x, labels, &path)?;
        println!("scatter data written to {}", path.display());
    }

    Ok(())
}
