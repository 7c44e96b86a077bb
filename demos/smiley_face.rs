#[path = "../tests/fixtures/mod.rs"]
mod fixtures;

use clusterkit::{DBSCAN, report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let x = fixtures::smiley_face();
    let mut dbscan = DBSCAN::new(0.75, 3);
    let labels = dbscan.fit_predict(&x)?;

    report::log_label_counts("smiley face", &labels);

    let path = std::env::temp_dir().join("smiley_face.csv");
    report::save_scatter_csv(&x, &labels, &path)?;
    println!("scatter data written to {}", path.display());

    Ok(())
}
