//! Result sinks: label-count diagnostics and a 2-D scatter export.
//!
//! Neither sink feeds anything back into the clusterers.

use crate::error::{Error, Result};
use crate::metrics::label_counts;
use crate::{Labels, Matrix};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Log how many points carry each label, ascending by label.
pub fn log_label_counts(name: &str, labels: &Labels) {
    for (label, count) in label_counts(labels) {
        log::info!("{:<32}{:<16}{:<16}", name, format!("label {}", label), count);
    }
}

/// Write `x,y,label` rows for a 2-D point set, one per point, after a header line.
pub fn write_scatter_csv<W: Write>(x: &Matrix, labels: &Labels, writer: &mut W) -> Result<()> {
    if x.ncols() != 2 {
        return Err(Error::InvalidParameter {
            name: "x",
            message: "scatter export needs exactly two features",
        });
    }
    if x.nrows() != labels.len() {
        return Err(Error::DimensionMismatch {
            expected: x.nrows(),
            found: labels.len(),
        });
    }

    writeln!(writer, "x,y,label")?;
    for (point, label) in x.rows().into_iter().zip(labels.iter()) {
        writeln!(writer, "{},{},{}", point[0], point[1], label)?;
    }
    writer.flush()?;
    Ok(())
}

/// [`write_scatter_csv`] into a file at `path`.
pub fn save_scatter_csv<P: AsRef<Path>>(x: &Matrix, labels: &Labels, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_scatter_csv(x, labels, &mut writer)?;
    log::info!("{:<32}{:<32}", "saved scatter", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::sync::{Mutex, Once};

    static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
    static INSTALL: Once = Once::new();

    struct Capture;

    static CAPTURE: Capture = Capture;

    impl log::Log for Capture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Info
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                LINES.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    fn captured(prefix: &str) -> Vec<String> {
        INSTALL.call_once(|| {
            log::set_logger(&CAPTURE).unwrap();
            log::set_max_level(log::LevelFilter::Info);
        });
        LINES
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .cloned()
            .collect()
    }

    #[test]
    fn test_log_label_counts() {
        captured("");
        let labels = array![2, 0, 1, 2, 2, 0];

        log_label_counts("report label counts", &labels);

        let lines = captured("report label counts");
        assert_eq!(
            lines,
            vec![
                format!("{:<32}{:<16}{:<16}", "report label counts", "label 0", 2),
                format!("{:<32}{:<16}{:<16}", "report label counts", "label 1", 1),
                format!("{:<32}{:<16}{:<16}", "report label counts", "label 2", 3),
            ]
        );
    }

    #[test]
    fn test_write_scatter_csv() {
        let x = array![[1.0, 2.5], [-3.0, 4.0]];
        let labels = array![1, 0];
        let mut out = Vec::new();

        write_scatter_csv(&x, &labels, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x,y,label\n1,2.5,1\n-3,4,0\n");
    }

    #[test]
    fn test_write_scatter_csv_rejects_other_dimensions() {
        let x = array![[1.0, 2.0, 3.0]];
        let labels = array![0];
        let mut out = Vec::new();

        let err = write_scatter_csv(&x, &labels, &mut out).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_scatter_csv_label_length_mismatch() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let labels = array![0];
        let mut out = Vec::new();

        assert!(matches!(
            write_scatter_csv(&x, &labels, &mut out),
            Err(Error::DimensionMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_save_scatter_csv() {
        let x = array![[0.0, 0.0]];
        let labels = array![3];
        let path = std::env::temp_dir().join("clusterkit_scatter_test.csv");

        save_scatter_csv(&x, &labels, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, "x,y,label\n0,0,3\n");
    }
}
