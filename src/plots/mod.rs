//! Figure builders, one per rendering mode.
//!
//! Builders read the files of an [`Inventory`](crate::data::loader::Inventory),
//! print a progress line per file, and return plain [`Figure`] values. A file
//! that fails to load is reported and skipped; it never aborts the batch.

pub mod analysis;
pub mod comparison;
pub mod probe;

use std::path::Path;

use crate::data::loader::{file_label, load_teb, LoadError, TebFile};
use crate::data::model::Table;

/// Probe figures are wide and flat.
pub const PROBE_FIGURE_SIZE: [f32; 2] = [960.0, 320.0];
pub const TEB_FIGURE_SIZE: [f32; 2] = [800.0, 480.0];

pub const TEB_LINE_WIDTH: f32 = 2.0;

/// Print the outcome of a load the way every builder does.
fn report<T>(path: &Path, result: Result<T, LoadError>, len: impl Fn(&T) -> usize) -> Option<T> {
    match result {
        Ok(value) => {
            println!("  - {}: {} points", file_label(path), len(&value));
            Some(value)
        }
        Err(e) => {
            println!("Error reading {}: {e}", file_label(path));
            None
        }
    }
}

fn read_teb(path: &Path) -> Option<Table> {
    report(path, load_teb(path), |t: &Table| t.series.len())
}

/// Axis labels shared by every table of a figure.
///
/// Tables drawn together must agree on both column names; otherwise the
/// figure is refused and the mismatch reported.
fn shared_columns(title: &str, tables: &[(&TebFile, Table)]) -> Option<(String, String)> {
    let Some((first_file, first)) = tables.first() else {
        println!("Skipping figure '{title}': no readable file");
        return None;
    };
    if let Some((file, _)) = tables.iter().find(|(_, t)| !t.same_columns(first)) {
        println!(
            "Skipping figure '{title}': columns of {} differ from {} ({}, {})",
            file.label(),
            first_file.label(),
            first.x_name,
            first.y_name
        );
        return None;
    }
    Some((first.x_name.clone(), first.y_name.clone()))
}

/// Y label, marked when the axis is logarithmic.
fn y_axis_label(column: &str, log: bool) -> String {
    if log {
        format!("{column} (log scale)")
    } else {
        column.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Series;
    use crate::data::naming::{SweepAxis, TebName};
    use std::path::PathBuf;

    fn file(name: &str) -> TebFile {
        TebFile {
            path: PathBuf::from(format!("TEB_{name}.csv")),
            name: TebName {
                analysis: name.to_string(),
                axis: SweepAxis::Snr,
                scheme: None,
                encoder: None,
            },
        }
    }

    fn table(x: &str, y: &str) -> Table {
        Table {
            x_name: x.to_string(),
            y_name: y.to_string(),
            series: Series::default(),
        }
    }

    #[test]
    fn columns_must_agree() {
        let (a, b) = (file("A"), file("B"));
        let same = vec![(&a, table("SNR_dB", "teb")), (&b, table("SNR_dB", "teb"))];
        assert_eq!(
            shared_columns("t", &same),
            Some(("SNR_dB".to_string(), "teb".to_string()))
        );

        let differ = vec![(&a, table("SNR_dB", "teb")), (&b, table("NbEch", "teb"))];
        assert_eq!(shared_columns("t", &differ), None);
        assert_eq!(shared_columns("t", &[]), None);
    }

    #[test]
    fn log_label() {
        assert_eq!(y_axis_label("teb", false), "teb");
        assert_eq!(y_axis_label("teb", true), "teb (log scale)");
    }
}
