use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Series, Table};
use super::naming::{parse_file_name, CsvKind, ProbeName, TebName};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to read one CSV file. The batch skips the file and moves on.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("expected at least two columns, found {found}")]
    MissingColumns { found: usize },

    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// All `*.csv` files directly inside `dir`, sorted by file name.
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("listing directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
        let path = entry.path();
        let is_csv = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Display form of a path: its file name.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Clone)]
pub struct ProbeFile {
    pub path: PathBuf,
    pub name: ProbeName,
}

#[derive(Debug, Clone)]
pub struct TebFile {
    pub path: PathBuf,
    pub name: TebName,
}

impl TebFile {
    pub fn label(&self) -> String {
        file_label(&self.path)
    }
}

/// The recognised inputs of a directory, split by family.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub probes: Vec<ProbeFile>,
    pub teb: Vec<TebFile>,
}

impl Inventory {
    /// Classify `paths`; unrecognised names are dropped without notice.
    pub fn from_paths(paths: &[PathBuf]) -> Self {
        let mut inventory = Inventory::default();
        for path in paths {
            let Some(parsed) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(parse_file_name)
            else {
                continue;
            };
            log::debug!("{} classified as {:?}", parsed.file_name, parsed.kind);
            match parsed.kind {
                CsvKind::Probe(name) => inventory.probes.push(ProbeFile {
                    path: path.clone(),
                    name,
                }),
                CsvKind::Teb(name) => inventory.teb.push(TebFile {
                    path: path.clone(),
                    name,
                }),
            }
        }
        inventory.probes.sort_by(|a, b| a.path.cmp(&b.path));
        inventory.teb.sort_by(|a, b| a.path.cmp(&b.path));
        inventory
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty() && self.teb.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Probe loader
// ---------------------------------------------------------------------------

/// Header layout written by the simulator probes: `index,valeur`.
#[derive(Debug, Deserialize)]
struct ProbeRow {
    index: f64,
    valeur: f64,
}

/// Load a probe file: `valeur` against `index`, one point per row.
pub fn load_probe(path: &Path) -> Result<Series, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut series = Series::default();
    for row in reader.deserialize::<ProbeRow>() {
        let row = row?;
        series.push(row.index, row.valeur);
    }
    Ok(series)
}

// ---------------------------------------------------------------------------
// TEB loader
// ---------------------------------------------------------------------------

/// Load a TEB file. Columns are taken by position: the first is the swept
/// variable, the second the error rate, whatever their names.
pub fn load_teb(path: &Path) -> Result<Table, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(LoadError::MissingColumns {
            found: headers.len(),
        });
    }
    let x_name = headers[0].trim().to_string();
    let y_name = headers[1].trim().to_string();

    let mut series = Series::default();
    for (row_no, record) in reader.records().enumerate() {
        let record = record?;
        let x = parse_cell(record.get(0), row_no, &x_name)?;
        let y = parse_cell(record.get(1), row_no, &y_name)?;
        series.push(x, y);
    }

    Ok(Table {
        x_name,
        y_name,
        series,
    })
}

fn parse_cell(cell: Option<&str>, row: usize, column: &str) -> Result<f64, LoadError> {
    let raw = cell.unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn scan_finds_only_csv_files_sorted() {
        let dir = TempDir::new().unwrap();
        write(&dir, "TEB_RZ.csv", "a,b\n");
        write(&dir, "sonde_A.csv", "index,valeur\n");
        write(&dir, "notes.txt", "");
        write(&dir, "data.CSV", "");
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = scan_dir(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_label(p)).collect();
        assert_eq!(names, vec!["TEB_RZ.csv", "sonde_A.csv"]);
    }

    #[test]
    fn scan_of_empty_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(scan_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn inventory_splits_families() {
        let paths: Vec<PathBuf> = ["sonde_B.csv", "TEB_NRZ.csv", "other.csv", "sonde_A.csv"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let inv = Inventory::from_paths(&paths);
        assert_eq!(inv.probes.len(), 2);
        assert_eq!(inv.probes[0].name.name, "A");
        assert_eq!(inv.teb.len(), 1);
        assert!(!inv.is_empty());
    }

    #[test]
    fn probe_rows_become_points() -> Result<(), LoadError> {
        let dir = TempDir::new().unwrap();
        let mut content = String::from("index,valeur\n");
        for i in 0..500 {
            content.push_str(&format!("{i},{}\n", i % 2));
        }
        let path = write(&dir, "sonde_Emetteur.csv", &content);

        let series = load_probe(&path)?;
        assert_eq!(series.len(), 500);
        assert_eq!(series.points()[3], [3.0, 1.0]);
        Ok(())
    }

    #[test]
    fn probe_without_valeur_column_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "sonde_X.csv", "index,value\n0,1\n");
        assert!(matches!(load_probe(&path), Err(LoadError::Csv(_))));
    }

    #[test]
    fn teb_columns_are_positional() -> Result<(), LoadError> {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "TEB_NRZ.csv", "SNR_dB,teb,extra\n0,0.1,x\n5, 0.01 ,y\n");

        let table = load_teb(&path)?;
        assert_eq!(table.x_name, "SNR_dB");
        assert_eq!(table.y_name, "teb");
        assert_eq!(table.series.y, vec![0.1, 0.01]);
        Ok(())
    }

    #[test]
    fn teb_errors_name_the_problem() {
        let dir = TempDir::new().unwrap();
        let one_col = write(&dir, "TEB_A.csv", "SNR_dB\n1\n");
        assert!(matches!(
            load_teb(&one_col),
            Err(LoadError::MissingColumns { found: 1 })
        ));

        let bad = write(&dir, "TEB_B.csv", "SNR_dB,teb\n1,abc\n");
        let err = load_teb(&bad).unwrap_err();
        assert_eq!(err.to_string(), "row 0, column 'teb': 'abc' is not a number");

        let missing = dir.path().join("TEB_missing.csv");
        assert!(load_teb(&missing).is_err());
    }
}
