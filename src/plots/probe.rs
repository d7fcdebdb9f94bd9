use crate::color::PROBE_BLUE;
use crate::data::loader::{load_probe, Inventory};
use crate::data::model::{AxisScale, Figure, Series, Trace, TraceStyle};

use super::{report, PROBE_FIGURE_SIZE};

/// One figure per probe file, in file-name order.
pub fn build(inventory: &Inventory) -> Vec<Figure> {
    if inventory.probes.is_empty() {
        println!("No probe file found");
        return Vec::new();
    }
    println!("Probe files found: {}", inventory.probes.len());

    inventory
        .probes
        .iter()
        .filter_map(|probe| {
            let series = report(&probe.path, load_probe(&probe.path), Series::len)?;
            Some(probe_figure(probe.name.display_name(), &series))
        })
        .collect()
}

fn probe_figure(title: String, series: &Series) -> Figure {
    Figure {
        title,
        x_label: "Index".to_string(),
        y_label: "Valeur".to_string(),
        y_scale: AxisScale::Linear,
        traces: vec![Trace {
            label: None,
            points: series.points(),
            style: TraceStyle {
                color: PROBE_BLUE,
                marker: None,
                width: 1.5,
            },
        }],
        size: PROBE_FIGURE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::scan_dir;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn one_figure_per_probe_with_every_row() {
        let dir = TempDir::new().unwrap();
        let mut content = String::from("index,valeur\n");
        for i in 0..500 {
            content.push_str(&format!("{i},{}\n", (i / 3) % 2));
        }
        fs::write(dir.path().join("sonde_Emetteur.csv"), content).unwrap();
        fs::write(dir.path().join("TEB_NRZ.csv"), "SNR_dB,teb\n0,0.1\n").unwrap();

        let inventory = Inventory::from_paths(&scan_dir(dir.path()).unwrap());
        let figures = build(&inventory);

        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].title, "Emetteur");
        assert_eq!(figures[0].traces.len(), 1);
        assert_eq!(figures[0].point_count(), 500);
        assert!(!figures[0].has_legend());
    }

    #[test]
    fn unreadable_probe_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sonde_A_B.csv"), "index,valeur\n0,1\n1,0\n").unwrap();
        fs::write(dir.path().join("sonde_Broken.csv"), "index,valeur\n0,oops\n").unwrap();
        fs::write(dir.path().join("sonde_C.csv"), "index,valeur\n0,1\n").unwrap();

        let inventory = Inventory::from_paths(&scan_dir(dir.path()).unwrap());
        let titles: Vec<String> = build(&inventory).into_iter().map(|f| f.title).collect();

        assert_eq!(titles, vec!["A B", "C"]);
    }

    #[test]
    fn no_probe_files_no_figures() {
        assert!(build(&Inventory::default()).is_empty());
    }
}
