use std::collections::BTreeMap;

use eframe::egui::Color32;

use crate::color::{generate_palette, ENCODER_GREEN, NO_ENCODER_RED};
use crate::data::loader::{Inventory, TebFile};
use crate::data::model::{AxisScale, Figure, Marker, Table, Trace, TraceStyle, ValueRange};
use crate::data::naming::EncoderVariant;

use super::{read_teb, shared_columns, y_axis_label, TEB_FIGURE_SIZE, TEB_LINE_WIDTH};

/// One figure per analysis type. Every encoder file lands on the shared
/// `Codeur` figure.
pub fn build(inventory: &Inventory) -> Vec<Figure> {
    if inventory.teb.is_empty() {
        println!("\nNo TEB file found");
        return Vec::new();
    }
    println!("\nTEB files found: {}", inventory.teb.len());

    let mut groups: BTreeMap<&str, Vec<&TebFile>> = BTreeMap::new();
    for file in &inventory.teb {
        groups.entry(file.name.group_key()).or_default().push(file);
    }

    groups
        .into_iter()
        .filter_map(|(key, files)| group_figure(key, &files))
        .collect()
}

fn group_figure(key: &str, files: &[&TebFile]) -> Option<Figure> {
    let title = format!("TEB = f({key})");
    let tables: Vec<(&TebFile, Table)> = files
        .iter()
        .filter_map(|&file| read_teb(&file.path).map(|t| (file, t)))
        .collect();

    let (x_label, y_column) = shared_columns(&title, &tables)?;

    // Log decision follows the last series read in the group.
    let last_range = tables
        .last()
        .and_then(|(_, t)| ValueRange::of(&t.series.y));
    let y_scale = AxisScale::for_range(last_range);

    let palette = generate_palette(tables.len());
    let traces = tables
        .iter()
        .zip(palette)
        .map(|((file, table), color)| {
            let (label, style) = trace_style(key, file.name.encoder, color);
            Trace {
                label: Some(label),
                points: table.series.points(),
                style,
            }
        })
        .collect();

    Some(Figure {
        title,
        x_label,
        y_label: y_axis_label(&y_column, y_scale == AxisScale::Log),
        y_scale,
        traces,
        size: TEB_FIGURE_SIZE,
    })
}

/// Legend label and style for one trace of a group.
fn trace_style(key: &str, encoder: Option<EncoderVariant>, fallback: Color32) -> (String, TraceStyle) {
    let (label, color, marker) = match encoder {
        Some(EncoderVariant::With) => ("With encoder".to_string(), ENCODER_GREEN, Marker::Square),
        Some(EncoderVariant::Without) => {
            ("Without encoder".to_string(), NO_ENCODER_RED, Marker::Circle)
        }
        None => (key.replace('_', " "), fallback, Marker::Circle),
    };
    let style = TraceStyle {
        color,
        marker: Some(marker),
        width: TEB_LINE_WIDTH,
    };
    (label, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::scan_dir;
    use std::fs;
    use tempfile::TempDir;

    fn inventory(files: &[(&str, &str)]) -> (TempDir, Inventory) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let inv = Inventory::from_paths(&scan_dir(dir.path()).unwrap());
        (dir, inv)
    }

    #[test]
    fn encoder_files_share_a_figure_with_fixed_styles() {
        let (_dir, inv) = inventory(&[
            ("TEB_AvecCodeur.csv", "SNR_dB,teb\n0,0.01\n5,0.001\n"),
            ("TEB_SansCodeur.csv", "SNR_dB,teb\n0,0.1\n5,0.05\n"),
            ("TEB_SNR_dB.csv", "SNR_dB,teb\n0,0.2\n5,0.1\n"),
        ]);
        let figures = build(&inv);
        assert_eq!(figures.len(), 2);

        let codeur = figures.iter().find(|f| f.title == "TEB = f(Codeur)").unwrap();
        assert_eq!(codeur.traces.len(), 2);
        // Sorted: AvecCodeur before SansCodeur.
        assert_eq!(codeur.traces[0].label.as_deref(), Some("With encoder"));
        assert_eq!(codeur.traces[0].style.color, ENCODER_GREEN);
        assert_eq!(codeur.traces[0].style.marker, Some(Marker::Square));
        assert_eq!(codeur.traces[1].label.as_deref(), Some("Without encoder"));
        assert_eq!(codeur.traces[1].style.color, NO_ENCODER_RED);
        assert_eq!(codeur.traces[1].style.marker, Some(Marker::Circle));

        let snr = figures.iter().find(|f| f.title == "TEB = f(SNR_dB)").unwrap();
        assert_eq!(snr.traces[0].label.as_deref(), Some("SNR dB"));
        assert_eq!(snr.x_label, "SNR_dB");
        assert_eq!(snr.y_label, "teb");
    }

    #[test]
    fn log_scale_follows_last_read_series() {
        let (_dir, inv) = inventory(&[
            ("TEB_AvecCodeur.csv", "SNR_dB,teb\n0,0.1\n10,0.000001\n"),
            ("TEB_SansCodeur.csv", "SNR_dB,teb\n0,0.2\n10,0.1\n"),
        ]);
        let figures = build(&inv);
        assert_eq!(figures[0].y_scale, AxisScale::Linear);

        let (_dir, inv) = inventory(&[
            ("TEB_AvecCodeur.csv", "SNR_dB,teb\n0,0.2\n10,0.1\n"),
            ("TEB_SansCodeur.csv", "SNR_dB,teb\n0,0.1\n10,0.000001\n"),
        ]);
        let figures = build(&inv);
        assert_eq!(figures[0].y_scale, AxisScale::Log);
        assert_eq!(figures[0].y_label, "teb (log scale)");
    }

    #[test]
    fn zero_error_rate_keeps_linear_axis() {
        let (_dir, inv) = inventory(&[("TEB_Tau.csv", "Tau,teb\n0,0.3\n5,0\n")]);
        assert_eq!(build(&inv)[0].y_scale, AxisScale::Linear);
    }

    #[test]
    fn mismatched_columns_drop_the_group() {
        let (_dir, inv) = inventory(&[
            ("TEB_AvecCodeur.csv", "SNR_dB,teb\n0,0.1\n"),
            ("TEB_SansCodeur.csv", "Eb_N0,teb\n0,0.2\n"),
            ("TEB_Alpha.csv", "Alpha,teb\n0.1,0.2\n"),
        ]);
        let titles: Vec<String> = build(&inv).into_iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["TEB = f(Alpha)"]);
    }

    #[test]
    fn failed_reads_are_skipped() {
        let (_dir, inv) = inventory(&[
            ("TEB_AvecCodeur.csv", "SNR_dB,teb\n0,broken\n"),
            ("TEB_SansCodeur.csv", "SNR_dB,teb\n0,0.2\n"),
            ("TEB_NbEch.csv", "only\n1\n"),
        ]);
        let figures = build(&inv);
        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].traces.len(), 1);
        assert_eq!(figures[0].traces[0].label.as_deref(), Some("Without encoder"));
    }
}
