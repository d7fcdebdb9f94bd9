use crate::color::scheme_color;
use crate::data::loader::{Inventory, TebFile};
use crate::data::model::{AxisScale, Figure, Marker, Table, Trace, TraceStyle, ValueRange};
use crate::data::naming::{CodingScheme, SweepAxis};

use super::{read_teb, shared_columns, y_axis_label, TEB_FIGURE_SIZE, TEB_LINE_WIDTH};

fn scheme_marker(scheme: CodingScheme) -> Marker {
    match scheme {
        CodingScheme::Nrz => Marker::Circle,
        CodingScheme::Nrzt => Marker::Square,
        CodingScheme::Rz => Marker::Triangle,
    }
}

/// First TEB file (by name) for `axis` and `scheme`. Encoder files take no
/// part in the comparison.
fn find_file<'a>(inventory: &'a Inventory, axis: SweepAxis, scheme: CodingScheme) -> Option<&'a TebFile> {
    let mut matches = inventory.teb.iter().filter(|f| {
        f.name.encoder.is_none() && f.name.axis == axis && f.name.scheme == Some(scheme)
    });
    let first = matches.next()?;
    for extra in matches {
        println!(
            "Ignoring {}: {} already used for {} / {}",
            extra.label(),
            first.label(),
            scheme,
            axis.label()
        );
        log::warn!("duplicate comparison input {}", extra.label());
    }
    Some(first)
}

/// One figure per sweep axis overlaying the NRZ, NRZT and RZ curves.
pub fn build(inventory: &Inventory) -> Vec<Figure> {
    println!("\nComparing coding schemes: {}", scheme_list());

    SweepAxis::ALL
        .iter()
        .filter_map(|&axis| axis_figure(inventory, axis))
        .collect()
}

fn scheme_list() -> String {
    CodingScheme::ALL
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn axis_figure(inventory: &Inventory, axis: SweepAxis) -> Option<Figure> {
    let files: Vec<(CodingScheme, &TebFile)> = CodingScheme::ALL
        .iter()
        .filter_map(|&scheme| find_file(inventory, axis, scheme).map(|f| (scheme, f)))
        .collect();
    if files.is_empty() {
        log::debug!("no comparison input for {}", axis.label());
        return None;
    }

    let title = format!("TEB = f({}): {}", axis.label(), scheme_list());
    println!("{title}");
    let mut schemes = Vec::new();
    let mut tables: Vec<(&TebFile, Table)> = Vec::new();
    for (scheme, file) in files {
        if let Some(table) = read_teb(&file.path) {
            schemes.push(scheme);
            tables.push((file, table));
        }
    }

    let (x_label, y_column) = shared_columns(&title, &tables)?;

    // Running range across every trace of the figure.
    let range = tables
        .iter()
        .filter_map(|(_, t)| ValueRange::of(&t.series.y))
        .reduce(ValueRange::merge);
    let y_scale = AxisScale::for_range(range);

    let traces = schemes
        .iter()
        .zip(&tables)
        .map(|(&scheme, (_, table))| Trace {
            label: Some(scheme.label().to_string()),
            points: table.series.points(),
            style: TraceStyle {
                color: scheme_color(scheme),
                marker: Some(scheme_marker(scheme)),
                width: TEB_LINE_WIDTH,
            },
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
