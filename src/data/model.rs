use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Series / Table – parsed CSV content
// ---------------------------------------------------------------------------

/// Paired samples read from one CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    /// Same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

/// A TEB file: the first two columns and their header names.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub x_name: String,
    pub y_name: String,
    pub series: Series,
}

impl Table {
    pub fn same_columns(&self, other: &Table) -> bool {
        self.x_name == other.x_name && self.y_name == other.y_name
    }
}

// ---------------------------------------------------------------------------
// Value range and log-scale detection
// ---------------------------------------------------------------------------

/// Ratio above which a strictly positive series is shown on a log axis.
pub const LOG_SCALE_RATIO: f64 = 100.0;

/// `true` iff `min > 0` and `max / min > 100`.
pub fn wants_log_scale(min: f64, max: f64) -> bool {
    min > 0.0 && max / min > LOG_SCALE_RATIO
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Min/max of `values`, ignoring NaN. `None` when nothing is left.
    pub fn of(values: &[f64]) -> Option<Self> {
        values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| {
                Some(match acc {
                    None => ValueRange { min: v, max: v },
                    Some(r) => ValueRange {
                        min: r.min.min(v),
                        max: r.max.max(v),
                    },
                })
            })
    }

    pub fn merge(self, other: ValueRange) -> ValueRange {
        ValueRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn wants_log_scale(&self) -> bool {
        wants_log_scale(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl AxisScale {
    pub fn for_range(range: Option<ValueRange>) -> Self {
        match range {
            Some(r) if r.wants_log_scale() => AxisScale::Log,
            _ => AxisScale::Linear,
        }
    }
}

// ---------------------------------------------------------------------------
// Figure – what the viewer draws
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    pub color: Color32,
    pub marker: Option<Marker>,
    pub width: f32,
}

/// One curve on a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Legend entry; unlabelled traces stay out of the legend.
    pub label: Option<String>,
    pub points: Vec<[f64; 2]>,
    pub style: TraceStyle,
}

/// A chart ready to be shown in its own window.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: AxisScale,
    pub traces: Vec<Trace>,
    /// Initial window size in points.
    pub size: [f32; 2],
}

impl Figure {
    pub fn has_legend(&self) -> bool {
        self.traces.iter().any(|t| t.label.is_some())
    }

    pub fn point_count(&self) -> usize {
        self.traces.iter().map(|t| t.points.len()).sum()
    }
}
