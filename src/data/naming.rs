use std::fmt;

// ---------------------------------------------------------------------------
// Filename conventions
// ---------------------------------------------------------------------------

const PROBE_PREFIX: &str = "sonde_";
const TEB_PREFIX: &str = "TEB_";
const CSV_SUFFIX: &str = ".csv";

const ENCODER_MARK: &str = "Codeur";
const WITHOUT_MARK: &str = "Sans";

/// Line-coding schemes compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CodingScheme {
    Nrz,
    Nrzt,
    Rz,
}

impl CodingScheme {
    /// Display order used by the comparison figures.
    pub const ALL: [CodingScheme; 3] = [CodingScheme::Nrz, CodingScheme::Nrzt, CodingScheme::Rz];

    pub fn label(self) -> &'static str {
        match self {
            CodingScheme::Nrz => "NRZ",
            CodingScheme::Nrzt => "NRZT",
            CodingScheme::Rz => "RZ",
        }
    }
}

impl fmt::Display for CodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Independent variable a TEB curve was swept against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SweepAxis {
    /// Plain file name: signal-to-noise ratio.
    Snr,
    NbEch,
    NbTrajets,
    Alpha,
    Tau,
}

impl SweepAxis {
    pub const ALL: [SweepAxis; 5] = [
        SweepAxis::Snr,
        SweepAxis::NbEch,
        SweepAxis::NbTrajets,
        SweepAxis::Alpha,
        SweepAxis::Tau,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SweepAxis::Snr => "SNR",
            SweepAxis::NbEch => "NbEch",
            SweepAxis::NbTrajets => "NbTrajets",
            SweepAxis::Alpha => "Alpha",
            SweepAxis::Tau => "Tau",
        }
    }
}

/// Whether a TEB file belongs to the with/without encoder comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderVariant {
    With,
    Without,
}

/// Ordered scheme patterns. Longest first: `NRZ` is contained in `NRZT`,
/// and `RZ` in both.
const SCHEME_RULES: [(&str, CodingScheme); 3] = [
    ("NRZT", CodingScheme::Nrzt),
    ("NRZ", CodingScheme::Nrz),
    ("RZ", CodingScheme::Rz),
];

const AXIS_RULES: [(&str, SweepAxis); 4] = [
    ("NbTrajets", SweepAxis::NbTrajets),
    ("NbEch", SweepAxis::NbEch),
    ("Alpha", SweepAxis::Alpha),
    ("Tau", SweepAxis::Tau),
];

// ---------------------------------------------------------------------------
// Parsed names
// ---------------------------------------------------------------------------

/// `sonde_<name>.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeName {
    pub name: String,
}

impl ProbeName {
    /// Probe name as shown in figure titles.
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// `TEB_<analysis>.csv`, with the metadata encoded in `<analysis>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TebName {
    pub analysis: String,
    pub axis: SweepAxis,
    pub scheme: Option<CodingScheme>,
    pub encoder: Option<EncoderVariant>,
}

impl TebName {
    fn parse(analysis: &str) -> Self {
        let scheme = SCHEME_RULES
            .iter()
            .find(|(pattern, _)| analysis.contains(pattern))
            .map(|&(_, scheme)| scheme);
        let axis = AXIS_RULES
            .iter()
            .find(|(pattern, _)| analysis.contains(pattern))
            .map(|&(_, axis)| axis)
            .unwrap_or(SweepAxis::Snr);
        let encoder = analysis.contains(ENCODER_MARK).then(|| {
            if analysis.contains(WITHOUT_MARK) {
                EncoderVariant::Without
            } else {
                EncoderVariant::With
            }
        });

        TebName {
            analysis: analysis.to_string(),
            axis,
            scheme,
            encoder,
        }
    }

    /// Key used to gather files onto one figure in individual mode.
    /// Every encoder file shares the same figure.
    pub fn group_key(&self) -> &str {
        if self.encoder.is_some() {
            ENCODER_MARK
        } else {
            &self.analysis
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvKind {
    Probe(ProbeName),
    Teb(TebName),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvName {
    pub file_name: String,
    pub kind: CsvKind,
}

/// Classify a file name. Names outside both conventions yield `None`.
pub fn parse_file_name(file_name: &str) -> Option<CsvName> {
    let stem = file_name.strip_suffix(CSV_SUFFIX)?;

    let kind = if let Some(name) = stem.strip_prefix(PROBE_PREFIX) {
        CsvKind::Probe(ProbeName {
            name: name.to_string(),
        })
    } else if let Some(analysis) = stem.strip_prefix(TEB_PREFIX) {
        CsvKind::Teb(TebName::parse(analysis))
    } else {
        return None;
    };

    Some(CsvName {
        file_name: file_name.to_string(),
        kind,
    })
}
