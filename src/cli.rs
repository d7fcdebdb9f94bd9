use clap::Parser;

use crate::state::Mode;

/// Plot the probe and bit-error-rate CSV files found in the current directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "sim-curves", author, version, about)]
pub struct Args {
    /// Compare the NRZ, NRZT and RZ coding schemes instead of plotting
    /// every file individually
    #[arg(short, long, default_value_t = false)]
    pub compare: bool,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.compare {
            Mode::Comparison
        } else {
            Mode::Individual
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_mode_by_default() {
        let args = Args::try_parse_from(["sim-curves"]).unwrap();
        assert_eq!(args.mode(), Mode::Individual);
    }

    #[test]
    fn compare_flag_selects_comparison() {
        for argv in [["sim-curves", "--compare"], ["sim-curves", "-c"]] {
            let args = Args::try_parse_from(argv).unwrap();
            assert_eq!(args.mode(), Mode::Comparison);
        }
    }

    #[test]
    fn other_flags_are_rejected() {
        assert!(Args::try_parse_from(["sim-curves", "--dir", "x"]).is_err());
    }
}
