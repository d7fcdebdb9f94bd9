use std::path::Path;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn bit(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

/// Complementary error function (Abramowitz & Stegun 7.1.26).
fn erfc(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.3275911 * x.abs());
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    let r = poly * (-x * x).exp();
    if x >= 0.0 {
        r
    } else {
        2.0 - r
    }
}

/// Theoretical bit error rate for an SNR per bit in dB, shifted by a
/// per-scheme penalty and blurred by a little measurement noise.
fn teb(snr_db: f64, penalty_db: f64, rng: &mut SimpleRng) -> f64 {
    let eb_n0 = 10f64.powf((snr_db - penalty_db) / 10.0);
    let ideal = 0.5 * erfc(eb_n0.sqrt());
    ideal * (1.0 + 0.1 * (rng.next_f64() - 0.5))
}

fn write_columns(path: &Path, headers: [&str; 2], rows: &[(f64, f64)]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(headers)?;
    for (x, y) in rows {
        writer.write_record([x.to_string(), y.to_string()])?;
    }
    writer.flush()?;
    println!("  - {}: {} rows", path.display(), rows.len());
    Ok(())
}

/// Probe dumps: the emitted bits, then a copy with a few flipped bits.
fn write_probes(rng: &mut SimpleRng) -> Result<()> {
    let source: Vec<bool> = (0..500).map(|_| rng.bit()).collect();
    let received: Vec<bool> = source
        .iter()
        .map(|&b| if rng.next_f64() < 0.02 { !b } else { b })
        .collect();

    for (name, bits) in [
        ("Source", &source),
        ("Emetteur", &source),
        ("Destination", &received),
    ] {
        let rows: Vec<(f64, f64)> = bits
            .iter()
            .enumerate()
            .map(|(i, &b)| (i as f64, if b { 1.0 } else { 0.0 }))
            .collect();
        write_columns(Path::new(&format!("sonde_{name}.csv")), ["index", "valeur"], &rows)?;
    }
    Ok(())
}

/// Per axis: file qualifier, column name, and (x, SNR in dB) pairs.
fn axis_sweeps() -> Vec<(&'static str, &'static str, Vec<(f64, f64)>)> {
    let snr: Vec<(f64, f64)> = (-4..=10).map(|db| (db as f64, db as f64)).collect();
    let nb_ech: Vec<(f64, f64)> = [6, 12, 18, 24, 30, 36, 42, 48]
        .iter()
        .map(|&n| (n as f64, 10.0 * (n as f64 / 6.0).log10()))
        .collect();
    let nb_trajets: Vec<(f64, f64)> = (0..=5).map(|n| (n as f64, 8.0 - 1.5 * n as f64)).collect();
    let alpha: Vec<(f64, f64)> = (1..=9)
        .map(|i| {
            let a = i as f64 / 10.0;
            (a, 8.0 + 10.0 * (1.0 - a).log10())
        })
        .collect();
    let tau: Vec<(f64, f64)> = (0..=8).map(|t| (t as f64 * 5.0, 8.0 - 0.4 * t as f64)).collect();

    vec![
        ("", "SNR_dB", snr),
        ("_NbEch", "NbEch", nb_ech),
        ("_NbTrajets", "NbTrajets", nb_trajets),
        ("_Alpha", "Alpha", alpha),
        ("_Tau", "Tau", tau),
    ]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    println!("Writing probe files:");
    write_probes(&mut rng)?;

    println!("Writing TEB files:");
    let sweeps = axis_sweeps();

    // Per-analysis files, scheme-less.
    for (qualifier, column, points) in &sweeps {
        let stem = if qualifier.is_empty() { "_SNR_dB" } else { *qualifier };
        let rows: Vec<(f64, f64)> = points
            .iter()
            .map(|&(x, snr)| (x, teb(snr, 0.0, &mut rng)))
            .collect();
        write_columns(Path::new(&format!("TEB{stem}.csv")), [*column, "teb"], &rows)?;
    }

    // With / without channel encoder.
    let (_, column, snr_points) = &sweeps[0];
    for (name, penalty) in [("AvecCodeur", -2.0), ("SansCodeur", 0.0)] {
        let rows: Vec<(f64, f64)> = snr_points
            .iter()
            .map(|&(x, snr)| (x, teb(snr, penalty, &mut rng)))
            .collect();
        write_columns(Path::new(&format!("TEB_{name}.csv")), [*column, "teb"], &rows)?;
    }

    // Coding-scheme comparison inputs.
    for (scheme, penalty) in [("NRZ", 0.0), ("NRZT", 0.8), ("RZ", 3.0)] {
        for (qualifier, column, points) in &sweeps {
            let rows: Vec<(f64, f64)> = points
                .iter()
                .map(|&(x, snr)| (x, teb(snr, penalty, &mut rng)))
                .collect();
            write_columns(
                Path::new(&format!("TEB_{scheme}{qualifier}.csv")),
                [*column, "teb"],
                &rows,
            )?;
        }
    }

    println!("Done. Run `sim-curves` or `sim-curves --compare` in this directory.");
    Ok(())
}
