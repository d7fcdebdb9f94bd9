use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::naming::CodingScheme;

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

pub const PROBE_BLUE: Color32 = Color32::from_rgb(0, 0, 255);
pub const ENCODER_GREEN: Color32 = Color32::from_rgb(0, 128, 0);
pub const NO_ENCODER_RED: Color32 = Color32::from_rgb(255, 0, 0);

/// Colour assigned to a coding scheme on comparison figures.
pub fn scheme_color(scheme: CodingScheme) -> Color32 {
    match scheme {
        CodingScheme::Nrz => Color32::from_rgb(31, 119, 180),
        CodingScheme::Nrzt => Color32::from_rgb(214, 39, 40),
        CodingScheme::Rz => Color32::from_rgb(44, 160, 44),
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

const PALETTE_START_HUE: f32 = 210.0;

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from blue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (PALETTE_START_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
