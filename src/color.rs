use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Continuous scale: value → Color32
// ---------------------------------------------------------------------------

/// Plasma-like colour stops, low to high.
const STOPS: [(u8, u8, u8); 5] = [
    (13, 8, 135),
    (126, 3, 168),
    (204, 71, 120),
    (248, 149, 64),
    (240, 249, 33),
];

/// Maps a numeric range onto a sequential colour ramp for the choropleth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousScale {
    pub min: f64,
    pub max: f64,
}

impl ContinuousScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` on the ramp in `[0, 1]`; a zero-width range maps
    /// everything to the middle.
    pub fn normalize(&self, value: f64) -> f32 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        Self::sample(self.normalize(value))
    }

    /// Colour at position `t` in `[0, 1]`, interpolated in linear RGB.
    pub fn sample(t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let segments = (STOPS.len() - 1) as f32;
        let scaled = t * segments;
        let idx = (scaled.floor() as usize).min(STOPS.len() - 2);
        let frac = scaled - idx as f32;

        let lo = stop_linear(STOPS[idx]);
        let hi = stop_linear(STOPS[idx + 1]);
        to_color32(Srgb::from_linear(lo.mix(hi, frac)))
    }

    /// `(value, colour)` pairs spanning the range, for the legend.
    pub fn legend_entries(&self, steps: usize) -> Vec<(f64, Color32)> {
        if steps < 2 {
            return vec![(self.min, self.color_for(self.min))];
        }
        (0..steps)
            .map(|i| {
                let t = i as f64 / (steps - 1) as f64;
                let value = self.min + t * (self.max - self.min);
                (value, Self::sample(t as f32))
            })
            .collect()
    }
}

fn stop_linear((r, g, b): (u8, u8, u8)) -> LinSrgb {
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}
