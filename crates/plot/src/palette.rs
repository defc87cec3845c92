// File: crates/plot/src/palette.rs
// Summary: Station color assignment; golden-angle HSL palette keyed by station identifier.

use std::collections::HashMap;

use chart_core::Rgb;
use luft_provider::Station;

/// Color for a line whose station is missing from the [`ColorMap`]: opaque black.
pub const DEFAULT_SERIES_COLOR: Rgb = Rgb::BLACK;

/// Hue step between consecutive palette entries, in degrees.
const GOLDEN_ANGLE: f64 = 137.507_764_050_037_85;

/// Hue of the first entry, in degrees (a warm orange-red).
const START_HUE: f64 = 12.0;

/// (saturation, lightness) bands cycled per entry so hue neighbours also differ in shade.
const BANDS: [(f64, f64); 3] = [(0.72, 0.50), (0.62, 0.62), (0.80, 0.40)];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("cannot build a palette of zero colors")]
    Empty,
}

/// Station identifier to line color. Keys compare exactly (case-sensitive).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorMap {
    colors: HashMap<String, Rgb>,
}

impl ColorMap {
    pub fn insert(&mut self, station: impl Into<String>, color: Rgb) {
        self.colors.insert(station.into(), color);
    }

    pub fn get(&self, station: &str) -> Option<Rgb> {
        self.colors.get(station).copied()
    }

    /// The station's color, or [`DEFAULT_SERIES_COLOR`] when it has none.
    pub fn get_or_default(&self, station: &str) -> Rgb {
        self.get(station).unwrap_or(DEFAULT_SERIES_COLOR)
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

/// Assigns each station a color.
pub trait ColorAssigner {
    fn assign(&self, stations: &[Station]) -> Result<ColorMap, PaletteError>;
}

/// Bright, well-separated colors from [`happy_palette`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HappyPalette;

impl ColorAssigner for HappyPalette {
    /// A later station with a repeated identifier overwrites the earlier one's color.
    fn assign(&self, stations: &[Station]) -> Result<ColorMap, PaletteError> {
        let palette = happy_palette(stations.len())?;
        let mut map = ColorMap::default();
        for (station, color) in stations.iter().zip(palette) {
            map.insert(station.station.clone(), color);
        }
        Ok(map)
    }
}

/// `n` colors with hues stepped by the golden angle. Deterministic for a given `n`.
pub fn happy_palette(n: usize) -> Result<Vec<Rgb>, PaletteError> {
    if n == 0 {
        return Err(PaletteError::Empty);
    }
    Ok((0..n)
        .map(|i| {
            let (s, l) = BANDS[i % BANDS.len()];
            let h = (START_HUE + i as f64 * GOLDEN_ANGLE).rem_euclid(360.0);
            hsl_to_rgb(h, s, l)
        })
        .collect())
}

fn hsl_to_rgb(h_deg: f64, s: f64, l: f64) -> Rgb {
    let h = (h_deg % 360.0) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = l as f32;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 { t += 1.0; }
        if t > 1.0 { t -= 1.0; }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    Rgb::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0) as f32,
        hue_to_rgb(p, q, h) as f32,
        hue_to_rgb(p, q, h - 1.0 / 3.0) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5).to_rgb255(), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5).to_rgb255(), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5).to_rgb255(), (0, 0, 255));
        assert_eq!(hsl_to_rgb(77.0, 0.0, 0.5).to_rgb255(), (128, 128, 128));
    }
}
