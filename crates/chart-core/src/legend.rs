// File: crates/chart-core/src/legend.rs
// Summary: Legend entries (color swatch + label), one per series, pinned to the plot's top-right corner.

use crate::types::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Clone, Debug, Default)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn add(&mut self, label: impl Into<String>, color: Rgb) {
        self.entries.push(LegendEntry { label: label.into(), color });
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
