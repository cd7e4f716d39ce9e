//! # Vinyl Tiling
//!
//! Splits a printed piece wider than the effective print width into
//! columns. Only the width is split; the roll is continuous along its
//! length, so columns are stacked one after another down the roll.
//!
//! ```text
//! columns = max(1, ceil((w + overlap) / max(1, print_w - overlap)))
//! lm      = columns * (h + gutter) / 1000
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Metres, Millimetres};

/// Result of tiling one piece across the roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilingResult {
    /// Number of roll-width columns, at least 1
    pub columns: u32,
    /// Roll consumed, before the per-job waste allowance
    pub linear_metres: f64,
    pub notes: Vec<String>,
}

/// Tile a margin-inflated piece across `effective_print_width_mm`.
///
/// The denominator is floored at 1 mm so an overlap as wide as the print
/// width cannot divide by zero or tile forever.
pub fn tile_vinyl_by_width(
    piece_width_mm: f64,
    piece_height_mm: f64,
    effective_print_width_mm: f64,
    overlap_mm: f64,
    gutter_mm: f64,
) -> TilingResult {
    let usable = (effective_print_width_mm - overlap_mm).max(1.0);
    // A zero-width piece still occupies one column
    let columns = ((piece_width_mm + overlap_mm) / usable).ceil().max(1.0) as u32;

    let run = Millimetres(columns as f64 * (piece_height_mm + gutter_mm));
    let linear_metres = Metres::from(run).value();

    TilingResult {
        columns,
        linear_metres,
        notes: vec![format!(
            "Tiled into {} column(s) @ {}mm max print width",
            columns, effective_print_width_mm
        )],
    }
}
