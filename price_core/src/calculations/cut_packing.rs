//! # Cut Vinyl Packing
//!
//! Shelf-packs identical solid-colour pieces across the cut width: as many
//! per row as fit side by side, rows stacked down the roll. Correct for a
//! batch of one size; not a general bin packer.
//!
//! ## Example
//!
//! ```rust
//! use price_core::calculations::cut_packing::cut_vinyl_utilisation;
//!
//! // 205mm pieces + 5mm gutter across 1220mm: 5 per row, 20 signs -> 4 rows
//! let packing = cut_vinyl_utilisation(205.0, 105.0, 20, 1220.0, 5.0);
//! assert_eq!(packing.per_row, 5);
//! assert_eq!(packing.rows, 4);
//! assert!((packing.linear_metres - 0.44).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Metres, Millimetres};

/// Result of packing a batch of identical cut pieces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPackingResult {
    /// Roll consumed, before the per-job waste allowance
    pub linear_metres: f64,
    /// Pieces per row, at least 1
    pub per_row: u32,
    pub rows: u32,
    pub notes: Vec<String>,
}

/// Pack `qty` margin-inflated pieces across `effective_cut_width_mm`.
///
/// A piece wider than the cut width still counts as one per row; the
/// estimate degrades rather than failing.
pub fn cut_vinyl_utilisation(
    piece_width_mm: f64,
    piece_height_mm: f64,
    qty: u32,
    effective_cut_width_mm: f64,
    gutter_mm: f64,
) -> CutPackingResult {
    let fit = (effective_cut_width_mm / (piece_width_mm + gutter_mm)).floor();
    // NaN and negative fits fall through to the floor of one
    let per_row = if fit >= 1.0 { fit.min(u32::MAX as f64) as u32 } else { 1 };
    let rows = qty.div_ceil(per_row);

    let run = Millimetres(rows as f64 * (piece_height_mm + gutter_mm));
    let linear_metres = Metres::from(run).value();

    CutPackingResult {
        linear_metres,
        per_row,
        rows,
        notes: vec![format!(
            "{}/row across {}mm cut width, {} row(s)",
            per_row, effective_cut_width_mm, rows
        )],
    }
}
