//! # Pricing Calculations
//!
//! Each calculation is a pure function over borrowed inputs. Nothing here
//! holds state between calls, so the same inputs always give the same
//! breakdown and any of these can be called from several threads at once.
//!
//! ## Available Calculations
//!
//! - [`widths`] - Effective print/cut width for a media roll
//! - [`tiling`] - Splitting printed pieces into roll-width columns
//! - [`cut_packing`] - Rows of identical cut-vinyl pieces across the cut width
//! - [`substrate_fraction`] - Quarter-sheet billing for substrate signs
//! - [`delivery`] - Girth band lookup
//! - [`pricing`] - The per-mode composition of all of the above

pub mod cut_packing;
pub mod delivery;
pub mod pricing;
pub mod substrate_fraction;
pub mod tiling;
pub mod widths;

// Re-export commonly used types
pub use cut_packing::{cut_vinyl_utilisation, CutPackingResult};
pub use delivery::{delivery_from_girth, BandQuote, DEFAULT_THICKNESS_MM};
pub use pricing::{price_single, price_with_catalog, PriceBreakdown};
pub use substrate_fraction::{substrate_fraction, SheetFraction, SubstrateUsage};
pub use tiling::{tile_vinyl_by_width, TilingResult};
pub use widths::{effective_widths, EffectiveWidths};
