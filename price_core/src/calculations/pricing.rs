//! # Single Sign Pricing
//!
//! Composes the width, tiling, packing, sheet and delivery calculations into
//! one itemised price for a sign.
//!
//! ## Cost Composition
//!
//! ```text
//! ink          = area_m2 * ink_cost_per_sqm           (0 for cut vinyl / bare substrate)
//! cutting      = cut_per_sign * qty (+ complexity labour for cut vinyl)
//! materials    = vinyl lm (+ waste) * price_per_lm + tape + sheet cost
//! pre_delivery = (setup + materials + ink + cutting) * profit_multiplier
//! delivery     = base_fee + band price
//! total        = pre_delivery + delivery
//! ```
//!
//! The finishing uplift is reported alongside but is not part of
//! `pre_delivery`. VAT is not applied.
//!
//! ## Example
//!
//! ```rust
//! use price_core::calculations::pricing::price_single;
//! use price_core::catalog::Catalog;
//! use price_core::settings::Settings;
//! use price_core::sign::{Complexity, ProductionMode, SignInput};
//!
//! let catalog = Catalog::default();
//! let sign = SignInput::new(ProductionMode::SolidColourCutVinyl, 200.0, 100.0, 20)
//!     .with_media("frosted610")
//!     .with_complexity(Complexity::Basic);
//!
//! let breakdown = price_single(&sign, &catalog.media, &catalog.substrates, &Settings::default()).unwrap();
//!
//! assert_eq!(breakdown.setup, 5.0);
//! assert!((breakdown.total - (breakdown.pre_delivery + breakdown.delivery)).abs() < 0.011);
//! println!("Total: £{:.2} ({})", breakdown.total, breakdown.notes.join("; "));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::cut_packing::cut_vinyl_utilisation;
use crate::calculations::delivery::delivery_from_girth;
use crate::calculations::substrate_fraction::{substrate_fraction, SheetFraction, SubstrateUsage};
use crate::calculations::tiling::tile_vinyl_by_width;
use crate::calculations::widths::effective_widths;
use crate::catalog::{self, Catalog, MediaItem, Substrate};
use crate::errors::{CatalogKind, PriceError, PriceResult};
use crate::settings::Settings;
use crate::sign::{Finishing, ProductionMode, SignInput};
use crate::units::{round_to, Millimetres, SquareMetres};

/// Itemised price for one sign line.
///
/// Money is rounded to 2 places, linear metres to 3 and percentages to 1.
/// The statistics fields are only present for the modes that produce them.
///
/// ## JSON Example
///
/// ```json
/// {
///   "materials": 65.01,
///   "ink": 7.88,
///   "setup": 5.0,
///   "cutting": 3.0,
///   "finishing_uplift": 3.14,
///   "pre_delivery": 145.58,
///   "delivery": 39.5,
///   "total": 185.08,
///   "vinyl_lm": 5.53,
///   "vinyl_lm_with_waste": 5.53,
///   "tiles": 3,
///   "sheet_fraction": 1.0,
///   "sheets_used": 1,
///   "usage_pct": 100.0,
///   "waste_pct": 0.0,
///   "delivery_band": "Over200",
///   "notes": ["Tiled into 3 column(s) @ 1340mm max print width"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub materials: f64,
    pub ink: f64,
    pub setup: f64,
    pub cutting: f64,
    /// Finishing surcharge, reported but not included in `pre_delivery`
    pub finishing_uplift: f64,
    /// (setup + materials + ink + cutting) * profit multiplier
    pub pre_delivery: f64,
    /// Base fee + band price
    pub delivery: f64,
    pub total: f64,

    /// Vinyl consumed including the per-job waste. Present only for vinyl modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vinyl_lm: Option<f64>,
    /// Same figure as `vinyl_lm`, kept for consumers that read this name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vinyl_lm_with_waste: Option<f64>,
    /// Tiled columns. Present only for printed modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles: Option<u32>,
    /// Billed sheet portion. Present only for substrate modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_fraction: Option<SheetFraction>,
    /// Present only for substrate modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets_used: Option<u32>,
    /// Present only for substrate modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_pct: Option<f64>,
    /// Present only for substrate modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_pct: Option<f64>,
    /// Absent only when no delivery bands are configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_band: Option<String>,

    #[serde(default)]
    pub notes: Vec<String>,
}

impl PriceBreakdown {
    /// Cost subtotal before markup, from the reported (rounded) lines
    pub fn cost_subtotal(&self) -> f64 {
        self.setup + self.materials + self.ink + self.cutting
    }
}

/// Vinyl run length including the waste allowance.
#[derive(Debug, Clone, Copy)]
struct VinylRun {
    lm_with_waste: f64,
}

/// Running totals while the mode branches contribute.
struct CostSheet<'a> {
    settings: &'a Settings,
    materials: f64,
    ink: f64,
    setup: f64,
    cutting: f64,
    finishing_uplift: f64,
    vinyl: Option<VinylRun>,
    notes: Vec<String>,
}

impl<'a> CostSheet<'a> {
    fn add_vinyl(&mut self, lm: f64, price_per_lm: f64) {
        let lm_with_waste = lm + self.settings.vinyl_waste_lm_per_job;
        self.materials += lm_with_waste * price_per_lm;
        self.vinyl = Some(VinylRun { lm_with_waste });
    }

    fn add_application_tape(&mut self, input: &SignInput) {
        let margin = Millimetres(self.settings.vinyl_margin_mm);
        let piece = (Millimetres(input.width_mm) + margin) * (Millimetres(input.height_mm) + margin);
        let area = SquareMetres::from(piece * input.qty as f64);
        self.materials += area.value() * self.settings.application_tape_per_sqm;
    }

    /// Proportional surcharge on everything accumulated so far
    fn apply_finishing(&mut self, finishing: Finishing) {
        self.finishing_uplift = self.settings.finishing_uplifts.rate(finishing)
            * (self.materials + self.ink + self.cutting + self.setup);
    }
}

/// Price one sign against the supplied catalogs and settings.
///
/// # Errors
///
/// Returns [`PriceError::MissingCatalogReference`] when the mode needs a
/// media roll or substrate that was not selected or is not in the catalog.
/// No other input is validated; odd dimensions flow through the arithmetic.
pub fn price_single(
    input: &SignInput,
    media: &[MediaItem],
    substrates: &[Substrate],
    settings: &Settings,
) -> PriceResult<PriceBreakdown> {
    let s = settings;
    let qty = input.qty as f64;

    let area = if input.mode.uses_ink() {
        SquareMetres::from(Millimetres(input.width_mm) * Millimetres(input.height_mm) * qty).value()
    } else {
        0.0
    };

    let mut sheet = CostSheet {
        settings: s,
        materials: 0.0,
        ink: area * s.ink_cost_per_sqm,
        setup: s.setup_fee,
        cutting: s.cut_per_sign * qty,
        finishing_uplift: 0.0,
        vinyl: None,
        notes: Vec::new(),
    };
    let mut tiles = None;
    let mut usage: Option<SubstrateUsage> = None;

    let media_item = input
        .media_id
        .as_deref()
        .and_then(|id| catalog::find_media(media, id));
    let substrate_item = input
        .substrate_id
        .as_deref()
        .and_then(|id| catalog::find_substrate(substrates, id));

    let piece_w = input.width_mm + s.vinyl_margin_mm;
    let piece_h = input.height_mm + s.vinyl_margin_mm;
    let finishing = input.finishing_or_default();

    if input.mode == ProductionMode::SolidColourCutVinyl {
        let media_item = media_item.ok_or_else(|| {
            PriceError::missing_reference(CatalogKind::Media, input.media_id.as_deref(), "Select a vinyl media")
        })?;
        let widths = effective_widths(media_item, s);

        let packing = cut_vinyl_utilisation(piece_w, piece_h, input.qty, widths.cut_width_mm, s.vinyl_margin_mm);
        sheet.notes.extend(packing.notes);
        sheet.add_vinyl(packing.linear_metres, media_item.price_per_lm);

        if let Some(complexity) = input.complexity {
            sheet.cutting += s.complexity_per_sticker.per_sticker(complexity) * qty;
        }

        // Tape goes on cut lettering unless switched off
        if input.application_tape != Some(false) {
            sheet.add_application_tape(input);
        }

        sheet.apply_finishing(finishing);
    }

    if input.mode.is_printed() {
        let media_item = media_item.ok_or_else(|| {
            PriceError::missing_reference(CatalogKind::Media, input.media_id.as_deref(), "Select a printable media")
        })?;
        let widths = effective_widths(media_item, s);

        let tiling = tile_vinyl_by_width(piece_w, piece_h, widths.print_width_mm, s.tile_overlap_mm, s.vinyl_margin_mm);
        sheet.notes.extend(tiling.notes);
        tiles = Some(tiling.columns);
        sheet.add_vinyl(tiling.linear_metres, media_item.price_per_lm);

        let needs_cut = input.mode != ProductionMode::PrintedVinylOnly && finishing != Finishing::None;
        if needs_cut && widths.cut_width_mm < widths.print_width_mm {
            sheet.notes.push(format!(
                "Cut limited to {}mm; printing at {}mm",
                widths.cut_width_mm, widths.print_width_mm
            ));
        }

        // Printed work only gets tape when asked for
        if input.mode != ProductionMode::PrintedVinylOnly && input.application_tape == Some(true) {
            sheet.add_application_tape(input);
        }

        sheet.apply_finishing(finishing);
    }

    if input.mode.uses_substrate() {
        let substrate = substrate_item.ok_or_else(|| {
            PriceError::missing_reference(CatalogKind::Substrate, input.substrate_id.as_deref(), "Select a substrate")
        })?;

        let sheet_usage = substrate_fraction(
            input.width_mm + s.substrate_margin_mm,
            input.height_mm + s.substrate_margin_mm,
            substrate.sheet_width_mm,
            substrate.sheet_height_mm,
            s.substrate_margin_mm,
        );
        let faces = if input.double_sided { 2.0 } else { 1.0 };
        sheet.materials += substrate.price_per_sheet * sheet_usage.fraction.as_f64() * faces;
        usage = Some(sheet_usage);
    }

    // Totals
    let base = sheet.setup + sheet.materials + sheet.ink + sheet.cutting;
    let pre_delivery = base * s.profit_multiplier;

    let band = delivery_from_girth(&s.delivery, input.width_mm, input.height_mm);
    if band.is_none() {
        warn!("no delivery bands configured; charging base fee only");
    }
    let delivery = s.delivery.base_fee + band.as_ref().map_or(0.0, |b| b.price);
    let total = pre_delivery + delivery;

    debug!(
        mode = ?input.mode,
        qty = input.qty,
        base,
        pre_delivery,
        delivery,
        total,
        "priced single sign"
    );

    Ok(PriceBreakdown {
        materials: round_to(sheet.materials, 2),
        ink: round_to(sheet.ink, 2),
        setup: round_to(sheet.setup, 2),
        cutting: round_to(sheet.cutting, 2),
        finishing_uplift: round_to(sheet.finishing_uplift, 2),
        pre_delivery: round_to(pre_delivery, 2),
        delivery: round_to(delivery, 2),
        total: round_to(total, 2),
        vinyl_lm: sheet.vinyl.map(|v| round_to(v.lm_with_waste, 3)),
        vinyl_lm_with_waste: sheet.vinyl.map(|v| round_to(v.lm_with_waste, 3)),
        tiles,
        sheet_fraction: usage.map(|u| u.fraction),
        sheets_used: usage.map(|_| 1),
        usage_pct: usage.map(|u| round_to(u.usage_pct, 1)),
        waste_pct: usage.map(|u| round_to(u.waste_pct(), 1)),
        delivery_band: band.map(|b| b.band),
        notes: sheet.notes,
    })
}

/// [`price_single`] against a [`Catalog`].
pub fn price_with_catalog(input: &SignInput, catalog: &Catalog, settings: &Settings) -> PriceResult<PriceBreakdown> {
    price_single(input, &catalog.media, &catalog.substrates, settings)
}
