//! # Pricing Settings
//!
//! Business-tunable cost parameters: machine limits, spacing, unit costs,
//! finishing and complexity tables, delivery bands, markup and VAT.
//!
//! Settings are supplied by the caller on every calculation and treated as
//! a read-only snapshot; nothing in this crate caches or mutates them.
//!
//! ## Example
//!
//! ```rust
//! use price_core::settings::Settings;
//! use price_core::sign::Finishing;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.master_max_print_width_mm, 1340.0);
//! assert_eq!(settings.finishing_uplifts.rate(Finishing::KissCutOnRoll), 0.05);
//! ```

use serde::{Deserialize, Serialize};

use crate::sign::{Complexity, Finishing};

/// Complete cost configuration for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // Machine limits
    /// Widest print the printer can lay down (mm)
    pub master_max_print_width_mm: f64,
    /// Widest cut the plotter can make (mm)
    pub master_max_cut_width_mm: f64,

    // Spacing
    /// Margin added to each vinyl piece; also the gutter between pieces (mm)
    pub vinyl_margin_mm: f64,
    /// Margin added to each substrate piece and kept around a sheet edge (mm)
    pub substrate_margin_mm: f64,
    /// Overlap between neighbouring tiles (mm)
    pub tile_overlap_mm: f64,
    /// Vinyl waste allowance per job (linear metres)
    pub vinyl_waste_lm_per_job: f64,

    // Unit costs
    pub setup_fee: f64,
    pub cut_per_sign: f64,
    pub ink_cost_per_sqm: f64,
    pub application_tape_per_sqm: f64,

    /// Proportional surcharge per finishing kind (0.05 = +5%)
    pub finishing_uplifts: FinishingUplifts,

    /// Labour cost per sticker by cutting complexity
    pub complexity_per_sticker: ComplexityCosts,

    pub delivery: DeliverySettings,

    /// Markup applied once to the cost subtotal
    pub profit_multiplier: f64,

    /// Stored for display; not applied to any total
    pub vat_rate_pct: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            master_max_print_width_mm: 1340.0,
            master_max_cut_width_mm: 1340.0,
            vinyl_margin_mm: 5.0,
            substrate_margin_mm: 5.0,
            tile_overlap_mm: 10.0,
            vinyl_waste_lm_per_job: 1.0,
            setup_fee: 5.0,
            cut_per_sign: 3.0,
            ink_cost_per_sqm: 1.75,
            application_tape_per_sqm: 2.0,
            finishing_uplifts: FinishingUplifts::default(),
            complexity_per_sticker: ComplexityCosts::default(),
            delivery: DeliverySettings::default(),
            profit_multiplier: 1.8,
            vat_rate_pct: 20.0,
        }
    }
}

/// Finishing surcharge table, one rate per [`Finishing`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinishingUplifts {
    pub none: f64,
    pub kiss_cut_on_roll: f64,
    pub cut_into_sheets: f64,
    pub individually_cut: f64,
}

impl FinishingUplifts {
    /// Surcharge fraction for a finishing kind
    pub fn rate(&self, finishing: Finishing) -> f64 {
        match finishing {
            Finishing::None => self.none,
            Finishing::KissCutOnRoll => self.kiss_cut_on_roll,
            Finishing::CutIntoSheets => self.cut_into_sheets,
            Finishing::IndividuallyCut => self.individually_cut,
        }
    }
}

impl Default for FinishingUplifts {
    fn default() -> Self {
        FinishingUplifts {
            none: 0.0,
            kiss_cut_on_roll: 0.05,
            cut_into_sheets: 0.08,
            individually_cut: 0.12,
        }
    }
}

/// Cutting labour per sticker, one price per [`Complexity`] kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComplexityCosts {
    pub basic: f64,
    pub standard: f64,
    pub complex: f64,
}

impl ComplexityCosts {
    pub fn per_sticker(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Basic => self.basic,
            Complexity::Standard => self.standard,
            Complexity::Complex => self.complex,
        }
    }
}

impl Default for ComplexityCosts {
    fn default() -> Self {
        ComplexityCosts {
            basic: 0.2,
            standard: 0.4,
            complex: 0.8,
        }
    }
}

/// Delivery pricing: a flat base fee plus a girth band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliverySettings {
    pub base_fee: f64,

    /// Bands in ascending `max_girth_cm` order. The last band is the
    /// fallback when no threshold is met.
    pub bands: Vec<DeliveryBand>,
}

impl DeliverySettings {
    /// Whether the bands are in non-decreasing threshold order.
    ///
    /// The final band is the fallback and is not compared, so a trailing
    /// zero-threshold "collection" band still counts as ordered.
    pub fn bands_ascending(&self) -> bool {
        let ranked = match self.bands.split_last() {
            Some((_, rest)) => rest,
            None => return true,
        };
        ranked
            .windows(2)
            .all(|pair| pair[0].max_girth_cm <= pair[1].max_girth_cm)
    }
}

impl Default for DeliverySettings {
    fn default() -> Self {
        DeliverySettings {
            base_fee: 9.5,
            bands: vec![
                DeliveryBand::new("Under100", 100.0, 5.0),
                DeliveryBand::new("Band101to150", 150.0, 10.0),
                DeliveryBand::new("Band151to200", 200.0, 20.0),
                DeliveryBand::new("Over200", 9999.0, 30.0),
                DeliveryBand::new("CustomerCollection", 0.0, 0.0),
            ],
        }
    }
}

/// One delivery price band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryBand {
    pub name: String,
    /// Largest girth (L+W+H, cm) this band covers, inclusive
    pub max_girth_cm: f64,
    pub price: f64,
}

impl DeliveryBand {
    pub fn new(name: impl Into<String>, max_girth_cm: f64, price: f64) -> Self {
        DeliveryBand {
            name: name.into(),
            max_girth_cm,
            price,
        }
    }
}
