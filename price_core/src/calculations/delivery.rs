//! # Delivery Bands
//!
//! Maps a package girth (L + W + H, cm) onto the configured price bands.
//! Bands are scanned in list order and the first whose threshold covers the
//! girth wins; thresholds are inclusive. When nothing matches the last band
//! is used as the catch-all.
//!
//! Signs carry no thickness, so a flat [`DEFAULT_THICKNESS_MM`] stands in
//! for the third dimension.
//!
//! ## Example
//!
//! ```rust
//! use price_core::calculations::delivery::delivery_from_girth;
//! use price_core::settings::DeliverySettings;
//!
//! let delivery = DeliverySettings::default();
//! // (600 + 390 + 10) / 10 = 100cm, exactly on the Under100 threshold
//! let quote = delivery_from_girth(&delivery, 600.0, 390.0).unwrap();
//! assert_eq!(quote.band, "Under100");
//! assert_eq!(quote.price, 5.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::settings::{DeliveryBand, DeliverySettings};
use crate::units::{Centimetres, Millimetres};

/// Package thickness assumed for girth (mm)
pub const DEFAULT_THICKNESS_MM: f64 = 10.0;

/// Selected delivery band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandQuote {
    pub band: String,
    pub price: f64,
    pub girth_cm: f64,
}

/// Girth in cm for a package of the given size in mm.
pub fn girth_cm(width_mm: f64, height_mm: f64, thickness_mm: f64) -> f64 {
    Centimetres::from(Millimetres(width_mm + height_mm + thickness_mm)).value()
}

/// First band in list order whose threshold is >= `girth`, else the last band.
pub fn resolve_band(bands: &[DeliveryBand], girth: f64) -> Option<&DeliveryBand> {
    bands
        .iter()
        .find(|band| girth <= band.max_girth_cm)
        .or_else(|| bands.last())
}

/// Resolve the delivery band for a sign of the given size.
///
/// Returns `None` only when no bands are configured at all.
pub fn delivery_from_girth(delivery: &DeliverySettings, width_mm: f64, height_mm: f64) -> Option<BandQuote> {
    delivery_from_girth_with_thickness(delivery, width_mm, height_mm, DEFAULT_THICKNESS_MM)
}

/// As [`delivery_from_girth`], with an explicit package thickness.
pub fn delivery_from_girth_with_thickness(
    delivery: &DeliverySettings,
    width_mm: f64,
    height_mm: f64,
    thickness_mm: f64,
) -> Option<BandQuote> {
    if !delivery.bands_ascending() {
        warn!("delivery bands are not in ascending girth order; first match wins");
    }

    let girth = girth_cm(width_mm, height_mm, thickness_mm);
    let band = resolve_band(&delivery.bands, girth)?;

    Some(BandQuote {
        band: band.name.clone(),
        price: band.price,
        girth_cm: girth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_bands() -> Vec<DeliveryBand> {
        vec![
            DeliveryBand::new("Under100", 100.0, 5.0),
            DeliveryBand::new("Band101to150", 150.0, 10.0),
        ]
    }

    #[test]
    fn test_girth() {
        assert_eq!(girth_cm(3000.0, 1500.0, DEFAULT_THICKNESS_MM), 451.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let bands = two_bands();
        let band = resolve_band(&bands, 100.0).unwrap();
        assert_eq!(band.name, "Under100");
        assert_eq!(band.price, 5.0);

        let band = resolve_band(&bands, 100.1).unwrap();
        assert_eq!(band.name, "Band101to150");
    }

    #[test]
    fn test_falls_back_to_last_band() {
        let bands = two_bands();
        let band = resolve_band(&bands, 400.0).unwrap();
        assert_eq!(band.name, "Band101to150");
    }

    #[test]
    fn test_default_bands_large_sign() {
        let quote = delivery_from_girth(&DeliverySettings::default(), 3000.0, 1500.0).unwrap();
        assert_eq!(quote.band, "Over200");
        assert_eq!(quote.price, 30.0);
        assert_eq!(quote.girth_cm, 451.0);
    }

    #[test]
    fn test_default_bands_beyond_top_threshold_use_collection() {
        // Past Over200's 9999cm the trailing band is the catch-all
        let quote = delivery_from_girth(&DeliverySettings::default(), 60000.0, 40000.0).unwrap();
        assert_eq!(quote.band, "CustomerCollection");
        assert_eq!(quote.price, 0.0);
    }

    #[test]
    fn test_list_order_not_sorted() {
        let delivery = DeliverySettings {
            base_fee: 0.0,
            bands: vec![
                DeliveryBand::new("Big", 200.0, 20.0),
                DeliveryBand::new("Small", 100.0, 5.0),
            ],
        };
        let quote = delivery_from_girth(&delivery, 300.0, 200.0).unwrap();
        assert_eq!(quote.band, "Big");
    }

    #[test]
    fn test_explicit_thickness() {
        let quote =
            delivery_from_girth_with_thickness(&DeliverySettings::default(), 600.0, 390.0, 20.0).unwrap();
        assert_eq!(quote.girth_cm, 101.0);
        assert_eq!(quote.band, "Band101to150");
    }

    #[test]
    fn test_no_bands() {
        let delivery = DeliverySettings { base_fee: 9.5, bands: vec![] };
        assert!(delivery_from_girth(&delivery, 100.0, 100.0).is_none());
    }
}
