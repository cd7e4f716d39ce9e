//! # Substrate Sheet Fraction
//!
//! Bills a single sign as a quarter, half, three-quarter or full sheet.
//! Utilisation is approximated by area ratio against the sheet area inside
//! its edge margin, then rounded up to the next quartile.
//!
//! | utilisation u | charged |
//! |---------------|---------|
//! | u <= 0.25     | 0.25    |
//! | u <= 0.50     | 0.50    |
//! | u <= 0.75     | 0.75    |
//! | otherwise     | 1.00    |

use serde::{Deserialize, Serialize};

/// Quantized portion of a sheet billed for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum SheetFraction {
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl SheetFraction {
    /// Smallest quartile that covers utilisation `u`
    pub fn for_utilisation(u: f64) -> Self {
        if u <= 0.25 {
            SheetFraction::Quarter
        } else if u <= 0.5 {
            SheetFraction::Half
        } else if u <= 0.75 {
            SheetFraction::ThreeQuarters
        } else {
            SheetFraction::Full
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            SheetFraction::Quarter => 0.25,
            SheetFraction::Half => 0.5,
            SheetFraction::ThreeQuarters => 0.75,
            SheetFraction::Full => 1.0,
        }
    }
}

impl From<SheetFraction> for f64 {
    fn from(fraction: SheetFraction) -> Self {
        fraction.as_f64()
    }
}

impl TryFrom<f64> for SheetFraction {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        [
            SheetFraction::Quarter,
            SheetFraction::Half,
            SheetFraction::ThreeQuarters,
            SheetFraction::Full,
        ]
        .into_iter()
        .find(|f| f.as_f64() == value)
        .ok_or_else(|| format!("sheet fraction must be 0.25, 0.5, 0.75 or 1, got {}", value))
    }
}

/// Sheet usage for one sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubstrateUsage {
    pub fraction: SheetFraction,
    /// Share of the usable sheet the sign covers, clamped to 0..=100
    pub usage_pct: f64,
}

impl SubstrateUsage {
    pub fn waste_pct(&self) -> f64 {
        100.0 - self.usage_pct
    }
}

/// Estimate the billed fraction of a sheet for one margin-inflated sign.
///
/// A sheet with no usable area (margins eat it all) counts as fully used.
pub fn substrate_fraction(
    sign_width_mm: f64,
    sign_height_mm: f64,
    sheet_width_mm: f64,
    sheet_height_mm: f64,
    margin_mm: f64,
) -> SubstrateUsage {
    let usable_w = (sheet_width_mm - 2.0 * margin_mm).max(0.0);
    let usable_h = (sheet_height_mm - 2.0 * margin_mm).max(0.0);
    let sheet_area = usable_w * usable_h;
    let sign_area = sign_width_mm * sign_height_mm;

    let u = if sheet_area > 0.0 { sign_area / sheet_area } else { 1.0 };

    SubstrateUsage {
        fraction: SheetFraction::for_utilisation(u),
        usage_pct: (u * 100.0).clamp(0.0, 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartile_boundaries_are_inclusive() {
        assert_eq!(SheetFraction::for_utilisation(0.25), SheetFraction::Quarter);
        assert_eq!(SheetFraction::for_utilisation(0.2501), SheetFraction::Half);
        assert_eq!(SheetFraction::for_utilisation(0.5), SheetFraction::Half);
        assert_eq!(SheetFraction::for_utilisation(0.75), SheetFraction::ThreeQuarters);
        assert_eq!(SheetFraction::for_utilisation(0.76), SheetFraction::Full);
        assert_eq!(SheetFraction::for_utilisation(3.0), SheetFraction::Full);
    }

    #[test]
    fn test_small_sign_on_foamex() {
        // 1005 x 605 on 2430 x 1210 usable -> u = 0.2068
        let usage = substrate_fraction(1005.0, 605.0, 2440.0, 1220.0, 5.0);
        assert_eq!(usage.fraction, SheetFraction::Quarter);
        assert!((usage.usage_pct - 20.68).abs() < 0.01);
        assert!((usage.waste_pct() - 79.32).abs() < 0.01);
    }

    #[test]
    fn test_oversize_sign_clamps_usage() {
        let usage = substrate_fraction(3005.0, 1505.0, 2440.0, 1220.0, 5.0);
        assert_eq!(usage.fraction, SheetFraction::Full);
        assert_eq!(usage.usage_pct, 100.0);
        assert_eq!(usage.waste_pct(), 0.0);
    }

    #[test]
    fn test_zero_area_sign() {
        let usage = substrate_fraction(0.0, 0.0, 2440.0, 1220.0, 5.0);
        assert_eq!(usage.fraction, SheetFraction::Quarter);
        assert_eq!(usage.usage_pct, 0.0);
    }

    #[test]
    fn test_margins_consume_whole_sheet() {
        let usage = substrate_fraction(100.0, 100.0, 8.0, 8.0, 5.0);
        assert_eq!(usage.fraction, SheetFraction::Full);
        assert_eq!(usage.usage_pct, 100.0);
    }

    #[test]
    fn test_fraction_always_a_quartile() {
        for w in (0..=4000).step_by(137) {
            let usage = substrate_fraction(w as f64, 900.0, 3050.0, 1560.0, 5.0);
            assert!([0.25, 0.5, 0.75, 1.0].contains(&usage.fraction.as_f64()));
            assert!((0.0..=100.0).contains(&usage.usage_pct));
        }
    }

    #[test]
    fn test_fraction_serializes_as_number() {
        assert_eq!(serde_json::to_string(&SheetFraction::ThreeQuarters).unwrap(), "0.75");
        let parsed: SheetFraction = serde_json::from_str("0.5").unwrap();
        assert_eq!(parsed, SheetFraction::Half);
        assert!(serde_json::from_str::<SheetFraction>("0.6").is_err());
    }
}
