//! Vinyl media (roll stock)
//!
//! A media item is a roll of printable or solid colour vinyl, priced per
//! linear metre. Optional per-media caps narrow the machine limits further.

use serde::{Deserialize, Serialize};

use crate::errors::{PriceError, PriceResult};

/// Kind of vinyl on the roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// White/clear vinyl for printing
    Printable,
    /// Coloured vinyl for cut-only work
    Solid,
}

/// One roll product in the media catalog.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "md3",
///   "name": "MD3 Printable",
///   "category": "printable",
///   "roll_width_mm": 1370.0,
///   "roll_printable_width_mm": 1340.0,
///   "max_print_width_mm": 1340.0,
///   "max_cut_width_mm": 1340.0,
///   "price_per_lm": 8.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    pub category: MediaCategory,
    /// Physical roll width (mm)
    pub roll_width_mm: f64,
    /// Usable printable width (mm), never wider than the roll
    pub roll_printable_width_mm: f64,
    /// Per-media print cap (mm); absent means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_print_width_mm: Option<f64>,
    /// Per-media cut cap (mm); absent means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cut_width_mm: Option<f64>,
    /// Price per linear metre
    pub price_per_lm: f64,
}

impl MediaItem {
    /// Check the roll geometry is physically possible.
    pub fn validate(&self) -> PriceResult<()> {
        if self.roll_printable_width_mm > self.roll_width_mm {
            return Err(PriceError::invalid_input(
                format!("media[{}].roll_printable_width_mm", self.id),
                self.roll_printable_width_mm.to_string(),
                format!("Printable width exceeds roll width of {} mm", self.roll_width_mm),
            ));
        }
        Ok(())
    }

    pub fn display_name(&self) -> String {
        format!("{} ({} mm, £{:.2}/lm)", self.name, self.roll_width_mm, self.price_per_lm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md3() -> MediaItem {
        MediaItem {
            id: "md3".to_string(),
            name: "MD3 Printable".to_string(),
            category: MediaCategory::Printable,
            roll_width_mm: 1370.0,
            roll_printable_width_mm: 1340.0,
            max_print_width_mm: Some(1340.0),
            max_cut_width_mm: Some(1340.0),
            price_per_lm: 8.5,
        }
    }

    #[test]
    fn test_valid_roll() {
        assert!(md3().validate().is_ok());
    }

    #[test]
    fn test_printable_wider_than_roll_rejected() {
        let mut media = md3();
        media.roll_printable_width_mm = 1400.0;
        let err = media.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_optional_caps_omitted_in_json() {
        let mut media = md3();
        media.max_print_width_mm = None;
        let json = serde_json::to_string(&media).unwrap();
        assert!(!json.contains("max_print_width_mm"));
        assert!(json.contains("\"category\":\"printable\""));

        let roundtrip: MediaItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.max_print_width_mm, None);
    }
}
