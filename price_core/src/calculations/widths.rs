//! # Effective Widths
//!
//! The usable print and cut widths for a media roll on this shop's
//! machines: the narrowest of the machine limit, the roll itself, and any
//! per-media cap. Absent caps are unbounded, never zero.
//!
//! ## Example
//!
//! ```rust
//! use price_core::calculations::widths::effective_widths;
//! use price_core::catalog::Catalog;
//! use price_core::settings::Settings;
//!
//! let catalog = Catalog::default();
//! let widths = effective_widths(catalog.find_media("frosted610").unwrap(), &Settings::default());
//! assert_eq!(widths.print_width_mm, 610.0);
//! assert_eq!(widths.cut_width_mm, 610.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::MediaItem;
use crate::settings::Settings;

/// Print and cut widths after every cap has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveWidths {
    /// min(machine print width, roll printable width, media print cap)
    pub print_width_mm: f64,
    /// min(machine cut width, physical roll width, media cut cap)
    pub cut_width_mm: f64,
}

/// Resolve the effective print and cut widths for `media`.
pub fn effective_widths(media: &MediaItem, settings: &Settings) -> EffectiveWidths {
    let print_width_mm = settings
        .master_max_print_width_mm
        .min(media.roll_printable_width_mm)
        .min(media.max_print_width_mm.unwrap_or(f64::INFINITY));

    let cut_width_mm = settings
        .master_max_cut_width_mm
        .min(media.roll_width_mm)
        .min(media.max_cut_width_mm.unwrap_or(f64::INFINITY));

    EffectiveWidths {
        print_width_mm,
        cut_width_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MediaCategory;

    fn roll(roll_w: f64, printable_w: f64, print_cap: Option<f64>, cut_cap: Option<f64>) -> MediaItem {
        MediaItem {
            id: "test".to_string(),
            name: "Test Roll".to_string(),
            category: MediaCategory::Printable,
            roll_width_mm: roll_w,
            roll_printable_width_mm: printable_w,
            max_print_width_mm: print_cap,
            max_cut_width_mm: cut_cap,
            price_per_lm: 5.0,
        }
    }

    #[test]
    fn test_machine_limit_governs() {
        let widths = effective_widths(&roll(1600.0, 1570.0, None, None), &Settings::default());
        assert_eq!(widths.print_width_mm, 1340.0);
        assert_eq!(widths.cut_width_mm, 1340.0);
    }

    #[test]
    fn test_roll_governs() {
        // Printable width limits print, physical roll width limits cut
        let widths = effective_widths(&roll(1000.0, 980.0, None, None), &Settings::default());
        assert_eq!(widths.print_width_mm, 980.0);
        assert_eq!(widths.cut_width_mm, 1000.0);
    }

    #[test]
    fn test_media_cap_governs() {
        let widths = effective_widths(&roll(1370.0, 1340.0, Some(1200.0), Some(900.0)), &Settings::default());
        assert_eq!(widths.print_width_mm, 1200.0);
        assert_eq!(widths.cut_width_mm, 900.0);
    }

    #[test]
    fn test_absent_caps_never_reduce_below_machine_and_roll() {
        let media = roll(1370.0, 1340.0, None, None);
        let mut settings = Settings::default();
        settings.master_max_print_width_mm = 1300.0;
        settings.master_max_cut_width_mm = 1360.0;
        let widths = effective_widths(&media, &settings);
        assert_eq!(widths.print_width_mm, 1300.0);
        assert_eq!(widths.cut_width_mm, 1360.0);
        assert!(widths.print_width_mm <= media.roll_printable_width_mm);
        assert!(widths.cut_width_mm <= media.roll_width_mm);
    }
}
