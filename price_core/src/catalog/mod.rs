//! # Material Catalogs
//!
//! Vinyl media rolls and substrate sheets the shop stocks. Catalogs are
//! supplied by the caller; lookups are by id and ids must be unique within
//! each list.
//!
//! ## Example
//!
//! ```rust
//! use price_core::catalog::Catalog;
//!
//! let catalog = Catalog::default();
//! let md3 = catalog.find_media("md3").unwrap();
//! assert_eq!(md3.roll_printable_width_mm, 1340.0);
//! assert!(catalog.find_substrate("acm-3050x2030-3").is_some());
//! assert!(catalog.find_substrate("dibond").is_none());
//! ```

pub mod media;
pub mod substrate;

pub use media::{MediaCategory, MediaItem};
pub use substrate::Substrate;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{PriceError, PriceResult};

/// Stock media rolls
pub static DEFAULT_MEDIA: Lazy<Vec<MediaItem>> = Lazy::new(|| {
    vec![
        MediaItem {
            id: "md3".to_string(),
            name: "MD3 Printable".to_string(),
            category: MediaCategory::Printable,
            roll_width_mm: 1370.0,
            roll_printable_width_mm: 1340.0,
            max_print_width_mm: Some(1340.0),
            max_cut_width_mm: Some(1340.0),
            price_per_lm: 8.5,
        },
        MediaItem {
            id: "frosted1220".to_string(),
            name: "Frosted 1220".to_string(),
            category: MediaCategory::Solid,
            roll_width_mm: 1220.0,
            roll_printable_width_mm: 1220.0,
            max_print_width_mm: None,
            max_cut_width_mm: Some(1220.0),
            price_per_lm: 6.2,
        },
        MediaItem {
            id: "frosted610".to_string(),
            name: "Frosted 610".to_string(),
            category: MediaCategory::Solid,
            roll_width_mm: 610.0,
            roll_printable_width_mm: 610.0,
            max_print_width_mm: None,
            max_cut_width_mm: Some(610.0),
            price_per_lm: 4.1,
        },
    ]
});

/// Stock substrate sheets
pub static DEFAULT_SUBSTRATES: Lazy<Vec<Substrate>> = Lazy::new(|| {
    vec![
        Substrate {
            id: "foamex-2440x1220-3".to_string(),
            name: "Foamex 3mm 2440x1220".to_string(),
            thickness_mm: 3.0,
            sheet_width_mm: 2440.0,
            sheet_height_mm: 1220.0,
            price_per_sheet: 18.0,
        },
        Substrate {
            id: "foamex-3050x1560-3".to_string(),
            name: "Foamex 3mm 3050x1560".to_string(),
            thickness_mm: 3.0,
            sheet_width_mm: 3050.0,
            sheet_height_mm: 1560.0,
            price_per_sheet: 32.0,
        },
        Substrate {
            id: "acm-3050x2030-3".to_string(),
            name: "ACM 3mm 3050x2030".to_string(),
            thickness_mm: 3.0,
            sheet_width_mm: 3050.0,
            sheet_height_mm: 2030.0,
            price_per_sheet: 58.0,
        },
    ]
});

/// Media and substrate lists used for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub media: Vec<MediaItem>,
    pub substrates: Vec<Substrate>,
}

impl Catalog {
    /// Look up a media roll by id
    pub fn find_media(&self, id: &str) -> Option<&MediaItem> {
        find_media(&self.media, id)
    }

    /// Look up a substrate by id
    pub fn find_substrate(&self, id: &str) -> Option<&Substrate> {
        find_substrate(&self.substrates, id)
    }

    /// Check every media roll and that ids are unique within each list.
    pub fn validate(&self) -> PriceResult<()> {
        for media in &self.media {
            media.validate()?;
        }
        ensure_unique("media", self.media.iter().map(|m| m.id.as_str()))?;
        ensure_unique("substrates", self.substrates.iter().map(|s| s.id.as_str()))?;
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            media: DEFAULT_MEDIA.clone(),
            substrates: DEFAULT_SUBSTRATES.clone(),
        }
    }
}

pub(crate) fn find_media<'a>(media: &'a [MediaItem], id: &str) -> Option<&'a MediaItem> {
    media.iter().find(|m| m.id == id)
}

pub(crate) fn find_substrate<'a>(substrates: &'a [Substrate], id: &str) -> Option<&'a Substrate> {
    substrates.iter().find(|s| s.id == id)
}

fn ensure_unique<'a>(list: &str, ids: impl Iterator<Item = &'a str>) -> PriceResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PriceError::invalid_input(
                format!("{}.id", list),
                id,
                "Duplicate catalog id",
            ));
        }
    }
    Ok(())
}
