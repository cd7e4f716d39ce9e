//! # Pricing Profiles
//!
//! A `PricingProfile` is everything a shop configures once and reuses for
//! every quote: cost settings plus the media and substrate catalogs.
//! Profiles serialize to human-readable JSON (see [`crate::file_io`]).
//!
//! ## Structure
//!
//! ```text
//! PricingProfile
//! ├── meta: ProfileMetadata (schema version, shop name, timestamps)
//! ├── settings: Settings (machine limits, unit costs, delivery, markup)
//! └── catalog: Catalog (media rolls, substrate sheets)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use price_core::profile::PricingProfile;
//!
//! let profile = PricingProfile::new("Acme Signs");
//! assert_eq!(profile.settings.profit_multiplier, 1.8);
//!
//! let json = serde_json::to_string_pretty(&profile).unwrap();
//! assert!(json.contains("Acme Signs"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::pricing::{price_with_catalog, PriceBreakdown};
use crate::catalog::Catalog;
use crate::errors::PriceResult;
use crate::settings::Settings;
use crate::sign::SignInput;

/// Current schema version for profile files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Saved shop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingProfile {
    pub meta: ProfileMetadata,
    pub settings: Settings,
    pub catalog: Catalog,
}

impl PricingProfile {
    /// Create a profile with the default settings and stock catalogs.
    pub fn new(shop: impl Into<String>) -> Self {
        let now = Utc::now();
        PricingProfile {
            meta: ProfileMetadata {
                version: SCHEMA_VERSION.to_string(),
                shop: shop.into(),
                created: now,
                modified: now,
            },
            settings: Settings::default(),
            catalog: Catalog::default(),
        }
    }

    /// Price a sign with this profile's settings and catalog.
    pub fn price(&self, input: &SignInput) -> PriceResult<PriceBreakdown> {
        price_with_catalog(input, &self.catalog, &self.settings)
    }
}

impl Default for PricingProfile {
    fn default() -> Self {
        PricingProfile::new("")
    }
}

/// Profile metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Shop or business name
    pub shop: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::ProductionMode;

    #[test]
    fn test_profile_creation() {
        let profile = PricingProfile::new("Acme Signs");
        assert_eq!(profile.meta.shop, "Acme Signs");
        assert_eq!(profile.meta.version, SCHEMA_VERSION);
        assert_eq!(profile.catalog.media.len(), 3);
    }

    #[test]
    fn test_profile_serialization() {
        let profile = PricingProfile::new("Test Shop");
        let json = serde_json::to_string_pretty(&profile).unwrap();

        assert!(json.contains("Test Shop"));
        assert!(json.contains("foamex-3050x1560-3"));

        let roundtrip: PricingProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.shop, "Test Shop");
        assert_eq!(roundtrip.settings, profile.settings);
        assert_eq!(roundtrip.catalog, profile.catalog);
    }

    #[test]
    fn test_price_uses_profile_settings() {
        let mut profile = PricingProfile::new("Shop");
        let sign = SignInput::new(ProductionMode::SubstrateOnly, 1000.0, 600.0, 1).with_substrate("foamex-2440x1220-3");
        let standard = profile.price(&sign).unwrap();

        profile.settings.setup_fee += 10.0;
        let dearer = profile.price(&sign).unwrap();
        assert!((dearer.pre_delivery - standard.pre_delivery - 18.0).abs() < 0.011);
    }
}
