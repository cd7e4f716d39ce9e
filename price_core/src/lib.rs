//! # price_core - Sign Production Pricing Engine
//!
//! `price_core` turns a sign specification (production mode, size,
//! quantity, chosen media/substrate, finishing) into an itemised price:
//! materials, ink, cutting, markup, delivery and total, plus production
//! statistics such as roll usage, tile count and sheet utilisation.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; settings and catalogs are passed in on every call
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **One failure mode**: Pricing only fails when a required catalog item is missing
//!
//! ## Quick Start
//!
//! ```rust
//! use price_core::{price_with_catalog, Catalog, Settings};
//! use price_core::sign::{Finishing, ProductionMode, SignInput};
//!
//! let sign = SignInput::new(ProductionMode::PrintedVinylOnSubstrate, 3000.0, 1500.0, 1)
//!     .with_media("md3")
//!     .with_substrate("foamex-2440x1220-3")
//!     .with_finishing(Finishing::KissCutOnRoll);
//!
//! let breakdown = price_with_catalog(&sign, &Catalog::default(), &Settings::default()).unwrap();
//! assert_eq!(breakdown.total, 185.08);
//!
//! let json = serde_json::to_string_pretty(&breakdown).unwrap();
//! assert!(json.contains("Over200"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Width, tiling, packing, sheet, delivery and pricing functions
//! - [`catalog`] - Media rolls and substrate sheets
//! - [`settings`] - Business cost parameters
//! - [`sign`] - The sign specification
//! - [`units`] - Metric unit wrappers
//! - [`errors`] - Structured error types
//! - [`profile`] / [`file_io`] - Saved pricing profiles with atomic writes

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod file_io;
pub mod profile;
pub mod settings;
pub mod sign;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{price_single, price_with_catalog, PriceBreakdown};
pub use catalog::Catalog;
pub use errors::{PriceError, PriceResult};
pub use file_io::{load_profile, save_profile};
pub use profile::{PricingProfile, ProfileMetadata};
pub use settings::Settings;
