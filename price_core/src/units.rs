//! # Unit Types
//!
//! Lightweight newtype wrappers for the units used in sign production.
//! They serialize as bare numbers so JSON stays clean.
//!
//! ## Metric Units
//!
//! - Sign and roll dimensions: millimetres (mm)
//! - Delivery girth: centimetres (cm)
//! - Roll consumption: linear metres (lm)
//! - Ink and tape coverage: square metres (m²)
//!
//! ## Example
//!
//! ```rust
//! use price_core::units::{Metres, Millimetres, SquareMetres, SquareMillimetres};
//!
//! let run: Metres = Millimetres(4530.0).into();
//! assert_eq!(run.0, 4.53);
//!
//! let area: SquareMetres = SquareMillimetres(3000.0 * 1500.0).into();
//! assert_eq!(area.0, 4.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimetres(pub f64);

/// Length in metres (linear metres when measured along a roll)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

impl From<Millimetres> for Centimetres {
    fn from(mm: Millimetres) -> Self {
        Centimetres(mm.0 / 10.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimetres(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetres(pub f64);

impl From<SquareMillimetres> for SquareMetres {
    fn from(mm2: SquareMillimetres) -> Self {
        SquareMetres(mm2.0 / 1_000_000.0)
    }
}

impl Mul for Millimetres {
    type Output = SquareMillimetres;
    fn mul(self, rhs: Self) -> Self::Output {
        SquareMillimetres(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimetres);
impl_arithmetic!(Centimetres);
impl_arithmetic!(Metres);
impl_arithmetic!(SquareMillimetres);
impl_arithmetic!(SquareMetres);

impl Mul<f64> for SquareMillimetres {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        SquareMillimetres(self.0 * rhs)
    }
}

/// Round to a fixed number of decimal places, halves away from zero.
///
/// Only applied when a breakdown is reported; accumulation stays at full
/// precision.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_metres_and_cm() {
        let m: Metres = Millimetres(1510.0).into();
        assert!((m.0 - 1.51).abs() < 1e-12);
        let cm: Centimetres = Millimetres(4510.0).into();
        assert_eq!(cm.0, 451.0);
    }

    #[test]
    fn test_area_product_and_conversion() {
        let area = Millimetres(1000.0) * Millimetres(500.0);
        assert_eq!(area.0, 500_000.0);
        let sqm: SquareMetres = (area * 4.0).into();
        assert_eq!(sqm.0, 2.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimetres(1340.0);
        let b = Millimetres(10.0);
        assert_eq!((a - b).0, 1330.0);
        assert_eq!((a + b).value(), 1350.0);
        assert_eq!((a / 2.0).0, 670.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(145.584, 2), 145.58);
        assert_eq!(round_to(3.144, 2), 3.14);
        assert_eq!(round_to(5.5299999, 3), 5.53);
        assert_eq!(round_to(64.47, 1), 64.5);
        assert_eq!(round_to(-1.005, 0), -1.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimetres(1340.0);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "1340.0");

        let roundtrip: Millimetres = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
