//! # Sign Specification
//!
//! One pricing request: what is being produced, how big, how many, and
//! which catalog items and finishing options were chosen.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "mode": "PrintedVinylOnSubstrate",
//!   "width_mm": 3000.0,
//!   "height_mm": 1500.0,
//!   "qty": 1,
//!   "media_id": "md3",
//!   "substrate_id": "foamex-3050x1560-3",
//!   "finishing": "KissCutOnRoll",
//!   "complexity": "Standard",
//!   "application_tape": false,
//!   "panel_splits": 0,
//!   "panel_orientation": "Vertical"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Production mode for a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductionMode {
    /// Solid colour vinyl, cut only (no print)
    SolidColourCutVinyl,
    /// Printed vinyl, contour cut
    PrintAndCutVinyl,
    /// Printed vinyl with no cutting pass
    PrintedVinylOnly,
    /// Printed vinyl mounted to a rigid substrate
    PrintedVinylOnSubstrate,
    /// Bare substrate, no vinyl
    SubstrateOnly,
}

impl ProductionMode {
    /// All production modes for UI selection
    pub const ALL: [ProductionMode; 5] = [
        ProductionMode::SolidColourCutVinyl,
        ProductionMode::PrintAndCutVinyl,
        ProductionMode::PrintedVinylOnly,
        ProductionMode::PrintedVinylOnSubstrate,
        ProductionMode::SubstrateOnly,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductionMode::SolidColourCutVinyl => "Solid Colour Cut Vinyl Only",
            ProductionMode::PrintAndCutVinyl => "Print & Cut Vinyl",
            ProductionMode::PrintedVinylOnly => "Printed Vinyl Only",
            ProductionMode::PrintedVinylOnSubstrate => "Printed Vinyl mounted to a substrate",
            ProductionMode::SubstrateOnly => "Substrate Only",
        }
    }

    /// Modes that run the printed-vinyl tiling branch
    pub fn is_printed(&self) -> bool {
        matches!(
            self,
            ProductionMode::PrintAndCutVinyl
                | ProductionMode::PrintedVinylOnly
                | ProductionMode::PrintedVinylOnSubstrate
        )
    }

    /// Modes that consume substrate sheets
    pub fn uses_substrate(&self) -> bool {
        matches!(
            self,
            ProductionMode::PrintedVinylOnSubstrate | ProductionMode::SubstrateOnly
        )
    }

    /// Modes that carry an ink charge. Cut-only vinyl and bare substrate do not.
    pub fn uses_ink(&self) -> bool {
        self.is_printed()
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '_', '-', '&'], "").as_str() {
            "solidcolourcutvinyl" | "solidcolorcutvinyl" | "cutvinyl" | "solid" => {
                Some(ProductionMode::SolidColourCutVinyl)
            }
            "printandcutvinyl" | "printcutvinyl" | "printandcut" => Some(ProductionMode::PrintAndCutVinyl),
            "printedvinylonly" | "printonly" => Some(ProductionMode::PrintedVinylOnly),
            "printedvinylonsubstrate" | "mounted" => Some(ProductionMode::PrintedVinylOnSubstrate),
            "substrateonly" | "substrate" => Some(ProductionMode::SubstrateOnly),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Finishing applied after printing/cutting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Finishing {
    #[default]
    None,
    KissCutOnRoll,
    CutIntoSheets,
    IndividuallyCut,
}

impl Finishing {
    pub const ALL: [Finishing; 4] = [
        Finishing::None,
        Finishing::KissCutOnRoll,
        Finishing::CutIntoSheets,
        Finishing::IndividuallyCut,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "none" => Some(Finishing::None),
            "kisscutonroll" | "kisscut" => Some(Finishing::KissCutOnRoll),
            "cutintosheets" | "sheets" => Some(Finishing::CutIntoSheets),
            "individuallycut" | "individual" => Some(Finishing::IndividuallyCut),
            _ => None,
        }
    }
}

/// Weeding/cutting complexity for solid colour cut vinyl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Basic,
    Standard,
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Basic, Complexity::Standard, Complexity::Complex];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "basic" => Some(Complexity::Basic),
            "standard" => Some(Complexity::Standard),
            "complex" => Some(Complexity::Complex),
            _ => None,
        }
    }
}

/// Direction large signs are split into panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Input parameters for pricing one sign line.
///
/// Dimensions are finished sign sizes in millimetres, before any margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInput {
    /// How the sign is produced
    pub mode: ProductionMode,

    /// Finished width in mm
    pub width_mm: f64,

    /// Finished height in mm
    pub height_mm: f64,

    /// Number of identical signs
    pub qty: u32,

    /// Vinyl media id (required for every mode except SubstrateOnly)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,

    /// Substrate id (required for substrate modes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substrate_id: Option<String>,

    /// Print both faces of a mounted sign (doubles the sheet charge)
    #[serde(default)]
    pub double_sided: bool,

    /// Finishing option; absent means [`Finishing::None`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finishing: Option<Finishing>,

    /// Cutting complexity (solid colour cut vinyl only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,

    /// Application tape choice. `None` takes the mode default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_tape: Option<bool>,

    /// Panel splits, 0..=6 (0 = none). Carried through, not priced.
    #[serde(default)]
    pub panel_splits: u8,

    /// Panel split direction. Carried through, not priced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_orientation: Option<PanelOrientation>,
}

impl SignInput {
    /// Create a sign with no catalog references or options selected.
    pub fn new(mode: ProductionMode, width_mm: f64, height_mm: f64, qty: u32) -> Self {
        SignInput {
            mode,
            width_mm,
            height_mm,
            qty,
            media_id: None,
            substrate_id: None,
            double_sided: false,
            finishing: None,
            complexity: None,
            application_tape: None,
            panel_splits: 0,
            panel_orientation: None,
        }
    }

    /// Builder: select a vinyl media
    pub fn with_media(mut self, id: impl Into<String>) -> Self {
        self.media_id = Some(id.into());
        self
    }

    /// Builder: select a substrate
    pub fn with_substrate(mut self, id: impl Into<String>) -> Self {
        self.substrate_id = Some(id.into());
        self
    }

    /// Builder: choose a finishing option
    pub fn with_finishing(mut self, finishing: Finishing) -> Self {
        self.finishing = Some(finishing);
        self
    }

    /// Builder: choose a cutting complexity
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Builder: explicitly enable or disable application tape
    pub fn with_application_tape(mut self, on: bool) -> Self {
        self.application_tape = Some(on);
        self
    }

    /// Builder: print both faces
    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Finishing with the absent case resolved
    pub fn finishing_or_default(&self) -> Finishing {
        self.finishing.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_branches() {
        assert!(ProductionMode::PrintedVinylOnSubstrate.is_printed());
        assert!(ProductionMode::PrintedVinylOnSubstrate.uses_substrate());
        assert!(!ProductionMode::SolidColourCutVinyl.is_printed());
        assert!(!ProductionMode::SubstrateOnly.uses_ink());
        assert!(!ProductionMode::PrintAndCutVinyl.uses_substrate());
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(
            ProductionMode::from_str_flexible("print-and-cut-vinyl"),
            Some(ProductionMode::PrintAndCutVinyl)
        );
        assert_eq!(ProductionMode::from_str_flexible("SubstrateOnly"), Some(ProductionMode::SubstrateOnly));
        assert_eq!(Finishing::from_str_flexible("kiss_cut_on_roll"), Some(Finishing::KissCutOnRoll));
        assert_eq!(Complexity::from_str_flexible("Complex"), Some(Complexity::Complex));
        assert!(ProductionMode::from_str_flexible("neon").is_none());
    }

    #[test]
    fn test_sign_json_defaults() {
        let json = r#"{ "mode": "SolidColourCutVinyl", "width_mm": 200.0, "height_mm": 100.0, "qty": 10 }"#;
        let sign: SignInput = serde_json::from_str(json).unwrap();
        assert_eq!(sign.mode, ProductionMode::SolidColourCutVinyl);
        assert!(sign.media_id.is_none());
        assert!(!sign.double_sided);
        assert_eq!(sign.application_tape, None);
        assert_eq!(sign.finishing_or_default(), Finishing::None);
        assert_eq!(sign.panel_splits, 0);
    }

    #[test]
    fn test_builder() {
        let sign = SignInput::new(ProductionMode::PrintedVinylOnSubstrate, 3000.0, 1500.0, 1)
            .with_media("md3")
            .with_substrate("foamex-2440x1220-3")
            .with_finishing(Finishing::KissCutOnRoll)
            .double_sided();
        assert_eq!(sign.media_id.as_deref(), Some("md3"));
        assert!(sign.double_sided);

        let json = serde_json::to_string(&sign).unwrap();
        let roundtrip: SignInput = serde_json::from_str(&json).unwrap();
        assert_eq!(sign, roundtrip);
    }
}
