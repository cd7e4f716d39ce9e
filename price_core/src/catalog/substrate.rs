//! Rigid substrate sheets (foamex, ACM, ...)

use serde::{Deserialize, Serialize};

/// One sheet product in the substrate catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    pub id: String,
    pub name: String,
    pub thickness_mm: f64,
    pub sheet_width_mm: f64,
    pub sheet_height_mm: f64,
    /// Price for one full sheet
    pub price_per_sheet: f64,
}

impl Substrate {
    pub fn display_name(&self) -> String {
        format!(
            "{} ({}x{} mm, £{:.2}/sheet)",
            self.name, self.sheet_width_mm, self.sheet_height_mm, self.price_per_sheet
        )
    }
}
