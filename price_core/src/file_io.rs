//! # File I/O Module
//!
//! Saves and loads pricing profiles:
//! - **Atomic saves**: Write to .tmp, sync, rename so a crash never leaves half a file
//! - **Version validation**: Reject profiles written by an incompatible schema
//! - **Catalog validation**: Duplicate ids or impossible rolls are refused on load
//!
//! ## Example
//!
//! ```rust,no_run
//! use price_core::file_io::{load_profile, save_profile};
//! use price_core::profile::PricingProfile;
//! use std::path::Path;
//!
//! let profile = PricingProfile::new("Acme Signs");
//! let path = Path::new("pricing.json");
//!
//! save_profile(&profile, path)?;
//! let loaded = load_profile(path)?;
//! assert_eq!(loaded.meta.shop, "Acme Signs");
//! # Ok::<(), price_core::errors::PriceError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{PriceError, PriceResult};
use crate::profile::{PricingProfile, SCHEMA_VERSION};

/// Save a profile to a file with atomic write semantics.
///
/// 1. Serialize to pretty JSON
/// 2. Write to `<path>.tmp`
/// 3. fsync
/// 4. Rename over `path`
pub fn save_profile(profile: &PricingProfile, path: &Path) -> PriceResult<()> {
    let json = serde_json::to_string_pretty(profile).map_err(|e| PriceError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        PriceError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        PriceError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        PriceError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        PriceError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "saved pricing profile");
    Ok(())
}

/// Load a profile from a file.
///
/// # Returns
///
/// * `Ok(PricingProfile)` - Successfully loaded and validated
/// * `Err(PriceError::VersionMismatch)` - File version is incompatible
/// * `Err(PriceError::SerializationError)` - Invalid JSON
/// * `Err(PriceError::InvalidInput)` - Catalog failed validation
/// * `Err(PriceError::FileError)` - I/O error
pub fn load_profile(path: &Path) -> PriceResult<PricingProfile> {
    let mut file = File::open(path).map_err(|e| {
        PriceError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        PriceError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let profile: PricingProfile =
        serde_json::from_str(&contents).map_err(|e| PriceError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&profile.meta.version)?;
    profile.catalog.validate()?;

    debug!(
        path = %path.display(),
        media = profile.catalog.media.len(),
        substrates = profile.catalog.substrates.len(),
        "loaded pricing profile"
    );
    Ok(profile)
}

/// `pricing.json` -> `pricing.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> PriceResult<()> {
    let mismatch = || PriceError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x a newer minor may contain breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::{ProductionMode, SignInput};
    use std::env::temp_dir;

    fn temp_profile_path(name: &str) -> PathBuf {
        temp_dir().join(format!("signcost_test_{}.json", name))
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/srv/shop/pricing.json")),
            Path::new("/srv/shop/pricing.json.tmp")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_profile_path("roundtrip");

        let mut profile = PricingProfile::new("Roundtrip Signs");
        profile.settings.cut_per_sign = 4.25;
        save_profile(&profile, &path).unwrap();

        let loaded = load_profile(&path).unwrap();
        assert_eq!(loaded.meta.shop, "Roundtrip Signs");
        assert_eq!(loaded.settings.cut_per_sign, 4.25);
        assert_eq!(loaded.catalog, profile.catalog);

        // A loaded profile prices exactly like the one saved
        let sign = SignInput::new(ProductionMode::SubstrateOnly, 500.0, 500.0, 2).with_substrate("acm-3050x2030-3");
        assert_eq!(loaded.price(&sign).unwrap(), profile.price(&sign).unwrap());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_profile_path("atomic");
        let tmp_path = tmp_path_for(&path);

        save_profile(&PricingProfile::new("Atomic"), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_duplicate_media() {
        let path = temp_profile_path("duplicate");

        let mut profile = PricingProfile::new("Dup");
        let dup = profile.catalog.media[0].clone();
        profile.catalog.media.push(dup);
        save_profile(&profile, &path).unwrap();

        let err = load_profile(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_profile(&temp_profile_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_profile_path("garbage");
        fs::write(&path, "{ not json").unwrap();

        let err = load_profile(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("v-next").is_err());
    }
}
