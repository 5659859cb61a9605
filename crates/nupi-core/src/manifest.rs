//! Package descriptor parsing for plugin crates.
//!
//! A plugin package is an ordinary cargo package, so its descriptor is the
//! crate's `Cargo.toml`. The installer only needs the `[package]` table:
//! `name` drives the installed binary path, and `version`/`description` are
//! carried for diagnostics. All other descriptor content is tolerated and
//! ignored.
//!
//! # Example TOML
//!
//! ```toml
//! [package]
//! name = "nu_plugin_dns"
//! version = "0.1.0"
//! description = "DNS queries from the shell"
//!
//! [dependencies]
//! nu-plugin = "0.90"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Package descriptor loaded from a `Cargo.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    /// The `[package]` table.
    pub package: PackageMeta,
}

/// Metadata about a buildable package.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageMeta {
    /// Package name; also the name of the produced binary.
    pub name: String,
    /// Semver version string.
    #[serde(default)]
    pub version: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl PackageManifest {
    /// Parse a package descriptor from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a package descriptor from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// The package name.
    pub fn name(&self) -> &str {
        &self.package.name
    }

    /// Validate the descriptor fields.
    fn validate(&self) -> Result<()> {
        let name = &self.package.name;
        if name.is_empty() {
            return Err(Error::InvalidName {
                name: name.clone(),
                reason: "package name must not be empty".to_string(),
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidName {
                name: name.clone(),
                reason: "package name must contain only alphanumeric characters, hyphens, or underscores".to_string(),
            });
        }

        // Version is optional in the descriptor, but must be valid semver
        // when declared.
        if let Some(ref version) = self.package.version {
            semver::Version::parse(version).map_err(|e| Error::InvalidVersion {
                version: version.clone(),
                source: e,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLUGIN_TOML: &str = r#"
[package]
name = "nu_plugin_dns"
version = "0.1.0"
description = "DNS queries from the shell"
edition = "2021"

[dependencies]
nu-plugin = "0.90"
tokio = { version = "1", features = ["full"] }
"#;

    #[test]
    fn test_parse_full_descriptor() {
        let manifest = PackageManifest::from_toml(PLUGIN_TOML).unwrap();
        assert_eq!(manifest.name(), "nu_plugin_dns");
        assert_eq!(manifest.package.version.as_deref(), Some("0.1.0"));
        assert_eq!(
            manifest.package.description.as_deref(),
            Some("DNS queries from the shell")
        );
    }

    #[test]
    fn test_parse_minimal_descriptor() {
        let toml = r#"
[package]
name = "minimal"
"#;
        let manifest = PackageManifest::from_toml(toml).unwrap();
        assert_eq!(manifest.name(), "minimal");
        assert!(manifest.package.version.is_none());
        assert!(manifest.package.description.is_none());
    }

    #[test]
    fn test_missing_name_rejected() {
        let toml = r#"
[package]
version = "1.0.0"
"#;
        let err = PackageManifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::ManifestParse(_)));
    }

    #[test]
    fn test_missing_package_section_rejected() {
        let toml = r#"
[dependencies]
serde = "1"
"#;
        let err = PackageManifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::ManifestParse(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let toml = r#"
[package]
name = ""
"#;
        let err = PackageManifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_name_with_spaces_rejected() {
        let toml = r#"
[package]
name = "bad name"
"#;
        let err = PackageManifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_name_with_hyphens_and_underscores_accepted() {
        let toml = r#"
[package]
name = "nu_plugin-example_2"
"#;
        let manifest = PackageManifest::from_toml(toml).unwrap();
        assert_eq!(manifest.name(), "nu_plugin-example_2");
    }

    #[test]
    fn test_invalid_version_rejected() {
        let toml = r#"
[package]
name = "bad-version"
version = "not-a-version"
"#;
        let err = PackageManifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, Error::InvalidVersion { .. }));
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        // Real Cargo.toml files carry many fields the installer never reads.
        let toml = r#"
[package]
name = "tolerant"
version = "0.2.0"
edition = "2021"
authors = ["someone"]
license = "MIT"

[lib]
crate-type = ["cdylib"]

[profile.release]
lto = true
"#;
        let manifest = PackageManifest::from_toml(toml).unwrap();
        assert_eq!(manifest.name(), "tolerant");
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file_path = dir.path().join(crate::DESCRIPTOR_FILENAME);
        std::fs::write(&file_path, PLUGIN_TOML).unwrap();

        let manifest = PackageManifest::from_path(&file_path).unwrap();
        assert_eq!(manifest.name(), "nu_plugin_dns");
    }

    #[test]
    fn test_from_path_not_found() {
        let err = PackageManifest::from_path(Path::new("/nonexistent/Cargo.toml")).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound(_)));
    }

    #[test]
    fn test_error_messages_are_actionable() {
        let toml = r#"
[package]
name = "bad name!"
"#;
        let err = PackageManifest::from_toml(toml).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("bad name!"),
            "error should include the invalid name: {msg}"
        );

        let toml = r#"
[package]
name = "test"
version = "abc"
"#;
        let err = PackageManifest::from_toml(toml).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("abc"),
            "error should include the invalid version: {msg}"
        );
    }
}
