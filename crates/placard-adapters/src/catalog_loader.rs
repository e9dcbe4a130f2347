//! Filesystem-based catalog loader.
//!
//! Reads placeholder definitions from a single `.toml` file, or from every
//! `.toml` file under a directory, and builds one [`Catalog`] out of them.
//!
//! # Directory layout expected
//!
//! ```text
//! catalogs/
//! ├── 00-booking.toml
//! ├── 10-loyalty.toml
//! └── marketing/
//!     └── campaign.toml
//! ```
//!
//! Files are read in path order, so numeric prefixes control display order.
//!
//! # Catalog file format
//!
//! ```toml
//! [[placeholder]]
//! key          = "customer_name"             # required, no braces or spaces
//! display_name = "Customer Name"             # required
//! description  = "Full name of the customer" # optional
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use placard_core::{
    application::{ApplicationError, ports::CatalogSource},
    domain::{Catalog, NO_DESCRIPTION, PlaceholderDefinition},
    error::PlacardResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one catalog file.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct CatalogManifest {
    #[serde(default, rename = "placeholder")]
    pub placeholders: Vec<PlaceholderEntry>,
}

/// One entry under `[[placeholder]]`.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderEntry {
    pub key: String,
    pub display_name: String,
    /// Falls back to [`NO_DESCRIPTION`] when omitted.
    pub description: Option<String>,
}

impl From<PlaceholderEntry> for PlaceholderDefinition {
    fn from(entry: PlaceholderEntry) -> Self {
        PlaceholderDefinition::new(
            entry.key,
            entry.display_name,
            entry.description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        )
    }
}

/// Parse catalog TOML text into definitions, without validating them.
///
/// Validation (key rules, duplicates) happens when the definitions are fed to
/// [`Catalog::builder`].
pub fn parse_catalog_str(raw: &str, origin: &str) -> PlacardResult<Vec<PlaceholderDefinition>> {
    let manifest: CatalogManifest = toml::from_str(raw).map_err(|e| ApplicationError::CatalogLoad {
        origin: origin.to_string(),
        reason: format!("failed to parse: {e}"),
    })?;

    Ok(manifest.placeholders.into_iter().map(Into::into).collect())
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// [`CatalogSource`] backed by TOML files on disk.
///
/// In directory mode, a file that cannot be read or parsed emits a `WARN` log
/// and is skipped. Invalid *definitions* (bad keys, duplicates across files)
/// still fail the whole load: a half-valid catalog would silently flag good
/// templates as invalid.
///
/// # Example
///
/// ```no_run
/// use placard_adapters::TomlCatalogSource;
/// use placard_core::application::ports::CatalogSource;
///
/// let catalog = TomlCatalogSource::new("./catalogs").load()?;
/// println!("Loaded {} placeholders", catalog.len());
/// # Ok::<(), placard_core::error::PlacardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TomlCatalogSource {
    path: PathBuf,
}

impl TomlCatalogSource {
    /// Create a loader pointed at a file or directory.
    ///
    /// The path does not need to exist yet; [`CatalogSource::load`] reports
    /// it if it is missing when called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_file(&self, file: &Path) -> PlacardResult<Vec<PlaceholderDefinition>> {
        let raw = fs::read_to_string(file).map_err(|e| ApplicationError::CatalogLoad {
            origin: file.display().to_string(),
            reason: format!("failed to read: {e}"),
        })?;
        parse_catalog_str(&raw, &file.display().to_string())
    }

    fn load_dir(&self, dir: &Path) -> PlacardResult<Vec<PlaceholderDefinition>> {
        let mut definitions = Vec::new();
        let mut files_loaded = 0usize;

        for walk_entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::CatalogLoad {
                origin: dir.display().to_string(),
                reason: format!("directory walk error: {e}"),
            })?;

            let path = walk_entry.path();
            if !walk_entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("toml")
            {
                continue;
            }

            match self.load_file(path) {
                Ok(found) => {
                    debug!(file = %path.display(), count = found.len(), "loaded catalog file");
                    files_loaded += 1;
                    definitions.extend(found);
                }
                Err(e) => {
                    // One unreadable file must not block the others.
                    warn!(
                        file  = %path.display(),
                        error = %e,
                        "skipping catalog file due to load error"
                    );
                }
            }
        }

        if files_loaded == 0 {
            return Err(ApplicationError::CatalogLoad {
                origin: dir.display().to_string(),
                reason: "no loadable .toml catalog files found".into(),
            }
            .into());
        }

        Ok(definitions)
    }
}

impl CatalogSource for TomlCatalogSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> PlacardResult<Catalog> {
        if !self.path.exists() {
            return Err(ApplicationError::CatalogNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let definitions = if self.path.is_dir() {
            self.load_dir(&self.path)?
        } else {
            self.load_file(&self.path)?
        };

        let catalog = Catalog::builder().extend(definitions).build()?;
        debug!(count = catalog.len(), "finished loading catalog");
        Ok(catalog)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use placard_core::{domain::DomainError, error::PlacardError};
    use tempfile::TempDir;

    const BOOKING: &str = r#"
[[placeholder]]
key          = "customer_name"
display_name = "Customer Name"
description  = "Full name of the customer"

[[placeholder]]
key          = "appointment_date"
display_name = "Appointment Date"
"#;

    const LOYALTY: &str = r#"
[[placeholder]]
key          = "loyalty_points"
display_name = "Loyalty Points"
description  = "Current points balance"
"#;

    #[test]
    fn parses_entries_in_file_order() {
        let defs = parse_catalog_str(BOOKING, "test").unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].key, "customer_name");
        assert_eq!(defs[1].description, NO_DESCRIPTION);
    }

    #[test]
    fn empty_file_has_no_entries() {
        assert!(parse_catalog_str("", "empty").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let raw = "[[placeholder]]\nkey = \"a\"\ndisplay_name = \"A\"\ncolour = \"red\"\n";
        assert!(matches!(
            parse_catalog_str(raw, "typo.toml"),
            Err(PlacardError::Application(ApplicationError::CatalogLoad { .. }))
        ));
    }

    #[test]
    fn loads_single_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("booking.toml");
        fs::write(&file, BOOKING).unwrap();

        let catalog = TomlCatalogSource::new(&file).load().unwrap();
        assert_eq!(catalog.all_keys(), ["customer_name", "appointment_date"]);
    }

    #[test]
    fn missing_path_is_not_found() {
        let result = TomlCatalogSource::new("/absolutely/does/not/exist.toml").load();
        assert!(matches!(
            result,
            Err(PlacardError::Application(ApplicationError::CatalogNotFound { .. }))
        ));
    }

    #[test]
    fn loads_directory_in_path_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("20-loyalty.toml"), LOYALTY).unwrap();
        fs::write(temp.path().join("10-booking.toml"), BOOKING).unwrap();
        fs::write(temp.path().join("README.md"), "not a catalog").unwrap();

        let catalog = TomlCatalogSource::new(temp.path()).load().unwrap();
        assert_eq!(
            catalog.all_keys(),
            ["customer_name", "appointment_date", "loyalty_points"]
        );
    }

    #[test]
    fn directory_load_skips_unparseable_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.toml"), "this is = = not toml").unwrap();
        fs::write(temp.path().join("b.toml"), LOYALTY).unwrap();

        let catalog = TomlCatalogSource::new(temp.path()).load().unwrap();
        assert_eq!(catalog.all_keys(), ["loyalty_points"]);
    }

    #[test]
    fn directory_without_catalogs_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "nothing").unwrap();

        assert!(matches!(
            TomlCatalogSource::new(temp.path()).load(),
            Err(PlacardError::Application(ApplicationError::CatalogLoad { .. }))
        ));
    }

    #[test]
    fn duplicate_across_files_fails_whole_load() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.toml"), LOYALTY).unwrap();
        fs::write(temp.path().join("b.toml"), LOYALTY).unwrap();

        assert!(matches!(
            TomlCatalogSource::new(temp.path()).load(),
            Err(PlacardError::Domain(DomainError::DuplicateKey { .. }))
        ));
    }

    #[test]
    fn invalid_key_fails_load() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bad.toml");
        fs::write(&file, "[[placeholder]]\nkey = \"customer name\"\ndisplay_name = \"X\"\n").unwrap();

        assert!(matches!(
            TomlCatalogSource::new(&file).load(),
            Err(PlacardError::Domain(DomainError::KeyContainsWhitespace { .. }))
        ));
    }
}
