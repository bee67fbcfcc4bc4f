pub mod builtin;

use crate::error::RouteLogError;
use crate::parsing::normalize::normalize_key;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk form of a facility table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityTableDef {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub entries: Vec<FacilityEntryDef>,
}

/// One curated mapping: an address/name fragment to a canonical name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityEntryDef {
    pub key: String,
    pub name: String,
}

/// Immutable lookup from normalized text fragments to canonical
/// facility names. Built once at startup and shared read-only; safe
/// for unlimited concurrent readers.
#[derive(Debug, Clone)]
pub struct FacilityTable {
    /// (normalized key, canonical name), longest key first so the most
    /// specific fragment wins on containment.
    entries: Vec<(String, String)>,
}

impl FacilityTable {
    pub fn from_def(def: &FacilityTableDef) -> Result<FacilityTable, RouteLogError> {
        validate_def(def)?;

        let mut entries: Vec<(String, String)> = def
            .entries
            .iter()
            .map(|e| (normalize_key(&e.key), e.name.clone()))
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        entries.dedup_by(|a, b| a.0 == b.0);

        Ok(FacilityTable { entries })
    }

    /// Load a facility table from a JSON file.
    pub fn load(path: &Path) -> Result<FacilityTable, RouteLogError> {
        let content = std::fs::read_to_string(path).map_err(|e| RouteLogError::FacilitiesLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let def: FacilityTableDef =
            serde_json::from_str(&content).map_err(|e| RouteLogError::FacilitiesLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        FacilityTable::from_def(&def)
    }

    /// Parse a facility table from a JSON string.
    pub fn parse_str(json: &str) -> Result<FacilityTable, RouteLogError> {
        let def: FacilityTableDef = serde_json::from_str(json)?;
        FacilityTable::from_def(&def)
    }

    /// Canonical name for the first (most specific) key contained in
    /// the given text. Matching is case- and whitespace-insensitive.
    pub fn match_text(&self, text: &str) -> Option<&str> {
        let hay = normalize_key(text);
        if hay.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| hay.contains(key.as_str()))
            .map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (normalized key, canonical name) pairs, most specific first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n.as_str()))
    }
}

fn validate_def(def: &FacilityTableDef) -> Result<(), RouteLogError> {
    if def.entries.is_empty() {
        return Err(RouteLogError::FacilitiesInvalid(
            "entries must not be empty".into(),
        ));
    }

    for entry in &def.entries {
        if normalize_key(&entry.key).is_empty() {
            return Err(RouteLogError::FacilitiesInvalid(format!(
                "entry for '{}' has an empty key",
                entry.name
            )));
        }
        if entry.name.trim().is_empty() {
            return Err(RouteLogError::FacilitiesInvalid(format!(
                "key '{}' maps to an empty name",
                entry.key
            )));
        }
    }

    Ok(())
}
