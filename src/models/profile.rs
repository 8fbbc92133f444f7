use serde::{Deserialize, Serialize};

use crate::locale::{Locale, Strings};

// ---------------------------------------------------------------------------
// RawProfile — Profile fields as reported by the provider
// ---------------------------------------------------------------------------

/// Company fields exactly as the provider returned them. Any of them may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// CompanyProfile — Resolved profile with placeholders filled in
// ---------------------------------------------------------------------------

/// Company metadata shown at the top of the dashboard.
///
/// Every field is always populated: missing or blank provider values are
/// replaced by the placeholders of a [`Strings`] catalogue when converting
/// from [`RawProfile`]. The plain `From` conversion uses English.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub sector: String,
    pub description: String,
}

impl From<RawProfile> for CompanyProfile {
    fn from(raw: RawProfile) -> Self {
        Self::from_raw(raw, Locale::default().strings())
    }
}

impl CompanyProfile {
    pub fn from_raw(raw: RawProfile, strings: &Strings) -> Self {
        Self {
            name: or_placeholder(raw.name, strings.name_placeholder),
            sector: or_placeholder(raw.sector, strings.sector_placeholder),
            description: or_placeholder(raw.description, strings.description_placeholder),
        }
    }

    /// Return a copy with the description replaced.
    pub fn with_description(self, description: String) -> Self {
        Self {
            description,
            ..self
        }
    }
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => placeholder.to_string(),
    }
}

// ---------------------------------------------------------------------------
// ProfileLookup — Outcome of a non-failing profile request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(CompanyProfile),
    Unavailable { reason: String },
}

impl ProfileLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, ProfileLookup::Found(_))
    }
}
