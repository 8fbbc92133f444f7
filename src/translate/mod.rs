//! Text translation for the company description.
//!
//! [`TranslationClient::translate`] never fails. It returns a [`Translation`]
//! that the caller turns into display text with [`Translation::into_text`],
//! which falls back to the untranslated original when the provider failed.

pub mod google;

pub use google::{GoogleTranslator, GoogleTranslatorBuilder};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// The provider translated the text.
    Translated(String),
    /// Nothing to translate: blank text, or source and target are the same
    /// language. The provider was not contacted.
    Unchanged(String),
    Failed { original: String, reason: String },
}

impl Translation {
    /// `true` only when the provider actually produced the text.
    pub fn is_translated(&self) -> bool {
        matches!(self, Translation::Translated(_))
    }

    /// Text to display: the translation, or the original otherwise.
    pub fn text(&self) -> &str {
        match self {
            Translation::Translated(text) | Translation::Unchanged(text) => text,
            Translation::Failed { original, .. } => original,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(text) | Translation::Unchanged(text) => text,
            Translation::Failed { original, .. } => original,
        }
    }
}

// ---------------------------------------------------------------------------
// TranslationClient
// ---------------------------------------------------------------------------

pub trait TranslationClient: Send + Sync {
    /// Translate `text` from `source` (a language code or `"auto"`) into
    /// `target`.
    fn try_translate(&self, text: &str, source: &str, target: &str) -> Result<String>;

    /// Translate without failing.
    ///
    /// Blank text and identical source and target languages are returned
    /// unchanged without contacting the provider.
    fn translate(&self, text: &str, source: &str, target: &str) -> Translation {
        if text.trim().is_empty() || source.eq_ignore_ascii_case(target) {
            return Translation::Unchanged(text.to_string());
        }
        match self.try_translate(text, source, target) {
            Ok(translated) => Translation::Translated(translated),
            Err(e) => {
                log::warn!("translation {source}->{target} failed, keeping original text: {e}");
                Translation::Failed {
                    original: text.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
