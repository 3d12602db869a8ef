//! Sources for the display language sent with each lookup.

use std::sync::{Arc, RwLock};

/// Language used when the preference source has nothing set.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Supplies the active display language, read once per lookup request.
pub trait LocaleSource: Send + Sync {
    /// The current language code, or `None` when the user has not picked one.
    fn language(&self) -> Option<String>;
}

/// Resolves the language to send, falling back to [`DEFAULT_LANGUAGE`] for unset or blank values.
pub fn effective_language(source: &dyn LocaleSource) -> String {
    source
        .language()
        .map(|language| language.trim().to_string())
        .filter(|language| !language.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// A language fixed at construction.
#[derive(Debug, Clone)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }
}

impl Default for FixedLocale {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl LocaleSource for FixedLocale {
    fn language(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// User preference store shared between the settings UI and the resolver.
///
/// Changing the language only affects lookups issued afterwards; names already cached keep
/// the language they were resolved in.
#[derive(Debug, Clone, Default)]
pub struct SharedLocale {
    language: Arc<RwLock<Option<String>>>,
}

impl SharedLocale {
    pub fn new(language: Option<String>) -> Self {
        Self {
            language: Arc::new(RwLock::new(language)),
        }
    }

    pub fn set(&self, language: impl Into<String>) {
        let mut current = self
            .language
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(language.into());
    }

    pub fn clear(&self) {
        let mut current = self
            .language
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = None;
    }
}

impl LocaleSource for SharedLocale {
    fn language(&self) -> Option<String> {
        self.language
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
