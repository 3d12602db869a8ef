use dioxus::prelude::*;

use crate::service::names::locale::LocaleSource;

/// Language preference kept in a thread-safe Dioxus signal.
///
/// Settings views write the signal like any other; the resolver reads it when a batch is
/// issued, without subscribing anything to it.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalLocale(SyncSignal<Option<String>>);

impl SignalLocale {
    pub fn new(language: SyncSignal<Option<String>>) -> Self {
        Self(language)
    }

    /// The underlying signal, for settings views that change the language.
    pub fn signal(&self) -> SyncSignal<Option<String>> {
        self.0
    }

    pub fn set(&self, language: Option<String>) {
        let mut signal = self.0;
        signal.set(language);
    }
}

impl LocaleSource for SignalLocale {
    fn language(&self) -> Option<String> {
        // A dropped signal reads as unset, falling back to the default language.
        self.0.try_peek().ok().and_then(|language| language.clone())
    }
}

/// Creates the session's language preference, `init` runs on the first render only.
pub fn use_signal_locale(init: impl FnOnce() -> Option<String>) -> SignalLocale {
    SignalLocale::new(use_signal_sync(init))
}
