//! Localized strings for `detreport-ui`.
//!
//! Messages live in Fluent files embedded at compile time:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/detreport-ui.ftl   (fallback, checked by `fl!` at compile time)
//!   es-ES/detreport-ui.ftl
//! ```
//!
//! Call [`init`] once before rendering (it is idempotent), then look strings
//! up with [`t!`](crate::t):
//! ```ignore
//! ui::i18n::init();
//! let loading = ui::t!("spinner-loading");
//! let byline = ui::t!("report-byline", author = "Shiyuan Zhu");
//! ```
//!
//! Adding a locale means copying the fallback file to `i18n/<lang-id>/`,
//! translating the values and registering the file in
//! `tests/i18n_missing_keys.rs`.
//!
//! Narrative report content (titles, paragraphs) is authored per report and
//! is not routed through Fluent; only UI chrome is.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("key")` / `t!("key", arg = value)`: `fl!` against the shared [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

// Must match the FTL file stem.
const DOMAIN: &str = "detreport-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the user's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
        plain_placeables();
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    plain_placeables();
    Ok(())
}

// Fluent wraps placeables in U+2068/U+2069 by default; bylines and hints are
// plain left-to-right text. Bundles are rebuilt on every select.
fn plain_placeables() {
    LOADER.set_use_isolating(false);
}

/// Tag of the language currently answering lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Embedded language tags, sorted (for the locale picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
