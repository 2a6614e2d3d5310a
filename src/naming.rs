//! URL and file-name conventions for the two languages.
//!
//! The same logical route has two spellings depending on where the site
//! runs:
//!
//! | Route | Server, English | Server, Russian | Static, English | Static, Russian |
//! |-------|-----------------|-----------------|-----------------|-----------------|
//! | `/` | `/` | `/?lang=ru` | `/index.html` | `/index_ru.html` |
//! | `/features` | `/features` | `/features?lang=ru` | `/features/index.html` | `/features/index_ru.html` |
//!
//! The root route is special-cased: it never becomes `/rootindex.html` or
//! `//index.html`.
//!
//! [`sibling_path`] mirrors the switch script injected into static pages,
//! so the exporter can check that every toggle lands on a real file.

use crate::types::Language;

pub const ROOT: &str = "/";

/// Link to `route` as the live server spells it for `lang`.
pub fn dynamic_href(route: &str, lang: Language) -> String {
    if lang.is_primary() {
        route.to_string()
    } else {
        format!("{}?lang={}", route, lang.code())
    }
}

/// Link to the exported file for `route` in `lang`.
pub fn static_href(route: &str, lang: Language) -> String {
    let dir = route.trim_end_matches('/');
    format!("{}/{}", dir, lang.index_file())
}

/// Move a root-relative `path` under `base_url`, the prefix an export is
/// served from (`/model-renderer/`). With the default base `/` the path is
/// returned unchanged.
pub fn with_base(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path.trim_start_matches('/'))
}

/// Root-relative form of `path`, or `None` when it lies outside `base_url`.
pub fn strip_base<'a>(base_url: &str, path: &'a str) -> Option<&'a str> {
    let rest = path.strip_prefix(base_url.trim_end_matches('/'))?;
    rest.starts_with('/').then_some(rest)
}

/// Language of an exported file, judged by its suffix.
pub fn language_of(path: &str) -> Language {
    if path.contains("_ru.html") {
        Language::Russian
    } else {
        Language::English
    }
}

/// Where the language toggle on the page at `path` leads.
///
/// - `/index.html` and `/` lead to `/index_ru.html`, `/index_ru.html` back
///   to `/index.html`;
/// - a path ending in `/` gets the other language's index file appended;
/// - otherwise the first `.html` gains the `_ru` suffix, or the first
///   `_ru.html` loses it.
///
/// A path without `.html` is returned unchanged.
pub fn sibling_path(path: &str) -> String {
    let current = language_of(path);
    if path == "/" || path == "/index.html" {
        return "/index_ru.html".to_string();
    }
    if path == "/index_ru.html" {
        return "/index.html".to_string();
    }
    if path.ends_with('/') {
        return format!("{}{}", path, current.other().index_file());
    }
    match current {
        Language::Russian => path.replacen("_ru.html", ".html", 1),
        Language::English => path.replacen(".html", "_ru.html", 1),
    }
}
