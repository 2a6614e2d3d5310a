//! Localized strings shared by the layout partials.
//!
//! Page bodies carry their own copy; this table only holds what appears
//! on every page: navigation labels, the language toggle and the footer.

use crate::types::Language;

/// All layout strings for one language.
#[derive(Debug)]
pub struct Strings {
    /// The language's own name, written in that language.
    pub language_name: &'static str,
    /// Flag shown on the toggle that switches *to* this language.
    pub flag: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_features: &'static str,
    pub nav_examples: &'static str,
    pub nav_docs: &'static str,
    pub nav_download: &'static str,
    pub nav_subprojects: &'static str,

    /// Tooltip of the language toggle.
    pub switch_title: &'static str,

    // ==================== Footer ====================
    pub tagline: &'static str,
    pub footer_rights: &'static str,
    pub footer_source: &'static str,
}

static ENGLISH: Strings = Strings {
    language_name: "English",
    flag: "🇺🇸",
    nav_home: "Home",
    nav_features: "Features",
    nav_examples: "Examples",
    nav_docs: "Docs",
    nav_download: "Download",
    nav_subprojects: "Subprojects",
    switch_title: "Switch language",
    tagline: "A modular real-time 3D rendering engine",
    footer_rights: "All rights reserved.",
    footer_source: "Source on GitHub",
};

static RUSSIAN: Strings = Strings {
    language_name: "Русский",
    flag: "🇷🇺",
    nav_home: "Главная",
    nav_features: "Возможности",
    nav_examples: "Примеры",
    nav_docs: "Документация",
    nav_download: "Скачать",
    nav_subprojects: "Подпроекты",
    switch_title: "Сменить язык",
    tagline: "Модульный движок трёхмерной графики реального времени",
    footer_rights: "Все права защищены.",
    footer_source: "Исходный код на GitHub",
};

pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::English => &ENGLISH,
        Language::Russian => &RUSSIAN,
    }
}
