//! Shared types used by rendering, rewriting, export and the live server.
//!
//! The site speaks two languages. English is primary: its files carry no
//! suffix (`index.html`) and its dynamic URLs carry no query parameter.
//! Russian is secondary: `index_ru.html` on disk, `?lang=ru` on the server.

use std::fmt;

/// One of the two languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Every language, primary first. Export order follows this slice.
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// ISO 639-1 code, also the value of the `lang` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// File-name suffix inserted before `.html` (`""` or `"_ru"`).
    pub fn suffix(self) -> &'static str {
        match self {
            Language::English => "",
            Language::Russian => "_ru",
        }
    }

    /// Name of the directory index file for this language.
    pub fn index_file(self) -> &'static str {
        match self {
            Language::English => "index.html",
            Language::Russian => "index_ru.html",
        }
    }

    /// The language the toggle switches to.
    pub fn other(self) -> Language {
        match self {
            Language::English => Language::Russian,
            Language::Russian => Language::English,
        }
    }

    pub fn is_primary(self) -> bool {
        self == Language::English
    }

    /// Resolve the `lang` query parameter. Anything but `ru` is English.
    pub fn from_query(value: Option<&str>) -> Language {
        match value {
            Some("ru") => Language::Russian,
            _ => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::Russian => "Russian",
        })
    }
}

/// The record every template is rendered against.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub title: &'a str,
    pub lang: Language,
    pub year: i32,
    /// Value of the document's `<base href>`; always `/` for GitHub Pages.
    pub base_url: &'a str,
}
