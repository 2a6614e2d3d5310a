//! Subproject pages.
//!
//! Bodies are written in Markdown under `content/subprojects/` (one file per
//! language), embedded at compile time and converted with pulldown-cmark.
//! Links inside the Markdown use the live server's spelling (`/examples`,
//! `/examples?lang=ru`); the exporter rewrites them like any other link.

use crate::types::{Language, PageData};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

struct Subproject {
    name: &'static str,
    repository: &'static str,
    body_en: &'static str,
    body_ru: &'static str,
}

const MR_GRAPHICS: Subproject = Subproject {
    name: "mr-graphics",
    repository: "https://github.com/model-renderer/mr-graphics",
    body_en: include_str!("../../content/subprojects/mr-graphics.en.md"),
    body_ru: include_str!("../../content/subprojects/mr-graphics.ru.md"),
};

const MR_IMPORTER: Subproject = Subproject {
    name: "mr-importer",
    repository: "https://github.com/model-renderer/mr-importer",
    body_en: include_str!("../../content/subprojects/mr-importer.en.md"),
    body_ru: include_str!("../../content/subprojects/mr-importer.ru.md"),
};

const MR_CONTRACTOR: Subproject = Subproject {
    name: "mr-contractor",
    repository: "https://github.com/model-renderer/mr-contractor",
    body_en: include_str!("../../content/subprojects/mr-contractor.en.md"),
    body_ru: include_str!("../../content/subprojects/mr-contractor.ru.md"),
};

const MR_MATH: Subproject = Subproject {
    name: "mr-math",
    repository: "https://github.com/model-renderer/mr-math",
    body_en: include_str!("../../content/subprojects/mr-math.en.md"),
    body_ru: include_str!("../../content/subprojects/mr-math.ru.md"),
};

pub fn mr_graphics(data: &PageData<'_>) -> Markup {
    render(&MR_GRAPHICS, data.lang)
}

pub fn mr_importer(data: &PageData<'_>) -> Markup {
    render(&MR_IMPORTER, data.lang)
}

pub fn mr_contractor(data: &PageData<'_>) -> Markup {
    render(&MR_CONTRACTOR, data.lang)
}

pub fn mr_math(data: &PageData<'_>) -> Markup {
    render(&MR_MATH, data.lang)
}

fn render(subproject: &Subproject, lang: Language) -> Markup {
    let (body, repository_label) = match lang {
        Language::English => (subproject.body_en, "Repository"),
        Language::Russian => (subproject.body_ru, "Репозиторий"),
    };

    html! {
        article.subproject {
            header.subproject-header {
                h1 { code { (subproject.name) } }
                a.repository href=(subproject.repository) target="_blank" rel="noopener" {
                    (repository_label)
                }
            }
            div.prose { (PreEscaped(markdown_to_html(body))) }
        }
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}
