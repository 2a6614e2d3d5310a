//! Shared document layout: head, navigation bar, language toggle, footer.

use crate::i18n::{Strings, strings};
use crate::naming::{ROOT, dynamic_href};
use crate::types::{Language, PageData};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Toggles the `lang` query parameter of the current URL.
///
/// Static exports replace this function wholesale, so the first `}` after
/// the `window.location.href` assignment must close it.
pub const SWITCH_LANGUAGE_SCRIPT: &str = r#"
function switchLanguage() {
    const params = new URLSearchParams(window.location.search);
    if (params.get('lang') === 'ru') {
        params.delete('lang');
    } else {
        params.set('lang', 'ru');
    }
    const query = params.toString();
    window.location.href = window.location.pathname + (query ? '?' + query : '');
}
"#;

const REPOSITORY_URL: &str = "https://github.com/model-renderer/model-renderer";

struct NavLink {
    route: &'static str,
    label: fn(&Strings) -> &'static str,
}

const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        route: ROOT,
        label: |s| s.nav_home,
    },
    NavLink {
        route: "/features",
        label: |s| s.nav_features,
    },
    NavLink {
        route: "/examples",
        label: |s| s.nav_examples,
    },
    NavLink {
        route: "/docs",
        label: |s| s.nav_docs,
    },
    NavLink {
        route: "/download",
        label: |s| s.nav_download,
    },
];

/// Subprojects are listed under their own names in every language.
const SUBPROJECT_LINKS: [(&str, &str); 4] = [
    ("/subprojects/mr-graphics", "mr-graphics"),
    ("/subprojects/mr-importer", "mr-importer"),
    ("/subprojects/mr-contractor", "mr-contractor"),
    ("/subprojects/mr-math", "mr-math"),
];

/// Every route the navigation bar links to.
pub fn nav_routes() -> impl Iterator<Item = &'static str> {
    NAV_LINKS
        .iter()
        .map(|link| link.route)
        .chain(SUBPROJECT_LINKS.iter().map(|(route, _)| *route))
}

/// Wraps page content in the full HTML document.
pub fn document(data: &PageData<'_>, content: Markup) -> Markup {
    let s = strings(data.lang);
    html! {
        (DOCTYPE)
        html lang=(data.lang.code()) {
            head {
                meta charset="UTF-8";
                base href=(data.base_url);
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (data.title) }
                link rel="icon" type="image/svg+xml" href="/assets/img/logo.svg";
                link rel="stylesheet" href="/assets/css/site.css";
            }
            body class="bg-white text-black" {
                (site_header(data.lang, s))
                main.page { (content) }
                (site_footer(data, s))
                script { (PreEscaped(SWITCH_LANGUAGE_SCRIPT)) }
            }
        }
    }
}

fn site_header(lang: Language, s: &Strings) -> Markup {
    html! {
        header.site-header {
            nav.nav-bar {
                a.logo href=(dynamic_href(ROOT, lang)) {
                    img src="/assets/img/logo.svg" alt="" width="28" height="28";
                    span { "model-renderer" }
                }
                ul.nav-links {
                    @for link in &NAV_LINKS {
                        li { a href=(dynamic_href(link.route, lang)) { ((link.label)(s)) } }
                    }
                    li.nav-group {
                        span.nav-group-title { (s.nav_subprojects) }
                        ul.nav-dropdown {
                            @for (route, name) in &SUBPROJECT_LINKS {
                                li { a href=(dynamic_href(route, lang)) { (name) } }
                            }
                        }
                    }
                }
                (language_toggle(lang, s))
            }
        }
    }
}

/// The toggle advertises the language it switches to.
fn language_toggle(lang: Language, s: &Strings) -> Markup {
    let target = strings(lang.other());
    html! {
        button.lang-toggle type="button" onclick="switchLanguage()" title=(s.switch_title) {
            span.lang-flag { (target.flag) }
            " "
            span.lang-name { (target.language_name) }
        }
    }
}

fn site_footer(data: &PageData<'_>, s: &Strings) -> Markup {
    html! {
        footer.site-footer {
            p.tagline { (s.tagline) }
            p {
                "© " (data.year) " model-renderer. " (s.footer_rights)
                " "
                a href=(REPOSITORY_URL) target="_blank" rel="noopener" { (s.footer_source) }
            }
        }
    }
}
