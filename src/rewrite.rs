//! Link rewriting for static exports.
//!
//! Rendered pages link each other the way the live server expects
//! (`/features?lang=ru`) and switch language by toggling the `lang` query
//! parameter. A static host has neither query-based routing nor language
//! negotiation, so before a page is written to disk every such link is
//! replaced by the path of the exported file (`/features/index_ru.html`),
//! and the switch script is replaced by one that derives the sibling file
//! name from the `_ru` suffix.
//!
//! # The rule table
//!
//! Rewriting is a single pass over an ordered [`RewriteRule`] table. Order
//! is part of the data:
//!
//! 1. `<base href>` left unresolved by a template;
//! 2. the `switchLanguage()` function;
//! 3. template-conditional nav links, for every route;
//! 4. explicit `?lang=ru` links, for every route;
//! 5. bare and trailing-slash links, for every route except the root;
//! 6. root links on anchors (the `<base>` element keeps `href="/"`);
//! 7. asset links, when the export lives under a base URL other than `/`;
//! 8. template-conditional toggle flag and label.
//!
//! Page links resolve under the base URL too: with `/model-renderer/`,
//! `/features` becomes `/model-renderer/features/index.html`.
//!
//! Maud output never carries Go-template markers (`{{ .BaseURL }}`,
//! `{{if eq .Lang …}}`), so rules 1, 3 and 8 only fire on HTML produced
//! from the older template sources.
//!
//! Conditional patterns come before the bare patterns that could otherwise
//! shadow them. Every replacement is a fixed point of the whole table, so
//! rewriting an already rewritten page changes nothing. A pattern that does
//! not occur is skipped silently.

use crate::i18n::strings;
use crate::naming::{ROOT, dynamic_href, static_href, with_base};
use crate::pages::Site;
use crate::types::Language;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Where the rendered HTML is going to be served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// The live server resolves languages per request; nothing to rewrite.
    Server,
    /// Files on a static host.
    Static,
}

/// The whole `switchLanguage` function, whichever version is present.
static SWITCH_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function switchLanguage\(\) \{[\s\S]*?window\.location\.href = [\s\S]*?\}")
        .unwrap()
});

/// Root links on anchors only.
static ROOT_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(<a\s[^>]*)href="/""#).unwrap());

/// Switch script for static hosting: the sibling of `name.html` is
/// `name_ru.html` and vice versa.
pub const STATIC_SWITCH_SCRIPT: &str = r#"function switchLanguage() {
    const path = window.location.pathname;
    const isRussian = path.includes('_ru.html');

    let newPath = isRussian
        ? path.replace('_ru.html', '.html')
        : path.replace('.html', '_ru.html');

    if (path === '/' || path === '/index.html') {
        newPath = '/index_ru.html';
    } else if (path === '/index_ru.html') {
        newPath = '/index.html';
    } else if (path.endsWith('/')) {
        newPath = path + (isRussian ? 'index.html' : 'index_ru.html');
    }

    window.location.href = newPath;
}"#;

const TEMPLATED_BASE: &str = r#"<base href="{{ .BaseURL }}">"#;
const TEMPLATED_SWITCH_LABEL: &str = r#"{{template "lang.switch" .}}"#;

#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String),
    /// Replacements may refer to capture groups (`${1}`).
    Pattern(Regex),
}

/// One entry of the rewrite table.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    matcher: Matcher,
    primary: String,
    secondary: String,
}

impl RewriteRule {
    pub fn literal(pattern: impl Into<String>, replacement: impl Fn(Language) -> String) -> Self {
        Self::new(Matcher::Literal(pattern.into()), replacement)
    }

    pub fn pattern(regex: Regex, replacement: impl Fn(Language) -> String) -> Self {
        Self::new(Matcher::Pattern(regex), replacement)
    }

    fn new(matcher: Matcher, replacement: impl Fn(Language) -> String) -> Self {
        Self {
            matcher,
            primary: replacement(Language::English),
            secondary: replacement(Language::Russian),
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn replacement(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.primary,
            Language::Russian => &self.secondary,
        }
    }

    /// Apply the rule to a page in `lang`. Borrowed output means no match.
    pub fn apply<'a>(&self, html: &'a str, lang: Language) -> Cow<'a, str> {
        let replacement = self.replacement(lang);
        match &self.matcher {
            Matcher::Literal(needle) if html.contains(needle.as_str()) => {
                Cow::Owned(html.replace(needle.as_str(), replacement))
            }
            Matcher::Literal(_) => Cow::Borrowed(html),
            Matcher::Pattern(regex) => regex.replace_all(html, replacement),
        }
    }
}

/// An ordered rewrite table for one deployment mode.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    rules: Vec<RewriteRule>,
}

impl LinkRewriter {
    /// Table covering every route of `site`.
    pub fn for_site(mode: DeployMode, site: &Site, base_url: &str) -> Self {
        Self::new(mode, site.routes(), base_url)
    }

    pub fn new<'r>(
        mode: DeployMode,
        routes: impl IntoIterator<Item = &'r str>,
        base_url: &str,
    ) -> Self {
        if mode == DeployMode::Server {
            return Self { rules: Vec::new() };
        }
        let routes: Vec<&str> = routes.into_iter().collect();
        let href = |path: &str| format!(r#"href="{path}""#);
        let link =
            |route: &str, lang: Language| href(&with_base(base_url, &static_href(route, lang)));

        let mut rules = vec![
            RewriteRule::literal(TEMPLATED_BASE, |_| format!(r#"<base href="{base_url}">"#)),
            RewriteRule::pattern(SWITCH_FUNCTION_RE.clone(), |_| {
                STATIC_SWITCH_SCRIPT.replace('$', "$$")
            }),
        ];

        for &route in &routes {
            let secondary = dynamic_href(route, Language::Russian);
            let templated = [
                r#"href="{{if eq .Lang "ru"}}"#,
                secondary.as_str(),
                "{{else}}",
                route,
                r#"{{end}}""#,
            ]
            .concat();
            rules.push(RewriteRule::literal(templated, |lang| link(route, lang)));
        }

        for &route in &routes {
            let secondary = link(route, Language::Russian);
            rules.push(RewriteRule::literal(
                href(&dynamic_href(route, Language::Russian)),
                |_| secondary.clone(),
            ));
        }

        for &route in routes.iter().filter(|route| **route != ROOT) {
            rules.push(RewriteRule::literal(href(route), |lang| link(route, lang)));
            rules.push(RewriteRule::literal(href(&format!("{route}/")), |lang| {
                link(route, lang)
            }));
        }

        rules.push(RewriteRule::pattern(ROOT_ANCHOR_RE.clone(), |lang| {
            format!("${{1}}{}", link(ROOT, lang).replace('$', "$$"))
        }));

        if base_url != ROOT {
            for attr in ["href", "src"] {
                rules.push(RewriteRule::literal(format!(r#"{attr}="/assets/"#), |_| {
                    format!(r#"{attr}="{}"#, with_base(base_url, "/assets/"))
                }));
            }
        }

        let templated_flag = [
            r#"{{if eq .Lang "en"}}"#,
            strings(Language::Russian).flag,
            "{{else}}",
            strings(Language::English).flag,
            "{{end}}",
        ]
        .concat();
        rules.push(RewriteRule::literal(templated_flag, |lang| {
            strings(lang.other()).flag.to_string()
        }));
        rules.push(RewriteRule::literal(TEMPLATED_SWITCH_LABEL, |lang| {
            strings(lang.other()).language_name.to_string()
        }));

        Self { rules }
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Run the whole table over a page rendered in `lang`.
    pub fn rewrite(&self, html: &str, lang: Language) -> String {
        let mut out = html.to_string();
        for rule in &self.rules {
            let next = match rule.apply(&out, lang) {
                Cow::Borrowed(_) => None,
                Cow::Owned(rewritten) => Some(rewritten),
            };
            if let Some(next) = next {
                out = next;
            }
        }
        out
    }
}
