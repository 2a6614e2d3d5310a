//! # model-renderer site
//!
//! The bilingual (English/Russian) project site for model-renderer. One
//! binary serves it two ways:
//!
//! ```text
//! live server      GET /features?lang=ru  ──► render on request
//! --github-pages   docs/features/index_ru.html  ──► pre-rendered tree
//! ```
//!
//! Both modes render the same pages from the same templates. The server
//! keeps links in their dynamic `?lang=ru` form. The exporter writes one
//! file per (page, language) and rewrites every internal link, the base
//! URL and the language toggle so the tree works on a host that cannot
//! run server code.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pages`] | Page and redirect enumeration: routes, titles, output paths |
//! | [`templates`] | Maud page bodies and the shared layout, looked up by id |
//! | [`rewrite`] | Ordered link rewrite table for static output |
//! | [`export`] | Writes the static tree for GitHub Pages and audits it |
//! | [`server`] | axum router rendering pages on request |
//! | [`naming`] | Dynamic and static URL spellings, language siblings |
//! | [`i18n`] | Shared English and Russian interface strings |
//! | [`types`] | `Language` and the per-render `PageData` |
//! | [`config`] | Optional `site.toml` loading and validation |
//! | [`output`] | CLI output formatting for export results |
//!
//! # Design Decisions
//!
//! ## Rewrite After Render
//!
//! Templates are written once, for the server. Static output is derived
//! from the rendered HTML by a fixed, ordered table of textual rules
//! ([`rewrite::LinkRewriter`]). Rules match exact attribute spellings, so
//! an unknown link or an asset path passes through untouched, and every
//! replacement is already in its final form: rewriting twice gives the
//! same bytes as rewriting once.
//!
//! ## Language In The File Name
//!
//! GitHub Pages cannot read query strings, so the language moves into the
//! file name: `features/index.html` and `features/index_ru.html`. The
//! static toggle maps one onto the other ([`naming::sibling_path`]).

pub mod config;
pub mod export;
pub mod i18n;
pub mod naming;
pub mod output;
pub mod pages;
pub mod rewrite;
pub mod server;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
