//! Full export of the standard site through the public API.
//!
//! Run with: cargo test --test export_site

use model_renderer_site::export::{ExportOptions, export};
use model_renderer_site::naming::sibling_path;
use model_renderer_site::pages::Site;
use model_renderer_site::rewrite::{DeployMode, LinkRewriter};
use model_renderer_site::templates::Templates;
use model_renderer_site::types::Language;
use regex::Regex;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn export_standard_site() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let output_dir = tmp.path().join("docs");
    let options = ExportOptions {
        output_dir: output_dir.clone(),
        assets_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"),
        base_url: "/".to_string(),
        year: 2025,
    };
    export(&Site::standard(), &Templates::standard(), &options).unwrap();
    (tmp, output_dir)
}

fn read(output_dir: &Path, relative: &Path) -> String {
    std::fs::read_to_string(output_dir.join(relative)).unwrap()
}

/// Anchor targets that point inside the site, excluding assets.
fn page_links(html: &str) -> Vec<String> {
    let re = Regex::new(r#"<a\s[^>]*href="(/[^"]*)""#).unwrap();
    re.captures_iter(html)
        .map(|c| c[1].to_string())
        .filter(|href| !href.starts_with("/assets/"))
        .collect()
}

#[test]
fn links_stay_within_their_language() {
    let (_tmp, output_dir) = export_standard_site();

    for page in Site::standard().pages() {
        for lang in Language::ALL {
            let html = read(&output_dir, &page.output_path(lang));
            let links = page_links(&html);
            assert!(!links.is_empty(), "{} {lang} has no links", page.name);
            for href in links {
                assert!(
                    href.ends_with(lang.index_file()),
                    "{} {lang} links {href}",
                    page.name
                );
                let target = output_dir.join(href.trim_start_matches('/'));
                assert!(target.is_file(), "{} {lang}: {href} missing", page.name);
            }
        }
    }
}

#[test]
fn toggle_targets_exist() {
    let (_tmp, output_dir) = export_standard_site();

    for page in Site::standard().pages() {
        for lang in Language::ALL {
            let url = format!("/{}", page.output_path(lang).to_string_lossy());
            let sibling = sibling_path(&url);
            assert_eq!(
                output_dir.join(sibling.trim_start_matches('/')),
                output_dir.join(page.output_path(lang.other())),
                "{url}"
            );
        }
    }
}

#[test]
fn exported_pages_are_fixed_points() {
    let (_tmp, output_dir) = export_standard_site();
    let site = Site::standard();
    let rewriter = LinkRewriter::for_site(DeployMode::Static, &site, "/");

    for page in site.pages() {
        for lang in Language::ALL {
            let html = read(&output_dir, &page.output_path(lang));
            assert_eq!(rewriter.rewrite(&html, lang), html, "{} {lang}", page.name);
        }
    }
}

#[test]
fn redirect_stubs_point_home() {
    let (_tmp, output_dir) = export_standard_site();

    for redirect in Site::standard().redirects() {
        let en = read(&output_dir, &redirect.output_path(Language::English));
        assert!(en.contains(r#"<meta http-equiv="refresh" content="0; url=/">"#));
        let ru = read(&output_dir, &redirect.output_path(Language::Russian));
        assert!(ru.contains(r#"<meta http-equiv="refresh" content="0; url=/index_ru.html">"#));
    }
}
