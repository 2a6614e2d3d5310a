//! Static export for GitHub Pages.
//!
//! Mirrors the live server's routes as a directory tree in which every
//! route is a directory holding one file per language:
//!
//! ```text
//! docs/
//! ├── .nojekyll                     # GitHub Pages: serve files as-is
//! ├── index.html                    # Home, English
//! ├── index_ru.html                 # Home, Russian
//! ├── features/
//! │   ├── index.html
//! │   └── index_ru.html
//! ├── docs/                         # Redirect stubs back to the home page
//! │   ├── index.html
//! │   └── index_ru.html
//! ├── subprojects/
//! │   └── mr-graphics/
//! │       ├── index.html
//! │       └── index_ru.html
//! └── assets/                       # Byte-for-byte copy of the assets dir
//! ```
//!
//! Each page is rendered once per language and passed through the
//! [`LinkRewriter`] before it is written. Any I/O or template failure
//! aborts the export; there is no partial-output recovery.
//!
//! After writing, every exported HTML file is audited for leftover
//! template markers, internal links without a target file and a missing
//! language sibling. Findings go into the [`ExportReport`]; they do not
//! fail the export.

use crate::naming::{self, static_href, with_base};
use crate::pages::Site;
use crate::rewrite::{DeployMode, LinkRewriter};
use crate::templates::{RenderError, Templates};
use crate::types::{Language, PageData};
use maud::{DOCTYPE, Markup, html};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Attach the path an I/O call was working on.
fn at(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Inputs of one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub base_url: String,
    /// Year printed in page footers.
    pub year: i32,
}

/// What an export wrote. Paths are relative to the output directory.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output_dir: PathBuf,
    pub pages: Vec<ExportedPage>,
    pub redirects: Vec<ExportedRedirect>,
    pub assets_copied: usize,
    pub findings: Vec<AuditFinding>,
}

#[derive(Debug, Clone)]
pub struct ExportedPage {
    pub name: &'static str,
    pub title: &'static str,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ExportedRedirect {
    pub file: PathBuf,
    pub target: String,
}

/// A problem the audit found in an exported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditFinding {
    /// The file still contains a `{{` template marker.
    UnresolvedMarker { file: PathBuf },
    /// A root-relative link whose target is not in the tree.
    DanglingLink { file: PathBuf, href: String },
    /// The language toggle would lead to a file that does not exist.
    MissingSibling { file: PathBuf, sibling: String },
}

impl std::fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditFinding::UnresolvedMarker { file } => {
                write!(f, "{}: unresolved template marker", file.display())
            }
            AuditFinding::DanglingLink { file, href } => {
                write!(f, "{}: link to missing {}", file.display(), href)
            }
            AuditFinding::MissingSibling { file, sibling } => {
                write!(f, "{}: language sibling {} missing", file.display(), sibling)
            }
        }
    }
}

impl ExportReport {
    /// Every HTML file written, pages first.
    pub fn html_files(&self) -> impl Iterator<Item = &Path> {
        self.pages
            .iter()
            .flat_map(|p| p.files.iter())
            .chain(self.redirects.iter().map(|r| &r.file))
            .map(PathBuf::as_path)
    }
}

/// Export `site` into `options.output_dir`.
pub fn export(
    site: &Site,
    templates: &Templates,
    options: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let output_dir = options.output_dir.as_path();
    tracing::info!(output = %output_dir.display(), "Building static site");

    setup_directories(site, output_dir)?;
    let assets_copied = copy_assets(&options.assets_dir, &output_dir.join("assets"))?;
    tracing::info!(files = assets_copied, "Copied assets");

    let rewriter = LinkRewriter::for_site(DeployMode::Static, site, &options.base_url);

    let mut pages = Vec::new();
    for page in site.pages() {
        let mut files = Vec::new();
        for lang in Language::ALL {
            let data = PageData {
                title: page.title,
                lang,
                year: options.year,
                base_url: &options.base_url,
            };
            let html = templates.render(page.template, &data)?;
            let html = rewriter.rewrite(&html, lang);

            let relative = page.output_path(lang);
            let path = output_dir.join(&relative);
            fs::write(&path, html).map_err(at(&path))?;
            tracing::info!(page = page.name, lang = lang.code(), file = %relative.display(), "Generated page");
            files.push(relative);
        }
        pages.push(ExportedPage {
            name: page.name,
            title: page.title,
            files,
        });
    }

    let mut redirects = Vec::new();
    for redirect in site.redirects() {
        for lang in Language::ALL {
            let target = with_base(&options.base_url, &redirect_target(redirect.target, lang));
            let relative = redirect.output_path(lang);
            let path = output_dir.join(&relative);
            fs::write(&path, render_redirect(&target).into_string()).map_err(at(&path))?;
            tracing::info!(file = %relative.display(), target = %target, "Generated redirect");
            redirects.push(ExportedRedirect {
                file: relative,
                target,
            });
        }
    }

    let mut report = ExportReport {
        output_dir: output_dir.to_path_buf(),
        pages,
        redirects,
        assets_copied,
        findings: Vec::new(),
    };
    let findings = audit(output_dir, &options.base_url, report.html_files())?;
    report.findings = findings;
    for finding in &report.findings {
        tracing::warn!("{finding}");
    }

    tracing::info!(
        pages = report.pages.len(),
        redirects = report.redirects.len(),
        "Static site generation complete"
    );
    Ok(report)
}

/// Create the output root, one directory per route, and `.nojekyll`.
fn setup_directories(site: &Site, output_dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(output_dir).map_err(at(output_dir))?;
    for dir in site.directories() {
        let path = output_dir.join(dir);
        fs::create_dir_all(&path).map_err(at(&path))?;
    }
    let nojekyll = output_dir.join(".nojekyll");
    fs::write(&nojekyll, b"").map_err(at(&nojekyll))?;
    Ok(())
}

/// Copy `src` into `dst` recursively. Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, ExportError> {
    fs::create_dir_all(dst).map_err(at(dst))?;
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(at(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(at(&target))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Stubs keep the visitor's language: the English one goes to the route
/// itself, the Russian one to the Russian file.
fn redirect_target(route: &str, lang: Language) -> String {
    match lang {
        Language::English => route.to_string(),
        Language::Russian => static_href(route, lang),
    }
}

/// A page whose only job is to send the browser to `target`.
pub fn render_redirect(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(target);
            }
            body {
                p { "Redirecting to " a href=(target) { (target) } }
            }
        }
    }
}

// ============================================================================
// Audit
// ============================================================================

/// Root-relative `href`/`src` of elements that load or link something.
/// `<base>` is not one of them, and neither are protocol-relative URLs.
static LOCAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:a|link|img|script)\s[^>]*?(?:href|src)="(/(?:[^/"][^"]*)?)""#).unwrap()
});

/// Check exported files for template markers, dangling links and missing
/// language siblings. Links are resolved under `base_url`; one pointing
/// outside it is dangling.
pub fn audit<'a>(
    output_dir: &Path,
    base_url: &str,
    files: impl IntoIterator<Item = &'a Path>,
) -> Result<Vec<AuditFinding>, ExportError> {
    let mut findings = Vec::new();
    for file in files {
        let path = output_dir.join(file);
        let html = fs::read_to_string(&path).map_err(at(&path))?;

        if html.contains("{{") {
            findings.push(AuditFinding::UnresolvedMarker {
                file: file.to_path_buf(),
            });
        }

        for capture in LOCAL_LINK_RE.captures_iter(&html) {
            let href = &capture[1];
            if !link_target(output_dir, base_url, href).is_some_and(|t| t.is_file()) {
                findings.push(AuditFinding::DanglingLink {
                    file: file.to_path_buf(),
                    href: href.to_string(),
                });
            }
        }

        let url = with_base(base_url, &url_path(file));
        let sibling = naming::sibling_path(&url);
        if !link_target(output_dir, base_url, &sibling).is_some_and(|t| t.is_file()) {
            findings.push(AuditFinding::MissingSibling {
                file: file.to_path_buf(),
                sibling,
            });
        }
    }
    Ok(findings)
}

/// File a root-relative link points at inside the export, or `None` when
/// the link leaves `base_url`.
fn link_target(output_dir: &Path, base_url: &str, href: &str) -> Option<PathBuf> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let path = naming::strip_base(base_url, path)?.trim_start_matches('/');
    if path.is_empty() || path.ends_with('/') {
        Some(output_dir.join(path).join("index.html"))
    } else {
        Some(output_dir.join(path))
    }
}

/// `/`-separated form of a relative path.
fn url_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Tests
// ============================================================================
