//! The fixed set of pages the site publishes.
//!
//! Every route reachable from the navigation bar is listed here, either as
//! a [`Page`] rendered from a template or as a [`Redirect`] kept alive for
//! old links. The list is plain data: the live server turns it into its
//! routing table, the exporter into a directory tree.

use crate::naming::ROOT;
use std::path::PathBuf;

/// A page rendered from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Short identifier, used in logs and the export summary.
    pub name: &'static str,
    /// Route on the live server.
    pub route: &'static str,
    /// Output directory relative to the export root (`""` for the root).
    pub dir: &'static str,
    /// Id of the template in [`crate::templates::Templates`].
    pub template: &'static str,
    pub title: &'static str,
}

/// A deprecated route that forwards to another one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub name: &'static str,
    pub route: &'static str,
    pub dir: &'static str,
    /// Route the visitor ends up on.
    pub target: &'static str,
}

pub const PAGES: &[Page] = &[
    Page {
        name: "home",
        route: ROOT,
        dir: "",
        template: "home",
        title: "model-renderer",
    },
    Page {
        name: "features",
        route: "/features",
        dir: "features",
        template: "features",
        title: "Features - model-renderer",
    },
    Page {
        name: "examples",
        route: "/examples",
        dir: "examples",
        template: "examples",
        title: "Examples - model-renderer",
    },
    Page {
        name: "mr-graphics",
        route: "/subprojects/mr-graphics",
        dir: "subprojects/mr-graphics",
        template: "mr-graphics",
        title: "mr-graphics - model-renderer",
    },
    Page {
        name: "mr-importer",
        route: "/subprojects/mr-importer",
        dir: "subprojects/mr-importer",
        template: "mr-importer",
        title: "mr-importer - model-renderer",
    },
    Page {
        name: "mr-contractor",
        route: "/subprojects/mr-contractor",
        dir: "subprojects/mr-contractor",
        template: "mr-contractor",
        title: "mr-contractor - model-renderer",
    },
    Page {
        name: "mr-math",
        route: "/subprojects/mr-math",
        dir: "subprojects/mr-math",
        template: "mr-math",
        title: "mr-math - model-renderer",
    },
];

pub const REDIRECTS: &[Redirect] = &[
    Redirect {
        name: "docs",
        route: "/docs",
        dir: "docs",
        target: ROOT,
    },
    Redirect {
        name: "download",
        route: "/download",
        dir: "download",
        target: ROOT,
    },
];

/// Look up a page by name.
pub fn find(name: &str) -> Option<&'static Page> {
    PAGES.iter().find(|p| p.name == name)
}

impl Page {
    /// Output file for `lang`, relative to the export root.
    pub fn output_path(&self, lang: crate::types::Language) -> PathBuf {
        PathBuf::from(self.dir).join(lang.index_file())
    }
}

impl Redirect {
    pub fn output_path(&self, lang: crate::types::Language) -> PathBuf {
        PathBuf::from(self.dir).join(lang.index_file())
    }
}

/// The pages and redirects one export or server instance works with.
#[derive(Debug, Clone)]
pub struct Site {
    pages: Vec<&'static Page>,
    redirects: Vec<&'static Redirect>,
}

impl Site {
    pub fn new(pages: Vec<&'static Page>, redirects: Vec<&'static Redirect>) -> Self {
        Self { pages, redirects }
    }

    /// Every page and redirect.
    pub fn standard() -> Self {
        Self::new(PAGES.iter().collect(), REDIRECTS.iter().collect())
    }

    pub fn pages(&self) -> &[&'static Page] {
        &self.pages
    }

    pub fn redirects(&self) -> &[&'static Redirect] {
        &self.redirects
    }

    /// Routes of pages then redirects, in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages
            .iter()
            .map(|p| p.route)
            .chain(self.redirects.iter().map(|r| r.route))
    }

    /// Output directories that must exist before files are written.
    pub fn directories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages
            .iter()
            .map(|p| p.dir)
            .chain(self.redirects.iter().map(|r| r.dir))
    }

    pub fn has_route(&self, route: &str) -> bool {
        self.routes().any(|r| r == route)
    }
}
