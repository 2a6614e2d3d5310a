//! Page templates.
//!
//! Templates are [maud](https://maud.lambda.xyz/) functions, compiled into
//! the binary and looked up by id at runtime. Each one renders the `main`
//! content of a page; [`layout::document`] wraps it in the shared head,
//! navigation bar, language toggle, footer and switch script.
//!
//! The registry is built once ([`Templates::standard`]) and never mutated
//! afterwards, so the live server shares it between requests without
//! locking.
//!
//! Rendered HTML is in its *dynamic* form: links select the language with
//! `?lang=ru`, as the live server expects. The static exporter rewrites
//! that form with [`crate::rewrite::LinkRewriter`].

pub mod layout;

mod examples;
mod features;
mod home;
mod subprojects;

use crate::types::PageData;
use maud::Markup;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),
}

/// Renders the body of one page.
pub type TemplateFn = fn(&PageData<'_>) -> Markup;

/// Immutable map from template id to template.
pub struct Templates {
    bodies: HashMap<&'static str, TemplateFn>,
}

impl Templates {
    /// The templates of every page in [`crate::pages::PAGES`].
    pub fn standard() -> Self {
        let mut bodies: HashMap<&'static str, TemplateFn> = HashMap::new();
        bodies.insert("home", home::render);
        bodies.insert("features", features::render);
        bodies.insert("examples", examples::render);
        bodies.insert("mr-graphics", subprojects::mr_graphics);
        bodies.insert("mr-importer", subprojects::mr_importer);
        bodies.insert("mr-contractor", subprojects::mr_contractor);
        bodies.insert("mr-math", subprojects::mr_math);
        Self { bodies }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bodies.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.bodies.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Render template `id` inside the layout.
    pub fn render(&self, id: &str, data: &PageData<'_>) -> Result<String, RenderError> {
        let body = self
            .bodies
            .get(id)
            .ok_or_else(|| RenderError::TemplateNotFound(id.to_string()))?;
        Ok(layout::document(data, body(data)).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn data(lang: Language) -> PageData<'static> {
        PageData {
            title: "Features - model-renderer",
            lang,
            year: 2025,
            base_url: "/",
        }
    }

    #[test]
    fn unknown_template_is_an_error() {
        let templates = Templates::standard();
        let err = templates
            .render("blog", &data(Language::English))
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(ref id) if id == "blog"));
        assert_eq!(err.to_string(), "template not found: blog");
    }

    #[test]
    fn standard_ids() {
        assert_eq!(
            Templates::standard().ids(),
            [
                "examples",
                "features",
                "home",
                "mr-contractor",
                "mr-graphics",
                "mr-importer",
                "mr-math"
            ]
        );
    }

    #[test]
    fn every_template_renders_in_both_languages() {
        let templates = Templates::standard();
        for id in templates.ids() {
            for lang in Language::ALL {
                let html = templates.render(id, &data(lang)).unwrap();
                assert!(html.starts_with("<!DOCTYPE html>"), "{id}/{lang}");
                assert!(
                    html.contains(&format!(r#"<html lang="{}">"#, lang.code())),
                    "{id}/{lang}"
                );
                assert!(!html.contains("{{"), "{id}/{lang} has a template marker");
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let templates = Templates::standard();
        let a = templates.render("home", &data(Language::Russian)).unwrap();
        let b = templates.render("home", &data(Language::Russian)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn russian_pages_are_translated() {
        let templates = Templates::standard();
        let en = templates.render("features", &data(Language::English)).unwrap();
        let ru = templates.render("features", &data(Language::Russian)).unwrap();
        assert!(en.contains("Features"));
        assert!(ru.contains("Возможности"));
        assert_ne!(en, ru);
    }
}
