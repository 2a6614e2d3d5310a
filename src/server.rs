//! Live HTTP server.
//!
//! Every page of the [`Site`] is mounted at its route and rendered on
//! request in the language named by `?lang=`. Links in served pages keep
//! their dynamic `?lang=ru` form, so no rewriting happens here. Redirect
//! routes answer `307` to their target in the same language, and
//! `/assets/*` is served straight from the assets directory.
//!
//! Every response passes through request tracing, a CORS layer allowing
//! `GET` and `OPTIONS` from any origin, and a panic guard that turns a
//! panicking handler into a `500`.
//!
//! ```text
//! GET /features?lang=ru ──► Page "features" ──► Templates::render ──► 200 text/html
//! GET /docs?lang=ru     ──► Redirect "docs" ──► 307 Location: /?lang=ru
//! GET /assets/css/...   ──► ServeDir(assets_dir)
//! ```

use crate::naming::dynamic_href;
use crate::pages::{Page, Site};
use crate::templates::{RenderError, Templates};
use crate::types::{Language, PageData};
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use chrono::Datelike;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Shared, read-only state built once at startup.
pub struct AppState {
    pub site: Site,
    pub templates: Templates,
    pub base_url: String,
}

/// Query parameters in request order. A repeated `lang` is not an error:
/// the first one wins.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct LangQuery(Vec<(String, String)>);

impl LangQuery {
    fn language(&self) -> Language {
        let lang = self.0.iter().find(|(key, _)| key == "lang");
        Language::from_query(lang.map(|(_, value)| value.as_str()))
    }
}

/// Build the router for `state`, serving static files from `assets_dir`.
pub fn router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    let mut router = Router::new();

    for &page in state.site.pages() {
        router = router.route(
            page.route,
            get(
                move |State(state): State<Arc<AppState>>, Query(query): Query<LangQuery>| async move {
                    render_page(&state, page, query.language())
                },
            ),
        );
    }

    for &redirect in state.site.redirects() {
        let target = redirect.target;
        router = router.route(
            redirect.route,
            get(move |Query(query): Query<LangQuery>| async move {
                Redirect::temporary(&dynamic_href(target, query.language()))
            }),
        );
    }

    let router = router
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state);
    with_middleware(router)
}

fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .max_age(Duration::from_secs(300));

    router
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn render_page(state: &AppState, page: &Page, lang: Language) -> Result<Html<String>, ServerError> {
    let data = PageData {
        title: page.title,
        lang,
        year: chrono::Local::now().year(),
        base_url: &state.base_url,
    };
    Ok(Html(state.templates.render(page.template, &data)?))
}

/// Serve until Ctrl-C.
pub async fn run(
    state: Arc<AppState>,
    assets_dir: &Path,
    host: &str,
    port: u16,
) -> Result<(), ServerError> {
    let app = router(state, assets_dir);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::crate_assets_dir;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn app_with(site: Site) -> Router {
        let state = Arc::new(AppState {
            site,
            templates: Templates::standard(),
            base_url: "/".to_string(),
        });
        router(state, &crate_assets_dir())
    }

    fn app() -> Router {
        app_with(Site::standard())
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Response) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        (response.status(), response)
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn every_page_is_served() {
        for page in Site::standard().pages() {
            let (status, _) = send(app(), page.route).await;
            assert_eq!(status, StatusCode::OK, "{}", page.route);
        }
    }

    #[tokio::test]
    async fn lang_query_selects_russian() {
        let (status, response) = send(app(), "/features?lang=ru").await;
        assert_eq!(status, StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"<html lang="ru">"#));
        assert!(html.contains(r#"href="/examples?lang=ru""#));
    }

    #[tokio::test]
    async fn unknown_lang_falls_back_to_english() {
        let (_, response) = send(app(), "/examples?lang=de").await;
        let html = body_text(response).await;
        assert!(html.contains(r#"<html lang="en">"#));
    }

    #[tokio::test]
    async fn served_pages_keep_dynamic_links() {
        let (_, response) = send(app(), "/?lang=ru").await;
        let html = body_text(response).await;
        assert!(!html.contains("index_ru.html"));
        assert!(html.contains("switchLanguage"));
    }

    #[tokio::test]
    async fn repeated_lang_takes_first_value() {
        let (status, response) = send(app(), "/features?lang=ru&lang=en").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body_text(response).await.contains(r#"<html lang="ru">"#));

        let (status, response) = send(app(), "/docs?lang=en&lang=ru").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn malformed_lang_falls_back_to_english() {
        for uri in ["/features?lang", "/features?lang=%FF", "/features?=ru&x"] {
            let (status, response) = send(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body_text(response).await.contains(r#"<html lang="en">"#), "{uri}");
        }
    }

    #[tokio::test]
    async fn redirects_preserve_language() {
        let (status, response) = send(app(), "/docs?lang=ru").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/?lang=ru");

        let (status, response) = send(app(), "/download").await;
        assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn assets_are_served() {
        let (status, response) = send(app(), "/assets/css/site.css").await;
        assert_eq!(status, StatusCode::OK);
        let expected = std::fs::read_to_string(crate_assets_dir().join("css/site.css")).unwrap();
        assert_eq!(body_text(response).await, expected);
    }

    #[tokio::test]
    async fn preflight_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/features")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "300");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("GET") && methods.contains("OPTIONS"), "{methods}");
    }

    #[tokio::test]
    async fn cross_origin_get_is_allowed() {
        let request = Request::builder()
            .uri("/examples")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn panicking_handler_becomes_internal_error() {
        async fn boom() -> &'static str {
            panic!("boom")
        }
        let app = with_middleware(Router::new().route("/boom", axum::routing::get(boom)));
        let (status, _) = send(app, "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (status, _) = send(app(), "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn render_failure_is_internal_error() {
        static BROKEN: Page = Page {
            name: "broken",
            route: "/broken",
            dir: "broken",
            template: "no-such-template",
            title: "Broken",
        };
        let (status, response) = send(app_with(Site::new(vec![&BROKEN], vec![])), "/broken").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "Render error: template not found: no-such-template"
        );
    }
}
