//! Integration test: the full HTTP surface over a real content tree.
//!
//! Builds a catalog from an on-disk fixture, wires the router, and walks
//! every route the site exposes, including the concurrent-read property of
//! the shared catalog.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hunt_core::Catalog;
use hunt_web::{config::ServerConfig, routes::router, state::SiteState};

const LAYOUT: &str = concat!(
    "<html><head><title>{{ meta.title }}</title></head>",
    "<body>{{ content | safe }}",
    "{% for file in files %}<a href=\"{{ file }}\">{{ file }}</a>{% endfor %}",
    "</body></html>",
);

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// Two puzzles: `p1` with an attachment and hints, `p2` bare.
fn fixture() -> (tempfile::TempDir, Arc<SiteState>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    write(&root.join("layout/index.html"), LAYOUT);
    write(&root.join("layout/main.css"), ":root { --ink: #222 }");
    write(&root.join("layout/main.js"), "console.log('hunt');\n");

    write(&root.join("puzzles/index.html"), "<p>index content</p>");
    write(
        &root.join("puzzles/p1/index.html"),
        "<!--\ntitle: \"P One\"\nanswers: [\"correct\"]\nhints: [\"h1\", \"h2\"]\n-->\n<p>p1 body</p>",
    );
    write(&root.join("puzzles/p1/secret.pdf"), "%PDF-1.4 fake");
    write(
        &root.join("puzzles/p2/index.html"),
        "<!--\ntitle: \"P Two\"\nanswers: [\"other\"]\n-->\n<p>p2 body</p>",
    );

    let config = ServerConfig {
        listen_addr: String::new(),
        content_dir: root.join("puzzles"),
        layout_dir: root.join("layout"),
    };
    let catalog = Catalog::load(&config.content_dir).expect("fixture catalog loads");
    (dir, Arc::new(SiteState::new(catalog, &config)))
}

fn app(site: &Arc<SiteState>) -> Router {
    router(Arc::clone(site))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

fn post_guess(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/guess")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("build request")
}

async fn status_of(site: &Arc<SiteState>, req: Request<Body>) -> StatusCode {
    app(site).oneshot(req).await.expect("router call").status()
}

async fn body_of(site: &Arc<SiteState>, req: Request<Body>) -> (StatusCode, String) {
    let resp = app(site).oneshot(req).await.expect("router call");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024)
        .await
        .expect("read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn index_page_renders_shared_content() {
    let (_dir, site) = fixture();
    let (status, body) = body_of(&site, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>index content</p>"));
}

#[tokio::test]
async fn static_assets_are_served_verbatim() {
    let (_dir, site) = fixture();

    let (status, body) = body_of(&site, get("/main.css")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ":root { --ink: #222 }");

    let (status, body) = body_of(&site, get("/main.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('hunt');\n");
}

#[tokio::test]
async fn puzzle_routes_cover_redirect_page_and_not_found() {
    let (_dir, site) = fixture();

    let resp = app(&site).oneshot(get("/puzzles/p1")).await.expect("router call");
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/puzzles/p1/"),
    );

    let (status, body) = body_of(&site, get("/puzzles/p1/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>P One</title>"));
    assert!(body.contains("<p>p1 body</p>"));
    assert!(body.contains("secret.pdf"), "declared attachments appear on the page");

    assert_eq!(status_of(&site, get("/puzzles/nope/")).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn attachments_are_gated_by_the_load_time_list() {
    let (dir, site) = fixture();

    let (status, body) = body_of(&site, get("/puzzles/p1/secret.pdf")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "%PDF-1.4 fake");

    // On disk, but not recorded when the catalog was built.
    write(&dir.path().join("puzzles/p1/passwords.txt"), "hunter2");
    assert_eq!(
        status_of(&site, get("/puzzles/p1/passwords.txt")).await,
        StatusCode::NOT_FOUND,
    );

    // Another puzzle's attachment list does not leak across identifiers.
    assert_eq!(
        status_of(&site, get("/puzzles/p2/secret.pdf")).await,
        StatusCode::NOT_FOUND,
    );
}

#[tokio::test]
async fn attachment_responses_negotiate_content_type_by_extension() {
    let (_dir, site) = fixture();
    let resp = app(&site)
        .oneshot(get("/puzzles/p1/secret.pdf"))
        .await
        .expect("router call");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/pdf"),
    );
}

#[tokio::test]
async fn guess_endpoint_status_matrix() {
    let (_dir, site) = fixture();

    assert_eq!(status_of(&site, post_guess("puzzle=p1&guess=correct")).await, StatusCode::OK);
    assert_eq!(status_of(&site, post_guess("puzzle=p1&guess=wrong")).await, StatusCode::NOT_FOUND);
    assert_eq!(
        status_of(&site, post_guess("puzzle=p1&guess=Correct")).await,
        StatusCode::NOT_FOUND,
        "answer comparison is case-sensitive",
    );
    assert_eq!(status_of(&site, post_guess("puzzle=p1&guess=")).await, StatusCode::BAD_REQUEST);
    assert_eq!(status_of(&site, post_guess("guess=correct")).await, StatusCode::BAD_REQUEST);
    assert_eq!(
        status_of(&site, post_guess("puzzle=nope&guess=correct")).await,
        StatusCode::BAD_REQUEST,
    );

    // Answers never leak across puzzles.
    assert_eq!(
        status_of(&site, post_guess("puzzle=p2&guess=correct")).await,
        StatusCode::NOT_FOUND,
    );
}

#[tokio::test]
async fn concurrent_reads_share_one_immutable_catalog() {
    let (_dir, site) = fixture();
    let before: Vec<String> = site.catalog.puzzles.iter().map(|p| p.id.clone()).collect();

    let (a, b, c, d) = tokio::join!(
        app(&site).oneshot(get("/puzzles/p1/")),
        app(&site).oneshot(get("/puzzles/p2/")),
        app(&site).oneshot(get("/puzzles/p1/secret.pdf")),
        app(&site).oneshot(get("/")),
    );
    assert_eq!(a.expect("p1 page").status(), StatusCode::OK);
    assert_eq!(b.expect("p2 page").status(), StatusCode::OK);
    assert_eq!(c.expect("attachment").status(), StatusCode::OK);
    assert_eq!(d.expect("index").status(), StatusCode::OK);

    let after: Vec<String> = site.catalog.puzzles.iter().map(|p| p.id.clone()).collect();
    assert_eq!(before, after, "catalog contents are identical after concurrent reads");
}
